use crate::{Api, Batch, Id, Result, Transport};
use std::fmt::Display;

// continents/{continent}/floors/{floor}/regions/{region}/maps/{map}/{sectors,pois,tasks}

fn floors(continent: u32) -> String {
    format!("continents/{continent}/floors")
}

fn regions(continent: u32, floor: i32) -> String {
    format!("{}/{floor}/regions", floors(continent))
}

fn maps(continent: u32, floor: i32, region: u32) -> String {
    format!("{}/{region}/maps", regions(continent, floor))
}

fn map_child(continent: u32, floor: i32, region: u32, map: u32, child: &str) -> String {
    format!("{}/{map}/{child}", maps(continent, floor, region))
}

impl<T: Transport> Api<T> {
    #[must_use]
    pub fn get_floors<I: Display>(&self, continent: u32, ids: &[I]) -> Batch {
        self.get_resource(&floors(continent), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_floors_ids(&self, continent: u32) -> Result<Vec<Id>> {
        self.get_resource_ids(&floors(continent))
    }

    #[must_use]
    pub fn get_regions<I: Display>(&self, continent: u32, floor: i32, ids: &[I]) -> Batch {
        self.get_resource(&regions(continent, floor), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_regions_ids(&self, continent: u32, floor: i32) -> Result<Vec<Id>> {
        self.get_resource_ids(&regions(continent, floor))
    }

    /// Maps of a region. Not to be confused with [`Api::get_maps`], which is the flat map list.
    #[must_use]
    pub fn get_region_maps<I: Display>(
        &self,
        continent: u32,
        floor: i32,
        region: u32,
        ids: &[I],
    ) -> Batch {
        self.get_resource(&maps(continent, floor, region), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_region_maps_ids(&self, continent: u32, floor: i32, region: u32) -> Result<Vec<Id>> {
        self.get_resource_ids(&maps(continent, floor, region))
    }

    #[must_use]
    pub fn get_sectors<I: Display>(
        &self,
        (continent, floor, region, map): (u32, i32, u32, u32),
        ids: &[I],
    ) -> Batch {
        self.get_resource(&map_child(continent, floor, region, map, "sectors"), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_sectors_ids(&self, (continent, floor, region, map): (u32, i32, u32, u32)) -> Result<Vec<Id>> {
        self.get_resource_ids(&map_child(continent, floor, region, map, "sectors"))
    }

    /// Points of interest: landmarks, vistas and waypoints.
    #[must_use]
    pub fn get_pois<I: Display>(
        &self,
        (continent, floor, region, map): (u32, i32, u32, u32),
        ids: &[I],
    ) -> Batch {
        self.get_resource(&map_child(continent, floor, region, map, "pois"), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_pois_ids(&self, (continent, floor, region, map): (u32, i32, u32, u32)) -> Result<Vec<Id>> {
        self.get_resource_ids(&map_child(continent, floor, region, map, "pois"))
    }

    /// Renown hearts.
    #[must_use]
    pub fn get_tasks<I: Display>(
        &self,
        (continent, floor, region, map): (u32, i32, u32, u32),
        ids: &[I],
    ) -> Batch {
        self.get_resource(&map_child(continent, floor, region, map, "tasks"), ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_tasks_ids(&self, (continent, floor, region, map): (u32, i32, u32, u32)) -> Result<Vec<Id>> {
        self.get_resource_ids(&map_child(continent, floor, region, map, "tasks"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_paths_in_order() {
        assert_eq!(floors(1), "continents/1/floors");
        assert_eq!(regions(1, -1), "continents/1/floors/-1/regions");
        assert_eq!(maps(2, 1, 4), "continents/2/floors/1/regions/4/maps");
        assert_eq!(map_child(1, 1, 4, 15, "pois"), "continents/1/floors/1/regions/4/maps/15/pois");
    }
}
