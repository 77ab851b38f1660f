use crate::{Api, Batch, Error, Id, Result, Transport};
use serde_json::Value;
use std::fmt::Display;

// Game data resources that take an `ids` parameter and list their ids when given none.

impl<T: Transport> Api<T> {
    /// Objects of `resource` for `ids`. With no ids, whatever the resource lists by default.
    #[must_use]
    pub fn get_resource<I: Display>(&self, resource: &str, ids: &[I]) -> Batch {
        self.fetch_many(resource, ids)
    }

    /// # Errors
    ///
    /// Fails if the request fails or the listing is not a list of ids.
    pub fn get_resource_ids(&self, resource: &str) -> Result<Vec<Id>> {
        let value = self.request(resource, &[])?;
        Ok(serde_json::from_value(value)?)
    }

    /// Every object of `resource`: its id listing first, then the objects in batches.
    ///
    /// # Errors
    ///
    /// Fails if the id listing cannot be fetched. Failed batches are reported in the [`Batch`].
    pub fn get_all(&self, resource: &str) -> Result<Batch> {
        let ids = self.get_resource_ids(resource)?;
        Ok(self.fetch_many(resource, &ids))
    }

    /// Current build id of the game.
    ///
    /// # Errors
    ///
    /// Fails if the request fails or the response has no numeric `id`.
    pub fn get_build(&self) -> Result<u64> {
        self.request("build", &[])?
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::Decode("build has no numeric id".into()))
    }

    /// Ids of recipes that use `item` as an ingredient.
    ///
    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn recipes_by_input(&self, item: impl Display) -> Result<Vec<Id>> {
        let value = self.request("recipes/search", &[("input", item.to_string().as_str())])?;
        Ok(serde_json::from_value(value)?)
    }

    /// Ids of recipes that craft `item`.
    ///
    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn recipes_by_output(&self, item: impl Display) -> Result<Vec<Id>> {
        let value = self.request("recipes/search", &[("output", item.to_string().as_str())])?;
        Ok(serde_json::from_value(value)?)
    }
}

macro_rules! catalog {
    ($($get:ident, $list:ident => $resource:literal;)*) => {
        impl<T: Transport> Api<T> {
            $(
                #[doc = concat!("Entries of `", $resource, "` for `ids`, batched. With no ids, the id listing.")]
                #[must_use]
                pub fn $get<I: Display>(&self, ids: &[I]) -> Batch {
                    self.get_resource($resource, ids)
                }

                #[doc = concat!("Every id of `", $resource, "`.")]
                ///
                /// # Errors
                ///
                /// See [`Api::get_resource_ids`].
                pub fn $list(&self) -> Result<Vec<Id>> {
                    self.get_resource_ids($resource)
                }
            )*
        }
    };
}

catalog! {
    get_achievements, get_achievements_ids => "achievements";
    get_colors, get_colors_ids => "colors";
    get_continents, get_continents_ids => "continents";
    get_currencies, get_currencies_ids => "currencies";
    get_files, get_files_ids => "files";
    get_items, get_items_ids => "items";
    get_maps, get_maps_ids => "maps";
    get_materials, get_materials_ids => "materials";
    get_minis, get_minis_ids => "minis";
    get_quaggans, get_quaggans_ids => "quaggans";
    get_recipes, get_recipes_ids => "recipes";
    get_skins, get_skins_ids => "skins";
    get_specializations, get_specializations_ids => "specializations";
    get_traits, get_traits_ids => "traits";
    get_worlds, get_worlds_ids => "worlds";
}
