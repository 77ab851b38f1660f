use crate::{Api, Batch, Id, Result, Transport};
use serde_json::Value;
use std::fmt::Display;

// Endpoints that need a key. They are sent with whatever token the handle carries;
// without one the API answers with an error status.

impl<T: Transport> Api<T> {
    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account(&self) -> Result<Value> {
        self.request("account", &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account_bank(&self) -> Result<Value> {
        self.request("account/bank", &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account_dyes(&self) -> Result<Value> {
        self.request("account/dyes", &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account_materials(&self) -> Result<Value> {
        self.request("account/materials", &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account_skins(&self) -> Result<Value> {
        self.request("account/skins", &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_account_wallet(&self) -> Result<Value> {
        self.request("account/wallet", &[])
    }

    /// Name and permissions of the current key.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_tokeninfo(&self) -> Result<Value> {
        self.request("tokeninfo", &[])
    }

    #[must_use]
    pub fn get_characters<I: Display>(&self, names: &[I]) -> Batch {
        self.get_resource("characters", names)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_characters_names(&self) -> Result<Vec<Id>> {
        self.get_resource_ids("characters")
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_character_equipment(&self, name: &str) -> Result<Value> {
        self.request(&character_path(name, "equipment"), &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_character_inventory(&self, name: &str) -> Result<Value> {
        self.request(&character_path(name, "inventory"), &[])
    }

    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_pvp_stats(&self) -> Result<Value> {
        self.request("pvp/stats", &[])
    }

    /// The API keeps only the ten most recent games.
    #[must_use]
    pub fn get_pvp_games<I: Display>(&self, ids: &[I]) -> Batch {
        self.get_resource("pvp/games", ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_pvp_games_ids(&self) -> Result<Vec<Id>> {
        self.get_resource_ids("pvp/games")
    }
}

fn character_path(name: &str, child: &str) -> String {
    format!("characters/{}/{child}", urlencoding::encode(name))
}
