use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fmt::{Display, Formatter},
    time::Duration,
};

mod account;
pub mod batch;
mod catalog;
pub mod coins;
pub mod commerce;
mod continents;
mod error;
pub mod gateway;
pub mod language;

pub use batch::{Batch, ChunkFailure, MAX_BATCH_SIZE};
pub use error::{Error, Result};
pub use gateway::{Request, Transport};
pub use language::Language;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("gw2api/", env!("CARGO_PKG_VERSION"));

/// Identifier of one resource instance. Most resources use numbers (floors
/// can be negative), characters use names and quaggans use slugs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Name(String),
}
impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => write!(f, "{s}"),
        }
    }
}
impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}
impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}
impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}
impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}
impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Handle to the API: how requests are sent, in which language, and with which key.
///
/// The key and language are plain fields of this value, never shared state.
/// A handle for another key is a clone made with [`Api::with_token`].
#[derive(Clone)]
pub struct Api<T = ureq::Agent> {
    transport: T,
    server: String,
    language: Language,
    token: Option<String>,
}

pub struct ApiOptions {
    server: String,
    language: Language,
    timeout: Duration,
    token: Option<String>,
    user_agent: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            server: gateway::API_SERVER.into(),
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
            user_agent: USER_AGENT.into(),
        }
    }
}

impl ApiOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
    #[must_use]
    pub fn with_server(self, server: impl Into<String>) -> Self {
        Self { server: server.into(), ..self }
    }
    #[must_use]
    pub fn with_token(self, token: Option<String>) -> Self {
        Self { token, ..self }
    }
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self { user_agent: user_agent.into(), ..self }
    }

    /// Builds a handle backed by a blocking `ureq` agent.
    #[must_use]
    pub fn build(self) -> Api {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .user_agent(self.user_agent.as_str())
            .build();

        self.build_with(ureq::Agent::new_with_config(config))
    }

    pub fn build_with<T: Transport>(self, transport: T) -> Api<T> {
        Api { transport, server: self.server, language: self.language, token: self.token }
    }
}

/// A handle with default options: English, five second timeout, no key.
#[must_use]
pub fn get_api_handle() -> Api {
    ApiOptions::default().build()
}

impl<T: Transport> Api<T> {
    /// One request against `location`, routed to the right API version.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub fn request(&self, location: &str, params: &[(&str, &str)]) -> Result<Value> {
        let request =
            Request::new(&self.server, location, params, self.language, self.token.as_deref());

        tracing::debug!(
            url = %request.url,
            params = request.query.len(),
            authenticated = request.bearer.is_some(),
            "GET"
        );

        self.transport
            .send(&request)
            .inspect_err(|e| tracing::warn!(url = %request.url, "request failed: {e}"))
    }

    /// Fetches any number of ids of `resource`, batching as needed.
    #[must_use]
    pub fn fetch_many<I: Display>(&self, resource: &str, ids: &[I]) -> Batch {
        batch::fetch_many(resource, ids, |location, params| self.request(location, params))
    }

    /// The same handle, using `key` for every following request.
    #[must_use]
    pub fn with_token(self, key: impl Into<String>) -> Self {
        Self { token: Some(key.into()), ..self }
    }

    /// Uses `key` for every following request on this handle and returns its token info.
    ///
    /// Calling it again replaces the previous key: the last call wins.
    /// Handles cloned earlier keep the key they had.
    ///
    /// # Errors
    ///
    /// Fails if the token info cannot be fetched. The key is set regardless.
    pub fn authenticate(&mut self, key: impl Into<String>) -> Result<Value> {
        self.token = Some(key.into());
        self.get_tokeninfo()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn connection_details(&self) -> String {
        let lang = self.language.to_string().to_uppercase();
        match &self.token {
            Some(token) => format!("Connected to '{}' ({lang}). (With token: {token})", self.server),
            None => format!("Connected to '{}' ({lang}).", self.server),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &'static [&'static str] {
        gateway::ENDPOINTS_V2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_decode_numbers_and_names() {
        let ids: Vec<Id> = serde_json::from_value(json!([24, "Some Name", "box"])).unwrap();
        assert_eq!(ids, vec![Id::from(24_u32), Id::from("Some Name"), Id::from("box")]);
        assert_eq!(ids.iter().map(ToString::to_string).collect::<Vec<_>>(), ["24", "Some Name", "box"]);
    }
}
