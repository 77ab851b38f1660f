use crate::{error::Result, language::Language};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub const API_SERVER: &str = "https://api.guildwars2.com";

/// Locations served by version 2 of the API. Anything else goes to v1.
pub const ENDPOINTS_V2: &[&str] = &[
    "account",
    "account/bank",
    "account/dyes",
    "account/materials",
    "account/skins",
    "account/wallet",
    "achievements",
    "build",
    "characters",
    "colors",
    "commerce",
    "commerce/exchange",
    "commerce/exchange/coins",
    "commerce/exchange/gems",
    "commerce/listings",
    "commerce/prices",
    "commerce/transactions",
    "continents",
    "currencies",
    "files",
    "items",
    "maps",
    "materials",
    "minis",
    "pvp/games",
    "pvp/stats",
    "quaggans",
    "recipes",
    "recipes/search",
    "skins",
    "specializations",
    "tokeninfo",
    "traits",
    "worlds",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

/// Picks the API version for a location by its full path or its first segment,
/// so `characters/Name/equipment` routes the same way as `characters`.
#[must_use]
pub fn api_version(location: &str) -> ApiVersion {
    let root = location.split('/').next().unwrap_or(location);

    if ENDPOINTS_V2.contains(&location) || ENDPOINTS_V2.contains(&root) {
        ApiVersion::V2
    } else {
        ApiVersion::V1
    }
}

/// A fully resolved GET against the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
}

impl Request {
    /// `lang` is always appended after the caller's own parameters.
    #[must_use]
    pub fn new(
        server: &str,
        location: &str,
        params: &[(&str, &str)],
        language: Language,
        token: Option<&str>,
    ) -> Self {
        let version = api_version(location);
        let url = format!("{}/{version}/{location}", server.trim_end_matches('/'));

        let query = params
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .chain(std::iter::once(("lang".to_owned(), language.to_string())))
            .collect();

        Self { url, query, bearer: token.map(str::to_owned) }
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Sends a resolved request and decodes the body as JSON.
pub trait Transport {
    /// # Errors
    ///
    /// Network failures, error statuses, timeouts and undecodable bodies are
    /// all reported through [`crate::Error`].
    fn send(&self, request: &Request) -> Result<Value>;
}

impl Transport for ureq::Agent {
    fn send(&self, request: &Request) -> Result<Value> {
        let mut req = ureq::Agent::get(self, request.url.as_str())
            .header("Accept", "application/json")
            .query_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        if let Some(token) = &request.bearer {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let value = req.call()?.body_mut().read_json::<Value>()?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_known_endpoints_to_v2() {
        assert_eq!(api_version("items"), ApiVersion::V2);
        assert_eq!(api_version("commerce/transactions/current/buys"), ApiVersion::V2);
        assert_eq!(api_version("characters/Some%20Name/equipment"), ApiVersion::V2);
        assert_eq!(api_version("continents/1/floors/0/regions"), ApiVersion::V2);
    }

    #[test]
    fn routes_unknown_endpoints_to_v1() {
        assert_eq!(api_version("events"), ApiVersion::V1);
        assert_eq!(api_version("wvw/matches"), ApiVersion::V1);
    }

    #[test]
    fn builds_url_and_appends_language() {
        let req = Request::new(API_SERVER, "items", &[("ids", "1,2")], Language::Fr, None);

        assert_eq!(req.url, "https://api.guildwars2.com/v2/items");
        assert_eq!(
            req.query,
            vec![("ids".to_owned(), "1,2".to_owned()), ("lang".to_owned(), "fr".to_owned())]
        );
        assert_eq!(req.bearer, None);
    }

    #[test]
    fn carries_token_and_trims_server_slash() {
        let req = Request::new("http://localhost/", "events", &[], Language::En, Some("KEY"));

        assert_eq!(req.url, "http://localhost/v1/events");
        assert_eq!(req.param("lang"), Some("en"));
        assert_eq!(req.bearer.as_deref(), Some("KEY"));
    }
}
