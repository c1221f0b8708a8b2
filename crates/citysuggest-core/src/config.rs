// crates/citysuggest-core/src/config.rs
use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_INPUT_ID: &str = "city-input";
pub const DEFAULT_LIST_ID: &str = "suggestions";

/// Runtime settings for the autocomplete flow.
///
/// Every field has a default, so a host may pass a partial object:
///
/// ```rust
/// use citysuggest_core::SuggestConfig;
///
/// let cfg: SuggestConfig = serde_json::from_str(r#"{ "debounce_ms": 150 }"#).unwrap();
/// assert_eq!(cfg.limit, 5);
/// assert_eq!(cfg.debounce_ms, 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Place-search endpoint, without query string.
    pub endpoint: String,
    /// Queries shorter than this (after trimming, in characters) never hit the network.
    pub min_query_len: usize,
    /// Maximum number of candidates requested from the service.
    pub limit: usize,
    /// Delay between the last keystroke and the request. 0 fires immediately.
    pub debounce_ms: u32,
    /// Sent as `User-Agent` by native clients. Browsers ignore it.
    pub user_agent: Option<String>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            limit: DEFAULT_LIMIT,
            debounce_ms: 0,
            user_agent: Some(concat!("citysuggest/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl SuggestConfig {
    /// Checks the settings once, up front, so lookups can't fail on them later.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SuggestError::Config(format!(
                "endpoint must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if self.limit == 0 {
            return Err(SuggestError::Config("limit must be at least 1".into()));
        }
        if self.min_query_len == 0 {
            return Err(SuggestError::Config(
                "min_query_len must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}
