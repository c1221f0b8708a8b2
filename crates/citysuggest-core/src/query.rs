// crates/citysuggest-core/src/query.rs
use crate::config::SuggestConfig;
use crate::error::Result;
use std::fmt;
use url::Url;

/// A trimmed query that passed the minimum-length guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trims `raw` and accepts it if at least `min_len` UTF-16 code units
    /// remain, the same length a browser reports for the input's value.
    ///
    /// ```rust
    /// use citysuggest_core::Query;
    ///
    /// assert!(Query::parse("  e ", 2).is_none());
    /// assert_eq!(Query::parse(" er ", 2).unwrap().as_str(), "er");
    /// ```
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.encode_utf16().count() < min_len {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full GET URL for this query against `config.endpoint`.
    pub fn request_url(&self, config: &SuggestConfig) -> Result<Url> {
        let limit = config.limit.to_string();
        let url = Url::parse_with_params(
            &config.endpoint,
            [
                ("q", self.as_str()),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
            ],
        )?;
        Ok(url)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A lookup the host must perform on behalf of the controller.
///
/// `generation` has to be handed back unchanged with the response so the
/// controller can tell current answers from stale ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub query: Query,
    pub url: Url,
}
