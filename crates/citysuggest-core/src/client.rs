// crates/citysuggest-core/src/client.rs
#![cfg(feature = "fetch")]

use crate::config::SuggestConfig;
use crate::error::{Result, SuggestError};
use crate::model::Place;
use crate::query::LookupRequest;
use crate::search::parse_places;
use crate::traits::PlaceLookup;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

/// Blocking client for a Nominatim-compatible `/search` endpoint.
///
/// No timeout, retry or caching is layered on top; the reqwest defaults apply.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: Client,
    user_agent: Option<String>,
}

impl NominatimClient {
    pub fn new(config: &SuggestConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl PlaceLookup for NominatimClient {
    fn lookup(&self, request: &LookupRequest) -> Result<Vec<Place>> {
        let mut builder = self.http.get(request.url.clone());
        if let Some(ua) = &self.user_agent {
            builder = builder.header(USER_AGENT, ua);
        }

        let response = builder
            .send()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;
        parse_places(&body)
    }
}
