// crates/citysuggest-core/src/lib.rs

//! # citysuggest-core
//!
//! Platform-free logic of a city-name autocomplete widget. The browser binding
//! (`citysuggest-wasm`) and the CLI (`citysuggest-cli`) are thin shells around
//! the [`Controller`] defined here.
//!
//! The flow for one keystroke:
//! 1. [`Controller::on_input`] trims the field text and either hides the list
//!    (query too short) or hands back a [`LookupRequest`].
//! 2. The host performs the HTTP GET described by the request.
//! 3. [`Controller::on_response`] parses, deduplicates and renders through a
//!    [`SuggestionView`], discarding responses that are no longer current.
//!
//! ```rust
//! use citysuggest_core::prelude::*;
//!
//! let mut ctl = Controller::new(SuggestConfig::default(), MemoryView::default());
//! let req = ctl.on_input("ber").unwrap().expect("query is long enough");
//!
//! let payload = r#"[{"address":{"city":"Berlin"}},{"address":{"town":"Bern"}}]"#;
//! ctl.on_response(req.generation, parse_places(payload));
//!
//! assert_eq!(ctl.view().entries, vec!["Berlin", "Bern"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod query;
pub mod search;
pub mod traits;

#[cfg(feature = "fetch")]
#[cfg_attr(docsrs, doc(cfg(feature = "fetch")))]
pub mod client;

pub mod prelude;

// Re-exports
pub use crate::config::SuggestConfig;
pub use crate::controller::{Controller, ResponseOutcome};
pub use crate::error::{Result, SuggestError};
pub use crate::model::{Address, ListState, Place};
pub use crate::query::{LookupRequest, Query};
pub use crate::search::{collect_city_names, parse_places};
pub use crate::traits::{MemoryView, PlaceLookup, SuggestionView};

#[cfg(feature = "fetch")]
pub use crate::client::NominatimClient;
