//! citysuggest-cli
//! ===============
//!
//! Command-line driver for the `citysuggest-core` autocomplete flow.
//!
//! This crate primarily provides a binary (`citysuggest`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! citysuggest suggest ber
//! citysuggest url "são paulo"
//! citysuggest parse saved-response.json
//! ```
//!
//! For the browser widget see `citysuggest-wasm`.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
