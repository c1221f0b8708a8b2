//! citysuggest-wasm: WebAssembly city-name autocomplete
//!
//! This crate binds the platform-free controller from `citysuggest-core` to a
//! real page: one `<input>` and one list container (usually a `<ul>`). As the
//! user types, it queries a Nominatim-style place search, deduplicates the
//! city names and renders them as clickable `<li>` entries.
//!
//! What it provides
//! ----------------
//! - Automatic setup on module load (via `#[wasm_bindgen(start)]`): panic hook
//!   and a `log` backend writing to the browser console
//! - `AutocompleteWidget`: attach / detach, current `suggestions()`,
//!   `is_visible()`, `apply_response(json)` for hosts that fetch themselves
//! - `set_log_level("debug")` to see every lookup in the console
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { AutocompleteWidget } from 'citysuggest-wasm';
//!
//! async function main() {
//!   await init();
//!   // <input id="city-input"> and <ul id="suggestions"> must already exist
//!   const widget = new AutocompleteWidget();
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Queries shorter than two characters (after trimming) never hit the network.
//! - A response is only rendered if no newer keystroke was seen since its
//!   request was issued.
//! - Failures are written to `console.error`; the user only sees the list
//!   disappear.
use wasm_bindgen::prelude::*;

mod dom;
mod fetch;
mod listener;
mod logger;
mod widget;

pub use crate::widget::AutocompleteWidget;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::debug!("citysuggest-wasm {} loaded", env!("CARGO_PKG_VERSION"));
}

/// Adjusts console verbosity: `"error"`, `"warn"`, `"info"`, `"debug"`,
/// `"trace"` or `"off"`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level '{level}'")))?;
    logger::init(filter);
    Ok(())
}
