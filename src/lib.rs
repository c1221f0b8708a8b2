//! citysuggest-rs
//!
//! Umbrella crate for the workspace. It re-exports [`citysuggest_core`] so the
//! demos under `demos/` can be run with `cargo run --example <name>`.
pub use citysuggest_core::*;
