// crates/citysuggest-core/src/prelude.rs
pub use crate::config::SuggestConfig;
pub use crate::controller::{Controller, ResponseOutcome};
pub use crate::error::{Result, SuggestError};
pub use crate::model::{Address, ListState, Place};
pub use crate::query::{LookupRequest, Query};
pub use crate::search::{collect_city_names, parse_places};
pub use crate::traits::{MemoryView, PlaceLookup, SuggestionView};
