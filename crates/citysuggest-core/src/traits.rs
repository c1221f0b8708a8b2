// crates/citysuggest-core/src/traits.rs
use crate::error::Result;
use crate::model::Place;
use crate::query::LookupRequest;

/// The rendering surface the controller drives.
///
/// In the browser this is the `<ul>` plus the `<input>`; in tests and the CLI
/// it is a [`MemoryView`]. Every call fully replaces what was shown before,
/// so implementors never have to patch a partially rendered list.
pub trait SuggestionView {
    /// Replace the list contents with `entries` and make it visible.
    /// Never called with an empty slice.
    fn show(&mut self, entries: &[String]);

    /// Hide the list. Must be safe to call when already hidden.
    fn hide(&mut self);

    /// Drop every rendered entry without touching visibility.
    fn clear(&mut self);

    /// Write `value` into the bound text input.
    fn set_input_value(&mut self, value: &str);
}

/// A synchronous place search. Implemented by the blocking
/// `NominatimClient` (feature `fetch`) and by test doubles.
///
/// The browser binding does not use this trait: its lookups are
/// asynchronous and feed [`crate::Controller::on_response`] directly.
pub trait PlaceLookup {
    fn lookup(&self, request: &LookupRequest) -> Result<Vec<Place>>;
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for &T {
    fn lookup(&self, request: &LookupRequest) -> Result<Vec<Place>> {
        (**self).lookup(request)
    }
}

/// A headless [`SuggestionView`] that records what would be on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    pub entries: Vec<String>,
    pub visible: bool,
    pub input_value: String,
}

impl SuggestionView for MemoryView {
    fn show(&mut self, entries: &[String]) {
        self.entries = entries.to_vec();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn set_input_value(&mut self, value: &str) {
        self.input_value = value.to_string();
    }
}
