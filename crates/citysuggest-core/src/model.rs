// crates/citysuggest-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One candidate returned by the place-search service.
///
/// Only the fields the widget reads are modelled; anything else in the
/// payload (`place_id`, `display_name`, `lat`, ...) is ignored, whatever its
/// type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub address: Address,
}

/// The `address` block of a [`Place`] (requested with `addressdetails=1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

impl Address {
    /// First non-empty of `city`, `town`, `village`.
    pub fn city_name(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .find(|s| !s.is_empty())
    }
}

impl Place {
    #[inline]
    pub fn city_name(&self) -> Option<&str> {
        self.address.city_name()
    }
}

/// Observable state of the suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Hidden,
    Visible(Vec<String>),
}

impl ListState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ListState::Visible(_))
    }

    /// Entries currently rendered; empty while hidden.
    pub fn entries(&self) -> &[String] {
        match self {
            ListState::Hidden => &[],
            ListState::Visible(entries) => entries,
        }
    }
}
