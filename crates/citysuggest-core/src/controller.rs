// crates/citysuggest-core/src/controller.rs

//! # Autocomplete Controller
//!
//! The state machine behind the widget. It owns the [`ListState`] and the
//! view, and is fed three kinds of events by its host:
//!
//! - keystrokes ([`Controller::on_input`]),
//! - lookup completions ([`Controller::on_response`]),
//! - clicks ([`Controller::on_entry_click`], [`Controller::on_outside_click`]).
//!
//! The controller never performs I/O itself. Each request it hands out is
//! stamped with a generation; only a response carrying the latest generation
//! is applied, so a slow answer for `"be"` can't overwrite the answer for
//! `"berl"`.

use crate::config::SuggestConfig;
use crate::error::Result;
use crate::model::{ListState, Place};
use crate::query::{LookupRequest, Query};
use crate::search::{collect_city_names, parse_places};
use crate::traits::{PlaceLookup, SuggestionView};

/// What [`Controller::on_response`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The list is visible with this many entries.
    Shown(usize),
    /// The lookup succeeded but yielded no city names; list hidden.
    Empty,
    /// The lookup failed; logged and list hidden.
    Failed,
    /// A newer request was issued since; the response was ignored.
    Stale,
}

#[derive(Debug)]
pub struct Controller<V> {
    config: SuggestConfig,
    view: V,
    state: ListState,
    generation: u64,
}

impl<V: SuggestionView> Controller<V> {
    /// Creates a controller starting in the hidden state.
    ///
    /// The config is trusted as-is; use [`Controller::try_new`] to validate it.
    pub fn new(config: SuggestConfig, view: V) -> Self {
        Self {
            config,
            view,
            state: ListState::Hidden,
            generation: 0,
        }
    }

    pub fn try_new(config: SuggestConfig, view: V) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, view))
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Generation of the most recently issued (or invalidated) request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles a change of the input field.
    ///
    /// Returns `Ok(None)` when the trimmed text is shorter than
    /// `min_query_len`; the list is hidden and any request still in flight
    /// becomes stale. Otherwise returns the request the host should send.
    pub fn on_input(&mut self, raw: &str) -> Result<Option<LookupRequest>> {
        self.generation += 1;

        let Some(query) = Query::parse(raw, self.config.min_query_len) else {
            self.hide();
            return Ok(None);
        };

        let url = query.request_url(&self.config)?;
        log::debug!("lookup #{} for '{}'", self.generation, query);
        Ok(Some(LookupRequest {
            generation: self.generation,
            query,
            url,
        }))
    }

    /// Applies the outcome of the lookup issued as `generation`.
    pub fn on_response(&mut self, generation: u64, result: Result<Vec<Place>>) -> ResponseOutcome {
        if generation != self.generation {
            log::debug!(
                "discarding stale response #{generation} (latest is #{})",
                self.generation
            );
            return ResponseOutcome::Stale;
        }

        let places = match result {
            Ok(places) => places,
            Err(e) => {
                log::error!("city lookup failed: {e}");
                self.hide();
                return ResponseOutcome::Failed;
            }
        };

        let names = collect_city_names(&places);
        self.view.clear();
        if names.is_empty() {
            self.hide();
            return ResponseOutcome::Empty;
        }

        let count = names.len();
        self.view.show(&names);
        self.state = ListState::Visible(names);
        ResponseOutcome::Shown(count)
    }

    /// Handles a click on the entry at `index`: copies its text into the
    /// input and hides the list. Returns the selected name.
    pub fn on_entry_click(&mut self, index: usize) -> Option<String> {
        let name = self.state.entries().get(index).cloned()?;
        self.view.set_input_value(&name);
        self.hide();
        Some(name)
    }

    /// Handles a document-level click. Anything but the input hides the list.
    pub fn on_outside_click(&mut self, target_is_input: bool) {
        if !target_is_input {
            self.hide();
        }
    }

    pub fn hide(&mut self) {
        self.state = ListState::Hidden;
        self.view.hide();
    }

    /// Makes every outstanding request stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Feeds an already-fetched response body through the success path as
    /// if it answered a fresh request.
    pub fn apply_payload(&mut self, body: &str) -> ResponseOutcome {
        self.invalidate();
        let generation = self.generation;
        self.on_response(generation, parse_places(body))
    }

    /// Runs one keystroke end to end against a synchronous service.
    ///
    /// Returns `Ok(None)` if the query was too short to issue a request.
    pub fn run_lookup<L: PlaceLookup>(
        &mut self,
        raw: &str,
        service: &L,
    ) -> Result<Option<ResponseOutcome>> {
        let Some(request) = self.on_input(raw)? else {
            return Ok(None);
        };
        let result = service.lookup(&request);
        Ok(Some(self.on_response(request.generation, result)))
    }
}
