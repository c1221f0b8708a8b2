//! Basic usage example for citysuggest-rs
//!
//! Drives the controller through a few keystrokes with a canned service, the
//! way the browser widget does with real `fetch` calls.

use citysuggest_core::prelude::*;

struct Canned;

impl PlaceLookup for Canned {
    fn lookup(&self, request: &LookupRequest) -> Result<Vec<Place>> {
        println!("  GET {}", request.url);
        parse_places(
            r#"[
                {"address":{"city":"Berlin"}},
                {"address":{"town":"Bern"}},
                {"address":{"village":"Berlin"}}
            ]"#,
        )
    }
}

fn main() -> Result<()> {
    println!("=== citysuggest-rs Basic Usage Example ===\n");

    let mut ctl = Controller::try_new(SuggestConfig::default(), MemoryView::default())?;

    for typed in ["b", "be", "ber"] {
        println!("--- typed '{typed}' ---");
        match ctl.run_lookup(typed, &Canned)? {
            None => println!("  too short, list hidden"),
            Some(outcome) => println!("  {outcome:?} -> {:?}", ctl.view().entries),
        }
    }
    println!();

    println!("--- clicking the second suggestion ---");
    if let Some(name) = ctl.on_entry_click(1) {
        println!("  input now reads '{name}', list visible: {}", ctl.view().visible);
    }

    Ok(())
}
