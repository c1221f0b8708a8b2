//! Error handling example for citysuggest-rs
//!
//! Every failure ends the same way for the user: the list disappears. This
//! example shows what the controller reports in each case.

use citysuggest_core::prelude::*;

struct Failing(fn() -> SuggestError);

impl PlaceLookup for Failing {
    fn lookup(&self, _: &LookupRequest) -> Result<Vec<Place>> {
        Err((self.0)())
    }
}

fn main() -> Result<()> {
    println!("=== citysuggest-rs Error Handling Example ===\n");

    // Example 1: configuration is checked up front
    println!("--- Example 1: invalid configuration ---");
    let bad = SuggestConfig::default().with_limit(0);
    match Controller::try_new(bad, MemoryView::default()) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    let mut ctl = Controller::try_new(SuggestConfig::default(), MemoryView::default())?;

    // Example 2: service errors
    println!("--- Example 2: lookup failures ---");
    let failures: [(&str, Failing); 2] = [
        ("HTTP 500", Failing(|| SuggestError::Status(500))),
        ("network", Failing(|| SuggestError::Transport("connection refused".into()))),
    ];
    for (label, service) in failures {
        let outcome = ctl.run_lookup("berlin", &service)?;
        println!("  {label}: {outcome:?}, visible: {}", ctl.view().visible);
    }
    println!();

    // Example 3: payloads that are not a list of places
    println!("--- Example 3: malformed payload ---");
    for body in [r#"{"error":"Unable to geocode"}"#, "<html>busy</html>"] {
        println!("  {body:<32} -> {:?}", ctl.apply_payload(body));
    }
    println!();

    // Example 4: places without a city, town or village are simply skipped
    println!("--- Example 4: nothing derivable ---");
    let outcome = ctl.apply_payload(r#"[{"address":{"country":"Deutschland"}}]"#);
    println!("  {outcome:?}, entries: {:?}", ctl.view().entries);

    Ok(())
}
