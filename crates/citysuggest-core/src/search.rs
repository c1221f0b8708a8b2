// crates/citysuggest-core/src/search.rs

//! Turning a raw service payload into the list of names to render.

use crate::error::Result;
use crate::model::Place;
use std::collections::HashSet;

/// Parses a response body as a JSON array of places.
pub fn parse_places(body: &str) -> Result<Vec<Place>> {
    Ok(serde_json::from_str(body)?)
}

/// Derives one city name per place and drops repeats.
///
/// Places without a derivable name are skipped. Matching is exact and
/// case-sensitive; the first occurrence of a name keeps its position.
pub fn collect_city_names(places: &[Place]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(places.len());
    let mut out = Vec::new();

    for place in places {
        let Some(name) = place.city_name() else {
            continue;
        };
        if seen.insert(name) {
            out.push(name.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_across_city_town_village() {
        let places = parse_places(
            r#"[
                {"address":{"city":"Berlin"}},
                {"address":{"town":"Bern"}},
                {"address":{"village":"Berlin"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(collect_city_names(&places), vec!["Berlin", "Bern"]);
    }

    #[test]
    fn places_without_names_contribute_nothing() {
        let places = parse_places(
            r#"[
                {"address":{"state":"Bayern","country":"Deutschland"}},
                {"address":{}},
                {"display_name":"somewhere"}
            ]"#,
        )
        .unwrap();
        assert!(collect_city_names(&places).is_empty());
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let places = parse_places(
            r#"[{"address":{"city":"berlin"}},{"address":{"city":"Berlin"}}]"#,
        )
        .unwrap();
        assert_eq!(collect_city_names(&places), vec!["berlin", "Berlin"]);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let places = parse_places(
            r#"[
                {"address":{"city":"C"}},
                {"address":{"city":"A"}},
                {"address":{"city":"C"}},
                {"address":{"city":"B"}},
                {"address":{"city":"A"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(collect_city_names(&places), vec!["C", "A", "B"]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let places = parse_places(
            r#"[{"place_id":42,"lat":"52.5","lon":"13.4","osm_type":"relation",
                 "display_name":"Berlin, Deutschland",
                 "address":{"city":"Berlin","postcode":"10117"}}]"#,
        )
        .unwrap();
        assert_eq!(collect_city_names(&places), vec!["Berlin"]);
    }

    #[test]
    fn tolerates_differently_typed_extra_fields() {
        let places = parse_places(
            r#"[{"place_id":"123","display_name":null,"importance":"high",
                 "address":{"city":"Berlin"}}]"#,
        )
        .unwrap();
        assert_eq!(collect_city_names(&places), vec!["Berlin"]);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_places("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_payload_is_an_error() {
        assert!(parse_places(r#"{"error":"Bad Request"}"#).is_err());
        assert!(parse_places("<html>").is_err());
    }
}
