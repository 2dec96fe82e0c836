//! Extraction of match records from the provider's nested match-list payload.

use crate::data_fetcher::models::JsonMap;
use serde_json::Value;
use tracing::debug;

/// Flattens a live/upcoming/recent-matches payload into its `matchInfo`
/// mappings.
///
/// The upstream shape is
/// `{typeMatches: [{seriesMatches: [{seriesAdWrapper: {matches: [{matchInfo: {...}}]}}]}]}`.
/// Traversal is depth-first and preserves the payload's ordering across all
/// nesting levels. A missing intermediate key at any level contributes an
/// empty sequence for that branch; partial structures still yield whatever
/// matches they do contain. This never fails - worst case is an empty vector.
pub fn extract_matches(response: &JsonMap) -> Vec<JsonMap> {
    let mut matches = Vec::new();

    let Some(type_matches) = response.get("typeMatches").and_then(Value::as_array) else {
        debug!("No typeMatches key in match payload");
        return matches;
    };

    for type_match in type_matches {
        let Some(series_matches) = type_match.get("seriesMatches").and_then(Value::as_array)
        else {
            continue;
        };
        for series_match in series_matches {
            let Some(series_games) = series_match
                .get("seriesAdWrapper")
                .and_then(|wrapper| wrapper.get("matches"))
                .and_then(Value::as_array)
            else {
                continue;
            };
            for game in series_games {
                if let Some(info) = game.get("matchInfo").and_then(Value::as_object) {
                    matches.push(info.clone());
                }
            }
        }
    }

    debug!("Extracted {} matches from payload", matches.len());
    matches
}
