//! Normalization of heterogeneous player payloads into fixed-key records.
//!
//! The provider is inconsistent about where stat fields live: sometimes at
//! the top level of a player object, sometimes nested under `stats.batting`
//! or `stats.bowling`, and key names vary between endpoints. Each record
//! field is resolved through an ordered list of lookup paths tried in
//! sequence; the first non-default hit wins.

use crate::data_fetcher::models::{JsonMap, PlayerRecord, RosterPlayer, TeamRoster};
use serde_json::Value;
use tracing::debug;

/// One lookup path into an upstream player object.
type LookupPath = &'static [&'static str];

const NAME_PATHS: &[LookupPath] = &[&["name"], &["playerName"], &["fullName"]];
const TEAM_PATHS: &[LookupPath] = &[&["team"]];
const COUNTRY_PATHS: &[LookupPath] = &[&["country"], &["intlTeam"]];
const ROLE_PATHS: &[LookupPath] = &[&["role"]];
const FORMAT_PATHS: &[LookupPath] = &[&["format"]];
const RECENT_FORM_PATHS: &[LookupPath] = &[&["recentForm"]];

const RUNS_PATHS: &[LookupPath] = &[&["stats", "batting", "runs"], &["batting", "runs"], &["runs"]];
const BALLS_PATHS: &[LookupPath] = &[
    &["stats", "batting", "balls"],
    &["batting", "balls"],
    &["balls"],
];
const FOURS_PATHS: &[LookupPath] = &[
    &["stats", "batting", "fours"],
    &["batting", "fours"],
    &["fours"],
];
const SIXES_PATHS: &[LookupPath] = &[
    &["stats", "batting", "sixes"],
    &["batting", "sixes"],
    &["sixes"],
];
const STRIKE_RATE_PATHS: &[LookupPath] = &[
    &["stats", "batting", "strikeRate"],
    &["batting", "strikeRate"],
    &["strikeRate"],
];
const HIGHEST_SCORE_PATHS: &[LookupPath] = &[
    &["stats", "batting", "highestScore"],
    &["batting", "highestScore"],
    &["highestScore"],
];

const WICKETS_PATHS: &[LookupPath] = &[
    &["stats", "bowling", "wickets"],
    &["bowling", "wickets"],
    &["wickets"],
];
const OVERS_PATHS: &[LookupPath] = &[
    &["stats", "bowling", "overs"],
    &["bowling", "overs"],
    &["overs"],
];
const RUNS_CONCEDED_PATHS: &[LookupPath] = &[
    &["stats", "bowling", "runsConceded"],
    &["bowling", "runsConceded"],
    &["runsConceded"],
];
const ECONOMY_RATE_PATHS: &[LookupPath] = &[
    &["stats", "bowling", "economyRate"],
    &["bowling", "economyRate"],
    &["economyRate"],
];
const BEST_FIGURES_PATHS: &[LookupPath] = &[
    &["stats", "bowling", "bestFigures"],
    &["bowling", "bestFigures"],
    &["bestFigures"],
];

const MATCHES_PATHS: &[LookupPath] = &[&["matches"]];
const AVERAGE_PATHS: &[LookupPath] = &[&["average"]];
const TRENDING_SCORE_PATHS: &[LookupPath] = &[&["trendingScore"]];
const RANK_PATHS: &[LookupPath] = &[&["rank"]];

/// Walks one dotted path into a JSON value.
fn path_lookup<'a>(value: &'a Value, path: LookupPath) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.get(key))
}

/// First non-empty string across the candidate paths.
fn first_string(player: &Value, paths: &[LookupPath]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| path_lookup(player, path))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First non-zero number across the candidate paths. Zero counts as "not
/// supplied" and falls through to the next candidate, mirroring the
/// provider's habit of zero-filling absent stats.
fn first_number(player: &Value, paths: &[LookupPath]) -> Option<f64> {
    paths
        .iter()
        .filter_map(|path| path_lookup(player, path))
        .filter_map(Value::as_f64)
        .find(|n| *n != 0.0)
}

fn number_or_default(player: &Value, paths: &[LookupPath], default: f64) -> f64 {
    first_number(player, paths).unwrap_or(default)
}

fn count_or_default(player: &Value, paths: &[LookupPath], default: i64) -> i64 {
    first_number(player, paths).map(|n| n as i64).unwrap_or(default)
}

fn string_or_unknown(player: &Value, paths: &[LookupPath]) -> String {
    first_string(player, paths).unwrap_or_else(|| "Unknown".to_string())
}

/// Rounds to two decimal places, the precision the provider itself uses for
/// rates.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalizes a raw player-list payload into fixed-key records.
///
/// The player list is located with a fallback chain of its own: a raw array
/// is used as-is; an object is probed for `players`, `data`, and
/// `trendingPlayers`, then for the first array value it holds. Any list
/// element that is not a mapping is skipped, not an error.
pub fn normalize_players(data: &Value) -> Vec<PlayerRecord> {
    let raw_players = locate_player_list(data);
    debug!("Normalizing {} raw player entries", raw_players.len());

    raw_players
        .iter()
        .filter(|entry| entry.is_object())
        .map(normalize_player)
        .collect()
}

/// Finds the list of player objects inside an arbitrarily shaped payload.
fn locate_player_list(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items,
        Value::Object(map) => {
            for key in ["players", "data", "trendingPlayers"] {
                if let Some(Value::Array(items)) = map.get(key) {
                    return items;
                }
            }
            // Last resort: the first array value anywhere in the mapping
            map.values()
                .find_map(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        }
        _ => &[],
    }
}

/// Produces one fixed-key record from one upstream player object.
fn normalize_player(player: &Value) -> PlayerRecord {
    let team = string_or_unknown(player, TEAM_PATHS);
    let country = first_string(player, COUNTRY_PATHS).unwrap_or_else(|| team.clone());

    let mut record = PlayerRecord {
        name: string_or_unknown(player, NAME_PATHS),
        country,
        role: string_or_unknown(player, ROLE_PATHS),
        team,

        runs: count_or_default(player, RUNS_PATHS, 0),
        balls_faced: count_or_default(player, BALLS_PATHS, 0),
        fours: count_or_default(player, FOURS_PATHS, 0),
        sixes: count_or_default(player, SIXES_PATHS, 0),
        strike_rate: number_or_default(player, STRIKE_RATE_PATHS, 0.0),
        highest_score: count_or_default(player, HIGHEST_SCORE_PATHS, 0),

        wickets: count_or_default(player, WICKETS_PATHS, 0),
        overs_bowled: number_or_default(player, OVERS_PATHS, 0.0),
        runs_conceded: count_or_default(player, RUNS_CONCEDED_PATHS, 0),
        economy_rate: number_or_default(player, ECONOMY_RATE_PATHS, 0.0),
        best_figures: first_string(player, BEST_FIGURES_PATHS)
            .unwrap_or_else(|| "N/A".to_string()),

        matches: count_or_default(player, MATCHES_PATHS, 1),
        average: number_or_default(player, AVERAGE_PATHS, 0.0),
        format: string_or_unknown(player, FORMAT_PATHS),
        recent_form: string_or_unknown(player, RECENT_FORM_PATHS),
        trending_score: number_or_default(player, TRENDING_SCORE_PATHS, 0.0),
        rank: count_or_default(player, RANK_PATHS, 0),
    };

    // Derive rates the provider left out, when the inputs allow it
    if record.strike_rate == 0.0 && record.runs > 0 && record.balls_faced > 0 {
        record.strike_rate = round2(record.runs as f64 / record.balls_faced as f64 * 100.0);
    }
    if record.economy_rate == 0.0 && record.overs_bowled > 0.0 && record.runs_conceded > 0 {
        record.economy_rate = round2(record.runs_conceded as f64 / record.overs_bowled);
    }

    record
}

/// Normalizes a team-roster payload into a fixed-shape roster. Entries that
/// are not mappings are dropped; the roster itself always has the declared
/// keys even when the payload is empty.
pub fn normalize_roster(team_id: i64, data: &JsonMap) -> TeamRoster {
    let players = data
        .get("players")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .map(normalize_roster_player)
                .collect()
        })
        .unwrap_or_default();

    TeamRoster {
        team_id,
        team_name: data
            .get("teamName")
            .and_then(Value::as_str)
            .map(str::to_string),
        players,
    }
}

fn normalize_roster_player(entry: &JsonMap) -> RosterPlayer {
    let value = Value::Object(entry.clone());
    let optional = |paths: &[LookupPath]| first_string(&value, paths);

    RosterPlayer {
        id: entry.get("id").and_then(Value::as_i64),
        name: string_or_unknown(&value, NAME_PATHS),
        country: optional(COUNTRY_PATHS),
        role: optional(ROLE_PATHS),
        batting_style: optional(&[&["battingStyle"]]),
        bowling_style: optional(&[&["bowlingStyle"]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strike_rate_derived_from_runs_and_balls() {
        let data = json!([{"name": "A Batter", "runs": 50, "balls": 25}]);
        let players = normalize_players(&data);

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].strike_rate, 200.0);
    }

    #[test]
    fn test_economy_rate_derived_from_overs_and_runs_conceded() {
        let data = json!([{"name": "A Bowler", "overs": 10, "runsConceded": 30}]);
        let players = normalize_players(&data);

        assert_eq!(players[0].economy_rate, 3.0);
    }

    #[test]
    fn test_supplied_rates_are_not_overwritten() {
        let data = json!([{
            "name": "A Batter",
            "runs": 50,
            "balls": 25,
            "strikeRate": 187.5
        }]);
        let players = normalize_players(&data);

        assert_eq!(players[0].strike_rate, 187.5);
    }

    #[test]
    fn test_rates_stay_zero_without_inputs() {
        let data = json!([{"name": "Debutant", "runs": 12}]);
        let players = normalize_players(&data);

        assert_eq!(players[0].strike_rate, 0.0);
        assert_eq!(players[0].economy_rate, 0.0);
    }

    #[test]
    fn test_non_mapping_entries_are_skipped() {
        let data = json!([
            {"name": "Real Player", "runs": 10},
            "just a string",
            42,
            null,
            {"name": "Another Player"}
        ]);
        let players = normalize_players(&data);

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Real Player");
        assert_eq!(players[1].name, "Another Player");
    }

    #[test]
    fn test_stats_nested_under_batting_and_bowling() {
        let data = json!([{
            "playerName": "All Rounder",
            "stats": {
                "batting": {"runs": 320, "balls": 280, "fours": 30, "sixes": 8},
                "bowling": {"wickets": 12, "overs": 45.2, "runsConceded": 210}
            }
        }]);
        let players = normalize_players(&data);
        let p = &players[0];

        assert_eq!(p.name, "All Rounder");
        assert_eq!(p.runs, 320);
        assert_eq!(p.fours, 30);
        assert_eq!(p.wickets, 12);
        assert_eq!(p.overs_bowled, 45.2);
        // Derived from nested inputs
        assert_eq!(p.strike_rate, 114.29);
        assert_eq!(p.economy_rate, 4.65);
    }

    #[test]
    fn test_name_fallback_chain_order() {
        let data = json!([
            {"fullName": "Only Full Name"},
            {"playerName": "Player Name", "fullName": "Full Name"},
            {"name": "", "playerName": "Non Empty Wins"}
        ]);
        let players = normalize_players(&data);

        assert_eq!(players[0].name, "Only Full Name");
        assert_eq!(players[1].name, "Player Name");
        assert_eq!(players[2].name, "Non Empty Wins");
    }

    #[test]
    fn test_country_falls_back_to_team() {
        let data = json!([
            {"name": "A", "team": "India"},
            {"name": "B", "team": "Australia", "country": "Australia"},
            {"name": "C"}
        ]);
        let players = normalize_players(&data);

        assert_eq!(players[0].country, "India");
        assert_eq!(players[1].country, "Australia");
        assert_eq!(players[2].country, "Unknown");
    }

    #[test]
    fn test_player_list_located_under_known_keys() {
        for key in ["players", "data", "trendingPlayers"] {
            let data = json!({key: [{"name": "Found"}]});
            let players = normalize_players(&data);
            assert_eq!(players.len(), 1, "list under {key} should be found");
            assert_eq!(players[0].name, "Found");
        }
    }

    #[test]
    fn test_player_list_falls_back_to_first_array_value() {
        let data = json!({"somethingElse": [{"name": "Hidden"}]});
        let players = normalize_players(&data);

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Hidden");
    }

    #[test]
    fn test_unlocatable_list_yields_empty() {
        assert!(normalize_players(&json!({"onlyScalars": 1})).is_empty());
        assert!(normalize_players(&json!("a string")).is_empty());
        assert!(normalize_players(&json!(null)).is_empty());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let data = json!([{}]);
        let players = normalize_players(&data);
        let p = &players[0];

        assert_eq!(p.name, "Unknown");
        assert_eq!(p.best_figures, "N/A");
        assert_eq!(p.matches, 1);
        assert_eq!(p.rank, 0);
    }

    #[test]
    fn test_normalize_roster() {
        let data = json!({
            "teamId": 2,
            "teamName": "India",
            "players": [
                {"id": 1413, "name": "Virat Kohli", "country": "India", "role": "Batsman"},
                {"fullName": "Jasprit Bumrah", "intlTeam": "India"},
                "not a player"
            ]
        });
        let roster = normalize_roster(2, data.as_object().unwrap());

        assert_eq!(roster.team_id, 2);
        assert_eq!(roster.team_name.as_deref(), Some("India"));
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.players[0].id, Some(1413));
        assert_eq!(roster.players[1].name, "Jasprit Bumrah");
        assert_eq!(roster.players[1].country.as_deref(), Some("India"));
        assert!(roster.players[1].id.is_none());
    }

    #[test]
    fn test_normalize_roster_without_players_key() {
        let roster = normalize_roster(9, json!({"teamId": 9}).as_object().unwrap());
        assert_eq!(roster.team_id, 9);
        assert!(roster.team_name.is_none());
        assert!(roster.players.is_empty());
    }
}
