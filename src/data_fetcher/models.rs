use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object payload as returned by the upstream provider. The provider
/// enforces no schema, so loose payloads stay as maps until normalized.
pub type JsonMap = serde_json::Map<String, Value>;

/// Fixed-key player record normalized from one upstream player object.
///
/// Upstream stat fields may live at the top level or nested under
/// `stats.batting` / `stats.bowling` depending on the endpoint; the
/// normalizer resolves them through ordered fallback chains. Every declared
/// key is always present: absent upstream fields resolve to the defaults
/// below rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub country: String,
    pub role: String,

    // Batting metrics
    pub runs: i64,
    pub balls_faced: i64,
    pub fours: i64,
    pub sixes: i64,
    pub strike_rate: f64,
    pub highest_score: i64,

    // Bowling metrics
    pub wickets: i64,
    pub overs_bowled: f64,
    pub runs_conceded: i64,
    pub economy_rate: f64,
    pub best_figures: String,

    // General metrics
    pub matches: i64,
    pub average: f64,
    pub format: String,
    pub recent_form: String,
    pub trending_score: f64,
    pub rank: i64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        PlayerRecord {
            name: "Unknown".to_string(),
            team: "Unknown".to_string(),
            country: "Unknown".to_string(),
            role: "Unknown".to_string(),
            runs: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            strike_rate: 0.0,
            highest_score: 0,
            wickets: 0,
            overs_bowled: 0.0,
            runs_conceded: 0,
            economy_rate: 0.0,
            best_figures: "N/A".to_string(),
            matches: 1,
            average: 0.0,
            format: "Unknown".to_string(),
            recent_form: "Unknown".to_string(),
            trending_score: 0.0,
            rank: 0,
        }
    }
}

/// Core profile subset for a single player, with the raw payload kept for
/// consumers that need more than the subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: i64,
    pub name: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub intl_team: Option<String>,
    /// Full upstream payload for advanced consumers
    pub raw: JsonMap,
}

impl PlayerProfile {
    /// Builds the fixed-shape profile from a raw player payload. Missing
    /// fields become `None`; the raw mapping is retained as-is.
    pub fn from_raw(id: i64, raw: JsonMap) -> Self {
        let field = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
        let name = field("name");
        let role = field("role");
        let batting_style = field("battingStyle");
        let bowling_style = field("bowlingStyle");
        let intl_team = field("intlTeam");
        PlayerProfile {
            id,
            name,
            role,
            batting_style,
            bowling_style,
            intl_team,
            raw,
        }
    }
}

/// One normalized entry in a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: Option<i64>,
    pub name: String,
    pub country: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
}

/// Normalized team roster, safe for direct display or storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team_id: i64,
    pub team_name: Option<String>,
    pub players: Vec<RosterPlayer>,
}

/// Display-oriented view of one `matchInfo` mapping. Every field carries a
/// placeholder default so a partially populated match still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub description: String,
    pub format: String,
    pub status: String,
    pub team1: String,
    pub team1_short: String,
    pub team2: String,
    pub team2_short: String,
    pub venue: String,
    pub city: String,
    pub start_time: Option<DateTime<Utc>>,
}

impl MatchSummary {
    /// Builds a summary from a single extracted `matchInfo` mapping.
    pub fn from_match_info(info: &JsonMap) -> Self {
        let team_field = |team: &str, key: &str, fallback: &str| {
            info.get(team)
                .and_then(|t| t.get(key))
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        let team1 = team_field("team1", "teamName", "Team 1");
        let team2 = team_field("team2", "teamName", "Team 2");

        let str_field = |key: &str, fallback: &str| {
            info.get(key)
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        let venue_field = |key: &str, fallback: &str| {
            info.get("venueInfo")
                .and_then(|v| v.get(key))
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };

        MatchSummary {
            description: str_field("matchDesc", &format!("{team1} vs {team2}")),
            format: str_field("matchFormat", "Unknown"),
            status: str_field("status", "No status available"),
            team1_short: team_field("team1", "teamSName", "T1"),
            team2_short: team_field("team2", "teamSName", "T2"),
            team1,
            team2,
            venue: venue_field("ground", "Unknown Venue"),
            city: venue_field("city", "Unknown City"),
            start_time: parse_start_date(info.get("startDate")),
        }
    }
}

/// The provider sends match start timestamps as epoch milliseconds, usually
/// string-encoded. Anything unparseable becomes `None`.
fn parse_start_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let millis = match value? {
        Value::String(s) => s.parse::<i64>().ok()?,
        Value::Number(n) => n.as_i64()?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis)
}
