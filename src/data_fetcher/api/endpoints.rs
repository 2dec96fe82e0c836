//! Endpoint catalog: relative paths for each logical upstream operation.
//!
//! Pure routing only. Retry policy, auth, and the enable/disable gate all
//! live in the client; nothing here performs I/O.

/// Matches currently in progress
pub const LIVE_MATCHES: &str = "matches/v1/live";

/// Matches scheduled but not yet started
pub const UPCOMING_MATCHES: &str = "matches/v1/upcoming";

/// Recently completed matches
pub const RECENT_MATCHES: &str = "matches/v1/recent";

/// Players currently trending
pub const TRENDING_PLAYERS: &str = "stats/v1/player/trending";

/// Player search; the query string goes in the `q` parameter
pub const PLAYER_SEARCH: &str = "stats/v1/player/search";

/// Builds the scorecard path for a specific match.
///
/// # Example
/// ```
/// use cricket_dashboard::data_fetcher::api::endpoints::scorecard_path;
///
/// assert_eq!(scorecard_path(89654), "mcenter/v1/89654/scard");
/// ```
pub fn scorecard_path(match_id: i64) -> String {
    format!("mcenter/v1/{match_id}/scard")
}

/// Builds the profile/stats path for a specific player.
pub fn player_path(player_id: i64) -> String {
    format!("stats/v1/player/{player_id}")
}

/// Builds the career-stats path for a player in a specific format.
/// The trailing format segment is only appended for a concrete format;
/// `"all"` means the aggregate endpoint.
///
/// # Example
/// ```
/// use cricket_dashboard::data_fetcher::api::endpoints::career_stats_path;
///
/// assert_eq!(career_stats_path(1413, "t20i"), "stats/v1/player/1413/t20i");
/// assert_eq!(career_stats_path(1413, "all"), "stats/v1/player/1413");
/// ```
pub fn career_stats_path(player_id: i64, format_type: &str) -> String {
    if format_type == "all" {
        player_path(player_id)
    } else {
        format!("stats/v1/player/{player_id}/{format_type}")
    }
}

/// Builds the squad-listing path for a team.
pub fn team_players_path(team_id: i64) -> String {
    format!("teams/v1/{team_id}/players")
}

/// Builds the top-performers path for a category
/// (`batting`, `bowling`, or `allrounder`).
pub fn top_performers_path(category: &str) -> String {
    format!("stats/v1/rankings/{category}")
}

/// Builds the current-rankings path for a format (`test`, `odi`, `t20i`)
/// and category (`batting`, `bowling`, `allrounder`, `teams`).
pub fn rankings_path(format_type: &str, category: &str) -> String {
    format!("stats/v1/rankings/{format_type}/{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(scorecard_path(12345), "mcenter/v1/12345/scard");
        assert_eq!(player_path(1413), "stats/v1/player/1413");
        assert_eq!(team_players_path(2), "teams/v1/2/players");
        assert_eq!(top_performers_path("bowling"), "stats/v1/rankings/bowling");
        assert_eq!(rankings_path("odi", "batting"), "stats/v1/rankings/odi/batting");
    }

    #[test]
    fn test_career_stats_format_segment_only_for_concrete_formats() {
        assert_eq!(career_stats_path(1413, "all"), "stats/v1/player/1413");
        assert_eq!(career_stats_path(1413, "test"), "stats/v1/player/1413/test");
        assert_eq!(career_stats_path(1413, "odi"), "stats/v1/player/1413/odi");
    }
}
