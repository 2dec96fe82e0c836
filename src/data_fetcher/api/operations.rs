//! Named operations over the endpoint catalog.
//!
//! Each operation delegates to [`CricketApi::fetch`] with its own path and
//! parameters, so every call inherits the gate, retry, and
//! degrade-to-empty behavior. None of these functions can fail; consumers
//! decide what an empty result means for them.

use super::client::CricketApi;
use super::endpoints;
use crate::data_fetcher::models::{JsonMap, PlayerProfile, TeamRoster};
use crate::data_fetcher::processors;
use tracing::error;

impl CricketApi {
    /// Matches currently in progress.
    pub async fn get_live_matches(&self) -> JsonMap {
        self.fetch(endpoints::LIVE_MATCHES, &[]).await
    }

    /// Matches scheduled but not yet started.
    pub async fn get_upcoming_matches(&self) -> JsonMap {
        self.fetch(endpoints::UPCOMING_MATCHES, &[]).await
    }

    /// Recently completed matches.
    pub async fn get_recent_matches(&self) -> JsonMap {
        self.fetch(endpoints::RECENT_MATCHES, &[]).await
    }

    /// Full scorecard for one match.
    pub async fn get_match_scorecard(&self, match_id: i64) -> JsonMap {
        self.fetch(&endpoints::scorecard_path(match_id), &[]).await
    }

    /// Aggregate stats payload for one player, as the provider shapes it.
    pub async fn get_player_stats(&self, player_id: i64) -> JsonMap {
        self.fetch(&endpoints::player_path(player_id), &[]).await
    }

    /// Core profile for one player, normalized to a predictable shape with
    /// the raw payload attached.
    pub async fn get_player_info(&self, player_id: i64) -> PlayerProfile {
        let data = self.fetch(&endpoints::player_path(player_id), &[]).await;
        PlayerProfile::from_raw(player_id, data)
    }

    /// Career statistics for one player, optionally narrowed to a format
    /// (`test`, `odi`, `t20i`; `all` means the aggregate).
    pub async fn get_player_career_stats(&self, player_id: i64, format_type: &str) -> JsonMap {
        self.fetch(&endpoints::career_stats_path(player_id, format_type), &[])
            .await
    }

    /// Squad for one team, each entry normalized to fixed keys.
    pub async fn get_team_players(&self, team_id: i64) -> TeamRoster {
        let data = self.fetch(&endpoints::team_players_path(team_id), &[]).await;
        processors::normalize_roster(team_id, &data)
    }

    /// Players currently trending, as the provider shapes them. Feed the
    /// result to [`normalize_players`](crate::data_fetcher::normalize_players)
    /// for fixed-key records.
    pub async fn get_trending_players(&self) -> JsonMap {
        self.fetch(endpoints::TRENDING_PLAYERS, &[]).await
    }

    /// Top performers in a category (`batting`, `bowling`, `allrounder`).
    pub async fn get_top_performers(&self, category: &str) -> JsonMap {
        self.fetch(&endpoints::top_performers_path(category), &[])
            .await
    }

    /// Current ICC rankings for a format and category.
    pub async fn get_current_rankings(&self, format_type: &str, category: &str) -> JsonMap {
        self.fetch(&endpoints::rankings_path(format_type, category), &[])
            .await
    }

    /// Searches players by name or partial name.
    pub async fn search_players(&self, query: &str) -> JsonMap {
        self.fetch(endpoints::PLAYER_SEARCH, &[("q", query)]).await
    }

    /// Connectivity probe: exercises the live-matches endpoint and reports
    /// boolean health. True iff the call produced a non-empty mapping
    /// without an `error` key. Failures inside the fetch are already
    /// absorbed there, so this cannot fail either.
    pub async fn verify_connection(&self) -> bool {
        let data = self.get_live_matches().await;
        let healthy = !data.is_empty() && !data.contains_key("error");
        if !healthy {
            error!("API connectivity check failed");
        }
        healthy
    }
}
