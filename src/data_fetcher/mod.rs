//! Fetching and normalization of cricket data from the upstream provider.

pub mod api;
pub mod models;
pub mod processors;

pub use api::CricketApi;
pub use models::{JsonMap, MatchSummary, PlayerProfile, PlayerRecord, RosterPlayer, TeamRoster};
pub use processors::{extract_matches, normalize_players};
