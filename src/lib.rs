//! Cricket Dashboard Library
//!
//! This library provides a resilient fetch layer for a RapidAPI cricket
//! statistics provider, plus normalizers that reshape its inconsistent JSON
//! payloads into predictable records.
//!
//! The adapter never surfaces an upstream failure to the caller: a missing
//! credential, exhausted retries, or a malformed body all degrade to an
//! empty mapping, and the normalizers treat shape mismatches as "no data"
//! rather than errors.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cricket_dashboard::config::Config;
//! use cricket_dashboard::data_fetcher::{CricketApi, extract_matches};
//! use cricket_dashboard::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = CricketApi::new(&config)?;
//!
//!     let live = api.get_live_matches().await;
//!     for match_info in extract_matches(&live) {
//!         println!("{match_info:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::CricketApi;
pub use data_fetcher::models::{JsonMap, MatchSummary, PlayerProfile, PlayerRecord, TeamRoster};
pub use data_fetcher::processors::{extract_matches, normalize_players};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
