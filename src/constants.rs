//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers shared between the fetch layer,
//! configuration handling, and the CLI.

/// Default timeout for HTTP requests in seconds.
/// Each retry attempt gets its own timeout window.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 12;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Default upstream host serving cricket statistics
pub const DEFAULT_API_HOST: &str = "https://cricbuzz-cricket.p.rapidapi.com";

/// Environment variable names
pub mod env_vars {
    /// API credential. When absent or empty the fetch layer runs in
    /// disabled mode and every call returns an empty mapping.
    pub const API_KEY: &str = "RAPIDAPI_KEY";

    /// Environment variable for API host override
    pub const API_HOST: &str = "CRICKET_API_HOST";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "CRICKET_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 12)
    pub const HTTP_TIMEOUT: &str = "CRICKET_HTTP_TIMEOUT";
}

/// Retry configuration for the fetch layer
pub mod retry {
    use std::time::Duration;

    /// Total attempt budget per call, first try included
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Delay before retrying after a network-level failure
    pub const NETWORK_ERROR_DELAY: Duration = Duration::from_secs(1);

    /// Backoff after a rate-limited attempt: 2^attempt seconds, no jitter.
    /// Deterministic so retry timing is reproducible in tests.
    pub fn rate_limit_backoff(attempt: u32) -> Duration {
        Duration::from_secs(1u64 << attempt)
    }
}
