use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Cricket match and player statistics in your terminal
///
/// Fetches live data from a RapidAPI cricket statistics provider and prints
/// it as match cards, player stat lines, or raw JSON. Requires the
/// RAPIDAPI_KEY environment variable; without it every command prints
/// "no data" rather than failing.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print the raw JSON payload instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging and mirror logs to stdout
    #[arg(long, global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written
    /// to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show matches currently in progress
    Live,

    /// Show upcoming matches
    Upcoming,

    /// Show recently completed matches
    Recent,

    /// Show the full scorecard for a match
    Scorecard {
        /// Match identifier from the provider
        match_id: i64,
    },

    /// Show profile and career stats for a player
    Player {
        /// Player identifier from the provider
        player_id: i64,

        /// Format to narrow career stats to: test, odi, t20i, or all
        #[arg(long, default_value = "all")]
        format: String,
    },

    /// List the squad for a team
    Roster {
        /// Team identifier from the provider
        team_id: i64,
    },

    /// Show trending players with normalized stats
    Trending,

    /// Show top performers for a category
    Performers {
        /// Category: batting, bowling, or allrounder
        #[arg(default_value = "batting")]
        category: String,
    },

    /// Show current ICC rankings
    Rankings {
        /// Format: test, odi, or t20i
        format: String,

        /// Category: batting, bowling, allrounder, or teams
        category: String,
    },

    /// Search players by name
    Search {
        /// Player name or partial name
        query: String,
    },

    /// Check connectivity to the upstream API
    Check,

    /// Show current configuration
    Config,
}
