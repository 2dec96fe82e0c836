//! CLI command dispatch and plain-text rendering.
//!
//! This is the consumer side of the fetch layer: it decides what an empty
//! mapping means for the user (a "no data" line, never an error) and how
//! normalized records are laid out on screen.

use crate::cli::{Args, Command};
use chrono::Local;
use cricket_dashboard::config::Config;
use cricket_dashboard::data_fetcher::{
    CricketApi, JsonMap, MatchSummary, PlayerRecord, TeamRoster, extract_matches,
    normalize_players,
};
use cricket_dashboard::error::AppError;
use serde_json::Value;

/// Runs the parsed command to completion.
pub async fn run(args: Args) -> Result<(), AppError> {
    if matches!(args.command, Command::Config) {
        return Config::display().await;
    }

    let config = Config::load().await?;
    let api = CricketApi::new(&config)?;

    match &args.command {
        Command::Live => {
            let data = api.get_live_matches().await;
            print_matches("LIVE", &data, args.json);
        }
        Command::Upcoming => {
            let data = api.get_upcoming_matches().await;
            print_matches("UPCOMING", &data, args.json);
        }
        Command::Recent => {
            let data = api.get_recent_matches().await;
            print_matches("RECENT", &data, args.json);
        }
        Command::Scorecard { match_id } => {
            let data = api.get_match_scorecard(*match_id).await;
            print_raw(&data);
        }
        Command::Player { player_id, format } => {
            let profile = api.get_player_info(*player_id).await;
            let stats = api.get_player_career_stats(*player_id, format).await;
            if args.json {
                print_raw(&profile.raw);
                print_raw(&stats);
            } else {
                print_profile(&profile, &stats);
            }
        }
        Command::Roster { team_id } => {
            let roster = api.get_team_players(*team_id).await;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&roster).unwrap_or_default()
                );
            } else {
                print_roster(&roster);
            }
        }
        Command::Trending => {
            let data = api.get_trending_players().await;
            print_player_list("Trending players", &data, args.json, true);
        }
        Command::Performers { category } => {
            let data = api.get_top_performers(category).await;
            print_player_list(&format!("Top performers: {category}"), &data, args.json, false);
        }
        Command::Search { query } => {
            let data = api.search_players(query).await;
            print_player_list(&format!("Search results for '{query}'"), &data, args.json, false);
        }
        Command::Rankings { format, category } => {
            let data = api.get_current_rankings(format, category).await;
            print_raw(&data);
        }
        Command::Check => {
            if api.verify_connection().await {
                println!("API connection OK");
            } else {
                println!("API connection failed");
                if !api.is_enabled() {
                    println!("(no credential configured - set RAPIDAPI_KEY)");
                }
            }
        }
        Command::Config => unreachable!("handled above"),
    }

    Ok(())
}

fn print_raw(data: &JsonMap) {
    if data.is_empty() {
        println!("No data available.");
        return;
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(data.clone())).unwrap_or_default()
    );
}

fn print_matches(label: &str, data: &JsonMap, json: bool) {
    if json {
        print_raw(data);
        return;
    }

    let matches = extract_matches(data);
    if matches.is_empty() {
        println!("No {} matches found.", label.to_lowercase());
        return;
    }

    println!("Found {} {} match(es)\n", matches.len(), label.to_lowercase());
    for info in &matches {
        let summary = MatchSummary::from_match_info(info);
        println!(
            "[{label}] {} ({}) vs {} ({})",
            summary.team1, summary.team1_short, summary.team2, summary.team2_short
        );
        println!("  {} - {}", summary.description, summary.format);
        println!("  Status: {}", summary.status);
        println!("  Venue:  {}, {}", summary.venue, summary.city);
        if let Some(start) = summary.start_time {
            println!(
                "  Start:  {}",
                start.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            );
        }
        println!();
    }
}

fn print_player_list(heading: &str, data: &JsonMap, json: bool, by_trending: bool) {
    if json {
        print_raw(data);
        return;
    }

    let mut players = normalize_players(&Value::Object(data.clone()));
    if players.is_empty() {
        println!("No player data available.");
        return;
    }

    if by_trending {
        players.sort_by(|a, b| {
            b.trending_score
                .partial_cmp(&a.trending_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    println!("{heading}\n");
    for (position, player) in players.iter().enumerate() {
        print_player_line(position + 1, player);
    }
}

fn print_player_line(position: usize, player: &PlayerRecord) {
    println!(
        "{position:>3}. {} ({}) - {}",
        player.name, player.country, player.role
    );
    if player.runs > 0 {
        println!(
            "     batting: {} runs, SR {:.2}, HS {}",
            player.runs, player.strike_rate, player.highest_score
        );
    }
    if player.wickets > 0 {
        println!(
            "     bowling: {} wkts, econ {:.2}, best {}",
            player.wickets, player.economy_rate, player.best_figures
        );
    }
    if player.trending_score > 0.0 {
        println!("     trending score: {}", player.trending_score);
    }
}

fn print_profile(
    profile: &cricket_dashboard::data_fetcher::PlayerProfile,
    stats: &JsonMap,
) {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!("Player #{}", profile.id);
    println!("  Name:          {}", field(&profile.name));
    println!("  Role:          {}", field(&profile.role));
    println!("  Batting style: {}", field(&profile.batting_style));
    println!("  Bowling style: {}", field(&profile.bowling_style));
    println!("  Team:          {}", field(&profile.intl_team));

    if stats.is_empty() {
        println!("\nNo career stats available.");
    } else {
        println!("\nCareer stats:");
        println!(
            "{}",
            serde_json::to_string_pretty(&Value::Object(stats.clone())).unwrap_or_default()
        );
    }
}

fn print_roster(roster: &TeamRoster) {
    match &roster.team_name {
        Some(name) => println!("Squad for {} (team #{})\n", name, roster.team_id),
        None => println!("Squad for team #{}\n", roster.team_id),
    }

    if roster.players.is_empty() {
        println!("No squad data available.");
        return;
    }

    for player in &roster.players {
        let country = player.country.as_deref().unwrap_or("-");
        let role = player.role.as_deref().unwrap_or("-");
        println!("  {} ({country}) - {role}", player.name);
    }
}
