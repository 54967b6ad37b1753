//! Collect command implementation — scrape, match, persist

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::CollectArgs;
use crate::hub::HubClient;
use crate::leaderboard::LeaderboardClient;
use crate::matching::{build_match_set, MatchConfig};

pub fn run_collect(args: &CollectArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Fetching leaderboard from {}", args.url),
    );

    let client = LeaderboardClient::new().map_err(|e| format!("Client initialization: {e}"))?;
    let rows = client.fetch(&args.url).map_err(|e| format!("Scrape: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Parsed {} leaderboard rows", rows.len()),
    );

    let mut config = MatchConfig::terminal_bench();
    config.accepted_agent = args.agent.clone();
    config.source = args.url.clone();

    // Repo resolution goes through the Hub search API; anonymous is fine.
    let hub = HubClient::new().map_err(|e| format!("Hub client: {e}"))?;
    let outcome = build_match_set(&rows, &config, &hub);

    for skip in &outcome.skipped {
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "  #{} {} ({}): skipped ({})",
                skip.rank, skip.model, skip.org, skip.reason
            ),
        );
    }

    for entry in &outcome.set.entries {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  {} -> {} ({}%)",
                entry.model, entry.hub_repo_id, entry.accuracy
            ),
        );
    }

    outcome
        .set
        .save(&args.output)
        .map_err(|e| format!("Writing {}: {e}", args.output.display()))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Matched {} of {} rows -> {}",
            outcome.set.entries.len(),
            rows.len(),
            args.output.display()
        ),
    );

    Ok(())
}
