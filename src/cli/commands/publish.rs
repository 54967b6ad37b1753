//! Publish command implementation — open evaluation-result pull requests

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PublishArgs;
use crate::hub::HubClient;
use crate::matching::MatchSet;
use crate::publish::{PublishConfig, PublishEngine, RunCounters, RunMode};

pub fn run_publish(args: &PublishArgs, level: LogLevel) -> Result<(), String> {
    let set = MatchSet::load(&args.input)
        .map_err(|e| format!("Reading {}: {e}", args.input.display()))?;

    let hub = HubClient::new().map_err(|e| format!("Hub client: {e}"))?;
    hub.require_token().map_err(|e| e.to_string())?;

    let mode = if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Live
    };

    let config = PublishConfig {
        dataset_id: args.dataset_id.clone(),
        task_id: args.task_id.clone(),
        source_url: set.source.clone(),
        user: args.user.clone(),
        ..PublishConfig::default()
    };

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Publishing {} matched entries from {}{}",
            set.entries.len(),
            args.input.display(),
            if args.dry_run { " (dry run)" } else { "" }
        ),
    );

    let engine = PublishEngine::new(&hub, &hub, config, mode);
    let mut counters = RunCounters::default();
    let total = set.entries.len();

    for (idx, entry) in set.entries.iter().enumerate() {
        log(
            level,
            LogLevel::Normal,
            &format!("[{}/{}] {}", idx + 1, total, entry.hub_repo_id),
        );

        let outcome = engine.process_entry(entry);
        counters.record(&outcome);
        log(level, LogLevel::Normal, &format!("  {outcome}"));
    }

    log(level, LogLevel::Normal, &format!("Done. {counters}"));

    if counters.is_failure() {
        Err(format!(
            "{} of {} publish calls failed",
            counters.failed, counters.processed
        ))
    } else {
        Ok(())
    }
}
