//! CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::leaderboard::LEADERBOARD_URL;

/// Publicar: Leaderboard Score Collection & Hub Publishing
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "publicar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Collect Terminal-Bench leaderboard scores and publish them as Hub pull requests")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Scrape the leaderboard and write the matched-repos artifact
    Collect(CollectArgs),

    /// Open evaluation-result pull requests for every matched repo
    Publish(PublishArgs),
}

/// Arguments for the collect command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CollectArgs {
    /// Leaderboard page to scrape
    #[arg(long, default_value = LEADERBOARD_URL)]
    pub url: String,

    /// Output path for the matched-repos artifact
    #[arg(short, long, default_value = "matched-repos.json")]
    pub output: PathBuf,

    /// Accepted baseline agent; rows from other agents are dropped
    #[arg(long, default_value = "Terminus 2")]
    pub agent: String,
}

/// Arguments for the publish command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PublishArgs {
    /// Path to the matched-repos artifact produced by `collect`
    #[arg(short, long, default_value = "matched-repos.json")]
    pub input: PathBuf,

    /// Evaluation dataset ID recorded in each result file
    #[arg(long, default_value = "terminal-bench")]
    pub dataset_id: String,

    /// Task ID; also names the uploaded file (.eval_results/<task_id>.yaml)
    #[arg(long, default_value = "terminal_bench")]
    pub task_id: String,

    /// Attribution user recorded in each result file
    #[arg(long, default_value = "terminal-bench-bot")]
    pub user: String,

    /// Dry run (full decision pass, preview uploads, touch nothing)
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse CLI arguments from an iterator (used by tests)
///
/// # Errors
///
/// Returns a clap error when the arguments do not match the CLI definition.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
