//! Publicar CLI
//!
//! Collect Terminal-Bench leaderboard scores and publish them as pull
//! requests on the matching Hugging Face Hub model repositories.
//!
//! # Usage
//!
//! ```bash
//! # Scrape the leaderboard and write matched-repos.json
//! publicar collect
//!
//! # Open one evaluation-result pull request per matched repo
//! publicar publish
//!
//! # Preview what would be uploaded without touching the Hub
//! publicar publish --dry-run
//! ```

use clap::Parser;
use publicar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
