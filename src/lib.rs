//! Publicar: Leaderboard Score Collection & Hub Publishing
//!
//! Two-phase pipeline around the Terminal-Bench leaderboard:
//!
//! 1. **collect**: scrape the leaderboard HTML, filter rows to the accepted
//!    baseline agent and open-weight orgs, resolve each surviving row to a
//!    Hugging Face Hub repository, and persist the match set as JSON.
//! 2. **publish**: for every matched entry, check the target repo's open
//!    pull requests and open a new evaluation-result PR unless one for this
//!    benchmark is already pending.
//!
//! The phases communicate only through the persisted artifact, so either can
//! be re-run independently. Re-running the publisher is idempotent: decisions
//! are derived from the current open-request state on each repo, never from
//! prior run state.
//!
//! # Example
//!
//! ```ignore
//! use publicar::matching::{build_match_set, MatchConfig, TableResolver};
//!
//! let outcome = build_match_set(&rows, &MatchConfig::terminal_bench(), &resolver);
//! outcome.set.save("matched-repos.json")?;
//! ```

pub mod cli;
pub mod config;
pub mod hub;
pub mod leaderboard;
pub mod matching;
pub mod publish;
