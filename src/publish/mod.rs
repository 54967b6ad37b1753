//! Publish Decision Engine & Run Accounting
//!
//! For each matched entry the engine lists the target repo's open pull
//! requests, classifies their titles against the benchmark pattern, and
//! decides whether to open a new evaluation-result PR. Skipping is normal:
//! an already-pending request for the same benchmark means the work is done.
//!
//! # Example
//!
//! ```ignore
//! use publicar::publish::{PublishConfig, PublishEngine, RunCounters, RunMode};
//!
//! let engine = PublishEngine::new(&hub, &hub, PublishConfig::default(), RunMode::Live);
//! let mut counters = RunCounters::default();
//! for entry in &set.entries {
//!     counters.record(&engine.process_entry(entry));
//! }
//! ```

pub mod config;
pub mod counters;
pub mod decision;
pub mod engine;
pub mod record;

#[cfg(test)]
mod tests;


pub use config::PublishConfig;
pub use counters::RunCounters;
pub use decision::{decide, Decision, TitleMatcher};
pub use engine::{EntryOutcome, OpenRequestSource, PublishEngine, PublishExecutor, RunMode};
pub use record::EvalRecord;
