//! Leaderboard row and scrape error types

use thiserror::Error;

/// A single parsed row from the leaderboard results table
///
/// Rows are ephemeral: they carry no identity beyond their position in the
/// extracted sequence and are consumed by the match set builder.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    /// Leaderboard rank (1-based)
    pub rank: u32,
    /// Agent that produced the result (e.g., "Terminus 2")
    pub agent: String,
    /// Model display name as shown on the leaderboard
    pub model: String,
    /// Result date string (e.g., "2025-11-05")
    pub date: String,
    /// Organization that built the agent
    pub agent_org: String,
    /// Organization that built the model
    pub model_org: String,
    /// Accuracy percentage as displayed (e.g., 57.9)
    pub accuracy: f64,
    /// Error margin from the "±" suffix, if the leaderboard reports one
    pub error_margin: Option<f64>,
}

/// Errors that can occur while fetching or parsing the leaderboard
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client construction failed
    #[error("Failed to create HTTP client: {message}")]
    ClientInit { message: String },

    /// Request-level failure (DNS, timeout, connection reset)
    #[error("Leaderboard request failed: {message}")]
    Http { message: String },

    /// Server answered with a non-success status
    #[error("Leaderboard returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The page contained no results table
    #[error("Could not find a <table> element on the leaderboard page")]
    TableNotFound,
}
