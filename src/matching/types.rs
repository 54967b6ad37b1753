//! Match set artifact types
//!
//! The match set is the persisted handoff between the collect and publish
//! phases. It is written whole on every collect run and read whole by the
//! publisher; entries are never patched in place.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A leaderboard row resolved to a publishable Hub repository
///
/// Immutable once created; the publish phase reads entries as-is. Accuracy
/// is carried exactly as scraped, with no re-scaling or rounding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    /// Target repository ("owner/name"), resolved via the explicit org lookup
    pub hub_repo_id: String,
    /// Model display name from the leaderboard
    pub model: String,
    /// Accuracy percentage as displayed
    pub accuracy: f64,
    /// Result date string
    pub date: String,
    /// Agent that produced the result
    pub agent: String,
}

/// The persisted matched-repos artifact
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSet {
    /// Provenance of the entries (leaderboard URL)
    pub source: String,
    /// Matched entries in leaderboard rank order
    pub entries: Vec<MatchEntry>,
}

impl MatchSet {
    /// Read and deserialize an artifact file.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Io` when the file cannot be read (a missing
    /// artifact is a startup-fatal condition for the publisher) and
    /// `ArtifactError::Json` when it does not deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serialize and write the artifact, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError` on serialization or write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Reason a leaderboard row was excluded from the match set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Row's agent is not the accepted baseline agent
    AgentMismatch,
    /// Row's org is in the closed-source exclusion set
    ClosedOrg,
    /// Row's org has no entry in the org lookup table
    UnmappedOrg,
    /// Org resolved, but no repository was found for the model
    NoRepoFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AgentMismatch => write!(f, "agent is not the accepted baseline"),
            Self::ClosedOrg => write!(f, "closed-source org"),
            Self::UnmappedOrg => write!(f, "unmapped org"),
            Self::NoRepoFound => write!(f, "no repo found under mapped org"),
        }
    }
}

/// Errors reading or writing the matched-repos artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
