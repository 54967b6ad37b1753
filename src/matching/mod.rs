//! Model Identity Matching
//!
//! Turns raw leaderboard rows into a persisted match set of Hub repository
//! targets. Matching is deliberately conservative: an entry is only emitted
//! when the leaderboard org has an explicit entry in the org lookup table and
//! the repo resolution strategy finds a repository under that org. Nothing is
//! guessed or fuzzy-matched.

pub mod builder;
pub mod lookup;
pub mod resolver;
pub mod types;


pub use builder::{build_match_set, MatchConfig, MatchOutcome, SkippedRow};
pub use lookup::OrgLookup;
pub use resolver::{RepoResolver, TableResolver};
pub use types::{ArtifactError, MatchEntry, MatchSet, SkipReason};
