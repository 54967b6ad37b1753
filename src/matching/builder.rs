//! Match set builder
//!
//! Applies the filtering policy to scraped rows and resolves survivors to
//! Hub repositories. Output is a strict filtered projection of the input:
//! rank order preserved, no dedup, no merging. Two rows resolving to the
//! same repo both survive; the publish phase's open-request check is what
//! prevents duplicate side effects.

use crate::leaderboard::LeaderboardRow;

use super::lookup::OrgLookup;
use super::resolver::RepoResolver;
use super::types::{MatchEntry, MatchSet, SkipReason};

/// Filtering and matching policy for one collect run
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Only rows from this agent are considered (case-sensitive)
    pub accepted_agent: String,
    /// Orgs whose models are closed-source / not on the Hub
    pub excluded_orgs: Vec<String>,
    /// Explicit org display name → Hub org slug table
    pub org_lookup: OrgLookup,
    /// Provenance recorded in the artifact
    pub source: String,
}

impl MatchConfig {
    /// Policy for the Terminal-Bench leaderboard
    #[must_use]
    pub fn terminal_bench() -> Self {
        Self {
            accepted_agent: "Terminus 2".to_string(),
            excluded_orgs: ["OpenAI", "Google", "xAI", "Anthropic"]
                .map(String::from)
                .to_vec(),
            org_lookup: OrgLookup::terminal_bench_defaults(),
            source: crate::leaderboard::LEADERBOARD_URL.to_string(),
        }
    }
}

/// A row excluded during the build, with its reason
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    /// Leaderboard rank of the skipped row
    pub rank: u32,
    /// Model display name of the skipped row
    pub model: String,
    /// Org display name of the skipped row
    pub org: String,
    /// Why the row was excluded
    pub reason: SkipReason,
}

/// Result of one build pass: the artifact plus per-row skip reasons
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// The persisted match set
    pub set: MatchSet,
    /// Rows excluded by the filtering policy, in input order
    pub skipped: Vec<SkippedRow>,
}

/// Build the match set from scraped rows.
///
/// Per row, in order: reject on agent mismatch, then on excluded org
/// (case-insensitive), then on unmapped org, then on failed repo resolution.
/// Surviving rows are emitted verbatim as `MatchEntry`s. Skips are reported,
/// never treated as errors.
pub fn build_match_set(
    rows: &[LeaderboardRow],
    config: &MatchConfig,
    resolver: &dyn RepoResolver,
) -> MatchOutcome {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for row in rows {
        match match_row(row, config, resolver) {
            Ok(entry) => entries.push(entry),
            Err(reason) => skipped.push(SkippedRow {
                rank: row.rank,
                model: row.model.clone(),
                org: row.model_org.clone(),
                reason,
            }),
        }
    }

    MatchOutcome {
        set: MatchSet {
            source: config.source.clone(),
            entries,
        },
        skipped,
    }
}

/// Apply the filtering policy to one row.
fn match_row(
    row: &LeaderboardRow,
    config: &MatchConfig,
    resolver: &dyn RepoResolver,
) -> Result<MatchEntry, SkipReason> {
    if row.agent != config.accepted_agent {
        return Err(SkipReason::AgentMismatch);
    }

    if config
        .excluded_orgs
        .iter()
        .any(|org| org.eq_ignore_ascii_case(&row.model_org))
    {
        return Err(SkipReason::ClosedOrg);
    }

    let hub_org = config
        .org_lookup
        .resolve(&row.model_org)
        .ok_or(SkipReason::UnmappedOrg)?;

    let hub_repo_id = resolver
        .resolve(hub_org, &row.model)
        .ok_or(SkipReason::NoRepoFound)?;

    Ok(MatchEntry {
        hub_repo_id,
        model: row.model.clone(),
        accuracy: row.accuracy,
        date: row.date.clone(),
        agent: row.agent.clone(),
    })
}
