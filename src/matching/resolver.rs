//! Model-name → repository resolution strategies
//!
//! The org segment of a repo ID comes from the explicit org lookup; the repo
//! name for a given model display name has no single canonical derivation, so
//! resolution is a pluggable strategy. `HubClient` resolves through the Hub
//! model-search API (first result owned by the expected org); `TableResolver`
//! serves curated mappings and tests.

use std::collections::HashMap;

use crate::hub::HubClient;

/// Strategy for resolving a (Hub org, model display name) pair to a full
/// repository ID ("owner/name")
pub trait RepoResolver {
    /// Resolve a repository for `model` under `hub_org`.
    ///
    /// Returns `None` when no repository can be found; resolution failures
    /// are treated as no-match, never as run failures.
    fn resolve(&self, hub_org: &str, model: &str) -> Option<String>;
}

/// Static model display name → repo name table
#[derive(Clone, Debug, Default)]
pub struct TableResolver {
    repos: HashMap<String, String>,
}

impl TableResolver {
    /// Create a resolver from (model display name, repo name) pairs
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            repos: pairs
                .into_iter()
                .map(|(model, repo)| (model.to_string(), repo.to_string()))
                .collect(),
        }
    }
}

impl RepoResolver for TableResolver {
    fn resolve(&self, hub_org: &str, model: &str) -> Option<String> {
        self.repos
            .get(model)
            .map(|repo| format!("{hub_org}/{repo}"))
    }
}

impl RepoResolver for HubClient {
    /// Search the Hub for the model name and take the first result whose
    /// owner equals the expected org (case-insensitive). Search errors count
    /// as no-match.
    fn resolve(&self, hub_org: &str, model: &str) -> Option<String> {
        let results = self.search_models(model).ok()?;
        let want = hub_org.to_lowercase();

        results.into_iter().find(|m| {
            m.id.split('/')
                .next()
                .is_some_and(|owner| owner.to_lowercase() == want)
        }).map(|m| m.id)
    }
}
