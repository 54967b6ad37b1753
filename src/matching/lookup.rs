//! Leaderboard-org to Hub-org lookup table
//!
//! Maps leaderboard org display names to canonical Hub org slugs. Matching
//! is case-insensitive exact equality; several display spellings may map to
//! the same slug, never the reverse.

use std::collections::HashMap;

/// Case-insensitive org display name → Hub org slug mapping
///
/// The table is an explicit configuration value passed into the match set
/// builder; it is read-only during a run and extended only by edits between
/// runs.
#[derive(Clone, Debug, Default)]
pub struct OrgLookup {
    slugs: HashMap<String, String>,
}

impl OrgLookup {
    /// Create an empty lookup table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from (display name, slug) pairs
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut lookup = Self::new();
        for (display, slug) in pairs {
            lookup.insert(display, slug);
        }
        lookup
    }

    /// The orgs currently known to publish open weights on the Hub
    #[must_use]
    pub fn terminal_bench_defaults() -> Self {
        Self::from_pairs([
            ("Kimi", "moonshotai"),
            ("Moonshot AI", "moonshotai"),
            ("Z-AI", "zai-org"),
            ("Z.ai", "zai-org"),
            ("MiniMax", "minimaxai"),
            ("Alibaba", "Qwen"),
        ])
    }

    /// Register a display name → slug mapping
    pub fn insert(&mut self, display: &str, slug: &str) {
        self.slugs
            .insert(display.to_lowercase(), slug.to_string());
    }

    /// Resolve a leaderboard org display name to its Hub org slug.
    ///
    /// Case-insensitive exact match only; returns `None` for unknown orgs.
    #[must_use]
    pub fn resolve(&self, org: &str) -> Option<&str> {
        self.slugs.get(&org.to_lowercase()).map(String::as_str)
    }

    /// Number of distinct display names in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
