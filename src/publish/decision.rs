//! Per-repo publish decision
//!
//! Classifies a repo's open pull requests and picks one of three terminal
//! states. Title classification is a deliberately fuzzy, separator- and
//! case-insensitive token match ("terminal-bench", "terminal_bench",
//! "Terminal Bench", "TERMINALBENCH" all count). Exact dataset-ID equality
//! would miss humanly-written titles; the occasional false positive merely
//! skips a repo until the pending PR is resolved.

use std::sync::LazyLock;

use regex::Regex;

use crate::hub::Discussion;

/// Default fuzzy title pattern for the Terminal-Bench benchmark
pub const BENCHMARK_TITLE_PATTERN: &str = r"terminal[-_ ]?bench";

static DEFAULT_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){BENCHMARK_TITLE_PATTERN}")).expect("valid regex")
});

/// Case-insensitive benchmark title classifier
#[derive(Clone, Debug)]
pub struct TitleMatcher {
    regex: Regex,
}

impl TitleMatcher {
    /// Build a matcher from a custom pattern (compiled case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns the regex error for an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("(?i){pattern}"))?,
        })
    }

    /// The default Terminal-Bench matcher
    #[must_use]
    pub fn terminal_bench() -> Self {
        Self {
            regex: DEFAULT_MATCHER.clone(),
        }
    }

    /// Whether a PR title proposes this benchmark
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }
}

/// Terminal decision state for one matched entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// An open PR already proposes this benchmark; do nothing
    SkipDuplicate {
        /// Title of the duplicate request
        title: String,
    },
    /// No open PRs at all; publish
    Publish,
    /// Only unrelated open PRs; publish anyway, but surface their presence
    PublishWithWarning {
        /// Number of unrelated open PRs on the repo
        unrelated: usize,
    },
}

/// Decide whether a repo needs a new benchmark PR.
///
/// Only open pull requests participate; closed/merged discussions and
/// non-PR threads are ignored. Unrelated open PRs never block publishing.
#[must_use]
pub fn decide(discussions: &[Discussion], matcher: &TitleMatcher) -> Decision {
    let open_prs: Vec<&Discussion> = discussions
        .iter()
        .filter(|d| d.is_open_pull_request())
        .collect();

    if let Some(duplicate) = open_prs.iter().find(|d| matcher.matches(&d.title)) {
        return Decision::SkipDuplicate {
            title: duplicate.title.clone(),
        };
    }

    if open_prs.is_empty() {
        Decision::Publish
    } else {
        Decision::PublishWithWarning {
            unrelated: open_prs.len(),
        }
    }
}
