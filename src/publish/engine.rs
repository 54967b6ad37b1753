//! Publish engine
//!
//! Drives one matched entry from decision to terminal outcome. Entries are
//! independent: a failed upload records the failure and the run moves on,
//! and a failed open-request check skips the entry rather than risk a
//! duplicate PR. Re-running the publisher later is the retry mechanism.

use crate::hub::{Discussion, HubClient, HubError};
use crate::matching::MatchEntry;

use super::config::PublishConfig;
use super::decision::{decide, Decision, TitleMatcher};
use super::record::EvalRecord;

/// Source of a repo's open pull requests (the hub discussions API)
pub trait OpenRequestSource {
    /// List the open pull requests on a repo.
    ///
    /// # Errors
    ///
    /// Returns `HubError` when the listing call fails; the engine maps that
    /// to a skipped entry.
    fn open_pull_requests(&self, repo_id: &str) -> Result<Vec<Discussion>, HubError>;
}

/// Executor that uploads a rendered record as a new pull request
pub trait PublishExecutor {
    /// Open a pull request adding `content` at `path_in_repo`.
    ///
    /// Returns the PR URL when the API reports one.
    ///
    /// # Errors
    ///
    /// Returns `HubError` on upload failure; the engine counts the entry as
    /// failed and continues.
    fn create_pull_request(
        &self,
        repo_id: &str,
        path_in_repo: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<Option<String>, HubError>;
}

impl OpenRequestSource for HubClient {
    fn open_pull_requests(&self, repo_id: &str) -> Result<Vec<Discussion>, HubError> {
        let discussions = self.list_discussions(repo_id)?;
        Ok(discussions
            .into_iter()
            .filter(Discussion::is_open_pull_request)
            .collect())
    }
}

impl PublishExecutor for HubClient {
    fn create_pull_request(
        &self,
        repo_id: &str,
        path_in_repo: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<Option<String>, HubError> {
        HubClient::create_pull_request(self, repo_id, path_in_repo, content.as_bytes(), commit_message)
    }
}

/// Live vs dry-run execution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Upload for real
    Live,
    /// Full decision pass, but preview instead of uploading
    DryRun,
}

/// Terminal outcome for one matched entry
#[derive(Clone, Debug, PartialEq)]
pub enum EntryOutcome {
    /// An open PR already proposes this benchmark
    SkippedDuplicate {
        /// Title of the pending duplicate
        title: String,
    },
    /// The open-request check itself failed; skipped to avoid a duplicate
    SkippedCheckFailed {
        /// Why the check failed
        reason: String,
    },
    /// Pull request opened
    Created {
        /// Unrelated open PRs were present on the repo
        warned: bool,
        /// PR URL, when the API reported one
        url: Option<String>,
    },
    /// The upload call errored
    Failed {
        /// Unrelated open PRs were present on the repo
        warned: bool,
        /// Why the upload failed
        reason: String,
    },
    /// Dry run: what would have been uploaded
    Preview {
        /// Unrelated open PRs were present on the repo
        warned: bool,
        /// Rendered YAML record
        rendered: String,
    },
}

impl std::fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkippedDuplicate { title } => {
                write!(f, "skipped: open PR already proposes this benchmark ({title:?})")
            }
            Self::SkippedCheckFailed { reason } => {
                write!(f, "skipped: could not check open PRs ({reason})")
            }
            Self::Created { warned, url } => {
                write!(f, "opened pull request")?;
                if let Some(url) = url {
                    write!(f, " {url}")?;
                }
                if *warned {
                    write!(f, " (repo has other open PRs)")?;
                }
                Ok(())
            }
            Self::Failed { warned, reason } => {
                write!(f, "publish failed: {reason}")?;
                if *warned {
                    write!(f, " (repo has other open PRs)")?;
                }
                Ok(())
            }
            Self::Preview { warned, rendered } => {
                writeln!(f, "dry-run: would open a pull request with:")?;
                if *warned {
                    writeln!(f, "  (repo has other open PRs)")?;
                }
                for line in rendered.lines() {
                    writeln!(f, "    {line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Decision engine for one publish run
pub struct PublishEngine<'a> {
    requests: &'a dyn OpenRequestSource,
    executor: &'a dyn PublishExecutor,
    matcher: TitleMatcher,
    config: PublishConfig,
    mode: RunMode,
}

impl<'a> PublishEngine<'a> {
    /// Create an engine over the given collaborators
    #[must_use]
    pub fn new(
        requests: &'a dyn OpenRequestSource,
        executor: &'a dyn PublishExecutor,
        config: PublishConfig,
        mode: RunMode,
    ) -> Self {
        Self {
            requests,
            executor,
            matcher: TitleMatcher::terminal_bench(),
            config,
            mode,
        }
    }

    /// Replace the default benchmark title matcher
    #[must_use]
    pub fn with_matcher(mut self, matcher: TitleMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Resolve one matched entry to its terminal outcome.
    ///
    /// Self-contained and order-independent: the decision depends only on
    /// the entry and the repo's current open-request state.
    pub fn process_entry(&self, entry: &MatchEntry) -> EntryOutcome {
        let open = match self.requests.open_pull_requests(&entry.hub_repo_id) {
            Ok(open) => open,
            // Publishing blind risks a duplicate PR; skip and let the next
            // run re-check.
            Err(e) => {
                return EntryOutcome::SkippedCheckFailed {
                    reason: e.to_string(),
                }
            }
        };

        let warned = match decide(&open, &self.matcher) {
            Decision::SkipDuplicate { title } => return EntryOutcome::SkippedDuplicate { title },
            Decision::Publish => false,
            Decision::PublishWithWarning { .. } => true,
        };

        let record = EvalRecord::from_entry(entry, &self.config);
        let rendered = match record.to_yaml() {
            Ok(rendered) => rendered,
            Err(e) => {
                return EntryOutcome::Failed {
                    warned,
                    reason: format!("record rendering: {e}"),
                }
            }
        };

        match self.mode {
            RunMode::DryRun => EntryOutcome::Preview { warned, rendered },
            RunMode::Live => {
                let path = EvalRecord::path_in_repo(&self.config);
                let message = record.commit_message(&self.config);
                match self
                    .executor
                    .create_pull_request(&entry.hub_repo_id, &path, &rendered, &message)
                {
                    Ok(url) => EntryOutcome::Created { warned, url },
                    Err(e) => EntryOutcome::Failed {
                        warned,
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}

impl std::fmt::Debug for PublishEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishEngine")
            .field("mode", &self.mode)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
