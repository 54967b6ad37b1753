//! Tests for publish decisions, the engine, and run accounting

use std::cell::RefCell;
use std::collections::HashMap;

use crate::hub::{Discussion, HubError};
use crate::matching::MatchEntry;

use super::config::PublishConfig;
use super::counters::RunCounters;
use super::decision::{decide, Decision, TitleMatcher};
use super::engine::{EntryOutcome, OpenRequestSource, PublishEngine, PublishExecutor, RunMode};

fn open_pr(num: u64, title: &str) -> Discussion {
    Discussion {
        num,
        title: title.to_string(),
        status: "open".to_string(),
        is_pull_request: true,
    }
}

fn entry(repo: &str) -> MatchEntry {
    MatchEntry {
        hub_repo_id: repo.to_string(),
        model: "Kimi K2".to_string(),
        accuracy: 57.9,
        date: "2025-11-05".to_string(),
        agent: "Terminus 2".to_string(),
    }
}

/// In-memory discussions source; `None` for a repo simulates a fetch error.
struct FakeRequests {
    repos: HashMap<String, Option<Vec<Discussion>>>,
}

impl FakeRequests {
    fn new() -> Self {
        Self {
            repos: HashMap::new(),
        }
    }

    fn with(mut self, repo: &str, discussions: Vec<Discussion>) -> Self {
        self.repos.insert(repo.to_string(), Some(discussions));
        self
    }

    fn failing(mut self, repo: &str) -> Self {
        self.repos.insert(repo.to_string(), None);
        self
    }
}

impl OpenRequestSource for FakeRequests {
    fn open_pull_requests(&self, repo_id: &str) -> Result<Vec<Discussion>, HubError> {
        match self.repos.get(repo_id) {
            Some(Some(discussions)) => Ok(discussions
                .iter()
                .filter(|d| d.is_open_pull_request())
                .cloned()
                .collect()),
            _ => Err(HubError::Http {
                message: "connection reset".to_string(),
            }),
        }
    }
}

/// Executor that records uploads; repos listed in `fail` error out.
struct FakeExecutor {
    uploads: RefCell<Vec<(String, String, String, String)>>,
    fail: Vec<String>,
}

impl FakeExecutor {
    fn new() -> Self {
        Self {
            uploads: RefCell::new(Vec::new()),
            fail: Vec::new(),
        }
    }

    fn failing_on(mut self, repo: &str) -> Self {
        self.fail.push(repo.to_string());
        self
    }
}

impl PublishExecutor for FakeExecutor {
    fn create_pull_request(
        &self,
        repo_id: &str,
        path_in_repo: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<Option<String>, HubError> {
        if self.fail.iter().any(|r| r == repo_id) {
            return Err(HubError::Status {
                status: 500,
                url: format!("https://huggingface.co/api/models/{repo_id}"),
                body: "upstream error".to_string(),
            });
        }
        self.uploads.borrow_mut().push((
            repo_id.to_string(),
            path_in_repo.to_string(),
            content.to_string(),
            commit_message.to_string(),
        ));
        Ok(Some(format!("https://huggingface.co/{repo_id}/discussions/1")))
    }
}

// ─── TitleMatcher tests ─────────────────────────────────────────────

#[test]
fn test_matcher_accepts_separator_variants() {
    let matcher = TitleMatcher::terminal_bench();
    assert!(matcher.matches("terminal_bench update"));
    assert!(matcher.matches("Terminal Bench v2"));
    assert!(matcher.matches("TERMINALBENCH"));
    assert!(matcher.matches("Add Terminal-Bench evaluation result"));
}

#[test]
fn test_matcher_rejects_unrelated_titles() {
    let matcher = TitleMatcher::terminal_bench();
    assert!(!matcher.matches("Fix typo in README"));
    assert!(!matcher.matches("terminal emulator support"));
    assert!(!matcher.matches("benchmark results"));
}

#[test]
fn test_matcher_custom_pattern() {
    let matcher = TitleMatcher::new(r"swe[-_ ]?bench").unwrap();
    assert!(matcher.matches("SWE Bench results"));
    assert!(!matcher.matches("Terminal-Bench results"));
}

// ─── decide tests ───────────────────────────────────────────────────

#[test]
fn test_decide_skips_on_duplicate() {
    let discussions = vec![open_pr(4, "Add Terminal-Bench evaluation result")];
    let decision = decide(&discussions, &TitleMatcher::terminal_bench());
    assert_eq!(
        decision,
        Decision::SkipDuplicate {
            title: "Add Terminal-Bench evaluation result".to_string()
        }
    );
}

#[test]
fn test_decide_unrelated_prs_never_block() {
    let discussions = vec![open_pr(7, "Fix typo in README")];
    let decision = decide(&discussions, &TitleMatcher::terminal_bench());
    assert_eq!(decision, Decision::PublishWithWarning { unrelated: 1 });
}

#[test]
fn test_decide_clean_repo_publishes() {
    let decision = decide(&[], &TitleMatcher::terminal_bench());
    assert_eq!(decision, Decision::Publish);
}

#[test]
fn test_decide_ignores_closed_and_non_pr_discussions() {
    let discussions = vec![
        Discussion {
            num: 1,
            title: "Add Terminal-Bench evaluation result".to_string(),
            status: "merged".to_string(),
            is_pull_request: true,
        },
        Discussion {
            num: 2,
            title: "Terminal-Bench question".to_string(),
            status: "open".to_string(),
            is_pull_request: false,
        },
    ];
    let decision = decide(&discussions, &TitleMatcher::terminal_bench());
    assert_eq!(decision, Decision::Publish);
}

#[test]
fn test_decide_duplicate_wins_over_warning() {
    let discussions = vec![
        open_pr(1, "Fix typo in README"),
        open_pr(2, "terminal_bench update"),
    ];
    let decision = decide(&discussions, &TitleMatcher::terminal_bench());
    assert!(matches!(decision, Decision::SkipDuplicate { .. }));
}

// ─── Engine tests ───────────────────────────────────────────────────

#[test]
fn test_engine_publishes_to_clean_repo() {
    let requests = FakeRequests::new().with("moonshotai/Kimi-K2", vec![]);
    let executor = FakeExecutor::new();
    let engine = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::Created { warned: false, .. }));

    let uploads = executor.uploads.borrow();
    assert_eq!(uploads.len(), 1);
    let (repo, path, content, message) = &uploads[0];
    assert_eq!(repo, "moonshotai/Kimi-K2");
    assert_eq!(path, ".eval_results/terminal_bench.yaml");
    assert!(content.contains("value: 57.9"));
    assert!(message.contains("57.9"));
}

#[test]
fn test_engine_is_idempotent_against_own_output() {
    // First run creates the PR; the second sees it pending and skips.
    let first_requests = FakeRequests::new().with("moonshotai/Kimi-K2", vec![]);
    let executor = FakeExecutor::new();
    let config = PublishConfig::default();
    let engine = PublishEngine::new(&first_requests, &executor, config.clone(), RunMode::Live);

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::Created { .. }));
    let created_title = executor.uploads.borrow()[0].3.clone();

    let second_requests =
        FakeRequests::new().with("moonshotai/Kimi-K2", vec![open_pr(9, &created_title)]);
    let engine = PublishEngine::new(&second_requests, &executor, config, RunMode::Live);

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::SkippedDuplicate { .. }));
    assert_eq!(executor.uploads.borrow().len(), 1);
}

#[test]
fn test_engine_check_failure_skips_entry() {
    let requests = FakeRequests::new().failing("moonshotai/Kimi-K2");
    let executor = FakeExecutor::new();
    let engine = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::SkippedCheckFailed { .. }));
    assert!(executor.uploads.borrow().is_empty());

    let mut counters = RunCounters::default();
    counters.record(&outcome);
    assert_eq!(counters.skipped, 1);
    assert_eq!(counters.failed, 0);
}

#[test]
fn test_engine_warns_but_publishes_past_unrelated_prs() {
    let requests = FakeRequests::new().with(
        "moonshotai/Kimi-K2",
        vec![open_pr(7, "Fix typo in README")],
    );
    let executor = FakeExecutor::new();
    let engine = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::Created { warned: true, .. }));
}

#[test]
fn test_engine_upload_failure_is_per_entry() {
    let requests = FakeRequests::new()
        .with("moonshotai/Kimi-K2", vec![])
        .with("zai-org/GLM-4.6", vec![]);
    let executor = FakeExecutor::new().failing_on("moonshotai/Kimi-K2");
    let engine = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);

    let failed = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(failed, EntryOutcome::Failed { .. }));

    // The run continues: the next entry still publishes.
    let created = engine.process_entry(&entry("zai-org/GLM-4.6"));
    assert!(matches!(created, EntryOutcome::Created { .. }));
}

// ─── Dry-run tests ──────────────────────────────────────────────────

#[test]
fn test_dry_run_previews_without_uploading() {
    let requests = FakeRequests::new().with("moonshotai/Kimi-K2", vec![]);
    let executor = FakeExecutor::new();
    let engine = PublishEngine::new(
        &requests,
        &executor,
        PublishConfig::default(),
        RunMode::DryRun,
    );

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    let EntryOutcome::Preview { rendered, .. } = &outcome else {
        panic!("Expected Preview, got {outcome:?}");
    };
    assert!(rendered.contains("value: 57.9"));
    assert!(executor.uploads.borrow().is_empty());

    let mut counters = RunCounters::default();
    counters.record(&outcome);
    assert_eq!(counters.processed, 1);
    assert_eq!(counters.created, 0);
    assert_eq!(counters.failed, 0);
}

#[test]
fn test_dry_run_preview_matches_live_upload_content() {
    let requests = FakeRequests::new().with("moonshotai/Kimi-K2", vec![]);

    let executor = FakeExecutor::new();
    let dry = PublishEngine::new(
        &requests,
        &executor,
        PublishConfig::default(),
        RunMode::DryRun,
    );
    let EntryOutcome::Preview { rendered, .. } = dry.process_entry(&entry("moonshotai/Kimi-K2"))
    else {
        panic!("Expected Preview");
    };

    let live = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);
    let outcome = live.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::Created { .. }));

    assert_eq!(executor.uploads.borrow()[0].2, rendered);
}

#[test]
fn test_dry_run_still_detects_duplicates() {
    let requests = FakeRequests::new().with(
        "moonshotai/Kimi-K2",
        vec![open_pr(4, "Add Terminal-Bench evaluation result")],
    );
    let executor = FakeExecutor::new();
    let engine = PublishEngine::new(
        &requests,
        &executor,
        PublishConfig::default(),
        RunMode::DryRun,
    );

    let outcome = engine.process_entry(&entry("moonshotai/Kimi-K2"));
    assert!(matches!(outcome, EntryOutcome::SkippedDuplicate { .. }));
}

// ─── Run accounting tests ───────────────────────────────────────────

#[test]
fn test_run_level_counter_arithmetic() {
    // N = 4 entries: K = 1 duplicate, M = 1 upload failure, rest created.
    let requests = FakeRequests::new()
        .with(
            "a/dup",
            vec![open_pr(1, "Add Terminal-Bench evaluation result")],
        )
        .with("b/fail", vec![])
        .with("c/ok", vec![])
        .with("d/ok", vec![open_pr(2, "Fix typo in README")]);
    let executor = FakeExecutor::new().failing_on("b/fail");
    let engine = PublishEngine::new(&requests, &executor, PublishConfig::default(), RunMode::Live);

    let mut counters = RunCounters::default();
    for repo in ["a/dup", "b/fail", "c/ok", "d/ok"] {
        counters.record(&engine.process_entry(&entry(repo)));
    }

    assert_eq!(counters.processed, 4);
    assert_eq!(counters.skipped, 1);
    assert_eq!(counters.created, 2);
    assert_eq!(counters.failed, 1);
    assert!(counters.is_failure());
}

#[test]
fn test_skips_alone_are_not_failure() {
    let mut counters = RunCounters::default();
    counters.record(&EntryOutcome::SkippedDuplicate {
        title: "Add Terminal-Bench evaluation result".to_string(),
    });
    counters.record(&EntryOutcome::SkippedCheckFailed {
        reason: "connection reset".to_string(),
    });

    assert_eq!(counters.processed, 2);
    assert_eq!(counters.skipped, 2);
    assert!(!counters.is_failure());
}

#[test]
fn test_counters_display_summary() {
    let mut counters = RunCounters::default();
    counters.record(&EntryOutcome::Created {
        warned: false,
        url: None,
    });
    assert_eq!(
        counters.to_string(),
        "processed: 1 | skipped: 0 | created: 1 | failed: 0"
    );
}

// ─── Property tests ─────────────────────────────────────────────────

use proptest::prelude::*;

fn arb_outcome() -> impl Strategy<Value = EntryOutcome> {
    prop_oneof![
        Just(EntryOutcome::SkippedDuplicate {
            title: "Add Terminal-Bench evaluation result".to_string()
        }),
        Just(EntryOutcome::SkippedCheckFailed {
            reason: "timeout".to_string()
        }),
        Just(EntryOutcome::Created {
            warned: false,
            url: None
        }),
        Just(EntryOutcome::Failed {
            warned: false,
            reason: "HTTP 500".to_string()
        }),
        Just(EntryOutcome::Preview {
            warned: false,
            rendered: String::new()
        }),
    ]
}

proptest! {
    /// processed always equals the number of recorded outcomes, and the
    /// categorized counters never exceed it.
    #[test]
    fn prop_counters_are_consistent(outcomes in proptest::collection::vec(arb_outcome(), 0..50)) {
        let mut counters = RunCounters::default();
        for outcome in &outcomes {
            counters.record(outcome);
        }

        prop_assert_eq!(counters.processed as usize, outcomes.len());
        prop_assert!(
            (counters.skipped + counters.created + counters.failed) <= counters.processed
        );
    }
}
