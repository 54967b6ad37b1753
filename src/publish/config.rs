//! Publishing configuration

/// Configuration for one publish run
///
/// Identifies the benchmark dataset being published and the attribution
/// recorded in each result file. One dataset per run; publishing results
/// for several benchmarks means several runs.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishConfig {
    /// Evaluation dataset ID (e.g., "terminal-bench")
    pub dataset_id: String,
    /// Task ID; names the uploaded result file
    pub task_id: String,
    /// Leaderboard URL recorded as the result source
    pub source_url: String,
    /// Human-readable leaderboard name
    pub source_name: String,
    /// Attribution user recorded in the result file
    pub user: String,
    /// Benchmark label used in commit messages and PR titles
    pub benchmark: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            dataset_id: "terminal-bench".to_string(),
            task_id: "terminal_bench".to_string(),
            source_url: crate::leaderboard::LEADERBOARD_URL.to_string(),
            source_name: "Terminal-Bench Leaderboard".to_string(),
            user: "terminal-bench-bot".to_string(),
            benchmark: "Terminal-Bench".to_string(),
        }
    }
}
