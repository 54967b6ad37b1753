//! Evaluation result record rendering
//!
//! Renders one matched entry as the YAML result file uploaded to
//! `.eval_results/<task_id>.yaml` on the target repo. The file is a
//! one-item YAML list so downstream tooling can append further results.

use serde::{Deserialize, Serialize};

use crate::matching::MatchEntry;

use super::config::PublishConfig;

/// One evaluation result, rendered as a YAML list item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalRecord {
    /// Benchmark dataset identification
    pub dataset: DatasetRef,
    /// Accuracy value, carried verbatim from the leaderboard
    pub value: f64,
    /// Result date
    pub date: String,
    /// Where the result came from
    pub source: SourceRef,
    /// Free-form notes ("agent: <agent>")
    pub notes: String,
}

/// Dataset identification inside a result record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Dataset ID
    pub id: String,
    /// Task ID
    pub task_id: String,
}

/// Source attribution inside a result record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Leaderboard URL
    pub url: String,
    /// Leaderboard display name
    pub name: String,
    /// Publishing user
    pub user: String,
}

impl EvalRecord {
    /// Build a record for one matched entry under the given run config.
    #[must_use]
    pub fn from_entry(entry: &MatchEntry, config: &PublishConfig) -> Self {
        Self {
            dataset: DatasetRef {
                id: config.dataset_id.clone(),
                task_id: config.task_id.clone(),
            },
            value: entry.accuracy,
            date: entry.date.clone(),
            source: SourceRef {
                url: config.source_url.clone(),
                name: config.source_name.clone(),
                user: config.user.clone(),
            },
            notes: format!("agent: {}", entry.agent),
        }
    }

    /// Render the record as a one-item YAML list.
    ///
    /// # Errors
    ///
    /// Returns the serialization error; in practice these types always
    /// serialize.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&[self])
    }

    /// Destination path of the result file on the target repo.
    #[must_use]
    pub fn path_in_repo(config: &PublishConfig) -> String {
        format!(".eval_results/{}.yaml", config.task_id)
    }

    /// Commit message (and PR title) for this record.
    ///
    /// Includes the accuracy value, and leads with the benchmark label so a
    /// later run's duplicate check recognizes the PR this commit opens.
    #[must_use]
    pub fn commit_message(&self, config: &PublishConfig) -> String {
        format!(
            "Add {} evaluation result: {}%",
            config.benchmark, self.value
        )
    }
}
