//! Hub REST API client
//!
//! One blocking client for the three Hub calls the pipeline makes: listing
//! repo discussions, searching models, and the create-pull-request commit
//! upload. Discussion listing and search work anonymously; the commit
//! upload requires a token.

use std::time::Duration;

use base64::Engine;
use serde::Deserialize;

use super::auth::resolve_token;
use super::error::HubError;

const HUB_API_BASE: &str = "https://huggingface.co/api";

/// A discussion or pull request on a Hub repo
///
/// Only `status`, `is_pull_request`, and the title text are read; open pull
/// requests are the relevant subset for publish decisions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Discussion {
    /// Discussion number within the repo
    pub num: u64,
    /// Discussion title
    pub title: String,
    /// Lifecycle status ("open", "closed", "merged", "draft")
    pub status: String,
    /// Whether the discussion is a pull request
    #[serde(rename = "isPullRequest", default)]
    pub is_pull_request: bool,
}

impl Discussion {
    /// Whether this discussion is an open pull request
    #[must_use]
    pub fn is_open_pull_request(&self) -> bool {
        self.is_pull_request && self.status == "open"
    }
}

#[derive(Debug, Deserialize)]
struct DiscussionPage {
    discussions: Vec<Discussion>,
}

/// A model repo returned by the Hub search API
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelSummary {
    /// Repository ID ("owner/name")
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    #[serde(rename = "pullRequestUrl")]
    pull_request_url: Option<String>,
}

/// Blocking HTTP client for the Hub REST API
pub struct HubClient {
    client: reqwest::blocking::Client,
    token: Option<String>,
    api_base: String,
}

impl HubClient {
    /// Create a client with automatic token resolution
    ///
    /// Missing tokens are not an error here: anonymous clients can list
    /// discussions and search models.
    ///
    /// # Errors
    ///
    /// Returns `HubError::Http` when the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, HubError> {
        Self::build(resolve_token())
    }

    /// Create a client with an explicit token
    ///
    /// # Errors
    ///
    /// Returns `HubError::Http` when the HTTP client cannot be constructed.
    pub fn with_token(token: impl Into<String>) -> Result<Self, HubError> {
        Self::build(Some(token.into()))
    }

    fn build(token: Option<String>) -> Result<Self, HubError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("publicar/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HubError::Http {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            token,
            api_base: HUB_API_BASE.to_string(),
        })
    }

    /// Whether the client resolved a token
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Borrow the token, or fail with `MissingToken`.
    ///
    /// # Errors
    ///
    /// Returns `HubError::MissingToken` for anonymous clients.
    pub fn require_token(&self) -> Result<&str, HubError> {
        self.token.as_deref().ok_or(HubError::MissingToken)
    }

    /// List all discussions and pull requests on a model repo.
    ///
    /// `GET /api/models/{repo_id}/discussions`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRepoId` for malformed IDs, `Http`/`Status` on request
    /// failure, `Decode` when the response does not parse.
    pub fn list_discussions(&self, repo_id: &str) -> Result<Vec<Discussion>, HubError> {
        validate_repo_id(repo_id)?;
        let url = format!("{}/models/{repo_id}/discussions", self.api_base);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| HubError::Http {
            message: e.to_string(),
        })?;
        let response = check_status(response, &url)?;

        let page: DiscussionPage = response.json().map_err(|e| HubError::Decode {
            message: e.to_string(),
        })?;
        Ok(page.discussions)
    }

    /// Search model repos by free-text query, most-liked first.
    ///
    /// `GET /api/models?search=...&sort=likes&limit=5`
    ///
    /// # Errors
    ///
    /// Returns `Http`/`Status` on request failure, `Decode` when the
    /// response does not parse.
    pub fn search_models(&self, query: &str) -> Result<Vec<ModelSummary>, HubError> {
        let url = format!("{}/models", self.api_base);

        let mut request = self
            .client
            .get(&url)
            .query(&[("search", query), ("sort", "likes"), ("limit", "5")]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| HubError::Http {
            message: e.to_string(),
        })?;
        let response = check_status(response, &url)?;

        response.json().map_err(|e| HubError::Decode {
            message: e.to_string(),
        })
    }

    /// Commit a single file to a repo as a new pull request.
    ///
    /// `POST /api/models/{repo_id}/commit/main?create_pr=1` with an NDJSON
    /// body: a header line carrying the commit message, then one base64 file
    /// line. Returns the pull request URL when the API reports one.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` for anonymous clients, `InvalidRepoId` for
    /// malformed IDs, `Http`/`Status` on request failure.
    pub fn create_pull_request(
        &self,
        repo_id: &str,
        path_in_repo: &str,
        content: &[u8],
        commit_message: &str,
    ) -> Result<Option<String>, HubError> {
        validate_repo_id(repo_id)?;
        let token = self.require_token()?;
        let url = format!("{}/models/{repo_id}/commit/main?create_pr=1", self.api_base);

        let header = serde_json::json!({
            "key": "header",
            "value": { "summary": commit_message, "description": "" },
        });
        let file = serde_json::json!({
            "key": "file",
            "value": {
                "content": base64::engine::general_purpose::STANDARD.encode(content),
                "path": path_in_repo,
                "encoding": "base64",
            },
        });
        let body = format!("{header}\n{file}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Content-Type", "application/x-ndjson")
            .body(body)
            .send()
            .map_err(|e| HubError::Http {
                message: e.to_string(),
            })?;
        let response = check_status(response, &url)?;

        // The PR URL is informational; a malformed success body is still a success.
        let commit: Option<CommitResponse> = response.json().ok();
        Ok(commit.and_then(|c| c.pull_request_url))
    }
}

/// Fail on non-success statuses, carrying the response body for diagnostics.
fn check_status(
    response: reqwest::blocking::Response,
    url: &str,
) -> Result<reqwest::blocking::Response, HubError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HubError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body: response.text().unwrap_or_default(),
        })
    }
}

/// Validate an "owner/name" repository ID.
fn validate_repo_id(repo_id: &str) -> Result<(), HubError> {
    let parts: Vec<&str> = repo_id.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(HubError::InvalidRepoId {
            repo_id: repo_id.to_string(),
        });
    }
    Ok(())
}

impl std::fmt::Debug for HubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClient")
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}
