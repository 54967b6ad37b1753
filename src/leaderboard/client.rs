//! Leaderboard HTTP client
//!
//! Fetches the leaderboard page over plain HTTP. No authentication: the
//! leaderboard is public, and scraping works anonymously.

use std::time::Duration;

use super::parser::parse_table;
use super::types::{LeaderboardRow, ScrapeError};

/// HTTP client for fetching the leaderboard page
pub struct LeaderboardClient {
    client: reqwest::blocking::Client,
}

impl LeaderboardClient {
    /// Create a new leaderboard client
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::ClientInit` when the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("publicar/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScrapeError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Fetch a leaderboard page and parse its results table.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Http` on transport failure, `Status` on a
    /// non-success response, and `TableNotFound` when the page has no table.
    pub fn fetch(&self, url: &str) -> Result<Vec<LeaderboardRow>, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Http {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().map_err(|e| ScrapeError::Http {
            message: e.to_string(),
        })?;

        parse_table(&body)
    }
}

impl std::fmt::Debug for LeaderboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardClient").finish_non_exhaustive()
    }
}
