//! Terminal-Bench Leaderboard Extraction
//!
//! Fetch the leaderboard HTML page and parse the results table into ordered
//! rows. The scrape is deliberately tolerant: unparseable rows are dropped,
//! the survivors keep their leaderboard rank order.
//!
//! # Example
//!
//! ```ignore
//! use publicar::leaderboard::LeaderboardClient;
//!
//! let client = LeaderboardClient::new()?;
//! let rows = client.fetch(publicar::leaderboard::LEADERBOARD_URL)?;
//! println!("Top model: {}", rows[0].model);
//! ```

pub mod client;
pub mod parser;
pub mod types;


pub use client::LeaderboardClient;
pub use parser::parse_table;
pub use types::{LeaderboardRow, ScrapeError};

/// Default leaderboard page scraped by `publicar collect`
pub const LEADERBOARD_URL: &str = "https://www.tbench.ai/leaderboard/terminal-bench/2.0";
