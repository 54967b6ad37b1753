//! HTML results-table parser
//!
//! The leaderboard page is server-rendered; the results live in the first
//! `<table>` element. Cells are extracted with regexes and stripped of inner
//! markup. Expected columns: checkbox, Rank, Agent, Model, Date, Agent Org,
//! Model Org, Accuracy.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{LeaderboardRow, ScrapeError};

static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table.*?>(.*?)</table>").expect("valid regex"));
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr[^>]*>(.*?)</tr>").expect("valid regex"));
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<t[dh][^>]*>(.*?)</t[dh]>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static ACCURACY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)%±\s*([\d.]+|N/A)").expect("valid regex"));

/// Parse the leaderboard results table out of a full HTML page.
///
/// Rows that do not match the expected column layout are silently dropped;
/// the header row is recognized by its "Rank" cell. Row order is preserved.
///
/// # Errors
///
/// Returns `ScrapeError::TableNotFound` when the page has no `<table>`.
pub fn parse_table(html: &str) -> Result<Vec<LeaderboardRow>, ScrapeError> {
    let table = TABLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .ok_or(ScrapeError::TableNotFound)?;

    let mut rows = Vec::new();
    for row_html in ROW_RE.captures_iter(table.as_str()) {
        let cells: Vec<String> = CELL_RE
            .captures_iter(&row_html[1])
            .map(|c| strip_tags(&c[1]))
            .collect();

        if let Some(row) = parse_row(&cells) {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Parse one row's stripped cells into a `LeaderboardRow`.
///
/// Returns `None` for the header row, rows with an unexpected cell count,
/// and rows whose rank or accuracy cell does not parse.
fn parse_row(cells: &[String]) -> Option<LeaderboardRow> {
    // Column layout: [checkbox], Rank, Agent, Model, Date, Agent Org, Model Org, Accuracy
    let [_, rank, agent, model, date, agent_org, model_org, accuracy] = cells else {
        return None;
    };

    if rank == "Rank" {
        return None;
    }

    let rank = rank.parse::<u32>().ok()?;
    let (accuracy, error_margin) = parse_accuracy(accuracy)?;

    Some(LeaderboardRow {
        rank,
        agent: agent.clone(),
        model: model.clone(),
        date: date.clone(),
        agent_org: agent_org.clone(),
        model_org: model_org.clone(),
        accuracy,
        error_margin,
    })
}

/// Parse an accuracy cell like "75.1%± 2.4" or "60.7%± N/A".
pub(crate) fn parse_accuracy(cell: &str) -> Option<(f64, Option<f64>)> {
    let caps = ACCURACY_RE.captures(cell)?;
    let accuracy = caps[1].parse::<f64>().ok()?;
    let margin = match &caps[2] {
        "N/A" => None,
        m => Some(m.parse::<f64>().ok()?),
    };
    Some((accuracy, margin))
}

/// Remove inner HTML tags and surrounding whitespace from a cell.
fn strip_tags(cell: &str) -> String {
    TAG_RE.replace_all(cell, "").trim().to_string()
}
