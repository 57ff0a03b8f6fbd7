//! Leaderboard export — JSON and CSV artifact generation.
//!
//! Two formats:
//! - **JSON**: full round-trip serialization of the ranked entries
//! - **CSV**: one row per entry with identity, subscores, and composite,
//!   for spreadsheets and external analysis tools
//!
//! The CSV recomputes each entry's `ScoreBreakdown` at the board's build
//! time, so the subscore columns always agree with the persisted composite.

use std::path::Path;

use anyhow::{Context, Result};

use stakeboard_core::{ScoreBreakdown, ScoreWeights};

use crate::leaderboard::Leaderboard;

/// Serialize the ranked entries to pretty JSON.
pub fn export_json(board: &Leaderboard) -> Result<String> {
    serde_json::to_string_pretty(board.entries())
        .context("failed to serialize leaderboard to JSON")
}

/// Write the JSON artifact to `path`, creating parent directories.
pub fn write_json(board: &Leaderboard, path: &Path) -> Result<()> {
    let json = export_json(board)?;
    write_artifact(path, &json)
}

/// Export the leaderboard as CSV.
///
/// Columns: overall_rank, sport_rank, strategy_id, name, username, sport,
/// total_bets, roi_pct, win_rate, roi_score, win_rate_score, volume_score,
/// maturity_score, activity_score, leaderboard_score
pub fn export_csv(board: &Leaderboard, weights: &ScoreWeights) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "overall_rank",
        "sport_rank",
        "strategy_id",
        "name",
        "username",
        "sport",
        "total_bets",
        "roi_pct",
        "win_rate",
        "roi_score",
        "win_rate_score",
        "volume_score",
        "maturity_score",
        "activity_score",
        "leaderboard_score",
    ])?;

    for entry in board.entries() {
        let breakdown = ScoreBreakdown::compute(entry, weights, board.built_at());
        let overall_rank = entry.overall_rank.map_or(String::new(), |r| r.to_string());
        let sport_rank = entry.sport_rank.map_or(String::new(), |r| r.to_string());
        let score = entry
            .leaderboard_score
            .map_or(String::new(), |s| format!("{s:.2}"));
        wtr.write_record([
            overall_rank.as_str(),
            sport_rank.as_str(),
            entry.strategy_id.as_str(),
            entry.name.as_str(),
            entry.username.as_str(),
            entry.sport.as_deref().unwrap_or(""),
            entry.total_bets.to_string().as_str(),
            format!("{:.2}", entry.roi_pct).as_str(),
            format!("{:.4}", entry.win_rate).as_str(),
            format!("{:.2}", breakdown.roi).as_str(),
            format!("{:.2}", breakdown.win_rate).as_str(),
            format!("{:.2}", breakdown.volume).as_str(),
            format!("{:.2}", breakdown.maturity).as_str(),
            format!("{:.2}", breakdown.activity).as_str(),
            score.as_str(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write the CSV artifact to `path`, creating parent directories.
pub fn write_csv(board: &Leaderboard, weights: &ScoreWeights, path: &Path) -> Result<()> {
    let csv = export_csv(board, weights)?;
    write_artifact(path, &csv)
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))
}
