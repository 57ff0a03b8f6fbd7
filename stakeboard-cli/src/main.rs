//! Stakeboard CLI — rank, sample, and history commands.
//!
//! Commands:
//! - `rank` — load strategy records from JSON, build the leaderboard, print a
//!   summary, optionally write JSON/CSV artifacts and append the run history
//! - `sample` — generate seeded demo records as JSON
//! - `history` — summarize a JSONL run-history file

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use stakeboard_core::StrategyRecord;
use stakeboard_runner::{
    sample_records, write_csv, write_json, HistoryEntry, Leaderboard, RankingConfig,
    RankingHistory, WriteFilter,
};

#[derive(Parser)]
#[command(
    name = "stakeboard",
    about = "Stakeboard CLI — marketplace strategy leaderboard engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank strategy records and build the leaderboard.
    Rank {
        /// Path to a JSON array of strategy records.
        #[arg(long)]
        input: PathBuf,

        /// Optional TOML config (weights, eligibility, top-N).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the ranked entries as JSON.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the leaderboard as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Append a run summary to this JSONL history file.
        #[arg(long)]
        history: Option<PathBuf>,

        /// How many entries to print (and keep in the history summary).
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Generate seeded sample records.
    Sample {
        /// Number of records to generate.
        #[arg(long, default_value_t = 100)]
        count: usize,

        /// RNG seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Summarize a JSONL run-history file.
    History {
        /// Path to the history file.
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            input,
            config,
            output,
            csv,
            history,
            top,
        } => run_rank(input, config, output, csv, history, top),
        Commands::Sample {
            count,
            seed,
            output,
        } => run_sample(count, seed, output),
        Commands::History { path } => run_history(&path),
    }
}

fn run_rank(
    input: PathBuf,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
    history_path: Option<PathBuf>,
    top: usize,
) -> Result<()> {
    let config = match config_path {
        Some(path) => RankingConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RankingConfig::default(),
    };

    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("reading records from {}", input.display()))?;
    let records: Vec<StrategyRecord> =
        serde_json::from_str(&content).context("parsing strategy records")?;

    let now = Utc::now();
    let board = Leaderboard::build(&records, &config, now)?;

    print_summary(&board, top);

    if let Some(path) = output {
        write_json(&board, &path)?;
        println!("JSON written to: {}", path.display());
    }
    if let Some(path) = csv {
        write_csv(&board, &config.weights, &path)?;
        println!("CSV written to: {}", path.display());
    }
    if let Some(path) = history_path {
        let history = RankingHistory::new(path.clone(), WriteFilter::default());
        let entry = HistoryEntry::from_leaderboard(&board, top);
        if history.append(&entry)? {
            println!("Run recorded in: {}", path.display());
        }
    }

    Ok(())
}

fn run_sample(count: usize, seed: u64, output: Option<PathBuf>) -> Result<()> {
    let records = sample_records(count, seed, Utc::now());
    let json = serde_json::to_string_pretty(&records)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("{count} sample records written to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_history(path: &std::path::Path) -> Result<()> {
    let history = RankingHistory::new(path.to_path_buf(), WriteFilter::default());
    let entries = history.read_all()?;

    if entries.is_empty() {
        println!("No runs recorded in: {}", path.display());
        return Ok(());
    }

    println!("Runs:      {}", entries.len());
    println!("File size: {} bytes", history.file_size_bytes()?);

    if let Some(last) = entries.last() {
        println!();
        println!("--- Last run ---");
        println!("Built at:    {}", last.built_at);
        println!("Fingerprint: {}", &last.fingerprint[..16.min(last.fingerprint.len())]);
        println!(
            "Eligible:    {} of {} supplied",
            last.eligible_count, last.total_count
        );
        for top in &last.top {
            println!("  {:<24} {:.2}", top.strategy_id, top.score);
        }
    }
    Ok(())
}

fn print_summary(board: &Leaderboard, top: usize) {
    println!();
    println!("=== Leaderboard ===");
    println!("Built at:   {}", board.built_at());
    println!(
        "Eligible:   {} of {} supplied",
        board.len(),
        board.total_count()
    );
    println!();
    println!(
        "{:<5} {:<24} {:<16} {:>8} {:>8} {:>6} {:>7}",
        "Rank", "Strategy", "Seller", "Score", "ROI%", "Bets", "Sport#"
    );
    println!("{}", "-".repeat(80));
    for entry in board.top(top) {
        println!(
            "{:<5} {:<24} {:<16} {:>8.2} {:>8.1} {:>6} {:>7}",
            entry.overall_rank.unwrap_or(0),
            truncate(&entry.name, 24),
            truncate(&entry.username, 16),
            entry.leaderboard_score.unwrap_or(0.0),
            entry.roi_pct,
            entry.total_bets,
            entry
                .sport_rank
                .map_or(String::from("-"), |r| r.to_string()),
        );
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
