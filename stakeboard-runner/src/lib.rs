//! Stakeboard Runner — leaderboard assembly, run history, config, export.
//!
//! This crate builds on `stakeboard-core` to provide:
//! - TOML-loadable ranking configuration (weights, eligibility gates, top-N)
//! - `Leaderboard::build`: validate → rank → per-sport re-rank → stamp
//! - Input fingerprinting and JSONL run history
//! - CSV/JSON export artifacts
//! - A seeded sample-data generator for demos and tests

pub mod config;
pub mod export;
pub mod history;
pub mod leaderboard;
pub mod sample;

pub use config::{ConfigError, RankingConfig};
pub use export::{export_csv, export_json, write_csv, write_json};
pub use history::{HistoryEntry, RankingHistory, TopEntry, WriteFilter};
pub use leaderboard::{input_fingerprint, BuildError, Leaderboard};
pub use sample::sample_records;
