//! Leaderboard assembly — validate, rank, re-rank per sport, stamp.
//!
//! `Leaderboard::build` is the orchestration wrapper around the core ranker:
//! it validates incoming records, runs the ranking pass, optionally truncates
//! to the configured top N, assigns per-sport ranks within each sport group,
//! and stamps `last_calculated_at` on every surviving entry. The builder also
//! fingerprints its inputs so a run can be recognized in the history file.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use stakeboard_core::{rank_strategies, validate_records, StrategyRecord, ValidationError, WeightsError};

use crate::config::RankingConfig;

/// Errors from a leaderboard build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid weights: {0}")]
    Weights(#[from] WeightsError),
    #[error("invalid record: {0}")]
    Validation(#[from] ValidationError),
}

/// A built leaderboard: ranked entries plus build provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<StrategyRecord>,
    built_at: DateTime<Utc>,
    input_fingerprint: String,
    /// How many records were supplied, before eligibility filtering.
    total_count: usize,
}

impl Leaderboard {
    /// Build a leaderboard from raw records at `now`.
    ///
    /// Pipeline: validate weights → validate records → rank → truncate to
    /// `top_n` → per-sport re-rank → stamp `last_calculated_at = now`.
    pub fn build(
        records: &[StrategyRecord],
        config: &RankingConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, BuildError> {
        config.weights.validate()?;
        validate_records(records)?;

        let fingerprint = input_fingerprint(records, config);
        debug!(total = records.len(), %fingerprint, "ranking strategies");

        let mut entries = rank_strategies(records, &config.weights, &config.eligibility, now);

        if let Some(top_n) = config.top_n {
            entries.truncate(top_n);
        }

        assign_sport_ranks(&mut entries);

        for entry in &mut entries {
            entry.last_calculated_at = Some(now);
        }

        info!(
            eligible = entries.len(),
            total = records.len(),
            "leaderboard built"
        );

        Ok(Self {
            entries,
            built_at: now,
            input_fingerprint: fingerprint,
            total_count: records.len(),
        })
    }

    pub fn entries(&self) -> &[StrategyRecord] {
        &self.entries
    }

    /// The top `n` entries (fewer if the board is smaller).
    pub fn top(&self, n: usize) -> &[StrategyRecord] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Look up an entry by strategy id.
    pub fn get(&self, strategy_id: &str) -> Option<&StrategyRecord> {
        self.entries.iter().find(|e| e.strategy_id == strategy_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn input_fingerprint(&self) -> &str {
        &self.input_fingerprint
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }
}

/// Content-addressed fingerprint of a build's inputs (records + config).
///
/// Two builds over identical inputs produce the same fingerprint, letting
/// the history file recognize repeated runs.
pub fn input_fingerprint(records: &[StrategyRecord], config: &RankingConfig) -> String {
    let json = serde_json::to_string(&(records, config))
        .expect("ranking input serialization failed");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// Assign dense per-sport ranks within each sport group.
///
/// Entries arrive already sorted by overall rank, so walking them in order
/// and counting per sport yields each group's dense ranking. Entries without
/// a sport tag are left untouched.
fn assign_sport_ranks(entries: &mut [StrategyRecord]) {
    let mut counters: HashMap<String, u32> = HashMap::new();
    for entry in entries.iter_mut() {
        if let Some(sport) = entry.sport.clone() {
            let rank = counters.entry(sport).or_insert(0);
            *rank += 1;
            entry.sport_rank = Some(*rank);
        }
    }
}
