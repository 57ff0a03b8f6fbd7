//! Eligibility gate — decides whether a strategy may appear on the
//! leaderboard at all, independent of its score.
//!
//! All four conditions must hold: the strategy is monetized, has enough
//! total bets, the upstream minimum-bets flag is set, and the strategy is at
//! least a week old. Ineligible strategies receive no score and no rank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::StrategyRecord;

/// Thresholds for the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Minimum total bets before a strategy can be ranked.
    pub min_total_bets: u32,
    /// Minimum strategy age, in days.
    pub min_age_days: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_total_bets: 10,
            min_age_days: 7.0,
        }
    }
}

/// Why a strategy was kept off the leaderboard.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum IneligibilityReason {
    #[error("strategy is not monetized")]
    NotMonetized,
    #[error("{total} total bets, {required} required")]
    InsufficientBets { total: u32, required: u32 },
    #[error("minimum-bets criterion not met upstream")]
    MinimumBetsNotMet,
    #[error("strategy is {age_days:.1} days old, {required_days:.0} required")]
    TooNew { age_days: f64, required_days: f64 },
}

/// Check a record against the gate, reporting the first failing condition.
///
/// The caller-supplied `is_eligible` hint on the record is ignored — this
/// check is authoritative.
pub fn check(
    record: &StrategyRecord,
    config: &EligibilityConfig,
    now: DateTime<Utc>,
) -> Result<(), IneligibilityReason> {
    if !record.is_monetized {
        return Err(IneligibilityReason::NotMonetized);
    }
    if record.total_bets < config.min_total_bets {
        return Err(IneligibilityReason::InsufficientBets {
            total: record.total_bets,
            required: config.min_total_bets,
        });
    }
    if !record.minimum_bets_met {
        return Err(IneligibilityReason::MinimumBetsNotMet);
    }
    let age_days = record.age_days(now);
    if age_days < config.min_age_days {
        return Err(IneligibilityReason::TooNew {
            age_days,
            required_days: config.min_age_days,
        });
    }
    Ok(())
}

/// Boolean projection of [`check`].
pub fn is_eligible(record: &StrategyRecord, config: &EligibilityConfig, now: DateTime<Utc>) -> bool {
    check(record, config, now).is_ok()
}
