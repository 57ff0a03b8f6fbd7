//! Input validation — the hardening boundary in front of the scoring
//! arithmetic.
//!
//! The ranker itself does not defensively check its inputs; non-finite
//! numbers would flow through the arithmetic and surface as nonsense scores.
//! Callers that ingest records from outside the process run them through
//! `validate_records` first. Negative bet counts are unrepresentable (`u32`),
//! so only the float fields and the count-sum invariant need checking.

use thiserror::Error;

use crate::domain::StrategyRecord;

/// A record that violates the data contract, with the offending strategy id.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("strategy '{strategy_id}': roi_pct is not finite ({value})")]
    NonFiniteRoi { strategy_id: String, value: f64 },
    #[error("strategy '{strategy_id}': win_rate is not finite ({value})")]
    NonFiniteWinRate { strategy_id: String, value: f64 },
    #[error("strategy '{strategy_id}': win_rate is negative ({value})")]
    NegativeWinRate { strategy_id: String, value: f64 },
    #[error(
        "strategy '{strategy_id}': settled counts sum to {settled}, exceeding {total} total bets"
    )]
    CountsExceedTotal {
        strategy_id: String,
        settled: u32,
        total: u32,
    },
}

/// Check one record against the data contract.
pub fn validate_record(record: &StrategyRecord) -> Result<(), ValidationError> {
    if !record.roi_pct.is_finite() {
        return Err(ValidationError::NonFiniteRoi {
            strategy_id: record.strategy_id.clone(),
            value: record.roi_pct,
        });
    }
    if !record.win_rate.is_finite() {
        return Err(ValidationError::NonFiniteWinRate {
            strategy_id: record.strategy_id.clone(),
            value: record.win_rate,
        });
    }
    if record.win_rate < 0.0 {
        return Err(ValidationError::NegativeWinRate {
            strategy_id: record.strategy_id.clone(),
            value: record.win_rate,
        });
    }
    let settled = record.winning_bets + record.losing_bets + record.push_bets;
    if settled > record.total_bets {
        return Err(ValidationError::CountsExceedTotal {
            strategy_id: record.strategy_id.clone(),
            settled,
            total: record.total_bets,
        });
    }
    Ok(())
}

/// Check a batch, failing on the first violating record.
pub fn validate_records(records: &[StrategyRecord]) -> Result<(), ValidationError> {
    for record in records {
        validate_record(record)?;
    }
    Ok(())
}
