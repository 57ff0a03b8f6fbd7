//! Scoring functions — pure functions that map performance dimensions to
//! 0–100 subscores.
//!
//! Every scorer is a pure function: record fields (and an explicit `now`) in,
//! scalar out. No wall-clock reads, no I/O, no state. The composite is a
//! weighted sum of the five subscores, rounded to 2 decimal places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{days_between, StrategyRecord};
use crate::weights::ScoreWeights;

/// The five subscores plus the weighted composite for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub roi: f64,
    pub win_rate: f64,
    pub volume: f64,
    pub maturity: f64,
    pub activity: f64,
    /// Weighted sum of the subscores, rounded to 2 decimals.
    pub composite: f64,
}

impl ScoreBreakdown {
    /// Compute all subscores and the composite for a record at `now`.
    ///
    /// The activity subscore is evaluated from `updated_at` recency only —
    /// the record shape carries no last-bet timestamp, so `activity_score`
    /// is called with `last_bet_at = None`.
    pub fn compute(record: &StrategyRecord, weights: &ScoreWeights, now: DateTime<Utc>) -> Self {
        let roi = roi_score(record.roi_pct);
        let win_rate = win_rate_score(record.win_rate, record.total_bets);
        let volume = volume_score(record.total_bets);
        let maturity = maturity_score(record.created_at, now);
        let activity = activity_score(None, record.updated_at, now);

        let composite = round2(
            roi * weights.roi
                + win_rate * weights.win_rate
                + volume * weights.volume
                + maturity * weights.maturity
                + activity * weights.activity,
        );

        Self {
            roi,
            win_rate,
            volume,
            maturity,
            activity,
            composite,
        }
    }
}

// ─── Individual scoring functions ───────────────────────────────────

/// ROI subscore in `[0, 100]`.
///
/// ROI is clamped to `[-50, 200]` so small-sample outliers cannot distort
/// the curve, then rescaled linearly: `-50 → 0`, `0 → 50`, `+100 → 100`.
/// Anything above +100 saturates at 100.
pub fn roi_score(roi_pct: f64) -> f64 {
    let clamped = roi_pct.clamp(-50.0, 200.0);
    (((clamped + 50.0) / 150.0) * 100.0).clamp(0.0, 100.0)
}

/// Win-rate subscore in `[0, 100]`, discounted for small samples.
///
/// Accepts either a `0..=1` fraction or a `0..=100` percentage; values at or
/// below `1.0` are treated as fractions and multiplied by 100. A rate at or
/// below 40% scores 0; 60% scores 50; 80% reaches the cap before the sample
/// multiplier. The multiplier rewards volume (`>=500` bets → 1.10) and
/// penalizes thin samples (`<50` bets → 0.70); the final score never
/// exceeds 100.
pub fn win_rate_score(win_rate: f64, total_bets: u32) -> f64 {
    let pct = if win_rate <= 1.0 {
        win_rate * 100.0
    } else {
        win_rate
    };

    let base = ((pct - 40.0) * 2.5).max(0.0);

    let multiplier = if total_bets >= 500 {
        1.10
    } else if total_bets >= 200 {
        1.05
    } else if total_bets >= 100 {
        1.00
    } else if total_bets >= 50 {
        0.90
    } else {
        0.70
    };

    (base * multiplier).min(100.0)
}

/// Volume subscore in `[0, 100]`.
///
/// Step function with 100 bets as the threshold of statistical reliability
/// (70 points); below 10 bets the score ramps linearly toward zero.
pub fn volume_score(total_bets: u32) -> f64 {
    match total_bets {
        n if n >= 1000 => 100.0,
        n if n >= 500 => 90.0,
        n if n >= 200 => 80.0,
        n if n >= 100 => 70.0,
        n if n >= 50 => 50.0,
        n if n >= 25 => 30.0,
        n if n >= 10 => 15.0,
        n => n as f64 * 1.5,
    }
}

/// Maturity subscore in `[0, 100]` from strategy age at `now`.
///
/// 90 days is full maturity for leaderboard purposes (80 points); a year
/// maxes the scale. A brand-new strategy floors at 5 rather than 0, so no
/// eligible strategy scores as having zero credibility.
pub fn maturity_score(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = days_between(created_at, now);
    match days {
        d if d >= 365.0 => 100.0,
        d if d >= 180.0 => 90.0,
        d if d >= 90.0 => 80.0,
        d if d >= 60.0 => 60.0,
        d if d >= 30.0 => 40.0,
        d if d >= 14.0 => 25.0,
        d if d >= 7.0 => 15.0,
        d => (d * 2.0).max(5.0),
    }
}

/// Activity subscore in `[0, 100]`.
///
/// With a last-bet timestamp, recency is scored directly: same-day → 100,
/// decaying to 0 past a month. Without one, `updated_at` (refreshed when the
/// performance cache is recomputed) stands in as a weaker signal capped
/// at 50.
pub fn activity_score(
    last_bet_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    match last_bet_at {
        Some(last_bet) => {
            let days = days_between(last_bet, now);
            match days {
                d if d <= 1.0 => 100.0,
                d if d <= 3.0 => 90.0,
                d if d <= 7.0 => 75.0,
                d if d <= 14.0 => 50.0,
                d if d <= 30.0 => 25.0,
                d => (25.0 - d).max(0.0),
            }
        }
        None => {
            let days = days_between(updated_at, now);
            match days {
                d if d <= 7.0 => 50.0,
                d if d <= 30.0 => 25.0,
                _ => 10.0,
            }
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────

/// Round to 2 decimal places (leaderboard score precision).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
