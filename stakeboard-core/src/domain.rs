//! Domain types — the strategy performance snapshot and its ranking output.
//!
//! A `StrategyRecord` is produced upstream by an aggregation job that rolls
//! settled bets up into per-strategy counts and percentages. The ranking
//! engine treats each record as an immutable snapshot for the duration of one
//! pass and returns new records with the ranking fields populated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seller verification tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Verified,
    Premium,
}

/// Subscription price points for a monetized strategy. All optional — a
/// seller may offer any subset of billing periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPricing {
    pub weekly: Option<f64>,
    pub monthly: Option<f64>,
    pub yearly: Option<f64>,
}

/// Per-strategy performance snapshot, enriched with ranking output after a
/// ranking pass.
///
/// Field conventions:
/// - `roi_pct` is a signed percentage (`-50.0` = lost half the stake).
/// - `win_rate` accepts either a `0..=1` fraction or a `0..=100` percentage;
///   values at or below `1.0` are treated as fractions by the scorer.
/// - `winning_bets + losing_bets + push_bets <= total_bets`; unsettled bets
///   make the sum fall short of the total, so equality is never assumed.
/// - `leaderboard_score`, `overall_rank`, and `sport_rank` are `None` until
///   a ranking pass populates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecord {
    // ── Identity ──
    pub strategy_id: String,
    pub user_id: String,
    pub name: String,
    pub username: String,
    /// Sport tag used by the per-sport re-rank pass (e.g. "nfl", "nba").
    #[serde(default)]
    pub sport: Option<String>,

    // ── Trust ──
    #[serde(default)]
    pub is_verified_seller: bool,
    #[serde(default)]
    pub verification_status: VerificationStatus,

    // ── Volume ──
    pub total_bets: u32,
    pub winning_bets: u32,
    pub losing_bets: u32,
    pub push_bets: u32,

    // ── Performance ──
    pub roi_pct: f64,
    pub win_rate: f64,

    // ── Monetization ──
    pub is_monetized: bool,
    #[serde(default)]
    pub pricing: Option<SubscriptionPricing>,

    // ── Eligibility bookkeeping ──
    /// Computed by the upstream aggregation; opaque here.
    pub minimum_bets_met: bool,
    /// Caller-supplied hint. The eligibility filter is authoritative.
    #[serde(default)]
    pub is_eligible: bool,

    // ── Lifecycle ──
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Stamped by the leaderboard builder after a run, never by the ranker.
    #[serde(default)]
    pub last_calculated_at: Option<DateTime<Utc>>,

    // ── Ranking output ──
    #[serde(default)]
    pub leaderboard_score: Option<f64>,
    #[serde(default)]
    pub overall_rank: Option<u32>,
    #[serde(default)]
    pub sport_rank: Option<u32>,
}

impl StrategyRecord {
    /// Bets that have settled to a win or a loss (pushes excluded).
    pub fn decided_bets(&self) -> u32 {
        self.winning_bets + self.losing_bets
    }

    /// True once a ranking pass has populated the output fields.
    pub fn is_ranked(&self) -> bool {
        self.leaderboard_score.is_some() && self.overall_rank.is_some()
    }

    /// Strategy age at `now`, in fractional days. Negative ages (clock skew,
    /// future-dated records) clamp to zero.
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        days_between(self.created_at, now)
    }
}

/// Fractional days from `earlier` to `later`, floored at zero.
pub(crate) fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let secs = (later - earlier).num_seconds() as f64;
    (secs / 86_400.0).max(0.0)
}
