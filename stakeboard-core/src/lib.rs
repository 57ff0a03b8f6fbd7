//! Stakeboard Core — deterministic ranking engine for marketplace betting
//! strategies.
//!
//! This crate provides:
//! - `StrategyRecord`: the per-strategy performance snapshot and its ranking
//!   output fields
//! - Five pure scoring functions (ROI, win rate, volume, maturity, activity)
//!   and the weighted composite
//! - The eligibility gate deciding leaderboard admission
//! - `rank_strategies`: filter → score → sort → dense 1-based ranks
//! - An input-validation boundary for records arriving from outside the
//!   process
//!
//! Everything is synchronous and side-effect free; time-dependent functions
//! take `now` as an explicit parameter so results are deterministic under
//! test.

pub mod domain;
pub mod eligibility;
pub mod rank;
pub mod scoring;
pub mod validate;
pub mod weights;

pub use domain::{StrategyRecord, SubscriptionPricing, VerificationStatus};
pub use eligibility::{check as check_eligibility, is_eligible, EligibilityConfig, IneligibilityReason};
pub use rank::rank_strategies;
pub use scoring::{
    activity_score, maturity_score, roi_score, volume_score, win_rate_score, ScoreBreakdown,
};
pub use validate::{validate_record, validate_records, ValidationError};
pub use weights::{ScoreWeights, WeightsError};
