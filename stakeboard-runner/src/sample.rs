//! Sample record generator — seeded, deterministic demo data.
//!
//! Produces plausible marketplace strategies spanning the full spectrum the
//! ranking engine has to handle: sharp high-volume sellers, break-even
//! grinders, small-sample lottery winners, fresh strategies still inside the
//! age gate, and unmonetized trackers. Identical seeds produce identical
//! records, so demos and integration tests are reproducible.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stakeboard_core::{StrategyRecord, SubscriptionPricing, VerificationStatus};

const SPORTS: &[&str] = &["nfl", "nba", "mlb", "nhl", "soccer", "tennis"];

const NAME_POOL: &[&str] = &[
    "Underdog ML",
    "Home Favorites",
    "Road Dogs +7",
    "First Half Overs",
    "Live Middles",
    "Fade The Public",
    "Division Unders",
    "Prop Hunter",
    "Line Move Chaser",
    "Closing Value",
];

/// Generate `count` sample records at `now`, deterministically from `seed`.
pub fn sample_records(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<StrategyRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let sport = SPORTS[rng.gen_range(0..SPORTS.len())];
            let base_name = NAME_POOL[rng.gen_range(0..NAME_POOL.len())];
            let total_bets = match rng.gen_range(0..4) {
                0 => rng.gen_range(0..10),      // below the bet gate
                1 => rng.gen_range(10..100),    // thin but eligible
                2 => rng.gen_range(100..500),   // established
                _ => rng.gen_range(500..2000),  // high volume
            };
            let decided = (total_bets as f64 * rng.gen_range(0.85..1.0)) as u32;
            let win_rate = rng.gen_range(0.38..0.68);
            let winning_bets = (decided as f64 * win_rate) as u32;
            let losing_bets = decided.saturating_sub(winning_bets);
            let push_bets = total_bets - decided.min(total_bets);

            let age_days = rng.gen_range(0..500);
            let stale_days = rng.gen_range(0..60).min(age_days);
            let is_monetized = rng.gen_bool(0.7);

            StrategyRecord {
                strategy_id: format!("strat-{seed:x}-{i:04}"),
                user_id: format!("user-{:04}", rng.gen_range(0..500)),
                name: format!("{} {}", sport.to_uppercase(), base_name),
                username: format!("capper{}", rng.gen_range(1..300)),
                sport: Some(sport.to_string()),
                is_verified_seller: rng.gen_bool(0.3),
                verification_status: match rng.gen_range(0..3) {
                    0 => VerificationStatus::Unverified,
                    1 => VerificationStatus::Verified,
                    _ => VerificationStatus::Premium,
                },
                total_bets,
                winning_bets,
                losing_bets,
                push_bets,
                roi_pct: rng.gen_range(-40.0..120.0),
                win_rate,
                is_monetized,
                pricing: is_monetized.then(|| SubscriptionPricing {
                    weekly: Some(rng.gen_range(5.0..25.0)),
                    monthly: Some(rng.gen_range(20.0..80.0)),
                    yearly: rng.gen_bool(0.4).then(|| rng.gen_range(150.0..600.0)),
                }),
                minimum_bets_met: total_bets >= 10 && rng.gen_bool(0.9),
                is_eligible: false,
                created_at: now - Duration::days(age_days),
                updated_at: now - Duration::days(stale_days),
                last_calculated_at: None,
                leaderboard_score: None,
                overall_rank: None,
                sport_rank: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stakeboard_core::validate_records;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn deterministic_per_seed() {
        let a = sample_records(50, 42, now());
        let b = sample_records(50, 42, now());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = sample_records(50, 42, now());
        let b = sample_records(50, 43, now());
        assert_ne!(a, b);
    }

    #[test]
    fn generated_records_pass_validation() {
        let records = sample_records(200, 7, now());
        assert_eq!(records.len(), 200);
        validate_records(&records).unwrap();
    }

    #[test]
    fn spans_eligible_and_ineligible_regimes() {
        let records = sample_records(200, 7, now());
        assert!(records.iter().any(|r| r.is_monetized));
        assert!(records.iter().any(|r| !r.is_monetized));
        assert!(records.iter().any(|r| r.total_bets < 10));
        assert!(records.iter().any(|r| r.total_bets >= 500));
    }

    #[test]
    fn unmonetized_records_have_no_pricing() {
        let records = sample_records(100, 11, now());
        for r in records.iter().filter(|r| !r.is_monetized) {
            assert!(r.pricing.is_none());
        }
    }
}
