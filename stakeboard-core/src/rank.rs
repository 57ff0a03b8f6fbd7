//! Ranker — filter, score, sort, and assign dense 1-based ranks.
//!
//! `rank_strategies` is a pure function over its input slice: it returns new
//! records with `leaderboard_score` and `overall_rank` populated and never
//! touches the caller's data. Ineligible strategies are dropped entirely.
//!
//! Ties on the composite score are broken by ascending `strategy_id`, so a
//! ranking pass over identical inputs is reproducible byte-for-byte. Ranks
//! are dense: positions `1..=N` with no gaps, tied scores getting distinct
//! consecutive ranks.

use chrono::{DateTime, Utc};

use crate::domain::StrategyRecord;
use crate::eligibility::{self, EligibilityConfig};
use crate::scoring::ScoreBreakdown;
use crate::weights::ScoreWeights;

/// Rank a collection of strategy records at `now`.
///
/// Pipeline: eligibility filter → composite score → sort descending by
/// score (ascending `strategy_id` on ties) → assign `overall_rank`.
///
/// Empty input, or input with no eligible strategies, returns an empty
/// vector. `last_calculated_at` and `sport_rank` are left untouched — both
/// belong to the caller.
pub fn rank_strategies(
    records: &[StrategyRecord],
    weights: &ScoreWeights,
    eligibility: &EligibilityConfig,
    now: DateTime<Utc>,
) -> Vec<StrategyRecord> {
    let mut ranked: Vec<StrategyRecord> = records
        .iter()
        .filter(|r| eligibility::is_eligible(r, eligibility, now))
        .map(|r| {
            let breakdown = ScoreBreakdown::compute(r, weights, now);
            let mut out = r.clone();
            out.leaderboard_score = Some(breakdown.composite);
            out.is_eligible = true;
            out
        })
        .collect();

    ranked.sort_by(|a, b| {
        let sa = a.leaderboard_score.unwrap_or(f64::NEG_INFINITY);
        let sb = b.leaderboard_score.unwrap_or(f64::NEG_INFINITY);
        sb.partial_cmp(&sa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.strategy_id.cmp(&b.strategy_id))
    });

    for (i, record) in ranked.iter_mut().enumerate() {
        record.overall_rank = Some(i as u32 + 1);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap()
    }

    fn make_record(id: &str, roi_pct: f64, win_rate: f64, total_bets: u32) -> StrategyRecord {
        StrategyRecord {
            strategy_id: id.into(),
            user_id: format!("user-{id}"),
            name: format!("Strategy {id}"),
            username: format!("seller-{id}"),
            sport: None,
            is_verified_seller: false,
            verification_status: Default::default(),
            total_bets,
            winning_bets: total_bets / 2,
            losing_bets: total_bets / 2,
            push_bets: 0,
            roi_pct,
            win_rate,
            is_monetized: true,
            pricing: None,
            minimum_bets_met: true,
            is_eligible: false,
            created_at: now() - Duration::days(240),
            updated_at: now() - Duration::days(1),
            last_calculated_at: None,
            leaderboard_score: None,
            overall_rank: None,
            sport_rank: None,
        }
    }

    fn rank(records: &[StrategyRecord]) -> Vec<StrategyRecord> {
        rank_strategies(
            records,
            &ScoreWeights::default(),
            &EligibilityConfig::default(),
            now(),
        )
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn sorted_descending_with_dense_ranks() {
        let records = vec![
            make_record("a", 5.0, 0.52, 100),
            make_record("b", 40.0, 0.62, 400),
            make_record("c", 20.0, 0.57, 250),
        ];
        let ranked = rank(&records);
        assert_eq!(ranked.len(), 3);

        let ids: Vec<&str> = ranked.iter().map(|r| r.strategy_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        for (i, r) in ranked.iter().enumerate() {
            assert_eq!(r.overall_rank, Some(i as u32 + 1));
            assert!(r.leaderboard_score.is_some());
        }
        let scores: Vec<f64> = ranked.iter().map(|r| r.leaderboard_score.unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn ineligible_records_never_returned() {
        let mut unmonetized = make_record("a", 50.0, 0.70, 500);
        unmonetized.is_monetized = false;
        let too_few = make_record("b", 50.0, 0.70, 9);
        let eligible = make_record("c", 2.0, 0.51, 50);

        let ranked = rank(&[unmonetized, too_few, eligible]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].strategy_id, "c");
        assert_eq!(ranked[0].overall_rank, Some(1));
    }

    #[test]
    fn high_roi_but_ungated_is_excluded() {
        // A: solid and proven. B: better raw numbers but the upstream
        // minimum-bets criterion failed — excluded regardless of score.
        let mut a = make_record("a", 15.5, 0.55, 500);
        a.created_at = now() - Duration::days(8 * 30);
        let mut b = make_record("b", 35.2, 0.64, 75);
        b.created_at = now() - Duration::days(2 * 30);
        b.minimum_bets_met = false;

        let ranked = rank(&[a, b]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].strategy_id, "a");
    }

    #[test]
    fn ties_get_distinct_consecutive_ranks() {
        // Identical inputs apart from id → identical composite scores.
        let records = vec![
            make_record("beta", 10.0, 0.55, 200),
            make_record("alpha", 10.0, 0.55, 200),
        ];
        let ranked = rank(&records);
        assert_eq!(ranked.len(), 2);
        assert_eq!(
            ranked[0].leaderboard_score,
            ranked[1].leaderboard_score
        );
        // Tie broken by ascending strategy_id.
        assert_eq!(ranked[0].strategy_id, "alpha");
        assert_eq!(ranked[0].overall_rank, Some(1));
        assert_eq!(ranked[1].strategy_id, "beta");
        assert_eq!(ranked[1].overall_rank, Some(2));
    }

    #[test]
    fn tie_break_is_input_order_independent() {
        let a = make_record("alpha", 10.0, 0.55, 200);
        let b = make_record("beta", 10.0, 0.55, 200);
        let forward = rank(&[a.clone(), b.clone()]);
        let reversed = rank(&[b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn input_records_untouched() {
        let records = vec![make_record("a", 5.0, 0.52, 100)];
        let _ = rank(&records);
        assert_eq!(records[0].leaderboard_score, None);
        assert_eq!(records[0].overall_rank, None);
    }

    #[test]
    fn caller_owned_fields_left_alone() {
        let mut r = make_record("a", 5.0, 0.52, 100);
        r.last_calculated_at = Some(now() - Duration::days(3));
        r.sport_rank = Some(9);
        let ranked = rank(&[r.clone()]);
        assert_eq!(ranked[0].last_calculated_at, r.last_calculated_at);
        assert_eq!(ranked[0].sport_rank, Some(9));
    }

    #[test]
    fn scores_rounded_to_two_decimals() {
        let ranked = rank(&[make_record("a", 7.31, 0.537, 183)]);
        let score = ranked[0].leaderboard_score.unwrap();
        assert!((score * 100.0).fract().abs() < 1e-9);
    }
}
