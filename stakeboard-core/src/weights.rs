//! Composite score weights — caller-overridable with documented defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relative weight of each scoring dimension in the composite.
///
/// The defaults put ROI first (0.40) and recency last (0.05). Callers that
/// override them must keep the weights summing to 1.0 — `validate` enforces
/// this before a ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub roi: f64,
    pub win_rate: f64,
    pub volume: f64,
    pub maturity: f64,
    pub activity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            roi: 0.40,
            win_rate: 0.25,
            volume: 0.20,
            maturity: 0.10,
            activity: 0.05,
        }
    }
}

/// Why a weight set was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{name}' is not a finite non-negative number: {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("weights sum to {sum}, expected 1.0")]
    BadSum { sum: f64 },
}

impl ScoreWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    /// Check that every weight is finite and non-negative and that the sum
    /// is 1.0 within tolerance.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in [
            ("roi", self.roi),
            ("win_rate", self.win_rate),
            ("volume", self.volume),
            ("maturity", self.maturity),
            ("activity", self.activity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }

        let sum = self.roi + self.win_rate + self.volume + self.maturity + self.activity;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sum_to_one() {
        assert_eq!(ScoreWeights::default().validate(), Ok(()));
    }

    #[test]
    fn default_values() {
        let w = ScoreWeights::default();
        assert!((w.roi - 0.40).abs() < 1e-10);
        assert!((w.win_rate - 0.25).abs() < 1e-10);
        assert!((w.volume - 0.20).abs() < 1e-10);
        assert!((w.maturity - 0.10).abs() < 1e-10);
        assert!((w.activity - 0.05).abs() < 1e-10);
    }

    #[test]
    fn rejects_bad_sum() {
        let w = ScoreWeights {
            roi: 0.50,
            ..ScoreWeights::default()
        };
        assert!(matches!(w.validate(), Err(WeightsError::BadSum { .. })));
    }

    #[test]
    fn rejects_negative_weight() {
        let w = ScoreWeights {
            roi: -0.1,
            win_rate: 0.5,
            volume: 0.3,
            maturity: 0.2,
            activity: 0.1,
        };
        assert!(matches!(
            w.validate(),
            Err(WeightsError::InvalidWeight { name: "roi", .. })
        ));
    }

    #[test]
    fn rejects_nan_weight() {
        let w = ScoreWeights {
            activity: f64::NAN,
            ..ScoreWeights::default()
        };
        assert!(matches!(
            w.validate(),
            Err(WeightsError::InvalidWeight { name: "activity", .. })
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let w = ScoreWeights::default();
        let json = serde_json::to_string(&w).unwrap();
        let back: ScoreWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
