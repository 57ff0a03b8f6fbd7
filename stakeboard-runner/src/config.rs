//! Serializable ranking configuration — TOML-loadable weights and gates.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stakeboard_core::{EligibilityConfig, ScoreWeights, WeightsError};

/// Configuration for one leaderboard build.
///
/// All sections are optional in the TOML file; missing sections fall back to
/// the documented defaults. Weights are validated at load time so a bad
/// config fails fast rather than producing a skewed leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Truncate the leaderboard to the top N entries after ranking.
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub eligibility: EligibilityConfig,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: None,
            weights: ScoreWeights::default(),
            eligibility: EligibilityConfig::default(),
        }
    }
}

/// Errors from loading or validating a ranking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightsError),
}

impl RankingConfig {
    /// Parse from a TOML string and validate the weights.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.weights.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate the weights.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
