//! Engine configuration.
//!
//! Values callers may tune live here; internal tuning constants stay in the
//! crate-level hyperparameter table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::HP;

/// Weights applied to the sentiment spike and the topical divergence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub sentiment: f64,
    pub divergence: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sentiment: HP.default_sentiment_weight,
            divergence: HP.default_divergence_weight,
        }
    }
}

impl ScoreWeights {
    pub fn new(sentiment: f64, divergence: f64) -> Result<Self> {
        let weights = Self {
            sentiment,
            divergence,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Set the divergence weight; the sentiment weight takes the remainder.
    pub fn with_divergence(divergence: f64) -> Result<Self> {
        Self::new(1.0 - divergence, divergence)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, w) in [("sentiment", self.sentiment), ("divergence", self.divergence)] {
            if !w.is_finite() || w < 0.0 {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} weight must be a non-negative number, got {w}"),
                });
            }
        }
        let sum = self.sentiment + self.divergence;
        if (sum - 1.0).abs() > HP.weight_sum_tolerance {
            return Err(EngineError::InvalidConfig {
                reason: format!("weights must sum to 1, got {sum}"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum trimmed length, in characters, accepted by `analyze`.
    pub min_chars: usize,
    /// Input beyond this many characters is truncated.
    pub max_chars: usize,
    pub weights: ScoreWeights,
    /// Subjectivity at which a modifying adverb counts as an intensifier.
    pub high_subjectivity: f64,
    /// Lemmas treated as intensifiers in addition to the built-in set.
    pub extra_intensifiers: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_chars: HP.default_min_chars,
            max_chars: HP.default_max_chars,
            weights: ScoreWeights::default(),
            high_subjectivity: HP.default_high_subjectivity,
            extra_intensifiers: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig =
            serde_json::from_str(&raw).map_err(|e| EngineError::InvalidConfig {
                reason: format!("malformed config {}: {e}", path.display()),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_high_subjectivity(mut self, threshold: f64) -> Self {
        self.high_subjectivity = threshold;
        self
    }

    pub fn with_extra_intensifiers<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_intensifiers
            .extend(words.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "max_chars must be positive".to_string(),
            });
        }
        if self.min_chars > self.max_chars {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "min_chars ({}) exceeds max_chars ({})",
                    self.min_chars, self.max_chars
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.high_subjectivity) {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "high_subjectivity must be within [0, 1], got {}",
                    self.high_subjectivity
                ),
            });
        }
        self.weights.validate()
    }
}
