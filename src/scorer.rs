use crate::config::ScoreWeights;
use crate::types::DistractionBand;
use crate::HP;

/// Weighted blend of sentiment spike and topical divergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistractionScorer {
    weights: ScoreWeights,
}

impl DistractionScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn score(&self, sentiment_spike: f64, topical_divergence: f64) -> f64 {
        let raw = self.weights.sentiment * sentiment_spike
            + self.weights.divergence * topical_divergence;
        raw.clamp(0.0, 1.0)
    }
}

pub fn band(score: f64) -> DistractionBand {
    if score >= HP.band_high_min {
        DistractionBand::High
    } else if score >= HP.band_moderate_min {
        DistractionBand::Moderate
    } else {
        DistractionBand::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let scorer = DistractionScorer::new(ScoreWeights::default());
        let score = scorer.score(0.5, 1.0);
        assert!((score - 0.8).abs() < 1e-9, "expected 0.8, got {score}");
    }

    #[test]
    fn test_score_is_clamped() {
        let scorer = DistractionScorer::new(ScoreWeights::default());
        assert_eq!(scorer.score(3.0, 3.0), 1.0);
        assert_eq!(scorer.score(-1.0, 0.0), 0.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(band(0.0), DistractionBand::Low);
        assert_eq!(band(0.39), DistractionBand::Low);
        assert_eq!(band(0.4), DistractionBand::Moderate);
        assert_eq!(band(0.69), DistractionBand::Moderate);
        assert_eq!(band(0.7), DistractionBand::High);
        assert_eq!(band(1.0), DistractionBand::High);
    }
}
