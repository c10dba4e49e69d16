//! Engine facade: wires tagger, estimators, scorer and de-painter together.

use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::EngineConfig;
use crate::depaint::depaint;
use crate::divergence::diverge;
use crate::error::{EngineError, Result};
use crate::hyperbole;
use crate::lexical::LexicalFilter;
use crate::lexicon::LanguageModel;
use crate::scorer::{band, DistractionScorer};
use crate::sentiment::{sentiment_spike, SentimentEstimator};
use crate::tagger::Tagger;
use crate::types::{
    AnalysisResult, AnalyzeRequest, DepaintRequest, DepaintResult, DivergenceResult,
    HealthStatus, LexicalClassification, SentimentResult, TaggedDocument,
};
use crate::HP;

/// Stateless analysis engine. Cheap to share: the language resource sits
/// behind an `Arc` and every operation takes `&self`.
#[derive(Debug, Clone)]
pub struct Engine {
    model: Arc<LanguageModel>,
    config: EngineConfig,
    extra_intensifiers: FxHashSet<String>,
    scorer: DistractionScorer,
}

impl Engine {
    pub fn new(model: Arc<LanguageModel>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let extra_intensifiers = config
            .extra_intensifiers
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        let scorer = DistractionScorer::new(config.weights);
        Ok(Self {
            model,
            config,
            extra_intensifiers,
            scorer,
        })
    }

    /// Built-in language resource with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(LanguageModel::builtin()?), EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    fn tagger(&self) -> Tagger<'_> {
        Tagger::new(&self.model, self.config.max_chars)
    }

    fn filter(&self) -> LexicalFilter<'_> {
        LexicalFilter::new(
            &self.model,
            &self.extra_intensifiers,
            self.config.high_subjectivity,
        )
    }

    /// Score `text` and produce its de-painted rewrite.
    ///
    /// Text shorter than `min_chars` after trimming is rejected before any
    /// work is done. A blank baseline is treated as absent.
    pub fn analyze(&self, text: &str, baseline_text: Option<&str>) -> Result<AnalysisResult> {
        let len = text.trim().chars().count();
        if len < self.config.min_chars {
            return Err(EngineError::InputTooShort {
                len,
                min: self.config.min_chars,
            });
        }
        if len == 0 {
            return Err(EngineError::EmptyInput);
        }

        let tagger = self.tagger();
        let doc = tagger.tag(text);
        let baseline = baseline_text
            .filter(|b| !b.trim().is_empty())
            .map(|b| tagger.tag(b));
        debug!(
            tokens = doc.len(),
            sentences = doc.sentence_count(),
            truncated = doc.is_truncated(),
            baseline = baseline.is_some(),
            "tagged input"
        );

        let classification = self.filter().classify(&doc);

        let estimator = SentimentEstimator::new(&self.model);
        let sentiment = estimator.score(&doc);
        let baseline_sentiment = baseline.as_ref().map(|b| estimator.score(b));
        let spike = sentiment_spike(&sentiment, baseline_sentiment.as_ref());

        let divergence = diverge(&doc, &classification, baseline.as_ref());
        let score = round(self.scorer.score(spike, divergence.topical_divergence));
        let band = band(score);

        let depainted = depaint(&self.model, &doc, &classification);
        let hyperbole = hyperbole::detect(&self.model, &doc, &classification);

        debug!(score, spike, ?band, "analysis complete");

        Ok(AnalysisResult {
            distraction_score: score,
            band,
            analysis: band.advice().to_string(),
            sentiment_polarity: round(sentiment.polarity),
            sentiment_subjectivity: round(sentiment.subjectivity),
            adjective_count: classification.adjective_count(),
            topical_divergence: round(divergence.topical_divergence),
            original_text: doc.text().to_string(),
            de_painted_text: depainted.text,
            removed_terms: depainted.removed_terms,
            hyperbole,
        })
    }

    /// De-paint without scoring. No minimum length applies.
    pub fn depaint(&self, text: &str) -> Result<DepaintResult> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }
        let doc = self.tagger().tag(text);
        let classification = self.filter().classify(&doc);
        let depainted = depaint(&self.model, &doc, &classification);
        Ok(DepaintResult {
            original_text: doc.text().to_string(),
            de_painted_text: depainted.text,
            removed_terms: depainted.removed_terms,
        })
    }

    // -- single stages -----------------------------------------------------

    pub fn tag(&self, text: &str) -> TaggedDocument {
        self.tagger().tag(text)
    }

    pub fn classify(&self, doc: &TaggedDocument) -> LexicalClassification {
        self.filter().classify(doc)
    }

    pub fn sentiment(&self, text: &str) -> SentimentResult {
        SentimentEstimator::new(&self.model).score(&self.tag(text))
    }

    /// Topical divergence of `text`, against `baseline_text` when given.
    pub fn divergence(&self, text: &str, baseline_text: Option<&str>) -> DivergenceResult {
        let doc = self.tag(text);
        let classification = self.classify(&doc);
        let baseline = baseline_text
            .filter(|b| !b.trim().is_empty())
            .map(|b| self.tag(b));
        diverge(&doc, &classification, baseline.as_ref())
    }

    pub fn analyze_request(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.analyze(&request.text, request.baseline())
    }

    pub fn depaint_request(&self, request: &DepaintRequest) -> Result<DepaintResult> {
        self.depaint(&request.text)
    }

    /// Analyze requests in parallel. Results line up with `requests`.
    pub fn analyze_batch(&self, requests: &[AnalyzeRequest]) -> Vec<Result<AnalysisResult>> {
        requests
            .par_iter()
            .map(|request| self.analyze_request(request))
            .collect()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            lexicon_entries: self.model.entry_count(),
        }
    }
}

fn round(value: f64) -> f64 {
    (value * HP.rounding_scale).round() / HP.rounding_scale
}
