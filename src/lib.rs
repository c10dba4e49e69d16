//! Distraction scoring and de-painting for prose.
//!
//! `Engine::analyze` rates how much of a text is rhetorical decoration
//! (emotional tone plus modifier-heavy wording) and returns a "de-painted"
//! rewrite with removable adjectives and intensifiers stripped out.
//! `Engine::depaint` produces only the rewrite.

pub mod config;
pub mod depaint;
pub mod divergence;
pub mod engine;
pub mod error;
pub mod hyperbole;
pub mod lexical;
pub mod lexicon;
pub mod scorer;
pub mod sentiment;
pub mod tagger;
pub mod types;

pub use config::{EngineConfig, ScoreWeights};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use lexicon::{LanguageModel, LexiconOverlay};
pub use types::{
    AnalysisResult, AnalyzeRequest, DepaintRequest, DepaintResult, DistractionBand,
    HealthStatus, HyperboleKind, HyperboleMarker, LexicalClassification, PosTag,
    SentimentResult, TaggedDocument, Token,
};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    context_window_chars: usize,
    negation_factor: f64,
    default_min_chars: usize,
    default_max_chars: usize,
    default_sentiment_weight: f64,
    default_divergence_weight: f64,
    default_high_subjectivity: f64,
    weight_sum_tolerance: f64,
    band_high_min: f64,
    band_moderate_min: f64,
    rounding_scale: f64,
    adjective_suffix_min_chars: usize,
    ly_min_chars: usize,
    max_newlines_in_gap: usize,
}

static HP: Hyperparameters = Hyperparameters {
    context_window_chars: 60,
    negation_factor: -0.5,
    default_min_chars: 50,
    default_max_chars: 10_000,
    default_sentiment_weight: 0.4,
    default_divergence_weight: 0.6,
    default_high_subjectivity: 0.6,
    weight_sum_tolerance: 1e-6,
    band_high_min: 0.7,
    band_moderate_min: 0.4,
    rounding_scale: 1000.0,
    adjective_suffix_min_chars: 7,
    ly_min_chars: 5,
    max_newlines_in_gap: 2,
};
