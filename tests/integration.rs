use std::io::Write;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use dam_engine::{
    AnalyzeRequest, DepaintRequest, DistractionBand, Engine, EngineConfig, EngineError,
    HyperboleKind, LanguageModel, LexiconOverlay, ScoreWeights,
};

const HYPE: &str = "This absolutely incredible breakthrough is totally revolutionary!";
const NEUTRAL_BASELINE: &str = "The company announced a new product.";
const PLAIN: &str =
    "The committee met on Tuesday to review the budget and approve the hiring plan for next year.";

fn engine() -> Engine {
    Engine::with_defaults().unwrap()
}

fn engine_with(config: EngineConfig) -> Engine {
    Engine::new(Arc::new(LanguageModel::builtin().unwrap()), config).unwrap()
}

// ---------------------------------------------------------------------------
// De-painting
// ---------------------------------------------------------------------------

#[test]
fn depaint_strips_decorative_adjectives() {
    let result = engine()
        .depaint("The quick brown fox jumps over the lazy dog.")
        .unwrap();
    assert_eq!(result.de_painted_text, "The fox jumps over the dog.");
    assert_eq!(result.removed_terms, vec!["quick", "brown", "lazy"]);
    assert_eq!(
        result.original_text,
        "The quick brown fox jumps over the lazy dog."
    );
}

#[test]
fn depaint_never_empties_a_clause() {
    let result = engine().depaint("Beautiful.").unwrap();
    assert_eq!(result.de_painted_text, "Beautiful.");
    assert!(result.removed_terms.is_empty());
}

#[test]
fn depaint_is_idempotent() {
    let engine = engine();
    let text = "Our amazing new app delivers truly stunning results. \
                The quick brown fox jumps over the lazy dog. \
                Incredible, the team won the match.";
    let first = engine.depaint(text).unwrap();
    assert!(!first.removed_terms.is_empty());

    let second = engine.depaint(&first.de_painted_text).unwrap();
    assert!(
        second.removed_terms.is_empty(),
        "Second pass should remove nothing, got {:?}",
        second.removed_terms
    );
    assert_eq!(second.de_painted_text, first.de_painted_text);
}

#[test]
fn depaint_is_idempotent_after_dropping_an_opener() {
    let engine = engine();
    let first = engine
        .depaint("Truly, Stunning views await the visitors here.")
        .unwrap();
    assert_eq!(first.removed_terms, vec!["Truly", "Stunning"]);
    assert_eq!(first.de_painted_text, "Views await the visitors here.");

    let second = engine.depaint(&first.de_painted_text).unwrap();
    assert!(
        second.removed_terms.is_empty(),
        "Second pass should remove nothing, got {:?}",
        second.removed_terms
    );
    assert_eq!(second.de_painted_text, first.de_painted_text);
}

#[test]
fn depaint_keeps_duplicates_in_order() {
    let result = engine()
        .depaint("The big dog chased the big cat past the small dog.")
        .unwrap();
    assert_eq!(result.removed_terms, vec!["big", "big", "small"]);
}

#[test]
fn depaint_has_no_minimum_length() {
    let result = engine().depaint("A red car.").unwrap();
    assert_eq!(result.de_painted_text, "A car.");
}

#[test]
fn depaint_rejects_blank_input() {
    let err = engine().depaint("   \n ").unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput), "got {err:?}");
    assert!(err.is_client_error());
}

#[test]
fn odd_tokens_survive_depainting() {
    let result = engine()
        .depaint("Tom &amp; Jerry \u{1F600} shared a truly wonderful pizza.")
        .unwrap();
    assert!(result.de_painted_text.contains("&amp;"));
    assert!(result.de_painted_text.contains('\u{1F600}'));
    assert!(!result.removed_terms.iter().any(|t| t == "&amp;"));
    assert!(result.removed_terms.contains(&"wonderful".to_string()));
}

#[test]
fn non_latin_words_with_english_suffixes_do_not_panic() {
    let engine = engine();
    for word in ["ぁer", "ぁed", "ぁing", "ぁly", "ぁest", "ßer", "éed"] {
        let text = format!("The {word} report was filed on time.");
        let result = engine.depaint(&text);
        assert!(result.is_ok(), "{word}: got {result:?}");
        let analysis = engine_with(EngineConfig::default().with_min_chars(0)).analyze(&text, None);
        assert!(analysis.is_ok(), "{word}: got {analysis:?}");
    }
}

#[test]
fn depaint_request_matches_direct_call() {
    let engine = engine();
    let text = "The lazy dog slept.";
    let request = DepaintRequest {
        text: text.to_string(),
    };
    assert_eq!(
        engine.depaint_request(&request).unwrap(),
        engine.depaint(text).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[test]
fn hype_against_neutral_baseline_scores_high() {
    let result = engine().analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    assert!(
        result.sentiment_polarity > 0.5,
        "Polarity should be strongly positive, got {}",
        result.sentiment_polarity
    );
    assert!(result.adjective_count >= 1);
    assert!(
        result.distraction_score > 0.5,
        "Hype should score > 0.5, got {}",
        result.distraction_score
    );
    assert!(result.removed_terms.contains(&"incredible".to_string()));
    assert!(result.removed_terms.contains(&"revolutionary".to_string()));
    assert!(result.de_painted_text.contains("breakthrough"));
    assert!(!result.de_painted_text.contains("incredible"));
    assert_eq!(result.de_painted_text, "This breakthrough is!");
}

#[test]
fn hype_without_baseline_is_high_band() {
    let result = engine().analyze(HYPE, None).unwrap();
    assert_eq!(result.band, DistractionBand::High);
    assert_eq!(result.analysis, DistractionBand::High.advice());
}

#[test]
fn plain_text_is_low_band() {
    let result = engine().analyze(PLAIN, None).unwrap();
    assert!(
        result.distraction_score < 0.4,
        "Plain text should score < 0.4, got {}",
        result.distraction_score
    );
    assert_eq!(result.band, DistractionBand::Low);
    assert!(result.removed_terms.is_empty());
    assert_eq!(result.de_painted_text, PLAIN);
}

#[test]
fn blank_baseline_counts_as_absent() {
    let engine = engine();
    assert_eq!(
        engine.analyze(HYPE, Some("   ")).unwrap(),
        engine.analyze(HYPE, None).unwrap()
    );
}

#[test]
fn short_input_is_rejected() {
    let err = engine().analyze("Too short to judge.", None).unwrap_err();
    match err {
        EngineError::InputTooShort { len, min } => {
            assert_eq!(len, 19);
            assert_eq!(min, 50);
        }
        other => panic!("expected InputTooShort, got {other:?}"),
    }
}

#[test]
fn empty_input_is_too_short() {
    let err = engine().analyze("", None).unwrap_err();
    assert!(matches!(err, EngineError::InputTooShort { len: 0, .. }));
    assert_eq!(err.kind(), "input_too_short");
    assert!(err.is_client_error());
}

#[test]
fn analysis_is_deterministic() {
    let engine = engine();
    let a = engine.analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    let b = engine.analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn scores_stay_in_bounds() {
    let engine = engine();
    let texts = [
        HYPE,
        PLAIN,
        "Never, ever buy this absolutely horrible, disgusting, terrible product again!",
        "Everyone agrees the greatest, most amazing show ever is on tonight, truly.",
    ];
    for text in texts {
        for baseline in [None, Some(NEUTRAL_BASELINE)] {
            let r = engine.analyze(text, baseline).unwrap();
            assert!((0.0..=1.0).contains(&r.distraction_score), "{text}");
            assert!((0.0..=1.0).contains(&r.topical_divergence), "{text}");
            assert!((-1.0..=1.0).contains(&r.sentiment_polarity), "{text}");
            assert!((0.0..=1.0).contains(&r.sentiment_subjectivity), "{text}");
        }
    }
}

#[test]
fn raising_divergence_weight_raises_score() {
    let low = engine_with(
        EngineConfig::default().with_weights(ScoreWeights::with_divergence(0.6).unwrap()),
    );
    let high = engine_with(
        EngineConfig::default().with_weights(ScoreWeights::with_divergence(0.9).unwrap()),
    );
    let a = low.analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    let b = high.analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    assert_eq!(a.topical_divergence, 1.0);
    assert!(
        b.distraction_score > a.distraction_score,
        "expected {} > {}",
        b.distraction_score,
        a.distraction_score
    );
}

#[test]
fn band_agrees_with_reported_score() {
    let model = Arc::new(LanguageModel::builtin().unwrap());
    for step in 0..=1000 {
        let weight = f64::from(step) / 1000.0;
        let config =
            EngineConfig::default().with_weights(ScoreWeights::with_divergence(weight).unwrap());
        let engine = Engine::new(Arc::clone(&model), config).unwrap();
        for (text, baseline) in [(HYPE, Some(NEUTRAL_BASELINE)), (PLAIN, None)] {
            let r = engine.analyze(text, baseline).unwrap();
            assert_eq!(
                r.band,
                dam_engine::scorer::band(r.distraction_score),
                "weight {weight}, score {}",
                r.distraction_score
            );
            if r.distraction_score >= 0.4 {
                assert_ne!(r.band, DistractionBand::Low, "weight {weight}");
            }
        }
    }
}

#[test]
fn all_weight_on_divergence_scores_divergence() {
    let engine = engine_with(
        EngineConfig::default().with_weights(ScoreWeights::new(0.0, 1.0).unwrap()),
    );
    let result = engine.analyze(HYPE, None).unwrap();
    assert_eq!(result.distraction_score, result.topical_divergence);
}

#[test]
fn oversized_input_is_truncated() {
    let engine = engine_with(EngineConfig::default().with_max_chars(100).with_min_chars(10));
    let text = "The report covers the budget. ".repeat(20);
    let result = engine.analyze(&text, None).unwrap();
    let kept = result.original_text.chars().count();
    assert!(kept <= 100, "expected at most 100 chars, got {kept}");
    assert!(kept >= 50, "expected truncation near the cap, got {kept}");
}

#[test]
fn hyperbole_markers_are_reported() {
    let result = engine()
        .analyze(
            "Everyone agrees the greatest, most amazing show ever is on tonight, truly.",
            None,
        )
        .unwrap();
    let kinds: Vec<HyperboleKind> = result.hyperbole.iter().map(|m| m.kind).collect();
    assert!(kinds.contains(&HyperboleKind::Absolute));
    assert!(kinds.contains(&HyperboleKind::Superlative));
    let everyone = result
        .hyperbole
        .iter()
        .find(|m| m.term == "Everyone")
        .unwrap();
    assert!(everyone.context.contains("Everyone agrees"));
}

#[test]
fn extra_intensifiers_come_from_config() {
    let text = "The hecka fast car won the race.";
    assert!(!engine()
        .depaint(text)
        .unwrap()
        .removed_terms
        .contains(&"hecka".to_string()));

    let engine = engine_with(EngineConfig::default().with_extra_intensifiers(["hecka"]));
    assert!(engine
        .depaint(text)
        .unwrap()
        .removed_terms
        .contains(&"hecka".to_string()));
}

#[test]
fn result_serializes_expected_fields() {
    let result = engine().analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    for key in [
        "distraction_score",
        "band",
        "analysis",
        "sentiment_polarity",
        "sentiment_subjectivity",
        "adjective_count",
        "topical_divergence",
        "original_text",
        "de_painted_text",
        "removed_terms",
        "hyperbole",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(json["band"], "high");
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

#[test]
fn batch_preserves_order_and_matches_single_calls() {
    let engine = engine();
    let requests = vec![
        AnalyzeRequest::new(HYPE),
        AnalyzeRequest::new("Too short."),
        AnalyzeRequest::new(HYPE).with_baseline(NEUTRAL_BASELINE),
        AnalyzeRequest::new(PLAIN),
    ];
    let results = engine.analyze_batch(&requests);
    assert_eq!(results.len(), 4);
    assert_eq!(
        results[0].as_ref().unwrap(),
        &engine.analyze(HYPE, None).unwrap()
    );
    assert!(matches!(
        results[1],
        Err(EngineError::InputTooShort { .. })
    ));
    assert_eq!(
        results[2].as_ref().unwrap(),
        &engine.analyze(HYPE, Some(NEUTRAL_BASELINE)).unwrap()
    );
    assert_eq!(results[3].as_ref().unwrap().original_text, PLAIN);
}

#[test]
fn request_parses_without_baseline() {
    let request: AnalyzeRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
    assert_eq!(request.baseline(), None);
    let request: AnalyzeRequest =
        serde_json::from_str(r#"{"text": "hello", "baseline_text": ""}"#).unwrap();
    assert_eq!(request.baseline(), None);
}

// ---------------------------------------------------------------------------
// Configuration and resources
// ---------------------------------------------------------------------------

#[test]
fn weights_must_sum_to_one() {
    let err = ScoreWeights::new(0.7, 0.7).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }));
    assert!(ScoreWeights::with_divergence(1.5).is_err());
    assert!(ScoreWeights::new(-0.2, 1.2).is_err());
    assert!(ScoreWeights::new(f64::NAN, 1.0).is_err());
}

#[test]
fn engine_rejects_invalid_config() {
    let config = EngineConfig::default().with_min_chars(500).with_max_chars(100);
    let err = Engine::new(Arc::new(LanguageModel::builtin().unwrap()), config).unwrap_err();
    assert_eq!(err.kind(), "invalid_config");
    assert!(!err.is_client_error());
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"min_chars": 10, "weights": {{"sentiment": 0.5, "divergence": 0.5}}}}"#
    )
    .unwrap();
    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.min_chars, 10);
    assert_eq!(config.max_chars, 10_000);
    assert_eq!(config.weights, ScoreWeights::new(0.5, 0.5).unwrap());
}

#[test]
fn config_file_with_bad_weights_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"weights": {{"sentiment": 0.9, "divergence": 0.9}}}}"#
    )
    .unwrap();
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }), "got {err:?}");
}

#[test]
fn malformed_config_file_is_not_a_client_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"weights": "#).unwrap();
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }), "got {err:?}");
    assert_eq!(err.kind(), "invalid_config");
    assert!(!err.is_client_error());
}

#[test]
fn missing_overlay_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LanguageModel::load(Some(&dir.path().join("missing.json"))).unwrap_err();
    assert!(matches!(err, EngineError::TaggingResourceUnavailable { .. }));
    assert!(!err.is_client_error());
}

#[test]
fn overlay_with_bad_sentiment_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"sentiment": {{"glorp": [3.0, 0.5]}}}}"#).unwrap();
    let err = LanguageModel::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, EngineError::TaggingResourceUnavailable { .. }));
}

#[test]
fn overlay_adds_adjectives() {
    let overlay = LexiconOverlay {
        adjectives: vec!["glorp".to_string()],
        ..Default::default()
    };
    let model = LanguageModel::builtin().unwrap().with_overlay(overlay).unwrap();
    let engine = Engine::new(Arc::new(model), EngineConfig::default()).unwrap();
    let result = engine.depaint("The glorp machine hummed.").unwrap();
    assert_eq!(result.removed_terms, vec!["glorp"]);
    assert_eq!(result.de_painted_text, "The machine hummed.");
}

#[test]
fn health_reports_loaded_resource() {
    let engine = engine();
    let health = engine.health();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(health.lexicon_entries, engine.model().entry_count());
    assert!(health.lexicon_entries > 0);
}

// ---------------------------------------------------------------------------
// Single stages
// ---------------------------------------------------------------------------

#[test]
fn same_topic_baseline_does_not_diverge() {
    let engine = engine();
    let same = engine.divergence(NEUTRAL_BASELINE, Some(NEUTRAL_BASELINE));
    assert_eq!(same.topical_divergence, 0.0);
    let other = engine.divergence(HYPE, Some(NEUTRAL_BASELINE));
    assert_eq!(other.topical_divergence, 1.0);
}

#[test]
fn decoration_only_text_diverges_fully() {
    let divergence = engine().divergence("Beautiful!", None);
    assert_eq!(divergence.topical_divergence, 1.0);
    let divergence = engine().divergence("It is.", None);
    assert_eq!(divergence.topical_divergence, 0.0);
}

#[test]
fn sentiment_stage_is_lexicon_driven() {
    let engine = engine();
    let good = engine.sentiment("The results were good.");
    assert!((good.polarity - 0.7).abs() < 1e-9, "got {}", good.polarity);
    assert_eq!(
        engine.sentiment("The report lists the figures.").polarity,
        0.0
    );
}

#[test]
fn tagging_marks_sentences_and_clauses() {
    let engine = engine();
    let doc = engine.tag("Prices rose sharply; analysts were surprised. Trading resumed.");
    assert_eq!(doc.sentence_count(), 2);
    assert_eq!(doc.clause_count(), 3);
    let classification = engine.classify(&doc);
    assert_eq!(classification.flags().len(), doc.len());
}
