//! Topical divergence: how much of a text is decoration rather than topic.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::types::{DivergenceResult, LexicalClassification, TaggedDocument};

/// Distinct lemmas of noun, proper-noun and verb tokens.
pub fn content_lemmas(doc: &TaggedDocument) -> FxHashSet<&str> {
    doc.tokens()
        .iter()
        .filter(|t| t.pos.is_content())
        .map(|t| t.lemma.as_str())
        .collect()
}

/// Compare against a baseline when one is given, otherwise fall back to the
/// ratio of rhetorical tokens to rhetorical plus content tokens.
pub fn diverge(
    doc: &TaggedDocument,
    classification: &LexicalClassification,
    baseline: Option<&TaggedDocument>,
) -> DivergenceResult {
    let content = content_lemmas(doc);
    let rhetorical = classification.rhetorical_count();

    let divergence = if content.is_empty() {
        if rhetorical > 0 {
            1.0
        } else {
            0.0
        }
    } else if let Some(baseline) = baseline {
        let reference = content_lemmas(baseline);
        let shared = content.intersection(&reference).count();
        1.0 - shared as f64 / content.len() as f64
    } else {
        let content_tokens = doc.tokens().iter().filter(|t| t.pos.is_content()).count();
        rhetorical as f64 / (rhetorical + content_tokens) as f64
    };

    let topical_divergence = divergence.clamp(0.0, 1.0);
    debug!(
        content = content.len(),
        rhetorical,
        baseline = baseline.is_some(),
        topical_divergence,
        "divergence estimated"
    );
    DivergenceResult { topical_divergence }
}
