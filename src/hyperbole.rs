//! Hyperbole markers: superlatives, absolutes and intensifiers, each with a
//! short context snippet. Informational only; nothing here feeds the score.

use crate::lexicon::LanguageModel;
use crate::types::{HyperboleKind, HyperboleMarker, LexicalClassification, PosTag, TaggedDocument};
use crate::HP;

pub fn detect(
    model: &LanguageModel,
    doc: &TaggedDocument,
    classification: &LexicalClassification,
) -> Vec<HyperboleMarker> {
    let tokens = doc.tokens();
    let mut markers = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let lower = token.surface.to_lowercase();
        let kind = if is_superlative(doc, i, &lower) {
            Some(HyperboleKind::Superlative)
        } else if model.is_absolute(&lower) {
            Some(HyperboleKind::Absolute)
        } else if classification.get(i).is_intensifier {
            Some(HyperboleKind::Intensifier)
        } else {
            None
        };

        if let Some(kind) = kind {
            markers.push(HyperboleMarker {
                term: token.surface.clone(),
                kind,
                context: context_around(
                    doc.text(),
                    token.span.0,
                    token.span.1,
                    HP.context_window_chars,
                ),
            });
        }
    }
    markers
}

fn is_superlative(doc: &TaggedDocument, i: usize, lower: &str) -> bool {
    let token = &doc.tokens()[i];
    match token.pos {
        PosTag::Adjective => {
            matches!(lower, "best" | "worst") || (lower.ends_with("est") && token.lemma != lower)
        }
        PosTag::Determiner if matches!(lower, "most" | "least") => doc
            .tokens()
            .get(i + 1)
            .is_some_and(|next| next.pos == PosTag::Adjective),
        _ => false,
    }
}

fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    let mid = (start + end) / 2;
    let half = width / 2;
    let ctx_start = mid.saturating_sub(half);
    let ctx_end = std::cmp::min(text.len(), mid + half);

    let ctx_start = snap_to_char_boundary(text, ctx_start, false);
    let ctx_end = snap_to_char_boundary(text, ctx_end, true);

    let snippet = text[ctx_start..ctx_end].replace('\n', " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{snippet}{suffix}")
}

/// Snap a byte offset to a valid char boundary, forward or backward.
fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    if forward {
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
    } else {
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalFilter;
    use crate::tagger::Tagger;
    use rustc_hash::FxHashSet;

    fn markers(text: &str) -> Vec<(String, HyperboleKind)> {
        let model = LanguageModel::builtin().unwrap();
        let extra = FxHashSet::default();
        let doc = Tagger::new(&model, 10_000).tag(text);
        let classification = LexicalFilter::new(&model, &extra, 0.6).classify(&doc);
        detect(&model, &doc, &classification)
            .into_iter()
            .map(|m| (m.term, m.kind))
            .collect()
    }

    #[test]
    fn test_finds_each_kind() {
        let found = markers("This is the best phone ever and everyone is totally hooked.");
        assert!(found.contains(&("best".to_string(), HyperboleKind::Superlative)));
        assert!(found.contains(&("everyone".to_string(), HyperboleKind::Absolute)));
        assert!(found.contains(&("totally".to_string(), HyperboleKind::Intensifier)));
    }

    #[test]
    fn test_plain_text_has_no_markers() {
        assert!(markers("The committee met on Tuesday to review the budget.").is_empty());
    }

    #[test]
    fn test_context_is_snapped_to_char_boundaries() {
        let text = "\u{e9}\u{e9}\u{e9} word \u{e9}\u{e9}\u{e9}";
        let ctx = context_around(text, 7, 11, 6);
        assert!(ctx.contains("word"), "got {ctx}");
    }
}
