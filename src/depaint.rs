//! De-painting: rebuild the text without its removable modifiers.
//!
//! Besides the removable tokens themselves, connectors that only joined
//! removed modifiers and commas left dangling by a removal are dropped.
//! Whitespace between kept tokens is normalised: a newline run keeps at most
//! `HP.max_newlines_in_gap` newlines, anything else becomes one space.

use tracing::debug;

use crate::lexicon::LanguageModel;
use crate::types::{LexicalClassification, PosTag, TaggedDocument, Token};
use crate::HP;

/// Punctuation that attaches to the preceding word.
const CLOSING: &[&str] = &[
    ".", ",", "!", "?", ";", ":", ")", "]", "}", "...", "\u{2026}", "%",
];

/// Sentence-final punctuation.
const TERMINAL: &[&str] = &[".", "!", "?", "...", "\u{2026}"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Depainted {
    pub text: String,
    pub removed_terms: Vec<String>,
}

pub fn depaint(
    model: &LanguageModel,
    doc: &TaggedDocument,
    classification: &LexicalClassification,
) -> Depainted {
    let tokens = doc.tokens();
    let removed_terms: Vec<String> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| classification.is_removable(*i))
        .map(|(_, t)| t.surface.clone())
        .collect();

    let mut dropped: Vec<bool> = (0..tokens.len())
        .map(|i| classification.is_removable(i))
        .collect();
    if removed_terms.is_empty() {
        return Depainted {
            text: render(doc, &dropped),
            removed_terms,
        };
    }

    drop_orphaned_connectors(model, tokens, &mut dropped);
    drop_dangling_commas(tokens, &mut dropped);

    let text = render(doc, &dropped);
    debug!(
        removed = removed_terms.len(),
        dropped = dropped.iter().filter(|d| **d).count(),
        "de-painted"
    );
    Depainted {
        text,
        removed_terms,
    }
}

fn is_connector(model: &LanguageModel, token: &Token) -> bool {
    token.surface == "," || (token.pos == PosTag::CoordConj && model.is_coordinator(&token.lemma))
}

/// A comma or coordinator whose nearest non-connector neighbours on both
/// sides were removed joined nothing but modifiers.
fn drop_orphaned_connectors(model: &LanguageModel, tokens: &[Token], dropped: &mut [bool]) {
    let removed = dropped.to_vec();
    for i in 0..tokens.len() {
        if removed[i] || !is_connector(model, &tokens[i]) {
            continue;
        }
        let sentence = tokens[i].sentence_index;
        let left = nearest_non_connector(model, tokens, sentence, (0..i).rev());
        let right = nearest_non_connector(model, tokens, sentence, i + 1..tokens.len());
        if let (Some(l), Some(r)) = (left, right) {
            if removed[l] && removed[r] {
                dropped[i] = true;
            }
        }
    }
}

fn nearest_non_connector(
    model: &LanguageModel,
    tokens: &[Token],
    sentence: usize,
    indices: impl Iterator<Item = usize>,
) -> Option<usize> {
    indices
        .take_while(|&j| tokens[j].sentence_index == sentence)
        .find(|&j| !is_connector(model, &tokens[j]))
}

fn drop_dangling_commas(tokens: &[Token], dropped: &mut [bool]) {
    for i in 1..tokens.len() {
        if dropped[i] || tokens[i].surface != "," || !dropped[i - 1] {
            continue;
        }
        let sentence = tokens[i].sentence_index;
        let last_kept = (0..i)
            .rev()
            .take_while(|&j| tokens[j].sentence_index == sentence)
            .find(|&j| !dropped[j]);
        let no_word_yet = !(0..i)
            .rev()
            .take_while(|&j| tokens[j].sentence_index == sentence)
            .any(|j| !dropped[j] && tokens[j].pos.is_word());

        let dangling = no_word_yet
            || last_kept.is_some_and(|j| {
                matches!(
                    tokens[j].pos,
                    PosTag::Determiner
                        | PosTag::Adposition
                        | PosTag::CoordConj
                        | PosTag::SubConj
                        | PosTag::Punctuation
                )
            });
        if dangling {
            dropped[i] = true;
            // "apples, fresh and ripe, today": both commas of the aside go.
            if let Some(j) = last_kept.filter(|&j| tokens[j].surface == ",") {
                dropped[j] = true;
            }
        }
    }

    // "The crowd cheered, loud and wild." leaves a comma before the stop.
    for i in 0..tokens.len() {
        if dropped[i] || tokens[i].surface != "," {
            continue;
        }
        let next_kept = (i + 1..tokens.len()).find(|&j| !dropped[j]);
        let run_dropped = i + 1 < tokens.len() && dropped[i + 1];
        let at_end = match next_kept {
            None => true,
            Some(j) => {
                TERMINAL.contains(&tokens[j].surface.as_str())
                    || tokens[j].sentence_index != tokens[i].sentence_index
            }
        };
        if run_dropped && at_end {
            dropped[i] = true;
        }
    }
}

fn render(doc: &TaggedDocument, dropped: &[bool]) -> String {
    let tokens = doc.tokens();
    let capitalize = sentences_needing_capital(tokens, dropped);

    let mut out = String::with_capacity(doc.text().len());
    let mut emitted = false;
    let mut capitalized_sentences: Vec<usize> = Vec::new();
    let mut run: Option<RunGap> = None;

    for (i, token) in tokens.iter().enumerate() {
        let gap = doc.gap_before(i);
        if dropped[i] {
            if emitted {
                run.get_or_insert_with(|| RunGap::new(gap)).absorb_inner(gap);
            }
            continue;
        }

        if emitted {
            let closing = CLOSING.contains(&token.surface.as_str());
            let sep = match run.take() {
                Some(mut r) => {
                    r.absorb_inner(gap);
                    r.separator(closing, gap)
                }
                None => normalize_gap(gap),
            };
            out.push_str(&sep);
        }

        let sentence = token.sentence_index;
        if capitalize.contains(&sentence)
            && !capitalized_sentences.contains(&sentence)
            && token.surface.starts_with(char::is_alphabetic)
        {
            capitalized_sentences.push(sentence);
            out.push_str(&capitalize_first(&token.surface));
        } else {
            out.push_str(&token.surface);
        }
        emitted = true;
    }
    out
}

/// Whitespace spanned by a run of dropped tokens.
struct RunGap {
    leading_space: bool,
    newlines: usize,
}

impl RunGap {
    fn new(leading: &str) -> Self {
        Self {
            leading_space: !leading.is_empty(),
            newlines: 0,
        }
    }

    fn absorb_inner(&mut self, gap: &str) {
        self.newlines += gap.matches('\n').count();
    }

    fn separator(&self, closing: bool, own_gap: &str) -> String {
        if self.newlines > 0 {
            "\n".repeat(self.newlines.min(HP.max_newlines_in_gap))
        } else if closing {
            String::new()
        } else if self.leading_space || !own_gap.is_empty() {
            " ".to_string()
        } else {
            String::new()
        }
    }
}

fn normalize_gap(gap: &str) -> String {
    let newlines = gap.matches('\n').count();
    if newlines > 0 {
        "\n".repeat(newlines.min(HP.max_newlines_in_gap))
    } else if gap.is_empty() {
        String::new()
    } else {
        " ".to_string()
    }
}

/// Sentences whose capitalised opening word was dropped.
fn sentences_needing_capital(tokens: &[Token], dropped: &[bool]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut seen_sentence: Option<usize> = None;
    for (i, token) in tokens.iter().enumerate() {
        if seen_sentence == Some(token.sentence_index) || !token.pos.is_word() {
            continue;
        }
        seen_sentence = Some(token.sentence_index);
        if dropped[i] && token.surface.starts_with(char::is_uppercase) {
            out.push(token.sentence_index);
        }
    }
    out
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalFilter;
    use crate::tagger::Tagger;
    use rustc_hash::FxHashSet;

    fn run(text: &str) -> Depainted {
        let model = LanguageModel::builtin().unwrap();
        let extra = FxHashSet::default();
        let doc = Tagger::new(&model, 10_000).tag(text);
        let classification = LexicalFilter::new(&model, &extra, 0.6).classify(&doc);
        depaint(&model, &doc, &classification)
    }

    #[test]
    fn test_strips_attributive_adjectives() {
        let out = run("The quick brown fox jumps over the lazy dog.");
        assert_eq!(out.text, "The fox jumps over the dog.");
        assert_eq!(out.removed_terms, vec!["quick", "brown", "lazy"]);
    }

    #[test]
    fn test_no_space_before_closing_punctuation() {
        let out = run("This absolutely incredible breakthrough is totally revolutionary!");
        assert_eq!(out.text, "This breakthrough is!");
    }

    #[test]
    fn test_keeps_clause_without_content() {
        let out = run("Beautiful.");
        assert_eq!(out.text, "Beautiful.");
        assert!(out.removed_terms.is_empty());
    }

    #[test]
    fn test_drops_connectors_between_removed_modifiers() {
        let out = run("They shipped a big, bold and expensive plan.");
        assert_eq!(out.text, "They shipped a plan.");
        assert_eq!(out.removed_terms, vec!["big", "bold", "expensive"]);
    }

    #[test]
    fn test_capitalizes_after_dropped_opener() {
        let out = run("Stunning views greet visitors. The trail climbs.");
        assert_eq!(out.text, "Views greet visitors. The trail climbs.");
    }

    #[test]
    fn test_drops_dangling_comma_at_sentence_start() {
        let out = run("Incredible, the team won the match.");
        assert_eq!(out.text, "The team won the match.");
    }

    #[test]
    fn test_keeps_paragraph_breaks() {
        let out = run("The old house stood.\n\n\n\nA tall tree grew.");
        assert_eq!(out.text, "The house stood.\n\nA tree grew.");
    }

    #[test]
    fn test_second_pass_removes_nothing() {
        let first = run("Our amazing new app delivers truly stunning, beautiful results every day.");
        let second = run(&first.text);
        assert!(second.removed_terms.is_empty(), "got {:?}", second.removed_terms);
        assert_eq!(second.text, first.text);
    }
}
