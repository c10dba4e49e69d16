//! Tokenizer and part-of-speech tagger.
//!
//! Tagging is lexicon + morphology. Noun/verb ambiguity is resolved from the
//! nearest preceding token that is not a modifier, so dropping adjectives and
//! adverbs never changes another token's tag.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::lexicon::{strip_possessive, LanguageModel};
use crate::types::{PosTag, TaggedDocument, Token};
use crate::HP;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);",
        r"|(?:\p{L}\.){2,}",
        r"|\p{N}+(?:[.,:]\p{N}+)*%?",
        r"|[\p{L}\p{M}][\p{L}\p{M}\p{N}]*(?:['\x{2019}\-][\p{L}\p{M}\p{N}]+)*",
        r"|\.{3}|\x{2026}",
        r"|-{2,}",
        r"|\p{P}",
        r"|[^\s\p{L}\p{N}\p{P}]+",
    ))
    .unwrap()
});

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}+$").unwrap());

const TERMINATORS: &[&str] = &[".", "!", "?", "...", "\u{2026}"];

const CLOSERS: &[&str] = &[
    "\"", "'", "\u{201D}", "\u{2019}", ")", "]", "}", "\u{00BB}",
];

const CLAUSE_BREAKS: &[&str] = &[
    ";", ":", "(", ")", "\u{2014}", "\u{2013}", "-", "--", "---",
];

/// Heads that form pronoun contractions ("it's", "we're", "let's").
const CONTRACTION_HEADS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "that", "there", "here", "what", "who",
    "where", "how", "let",
];

const CONTRACTION_TAILS: &[&str] = &["s", "m", "re", "ve", "ll", "d"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "able", "ible", "ive", "ical", "istic", "esque",
];

// ---------------------------------------------------------------------------
// Raw tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Abbrev,
    Number,
    Entity,
    Punct,
    Symbol,
    Other,
}

#[derive(Debug, Clone)]
struct RawToken<'t> {
    surface: &'t str,
    span: (usize, usize),
    kind: TokenKind,
    sentence: usize,
    clause: usize,
}

fn kind_of(surface: &str) -> TokenKind {
    let Some(first) = surface.chars().next() else {
        return TokenKind::Other;
    };
    if first == '&' && surface.len() > 2 && surface.ends_with(';') {
        TokenKind::Entity
    } else if first.is_numeric() {
        TokenKind::Number
    } else if first.is_alphabetic() {
        if surface.len() > 2 && surface.ends_with('.') {
            TokenKind::Abbrev
        } else {
            TokenKind::Word
        }
    } else if PUNCT_RE.is_match(surface) {
        TokenKind::Punct
    } else if surface.is_ascii() {
        TokenKind::Symbol
    } else {
        TokenKind::Other
    }
}

fn normalize(surface: &str) -> String {
    surface.to_lowercase().replace('\u{2019}', "'")
}

fn is_title_case(surface: &str) -> bool {
    let mut chars = surface.chars();
    matches!(chars.next(), Some(c) if c.is_uppercase()) && chars.any(|c| c.is_lowercase())
}

fn is_all_caps(surface: &str) -> bool {
    surface.chars().filter(|c| c.is_alphabetic()).count() > 1
        && !surface.chars().any(|c| c.is_lowercase())
}

/// Cut `text` to at most `max_chars` characters, preferring a whitespace
/// boundary in the back half of the kept text.
pub(crate) fn truncate(text: &str, max_chars: usize) -> (&str, bool) {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return (text, false);
    };
    let kept = &text[..cut];
    match kept.rfind(char::is_whitespace) {
        Some(ws) if ws > cut / 2 => (&kept[..ws], true),
        _ => (kept, true),
    }
}

// ---------------------------------------------------------------------------
// Tagger
// ---------------------------------------------------------------------------

/// Converts raw text into a `TaggedDocument`. Never fails: anything it
/// cannot classify is tagged `Unknown`.
#[derive(Debug, Clone, Copy)]
pub struct Tagger<'m> {
    model: &'m LanguageModel,
    max_chars: usize,
}

impl<'m> Tagger<'m> {
    pub fn new(model: &'m LanguageModel, max_chars: usize) -> Self {
        Self { model, max_chars }
    }

    pub fn tag(&self, text: &str) -> TaggedDocument {
        let (text, truncated) = truncate(text, self.max_chars);
        if truncated {
            warn!(
                max_chars = self.max_chars,
                kept_bytes = text.len(),
                "input exceeds character cap, truncating"
            );
        }

        let raw = self.segment(text);
        let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
        for i in 0..raw.len() {
            let (pos, lemma) = self.tag_one(&raw, &tokens, i);
            let r = &raw[i];
            tokens.push(Token {
                surface: r.surface.to_string(),
                lemma,
                pos,
                sentence_index: r.sentence,
                clause_index: r.clause,
                span: r.span,
            });
        }

        let mut sentence_bounds: Vec<(usize, usize)> = Vec::new();
        for token in &tokens {
            if token.sentence_index == sentence_bounds.len() {
                sentence_bounds.push(token.span);
            } else if let Some(last) = sentence_bounds.last_mut() {
                last.1 = token.span.1;
            }
        }

        TaggedDocument {
            text: text.to_string(),
            tokens,
            sentence_bounds,
            truncated,
        }
    }

    // -- segmentation ------------------------------------------------------

    fn segment<'t>(&self, text: &'t str) -> Vec<RawToken<'t>> {
        let mut out: Vec<RawToken<'t>> = Vec::new();
        let mut sentence = 0usize;
        let mut clause = 0usize;
        let mut pending_sentence = false;
        let mut pending_clause = false;
        let mut prev_end = 0usize;

        for m in TOKEN_RE.find_iter(text) {
            let surface = m.as_str();
            let kind = kind_of(surface);
            let blank_line = text[prev_end..m.start()].matches('\n').count() >= 2;

            if !out.is_empty() {
                let closer = TERMINATORS.contains(&surface) || CLOSERS.contains(&surface);
                if blank_line || (pending_sentence && !closer) {
                    sentence += 1;
                    clause += 1;
                    pending_sentence = false;
                    pending_clause = false;
                } else if pending_clause && !pending_sentence {
                    clause += 1;
                    pending_clause = false;
                }
            }

            if kind == TokenKind::Punct {
                if TERMINATORS.contains(&surface) && !self.ends_abbreviation(&out, m.start()) {
                    pending_sentence = true;
                } else if CLAUSE_BREAKS.contains(&surface) {
                    pending_clause = true;
                }
            }

            out.push(RawToken {
                surface,
                span: (m.start(), m.end()),
                kind,
                sentence,
                clause,
            });
            prev_end = m.end();
        }
        out
    }

    /// A period glued to a known abbreviation or a single initial.
    fn ends_abbreviation(&self, before: &[RawToken<'_>], dot_start: usize) -> bool {
        let Some(prev) = before.last() else {
            return false;
        };
        if prev.kind != TokenKind::Word || prev.span.1 != dot_start {
            return false;
        }
        let single_initial = prev.surface.chars().count() == 1
            && prev.surface.chars().all(char::is_uppercase);
        single_initial || self.model.is_abbreviation(&normalize(prev.surface))
    }

    // -- tagging -----------------------------------------------------------

    fn tag_one(&self, raw: &[RawToken<'_>], tagged: &[Token], i: usize) -> (PosTag, String) {
        let r = &raw[i];
        let lower = normalize(r.surface);
        match r.kind {
            TokenKind::Number => (PosTag::Numeral, lower),
            TokenKind::Punct => (PosTag::Punctuation, lower),
            TokenKind::Symbol => (PosTag::Symbol, lower),
            TokenKind::Entity | TokenKind::Other => (PosTag::Unknown, lower),
            TokenKind::Abbrev => {
                if r.surface.starts_with(char::is_uppercase) {
                    (PosTag::ProperNoun, lower)
                } else {
                    (PosTag::Adverb, lower)
                }
            }
            TokenKind::Word => self.tag_word(raw, tagged, i, lower),
        }
    }

    fn tag_word(
        &self,
        raw: &[RawToken<'_>],
        tagged: &[Token],
        i: usize,
        lower: String,
    ) -> (PosTag, String) {
        let surface = raw[i].surface;
        let head = lower.split('\'').next().unwrap_or(&lower);
        let closed = self.model.closed_class(&lower).is_some()
            || self.model.closed_class(head).is_some()
            || CONTRACTION_HEADS.contains(&head);
        if is_title_case(surface) && !closed {
            let initial = is_sentence_initial(tagged, raw[i].sentence);
            if !initial || next_is_title_case(raw, i) {
                return (PosTag::ProperNoun, strip_possessive(&lower).to_string());
            }
        }

        let anchor = anchor_of(tagged, raw[i].sentence);
        if let Some(found) = self.classify(&lower, anchor) {
            return found;
        }
        if is_all_caps(surface) {
            return (PosTag::ProperNoun, lower);
        }
        (PosTag::Noun, self.model.noun_lemma(&lower))
    }

    /// Lexicon and morphology lookup for a lowercased word.
    fn classify(&self, lower: &str, anchor: Option<&Token>) -> Option<(PosTag, String)> {
        let model = self.model;

        if let Some(tag) = model.closed_class(lower) {
            let lemma = match tag {
                PosTag::Auxiliary => model.aux_lemma(lower).unwrap_or(lower).to_string(),
                _ => lower.to_string(),
            };
            return Some((tag, lemma));
        }

        if let Some((head, tail)) = lower.split_once('\'') {
            if CONTRACTION_HEADS.contains(&head) && CONTRACTION_TAILS.contains(&tail) {
                let tag = if head == "let" {
                    PosTag::Verb
                } else {
                    PosTag::Pronoun
                };
                return Some((tag, head.to_string()));
            }
            let base = strip_possessive(lower);
            if base != lower {
                return match self.classify(base, anchor) {
                    Some((PosTag::Verb, _)) | None => {
                        Some((PosTag::Noun, model.noun_lemma(base)))
                    }
                    other => other,
                };
            }
        }

        if model.is_intensifier(lower) {
            return Some((PosTag::Adverb, lower.to_string()));
        }

        if let Some(lemma) = model.adjective_lemma(lower) {
            return Some((PosTag::Adjective, lemma));
        }

        if let Some(lemma) = model.verb_lemma(lower) {
            let tag = if lower.ends_with("ing") && lemma != lower {
                if noun_context(model, anchor) {
                    return Some((PosTag::Noun, lower.to_string()));
                }
                PosTag::Verb
            } else if lemma != lower && !lower.ends_with('s') {
                PosTag::Verb
            } else if noun_context(model, anchor) {
                return Some((PosTag::Noun, model.noun_lemma(lower)));
            } else {
                PosTag::Verb
            };
            return Some((tag, lemma));
        }

        if lower.ends_with("ly") {
            if model.is_ly_non_adverb(lower) {
                return Some((PosTag::Noun, model.noun_lemma(lower)));
            }
            if lower.chars().count() >= HP.ly_min_chars {
                return Some((PosTag::Adverb, lower.to_string()));
            }
        }

        let long_enough = lower.chars().count() >= HP.adjective_suffix_min_chars;
        if long_enough
            && !model.is_suffix_exception(lower)
            && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
        {
            return Some((PosTag::Adjective, lower.to_string()));
        }

        if long_enough {
            if let Some(stem) = lower.strip_suffix("ed") {
                return Some((PosTag::Verb, stem.to_string()));
            }
            if let Some(stem) = lower.strip_suffix("ing") {
                if noun_context(model, anchor) {
                    return Some((PosTag::Noun, lower.to_string()));
                }
                return Some((PosTag::Verb, stem.to_string()));
            }
        }

        None
    }
}

/// No word precedes the next token in its sentence, other than modifiers
/// and coordinators that de-painting may drop.
fn is_sentence_initial(tagged: &[Token], sentence: usize) -> bool {
    !tagged
        .iter()
        .rev()
        .take_while(|t| t.sentence_index == sentence)
        .any(|t| {
            t.pos.is_word()
                && !matches!(
                    t.pos,
                    PosTag::Adjective | PosTag::Adverb | PosTag::CoordConj
                )
        })
}

fn next_is_title_case(raw: &[RawToken<'_>], i: usize) -> bool {
    raw.get(i + 1).is_some_and(|next| {
        next.sentence == raw[i].sentence
            && next.kind == TokenKind::Word
            && is_title_case(next.surface)
    })
}

/// Nearest earlier token in the sentence that is not a modifier, a
/// coordinator or a comma.
fn anchor_of(tagged: &[Token], sentence: usize) -> Option<&Token> {
    tagged
        .iter()
        .rev()
        .take_while(|t| t.sentence_index == sentence)
        .find(|t| {
            !matches!(
                t.pos,
                PosTag::Adjective | PosTag::Adverb | PosTag::CoordConj
            ) && t.surface != ","
        })
}

/// Whether an ambiguous noun/verb form reads as a noun after `anchor`.
fn noun_context(model: &LanguageModel, anchor: Option<&Token>) -> bool {
    let Some(anchor) = anchor else {
        return true;
    };
    match anchor.pos {
        PosTag::Pronoun => model.is_possessive(&anchor.lemma),
        PosTag::Noun | PosTag::ProperNoun | PosTag::Auxiliary | PosTag::Particle => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::builtin().unwrap()
    }

    fn tags(doc: &TaggedDocument) -> Vec<(&str, PosTag)> {
        doc.tokens()
            .iter()
            .map(|t| (t.surface.as_str(), t.pos))
            .collect()
    }

    #[test]
    fn test_tags_classic_pangram() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("The quick brown fox jumps over the lazy dog.");
        assert_eq!(
            tags(&doc),
            vec![
                ("The", PosTag::Determiner),
                ("quick", PosTag::Adjective),
                ("brown", PosTag::Adjective),
                ("fox", PosTag::Noun),
                ("jumps", PosTag::Verb),
                ("over", PosTag::Adposition),
                ("the", PosTag::Determiner),
                ("lazy", PosTag::Adjective),
                ("dog", PosTag::Noun),
                (".", PosTag::Punctuation),
            ]
        );
        assert_eq!(doc.tokens()[4].lemma, "jump");
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_spans_point_into_text() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("Prices rose 5% in March.");
        for token in doc.tokens() {
            assert_eq!(&doc.text()[token.span.0..token.span.1], token.surface);
        }
        assert_eq!(doc.tokens()[2].surface, "5%");
        assert_eq!(doc.tokens()[2].pos, PosTag::Numeral);
        assert_eq!(doc.tokens()[4].pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_sentence_split_skips_abbreviations() {
        let model = model();
        let doc = Tagger::new(&model, 10_000)
            .tag("Dr. Smith arrived. She spoke briefly! Was it enough?");
        assert_eq!(doc.sentence_count(), 3);
        assert_eq!(doc.tokens()[2].sentence_index, 0);
        assert_eq!(doc.tokens()[5].sentence_index, 1);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("He said \"stop.\" Then he left.");
        let quote = doc
            .tokens()
            .iter()
            .position(|t| t.surface == "\"" && t.span.0 > 10)
            .unwrap();
        assert_eq!(doc.tokens()[quote].sentence_index, 0);
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn test_clause_breaks() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("Beautiful; the bridge opened.");
        assert_eq!(doc.tokens()[0].clause_index, 0);
        assert_eq!(doc.tokens()[2].clause_index, 1);
        assert_eq!(doc.clause_count(), 2);
    }

    #[test]
    fn test_odd_input_is_unknown() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("Tom &amp; Jerry \u{1F600} rock");
        let unknown: Vec<&str> = doc
            .tokens()
            .iter()
            .filter(|t| t.pos == PosTag::Unknown)
            .map(|t| t.surface.as_str())
            .collect();
        assert_eq!(unknown, vec!["&amp;", "\u{1F600}"]);
    }

    #[test]
    fn test_contractions_and_possessives() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("It's the company's plan and they don't care.");
        assert_eq!(doc.tokens()[0].pos, PosTag::Pronoun);
        assert_eq!(doc.tokens()[2].pos, PosTag::Noun);
        assert_eq!(doc.tokens()[2].lemma, "company");
        let dont = doc.tokens().iter().find(|t| t.surface == "don't").unwrap();
        assert_eq!(dont.pos, PosTag::Auxiliary);
        assert_eq!(dont.lemma, "do");
    }

    #[test]
    fn test_leading_modifiers_do_not_make_a_proper_noun() {
        let model = model();
        let doc = Tagger::new(&model, 10_000).tag("Truly, Stunning views await the visitors here.");
        assert_eq!(doc.tokens()[2].surface, "Stunning");
        assert_eq!(doc.tokens()[2].pos, PosTag::Adjective);

        let doc = Tagger::new(&model, 10_000).tag("Yesterday the board met Smith.");
        assert_eq!(doc.tokens()[4].pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_truncates_on_whitespace() {
        let (kept, truncated) = truncate("alpha beta gamma", 12);
        assert!(truncated);
        assert_eq!(kept, "alpha beta");

        let (kept, truncated) = truncate("short", 12);
        assert!(!truncated);
        assert_eq!(kept, "short");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "\u{e9}".repeat(20);
        let (kept, truncated) = truncate(&text, 5);
        assert!(truncated);
        assert_eq!(kept.chars().count(), 5);
    }
}
