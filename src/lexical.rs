//! Lexical filter: flags adjectives and intensifiers, and decides which of
//! them can be dropped without emptying their clause.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::lexicon::LanguageModel;
use crate::types::{LexicalClassification, PosTag, TaggedDocument, TokenFlags};

pub struct LexicalFilter<'m> {
    model: &'m LanguageModel,
    extra_intensifiers: &'m FxHashSet<String>,
    high_subjectivity: f64,
}

impl<'m> LexicalFilter<'m> {
    pub fn new(
        model: &'m LanguageModel,
        extra_intensifiers: &'m FxHashSet<String>,
        high_subjectivity: f64,
    ) -> Self {
        Self {
            model,
            extra_intensifiers,
            high_subjectivity,
        }
    }

    pub fn classify(&self, doc: &TaggedDocument) -> LexicalClassification {
        let tokens = doc.tokens();

        let clause_count = doc.clause_count();
        let mut clause_has_content = vec![false; clause_count];
        for token in tokens {
            if token.pos.is_content() {
                clause_has_content[token.clause_index] = true;
            }
        }

        let flags: Vec<TokenFlags> = (0..tokens.len())
            .map(|i| {
                let token = &tokens[i];
                let is_adjective = token.pos == PosTag::Adjective;
                let is_intensifier = self.is_intensifier(doc, i);
                TokenFlags {
                    is_adjective,
                    is_intensifier,
                    removable: (is_adjective || is_intensifier)
                        && clause_has_content[token.clause_index],
                }
            })
            .collect();

        let classification = LexicalClassification { flags };
        debug!(
            adjectives = classification.adjective_count(),
            rhetorical = classification.rhetorical_count(),
            removable = classification.removable_count(),
            "lexical filter done"
        );
        classification
    }

    fn is_intensifier(&self, doc: &TaggedDocument, i: usize) -> bool {
        let token = &doc.tokens()[i];
        if !token.pos.is_word() {
            return false;
        }
        if self.model.is_intensifier(&token.lemma) || self.extra_intensifiers.contains(&token.lemma)
        {
            return true;
        }
        token.pos == PosTag::Adverb
            && self.model.subjectivity_of(&token.lemma) >= self.high_subjectivity
            && modifies_adjective_or_verb(doc, i)
    }
}

/// The nearest non-adverb neighbour in the clause, looking forward first
/// and then backward, is an adjective or a verb.
fn modifies_adjective_or_verb(doc: &TaggedDocument, i: usize) -> bool {
    let tokens = doc.tokens();
    let clause = tokens[i].clause_index;
    let target = |pos: PosTag| matches!(pos, PosTag::Adjective | PosTag::Verb);

    let following = tokens[i + 1..]
        .iter()
        .take_while(|t| t.clause_index == clause && t.pos != PosTag::Punctuation)
        .find(|t| t.pos != PosTag::Adverb);
    if following.is_some_and(|t| target(t.pos)) {
        return true;
    }

    tokens[..i]
        .iter()
        .rev()
        .take_while(|t| t.clause_index == clause && t.pos != PosTag::Punctuation)
        .find(|t| t.pos != PosTag::Adverb)
        .is_some_and(|t| target(t.pos))
}
