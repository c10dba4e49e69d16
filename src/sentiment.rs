//! Lexicon-averaged sentiment.

use tracing::debug;

use crate::lexicon::LanguageModel;
use crate::types::{PosTag, SentimentResult, TaggedDocument};
use crate::HP;

pub struct SentimentEstimator<'m> {
    model: &'m LanguageModel,
}

impl<'m> SentimentEstimator<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Mean polarity and subjectivity over sentiment-bearing words.
    ///
    /// A preceding intensifier scales a word by its multiplier (stacked
    /// intensifiers compound); a preceding negation flips and damps its
    /// polarity. Modifiers reset at punctuation and after any noun or verb.
    pub fn score(&self, doc: &TaggedDocument) -> SentimentResult {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        let mut multiplier = 1.0;
        let mut negation = 1.0;

        for token in doc.tokens() {
            if token.pos == PosTag::Punctuation {
                multiplier = 1.0;
                negation = 1.0;
                continue;
            }
            let word = token.surface.to_lowercase().replace('\u{2019}', "'");

            if self.model.is_negation(&word) {
                negation = HP.negation_factor;
                continue;
            }
            if let Some(m) = self.model.intensifier_multiplier(&token.lemma) {
                multiplier *= m;
                continue;
            }

            if let Some((polarity, subjectivity)) = self
                .model
                .sentiment_of(&token.lemma)
                .or_else(|| self.model.sentiment_of(&word))
            {
                polarity_sum += polarity * multiplier * negation;
                subjectivity_sum += subjectivity * multiplier;
                hits += 1;
                multiplier = 1.0;
                negation = 1.0;
            } else if token.pos.is_content() {
                multiplier = 1.0;
                negation = 1.0;
            }
        }

        if hits == 0 {
            return SentimentResult::default();
        }
        let n = hits as f64;
        let result = SentimentResult {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        };
        debug!(
            hits,
            polarity = result.polarity,
            subjectivity = result.subjectivity,
            "sentiment scored"
        );
        result
    }
}

/// How far the text's tone departs from neutral.
///
/// With a baseline this is the rise in absolute polarity over the baseline,
/// clamped to `[0, 1]`. Without one, the absolute polarity of the text
/// stands in for the spike.
pub fn sentiment_spike(text: &SentimentResult, baseline: Option<&SentimentResult>) -> f64 {
    let spike = match baseline {
        Some(base) => text.polarity.abs() - base.polarity.abs(),
        None => text.polarity.abs(),
    };
    spike.clamp(0.0, 1.0)
}
