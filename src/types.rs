use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Coarse part-of-speech tag assigned by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    CoordConj,
    SubConj,
    Particle,
    Numeral,
    Interjection,
    Punctuation,
    Symbol,
    Unknown,
}

impl PosTag {
    /// Nouns, proper nouns and verbs carry the topic of a clause.
    pub fn is_content(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Verb)
    }

    pub fn is_word(self) -> bool {
        !matches!(
            self,
            PosTag::Punctuation | PosTag::Symbol | PosTag::Unknown | PosTag::Numeral
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub pos: PosTag,
    pub sentence_index: usize,
    pub clause_index: usize,
    /// Byte range into the tagged text.
    pub span: (usize, usize),
}

/// Tokens of one request plus the text they point into.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedDocument {
    pub(crate) text: String,
    pub(crate) tokens: Vec<Token>,
    pub(crate) sentence_bounds: Vec<(usize, usize)>,
    pub(crate) truncated: bool,
}

impl TaggedDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Byte offsets `(start, end)` of each sentence.
    pub fn sentence_bounds(&self) -> &[(usize, usize)] {
        &self.sentence_bounds
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_bounds.len()
    }

    pub fn clause_count(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.clause_index + 1)
    }

    /// Whether the input was cut at the configured character cap.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Source text between token `index - 1` and token `index`.
    pub fn gap_before(&self, index: usize) -> &str {
        let Some(token) = self.tokens.get(index) else {
            return "";
        };
        let start = if index == 0 {
            0
        } else {
            self.tokens[index - 1].span.1
        };
        &self.text[start..token.span.0]
    }
}

// ---------------------------------------------------------------------------
// Lexical classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenFlags {
    pub is_adjective: bool,
    pub is_intensifier: bool,
    pub removable: bool,
}

/// Per-token flags, indexed like `TaggedDocument::tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalClassification {
    pub(crate) flags: Vec<TokenFlags>,
}

impl LexicalClassification {
    pub fn flags(&self) -> &[TokenFlags] {
        &self.flags
    }

    pub fn get(&self, index: usize) -> TokenFlags {
        self.flags.get(index).copied().unwrap_or_default()
    }

    pub fn is_removable(&self, index: usize) -> bool {
        self.get(index).removable
    }

    /// Every adjective, removable or not.
    pub fn adjective_count(&self) -> usize {
        self.flags.iter().filter(|f| f.is_adjective).count()
    }

    /// Tokens flagged as adjective or intensifier.
    pub fn rhetorical_count(&self) -> usize {
        self.flags
            .iter()
            .filter(|f| f.is_adjective || f.is_intensifier)
            .count()
    }

    pub fn removable_count(&self) -> usize {
        self.flags.iter().filter(|f| f.removable).count()
    }
}

// ---------------------------------------------------------------------------
// Estimator outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DivergenceResult {
    pub topical_divergence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistractionBand {
    Low,
    Moderate,
    High,
}

impl DistractionBand {
    pub fn advice(self) -> &'static str {
        match self {
            DistractionBand::Low => "Low distraction content. Appears informative.",
            DistractionBand::Moderate => "Moderate distraction level. Read critically.",
            DistractionBand::High => "High distraction content detected. Consider skipping.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HyperboleKind {
    Superlative,
    Absolute,
    Intensifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperboleMarker {
    pub term: String,
    pub kind: HyperboleKind,
    pub context: String,
}

// ---------------------------------------------------------------------------
// Public results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub distraction_score: f64,
    pub band: DistractionBand,
    pub analysis: String,
    pub sentiment_polarity: f64,
    pub sentiment_subjectivity: f64,
    pub adjective_count: usize,
    pub topical_divergence: f64,
    pub original_text: String,
    pub de_painted_text: String,
    pub removed_terms: Vec<String>,
    pub hyperbole: Vec<HyperboleMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepaintResult {
    pub original_text: String,
    pub de_painted_text: String,
    pub removed_terms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub baseline_text: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            baseline_text: None,
        }
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline_text = Some(baseline.into());
        self
    }

    /// Baseline text, treating a blank string as absent.
    pub fn baseline(&self) -> Option<&str> {
        self.baseline_text
            .as_deref()
            .filter(|b| !b.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepaintRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub lexicon_entries: usize,
}
