//! Error types for the distraction engine.

/// Errors surfaced by engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Text is empty after trimming.
    #[error("Text cannot be empty")]
    EmptyInput,

    /// Text is too short for a meaningful analysis.
    #[error("Not enough content: {len} characters, at least {min} required")]
    InputTooShort { len: usize, min: usize },

    /// The in-process language resource failed to load.
    #[error("Language resource unavailable: {reason}")]
    TaggingResourceUnavailable { reason: String },

    /// Rejected configuration values.
    #[error("Configuration error: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Whether the caller sent something unusable (a 4xx at the HTTP edge).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::EmptyInput | EngineError::InputTooShort { .. } | EngineError::Json(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::EmptyInput => "empty_input",
            EngineError::InputTooShort { .. } => "input_too_short",
            EngineError::TaggingResourceUnavailable { .. } => "tagging_resource_unavailable",
            EngineError::InvalidConfig { .. } => "invalid_config",
            EngineError::Io(_) => "io",
            EngineError::Json(_) => "malformed_request",
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
