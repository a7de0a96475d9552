use thiserror::Error;

/// Boundary error for malformed input records.
///
/// The engines themselves never fail on text: empty or nonsensical narratives
/// produce neutral zero-valued results. This error only surfaces when a caller
/// hands over a record that violates the documented rating ranges.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid input: {message}")]
pub struct InvalidInputError {
    pub message: String,
}

impl InvalidInputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
