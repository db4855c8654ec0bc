use thiserror::Error;

/// Contract violations raised while constructing tokens.
///
/// Tokenization itself is total and never produces these; they only surface
/// when a caller builds a token by hand with out-of-range data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("heading level must be between 1 and 6, got {level}")]
    InvalidHeadingLevel { level: u8 },
}
