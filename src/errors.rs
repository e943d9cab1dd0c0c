//! Error types for tag decoding and pairing.
//!
//! Every error here is scoped to a single example. Batch processing
//! collects them per example and keeps going.

use thiserror::Error;

/// Errors that can occur while turning one example into output rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CausalError {
    /// A tag literal could not be parsed into any recognized form.
    #[error("malformed tag at position {position}: {literal:?}")]
    MalformedTag { position: usize, literal: String },

    /// A bracketed tag list could not be split into literals.
    #[error("malformed tag list: {value:?}")]
    MalformedTagList { value: String },

    /// A span index falls outside the token sequence.
    #[error("span index {index} out of bounds for {len} tokens")]
    OutOfBounds { index: usize, len: usize },

    /// A span whose begin index lies after its end index.
    #[error("span begin {begin} is after its end {end}")]
    InvertedSpan { begin: usize, end: usize },

    /// Tag count and token count disagree under strict alignment.
    #[error("{tags} tags do not align with {tokens} tokens")]
    Misaligned { tags: usize, tokens: usize },

    /// A composite example key could not be parsed.
    #[error("malformed example key: {value:?}")]
    MalformedKey { value: String },

    /// Pipeline configuration could not be read or parsed.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for decoding and pairing operations.
pub type CausalResult<T> = Result<T, CausalError>;
