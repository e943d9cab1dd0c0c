//! Extracting the cause and effect argument strings of a pair.
//!
//! Span indices are token indices. Two ways of turning them into text are
//! provided:
//!
//! - [`OffsetMode::Character`] applies the indices directly as character
//!   offsets into the raw text. This is what downstream consumers of the
//!   existing output have always received; it is only meaningful when
//!   every token is a single character.
//! - [`OffsetMode::Token`] maps the indices through the whitespace tokens
//!   of the raw text and returns the covered slice of it, so the arguments
//!   are always substrings of the raw text.

use crate::errors::CausalResult;
use crate::pair::Pair;
use crate::span::Span;
use crate::tagged_text::{token_span_text, whitespace_tokens};
use serde::{Deserialize, Serialize};

/// How span indices are applied to text when extracting arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetMode {
    /// Indices are character offsets into the raw text.
    #[default]
    Character,
    /// Indices are token positions in the tokenized text.
    Token,
}

/// The cause and effect text of one pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgumentPair {
    pub cause: String,
    pub effect: String,
}

impl ArgumentPair {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
        }
    }
}

/// Characters `span.begin..=span.end` of `raw`, clamped to its length.
///
/// Offsets count `char`s, so multi-byte text never splits.
pub fn char_slice(raw: &str, span: &Span) -> String {
    let take = (span.end + 1).saturating_sub(span.begin);
    raw.chars().skip(span.begin).take(take).collect()
}

/// Arguments using span indices as character offsets into `raw`.
///
/// Never fails: indices past the end yield a shorter or empty string.
pub fn extract_by_characters(raw: &str, pair: &Pair) -> ArgumentPair {
    ArgumentPair {
        cause: char_slice(raw, &pair.cause),
        effect: char_slice(raw, &pair.effect),
    }
}

/// Arguments using span indices as positions of the whitespace tokens of
/// `raw`.
///
/// Case, punctuation and spacing of `raw` are kept as they are. Fails with
/// [`CausalError::OutOfBounds`](crate::CausalError::OutOfBounds) when `raw`
/// has too few tokens for a span.
pub fn extract_by_tokens(raw: &str, pair: &Pair) -> CausalResult<ArgumentPair> {
    let tokens = whitespace_tokens(raw);
    Ok(ArgumentPair {
        cause: token_span_text(raw, &tokens, &pair.cause)?.to_string(),
        effect: token_span_text(raw, &tokens, &pair.effect)?.to_string(),
    })
}

/// Extract the arguments of `pair` from `raw` according to `mode`.
pub fn extract_arguments(raw: &str, pair: &Pair, mode: OffsetMode) -> CausalResult<ArgumentPair> {
    match mode {
        OffsetMode::Character => Ok(extract_by_characters(raw, pair)),
        OffsetMode::Token => extract_by_tokens(raw, pair),
    }
}
