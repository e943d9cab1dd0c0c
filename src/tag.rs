//! BIO-CE tags and their textual wire forms.
//!
//! The span-detection stage upstream emits each tag as a quoted literal
//! (`'B-C'`), and writes a whole sequence as one bracketed list
//! (`['O', 'B-C', 'I-C']`). Everything past this module works with the
//! closed [`Tag`] enum.

use crate::errors::{CausalError, CausalResult};
use crate::span::SpanKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Single-quoted, double-quoted, or bare label.
static TAG_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:'([^']*)'|"([^"]*)"|([A-Za-z0-9_.:-]+))$"#)
        .expect("Invalid tag literal regex")
});

/// One per-token label in the BIO-CE scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Outside,
    BeginCause,
    InsideCause,
    BeginEffect,
    InsideEffect,
}

impl Tag {
    /// Parse one tag literal.
    ///
    /// `position` is only used for error reporting. Well-formed literals
    /// that are not one of the four causal markers decode to
    /// [`Tag::Outside`].
    pub fn parse_literal(literal: &str, position: usize) -> CausalResult<Tag> {
        let malformed = || CausalError::MalformedTag {
            position,
            literal: literal.to_string(),
        };

        let captures = TAG_LITERAL.captures(literal.trim()).ok_or_else(malformed)?;
        let label = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))
            .map(|m| m.as_str())
            .ok_or_else(malformed)?;

        Ok(Tag::from_label(label))
    }

    /// Map an unquoted label to its tag.
    pub fn from_label(label: &str) -> Tag {
        match label {
            "B-C" => Tag::BeginCause,
            "I-C" => Tag::InsideCause,
            "B-E" => Tag::BeginEffect,
            "I-E" => Tag::InsideEffect,
            _ => Tag::Outside,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tag::Outside => "O",
            Tag::BeginCause => "B-C",
            Tag::InsideCause => "I-C",
            Tag::BeginEffect => "B-E",
            Tag::InsideEffect => "I-E",
        }
    }

    /// The kind of span this tag opens when the scanner is between spans.
    ///
    /// Both `B-` and `I-` tags open a span.
    pub fn opens(self) -> Option<SpanKind> {
        match self {
            Tag::BeginCause | Tag::InsideCause => Some(SpanKind::Cause),
            Tag::BeginEffect | Tag::InsideEffect => Some(SpanKind::Effect),
            Tag::Outside => None,
        }
    }

    /// Whether this tag extends an open span of `kind`. Only `I-` tags do.
    pub fn continues(self, kind: SpanKind) -> bool {
        matches!(
            (self, kind),
            (Tag::InsideCause, SpanKind::Cause) | (Tag::InsideEffect, SpanKind::Effect)
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a sequence of tag literals, failing on the first malformed one.
pub fn parse_tags<S: AsRef<str>>(literals: &[S]) -> CausalResult<Vec<Tag>> {
    literals
        .iter()
        .enumerate()
        .map(|(position, literal)| Tag::parse_literal(literal.as_ref(), position))
        .collect()
}

/// Split a bracketed list literal like `['O', 'B-C']` into its tag literals.
///
/// The literals are returned unparsed; feed them to [`parse_tags`].
pub fn parse_tag_list(value: &str) -> CausalResult<Vec<String>> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| CausalError::MalformedTagList {
            value: value.to_string(),
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(inner.split(',').map(|part| part.trim().to_string()).collect())
}
