//! A tag sequence bound to the tokens it labels.
//!
//! Tags are produced upstream against a whitespace tokenization of the
//! text. [`TaggedText`] keeps both together and checks the alignment once,
//! at construction, so nothing downstream has to.

use crate::decoder::decode_tags;
use crate::errors::{CausalError, CausalResult};
use crate::pair::Pair;
use crate::span::{DecodedLabels, Span};
use crate::tag::{parse_tags, Tag};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How strictly tag count must match token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Tag count must equal token count.
    #[default]
    Strict,
    /// Any lengths are accepted; spans reaching past the tokens fail later
    /// with [`CausalError::OutOfBounds`].
    Lenient,
}

/// Byte ranges of the whitespace-delimited tokens of `text`.
pub fn whitespace_tokens(text: &str) -> Vec<Range<usize>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (pos, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(s..pos);
                start = None;
            }
            (false, None) => start = Some(pos),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(s..text.len());
    }

    tokens
}

/// Parsed tags aligned with the whitespace tokens of a text.
#[derive(Debug, Clone)]
pub struct TaggedText<'a> {
    tags: Vec<Tag>,
    text: &'a str,
    tokens: Vec<Range<usize>>,
}

impl<'a> TaggedText<'a> {
    /// Bind parsed tags to `text`, validating alignment under `policy`.
    pub fn new(tags: Vec<Tag>, text: &'a str, policy: AlignmentPolicy) -> CausalResult<Self> {
        let tokens = whitespace_tokens(text);
        if policy == AlignmentPolicy::Strict && tags.len() != tokens.len() {
            return Err(CausalError::Misaligned {
                tags: tags.len(),
                tokens: tokens.len(),
            });
        }
        Ok(Self { tags, text, tokens })
    }

    /// Parse tag literals and bind them to `text`.
    pub fn from_literals<S: AsRef<str>>(
        literals: &[S],
        text: &'a str,
        policy: AlignmentPolicy,
    ) -> CausalResult<Self> {
        Self::new(parse_tags(literals)?, text, policy)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The whitespace tokens, in order.
    pub fn tokens(&self) -> Vec<&'a str> {
        let text = self.text;
        self.tokens.iter().map(|r| &text[r.clone()]).collect()
    }

    /// The tokenized text re-joined with single spaces.
    pub fn normalized_text(&self) -> String {
        self.tokens().join(" ")
    }

    pub fn decode(&self) -> DecodedLabels {
        decode_tags(&self.tags)
    }

    /// Fail if either span of `pair` is inverted or reaches past the tokens.
    pub fn check_pair(&self, pair: &Pair) -> CausalResult<()> {
        check_span(&pair.cause, self.tokens.len())?;
        check_span(&pair.effect, self.tokens.len())
    }

    /// The slice of the text covering tokens `span.begin..=span.end`,
    /// including any whitespace between them as it appears in the text.
    pub fn span_text(&self, span: &Span) -> CausalResult<&'a str> {
        token_span_text(self.text, &self.tokens, span)
    }
}

/// The slice of `text` from the start of `tokens[span.begin]` to the end of
/// `tokens[span.end]`.
pub(crate) fn token_span_text<'t>(
    text: &'t str,
    tokens: &[Range<usize>],
    span: &Span,
) -> CausalResult<&'t str> {
    check_span(span, tokens.len())?;
    Ok(&text[tokens[span.begin].start..tokens[span.end].end])
}

/// Reject inverted spans, then spans ending at or past `len`.
pub(crate) fn check_span(span: &Span, len: usize) -> CausalResult<()> {
    if !span.is_ordered() {
        return Err(CausalError::InvertedSpan {
            begin: span.begin,
            end: span.end,
        });
    }
    if span.end >= len {
        return Err(CausalError::OutOfBounds {
            index: span.end,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens() {
        let text = "  a bc\td\n\nef ";
        let tokens: Vec<&str> = whitespace_tokens(text)
            .into_iter()
            .map(|r| &text[r])
            .collect();
        assert_eq!(tokens, vec!["a", "bc", "d", "ef"]);
    }

    #[test]
    fn test_whitespace_tokens_empty() {
        assert!(whitespace_tokens("").is_empty());
        assert!(whitespace_tokens(" \t ").is_empty());
    }

    #[test]
    fn test_whitespace_tokens_multibyte() {
        let text = "café   naïve";
        let tokens: Vec<&str> = whitespace_tokens(text)
            .into_iter()
            .map(|r| &text[r])
            .collect();
        assert_eq!(tokens, vec!["café", "naïve"]);
    }

    #[test]
    fn test_strict_alignment_rejects_mismatch() {
        let err = TaggedText::from_literals(&["'O'", "'B-C'"], "a b c", AlignmentPolicy::Strict)
            .unwrap_err();
        assert_eq!(err, CausalError::Misaligned { tags: 2, tokens: 3 });
    }

    #[test]
    fn test_lenient_alignment_accepts_mismatch() {
        let tagged =
            TaggedText::from_literals(&["'O'", "'B-C'"], "a b c", AlignmentPolicy::Lenient)
                .unwrap();
        assert_eq!(tagged.token_count(), 3);
        assert_eq!(tagged.tags().len(), 2);
    }

    #[test]
    fn test_span_text_keeps_inner_whitespace() {
        let tagged = TaggedText::from_literals(
            &["'B-C'", "'I-C'", "'O'"],
            "heavy   rain fell",
            AlignmentPolicy::Strict,
        )
        .unwrap();
        assert_eq!(tagged.span_text(&Span::cause(0, 1)).unwrap(), "heavy   rain");
        assert_eq!(tagged.normalized_text(), "heavy rain fell");
    }

    #[test]
    fn test_span_text_out_of_bounds() {
        let tagged =
            TaggedText::from_literals(&["'O'"; 5], "a b", AlignmentPolicy::Lenient).unwrap();
        let err = tagged.span_text(&Span::effect(1, 4)).unwrap_err();
        assert_eq!(err, CausalError::OutOfBounds { index: 4, len: 2 });
    }

    #[test]
    fn test_inverted_span_is_an_error() {
        let tagged =
            TaggedText::from_literals(&["'O'"; 3], "a b c", AlignmentPolicy::Strict).unwrap();
        assert_eq!(
            tagged.span_text(&Span::cause(2, 0)).unwrap_err(),
            CausalError::InvertedSpan { begin: 2, end: 0 }
        );
        assert!(matches!(
            tagged.check_pair(&Pair::new(Span::cause(0, 0), Span::effect(2, 1))),
            Err(CausalError::InvertedSpan { begin: 2, end: 1 })
        ));
    }

    #[test]
    fn test_check_pair() {
        let tagged =
            TaggedText::from_literals(&["'O'"; 3], "a b c", AlignmentPolicy::Strict).unwrap();
        assert!(tagged
            .check_pair(&Pair::new(Span::cause(0, 0), Span::effect(2, 2)))
            .is_ok());
        assert!(matches!(
            tagged.check_pair(&Pair::new(Span::cause(0, 3), Span::effect(2, 2))),
            Err(CausalError::OutOfBounds { index: 3, len: 3 })
        ));
    }
}
