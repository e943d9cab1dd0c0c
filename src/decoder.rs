//! Decoding a tag sequence into cause and effect spans.

use crate::errors::CausalResult;
use crate::span::{DecodedLabels, Span};
use crate::tag::{parse_tags, Tag};

/// Decode a tag sequence into ordered cause spans and ordered effect spans.
///
/// Scans left to right in a single pass. Any `B-` or `I-` tag opens a span
/// of its kind, and only the matching `I-` tag extends it, so:
///
/// - an `I-C` with no preceding `B-C` still opens a cause span,
/// - `B-C B-C` yields two adjacent single-token causes,
/// - `B-C I-C I-C` yields one cause covering all three tokens.
///
/// An empty sequence, or one with no causal tags, yields empty spans.
pub fn decode_tags(tags: &[Tag]) -> DecodedLabels {
    let mut labels = DecodedLabels::new();
    let mut cursor = 0;

    while cursor < tags.len() {
        match tags[cursor].opens() {
            Some(kind) => {
                let begin = cursor;
                cursor += 1;
                while cursor < tags.len() && tags[cursor].continues(kind) {
                    cursor += 1;
                }
                labels.push(Span::new(begin, cursor - 1, kind));
            }
            None => cursor += 1,
        }
    }

    labels
}

/// Parse raw tag literals and decode them.
pub fn decode_literals<S: AsRef<str>>(literals: &[S]) -> CausalResult<DecodedLabels> {
    let tags = parse_tags(literals)?;
    Ok(decode_tags(&tags))
}
