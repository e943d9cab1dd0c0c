//! Rendering a pair as annotated text.

use crate::errors::CausalResult;
use crate::pair::Pair;
use crate::tagged_text::{check_span, TaggedText};
use serde::{Deserialize, Serialize};

/// Boundary markers inserted around the cause and effect of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArgMarkers {
    pub cause_open: String,
    pub cause_close: String,
    pub effect_open: String,
    pub effect_close: String,
}

impl Default for ArgMarkers {
    fn default() -> Self {
        Self {
            cause_open: "<ARG0>".into(),
            cause_close: "</ARG0>".into(),
            effect_open: "<ARG1>".into(),
            effect_close: "</ARG1>".into(),
        }
    }
}

impl ArgMarkers {
    fn all(&self) -> [&str; 4] {
        [
            self.cause_open.as_str(),
            self.cause_close.as_str(),
            self.effect_open.as_str(),
            self.effect_close.as_str(),
        ]
    }
}

/// Join `tokens` with single spaces, marking the cause and effect of `pair`.
///
/// Each token gets, in this order: the cause-open prefix if it is the cause
/// begin, the cause-close suffix if it is the cause end, the effect-open
/// prefix if it is the effect begin, the effect-close suffix if it is the
/// effect end. Coinciding positions stack markers in that order.
pub fn annotate_pair<S: AsRef<str>>(
    tokens: &[S],
    pair: &Pair,
    markers: &ArgMarkers,
) -> CausalResult<String> {
    check_span(&pair.cause, tokens.len())?;
    check_span(&pair.effect, tokens.len())?;

    let mut annotated = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        let mut term = token.as_ref().to_string();
        if idx == pair.cause.begin {
            term.insert_str(0, &markers.cause_open);
        }
        if idx == pair.cause.end {
            term.push_str(&markers.cause_close);
        }
        if idx == pair.effect.begin {
            term.insert_str(0, &markers.effect_open);
        }
        if idx == pair.effect.end {
            term.push_str(&markers.effect_close);
        }
        annotated.push(term);
    }

    Ok(annotated.join(" "))
}

/// Annotate every pair against the same tokens, one string per pair.
pub fn annotate_pairs(
    tagged: &TaggedText<'_>,
    pairs: &[Pair],
    markers: &ArgMarkers,
) -> CausalResult<Vec<String>> {
    let tokens = tagged.tokens();
    pairs
        .iter()
        .map(|pair| annotate_pair(&tokens, pair, markers))
        .collect()
}

/// Remove every marker from an annotated text.
pub fn strip_markers(annotated: &str, markers: &ArgMarkers) -> String {
    let mut all = markers.all();
    // Longest first, so a marker that contains another is removed whole.
    all.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut stripped = annotated.to_string();
    for marker in all.iter().filter(|m| !m.is_empty()) {
        stripped = stripped.replace(*marker, "");
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CausalError;
    use crate::span::Span;

    fn tokens(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    fn pair(cause: (usize, usize), effect: (usize, usize)) -> Pair {
        Pair::new(Span::cause(cause.0, cause.1), Span::effect(effect.0, effect.1))
    }

    #[test]
    fn test_annotate_basic() {
        let annotated =
            annotate_pair(&tokens("a b c d e f"), &pair((1, 2), (4, 4)), &ArgMarkers::default())
                .unwrap();
        insta::assert_snapshot!(annotated, @"a <ARG0>b c</ARG0> d <ARG1>e</ARG1> f");
    }

    #[test]
    fn test_annotate_effect_before_cause() {
        let annotated = annotate_pair(
            &tokens("prices rose because demand grew"),
            &pair((3, 4), (0, 1)),
            &ArgMarkers::default(),
        )
        .unwrap();
        insta::assert_snapshot!(annotated, @"<ARG1>prices rose</ARG1> because <ARG0>demand grew</ARG0>");
    }

    #[test]
    fn test_annotate_coinciding_positions_stack_in_fixed_order() {
        // Cause and effect both cover token 1 only.
        let annotated =
            annotate_pair(&tokens("x y z"), &pair((1, 1), (1, 1)), &ArgMarkers::default())
                .unwrap();
        assert_eq!(annotated, "x <ARG1><ARG0>y</ARG0></ARG1> z");
    }

    #[test]
    fn test_annotate_shared_end() {
        let annotated =
            annotate_pair(&tokens("x y z"), &pair((0, 2), (2, 2)), &ArgMarkers::default())
                .unwrap();
        assert_eq!(annotated, "<ARG0>x y <ARG1>z</ARG0></ARG1>");
    }

    #[test]
    fn test_annotate_collapses_whitespace() {
        let annotated = annotate_pair(
            &tokens("  a\tb   c "),
            &pair((0, 0), (2, 2)),
            &ArgMarkers::default(),
        )
        .unwrap();
        assert_eq!(annotated, "<ARG0>a</ARG0> b <ARG1>c</ARG1>");
    }

    #[test]
    fn test_annotate_out_of_bounds() {
        let err = annotate_pair(&tokens("a b"), &pair((0, 0), (1, 2)), &ArgMarkers::default())
            .unwrap_err();
        assert_eq!(err, CausalError::OutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn test_annotate_inverted_span() {
        let err = annotate_pair(&tokens("a b c"), &pair((2, 0), (1, 1)), &ArgMarkers::default())
            .unwrap_err();
        assert_eq!(err, CausalError::InvertedSpan { begin: 2, end: 0 });
    }

    #[test]
    fn test_custom_markers() {
        let markers = ArgMarkers {
            cause_open: "[[".into(),
            cause_close: "]]".into(),
            effect_open: "{{".into(),
            effect_close: "}}".into(),
        };
        let annotated = annotate_pair(&tokens("a b c"), &pair((0, 0), (2, 2)), &markers).unwrap();
        assert_eq!(annotated, "[[a]] b {{c}}");
        assert_eq!(strip_markers(&annotated, &markers), "a b c");
    }

    #[test]
    fn test_strip_markers_round_trip() {
        let original = tokens("the storm caused the outage");
        let annotated =
            annotate_pair(&original, &pair((0, 1), (3, 4)), &ArgMarkers::default()).unwrap();
        assert_eq!(
            strip_markers(&annotated, &ArgMarkers::default()),
            original.join(" ")
        );
    }
}
