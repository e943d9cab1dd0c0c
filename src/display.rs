//! Text rendering of decoded spans under their tokens.
//!
//! ```text
//! rain  caused  floods
//! ╰──╯Cause
//!   └─effect─>[A]
//!               ╰────╯[A] Effect
//! ```

use crate::pair::Pair;
use crate::span::{DecodedLabels, Span, SpanKind};
use crate::tagged_text::TaggedText;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Convert a zero-based index to a base-26 label: A, B, ..., Z, AA, AB, ...
fn index_to_base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

struct IncludedSpan {
    span: Span,
    /// Span this one is paired with, rendered as an arrow.
    paired_with: Option<Span>,
}

pub struct LabelsDisplay<'a> {
    tagged: &'a TaggedText<'a>,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> std::fmt::Display for LabelsDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.tagged.tokens().into_iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        let span_labels = self.build_span_labels();

        for included in self.include_spans.iter() {
            f.write_char('\n')?;

            let span = included.span;
            let (start_char_idx, end_char_idx) = match (
                token_idx_to_start_display_char_idx.get(span.begin),
                token_idx_to_end_display_char_idx.get(span.end),
            ) {
                (Some(start), Some(end)) if span.is_ordered() => (*start, *end),
                _ => {
                    write!(f, "{} [{}..={}] out of range", span.kind, span.begin, span.end)?;
                    continue;
                }
            };

            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            if let Some(label) = span_labels.get(&span) {
                write!(f, "{} ", label)?;
            }

            write!(f, "{}", span.kind)?;

            if let Some(target) = included.paired_with {
                f.write_char('\n')?;

                for _ in 0..start_char_idx + 2 {
                    f.write_char(' ')?;
                }

                let target_str = match span_labels.get(&target) {
                    Some(target_label) => target_label.clone(),
                    None => format!("[{}..{}]", target.begin, target.end),
                };

                write!(
                    f,
                    "└─{}─>{}",
                    target.kind.to_string().to_lowercase(),
                    target_str
                )?;
            }
        }

        Ok(())
    }
}

impl<'a> LabelsDisplay<'a> {
    pub fn new(tagged: &'a TaggedText<'a>) -> Self {
        LabelsDisplay {
            tagged,
            include_spans: Vec::new(),
        }
    }

    /// Map pair targets that are themselves displayed to "[A]", "[B]", ...
    fn build_span_labels(&self) -> HashMap<Span, String> {
        let included: HashSet<Span> = self.include_spans.iter().map(|i| i.span).collect();

        let mut targets: Vec<Span> = self
            .include_spans
            .iter()
            .filter_map(|i| i.paired_with)
            .filter(|target| included.contains(target))
            .collect();

        targets.sort_by_key(|s| (s.begin, s.end, s.kind == SpanKind::Effect));
        targets.dedup();

        targets
            .into_iter()
            .enumerate()
            .map(|(i, span)| (span, format!("[{}]", index_to_base26_label(i))))
            .collect()
    }

    /// Include every cause then every effect.
    pub fn include_labels(&mut self, labels: &DecodedLabels) {
        for span in labels.all_spans() {
            self.include_spans.push(IncludedSpan {
                span: *span,
                paired_with: None,
            });
        }
    }

    /// Include a pair: the cause with an arrow to its effect, then the effect.
    pub fn include_pair(&mut self, pair: &Pair) {
        self.include_spans.push(IncludedSpan {
            span: pair.cause,
            paired_with: Some(pair.effect),
        });
        self.include_spans.push(IncludedSpan {
            span: pair.effect,
            paired_with: None,
        });
    }

    /// Takes self
    pub fn with_labels(mut self, labels: &DecodedLabels) -> Self {
        self.include_labels(labels);
        self
    }

    /// Takes self
    pub fn with_pair(mut self, pair: &Pair) -> Self {
        self.include_pair(pair);
        self
    }
}
