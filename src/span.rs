//! Cause and effect spans over a token sequence.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Which side of a causal relation a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanKind {
    Cause,
    Effect,
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanKind::Cause => f.write_str("Cause"),
            SpanKind::Effect => f.write_str("Effect"),
        }
    }
}

/// An inclusive token-index range labelled as cause or effect.
///
/// Both indices are inclusive and refer to token positions (not character
/// positions), and `begin <= end` always holds for spans produced by the
/// decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start token index
    pub begin: usize,
    /// Inclusive end token index
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(begin: usize, end: usize, kind: SpanKind) -> Self {
        Self { begin, end, kind }
    }

    pub fn cause(begin: usize, end: usize) -> Self {
        Self::new(begin, end, SpanKind::Cause)
    }

    pub fn effect(begin: usize, end: usize) -> Self {
        Self::new(begin, end, SpanKind::Effect)
    }

    /// Number of tokens covered; zero for an inverted span.
    pub fn token_count(&self) -> usize {
        (self.end + 1).saturating_sub(self.begin)
    }

    /// `begin <= end`. Spans built by hand may violate it.
    pub fn is_ordered(&self) -> bool {
        self.begin <= self.end
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.begin..=self.end
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.range().contains(&idx)
    }

    /// `(begin, end)` without the kind, the form used in fixtures and logs.
    pub fn bounds(&self) -> (usize, usize) {
        (self.begin, self.end)
    }
}

/// The decoded cause and effect spans of one example, each in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedLabels {
    pub causes: Vec<Span>,
    pub effects: Vec<Span>,
}

impl DecodedLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there is nothing to pair: no causes or no effects.
    pub fn is_unpairable(&self) -> bool {
        self.causes.is_empty() || self.effects.is_empty()
    }

    /// Number of pairs the enumerator will produce.
    pub fn pair_count(&self) -> usize {
        self.causes.len() * self.effects.len()
    }

    /// All spans of both kinds, causes first.
    pub fn all_spans(&self) -> impl Iterator<Item = &Span> {
        self.causes.iter().chain(self.effects.iter())
    }

    pub(crate) fn push(&mut self, span: Span) {
        match span.kind {
            SpanKind::Cause => self.causes.push(span),
            SpanKind::Effect => self.effects.push(span),
        }
    }
}
