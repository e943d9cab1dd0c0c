//! Cause/effect pair enumeration.

use crate::span::{DecodedLabels, Span};
use serde::{Deserialize, Serialize};

/// One cause span combined with one effect span.
///
/// No ordering is implied between the two: the cause may come after the
/// effect in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub cause: Span,
    pub effect: Span,
}

impl Pair {
    pub fn new(cause: Span, effect: Span) -> Self {
        Self { cause, effect }
    }

    /// Largest token index referenced by either span.
    pub fn max_index(&self) -> usize {
        self.cause.end.max(self.effect.end).max(self.cause.begin).max(self.effect.begin)
    }
}

/// Every cause paired with every effect, causes as the outer key.
///
/// For causes `[c0, c1]` and effects `[e0, e1]` the order is
/// `(c0,e0), (c0,e1), (c1,e0), (c1,e1)`. Empty when either side is empty.
pub fn enumerate_pairs(labels: &DecodedLabels) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(labels.pair_count());
    for cause in &labels.causes {
        for effect in &labels.effects {
            pairs.push(Pair::new(*cause, *effect));
        }
    }
    pairs
}
