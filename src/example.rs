//! Input examples and output rows exchanged with the data store.

use crate::errors::{CausalError, CausalResult};
use crate::extract::ArgumentPair;
use crate::tag::parse_tag_list;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Composite identifier of a text chunk: corpus, document and sentence.
///
/// `sent_id` is a string because multi-sentence chunks carry several
/// sentence numbers joined with `;` (e.g. `3;4`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleKey {
    pub corpus: String,
    pub doc_id: String,
    pub sent_id: String,
}

impl ExampleKey {
    pub fn new(
        corpus: impl Into<String>,
        doc_id: impl Into<String>,
        sent_id: impl Into<String>,
    ) -> Self {
        Self {
            corpus: corpus.into(),
            doc_id: doc_id.into(),
            sent_id: sent_id.into(),
        }
    }

    /// Index of one pair of this example: `{corpus}_{doc_id}_{sent_id}_{pair_index}`.
    pub fn pair_index(&self, pair_index: usize) -> String {
        format!("{}_{}", self, pair_index)
    }
}

impl std::fmt::Display for ExampleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}_{}", self.corpus, self.doc_id, self.sent_id)
    }
}

impl FromStr for ExampleKey {
    type Err = CausalError;

    /// Parse `{corpus}_{doc_id}_{sent_id}`; everything after the second
    /// underscore is the sentence id.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || CausalError::MalformedKey {
            value: value.to_string(),
        };
        let mut parts = value.splitn(3, '_');
        let corpus = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        let doc_id = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        let sent_id = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        Ok(Self::new(corpus, doc_id, sent_id))
    }
}

/// One unit of input: a text with its aligned tag literals.
///
/// `id` is opaque and passed through to every output row unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example<I> {
    pub id: I,
    /// The untokenized source text.
    pub raw_text: String,
    /// The whitespace-tokenizable text the tags were produced against.
    pub tokenized_text: String,
    /// One tag literal per token, e.g. `'B-C'`.
    pub tags: Vec<String>,
}

impl<I> Example<I> {
    /// An example whose raw and tokenized text are the same string.
    pub fn new(id: I, text: impl Into<String>, tags: Vec<String>) -> Self {
        let text = text.into();
        Self {
            id,
            raw_text: text.clone(),
            tokenized_text: text,
            tags,
        }
    }

    /// Build from the bracketed list form written by the span detector,
    /// e.g. `['O', 'B-C', 'I-C']`.
    pub fn from_tag_list(id: I, text: impl Into<String>, tag_list: &str) -> CausalResult<Self> {
        Ok(Self::new(id, text, parse_tag_list(tag_list)?))
    }

    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = raw_text.into();
        self
    }
}

/// One output row: a single pair of one example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow<I> {
    pub example_id: I,
    /// 0-based position of the pair in enumeration order.
    pub pair_index: usize,
    pub annotated_text: String,
    /// Present only when argument extraction is enabled.
    pub arguments: Option<ArgumentPair>,
}
