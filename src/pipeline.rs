//! The per-example pipeline and batch processing.
//!
//! tags → [`decode_tags`](crate::decode_tags) → [`enumerate_pairs`] →
//! {[`annotate_pair`], [`extract_arguments`]} per pair → output rows.

use crate::annotate::{annotate_pair, annotate_pairs};
use crate::config::PipelineConfig;
use crate::errors::{CausalError, CausalResult};
use crate::example::{Example, OutputRow};
use crate::extract::{extract_arguments, ArgumentPair};
use crate::pair::{enumerate_pairs, Pair};
use crate::tagged_text::TaggedText;
use rayon::prelude::*;
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Decode, pair, annotate and extract arguments with the default configuration.
///
/// Returns one `(annotated_text, arguments)` tuple per pair, in pair order.
pub fn decode_and_pair<S: AsRef<str>>(
    tags: &[S],
    tokenized_text: &str,
    raw_text: &str,
) -> CausalResult<Vec<(String, ArgumentPair)>> {
    Pipeline::default().annotate_with_arguments(tags, tokenized_text, raw_text)
}

/// Decode, pair and annotate with the default configuration.
pub fn decode_and_annotate<S: AsRef<str>>(
    tags: &[S],
    tokenized_text: &str,
) -> CausalResult<Vec<String>> {
    Pipeline::default().annotate(tags, tokenized_text)
}

/// An example that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFailure<I> {
    pub example_id: I,
    pub error: CausalError,
}

/// Output of a batch: the rows of every successful example, and the
/// failures of the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput<I> {
    pub rows: Vec<OutputRow<I>>,
    pub failures: Vec<ExampleFailure<I>>,
}

impl<I> BatchOutput<I> {
    /// No example failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turns examples into output rows according to a [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn tag_and_pair<'a, S: AsRef<str>>(
        &self,
        tags: &[S],
        tokenized_text: &'a str,
    ) -> CausalResult<(TaggedText<'a>, Vec<Pair>)> {
        let tagged = TaggedText::from_literals(tags, tokenized_text, self.config.alignment)?;
        let labels = tagged.decode();
        let pairs = enumerate_pairs(&labels);
        debug!(
            causes = labels.causes.len(),
            effects = labels.effects.len(),
            pairs = pairs.len(),
            "decoded tag sequence"
        );
        Ok((tagged, pairs))
    }

    /// One annotated text per pair.
    pub fn annotate<S: AsRef<str>>(
        &self,
        tags: &[S],
        tokenized_text: &str,
    ) -> CausalResult<Vec<String>> {
        let (tagged, pairs) = self.tag_and_pair(tags, tokenized_text)?;
        annotate_pairs(&tagged, &pairs, &self.config.markers)
    }

    /// One `(annotated_text, arguments)` tuple per pair.
    pub fn annotate_with_arguments<S: AsRef<str>>(
        &self,
        tags: &[S],
        tokenized_text: &str,
        raw_text: &str,
    ) -> CausalResult<Vec<(String, ArgumentPair)>> {
        let (tagged, pairs) = self.tag_and_pair(tags, tokenized_text)?;
        let tokens = tagged.tokens();
        pairs
            .iter()
            .map(|pair| {
                let annotated = annotate_pair(&tokens, pair, &self.config.markers)?;
                let arguments = extract_arguments(raw_text, pair, self.config.offset_mode)?;
                Ok((annotated, arguments))
            })
            .collect()
    }

    /// The output rows of one example; empty when it has no pairs.
    pub fn process_example<I: Clone>(
        &self,
        example: &Example<I>,
    ) -> CausalResult<Vec<OutputRow<I>>> {
        let (tagged, pairs) =
            self.tag_and_pair(example.tags.as_slice(), &example.tokenized_text)?;
        let tokens = tagged.tokens();

        pairs
            .iter()
            .enumerate()
            .map(|(pair_index, pair)| {
                let annotated_text = annotate_pair(&tokens, pair, &self.config.markers)?;
                let arguments = if self.config.include_arguments {
                    Some(extract_arguments(
                        &example.raw_text,
                        pair,
                        self.config.offset_mode,
                    )?)
                } else {
                    None
                };
                Ok(OutputRow {
                    example_id: example.id.clone(),
                    pair_index,
                    annotated_text,
                    arguments,
                })
            })
            .collect()
    }

    /// Process independent examples in parallel.
    ///
    /// A failing example is recorded in [`BatchOutput::failures`] and does
    /// not stop the others. Rows keep the input order of their examples,
    /// and pair order within each example.
    pub fn process_batch<I>(&self, examples: &[Example<I>]) -> BatchOutput<I>
    where
        I: Clone + Debug + Send + Sync,
    {
        let results: Vec<CausalResult<Vec<OutputRow<I>>>> = examples
            .par_iter()
            .map(|example| self.process_example(example))
            .collect();

        let mut rows = Vec::new();
        let mut failures = Vec::new();
        for (example, result) in examples.iter().zip(results) {
            match result {
                Ok(example_rows) => rows.extend(example_rows),
                Err(error) => {
                    warn!(example_id = ?example.id, %error, "skipping example");
                    failures.push(ExampleFailure {
                        example_id: example.id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            examples = examples.len(),
            rows = rows.len(),
            failures = failures.len(),
            "processed batch"
        );

        BatchOutput { rows, failures }
    }
}
