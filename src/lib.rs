//! Decoding of BIO-CE tag sequences into cause/effect pairs.
//!
//! Each example is a text with one tag per whitespace token. The tags mark
//! the Beginning and Inside tokens of Cause (`B-C`, `I-C`) and Effect
//! (`B-E`, `I-E`) spans; every other token is Outside. From one example
//! this crate produces every cause–effect combination, each rendered as
//! annotated text and as a pair of argument strings.
//!
//! ## Modules
//!
//! - [`tag`] - Tag literals and the bracketed tag-list wire form
//! - [`decoder`] - Tag sequence to cause and effect spans
//! - [`pair`] - Cartesian product of causes and effects
//! - [`tagged_text`] - Tags bound to the tokens they label
//! - [`annotate`] - Marker insertion for one pair
//! - [`extract`] - Argument strings for one pair
//! - [`pipeline`] - Per-example and batch processing
//! - [`config`] - TOML pipeline configuration
//! - [`display`] - Span underlines for debugging and snapshots
//!
//! ## Example
//!
//! ```
//! use causal_pairs::decode_and_annotate;
//!
//! let annotated = decode_and_annotate(
//!     &["'O'", "'B-C'", "'I-C'", "'O'", "'B-E'", "'O'"],
//!     "a b c d e f",
//! )
//! .unwrap();
//! assert_eq!(annotated, vec!["a <ARG0>b c</ARG0> d <ARG1>e</ARG1> f"]);
//! ```

pub mod annotate;
pub mod config;
pub mod decoder;
pub mod display;
pub mod errors;
pub mod example;
pub mod extract;
pub mod pair;
pub mod pipeline;
pub mod span;
pub mod tag;
pub mod tagged_text;

pub use annotate::{annotate_pair, annotate_pairs, strip_markers, ArgMarkers};
pub use config::PipelineConfig;
pub use decoder::{decode_literals, decode_tags};
pub use display::LabelsDisplay;
pub use errors::{CausalError, CausalResult};
pub use example::{Example, ExampleKey, OutputRow};
pub use extract::{
    char_slice, extract_arguments, extract_by_characters, extract_by_tokens, ArgumentPair,
    OffsetMode,
};
pub use pair::{enumerate_pairs, Pair};
pub use pipeline::{
    decode_and_annotate, decode_and_pair, BatchOutput, ExampleFailure, Pipeline,
};
pub use span::{DecodedLabels, Span, SpanKind};
pub use tag::{parse_tag_list, parse_tags, Tag};
pub use tagged_text::{whitespace_tokens, AlignmentPolicy, TaggedText};
