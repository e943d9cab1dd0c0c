//! Fixture-driven testing infrastructure for causal-pairs.
//!
//! Test cases are declared in `.toml` fixture files: a tag list, the text
//! it labels, and any of the expected spans, annotated texts, arguments or
//! error. The runner feeds each case through the pipeline and reports
//! every expectation that does not hold.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture file types
//! - [`loader`] - Loading single fixtures and fixture directories
//! - [`runner`] - Executes cases and compares expectations
//! - [`formatter`] - Human-readable failure and summary output
//! - [`errors`] - Error types for fixture loading

pub mod errors;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use fixture::{CausalFixture, FixtureCase};
pub use formatter::{format_failure, format_summary};
pub use loader::{fixture_paths, load_all_fixtures, load_fixture};
pub use runner::{run_case, run_fixture, CaseOutcome, CaseReport, FixtureReport, Mismatch};

#[cfg(test)]
mod tests;
