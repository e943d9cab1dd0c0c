//! Failure formatting for fixture reports.

use crate::fixture::FixtureCase;
use crate::runner::{CaseOutcome, FixtureReport};
use std::fmt::Write;

/// Format a case that did not pass, with its text and tags for context.
pub fn format_failure(fixture_name: &str, case: &FixtureCase, outcome: &CaseOutcome) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {} :: {}", fixture_name, case.name).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "  text: {}", case.text).unwrap();
    writeln!(output, "  tags: {}", case.tags).unwrap();
    writeln!(output).unwrap();

    match outcome {
        CaseOutcome::Failed { mismatches } => {
            for mismatch in mismatches {
                writeln!(
                    output,
                    "    \u{2717} {}: expected `{}`, found `{}`",
                    mismatch.field, mismatch.expected, mismatch.actual
                )
                .unwrap();
            }
        }
        CaseOutcome::Errored { message } => {
            writeln!(output, "  error: {}", message).unwrap();
            if let Some(hint) = generate_hint(message) {
                writeln!(output).unwrap();
                writeln!(output, "  hint: {}", hint).unwrap();
            }
        }
        CaseOutcome::Passed => {
            writeln!(output, "  (passed)").unwrap();
        }
    }

    output
}

/// Format a one-fixture summary.
pub fn format_summary(fixture_name: &str, report: &FixtureReport) -> String {
    let mut output = String::new();

    let status = if report.is_success() { "PASS" } else { "FAIL" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed",
        report.passed(),
        report.failed()
    )
    .unwrap();

    output
}

fn generate_hint(message: &str) -> Option<&'static str> {
    if message.contains("do not align") {
        return Some("set alignment = \"lenient\" if the tags were produced against another tokenization");
    }
    if message.contains("out of bounds") {
        return Some("a span reaches past the last token of `text`");
    }
    None
}
