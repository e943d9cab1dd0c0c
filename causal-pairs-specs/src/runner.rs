//! Runner for executing fixture cases through the pipeline.

use crate::fixture::{CausalFixture, FixtureCase};
use causal_pairs::{decode_literals, CausalResult, Pipeline, Span};
use std::fmt::Debug;

/// One expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Which expectation, e.g. "causes" or "annotated"
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn new(field: &str, expected: impl Debug, actual: impl Debug) -> Self {
        Self {
            field: field.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}

/// Outcome of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// The case ran but some expectations did not hold.
    Failed { mismatches: Vec<Mismatch> },
    /// The pipeline failed and the case did not expect an error.
    Errored { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
}

/// Result of running every case of a fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub cases: Vec<CaseReport>,
}

impl FixtureReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Cases that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.outcome.is_passed())
    }
}

/// Run every case of a fixture and compare against its declared expectations.
pub fn run_fixture(fixture: &CausalFixture) -> FixtureReport {
    let cases = fixture
        .cases
        .iter()
        .map(|case| CaseReport {
            name: case.name.clone(),
            outcome: run_case(case),
        })
        .collect();
    FixtureReport { cases }
}

/// Run a single case.
pub fn run_case(case: &FixtureCase) -> CaseOutcome {
    match check_case(case) {
        Ok(mismatches) if mismatches.is_empty() => CaseOutcome::Passed,
        Ok(mismatches) => CaseOutcome::Failed { mismatches },
        Err(error) => {
            let message = error.to_string();
            match &case.expect_error {
                Some(expected) if message.contains(expected.as_str()) => CaseOutcome::Passed,
                Some(expected) => CaseOutcome::Failed {
                    mismatches: vec![Mismatch::new("error", expected, message)],
                },
                None => CaseOutcome::Errored { message },
            }
        }
    }
}

fn bounds(spans: &[Span]) -> Vec<(usize, usize)> {
    spans.iter().map(Span::bounds).collect()
}

fn check_case(case: &FixtureCase) -> CausalResult<Vec<Mismatch>> {
    let example = case.example()?;
    let mut mismatches = Vec::new();

    if case.causes.is_some() || case.effects.is_some() {
        let labels = decode_literals(example.tags.as_slice())?;
        if let Some(expected) = &case.causes {
            let actual = bounds(&labels.causes);
            if *expected != actual {
                mismatches.push(Mismatch::new("causes", expected, actual));
            }
        }
        if let Some(expected) = &case.effects {
            let actual = bounds(&labels.effects);
            if *expected != actual {
                mismatches.push(Mismatch::new("effects", expected, actual));
            }
        }
    }

    let rows = Pipeline::new(case.config()).process_example(&example)?;

    if let Some(expected) = &case.expect_error {
        mismatches.push(Mismatch::new("error", expected, "no error"));
    }

    if let Some(expected) = &case.annotated {
        let actual: Vec<&str> = rows.iter().map(|r| r.annotated_text.as_str()).collect();
        if *expected != actual {
            mismatches.push(Mismatch::new("annotated", expected, actual));
        }
    }

    if let Some(expected) = &case.arguments {
        let actual: Vec<(String, String)> = rows
            .iter()
            .filter_map(|r| r.arguments.as_ref())
            .map(|a| (a.cause.clone(), a.effect.clone()))
            .collect();
        if *expected != actual {
            mismatches.push(Mismatch::new("arguments", expected, actual));
        }
    }

    Ok(mismatches)
}
