use crate::{format_failure, format_summary, load_all_fixtures, load_fixture, run_fixture};
use std::path::Path;

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[test]
fn test_single_pair_fixture() {
    let fixture = load_fixture(&fixtures_dir().join("decoding").join("single-pair.toml")).unwrap();

    assert_eq!(fixture.title.as_deref(), Some("Single cause and effect"));
    assert_eq!(fixture.cases.len(), 2);
    let case = fixture.case_by_name("multi-token cause").unwrap();
    assert_eq!(case.causes, Some(vec![(1, 2)]));
    assert_eq!(case.effects, Some(vec![(4, 4)]));
}

#[test]
fn test_error_fixture_declares_errors() {
    let fixture = load_fixture(&fixtures_dir().join("pipeline").join("errors.toml")).unwrap();
    let expecting_errors = fixture
        .cases
        .iter()
        .filter(|case| case.expect_error.is_some())
        .count();
    assert_eq!(expecting_errors, 5);
}

#[test]
fn test_fixture_summaries() {
    let summaries: Vec<(String, usize, usize)> = load_all_fixtures(&fixtures_dir())
        .unwrap()
        .into_iter()
        .map(|(name, fixture)| {
            let report = run_fixture(&fixture);
            (name, report.passed(), report.failed())
        })
        .collect();

    insta::assert_debug_snapshot!(summaries, @r###"
    [
        (
            "decoding/single-pair.toml",
            2,
            0,
        ),
        (
            "decoding/span-boundaries.toml",
            7,
            0,
        ),
        (
            "pipeline/cartesian.toml",
            3,
            0,
        ),
        (
            "pipeline/errors.toml",
            6,
            0,
        ),
    ]
    "###);
}

/// Every fixture case passes; failing cases are printed in full.
#[test]
fn test_all_fixtures_pass() {
    let mut report_text = String::new();
    let mut all_passed = true;

    for (name, fixture) in load_all_fixtures(&fixtures_dir()).unwrap() {
        let report = run_fixture(&fixture);
        for failure in report.failures() {
            let case = fixture.case_by_name(&failure.name).unwrap();
            report_text.push_str(&format_failure(&name, case, &failure.outcome));
        }
        report_text.push_str(&format_summary(&name, &report));
        all_passed &= report.is_success();
    }

    assert!(all_passed, "{}", report_text);
}
