//! Core types for `.toml` fixture files.
//!
//! ```toml
//! title = "Single pair"
//!
//! [[cases]]
//! name = "cause before effect"
//! tags = "['O', 'B-C', 'I-C', 'O', 'B-E', 'O']"
//! text = "a b c d e f"
//! causes = [[1, 2]]
//! effects = [[4, 4]]
//! annotated = ["a <ARG0>b c</ARG0> d <ARG1>e</ARG1> f"]
//! ```

use causal_pairs::{AlignmentPolicy, CausalResult, Example, OffsetMode, PipelineConfig};
use serde::{Deserialize, Serialize};

/// A parsed fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CausalFixture {
    /// Optional human-readable title
    pub title: Option<String>,
    #[serde(default)]
    pub cases: Vec<FixtureCase>,
}

/// One tagged sentence and the expectations declared for it.
///
/// Every expectation is optional; only the declared ones are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub name: String,
    /// Bracketed tag list, e.g. `"['O', 'B-C']"`
    pub tags: String,
    /// Tokenized text
    pub text: String,
    /// Raw text for character-offset arguments; defaults to `text`
    pub raw_text: Option<String>,
    /// Expected cause spans as inclusive `[begin, end]` token indices
    pub causes: Option<Vec<(usize, usize)>>,
    /// Expected effect spans as inclusive `[begin, end]` token indices
    pub effects: Option<Vec<(usize, usize)>>,
    /// Expected annotated text per pair, in pair order
    pub annotated: Option<Vec<String>>,
    /// Expected `[cause, effect]` argument strings per pair
    pub arguments: Option<Vec<(String, String)>>,
    pub offset_mode: Option<OffsetMode>,
    pub alignment: Option<AlignmentPolicy>,
    /// Substring of the expected error message
    pub expect_error: Option<String>,
}

impl CausalFixture {
    /// Parse fixture TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn case_by_name(&self, name: &str) -> Option<&FixtureCase> {
        self.cases.iter().find(|case| case.name == name)
    }
}

impl FixtureCase {
    /// Pipeline configuration for this case.
    ///
    /// Arguments are only extracted when the case declares them.
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_arguments(self.arguments.is_some())
            .with_offset_mode(self.offset_mode.unwrap_or_default())
            .with_alignment(self.alignment.unwrap_or_default())
    }

    /// The case as a pipeline example keyed by its name.
    pub fn example(&self) -> CausalResult<Example<String>> {
        let example = Example::from_tag_list(self.name.clone(), self.text.as_str(), &self.tags)?;
        Ok(match &self.raw_text {
            Some(raw_text) => example.with_raw_text(raw_text.as_str()),
            None => example,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_fixture() {
        let fixture = CausalFixture::from_toml_str(
            r#"
[[cases]]
name = "empty"
tags = "[]"
text = ""
"#,
        )
        .unwrap();
        assert!(fixture.title.is_none());
        assert_eq!(fixture.cases.len(), 1);
        assert!(fixture.cases[0].causes.is_none());
    }

    #[test]
    fn test_parse_full_case() {
        let fixture = CausalFixture::from_toml_str(
            r#"
title = "Full"

[[cases]]
name = "tokens"
tags = "['B-C', 'O', 'B-E']"
text = "rain caused floods"
raw_text = "Rain caused floods."
causes = [[0, 0]]
effects = [[2, 2]]
annotated = ["<ARG0>rain</ARG0> caused <ARG1>floods</ARG1>"]
arguments = [["rain", "floods"]]
offset_mode = "token"
alignment = "lenient"
"#,
        )
        .unwrap();
        let case = fixture.case_by_name("tokens").unwrap();
        assert_eq!(case.causes, Some(vec![(0, 0)]));
        assert_eq!(
            case.arguments,
            Some(vec![("rain".to_string(), "floods".to_string())])
        );

        let config = case.config();
        assert!(config.include_arguments);
        assert_eq!(config.offset_mode, OffsetMode::Token);
        assert_eq!(config.alignment, AlignmentPolicy::Lenient);

        let example = case.example().unwrap();
        assert_eq!(example.id, "tokens");
        assert_eq!(example.raw_text, "Rain caused floods.");
        assert_eq!(example.tags.len(), 3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CausalFixture::from_toml_str(
            r#"
[[cases]]
name = "typo"
tags = "[]"
text = ""
effect = [[0, 0]]
"#,
        );
        assert!(result.is_err());
    }
}
