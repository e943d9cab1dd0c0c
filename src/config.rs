//! Pipeline configuration.

use crate::annotate::ArgMarkers;
use crate::errors::{CausalError, CausalResult};
use crate::extract::OffsetMode;
use crate::tagged_text::AlignmentPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for turning examples into output rows.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// How span indices are applied when extracting arguments.
    pub offset_mode: OffsetMode,
    /// Attach an [`ArgumentPair`](crate::ArgumentPair) to every output row.
    pub include_arguments: bool,
    /// Whether tag count must equal token count.
    pub alignment: AlignmentPolicy,
    pub markers: ArgMarkers,
}

impl PipelineConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(content: &str) -> CausalResult<Self> {
        toml::from_str(content).map_err(|e| CausalError::Config {
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> CausalResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CausalError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CausalError::Config { message } => CausalError::Config {
                message: format!("failed to parse {}: {}", path.display(), message),
            },
            other => other,
        })
    }

    pub fn with_arguments(mut self, include_arguments: bool) -> Self {
        self.include_arguments = include_arguments;
        self
    }

    pub fn with_offset_mode(mut self, offset_mode: OffsetMode) -> Self {
        self.offset_mode = offset_mode;
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_markers(mut self, markers: ArgMarkers) -> Self {
        self.markers = markers;
        self
    }
}
