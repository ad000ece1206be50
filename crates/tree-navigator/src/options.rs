//! Configuration options for the navigator.
//!
//! This module provides the `NavigatorOptions` struct which carries every
//! visual parameter the core needs: render depth, placeholder appearance,
//! status colors and the detail rows to project. The core holds no styling
//! defaults beyond the ones declared here.

use crate::detail::FieldSpec;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Hard ceiling on render depth; a window of depth `d` has `2^(d+1) - 1` slots.
pub const MAX_RENDER_DEPTH: usize = 10;

/// Configuration options for a tree navigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorOptions {
    /// Number of levels rendered below the focused node.
    pub max_depth: usize,

    /// Sentinel id carried by placeholder slots.
    pub placeholder_id: String,

    /// Label shown for placeholder slots.
    pub placeholder_label: String,

    /// Image shown for placeholder slots.
    pub placeholder_image: String,

    /// Color per status tag.
    pub status_colors: BTreeMap<String, String>,

    /// Color for unknown status tags and placeholders.
    pub default_color: String,

    /// Rows projected from each node's description. Empty means every key.
    pub detail_fields: Vec<FieldSpec>,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            placeholder_id: "__placeholder__".to_string(),
            placeholder_label: "Empty".to_string(),
            placeholder_image: "images/placeholder.png".to_string(),
            status_colors: BTreeMap::new(),
            default_color: "#9e9e9e".to_string(),
            detail_fields: Vec::new(),
        }
    }
}

impl NavigatorOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).context("Failed to parse navigator options")?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid options file {}", path.display()))
    }

    /// Reject configurations that are programming errors rather than data issues.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_RENDER_DEPTH {
            bail!(
                "max_depth {} exceeds the supported maximum of {}",
                self.max_depth,
                MAX_RENDER_DEPTH
            );
        }
        if self.placeholder_id.is_empty() {
            bail!("placeholder_id must not be empty");
        }
        Ok(())
    }

    /// Set the render depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the placeholder sentinel id.
    pub fn placeholder_id(mut self, id: impl Into<String>) -> Self {
        self.placeholder_id = id.into();
        self
    }

    /// Set the placeholder label.
    pub fn placeholder_label(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }

    /// Set the placeholder image.
    pub fn placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    /// Map a status tag to a color.
    pub fn status_color(mut self, status: impl Into<String>, color: impl Into<String>) -> Self {
        self.status_colors.insert(status.into(), color.into());
        self
    }

    /// Set the fallback color.
    pub fn default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Append a projected detail row.
    pub fn detail_field(mut self, field: FieldSpec) -> Self {
        self.detail_fields.push(field);
        self
    }

    /// Color for a status tag, falling back to the default color.
    pub fn color_for(&self, status: &str) -> &str {
        self.status_colors
            .get(status)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }
}
