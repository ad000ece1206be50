//! Projection of a node's description bag into display rows

use crate::tree::Description;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value shown when a projected key is absent or empty
pub const DEFAULT_FALLBACK: &str = "-";

/// One label/value pair for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Maps a description bag to ordered display rows
///
/// Implementations must be pure and must not panic on missing or oddly typed
/// values. Any `Fn(&Description) -> Vec<DetailRow>` is a projector.
pub trait DetailProjector {
    fn project(&self, description: &Description) -> Vec<DetailRow>;
}

impl<F> DetailProjector for F
where
    F: Fn(&Description) -> Vec<DetailRow>,
{
    fn project(&self, description: &Description) -> Vec<DetailRow> {
        self(description)
    }
}

/// Render a description value as display text
///
/// Absent values, `null` and empty strings become `fallback`.
pub fn format_value(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(text)) if text.is_empty() => fallback.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

/// A single configured row: where to read it and what to show when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    pub key: String,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl FieldSpec {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            fallback: default_fallback(),
        }
    }

    /// Set the value shown when the key is absent
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

/// Projects a fixed, ordered list of fields
///
/// # Example
///
/// ```
/// use tree_navigator::detail::{DetailProjector, FieldProjector};
/// use tree_navigator::tree::Description;
///
/// let projector = FieldProjector::new()
///     .field("Left leg", "left_count")
///     .field_or("Points", "points", "0");
///
/// let rows = projector.project(&Description::new());
/// assert_eq!(rows[0].value, "-");
/// assert_eq!(rows[1].value, "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProjector {
    fields: Vec<FieldSpec>,
}

impl FieldProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already configured field specs
    pub fn from_fields(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Add a row with the default fallback
    pub fn field(self, label: impl Into<String>, key: impl Into<String>) -> Self {
        self.spec(FieldSpec::new(label, key))
    }

    /// Add a row with a custom fallback
    pub fn field_or(
        self,
        label: impl Into<String>,
        key: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.spec(FieldSpec::new(label, key).fallback(fallback))
    }

    pub fn spec(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

impl DetailProjector for FieldProjector {
    fn project(&self, description: &Description) -> Vec<DetailRow> {
        self.fields
            .iter()
            .map(|spec| {
                DetailRow::new(
                    spec.label.clone(),
                    format_value(description.get(&spec.key), &spec.fallback),
                )
            })
            .collect()
    }
}

/// Projects every key in the bag, in key order, labelled by the key itself
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFieldsProjector;

impl DetailProjector for AllFieldsProjector {
    fn project(&self, description: &Description) -> Vec<DetailRow> {
        description
            .iter()
            .map(|(key, value)| DetailRow::new(key.clone(), format_value(Some(value), DEFAULT_FALLBACK)))
            .collect()
    }
}
