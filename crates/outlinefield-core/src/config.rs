//! JSON field configuration.

use crate::geometry::ShapeVariant;
use crate::style::{FieldStyle, StyleResult};
use serde::{Deserialize, Serialize};

/// Everything needed to construct a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Bracket variant.
    pub shape: ShapeVariant,
    /// Placeholder shown through the floating label.
    pub placeholder: Option<String>,
    /// Initial style.
    pub style: FieldStyle,
}

impl FieldConfig {
    /// Parse and validate a configuration.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.style.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
