//! Style knobs: colors, fonts and line width.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid line width: {0}")]
    InvalidLineWidth(f64),
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn red() -> Self {
        Self::new(255, 59, 48, 255)
    }

    pub const fn system_blue() -> Self {
        Self::new(0, 122, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Size in points.
    pub size: f64,
    /// Weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Live-mutable style of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    /// Outline color; also the label color while unfocused.
    pub shape_color: SerializableColor,
    /// Entered text color; also the label color while focused.
    pub tint_color: SerializableColor,
    /// Font of the entered text.
    pub text_font: FontSpec,
    /// Font of the floating label.
    pub placeholder_font: FontSpec,
    /// Font of the error label.
    pub error_font: FontSpec,
    /// Color of the error label.
    pub error_color: SerializableColor,
    /// Outline stroke thickness.
    pub line_width: f64,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            // Red at 30% opacity
            shape_color: SerializableColor::new(255, 59, 48, 77),
            tint_color: SerializableColor::system_blue(),
            text_font: FontSpec::regular(20.0),
            placeholder_font: FontSpec::bold(20.0),
            error_font: FontSpec::bold(14.0),
            error_color: SerializableColor::red(),
            line_width: 4.0,
        }
    }
}

impl FieldStyle {
    /// Outline color as a peniko Color.
    pub fn shape(&self) -> Color {
        self.shape_color.into()
    }

    /// Tint color as a peniko Color.
    pub fn tint(&self) -> Color {
        self.tint_color.into()
    }

    /// Error color as a peniko Color.
    pub fn error(&self) -> Color {
        self.error_color.into()
    }

    /// Check values that cannot be clamped into something sensible.
    pub fn validate(&self) -> StyleResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(StyleError::InvalidLineWidth(self.line_width));
        }
        Ok(())
    }
}
