//! Text measurement supplied by the text-input host.

use crate::style::{FontSpec, FontWeight};
use kurbo::Size;

/// Measures single-line text. Implemented by whatever owns the real fonts.
pub trait TextMeasure {
    /// Size of `text` laid out on one line in `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Character-count estimate, for hosts without font access (and tests).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasure {
    /// Advance per character as a fraction of the font size.
    pub advance: f64,
    /// Line height as a fraction of the font size.
    pub line_height: f64,
}

impl Default for ApproximateMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for ApproximateMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let weight = match font.weight {
            FontWeight::Regular => 1.0,
            FontWeight::Bold => 1.1,
        };
        let chars = text.chars().count() as f64;
        Size::new(
            chars * font.size * self.advance * weight,
            font.size * self.line_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_width() {
        let measure = ApproximateMeasure::default();
        let size = measure.measure("EMAIL", &FontSpec::regular(20.0));
        assert!((size.width - 60.0).abs() < 1e-9);
        assert!((size.height - 24.0).abs() < 1e-9);
        assert!(measure.measure("", &FontSpec::bold(20.0)).width.abs() < f64::EPSILON);
    }
}
