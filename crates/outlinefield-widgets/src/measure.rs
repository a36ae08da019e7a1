//! Label measurement through egui's font system.

use egui::{Color32, Painter};
use kurbo::Size;
use outlinefield_core::{FontSpec, TextMeasure};

use crate::convert::font_id;

/// Measures text with the fonts loaded in an egui context.
pub struct PainterMeasure<'a> {
    painter: &'a Painter,
}

impl<'a> PainterMeasure<'a> {
    /// Measure with the given painter's fonts.
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasure for PainterMeasure<'_> {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            font_id(font),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let size = galley.size();
        Size::new(size.x as f64, size.y as f64)
    }
}
