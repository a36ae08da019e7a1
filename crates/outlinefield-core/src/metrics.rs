//! Fixed insets and per-layout box metrics.

use kurbo::Rect;
use std::time::Duration;

/// Horizontal inset of the outline and label from the field edges.
pub const OFFSET: f64 = 30.0;
/// Vertical inset of the outline from the top edge.
pub const TOP_OFFSET: f64 = 6.0;
/// Extra leading inset applied to the label while it floats.
pub const FLOAT_DELTA: f64 = 10.0;
/// Height reserved below the field while an error is shown.
pub const ERROR_HEIGHT: f64 = 30.0;
/// Preferred height of the field, independent of its content.
pub const PREFERRED_HEIGHT: f64 = 70.0;
/// Duration of the focus reveal and label transitions.
pub const FOCUS_DURATION: Duration = Duration::from_millis(200);

/// Geometry inputs for one layout pass.
///
/// Recomputed every pass from the current bounds and line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    /// Field bounds.
    pub bounds: Rect,
    /// Horizontal inset.
    pub offset: f64,
    /// Vertical inset.
    pub top_offset: f64,
    /// Stroke thickness.
    pub line_width: f64,
}

impl BoxMetrics {
    /// Create metrics with the standard insets.
    pub fn new(bounds: Rect, line_width: f64) -> Self {
        Self {
            bounds: bounds.abs(),
            offset: OFFSET,
            top_offset: TOP_OFFSET,
            line_width: sanitize(line_width),
        }
    }

    /// Half the stroke thickness.
    pub fn half_line_width(&self) -> f64 {
        self.line_width / 2.0
    }

    /// Whether the bounds can hold any geometry at all.
    pub fn is_degenerate(&self) -> bool {
        let b = self.bounds;
        let finite = [b.x0, b.y0, b.x1, b.y1].iter().all(|v| v.is_finite());
        !finite || b.width() <= 0.0 || b.height() <= 0.0
    }
}

/// Clamp NaN and negative lengths to zero.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
