//! Inline error message shown under the field.

use crate::Instant;
use crate::metrics::{ERROR_HEIGHT, OFFSET};
use kurbo::Rect;
use std::time::Duration;

/// Horizontal shake keyframes in units, evenly spaced over [`SHAKE_DURATION`].
pub const SHAKE_KEYFRAMES: [f64; 10] = [0.0, -20.0, 20.0, -20.0, 20.0, -10.0, 10.0, -5.0, 5.0, 0.0];
/// Total length of the shake.
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Shows and hides the error label. Both calls are idempotent.
#[derive(Debug, Clone, Default)]
pub struct ErrorPresenter {
    message: Option<String>,
    reserved_height: f64,
    shake_start: Option<Instant>,
}

impl ErrorPresenter {
    /// Create a presenter with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, reserve room for it and start a shake.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::debug!("Showing field error: {}", message);
        self.message = Some(message);
        self.reserved_height = ERROR_HEIGHT;
        self.shake_start = Some(now);
    }

    /// Clear the message and collapse the reserved height.
    pub fn hide_error(&mut self) {
        if self.message.is_some() {
            log::debug!("Hiding field error");
        }
        self.message = None;
        self.reserved_height = 0.0;
        self.shake_start = None;
    }

    /// Current message, if shown.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current label text; empty when hidden.
    pub fn text(&self) -> &str {
        self.message().unwrap_or("")
    }

    /// Whether an error is shown.
    pub fn is_shown(&self) -> bool {
        self.message.is_some()
    }

    /// Height reserved below the field: 0 or [`ERROR_HEIGHT`].
    pub fn reserved_height(&self) -> f64 {
        self.reserved_height
    }

    /// Frame of the error label for the given field bounds, before the shake offset.
    pub fn frame(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x0 + OFFSET,
            bounds.y1,
            (bounds.x1 - OFFSET).max(bounds.x0 + OFFSET),
            bounds.y1 + self.reserved_height,
        )
    }

    /// Horizontal shake offset at `now`; zero outside the shake window.
    pub fn shake_offset(&self, now: Instant) -> f64 {
        let Some(start) = self.shake_start else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= SHAKE_DURATION {
            return 0.0;
        }

        let steps = (SHAKE_KEYFRAMES.len() - 1) as f64;
        let position = elapsed.as_secs_f64() / SHAKE_DURATION.as_secs_f64() * steps;
        let index = (position.floor() as usize).min(SHAKE_KEYFRAMES.len() - 2);
        let t = position - index as f64;
        let (a, b) = (SHAKE_KEYFRAMES[index], SHAKE_KEYFRAMES[index + 1]);
        a + (b - a) * t
    }

    /// Whether the shake is still running at `now`.
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_start
            .is_some_and(|start| now.saturating_duration_since(start) < SHAKE_DURATION)
    }
}
