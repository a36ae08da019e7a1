//! Floating label placement.

use crate::Instant;
use crate::animation::Tween;
use crate::metrics::{FLOAT_DELTA, OFFSET};
use kurbo::{Point, Rect, Size};
use std::time::Duration;

/// Where the floating label sits. Exactly one placement is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPlacement {
    /// Vertically centered inside the field, acting as the placeholder.
    #[default]
    Centered,
    /// Pinned to the top edge, sitting in the outline gap.
    Floating,
}

/// Switches the label between its two placements, animating the move.
#[derive(Debug, Clone, Default)]
pub struct LabelPositioner {
    placement: LabelPlacement,
    /// 0 = centered, 1 = floating; used when nothing animates.
    settled: f64,
    transition: Option<Tween>,
}

impl LabelPositioner {
    /// Create a positioner in the centered placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (target) placement.
    pub fn placement(&self) -> LabelPlacement {
        self.placement
    }

    /// Whether the label is (or is moving to) the floating placement.
    pub fn is_floating(&self) -> bool {
        self.placement == LabelPlacement::Floating
    }

    /// Leading inset of the active placement.
    pub fn leading_inset(&self) -> f64 {
        match self.placement {
            LabelPlacement::Centered => OFFSET,
            LabelPlacement::Floating => OFFSET + FLOAT_DELTA,
        }
    }

    /// Switch placement, animating over `duration`.
    ///
    /// Returns false (and does nothing) when the placement already matches.
    pub fn set_floating(&mut self, active: bool, duration: Duration, now: Instant) -> bool {
        let placement = placement_for(active);
        if placement == self.placement {
            return false;
        }

        let from = self.float_fraction(now);
        let to = if active { 1.0 } else { 0.0 };
        self.placement = placement;
        self.settled = to;
        self.transition = Some(Tween::new(from, to, now, duration));
        log::debug!("Label placement -> {:?}", placement);
        true
    }

    /// Switch placement immediately, without animation.
    pub fn snap(&mut self, active: bool) {
        self.placement = placement_for(active);
        self.settled = if active { 1.0 } else { 0.0 };
        self.transition = None;
    }

    /// Interpolation between centered (0) and floating (1) at `now`.
    pub fn float_fraction(&self, now: Instant) -> f64 {
        match &self.transition {
            Some(tween) => tween.value(now),
            None => self.settled,
        }
    }

    /// Top-left corner of the label at `now` for the given field bounds.
    pub fn origin(&self, bounds: Rect, label_size: Size, now: Instant) -> Point {
        let centered = Point::new(
            bounds.x0 + OFFSET,
            bounds.y0 + bounds.height() / 2.0 - label_size.height / 2.0,
        );
        let floating = Point::new(bounds.x0 + OFFSET + FLOAT_DELTA, bounds.y0);
        centered.lerp(floating, self.float_fraction(now))
    }

    /// Drop a finished transition. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(tween) = self.transition {
            if tween.is_finished(now) {
                self.transition = None;
                return false;
            }
            return true;
        }
        false
    }

    /// Whether the label is moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|tween| !tween.is_finished(now))
    }
}

fn placement_for(active: bool) -> LabelPlacement {
    if active {
        LabelPlacement::Floating
    } else {
        LabelPlacement::Centered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 70.0)
    }

    #[test]
    fn test_default_is_centered() {
        let label = LabelPositioner::new();
        assert_eq!(label.placement(), LabelPlacement::Centered);
        assert!((label.leading_inset() - 30.0).abs() < f64::EPSILON);
        let origin = label.origin(bounds(), Size::new(80.0, 24.0), Instant::now());
        assert!((origin.x - 30.0).abs() < f64::EPSILON);
        assert!((origin.y - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_float_moves_to_top() {
        let start = Instant::now();
        let mut label = LabelPositioner::new();
        assert!(label.set_floating(true, DURATION, start));
        assert!((label.leading_inset() - 40.0).abs() < f64::EPSILON);
        assert!(label.is_animating(start + Duration::from_millis(100)));

        let end = start + DURATION;
        let origin = label.origin(bounds(), Size::new(80.0, 24.0), end);
        assert!((origin.x - 40.0).abs() < 1e-9);
        assert!(origin.y.abs() < 1e-9);
        assert!(!label.tick(end));
    }

    #[test]
    fn test_same_placement_is_noop() {
        let mut label = LabelPositioner::new();
        assert!(!label.set_floating(false, DURATION, Instant::now()));
        assert!(!label.is_animating(Instant::now()));
    }

    #[test]
    fn test_reverse_mid_transition() {
        let start = Instant::now();
        let mut label = LabelPositioner::new();
        label.set_floating(true, DURATION, start);
        let switch = start + Duration::from_millis(60);
        let at_switch = label.float_fraction(switch);
        label.set_floating(false, DURATION, switch);
        assert!((label.float_fraction(switch) - at_switch).abs() < 1e-9);
        assert_eq!(label.float_fraction(switch + DURATION), 0.0);
    }

    #[test]
    fn test_snap() {
        let mut label = LabelPositioner::new();
        label.snap(true);
        assert!(label.is_floating());
        assert_eq!(label.float_fraction(Instant::now()), 1.0);
    }
}
