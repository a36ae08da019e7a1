//! Time-sampled scalar animations.
//!
//! Animations never run on their own: the host samples them with the current
//! [`Instant`] from whatever frame timer it has. A [`Tween`] is a pure function of
//! time, and a [`StrokeAnimator`] owns at most one tween for a single stroke.

use crate::Instant;
use kurbo::{CubicBez, ParamCurve, Point};
use std::time::Duration;

/// Iterations used to invert the timing curve's x(t).
const SOLVE_ITERATIONS: usize = 32;

/// A cubic-bezier timing function from (0,0) to (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    p1: Point,
    p2: Point,
}

impl TimingCurve {
    /// Standard ease-in-ease-out curve.
    pub const EASE_IN_EASE_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// Constant-rate curve.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    /// Map linear time progress in `[0, 1]` to eased progress.
    pub fn apply(&self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }

        let curve = CubicBez::new(Point::ORIGIN, self.p1, self.p2, Point::new(1.0, 1.0));
        // x(t) is monotonic for control x in [0, 1]; bisect for the parameter
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..SOLVE_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if curve.eval(mid).x < progress {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        curve.eval((lo + hi) / 2.0).y
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::EASE_IN_EASE_OUT
    }
}

/// One scalar animation from `from` to `to` starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Value at the start.
    pub from: f64,
    /// Value at completion; held afterwards.
    pub to: f64,
    /// Start time.
    pub start: Instant,
    /// Total duration.
    pub duration: Duration,
    /// Timing function.
    pub curve: TimingCurve,
}

impl Tween {
    /// Create an ease-in-ease-out tween.
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            curve: TimingCurve::EASE_IN_EASE_OUT,
        }
    }

    /// Linear time progress in `[0, 1]`. Zero-duration tweens are complete at once.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value(&self, now: Instant) -> f64 {
        let eased = self.curve.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Whether the tween has reached its target.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Reveal fraction of one stroke, with at most one animation in flight.
#[derive(Debug, Clone, Default)]
pub struct StrokeAnimator {
    /// Settled value when nothing is animating.
    settled: f64,
    /// In-flight animation, if any.
    active: Option<Tween>,
}

impl StrokeAnimator {
    /// Create an animator settled at `progress`.
    pub fn new(progress: f64) -> Self {
        Self {
            settled: clamp_unit(progress),
            active: None,
        }
    }

    /// Animate from an explicit starting value, replacing any in-flight animation.
    pub fn animate(&mut self, from: f64, to: f64, duration: Duration, now: Instant) {
        let tween = Tween::new(clamp_unit(from), clamp_unit(to), now, duration);
        self.settled = tween.to;
        self.active = Some(tween);
    }

    /// Animate from the currently rendered value to `to`.
    ///
    /// An in-flight animation is cancelled; the new one continues from where the
    /// old one was at `now`, so rapid toggling never jumps.
    pub fn animate_to(&mut self, to: f64, duration: Duration, now: Instant) {
        let current = self.progress(now);
        self.animate(current, to, duration, now);
    }

    /// Rendered reveal fraction at `now`.
    ///
    /// After completion this is the target, whether or not [`tick`](Self::tick) ran.
    pub fn progress(&self, now: Instant) -> f64 {
        match &self.active {
            Some(tween) => tween.value(now),
            None => self.settled,
        }
    }

    /// Drop the animation once finished. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(tween) = self.active {
            if tween.is_finished(now) {
                self.active = None;
                return false;
            }
            return true;
        }
        false
    }

    /// Whether an animation is in flight at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.is_some_and(|tween| !tween.is_finished(now))
    }

    /// Target of the last request (or the settled value).
    pub fn target(&self) -> f64 {
        self.settled
    }

    /// Jump to `progress`, cancelling any animation.
    pub fn set_progress(&mut self, progress: f64) {
        self.settled = clamp_unit(progress);
        self.active = None;
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
