//! Outline geometry: the bottom line and the two brackets around the label gap.

use crate::metrics::{BoxMetrics, sanitize};
use kurbo::{Arc, BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Flattening tolerance used when converting arcs to beziers.
const ARC_TOLERANCE: f64 = 0.1;
/// Accuracy for arc length queries.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// Which bracket formula the outline uses. Fixed for the lifetime of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeVariant {
    /// Half-circle brackets.
    #[default]
    Circular,
    /// Right-angle brackets.
    Square,
}

/// The three outline paths, each drawn and animated independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPair {
    /// Left bracket.
    pub left: BezPath,
    /// Right bracket, ending where the label text ends.
    pub right: BezPath,
    /// Straight segment along the bottom edge.
    pub bottom: BezPath,
}

impl PathPair {
    /// Three empty paths.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether every path is empty.
    pub fn is_empty(&self) -> bool {
        self.left.elements().is_empty()
            && self.right.elements().is_empty()
            && self.bottom.elements().is_empty()
    }
}

/// Compute the outline paths for the given metrics and measured label width.
///
/// A missing label width is treated as zero. Degenerate bounds yield empty paths.
/// The brackets leave the horizontal span `[offset - lineWidth/2, offset + labelWidth]`
/// (relative to the left edge) uncovered at the top so the label can sit in the border.
pub fn compute_paths(
    metrics: &BoxMetrics,
    variant: ShapeVariant,
    label_width: Option<f64>,
) -> PathPair {
    if metrics.is_degenerate() {
        return PathPair::empty();
    }

    let label_width = sanitize(label_width.unwrap_or(0.0));
    let (left, right) = match variant {
        ShapeVariant::Circular => circular_brackets(metrics, label_width),
        ShapeVariant::Square => square_brackets(metrics, label_width),
    };

    PathPair {
        left,
        right,
        bottom: bottom_line(metrics),
    }
}

fn bottom_line(metrics: &BoxMetrics) -> BezPath {
    let b = metrics.bounds;
    let half = metrics.half_line_width();
    let y = b.y1 - half;

    let mut path = BezPath::new();
    path.move_to(Point::new(b.x0 + metrics.offset + half, y));
    path.line_to(Point::new(b.x1 - metrics.offset - half, y));
    path
}

fn circular_brackets(metrics: &BoxMetrics, label_width: f64) -> (BezPath, BezPath) {
    let b = metrics.bounds;
    let half = metrics.half_line_width();
    let center_y = b.y0 + b.height() / 2.0 + metrics.top_offset;
    let radius = (b.height() / 2.0 - metrics.top_offset - half).max(0.0);

    // Right: bottom, around the right side, to the top (counter-clockwise on screen)
    let right_arc = Arc {
        center: Point::new(b.x1 - metrics.offset + half, center_y),
        radii: Vec2::new(radius, radius),
        start_angle: FRAC_PI_2,
        sweep_angle: -PI,
        x_rotation: 0.0,
    };
    let mut right = right_arc.to_path(ARC_TOLERANCE);
    let top_y = center_y - radius;
    right.line_to(Point::new(b.x0 + metrics.offset + label_width, top_y));

    // Left: bottom, around the left side, to the top; ends at the field edge
    let left_arc = Arc {
        center: Point::new(b.x0 + metrics.offset - half, center_y),
        radii: Vec2::new(radius, radius),
        start_angle: FRAC_PI_2,
        sweep_angle: PI,
        x_rotation: 0.0,
    };
    let left = left_arc.to_path(ARC_TOLERANCE);

    (left, right)
}

fn square_brackets(metrics: &BoxMetrics, label_width: f64) -> (BezPath, BezPath) {
    let b = metrics.bounds;
    let half = metrics.half_line_width();
    let bottom_y = b.y1 - half;
    let top_y = b.y0 + metrics.top_offset + metrics.line_width * 2.0;

    let mut right = BezPath::new();
    right.move_to(Point::new(b.x1 - metrics.offset + half, bottom_y));
    right.line_to(Point::new(b.x1 - half, bottom_y));
    right.line_to(Point::new(b.x1 - half, top_y));
    right.line_to(Point::new(b.x0 + metrics.offset + label_width, top_y));

    let mut left = BezPath::new();
    left.move_to(Point::new(b.x0 + metrics.offset - half, bottom_y));
    left.line_to(Point::new(b.x0, bottom_y));
    left.line_to(Point::new(b.x0, top_y));
    left.line_to(Point::new(b.x0 + metrics.offset - half, top_y));

    (left, right)
}

/// Total arc length of a path.
pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(ARCLEN_ACCURACY)).sum()
}

/// The leading part of `path` covering `fraction` of its total length.
///
/// `fraction` is clamped to `[0, 1]`; zero (or a zero-length path) yields an empty path.
pub fn trim_path(path: &BezPath, fraction: f64) -> BezPath {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    if fraction >= 1.0 {
        return path.clone();
    }

    let segments: Vec<PathSeg> = path.segments().collect();
    let lengths: Vec<f64> = segments.iter().map(|seg| seg.arclen(ARCLEN_ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();

    let mut trimmed = BezPath::new();
    if fraction <= 0.0 || total <= 0.0 {
        return trimmed;
    }

    let mut remaining = total * fraction;
    for (seg, &len) in segments.iter().zip(&lengths) {
        if trimmed.elements().is_empty() {
            trimmed.move_to(seg.start());
        }
        if remaining >= len {
            trimmed.push(seg.as_path_el());
            remaining -= len;
        } else {
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY);
            trimmed.push(seg.subsegment(0.0..t).as_path_el());
            break;
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Rect};

    const EPS: f64 = 1e-6;

    fn metrics() -> BoxMetrics {
        BoxMetrics::new(Rect::new(0.0, 0.0, 300.0, 70.0), 4.0)
    }

    fn first_point(path: &BezPath) -> Point {
        match path.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            other => panic!("path does not start with MoveTo: {:?}", other),
        }
    }

    fn last_point(path: &BezPath) -> Point {
        path.segments().last().expect("empty path").end()
    }

    #[test]
    fn test_bottom_line() {
        let paths = compute_paths(&metrics(), ShapeVariant::Circular, Some(80.0));
        assert!((first_point(&paths.bottom) - Point::new(32.0, 68.0)).hypot() < EPS);
        assert!((last_point(&paths.bottom) - Point::new(268.0, 68.0)).hypot() < EPS);
    }

    #[test]
    fn test_circular_right_bracket() {
        let paths = compute_paths(&metrics(), ShapeVariant::Circular, Some(80.0));
        // Arc starts straight below its center: x = 300 - 30 + 2, y = 35 + 6 + 27
        let start = first_point(&paths.right);
        assert!((start.x - 272.0).abs() < EPS);
        assert!((start.y - 68.0).abs() < EPS);
        // Outermost point of the arc is one radius right of the center
        assert!((paths.right.bounding_box().x1 - 299.0).abs() < 1e-3);
        // Trailing segment stops at offset + label width, level with the arc top
        let end = last_point(&paths.right);
        assert!((end.x - 110.0).abs() < EPS);
        assert!((end.y - 14.0).abs() < EPS);
    }

    #[test]
    fn test_circular_left_bracket() {
        let paths = compute_paths(&metrics(), ShapeVariant::Circular, Some(80.0));
        let start = first_point(&paths.left);
        assert!((start.x - 28.0).abs() < EPS);
        assert!((start.y - 68.0).abs() < EPS);
        let end = last_point(&paths.left);
        assert!((end.x - 28.0).abs() < EPS);
        assert!((end.y - 14.0).abs() < EPS);
        assert!((paths.left.bounding_box().x0 - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_label_gap() {
        for variant in [ShapeVariant::Circular, ShapeVariant::Square] {
            for width in [0.0, 12.5, 80.0, 150.0] {
                let paths = compute_paths(&metrics(), variant, Some(width));
                let left_inner = paths.left.bounding_box().x1;
                let right_inner = last_point(&paths.right).x;
                assert!(left_inner <= 30.0 - 2.0 + 1e-3, "{:?} left {}", variant, left_inner);
                assert!((right_inner - (30.0 + width)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_zero_label_width() {
        let with_none = compute_paths(&metrics(), ShapeVariant::Circular, None);
        let with_zero = compute_paths(&metrics(), ShapeVariant::Circular, Some(0.0));
        assert_eq!(with_none, with_zero);
        assert!((last_point(&with_zero.right).x - 30.0).abs() < EPS);
    }

    #[test]
    fn test_negative_label_width_clamped() {
        let paths = compute_paths(&metrics(), ShapeVariant::Square, Some(-40.0));
        assert!((last_point(&paths.right).x - 30.0).abs() < EPS);
    }

    #[test]
    fn test_square_brackets() {
        let paths = compute_paths(&metrics(), ShapeVariant::Square, Some(80.0));
        let right: Vec<PathEl> = paths.right.elements().to_vec();
        assert_eq!(
            right,
            vec![
                PathEl::MoveTo(Point::new(272.0, 68.0)),
                PathEl::LineTo(Point::new(298.0, 68.0)),
                PathEl::LineTo(Point::new(298.0, 14.0)),
                PathEl::LineTo(Point::new(110.0, 14.0)),
            ]
        );
        let left: Vec<PathEl> = paths.left.elements().to_vec();
        assert_eq!(
            left,
            vec![
                PathEl::MoveTo(Point::new(28.0, 68.0)),
                PathEl::LineTo(Point::new(0.0, 68.0)),
                PathEl::LineTo(Point::new(0.0, 14.0)),
                PathEl::LineTo(Point::new(28.0, 14.0)),
            ]
        );
    }

    #[test]
    fn test_bounds_origin_respected() {
        let moved = BoxMetrics::new(Rect::new(100.0, 50.0, 400.0, 120.0), 4.0);
        let paths = compute_paths(&moved, ShapeVariant::Circular, Some(80.0));
        let end = last_point(&paths.right);
        assert!((end.x - 210.0).abs() < EPS);
        assert!((end.y - 64.0).abs() < EPS);
    }

    #[test]
    fn test_deterministic() {
        for variant in [ShapeVariant::Circular, ShapeVariant::Square] {
            let a = compute_paths(&metrics(), variant, Some(77.25));
            let b = compute_paths(&metrics(), variant, Some(77.25));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_degenerate_bounds_produce_empty_paths() {
        let zero = BoxMetrics::new(Rect::ZERO, 4.0);
        assert!(compute_paths(&zero, ShapeVariant::Circular, Some(80.0)).is_empty());
        let flat = BoxMetrics::new(Rect::new(0.0, 0.0, 300.0, 0.0), 4.0);
        assert!(compute_paths(&flat, ShapeVariant::Square, None).is_empty());
    }

    #[test]
    fn test_short_bounds_clamp_radius() {
        // Height too small for the insets: the arc collapses onto its center
        let short = BoxMetrics::new(Rect::new(0.0, 0.0, 300.0, 8.0), 4.0);
        let paths = compute_paths(&short, ShapeVariant::Circular, Some(10.0));
        let start = first_point(&paths.right);
        assert!((start.y - 10.0).abs() < EPS);
        assert!(paths.right.bounding_box().height() < EPS);
    }

    #[test]
    fn test_path_length() {
        let paths = compute_paths(&metrics(), ShapeVariant::Square, Some(80.0));
        // 26 + 54 + 188
        assert!((path_length(&paths.right) - 268.0).abs() < 1e-3);
    }

    #[test]
    fn test_trim_path() {
        let paths = compute_paths(&metrics(), ShapeVariant::Square, Some(80.0));
        assert!(trim_path(&paths.right, 0.0).elements().is_empty());
        assert_eq!(trim_path(&paths.right, 1.0), paths.right);

        let half = trim_path(&paths.right, 0.5);
        assert!((path_length(&half) - 134.0).abs() < 1e-3);
        // 134 = 26 + 54 + 54 along the top edge
        let end = last_point(&half);
        assert!((end.x - 244.0).abs() < 1e-3);
        assert!((end.y - 14.0).abs() < 1e-3);
    }

    #[test]
    fn test_trim_arc() {
        let paths = compute_paths(&metrics(), ShapeVariant::Circular, Some(80.0));
        let total = path_length(&paths.left);
        let part = trim_path(&paths.left, 0.25);
        assert!((path_length(&part) - total * 0.25).abs() < 1e-2);
        assert!(trim_path(&paths.left, f64::NAN).elements().is_empty());
    }
}
