//! Conversions between the kurbo/peniko model and egui types.

use egui::{Color32, FontId, Pos2, Rect};
use kurbo::{BezPath, PathEl, Point};
use outlinefield_core::FontSpec;
use peniko::Color;

/// kurbo point to egui position.
pub fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// kurbo rect to egui rect.
pub fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// egui rect to kurbo rect.
pub fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

/// peniko color to egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// egui font for a font spec.
///
/// egui's default fonts have a single proportional face, so weight is not mapped.
pub fn font_id(font: &FontSpec) -> FontId {
    FontId::proportional(font.size as f32)
}

/// Flatten a path into polylines, one per subpath.
pub fn flatten(path: &BezPath, tolerance: f64) -> Vec<Vec<Pos2>> {
    let mut polylines: Vec<Vec<Pos2>> = Vec::new();
    let mut subpath_start = None;
    kurbo::flatten(path, tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            subpath_start = Some(p);
            polylines.push(vec![to_pos2(p)]);
        }
        PathEl::LineTo(p) => {
            if let Some(line) = polylines.last_mut() {
                line.push(to_pos2(p));
            }
        }
        PathEl::ClosePath => {
            if let (Some(line), Some(start)) = (polylines.last_mut(), subpath_start) {
                line.push(to_pos2(start));
            }
        }
        // flatten only emits lines
        _ => {}
    });
    polylines.retain(|line| line.len() >= 2);
    polylines
}
