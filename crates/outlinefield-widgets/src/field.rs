//! The outline field widget.

use egui::{Align2, Id, Key, Painter, Rect, Response, Sense, Shape, Stroke, TextEdit, Ui, UiBuilder, vec2};
use outlinefield_core::{FieldScene, Instant, OutlineField};

use crate::FLATTEN_TOLERANCE;
use crate::convert::{flatten, font_id, to_color32, to_egui_rect, to_kurbo_rect, to_pos2};
use crate::measure::PainterMeasure;

/// Response from showing an outline field.
pub struct OutlineFieldResponse {
    /// The underlying text edit response.
    pub response: Response,
    /// Space taken in the parent, including the area reserved for the error.
    pub rect: Rect,
    /// Whether editing ended with Enter this frame.
    pub submitted: bool,
}

/// An animated outline text field.
///
/// The [`OutlineField`] model lives with the caller between frames; this widget
/// forwards bounds, text and focus changes to it and paints the result.
pub struct OutlineFieldEdit<'a> {
    field: &'a mut OutlineField,
    text: &'a mut String,
    width: Option<f32>,
    id: Option<Id>,
}

impl<'a> OutlineFieldEdit<'a> {
    /// Create a widget editing `text` with the presentation in `field`.
    pub fn new(field: &'a mut OutlineField, text: &'a mut String) -> Self {
        Self {
            field,
            text,
            width: None,
            id: None,
        }
    }

    /// Set the field width (defaults to the available width).
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Use an explicit id for the text edit, e.g. to request focus on it.
    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Show the field.
    pub fn show(self, ui: &mut Ui) -> OutlineFieldResponse {
        let now = Instant::now();
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let size = self.field.intrinsic_size(width as f64);
        let error_height = self.field.error().reserved_height();

        let (rect, _) = ui.allocate_exact_size(
            vec2(size.width as f32, (size.height + error_height) as f32),
            Sense::hover(),
        );
        let mut bounds = to_kurbo_rect(rect);
        bounds.y1 = bounds.y0 + size.height;

        let painter = ui.painter().clone();
        let measure = PainterMeasure::new(&painter);
        self.field.set_bounds(bounds);
        self.field.set_text(self.text.as_str());
        self.field.layout_if_needed(&measure, now);

        let text_rect = to_egui_rect(self.field.editing_rect(bounds));
        let style = self.field.style();
        let mut edit = TextEdit::singleline(&mut *self.text)
            .frame(false)
            .font(font_id(&style.text_font))
            .text_color(to_color32(style.tint()))
            .desired_width(text_rect.width());
        if let Some(id) = self.id {
            edit = edit.id(id);
        }
        // Child ui so the parent cursor stays below the error area
        let mut child = ui.new_child(UiBuilder::new().max_rect(text_rect));
        let response = child.add_sized(text_rect.size(), edit);

        if response.gained_focus() {
            self.field.focus_began(now);
        }
        if response.changed() {
            self.field.set_text(self.text.as_str());
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if response.lost_focus() {
            self.field.focus_ended(now);
        }

        // Focus changes recolor the label
        self.field.layout_if_needed(&measure, now);
        self.field.tick(now);
        let scene = self.field.scene(now);

        if ui.is_rect_visible(rect) {
            paint_scene(&painter, &scene);
        }
        if scene.animating {
            ui.ctx().request_repaint();
        }

        OutlineFieldResponse {
            response,
            rect,
            submitted,
        }
    }
}

/// Paint a sampled field scene.
pub fn paint_scene(painter: &Painter, scene: &FieldScene) {
    for stroke in &scene.strokes {
        let egui_stroke = Stroke::new(stroke.width as f32, to_color32(stroke.color));
        for line in flatten(&stroke.path, FLATTEN_TOLERANCE) {
            painter.add(Shape::line(line, egui_stroke));
        }
    }

    if let Some(label) = &scene.label {
        painter.text(
            to_pos2(label.origin),
            Align2::LEFT_TOP,
            &label.text,
            font_id(&label.font),
            to_color32(label.color),
        );
    }

    if let Some(error) = &scene.error {
        let anchor = kurbo::Point::new(error.frame.x0 + error.shake_offset, error.frame.center().y);
        painter.text(
            to_pos2(anchor),
            Align2::LEFT_CENTER,
            &error.text,
            font_id(&error.font),
            to_color32(error.color),
        );
    }
}
