//! The field controller: owns the outline layers and labels and wires focus,
//! style and layout events to geometry and animation.
//!
//! The host drives it with three kinds of calls:
//! - bounds/style/placeholder mutations, which only mark the field dirty;
//! - [`OutlineField::layout_if_needed`], once per frame, which recomputes geometry;
//! - focus notifications, which start the reveal and label transitions.
//!
//! Rendering reads a [`FieldScene`] snapshot sampled at the frame time.

use crate::Instant;
use crate::animation::StrokeAnimator;
use crate::config::FieldConfig;
use crate::error_label::ErrorPresenter;
use crate::geometry::{ShapeVariant, compute_paths, trim_path};
use crate::label::LabelPositioner;
use crate::metrics::{BoxMetrics, FOCUS_DURATION, OFFSET, PREFERRED_HEIGHT, TOP_OFFSET, sanitize};
use crate::style::{FieldStyle, FontSpec, SerializableColor};
use crate::text::TextMeasure;
use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;
use std::ops::{Index, IndexMut};

/// Presentation state driven by focus changes on an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Brackets hidden, label centered.
    #[default]
    Idle,
    /// Brackets revealed, label floating.
    Editing,
}

/// Key of one of the three outline layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Bottom,
    Left,
    Right,
}

impl LayerKind {
    /// All layers in draw order.
    pub const ALL: [LayerKind; 3] = [LayerKind::Bottom, LayerKind::Left, LayerKind::Right];

    fn index(self) -> usize {
        match self {
            LayerKind::Bottom => 0,
            LayerKind::Left => 1,
            LayerKind::Right => 2,
        }
    }

    /// Whether focus changes reveal/retract this layer.
    pub fn is_bracket(self) -> bool {
        !matches!(self, LayerKind::Bottom)
    }
}

/// One stroked outline path.
#[derive(Debug, Clone)]
pub struct StrokeLayer {
    path: BezPath,
    color: Color,
    line_width: f64,
    animator: StrokeAnimator,
}

impl StrokeLayer {
    fn new(progress: f64) -> Self {
        Self {
            path: BezPath::new(),
            color: FieldStyle::default().shape(),
            line_width: 0.0,
            animator: StrokeAnimator::new(progress),
        }
    }

    /// Full path from the last layout pass.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Stroke color applied at the last layout pass.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width applied at the last layout pass.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Reveal fraction at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        self.animator.progress(now)
    }

    /// Portion of the path that is drawn at `now`.
    pub fn visible_path(&self, now: Instant) -> BezPath {
        trim_path(&self.path, self.progress(now))
    }

    /// Whether a reveal animation is in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.is_animating(now)
    }
}

/// The three outline layers keyed by [`LayerKind`], exclusively owned by the field.
#[derive(Debug, Clone)]
pub struct StrokeLayers([StrokeLayer; 3]);

impl StrokeLayers {
    fn new() -> Self {
        // The bottom line is always fully drawn; brackets start hidden
        Self(LayerKind::ALL.map(|kind| StrokeLayer::new(if kind.is_bracket() { 0.0 } else { 1.0 })))
    }

    /// Layers with their keys, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerKind, &StrokeLayer)> {
        LayerKind::ALL.into_iter().zip(self.0.iter())
    }

    fn brackets_mut(&mut self) -> impl Iterator<Item = &mut StrokeLayer> {
        LayerKind::ALL
            .into_iter()
            .zip(self.0.iter_mut())
            .filter(|(kind, _)| kind.is_bracket())
            .map(|(_, layer)| layer)
    }
}

impl Index<LayerKind> for StrokeLayers {
    type Output = StrokeLayer;

    fn index(&self, kind: LayerKind) -> &StrokeLayer {
        &self.0[kind.index()]
    }
}

impl IndexMut<LayerKind> for StrokeLayers {
    fn index_mut(&mut self, kind: LayerKind) -> &mut StrokeLayer {
        &mut self.0[kind.index()]
    }
}

/// A stroke to draw this frame.
#[derive(Debug, Clone)]
pub struct SceneStroke {
    pub kind: LayerKind,
    /// Visible (trimmed) path.
    pub path: BezPath,
    pub color: Color,
    pub width: f64,
}

/// The floating label to draw this frame.
#[derive(Debug, Clone)]
pub struct SceneLabel {
    pub text: String,
    /// Top-left corner.
    pub origin: Point,
    pub font: FontSpec,
    pub color: Color,
}

/// The error label to draw this frame.
#[derive(Debug, Clone)]
pub struct SceneError {
    pub text: String,
    /// Unshaken frame below the field.
    pub frame: Rect,
    /// Horizontal shake translation.
    pub shake_offset: f64,
    pub font: FontSpec,
    pub color: Color,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct FieldScene {
    pub strokes: Vec<SceneStroke>,
    pub label: Option<SceneLabel>,
    pub error: Option<SceneError>,
    /// Where the host draws entered text.
    pub text_rect: Rect,
    pub text_color: Color,
    pub text_font: FontSpec,
    /// Whether another frame should be scheduled.
    pub animating: bool,
}

/// Text field with an animated outline, a floating label and an error line.
#[derive(Debug, Clone)]
pub struct OutlineField {
    variant: ShapeVariant,
    style: FieldStyle,
    placeholder: Option<String>,
    /// Upper-cased placeholder shown in the floating label.
    label_text: Option<String>,
    text: String,
    has_focus: bool,
    focus_state: FocusState,
    bounds: Rect,
    label_size: Size,
    label_color: Color,
    layers: StrokeLayers,
    label: LabelPositioner,
    error: ErrorPresenter,
    dirty: bool,
}

impl Default for OutlineField {
    fn default() -> Self {
        Self::new(ShapeVariant::default())
    }
}

impl OutlineField {
    /// Create a field with the given bracket variant and default style.
    pub fn new(variant: ShapeVariant) -> Self {
        let style = FieldStyle::default();
        Self {
            variant,
            label_color: style.shape(),
            style,
            placeholder: None,
            label_text: None,
            text: String::new(),
            has_focus: false,
            focus_state: FocusState::Idle,
            bounds: Rect::ZERO,
            label_size: Size::ZERO,
            layers: StrokeLayers::new(),
            label: LabelPositioner::new(),
            error: ErrorPresenter::new(),
            dirty: true,
        }
    }

    /// Create a field from a loaded configuration.
    pub fn from_config(config: &FieldConfig) -> Self {
        let mut field = Self::new(config.shape);
        field.style = config.style.clone();
        field.set_placeholder(config.placeholder.as_deref());
        field
    }

    /// Bracket variant; fixed at construction.
    pub fn variant(&self) -> ShapeVariant {
        self.variant
    }

    // --- Style -------------------------------------------------------------

    /// Current style.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
        self.mark_dirty();
    }

    /// Set the outline color.
    pub fn set_shape_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.shape_color = color.into();
        self.mark_dirty();
    }

    /// Set the tint (entered text and focused label) color.
    pub fn set_tint_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.tint_color = color.into();
        self.mark_dirty();
    }

    /// Set the font of the entered text.
    pub fn set_text_font(&mut self, font: FontSpec) {
        self.style.text_font = font;
        self.mark_dirty();
    }

    /// Set the floating label font. Affects bracket geometry.
    pub fn set_placeholder_font(&mut self, font: FontSpec) {
        self.style.placeholder_font = font;
        self.mark_dirty();
    }

    /// Set the error label font.
    pub fn set_error_font(&mut self, font: FontSpec) {
        self.style.error_font = font;
        self.mark_dirty();
    }

    /// Set the error label color.
    pub fn set_error_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.error_color = color.into();
        self.mark_dirty();
    }

    /// Set the outline stroke width. Negative or non-finite widths are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if !width.is_finite() || width < 0.0 {
            log::warn!("Ignoring invalid line width {}", width);
            return;
        }
        self.style.line_width = width;
        self.mark_dirty();
    }

    // --- Content -----------------------------------------------------------

    /// Placeholder as given by the host.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Set the placeholder; the floating label shows it upper-cased.
    pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.placeholder = placeholder.map(str::to_string);
        self.label_text = placeholder.map(str::to_uppercase);
        self.mark_dirty();
    }

    /// Text shown in the floating label.
    pub fn label_text(&self) -> Option<&str> {
        self.label_text.as_deref()
    }

    /// Current entered text, as last reported by the host.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record the host's current text. Only consulted by the focus guard.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    // --- Layout ------------------------------------------------------------

    /// Current bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update bounds; marks the field dirty when they change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.mark_dirty();
        }
    }

    /// Schedule a layout pass.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a layout pass is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run the layout pass if anything changed since the last one.
    ///
    /// Several mutations within one frame collapse into a single pass.
    /// Returns true if a pass ran.
    pub fn layout_if_needed<M: TextMeasure + ?Sized>(&mut self, measure: &M, now: Instant) -> bool {
        if !self.dirty {
            return false;
        }
        self.layout(measure, now);
        true
    }

    /// Recompute geometry from the current bounds and style, then reapply style.
    pub fn layout<M: TextMeasure + ?Sized>(&mut self, measure: &M, now: Instant) {
        let metrics = BoxMetrics::new(self.bounds, self.style.line_width);
        self.label_size = match &self.label_text {
            Some(text) => measure.measure(text, &self.style.placeholder_font),
            None => Size::ZERO,
        };
        let label_width = self.label_text.as_ref().map(|_| self.label_size.width);
        let paths = compute_paths(&metrics, self.variant, label_width);
        log::trace!(
            "Layout {:?} bounds={:?} label_width={:?}",
            self.variant,
            self.bounds,
            label_width
        );

        self.layers[LayerKind::Bottom].path = paths.bottom;
        self.layers[LayerKind::Left].path = paths.left;
        self.layers[LayerKind::Right].path = paths.right;

        // Idle brackets start hidden; a running or settled reveal is kept
        if self.focus_state == FocusState::Idle {
            for layer in self.layers.brackets_mut() {
                if !layer.animator.is_animating(now) {
                    layer.animator.set_progress(0.0);
                }
            }
        }

        self.apply_style();
        self.dirty = false;
    }

    fn apply_style(&mut self) {
        let shape = self.style.shape();
        let line_width = sanitize(self.style.line_width);
        for kind in LayerKind::ALL {
            let layer = &mut self.layers[kind];
            layer.color = shape;
            layer.line_width = line_width;
        }
        self.label_color = if self.has_focus { self.style.tint() } else { shape };
    }

    /// Measured size of the floating label at the last layout pass.
    pub fn label_size(&self) -> Size {
        self.label_size
    }

    /// Preferred size: fixed height, width from the host's natural width.
    pub fn intrinsic_size(&self, natural_width: f64) -> Size {
        Size::new(natural_width.max(0.0), PREFERRED_HEIGHT)
    }

    /// Rect where the host draws entered text.
    pub fn text_rect(&self, bounds: Rect) -> Rect {
        adjusted_text_bounds(bounds)
    }

    /// Rect where the host places the caret while editing.
    pub fn editing_rect(&self, bounds: Rect) -> Rect {
        adjusted_text_bounds(bounds)
    }

    /// The host's own placeholder is never drawn; the floating label replaces it.
    pub fn placeholder_rect(&self, _bounds: Rect) -> Rect {
        Rect::ZERO
    }

    // --- Focus -------------------------------------------------------------

    /// Whether the host reports focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Presentation state.
    pub fn focus_state(&self) -> FocusState {
        self.focus_state
    }

    /// Host notification: editing began.
    ///
    /// Reveals the brackets and floats the label, but only when the text is empty;
    /// a field with text is assumed to be presented as editing already.
    /// Returns true if a transition started.
    pub fn focus_began(&mut self, now: Instant) -> bool {
        self.has_focus = true;
        self.mark_dirty();
        if !self.text.is_empty() {
            log::debug!("Focus began with text present; presentation unchanged");
            return false;
        }
        self.transition(FocusState::Editing, now);
        true
    }

    /// Host notification: editing ended.
    ///
    /// Retracts the brackets and centers the label when the text is empty.
    /// Returns true if a transition started.
    pub fn focus_ended(&mut self, now: Instant) -> bool {
        self.has_focus = false;
        self.mark_dirty();
        if !self.text.is_empty() {
            log::debug!("Focus ended with text present; presentation unchanged");
            return false;
        }
        self.transition(FocusState::Idle, now);
        true
    }

    fn transition(&mut self, state: FocusState, now: Instant) {
        let editing = state == FocusState::Editing;
        let target = if editing { 1.0 } else { 0.0 };
        log::debug!("Focus state {:?} -> {:?}", self.focus_state, state);

        self.focus_state = state;
        for layer in self.layers.brackets_mut() {
            layer.animator.animate_to(target, FOCUS_DURATION, now);
        }
        self.label.set_floating(editing, FOCUS_DURATION, now);
    }

    /// Put the field in the editing (revealed, floating) or idle presentation without
    /// animating. Hosts call this when pre-populating text, since the focus guard never
    /// transitions a field that already has text.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.focus_state = if expanded { FocusState::Editing } else { FocusState::Idle };
        let progress = if expanded { 1.0 } else { 0.0 };
        for layer in self.layers.brackets_mut() {
            layer.animator.set_progress(progress);
        }
        self.label.snap(expanded);
        self.mark_dirty();
    }

    // --- Error -------------------------------------------------------------

    /// Show an error message under the field with a shake.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.error.show_error(message, now);
        self.mark_dirty();
    }

    /// Hide the error message.
    pub fn hide_error(&mut self) {
        self.error.hide_error();
        self.mark_dirty();
    }

    /// Error presenter state.
    pub fn error(&self) -> &ErrorPresenter {
        &self.error
    }

    // --- Frame -------------------------------------------------------------

    /// Outline layers.
    pub fn layers(&self) -> &StrokeLayers {
        &self.layers
    }

    /// Label positioner state.
    pub fn label(&self) -> &LabelPositioner {
        &self.label
    }

    /// Drop finished animations. Returns true while anything still moves.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for layer in self.layers.brackets_mut() {
            animating |= layer.animator.tick(now);
        }
        animating |= self.label.tick(now);
        animating || self.error.is_shaking(now)
    }

    /// Whether anything moves at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.layers.iter().any(|(_, layer)| layer.is_animating(now))
            || self.label.is_animating(now)
            || self.error.is_shaking(now)
    }

    /// Sample everything a renderer needs at `now`.
    pub fn scene(&self, now: Instant) -> FieldScene {
        let strokes = self
            .layers
            .iter()
            .map(|(kind, layer)| SceneStroke {
                kind,
                path: layer.visible_path(now),
                color: layer.color,
                width: layer.line_width,
            })
            .filter(|stroke| !stroke.path.elements().is_empty())
            .collect();

        let label = self.label_text.as_ref().map(|text| SceneLabel {
            text: text.clone(),
            origin: self.label.origin(self.bounds, self.label_size, now),
            font: self.style.placeholder_font,
            color: self.label_color,
        });

        let error = self.error.message().map(|message| SceneError {
            text: message.to_string(),
            frame: self.error.frame(self.bounds),
            shake_offset: self.error.shake_offset(now),
            font: self.style.error_font,
            color: self.style.error(),
        });

        FieldScene {
            strokes,
            label,
            error,
            text_rect: self.text_rect(self.bounds),
            text_color: self.style.tint(),
            text_font: self.style.text_font,
            animating: self.is_animating(now),
        }
    }
}

fn adjusted_text_bounds(bounds: Rect) -> Rect {
    let x0 = bounds.x0 + OFFSET;
    let y0 = bounds.y0 + TOP_OFFSET * 2.0;
    let width = (bounds.width() - OFFSET * 2.0).max(0.0);
    let height = (bounds.height() - TOP_OFFSET * 2.0).max(0.0);
    Rect::new(x0, y0, x0 + width, y0 + height)
}
