//! egui integration for the animated outline text field.
//!
//! - **Widget**: [`OutlineFieldEdit`] hosts an `egui::TextEdit` inside an [`OutlineField`]
//! - **Paint**: [`paint_scene`] draws a sampled [`FieldScene`] with an egui painter
//! - **Measure**: [`PainterMeasure`] measures label text with egui's fonts
//!
//! [`OutlineField`]: outlinefield_core::OutlineField
//! [`FieldScene`]: outlinefield_core::FieldScene

pub mod convert;
pub mod field;
pub mod measure;

pub use convert::{flatten, font_id, to_color32, to_egui_rect, to_kurbo_rect, to_pos2};
pub use field::{OutlineFieldEdit, OutlineFieldResponse, paint_scene};
pub use measure::PainterMeasure;

/// Flattening tolerance for outline paths, in points.
pub const FLATTEN_TOLERANCE: f64 = 0.25;
