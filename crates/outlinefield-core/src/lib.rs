//! OutlineField Core Library
//!
//! Platform-agnostic model for a text field whose border is an animated outline
//! with a floating label and an inline error message.

pub mod animation;
pub mod config;
pub mod error_label;
pub mod field;
pub mod geometry;
pub mod label;
pub mod metrics;
pub mod style;
pub mod text;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

pub use animation::{StrokeAnimator, TimingCurve, Tween};
pub use config::FieldConfig;
pub use error_label::ErrorPresenter;
pub use field::{
    FieldScene, FocusState, LayerKind, OutlineField, SceneError, SceneLabel, SceneStroke,
    StrokeLayer, StrokeLayers,
};
pub use geometry::{PathPair, ShapeVariant, compute_paths, path_length, trim_path};
pub use label::{LabelPlacement, LabelPositioner};
pub use metrics::BoxMetrics;
pub use style::{FieldStyle, FontSpec, FontWeight, SerializableColor, StyleError, StyleResult};
pub use text::{ApproximateMeasure, TextMeasure};
