//! Easel Core Library
//!
//! Platform-agnostic scene model, hit testing, drag handling and editor
//! state for the Easel canvas editor.

pub mod drag;
pub mod edit;
pub mod editor;
pub mod error;
pub mod hit;
pub mod input;
pub mod measure;
pub mod scene;
pub mod shapes;

pub use drag::{DragController, DragState};
pub use edit::{Field, ShapeEdit};
pub use editor::{Editor, EditorConfig};
pub use error::{CanvasError, Result};
pub use hit::hit_test;
pub use input::{CanvasOffset, PointerEvent};
pub use measure::{FixedWidthMeasurer, TextMeasurer, TextMetrics};
pub use scene::{Scene, ZDirection};
pub use shapes::{Rectangle, Rgba, Shape, ShapeKind, Text};
