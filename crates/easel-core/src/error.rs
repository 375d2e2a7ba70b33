//! Error type shared by scene and editor operations.

use crate::edit::Field;
use crate::shapes::ShapeKind;
use thiserror::Error;

/// Errors returned by scene mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// The index is `None` or past the end of the scene.
    #[error("invalid selection {index:?} (scene holds {len} shapes)")]
    InvalidSelection { index: Option<usize>, len: usize },
    /// The edited field does not exist on this kind of shape.
    #[error("field `{field}` does not apply to {kind} shapes")]
    FieldNotApplicable { field: Field, kind: ShapeKind },
    /// The value is out of the field's domain.
    #[error("invalid value {value} for field `{field}`")]
    InvalidValue { field: Field, value: f64 },
    /// The color string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
