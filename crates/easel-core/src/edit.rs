//! Single-field edits applied to a shape from the property panel.

use crate::error::{CanvasError, Result};
use crate::shapes::{Rgba, Shape, ShapeKind};
use std::fmt;

/// An editable shape attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Color,
    Content,
    FontSize,
    Width,
    Height,
    Rotation,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Color => "color",
            Field::Content => "content",
            Field::FontSize => "font_size",
            Field::Width => "width",
            Field::Height => "height",
            Field::Rotation => "rotation",
        }
    }

    /// Whether the field exists on shapes of `kind`.
    ///
    /// Text width and height are derived from measurement and not editable.
    pub fn applies_to(self, kind: ShapeKind) -> bool {
        match self {
            Field::Color | Field::Rotation => true,
            Field::Content | Field::FontSize => kind == ShapeKind::Text,
            Field::Width | Field::Height => kind == ShapeKind::Rectangle,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEdit {
    Color(Rgba),
    Content(String),
    FontSize(f64),
    Width(f64),
    Height(f64),
    /// Rotation in radians.
    Rotation(f64),
}

impl ShapeEdit {
    /// Rotation edit from the panel's 0-360 degree slider.
    pub fn rotation_degrees(degrees: f64) -> Self {
        ShapeEdit::Rotation(degrees.to_radians())
    }

    pub fn field(&self) -> Field {
        match self {
            ShapeEdit::Color(_) => Field::Color,
            ShapeEdit::Content(_) => Field::Content,
            ShapeEdit::FontSize(_) => Field::FontSize,
            ShapeEdit::Width(_) => Field::Width,
            ShapeEdit::Height(_) => Field::Height,
            ShapeEdit::Rotation(_) => Field::Rotation,
        }
    }

    /// Check the edit against `kind` without touching any shape.
    pub fn validate(&self, kind: ShapeKind) -> Result<()> {
        let field = self.field();
        if !field.applies_to(kind) {
            return Err(CanvasError::FieldNotApplicable { field, kind });
        }
        let bad = |value: f64| CanvasError::InvalidValue { field, value };
        match *self {
            ShapeEdit::FontSize(size) if !(size.is_finite() && size > 0.0) => Err(bad(size)),
            ShapeEdit::Width(v) | ShapeEdit::Height(v) if !(v.is_finite() && v >= 0.0) => {
                Err(bad(v))
            }
            ShapeEdit::Rotation(angle) if !angle.is_finite() => Err(bad(angle)),
            _ => Ok(()),
        }
    }

    /// Validate, then write the value into `shape`.
    pub fn apply(self, shape: &mut Shape) -> Result<()> {
        self.validate(shape.kind())?;
        match (self, shape) {
            (ShapeEdit::Color(color), shape) => shape.set_color(color),
            (ShapeEdit::Rotation(angle), shape) => shape.set_rotation(angle),
            (ShapeEdit::Content(content), Shape::Text(text)) => text.set_content(content),
            (ShapeEdit::FontSize(size), Shape::Text(text)) => text.set_font_size(size),
            (ShapeEdit::Width(width), Shape::Rectangle(rect)) => rect.width = width,
            (ShapeEdit::Height(height), Shape::Rectangle(rect)) => rect.height = height,
            (edit, shape) => {
                // validate() already rejected these
                return Err(CanvasError::FieldNotApplicable {
                    field: edit.field(),
                    kind: shape.kind(),
                });
            }
        }
        Ok(())
    }
}
