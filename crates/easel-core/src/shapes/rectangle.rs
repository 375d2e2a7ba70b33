//! Rectangle shape.

use super::Rgba;
use kurbo::Point;

/// A solid, optionally rotated rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Display name.
    pub name: String,
    /// Top-left corner position (also the rotation pivot).
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Rotation angle in radians (around the top-left corner).
    pub rotation: f64,
    /// Fill color.
    pub color: Rgba,
}

impl Rectangle {
    /// Where "Add Rectangle" places new rectangles.
    pub const DEFAULT_POSITION: Point = Point::new(100.0, 100.0);
    pub const DEFAULT_WIDTH: f64 = 100.0;
    pub const DEFAULT_HEIGHT: f64 = 100.0;

    /// Create a new black, unrotated rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            name: "Rectangle".to_string(),
            position,
            width,
            height,
            rotation: 0.0,
            color: Rgba::BLACK,
        }
    }

    /// Set the rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_POSITION,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
        )
    }
}
