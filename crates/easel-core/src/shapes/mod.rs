//! Shape definitions for the canvas.

mod rectangle;
mod text;

pub use rectangle::Rectangle;
pub use text::Text;

use crate::edit::ShapeEdit;
use crate::error::{CanvasError, Result};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;
use std::fmt;
use std::str::FromStr;

/// RGBA8 color used for shape fills and the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a CSS color: `#rgb`, `#rrggbb`, `#rrggbbaa` or one of the
    /// named colors the editor hands out.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || CanvasError::InvalidColor(input.to_string());

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "red" => return Ok(Self::RED),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self::rgb(r, g, b))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbb`, the value an `<input type="color">` expects.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Discriminant of [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Text,
}

impl ShapeKind {
    /// Display name used for labels.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Text => "Text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("rectangle"),
            ShapeKind::Text => f.write_str("text"),
        }
    }
}

/// Rotate a vector by `angle` radians (canvas convention, y down).
pub fn rotate_vec(v: Vec2, angle: f64) -> Vec2 {
    (Affine::rotate(angle) * v.to_point()).to_vec2()
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Text(Text),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    /// Label shown in the status line.
    pub fn name(&self) -> &str {
        match self {
            Shape::Rectangle(r) => &r.name,
            Shape::Text(t) => &t.name,
        }
    }

    /// Origin of the local frame: top-left for rectangles, baseline-left for text.
    pub fn origin(&self) -> Point {
        match self {
            Shape::Rectangle(r) => r.position,
            Shape::Text(t) => t.position,
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Shape::Rectangle(r) => r.position = origin,
            Shape::Text(t) => t.position = origin,
        }
    }

    /// Width and height. For text this is the last measurement.
    pub fn size(&self) -> Size {
        match self {
            Shape::Rectangle(r) => Size::new(r.width, r.height),
            Shape::Text(t) => t.measured_size(),
        }
    }

    /// Rotation angle in radians about the origin.
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(r) => r.rotation,
            Shape::Text(t) => t.rotation,
        }
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        match self {
            Shape::Rectangle(r) => r.rotation = rotation,
            Shape::Text(t) => t.rotation = rotation,
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Shape::Rectangle(r) => r.color,
            Shape::Text(t) => t.color,
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Shape::Rectangle(r) => r.color = color,
            Shape::Text(t) => t.color = color,
        }
    }

    /// Unrotated bounding box relative to the origin.
    ///
    /// Text boxes extend upward from the baseline.
    pub fn local_bounds(&self) -> Rect {
        let size = self.size();
        match self {
            Shape::Rectangle(_) => Rect::new(0.0, 0.0, size.width, size.height),
            Shape::Text(_) => Rect::new(0.0, -size.height, size.width, 0.0),
        }
    }

    /// Check every numeric attribute against the same domains as panel edits.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind();
        ShapeEdit::Rotation(self.rotation()).validate(kind)?;
        match self {
            Shape::Rectangle(r) => {
                ShapeEdit::Width(r.width).validate(kind)?;
                ShapeEdit::Height(r.height).validate(kind)
            }
            Shape::Text(t) => ShapeEdit::FontSize(t.font_size()).validate(kind),
        }
    }

    /// Express a canvas point in the local unrotated frame.
    pub fn to_local(&self, point: Point) -> Point {
        rotate_vec(point - self.origin(), -self.rotation()).to_point()
    }

    /// Map a local offset back to canvas coordinates.
    pub fn to_world(&self, offset: Vec2) -> Point {
        self.origin() + rotate_vec(offset, self.rotation())
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(Rgba::parse("#ffffff").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::RED);
        assert_eq!(
            Rgba::parse("#11223380").unwrap(),
            Rgba::new(0x11, 0x22, 0x33, 0x80)
        );
        assert_eq!(Rgba::parse("black").unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Rgba::parse("#12"),
            Err(CanvasError::InvalidColor(_))
        ));
        assert!(Rgba::parse("ffffff").is_err());
        assert!(Rgba::parse("#gggggg").is_err());
        assert!(Rgba::parse("#ééé").is_err());
        assert!(matches!(
            Rgba::parse("#+f+f+f"),
            Err(CanvasError::InvalidColor(_))
        ));
        assert!(Rgba::parse("#+ff").is_err());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgba::rgb(18, 52, 86).to_hex(), "#123456");
        assert_eq!(Rgba::new(0, 0, 0, 0x40).to_string(), "#00000040");
    }

    #[test]
    fn test_peniko_round_trip() {
        let color = Rgba::rgb(10, 20, 30);
        let back: Rgba = Color::from(color).into();
        assert_eq!(back, color);
    }

    #[test]
    fn test_text_bounds_extend_upward() {
        let mut text = Text::new(Point::new(200.0, 200.0), "Hi".to_string());
        text.apply_metrics(crate::measure::TextMetrics::new(30.0, 18.0));
        let shape = Shape::Text(text);
        let bounds = shape.local_bounds() + shape.origin().to_vec2();
        assert!(approx(bounds.x0, 200.0));
        assert!(approx(bounds.x1, 230.0));
        assert!(approx(bounds.y0, 182.0));
        assert!(approx(bounds.y1, 200.0));
    }

    #[test]
    fn test_validate_rejects_bad_attributes() {
        assert!(Shape::Rectangle(Rectangle::default()).validate().is_ok());
        assert!(Shape::Text(Text::default()).validate().is_ok());

        let narrow = Shape::Rectangle(Rectangle::new(Point::ZERO, -1.0, 10.0));
        assert!(matches!(
            narrow.validate(),
            Err(CanvasError::InvalidValue { field: crate::edit::Field::Width, .. })
        ));
        let tiny = Shape::Text(Text::default().with_font_size(0.0));
        assert!(tiny.validate().is_err());
        let spun = Shape::Rectangle(Rectangle::default().with_rotation(f64::INFINITY));
        assert!(spun.validate().is_err());
    }

    #[test]
    fn test_local_world_inverse() {
        let mut shape = Shape::Rectangle(Rectangle::new(Point::new(50.0, 80.0), 40.0, 20.0));
        shape.set_rotation(0.7);
        let p = Point::new(63.0, 91.5);
        let local = shape.to_local(p);
        let back = shape.to_world(local.to_vec2());
        assert!(approx(back.x, p.x));
        assert!(approx(back.y, p.y));
    }

    #[test]
    fn test_quarter_turn_maps_x_to_y() {
        let mut shape = Shape::Rectangle(Rectangle::new(Point::ZERO, 10.0, 10.0));
        shape.set_rotation(FRAC_PI_2);
        let world = shape.to_world(Vec2::new(10.0, 0.0));
        assert!(approx(world.x, 0.0));
        assert!(approx(world.y, 10.0));
    }
}
