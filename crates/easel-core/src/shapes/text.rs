//! Text shape.

use super::Rgba;
use crate::measure::TextMetrics;
use kurbo::{Point, Size};

/// A single line of text drawn from its baseline.
///
/// Width and height are a cached measurement of the rendered glyphs. They
/// can only be written through [`Text::apply_metrics`]; changing the content
/// or font size marks the cache stale until the next measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Display name.
    pub name: String,
    /// Baseline-left origin (also the rotation pivot).
    pub position: Point,
    /// Rotation angle in radians (around the origin).
    pub rotation: f64,
    /// Fill color.
    pub color: Rgba,
    content: String,
    font_size: f64,
    measured: Size,
    stale: bool,
}

impl Text {
    /// Font size used by "Add Text".
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;
    /// Placeholder content used by "Add Text".
    pub const DEFAULT_CONTENT: &'static str = "Edit Here";
    /// Where "Add Text" places new text.
    pub const DEFAULT_POSITION: Point = Point::new(200.0, 200.0);

    /// Create a new text shape. It starts unmeasured.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            name: "Text".to_string(),
            position,
            rotation: 0.0,
            color: Rgba::BLACK,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            measured: Size::ZERO,
            stale: true,
        }
    }

    /// Create a new text shape with font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.set_font_size(size);
        self
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content and invalidate the measurement.
    pub fn set_content(&mut self, content: String) {
        if content != self.content {
            self.content = content;
            self.stale = true;
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Change the font size and invalidate the measurement.
    pub fn set_font_size(&mut self, size: f64) {
        if size != self.font_size {
            self.font_size = size;
            self.stale = true;
        }
    }

    /// CSS font shorthand for the given family, e.g. `24px Arial`.
    pub fn font(&self, family: &str) -> String {
        format!("{}px {}", self.font_size, family)
    }

    /// Size from the most recent measurement.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Whether content or font size changed since the last measurement.
    pub fn needs_measure(&self) -> bool {
        self.stale
    }

    /// Store a fresh measurement.
    pub fn apply_metrics(&mut self, metrics: TextMetrics) {
        self.measured = Size::new(metrics.width.max(0.0), metrics.height.max(0.0));
        self.stale = false;
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Self::DEFAULT_CONTENT.to_string())
    }
}
