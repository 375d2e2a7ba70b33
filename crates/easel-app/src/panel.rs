//! State read by the property panel.
//!
//! The panel itself lives in the host page; it pulls a [`PanelState`] as
//! JSON after every handled event and writes edits back through the editor.

use easel_core::{Editor, Shape, TextMeasurer};
use serde::Serialize;

/// Inclusive bounds of a panel slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub const FONT_SIZE: Self = Self::new(5.0, 350.0);
    pub const HEIGHT: Self = Self::new(1.0, 650.0);
    pub const WIDTH: Self = Self::new(1.0, 1000.0);
    /// Degrees.
    pub const ROTATION: Self = Self::new(0.0, 360.0);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Bounds for every slider in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelRanges {
    pub font_size: SliderRange,
    pub width: SliderRange,
    pub height: SliderRange,
    pub rotation: SliderRange,
}

impl Default for PanelRanges {
    fn default() -> Self {
        Self {
            font_size: SliderRange::FONT_SIZE,
            width: SliderRange::WIDTH,
            height: SliderRange::HEIGHT,
            rotation: SliderRange::ROTATION,
        }
    }
}

/// Properties of the selected shape, shown in the panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectedShapeProps {
    pub has_selection: bool,
    pub name: String,
    /// `"rectangle"` or `"text"`.
    pub kind: String,
    pub is_text: bool,
    pub is_rectangle: bool,
    /// `#rrggbb`
    pub color: String,
    /// Text content (text shapes only).
    pub text: Option<String>,
    /// Font size (text shapes only).
    pub font_size: Option<f64>,
    /// Measured width for text.
    pub width: f64,
    pub height: f64,
    /// Rotation normalized to 0-360.
    pub rotation_degrees: f64,
}

impl SelectedShapeProps {
    pub fn from_shape(shape: &Shape) -> Self {
        let size = shape.size();
        let (text, font_size) = match shape.as_text() {
            Some(text) => (Some(text.content().to_string()), Some(text.font_size())),
            None => (None, None),
        };
        Self {
            has_selection: true,
            name: shape.name().to_string(),
            kind: shape.kind().to_string(),
            is_text: text.is_some(),
            is_rectangle: shape.as_rectangle().is_some(),
            color: shape.color().to_hex(),
            text,
            font_size,
            width: size.width,
            height: size.height,
            rotation_degrees: shape.rotation().to_degrees().rem_euclid(360.0),
        }
    }
}

/// Everything the panel needs after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelState {
    pub status: String,
    pub background: String,
    pub selected: Option<SelectedShapeProps>,
    pub ranges: PanelRanges,
}

impl PanelState {
    pub fn from_editor<M: TextMeasurer>(editor: &Editor<M>) -> Self {
        let scene = editor.scene();
        Self {
            status: editor.status_line(),
            background: scene.background().to_hex(),
            selected: scene.selected_shape().map(SelectedShapeProps::from_shape),
            ranges: PanelRanges::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
