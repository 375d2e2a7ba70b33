//! Display-list surface that records draw calls instead of drawing.

use crate::renderer::Surface;
use easel_core::shapes::Rgba;
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::Color;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
        line_width: f64,
    },
    FillText {
        text: String,
        origin: Point,
        font: String,
        color: Rgba,
    },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
}

/// Surface that keeps every call in order, plus the transform stack.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Current local-to-canvas transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform = Affine::IDENTITY;
        self.stack.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.into(),
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font: font.to_string(),
            color: color.into(),
        });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Canvas2D ignores an unmatched restore
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform *= Affine::rotate(angle);
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
