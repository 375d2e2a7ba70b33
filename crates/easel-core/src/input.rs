//! Pointer events and client-to-canvas coordinate translation.

use kurbo::{Point, Vec2};

/// Pointer event in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Pointer left the canvas; ends any drag like `Up`.
    Leave,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(position),
            PointerEvent::Leave => None,
        }
    }

    /// The same event with its position mapped into canvas space.
    pub fn to_canvas(self, offset: CanvasOffset) -> Self {
        match self {
            PointerEvent::Down { position } => PointerEvent::Down {
                position: offset.to_canvas(position),
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: offset.to_canvas(position),
            },
            PointerEvent::Up { position } => PointerEvent::Up {
                position: offset.to_canvas(position),
            },
            PointerEvent::Leave => PointerEvent::Leave,
        }
    }
}

/// Position of the canvas' top-left corner in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOffset(pub Vec2);

impl CanvasOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self(Vec2::new(left, top))
    }

    /// Convert a client point to canvas coordinates.
    pub fn to_canvas(&self, client: Point) -> Point {
        client - self.0
    }
}
