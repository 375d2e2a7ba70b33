//! Pointer-driven move of a single shape.

use crate::hit::hit_test;
use crate::scene::Scene;
use crate::shapes::{Shape, rotate_vec};
use kurbo::{Point, Vec2};

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Pointer is holding a shape.
    Dragging {
        /// Scene index of the held shape.
        index: usize,
        /// Grab point in the shape's unrotated local frame.
        grab_offset: Vec2,
    },
}

/// Where the pointer grabbed `shape`, in its local unrotated frame.
pub fn grab_offset(shape: &Shape, pointer: Point) -> Vec2 {
    shape.to_local(pointer).to_vec2()
}

/// Origin that keeps `grab_offset` under `pointer` at the shape's rotation.
pub fn origin_for_pointer(shape: &Shape, grab_offset: Vec2, pointer: Point) -> Point {
    pointer - rotate_vec(grab_offset, shape.rotation())
}

/// Tracks a drag across pointer events.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the shape being dragged, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Pointer pressed: select the topmost shape under the pointer and start
    /// dragging it, or clear the selection on a background click.
    pub fn pointer_down(&mut self, scene: &mut Scene, pointer: Point) -> Option<usize> {
        let hit = hit_test(scene.shapes(), pointer);
        match hit.and_then(|index| scene.get(index).map(|shape| (index, shape))) {
            Some((index, shape)) => {
                let grab_offset = grab_offset(shape, pointer);
                self.state = DragState::Dragging { index, grab_offset };
                log::debug!("drag start on {} at local {:?}", index, grab_offset);
            }
            None => self.state = DragState::Idle,
        }
        if let Err(err) = scene.select(hit) {
            log::warn!("pointer down: {}", err);
        }
        hit
    }

    /// Pointer moved: reposition the held shape. Returns whether it moved.
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Point) -> bool {
        let DragState::Dragging { index, grab_offset } = self.state else {
            return false;
        };
        let Some(shape) = scene.get_mut(index) else {
            // Held shape disappeared underneath us
            self.state = DragState::Idle;
            return false;
        };
        let origin = origin_for_pointer(shape, grab_offset, pointer);
        shape.set_origin(origin);
        true
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            log::debug!("drag end");
        }
        self.state = DragState::Idle;
    }

    /// The shape at `index` was removed from the scene.
    pub fn shape_removed(&mut self, index: usize) {
        if let DragState::Dragging { index: held, grab_offset } = self.state {
            self.state = match held {
                h if h == index => DragState::Idle,
                h if h > index => DragState::Dragging {
                    index: h - 1,
                    grab_offset,
                },
                _ => self.state,
            };
        }
    }

    /// Shapes at `a` and `b` traded places.
    pub fn shapes_swapped(&mut self, a: usize, b: usize) {
        if let DragState::Dragging { index, grab_offset } = self.state {
            let index = match index {
                i if i == a => b,
                i if i == b => a,
                i => i,
            };
            self.state = DragState::Dragging { index, grab_offset };
        }
    }
}
