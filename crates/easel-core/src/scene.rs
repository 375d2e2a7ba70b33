//! Scene store: ordered shapes, selection and background.

use crate::edit::ShapeEdit;
use crate::error::{CanvasError, Result};
use crate::shapes::{Rgba, Shape};

/// Direction for a one-step z-order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZDirection {
    /// Towards the bottom (index - 1).
    Back,
    /// Towards the top (index + 1).
    Forward,
}

/// The shapes on the canvas in z-order (back to front), the selected index
/// and the background color.
///
/// `selected` is always `None` or a valid index; every operation that
/// removes or moves shapes updates it in the same call.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<usize>,
    background: Rgba,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene on a white background.
    pub fn new() -> Self {
        Self::with_background(Rgba::WHITE)
    }

    pub fn with_background(background: Rgba) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            background,
        }
    }

    fn check_index(&self, index: Option<usize>) -> Result<usize> {
        match index {
            Some(i) if i < self.shapes.len() => Ok(i),
            _ => Err(CanvasError::InvalidSelection {
                index,
                len: self.shapes.len(),
            }),
        }
    }

    /// Append a shape on top. Selection is unchanged.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    /// Select a shape, or clear the selection with `None`.
    pub fn select(&mut self, index: Option<usize>) -> Result<()> {
        if index.is_some() {
            self.check_index(index)?;
        }
        self.selected = index;
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Update one attribute of the shape at `index`.
    ///
    /// The shape is left untouched if the edit is rejected.
    pub fn set_field(&mut self, index: Option<usize>, edit: ShapeEdit) -> Result<()> {
        let i = self.check_index(index)?;
        edit.apply(&mut self.shapes[i])
    }

    /// Swap the shape at `index` with its neighbor in `direction`.
    ///
    /// Returns `Ok(false)` at the boundary. The selection keeps pointing at
    /// the same shape it pointed at before the swap.
    pub fn reorder(&mut self, index: Option<usize>, direction: ZDirection) -> Result<bool> {
        let i = self.check_index(index)?;
        let Some(j) = neighbor(i, direction, self.shapes.len()) else {
            return Ok(false);
        };
        self.shapes.swap(i, j);
        self.selected = self.selected.map(|s| match s {
            s if s == i => j,
            s if s == j => i,
            s => s,
        });
        log::debug!("reorder {:?}: {} -> {}", direction, i, j);
        Ok(true)
    }

    /// Move one step towards the top.
    pub fn bring_forward(&mut self, index: Option<usize>) -> Result<bool> {
        self.reorder(index, ZDirection::Forward)
    }

    /// Move one step towards the bottom.
    pub fn send_back(&mut self, index: Option<usize>) -> Result<bool> {
        self.reorder(index, ZDirection::Back)
    }

    /// Delete the shape at `index`. The selection is cleared.
    pub fn remove(&mut self, index: Option<usize>) -> Result<Shape> {
        let i = self.check_index(index)?;
        let shape = self.shapes.remove(i);
        self.selected = None;
        Ok(shape)
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }
}

/// Index of the neighbor in `direction`, if there is one.
pub fn neighbor(index: usize, direction: ZDirection, len: usize) -> Option<usize> {
    match direction {
        ZDirection::Back => index.checked_sub(1),
        ZDirection::Forward => Some(index + 1).filter(|&j| j < len),
    }
}
