//! Editor state: the single owner of scene, drag session and measurer.

use crate::drag::{DragController, DragState};
use crate::edit::ShapeEdit;
use crate::error::{CanvasError, Result};
use crate::input::PointerEvent;
use crate::measure::{TextMeasurer, refresh_text};
use crate::scene::{Scene, ZDirection, neighbor};
use crate::shapes::{Rectangle, Rgba, Shape, Text};
use kurbo::{Point, Size};

/// Editor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Drawing surface size in logical units.
    pub canvas_size: Size,
    /// Initial background color.
    pub background: Rgba,
    /// Outline color for the selected shape.
    pub selection_color: Rgba,
    /// Font family for all text.
    pub font_family: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(1000.0, 650.0),
            background: Rgba::WHITE,
            selection_color: Rgba::RED,
            font_family: "Arial".to_string(),
        }
    }
}

/// Application state passed into every input and panel handler.
#[derive(Debug)]
pub struct Editor<M> {
    scene: Scene,
    drag: DragController,
    measurer: M,
    config: EditorConfig,
    dirty: bool,
}

impl<M: TextMeasurer> Editor<M> {
    pub fn new(config: EditorConfig, measurer: M) -> Self {
        Self {
            scene: Scene::with_background(config.background),
            drag: DragController::new(),
            measurer,
            config,
            dirty: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Whether the model changed since the last [`Editor::mark_drawn`].
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    /// Dispatch a pointer event already translated to canvas coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => {
                self.pointer_down(position);
            }
            PointerEvent::Move { position } => {
                self.pointer_move(position);
            }
            PointerEvent::Up { .. } => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<usize> {
        let hit = self.drag.pointer_down(&mut self.scene, point);
        self.dirty = true;
        hit
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        let moved = self.drag.pointer_move(&mut self.scene, point);
        self.dirty |= moved;
        moved
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.pointer_up();
    }

    /// Append a shape on top, measuring it first if it is text.
    ///
    /// Fails with `InvalidValue` if a size, font size or angle is out of range.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> Result<usize> {
        let shape = shape.into();
        shape.validate()?;
        Ok(self.push_shape(shape))
    }

    fn push_shape(&mut self, mut shape: Shape) -> usize {
        if let Some(text) = shape.as_text_mut() {
            refresh_text(text, &self.measurer);
        }
        let index = self.scene.add_shape(shape);
        self.dirty = true;
        log::debug!("added shape {}", index);
        index
    }

    /// Add a default rectangle at (100, 100).
    pub fn add_rectangle(&mut self) -> usize {
        self.push_shape(Rectangle::default().into())
    }

    /// Add "Edit Here" at (200, 200).
    pub fn add_text(&mut self) -> usize {
        self.push_shape(Text::default().into())
    }

    fn selected_index(&self) -> Result<usize> {
        self.scene
            .selected()
            .ok_or(CanvasError::InvalidSelection {
                index: None,
                len: self.scene.len(),
            })
    }

    /// Apply a panel edit to the selected shape and re-measure text if needed.
    pub fn edit_selected(&mut self, edit: ShapeEdit) -> Result<()> {
        let index = self.selected_index()?;
        self.scene.set_field(Some(index), edit)?;
        if let Some(text) = self.scene.get_mut(index).and_then(Shape::as_text_mut) {
            refresh_text(text, &self.measurer);
        }
        self.dirty = true;
        Ok(())
    }

    pub fn set_selected_color(&mut self, color: &str) -> Result<()> {
        let color = Rgba::parse(color)?;
        self.edit_selected(ShapeEdit::Color(color))
    }

    pub fn set_selected_text(&mut self, content: &str) -> Result<()> {
        self.edit_selected(ShapeEdit::Content(content.to_string()))
    }

    pub fn set_selected_font_size(&mut self, size: f64) -> Result<()> {
        self.edit_selected(ShapeEdit::FontSize(size))
    }

    pub fn set_selected_width(&mut self, width: f64) -> Result<()> {
        self.edit_selected(ShapeEdit::Width(width))
    }

    pub fn set_selected_height(&mut self, height: f64) -> Result<()> {
        self.edit_selected(ShapeEdit::Height(height))
    }

    /// Set rotation from the panel's 0-360 degree slider.
    pub fn set_selected_rotation_degrees(&mut self, degrees: f64) -> Result<()> {
        self.edit_selected(ShapeEdit::rotation_degrees(degrees))
    }

    fn reorder_selected(&mut self, direction: ZDirection) -> Result<bool> {
        let index = self.selected_index()?;
        let moved = self.scene.reorder(Some(index), direction)?;
        if moved {
            if let Some(other) = neighbor(index, direction, self.scene.len()) {
                self.drag.shapes_swapped(index, other);
            }
            self.dirty = true;
        }
        Ok(moved)
    }

    /// Move the selected shape one step up. `Ok(false)` if already topmost.
    pub fn bring_forward(&mut self) -> Result<bool> {
        self.reorder_selected(ZDirection::Forward)
    }

    /// Move the selected shape one step down. `Ok(false)` if already bottommost.
    pub fn send_back(&mut self) -> Result<bool> {
        self.reorder_selected(ZDirection::Back)
    }

    pub fn delete_selected(&mut self) -> Result<Shape> {
        let index = self.selected_index()?;
        let shape = self.scene.remove(Some(index))?;
        self.drag.shape_removed(index);
        self.dirty = true;
        log::debug!("deleted shape {}", index);
        Ok(shape)
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.scene.set_background(color);
        self.dirty = true;
    }

    pub fn set_background_str(&mut self, color: &str) -> Result<()> {
        self.set_background(Rgba::parse(color)?);
        Ok(())
    }

    /// Re-measure every text shape whose content or size changed.
    /// Returns how many were measured.
    pub fn refresh_measurements(&mut self) -> usize {
        let measurer = &self.measurer;
        let count = self
            .scene
            .iter_mut()
            .filter_map(Shape::as_text_mut)
            .map(|text| refresh_text(text, measurer))
            .filter(|&measured| measured)
            .count();
        if count > 0 {
            self.dirty = true;
        }
        count
    }

    /// Status line shown above the panel.
    pub fn status_line(&self) -> String {
        match self.scene.selected_shape() {
            Some(shape) => format!("Selected: {}", shape.name()),
            None => "Nothing selected!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::hit_test;
    use crate::measure::FixedWidthMeasurer;

    fn editor() -> Editor<FixedWidthMeasurer> {
        Editor::new(EditorConfig::default(), FixedWidthMeasurer::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas_size, Size::new(1000.0, 650.0));
        assert_eq!(config.selection_color, Rgba::RED);
        assert_eq!(config.font_family, "Arial");
    }

    #[test]
    fn test_add_text_is_measured() {
        let mut ed = editor();
        let i = ed.add_text();
        let text = ed.scene().get(i).unwrap().as_text().unwrap();
        assert!(!text.needs_measure());
        assert!(text.measured_size().width > 0.0);
    }

    #[test]
    fn test_scenario_drag_and_bring_forward() {
        let mut ed = editor();
        ed.add_rectangle();
        ed.add_text();

        assert_eq!(ed.pointer_down(Point::new(150.0, 150.0)), Some(0));
        assert_eq!(ed.status_line(), "Selected: Rectangle");
        ed.pointer_move(Point::new(300.0, 300.0));
        ed.pointer_up();

        let origin = ed.scene().get(0).unwrap().origin();
        assert!(approx(origin.x, 250.0));
        assert!(approx(origin.y, 250.0));

        // Drop the text on top of the rectangle
        ed.pointer_down(Point::new(210.0, 195.0));
        assert_eq!(ed.scene().selected(), Some(1));
        ed.pointer_move(Point::new(270.0, 275.0));
        ed.pointer_up();
        assert_eq!(hit_test(ed.scene().shapes(), Point::new(270.0, 270.0)), Some(1));

        ed.pointer_down(Point::new(340.0, 340.0));
        assert_eq!(ed.scene().selected(), Some(0));
        ed.pointer_up();
        assert!(ed.bring_forward().unwrap());
        assert_eq!(ed.scene().selected(), Some(1));
        assert!(ed.scene().selected_shape().unwrap().as_rectangle().is_some());
        assert_eq!(hit_test(ed.scene().shapes(), Point::new(270.0, 270.0)), Some(1));
        assert!(!ed.bring_forward().unwrap());
    }

    #[test]
    fn test_edit_without_selection_fails() {
        let mut ed = editor();
        ed.add_rectangle();
        assert!(matches!(
            ed.set_selected_width(10.0),
            Err(CanvasError::InvalidSelection { index: None, len: 1 })
        ));
        assert!(ed.bring_forward().is_err());
        assert!(ed.delete_selected().is_err());
    }

    #[test]
    fn test_add_shape_rejects_out_of_range() {
        let mut ed = editor();
        let err = ed
            .add_shape(Text::default().with_font_size(-4.0))
            .unwrap_err();
        assert!(matches!(err, CanvasError::InvalidValue { value, .. } if value == -4.0));
        assert!(
            ed.add_shape(Rectangle::new(Point::ZERO, 10.0, -1.0))
                .is_err()
        );
        assert!(ed.scene().is_empty());

        assert_eq!(
            ed.add_shape(Rectangle::new(Point::ZERO, 0.0, 0.0)),
            Ok(0)
        );
    }

    #[test]
    fn test_text_edit_remeasures() {
        let mut ed = editor();
        ed.add_text();
        ed.scene.select(Some(0)).unwrap();
        ed.set_selected_text("abc").unwrap();
        let size = ed.scene().get(0).unwrap().size();
        assert!(approx(size.width, 3.0 * 24.0 * 0.5));

        ed.set_selected_font_size(40.0).unwrap();
        let size = ed.scene().get(0).unwrap().size();
        assert!(approx(size.width, 3.0 * 40.0 * 0.5));
        assert!(approx(size.height, 36.0));
    }

    #[test]
    fn test_color_and_rotation() {
        let mut ed = editor();
        ed.add_rectangle();
        ed.pointer_down(Point::new(150.0, 150.0));
        ed.set_selected_color("#00ff00").unwrap();
        ed.set_selected_rotation_degrees(90.0).unwrap();
        let shape = ed.scene().get(0).unwrap();
        assert_eq!(shape.color(), Rgba::rgb(0, 255, 0));
        assert!(approx(shape.rotation(), std::f64::consts::FRAC_PI_2));
        assert!(matches!(
            ed.set_selected_color("not a color"),
            Err(CanvasError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_delete_selected_clears_selection_and_drag() {
        let mut ed = editor();
        ed.add_rectangle();
        ed.pointer_down(Point::new(150.0, 150.0));
        assert!(matches!(ed.drag_state(), DragState::Dragging { index: 0, .. }));
        ed.delete_selected().unwrap();
        assert_eq!(ed.scene().selected(), None);
        assert_eq!(ed.drag_state(), DragState::Idle);
        assert!(!ed.pointer_move(Point::new(10.0, 10.0)));
        assert_eq!(ed.status_line(), "Nothing selected!");
    }

    #[test]
    fn test_reorder_during_drag_follows_shape() {
        let mut ed = editor();
        ed.add_rectangle();
        ed.add_shape(Rectangle::new(Point::new(500.0, 500.0), 10.0, 10.0))
            .unwrap();
        ed.pointer_down(Point::new(150.0, 150.0));
        ed.bring_forward().unwrap();
        ed.pointer_move(Point::new(160.0, 160.0));
        let moved = ed.scene().get(1).unwrap();
        assert!(approx(moved.origin().x, 110.0));
        let other = ed.scene().get(0).unwrap();
        assert!(approx(other.origin().x, 500.0));
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut ed = editor();
        ed.add_rectangle();
        ed.handle_pointer(PointerEvent::Down {
            position: Point::new(150.0, 150.0),
        });
        ed.handle_pointer(PointerEvent::Leave);
        assert_eq!(ed.drag_state(), DragState::Idle);
        assert_eq!(ed.scene().selected(), Some(0));
    }

    #[test]
    fn test_dirty_flag() {
        let mut ed = editor();
        assert!(ed.needs_redraw());
        ed.mark_drawn();
        assert!(!ed.pointer_move(Point::new(1.0, 1.0)));
        assert!(!ed.needs_redraw());
        ed.set_background(Rgba::BLACK);
        assert!(ed.needs_redraw());
        assert_eq!(ed.scene().background(), Rgba::BLACK);
    }

    #[test]
    fn test_refresh_measurements_converges() {
        let mut ed = editor();
        ed.add_text();
        ed.scene.get_mut(0).unwrap().as_text_mut().unwrap().set_content("x".into());
        assert_eq!(ed.refresh_measurements(), 1);
        assert_eq!(ed.refresh_measurements(), 0);
    }
}
