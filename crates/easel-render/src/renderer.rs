//! Surface trait and the full-scene repaint.

use easel_core::EditorConfig;
use easel_core::scene::Scene;
use easel_core::shapes::Shape;
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

/// Immediate-mode 2D drawing surface provided by the host.
///
/// Coordinates are in the current transform, which starts as the identity
/// in canvas space.
pub trait Surface {
    /// Reset a region to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);

    /// Draw text with its baseline-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: Color);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    /// Rotate the current transform by `angle` radians.
    fn rotate(&mut self, angle: f64);
}

/// Context for a single repaint.
pub struct RenderContext<'a> {
    /// The scene to draw.
    pub scene: &'a Scene,
    /// Surface size in logical units.
    pub canvas_size: Size,
    /// Selection outline color.
    pub selection_color: Color,
    /// Selection outline width.
    pub selection_width: f64,
    /// Font family for text shapes.
    pub font_family: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the editor defaults.
    pub fn new(scene: &'a Scene, canvas_size: Size) -> Self {
        Self {
            scene,
            canvas_size,
            selection_color: Color::from_rgba8(255, 0, 0, 255),
            selection_width: 1.0,
            font_family: "Arial",
        }
    }

    /// Create a context from editor configuration.
    pub fn from_config(scene: &'a Scene, config: &'a EditorConfig) -> Self {
        Self::new(scene, config.canvas_size)
            .with_selection_color(config.selection_color.into())
            .with_font_family(&config.font_family)
    }

    /// Set the selection outline color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: &'a str) -> Self {
        self.font_family = family;
        self
    }

    fn canvas_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.canvas_size)
    }
}

/// Repaint the whole scene.
///
/// Reads the model only. Text is drawn with whatever size was last measured;
/// callers refresh measurements before repainting.
pub fn render_scene<S: Surface + ?Sized>(ctx: &RenderContext, surface: &mut S) {
    let canvas = ctx.canvas_rect();
    surface.clear_rect(canvas);
    surface.fill_rect(canvas, ctx.scene.background().into());

    for (index, shape) in ctx.scene.shapes().iter().enumerate() {
        render_shape(ctx, surface, shape, ctx.scene.is_selected(index));
    }
}

fn render_shape<S: Surface + ?Sized>(
    ctx: &RenderContext,
    surface: &mut S,
    shape: &Shape,
    selected: bool,
) {
    surface.save();
    surface.translate(shape.origin().to_vec2());
    surface.rotate(shape.rotation());

    // Outline goes down first so the fill sits on top of it
    if selected {
        surface.stroke_rect(shape.local_bounds(), ctx.selection_color, ctx.selection_width);
    }

    let color: Color = shape.color().into();
    match shape {
        Shape::Rectangle(rect) => {
            surface.fill_rect(Rect::new(0.0, 0.0, rect.width, rect.height), color);
        }
        Shape::Text(text) => {
            if text.needs_measure() {
                log::debug!("drawing text with a stale measurement");
            }
            surface.fill_text(text.content(), Point::ZERO, &text.font(ctx.font_family), color);
        }
    }

    surface.restore();
}
