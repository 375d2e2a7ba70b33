//! Canvas2D implementations of the render surface and text measurer.

use easel_core::shapes::Rgba;
use easel_core::{TextMeasurer, TextMetrics};
use easel_render::Surface;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

fn css_color(color: Color) -> String {
    let Rgba { r, g, b, a } = color.into();
    format!("rgba({}, {}, {}, {})", r, g, b, f64::from(a) / 255.0)
}

fn log_js_error(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("canvas {} failed: {:?}", op, err);
    }
}

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(line_width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: Color) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&css_color(color));
        log_js_error("fill_text", self.ctx.fill_text(text, origin.x, origin.y));
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        log_js_error("translate", self.ctx.translate(offset.x, offset.y));
    }

    fn rotate(&mut self, angle: f64) {
        log_js_error("rotate", self.ctx.rotate(angle));
    }
}

/// [`TextMeasurer`] using `measureText` on the drawing context.
pub struct Canvas2dMeasurer {
    ctx: CanvasRenderingContext2d,
    font_family: String,
}

impl Canvas2dMeasurer {
    pub fn new(ctx: CanvasRenderingContext2d, font_family: impl Into<String>) -> Self {
        Self {
            ctx,
            font_family: font_family.into(),
        }
    }
}

impl TextMeasurer for Canvas2dMeasurer {
    fn measure(&self, content: &str, font_size: f64) -> TextMetrics {
        self.ctx.save();
        self.ctx
            .set_font(&format!("{}px {}", font_size, self.font_family));
        let metrics = match self.ctx.measure_text(content) {
            Ok(m) => TextMetrics::new(m.width(), m.font_bounding_box_ascent()),
            Err(err) => {
                log::warn!("measureText failed: {:?}", err);
                TextMetrics::new(0.0, 0.0)
            }
        };
        self.ctx.restore();
        metrics
    }
}
