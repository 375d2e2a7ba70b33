//! WASM entry point and the JS-facing editor facade.

use crate::canvas2d::{Canvas2dMeasurer, Canvas2dSurface};
use crate::config::AppConfig;
use crate::export::{EXPORT_FILE_NAME, ExportError, encode_png};
use crate::panel::PanelState;
use easel_core::{CanvasOffset, Editor, PointerEvent};
use easel_render::{RenderContext, render_scene};
use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Initialize logging and panic reporting.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();

    let level = AppConfig::default().log_level;
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {}", err).into());
    }

    log::info!("Starting Easel (WASM)");
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Reject an edit at the boundary, logging it for the console.
fn report<T>(op: &str, result: easel_core::Result<T>) -> Result<T, JsValue> {
    result.map_err(|err| {
        log::warn!("{} rejected: {}", op, err);
        js_error(err)
    })
}

/// Editor bound to a `<canvas>` element.
#[wasm_bindgen]
pub struct EaselApp {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: Canvas2dSurface,
    editor: Editor<Canvas2dMeasurer>,
    config: AppConfig,
}

#[wasm_bindgen]
impl EaselApp {
    /// Attach to the canvas with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<EaselApp, JsValue> {
        let config = AppConfig::default();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| js_error("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| js_error(format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_error(format!("'{}' is not a canvas", canvas_id)))?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        let measurer = Canvas2dMeasurer::new(ctx.clone(), config.font_family.clone());
        let editor = Editor::new(config.editor_config(), measurer);
        log::info!(
            "{} attached to '{}' ({}x{})",
            config.title,
            canvas_id,
            config.width,
            config.height
        );

        let mut app = Self {
            canvas,
            surface: Canvas2dSurface::new(ctx.clone()),
            ctx,
            editor,
            config,
        };
        app.redraw();
        Ok(app)
    }

    fn offset(&self) -> CanvasOffset {
        let rect = self.canvas.get_bounding_client_rect();
        CanvasOffset::new(rect.left(), rect.top())
    }

    fn dispatch(&mut self, event: PointerEvent) {
        let event = event.to_canvas(self.offset());
        self.editor.handle_pointer(event);
        if self.editor.needs_redraw() {
            self.redraw();
        }
    }

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Down {
            position: Point::new(client_x, client_y),
        });
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Move {
            position: Point::new(client_x, client_y),
        });
    }

    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Up {
            position: Point::new(client_x, client_y),
        });
    }

    pub fn pointer_leave(&mut self) {
        self.dispatch(PointerEvent::Leave);
    }

    pub fn add_rectangle(&mut self) -> usize {
        let index = self.editor.add_rectangle();
        self.redraw();
        index
    }

    pub fn add_text(&mut self) -> usize {
        let index = self.editor.add_text();
        self.redraw();
        index
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), JsValue> {
        let result = self.editor.set_selected_color(color);
        self.finish("set_color", result)
    }

    pub fn set_text(&mut self, content: &str) -> Result<(), JsValue> {
        let result = self.editor.set_selected_text(content);
        self.finish("set_text", result)
    }

    pub fn set_font_size(&mut self, size: f64) -> Result<(), JsValue> {
        let result = self.editor.set_selected_font_size(size);
        self.finish("set_font_size", result)
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), JsValue> {
        let result = self.editor.set_selected_width(width);
        self.finish("set_width", result)
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), JsValue> {
        let result = self.editor.set_selected_height(height);
        self.finish("set_height", result)
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) -> Result<(), JsValue> {
        let result = self.editor.set_selected_rotation_degrees(degrees);
        self.finish("set_rotation_degrees", result)
    }

    pub fn set_background(&mut self, color: &str) -> Result<(), JsValue> {
        let result = self.editor.set_background_str(color);
        self.finish("set_background", result)
    }

    /// Returns whether the selection moved.
    pub fn bring_forward(&mut self) -> Result<bool, JsValue> {
        let moved = report("bring_forward", self.editor.bring_forward())?;
        self.redraw();
        Ok(moved)
    }

    /// Returns whether the selection moved.
    pub fn send_back(&mut self) -> Result<bool, JsValue> {
        let moved = report("send_back", self.editor.send_back())?;
        self.redraw();
        Ok(moved)
    }

    pub fn delete_selected(&mut self) -> Result<(), JsValue> {
        report("delete_selected", self.editor.delete_selected())?;
        self.redraw();
        Ok(())
    }

    /// Panel state as JSON.
    pub fn panel_state(&self) -> Result<String, JsValue> {
        PanelState::from_editor(&self.editor)
            .to_json()
            .map_err(js_error)
    }

    pub fn status_line(&self) -> String {
        self.editor.status_line()
    }

    /// Repaint the whole canvas from the model.
    pub fn redraw(&mut self) {
        self.editor.refresh_measurements();
        let ctx = RenderContext::from_config(self.editor.scene(), self.editor.config());
        render_scene(&ctx, &mut self.surface);
        self.editor.mark_drawn();
    }

    /// Encode the canvas as PNG and offer it for download.
    pub fn download_png(&mut self) -> Result<(), JsValue> {
        self.redraw();
        let (width, height) = (self.config.width, self.config.height);
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))?;
        let png = encode_png(&image.data().0, width, height).map_err(js_error)?;
        download_binary_file(EXPORT_FILE_NAME, &png, "image/png").map_err(js_error)
    }
}

impl EaselApp {
    fn finish(&mut self, op: &str, result: easel_core::Result<()>) -> Result<(), JsValue> {
        report(op, result)?;
        self.redraw();
        Ok(())
    }
}

/// Offer bytes to the user as a file download.
fn download_binary_file(filename: &str, data: &[u8], mime_type: &str) -> Result<(), ExportError> {
    let host = |err: JsValue| ExportError::Host(format!("{:?}", err));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Host("no document".to_string()))?;

    let uint8_array = js_sys::Uint8Array::from(data);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(host)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(host)?;

    let a = document
        .create_element("a")
        .map_err(host)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Host("not an anchor element".to_string()))?;
    a.set_href(&url);
    a.set_download(filename);
    a.click();

    web_sys::Url::revoke_object_url(&url).ok();
    log::info!("downloaded {} ({} bytes)", filename, data.len());
    Ok(())
}
