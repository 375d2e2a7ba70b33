//! Easel Application
//!
//! The browser shell: configuration, property-panel state, PNG export and,
//! on `wasm32`, the Canvas2D host bindings.

mod config;
mod export;
mod panel;

pub use config::AppConfig;
pub use export::{EXPORT_FILE_NAME, ExportError, encode_png};
pub use panel::{PanelRanges, PanelState, SelectedShapeProps, SliderRange};

#[cfg(target_arch = "wasm32")]
mod canvas2d;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{EaselApp, run_wasm};
