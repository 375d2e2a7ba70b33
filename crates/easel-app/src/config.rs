//! Application configuration.

use easel_core::EditorConfig;
use easel_core::shapes::Rgba;
use kurbo::Size;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Canvas width in logical units.
    pub width: u32,
    /// Canvas height in logical units.
    pub height: u32,
    pub background_color: Rgba,
    pub selection_color: Rgba,
    pub font_family: String,
    /// Log level for the browser console.
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Easel".to_string(),
            width: 1000,
            height: 650,
            background_color: Rgba::WHITE,
            selection_color: Rgba::RED,
            font_family: "Arial".to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Editor settings derived from this configuration.
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            canvas_size: Size::new(f64::from(self.width), f64::from(self.height)),
            background: self.background_color,
            selection_color: self.selection_color,
            font_family: self.font_family.clone(),
        }
    }
}
