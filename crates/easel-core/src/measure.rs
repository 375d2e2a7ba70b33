//! Text measurement seam.
//!
//! Text extents come from the host's font engine. The editor calls the
//! measurer explicitly whenever text content or size changes; the render
//! pass only reads the cached result.

use crate::shapes::Text;

/// Measured extents of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Ascent above the baseline.
    pub height: f64,
}

impl TextMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Something that can measure text in the active font.
pub trait TextMeasurer {
    fn measure(&self, content: &str, font_size: f64) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, content: &str, font_size: f64) -> TextMetrics {
        (**self).measure(content, font_size)
    }
}

/// Deterministic measurer that assumes every glyph has the same advance.
///
/// Used off-browser and in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub char_width_factor: f64,
    /// Ascent as a fraction of the font size.
    pub ascent_factor: f64,
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self {
            char_width_factor: 0.5,
            ascent_factor: 0.9,
        }
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, content: &str, font_size: f64) -> TextMetrics {
        let chars = content.chars().count() as f64;
        TextMetrics::new(
            chars * font_size * self.char_width_factor,
            font_size * self.ascent_factor,
        )
    }
}

/// Re-measure `text` if its cache is stale. Returns whether it measured.
pub fn refresh_text<M: TextMeasurer + ?Sized>(text: &mut Text, measurer: &M) -> bool {
    if !text.needs_measure() {
        return false;
    }
    let metrics = measurer.measure(text.content(), text.font_size());
    text.apply_metrics(metrics);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_measure() {
        let m = FixedWidthMeasurer::default();
        let metrics = m.measure("abcd", 20.0);
        assert!((metrics.width - 40.0).abs() < f64::EPSILON);
        assert!((metrics.height - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_refresh_only_when_stale() {
        let m = FixedWidthMeasurer::default();
        let mut text = Text::default();
        assert!(refresh_text(&mut text, &m));
        assert!(!refresh_text(&mut text, &m));
        // "Edit Here" is 9 chars at 24px
        assert!((text.measured_size().width - 108.0).abs() < 1e-9);

        text.set_font_size(10.0);
        assert!(refresh_text(&mut text, &m));
        assert!((text.measured_size().width - 45.0).abs() < 1e-9);
    }
}
