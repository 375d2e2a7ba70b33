//! Easel Render Library
//!
//! Surface abstraction and the repaint pass for Easel. Hosts implement
//! [`Surface`] (the browser build uses Canvas2D); [`RecordingSurface`]
//! captures draw commands for inspection.

mod recording;
mod renderer;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{RenderContext, Surface, render_scene};
