mod frame;
mod null_renderer;
mod primitives;
mod recording_renderer;

pub use frame::{DrawCommand, FrameScope, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectArea, RectPrimitive, TextHAlign, TextPrimitive};
pub use recording_renderer::RecordingRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive fully materialized, ordered draw calls so drawing code
/// stays isolated from series and interaction logic. Frames scoped to
/// columns must leave the rest of the surface untouched.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
