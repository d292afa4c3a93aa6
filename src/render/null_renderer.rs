use crate::error::ChartResult;
use crate::render::{FrameScope, RenderFrame, Renderer};

/// No-op renderer used by tests and headless widget usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub full_frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        if frame.scope == FrameScope::Full {
            self.full_frames_rendered += 1;
        }
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
