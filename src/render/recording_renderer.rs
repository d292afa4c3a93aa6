use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that keeps every validated frame it receives.
///
/// Useful for hosts replaying interactions headlessly and for asserting on
/// exactly which columns a gesture repainted.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    /// Drains recorded frames, leaving the recorder empty.
    pub fn take_frames(&mut self) -> Vec<RenderFrame> {
        std::mem::take(&mut self.frames)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}
