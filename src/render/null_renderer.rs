use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and hosts that only need the geometry.
///
/// Frames are still validated so non-finite coordinates surface as errors.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_circle_count = frame.circles.len();
        Ok(())
    }
}
