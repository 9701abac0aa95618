mod frame;
mod null_renderer;
mod primitives;
mod scene;
mod style;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive, TextPrimitive};
pub use scene::build_chart_frame;
pub use style::ChartStyle;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code never
/// sees series values or selection state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
