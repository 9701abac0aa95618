pub mod labels;
pub mod projection;
pub mod scale;
pub mod types;
pub mod windowing;

pub use labels::{format_sample_value, format_tick_label, tooltip_text};
pub use projection::{
    AxisTick, AxisTicks, LineSegment, SeriesProjection, pick_nearest, project_series,
};
pub use scale::{IndexScale, ValueRange, ValueScale};
pub use types::{ChartLayout, PixelPoint, Viewport};
pub use windowing::{DEFAULT_HISTORY_WINDOW, trailing_window};
