mod chart_config;
mod painter;

pub use chart_config::ChartConfig;
pub use painter::ChartPainter;
