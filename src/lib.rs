//! hawk-chart: trend-chart projection and tap picking.
//!
//! Maps an ordered series (bird weights, flight altitudes, lap times) onto a
//! pixel viewport, produces Y-axis ticks, and resolves taps back to the
//! nearest sample. Projection is a pure function; selection state lives with
//! the caller.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartPainter};
pub use error::{ChartError, ChartResult};
