use serde::{Deserialize, Serialize};

/// Pixel size of the drawing surface a chart is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Point in pixel space, origin at the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed chart chrome around the plot area.
///
/// The left margin hosts the Y axis and its labels, the bottom margin hosts
/// the X axis. The bottom margin is also kept free above the highest sample so
/// the line never touches the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default = "default_left_margin_px")]
    pub left_margin_px: f64,
    #[serde(default = "default_bottom_margin_px")]
    pub bottom_margin_px: f64,
    /// Number of intervals between Y-axis ticks; the axis carries one more label.
    #[serde(default = "default_tick_divisions")]
    pub tick_divisions: usize,
    #[serde(default = "default_tooltip_offset_x_px")]
    pub tooltip_offset_x_px: f64,
    #[serde(default = "default_tooltip_offset_y_px")]
    pub tooltip_offset_y_px: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            left_margin_px: default_left_margin_px(),
            bottom_margin_px: default_bottom_margin_px(),
            tick_divisions: default_tick_divisions(),
            tooltip_offset_x_px: default_tooltip_offset_x_px(),
            tooltip_offset_y_px: default_tooltip_offset_y_px(),
        }
    }
}

impl ChartLayout {
    /// Width available to the series once the left margin is reserved.
    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> f64 {
        viewport.width - self.left_margin_px
    }

    /// Height the value range is stretched over.
    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> f64 {
        viewport.height - 2.0 * self.bottom_margin_px
    }

    /// Whether `viewport` leaves a plot area once the margins are reserved.
    ///
    /// Narrower viewports stack every sample on the left margin; shorter ones
    /// flip the value axis.
    #[must_use]
    pub fn fits(self, viewport: Viewport) -> bool {
        viewport.is_valid() && self.plot_width(viewport) > 0.0 && self.plot_height(viewport) > 0.0
    }

    /// Pixel row of the X axis, where the minimum value lands.
    #[must_use]
    pub fn baseline_y(self, viewport: Viewport) -> f64 {
        viewport.height - self.bottom_margin_px
    }
}

fn default_left_margin_px() -> f64 {
    40.0
}

fn default_bottom_margin_px() -> f64 {
    20.0
}

fn default_tick_divisions() -> usize {
    5
}

fn default_tooltip_offset_x_px() -> f64 {
    12.0
}

fn default_tooltip_offset_y_px() -> f64 {
    -32.0
}
