use serde::{Deserialize, Serialize};

use crate::core::ChartLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartStyle, Color};

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field has a default, so a
/// partial JSON document only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Y-axis and X-axis margins.
    #[must_use]
    pub fn with_margins(mut self, left_margin_px: f64, bottom_margin_px: f64) -> Self {
        self.layout.left_margin_px = left_margin_px;
        self.layout.bottom_margin_px = bottom_margin_px;
        self
    }

    /// Sets the number of Y-axis tick intervals.
    #[must_use]
    pub fn with_tick_divisions(mut self, tick_divisions: usize) -> Self {
        self.layout.tick_divisions = tick_divisions;
        self
    }

    /// Sets the tooltip offset relative to the tap location.
    #[must_use]
    pub fn with_tooltip_offset(mut self, dx_px: f64, dy_px: f64) -> Self {
        self.layout.tooltip_offset_x_px = dx_px;
        self.layout.tooltip_offset_y_px = dy_px;
        self
    }

    #[must_use]
    pub fn with_series_color(mut self, color: Color) -> Self {
        self.style.series_color = color;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius_px: f64) -> Self {
        self.style.marker_radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        let layout = self.layout;
        for (name, value) in [
            ("left_margin_px", layout.left_margin_px),
            ("bottom_margin_px", layout.bottom_margin_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !layout.tooltip_offset_x_px.is_finite() || !layout.tooltip_offset_y_px.is_finite() {
            return Err(ChartError::InvalidLayout(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        if layout.tick_divisions == 0 {
            return Err(ChartError::InvalidLayout(
                "`tick_divisions` must be > 0".to_owned(),
            ));
        }

        self.style.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
