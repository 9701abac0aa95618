use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and stroke metrics of the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Shift from a tick's pixel row down to its label baseline.
    #[serde(default = "default_label_baseline_offset_px")]
    pub label_baseline_offset_px: f64,
    #[serde(default = "default_series_color")]
    pub series_color: Color,
    #[serde(default = "default_series_stroke_width")]
    pub series_stroke_width: f64,
    #[serde(default = "default_marker_color")]
    pub marker_color: Color,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: default_axis_color(),
            axis_stroke_width: default_axis_stroke_width(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
            label_baseline_offset_px: default_label_baseline_offset_px(),
            series_color: default_series_color(),
            series_stroke_width: default_series_stroke_width(),
            marker_color: default_marker_color(),
            marker_radius_px: default_marker_radius_px(),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("label_font_size_px", self.label_font_size_px),
            ("series_stroke_width", self.series_stroke_width),
            ("marker_radius_px", self.marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.label_baseline_offset_px.is_finite() {
            return Err(ChartError::InvalidLayout(
                "`label_baseline_offset_px` must be finite".to_owned(),
            ));
        }

        self.axis_color.validate()?;
        self.label_color.validate()?;
        self.series_color.validate()?;
        self.marker_color.validate()
    }
}

fn default_axis_color() -> Color {
    Color::from_rgb8(0x88, 0x88, 0x88)
}

fn default_axis_stroke_width() -> f64 {
    2.0
}

fn default_label_color() -> Color {
    Color::from_rgb8(0x44, 0x44, 0x44)
}

fn default_label_font_size_px() -> f64 {
    28.0
}

fn default_label_baseline_offset_px() -> f64 {
    5.0
}

fn default_series_color() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

fn default_series_stroke_width() -> f64 {
    4.0
}

fn default_marker_color() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

fn default_marker_radius_px() -> f64 {
    10.0
}
