use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::{ChartLayout, Viewport};

/// Inclusive value bounds of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn of(series: &[f64]) -> Option<Self> {
        let min = series.iter().copied().map(OrderedFloat).min()?;
        let max = series.iter().copied().map(OrderedFloat).max()?;
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    /// Distance between the bounds; overflows to infinity when the bounds sit
    /// near opposite ends of the `f64` range.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Half of [`Self::span`], finite for any finite bounds.
    #[must_use]
    pub fn half_span(self) -> f64 {
        self.max * 0.5 - self.min * 0.5
    }

    /// All samples share one value, so there is no span to scale over.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Value at fraction `t` of the way from `min` to `max`, kept inside the
    /// bounds.
    #[must_use]
    pub fn lerp(self, t: f64) -> f64 {
        (self.min * (1.0 - t) + self.max * t).clamp(self.min, self.max)
    }
}

/// Vertical value-to-pixel mapping with an upward-growing value axis.
///
/// Offsets are taken on halved operands so `max - min` never has to be formed
/// directly; it overflows for bounds near opposite ends of the `f64` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    range: ValueRange,
    pixels_per_half_unit: f64,
    baseline_y: f64,
}

impl ValueScale {
    /// Stretches `range` over the plot height.
    ///
    /// A degenerate range falls back to one pixel per unit, which collapses
    /// every sample onto the baseline instead of dividing by zero. The same
    /// fallback applies when the span is too narrow to scale without overflow.
    #[must_use]
    pub fn new(range: ValueRange, layout: ChartLayout, viewport: Viewport) -> Self {
        let stretched = layout.plot_height(viewport) / range.half_span();
        let pixels_per_half_unit = if range.is_degenerate() || !stretched.is_finite() {
            2.0
        } else {
            stretched
        };

        Self {
            range,
            pixels_per_half_unit,
            baseline_y: layout.baseline_y(viewport),
        }
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        self.pixels_per_half_unit * 0.5
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let half_offset = value * 0.5 - self.range.min * 0.5;
        self.baseline_y - half_offset * self.pixels_per_half_unit
    }
}

/// Horizontal index-to-pixel mapping: samples are spread evenly across the
/// plot width, first sample on the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScale {
    left_px: f64,
    step_px: f64,
    len: usize,
}

impl IndexScale {
    #[must_use]
    pub fn new(len: usize, layout: ChartLayout, viewport: Viewport) -> Self {
        // One segment minimum so a lone sample sits on the left margin.
        let segments = len.saturating_sub(1).max(1);
        Self {
            left_px: layout.left_margin_px,
            step_px: layout.plot_width(viewport) / segments as f64,
            len,
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Horizontal distance between adjacent samples.
    #[must_use]
    pub fn step_px(self) -> f64 {
        self.step_px
    }

    #[must_use]
    pub fn index_to_pixel(self, index: usize) -> f64 {
        self.left_px + index as f64 * self.step_px
    }

    /// Inverts [`Self::index_to_pixel`] to the nearest index, clamped into the
    /// series.
    ///
    /// Ties round half away from zero (`f64::round`). Only negative ties could
    /// differ from round-half-up, and those clamp to index 0 either way.
    #[must_use]
    pub fn nearest_index(self, pixel_x: f64) -> Option<usize> {
        let last = self.len.checked_sub(1)?;
        let raw = ((pixel_x - self.left_px) / self.step_px).round();
        if raw.is_nan() {
            return Some(0);
        }
        Some(raw.clamp(0.0, last as f64) as usize)
    }
}
