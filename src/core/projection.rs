use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::scale::{IndexScale, ValueRange, ValueScale};
use crate::core::types::{ChartLayout, PixelPoint, Viewport};
use crate::interaction::PickResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One Y-axis label value and the pixel row it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
}

/// Ticks for the default layout fit inline.
pub type AxisTicks = SmallVec<[AxisTick; 6]>;

/// Render-ready geometry of one series in one viewport.
///
/// Rendering and picking both read from the same projection so the marker a
/// tap selects is always drawn exactly on the line.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesProjection {
    viewport: Viewport,
    layout: ChartLayout,
    values: Vec<f64>,
    points: Vec<PixelPoint>,
    ticks: AxisTicks,
    range: Option<ValueRange>,
    index_scale: IndexScale,
}

impl SeriesProjection {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One pixel point per series sample, in series order.
    #[must_use]
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// Value bounds, `None` for an empty series.
    #[must_use]
    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    #[must_use]
    pub fn step_px(&self) -> f64 {
        self.index_scale.step_px()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adjacent point pairs forming the polyline.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.points
            .windows(2)
            .map(|pair| LineSegment {
                x1: pair[0].x,
                y1: pair[0].y,
                x2: pair[1].x,
                y2: pair[1].y,
            })
            .collect()
    }

    /// Resolves a tap to the nearest sample by horizontal distance.
    ///
    /// Taps outside the plot clamp to the first or last sample. Returns `None`
    /// only when the series is empty.
    #[must_use]
    pub fn pick(&self, tap: PixelPoint) -> Option<PickResult> {
        let index = self.index_scale.nearest_index(tap.x)?;
        self.pick_at(index, Some(tap))
    }

    /// Builds the pick result for a known index.
    ///
    /// The tooltip anchor follows `tap` when given, otherwise the sample point.
    #[must_use]
    pub fn pick_at(&self, index: usize, tap: Option<PixelPoint>) -> Option<PickResult> {
        let point = *self.points.get(index)?;
        let value = *self.values.get(index)?;
        let tooltip_anchor = tap
            .unwrap_or(point)
            .offset_by(self.layout.tooltip_offset_x_px, self.layout.tooltip_offset_y_px);
        Some(PickResult {
            index,
            value,
            point,
            tooltip_anchor,
        })
    }
}

/// Projects a series into pixel space.
///
/// The function is deterministic and side-effect free. An empty series yields
/// an empty projection without touching the scales; a single sample lands on
/// the left margin; a constant series lies flat on the baseline. Every finite
/// series yields finite points and ticks.
///
/// The viewport is expected to exceed the layout margins (see
/// [`ChartLayout::fits`]); smaller viewports still project without failing,
/// but points may overlap or plot inverted.
#[must_use]
pub fn project_series(series: &[f64], viewport: Viewport, layout: ChartLayout) -> SeriesProjection {
    let index_scale = IndexScale::new(series.len(), layout, viewport);
    let Some(range) = ValueRange::of(series) else {
        trace!("project empty series");
        return SeriesProjection {
            viewport,
            layout,
            values: Vec::new(),
            points: Vec::new(),
            ticks: AxisTicks::new(),
            range: None,
            index_scale,
        };
    };

    let value_scale = ValueScale::new(range, layout, viewport);
    let points = series
        .iter()
        .enumerate()
        .map(|(index, value)| {
            PixelPoint::new(
                index_scale.index_to_pixel(index),
                value_scale.value_to_pixel(*value),
            )
        })
        .collect();

    let divisions = layout.tick_divisions.max(1);
    let ticks = (0..=divisions)
        .map(|i| {
            let value = range.lerp(i as f64 / divisions as f64);
            AxisTick {
                value,
                y: value_scale.value_to_pixel(value),
            }
        })
        .collect();

    trace!(
        len = series.len(),
        min = range.min,
        max = range.max,
        degenerate = range.is_degenerate(),
        "project series"
    );

    SeriesProjection {
        viewport,
        layout,
        values: series.to_vec(),
        points,
        ticks,
        range: Some(range),
        index_scale,
    }
}

/// Projects `series` and resolves `tap` against it in one call.
///
/// Hosts that already hold a projection for the current frame should call
/// [`SeriesProjection::pick`] instead.
#[must_use]
pub fn pick_nearest(
    tap: PixelPoint,
    series: &[f64],
    viewport: Viewport,
    layout: ChartLayout,
) -> Option<PickResult> {
    project_series(series, viewport, layout).pick(tap)
}
