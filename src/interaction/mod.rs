use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{PixelPoint, SeriesProjection, tooltip_text};

/// Nearest-sample lookup result used to drive the selection marker and tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickResult {
    pub index: usize,
    pub value: f64,
    /// Projected point of the picked sample, where the marker is drawn.
    pub point: PixelPoint,
    /// Tooltip origin: the raw tap location (or the sample point when no tap
    /// is known) shifted by the layout's tooltip offset.
    pub tooltip_anchor: PixelPoint,
}

/// Tooltip content and placement for the selected sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    pub anchor: PixelPoint,
}

/// Selection held by the host between frames.
///
/// The projection engine keeps no state of its own; hosts store this value
/// next to their widget and hand it back on every render and tap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSelection {
    index: Option<usize>,
    tap: Option<PixelPoint>,
}

impl ChartSelection {
    /// Selection pinned to `index` without a tap location.
    #[must_use]
    pub fn at_index(index: usize) -> Self {
        Self {
            index: Some(index),
            tap: None,
        }
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn tap(self) -> Option<PixelPoint> {
        self.tap
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.index.is_some()
    }

    /// Selects the sample nearest to `tap`.
    ///
    /// Tapping an empty chart clears the selection.
    pub fn on_tap(&mut self, projection: &SeriesProjection, tap: PixelPoint) -> Option<PickResult> {
        match projection.pick(tap) {
            Some(result) => {
                debug!(index = result.index, value = result.value, "select sample");
                self.index = Some(result.index);
                self.tap = Some(tap);
                Some(result)
            }
            None => {
                self.clear();
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.index = None;
        self.tap = None;
    }

    /// Re-resolves the stored selection against a fresh projection.
    ///
    /// Returns `None` when nothing is selected or the selected index no longer
    /// exists in the projected series.
    #[must_use]
    pub fn resolve(self, projection: &SeriesProjection) -> Option<PickResult> {
        let index = self.index?;
        let result = projection.pick_at(index, self.tap);
        if result.is_none() {
            warn!(
                index,
                len = projection.len(),
                "selected index is outside the projected series"
            );
        }
        result
    }

    /// Tooltip for the selected sample.
    ///
    /// `dates` is indexed like the series; a missing entry drops the date from
    /// the text.
    #[must_use]
    pub fn tooltip(
        self,
        projection: &SeriesProjection,
        dates: Option<&[NaiveDate]>,
    ) -> Option<Tooltip> {
        let result = self.resolve(projection)?;
        let date = dates.and_then(|dates| dates.get(result.index)).copied();
        Some(Tooltip {
            text: tooltip_text(result.value, date),
            anchor: result.tooltip_anchor,
        })
    }
}
