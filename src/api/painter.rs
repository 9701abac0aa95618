use tracing::debug;

use crate::core::{ChartLayout, SeriesProjection, Viewport, project_series};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ChartSelection;
use crate::render::{Renderer, build_chart_frame};

use super::ChartConfig;

/// Draws trend charts into a rendering backend.
///
/// The painter owns only its collaborators: series, viewport and selection
/// arrive with every call, so one painter can serve any number of charts.
#[derive(Debug)]
pub struct ChartPainter<R: Renderer> {
    renderer: R,
    config: ChartConfig,
}

impl<R: Renderer> ChartPainter<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Projects `series` without drawing it.
    ///
    /// Viewports that do not leave room for the plot after the layout margins
    /// are rejected.
    pub fn project(&self, series: &[f64], viewport: Viewport) -> ChartResult<SeriesProjection> {
        ensure_viewport(viewport, self.config.layout)?;
        Ok(project_series(series, viewport, self.config.layout))
    }

    /// Runs one draw pass and returns the projection it drew.
    ///
    /// Hand the returned projection to [`ChartSelection::on_tap`] so taps
    /// resolve against exactly the geometry on screen.
    pub fn paint(
        &mut self,
        series: &[f64],
        viewport: Viewport,
        selection: ChartSelection,
    ) -> ChartResult<SeriesProjection> {
        let projection = self.project(series, viewport)?;
        let frame = build_chart_frame(&projection, selection, self.config.style);
        debug!(
            points = projection.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            selected = selection.index(),
            "paint chart"
        );
        self.renderer.render(&frame)?;
        Ok(projection)
    }
}

fn ensure_viewport(viewport: Viewport, layout: ChartLayout) -> ChartResult<()> {
    if layout.fits(viewport) {
        Ok(())
    } else {
        Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
