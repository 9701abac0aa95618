use crate::core::{PixelPoint, SeriesProjection, format_tick_label};
use crate::interaction::ChartSelection;
use crate::render::{ChartStyle, CirclePrimitive, LinePrimitive, RenderFrame, TextPrimitive};

/// Materializes one projection into draw commands.
///
/// Line order is Y axis, X axis, then the series segments. An empty
/// projection produces an empty frame.
#[must_use]
pub fn build_chart_frame(
    projection: &SeriesProjection,
    selection: ChartSelection,
    style: ChartStyle,
) -> RenderFrame {
    let viewport = projection.viewport();
    let mut frame = RenderFrame::new(viewport);
    if projection.is_empty() {
        return frame;
    }

    let layout = projection.layout();
    let left = layout.left_margin_px;
    let baseline = layout.baseline_y(viewport);

    frame.lines.push(LinePrimitive::new(
        PixelPoint::new(left, 0.0),
        PixelPoint::new(left, viewport.height),
        style.axis_stroke_width,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        PixelPoint::new(left, baseline),
        PixelPoint::new(viewport.width, baseline),
        style.axis_stroke_width,
        style.axis_color,
    ));

    frame.texts.extend(projection.ticks().iter().map(|tick| {
        TextPrimitive::new(
            format_tick_label(tick.value),
            PixelPoint::new(0.0, tick.y + style.label_baseline_offset_px),
            style.label_font_size_px,
            style.label_color,
        )
    }));

    frame.lines.extend(projection.points().windows(2).map(|pair| {
        LinePrimitive::new(
            pair[0],
            pair[1],
            style.series_stroke_width,
            style.series_color,
        )
        .with_round_caps()
    }));

    if let Some(picked) = selection.resolve(projection) {
        frame.circles.push(CirclePrimitive::new(
            picked.point,
            style.marker_radius_px,
            style.marker_color,
        ));
    }

    frame
}
