use hawk_chart::core::{PixelPoint, Viewport, trailing_window};
use hawk_chart::interaction::ChartSelection;
use hawk_chart::render::NullRenderer;
use hawk_chart::{ChartConfig, ChartError, ChartPainter};

#[test]
fn painter_draws_and_returns_projection() {
    let mut painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");

    let weights = [655.0, 648.5, 642.0, 639.5];
    let projection = painter
        .paint(&weights, Viewport::new(360.0, 180.0), ChartSelection::default())
        .expect("paint");

    assert_eq!(projection.len(), 4);
    let renderer = painter.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 2 + 3);
    assert_eq!(renderer.last_text_count, 6);
    assert_eq!(renderer.last_circle_count, 0);
}

#[test]
fn tap_then_repaint_draws_marker() {
    let mut painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");
    let viewport = Viewport::new(360.0, 180.0);
    let weights = [655.0, 648.5, 642.0, 639.5];
    let mut selection = ChartSelection::default();

    let projection = painter.paint(&weights, viewport, selection).expect("paint");
    let picked = selection
        .on_tap(&projection, PixelPoint::new(350.0, 90.0))
        .expect("pick");
    assert_eq!(picked.index, 3);

    painter.paint(&weights, viewport, selection).expect("repaint");
    let renderer = painter.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_circle_count, 1);
}

#[test]
fn painting_an_empty_series_renders_an_empty_frame() {
    let mut painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");

    let projection = painter
        .paint(&[], Viewport::new(360.0, 180.0), ChartSelection::at_index(0))
        .expect("paint");

    assert!(projection.is_empty());
    assert_eq!(painter.renderer().last_line_count, 0);
    assert_eq!(painter.renderer().last_circle_count, 0);
}

#[test]
fn painter_rejects_invalid_viewport() {
    let mut painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");

    for viewport in [
        Viewport::new(0.0, 180.0),
        Viewport::new(360.0, -1.0),
        Viewport::new(f64::NAN, 180.0),
        // No room left once the 40 px left and 2 x 20 px vertical margins are reserved.
        Viewport::new(40.0, 180.0),
        Viewport::new(360.0, 40.0),
    ] {
        let err = painter
            .paint(&[1.0, 2.0], viewport, ChartSelection::default())
            .expect_err("must fail");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }
    assert_eq!(painter.renderer().frames_rendered, 0);
}

#[test]
fn painter_rejects_invalid_config() {
    let config = ChartConfig::new().with_tick_divisions(0);
    let result = ChartPainter::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidLayout(_))));
}

#[test]
fn painter_projects_long_history_windows() {
    let painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");
    let history: Vec<f64> = (0..400).map(|i| 600.0 + f64::from(i % 37)).collect();

    let projection = painter
        .project(trailing_window(&history, 180), Viewport::new(1080.0, 480.0))
        .expect("project");

    assert_eq!(projection.len(), 180);
    assert!(projection.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert_eq!(painter.renderer().frames_rendered, 0);
}

#[test]
fn painter_draws_series_spanning_the_whole_f64_range() {
    let mut painter =
        ChartPainter::new(NullRenderer::default(), ChartConfig::default()).expect("painter");

    let projection = painter
        .paint(
            &[-f64::MAX, 0.0, f64::MAX],
            Viewport::new(360.0, 180.0),
            ChartSelection::at_index(2),
        )
        .expect("finite geometry");

    assert_eq!(projection.len(), 3);
    assert_eq!(painter.renderer().last_circle_count, 1);
}
