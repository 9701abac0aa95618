use hawk_chart::core::{ChartLayout, PixelPoint, Viewport, project_series};
use proptest::prelude::*;

proptest! {
    #[test]
    fn projected_point_count_matches_series(
        series in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 0..256),
        width in 64.0f64..2_048.0,
        height in 64.0f64..1_024.0
    ) {
        let projection = project_series(&series, Viewport::new(width, height), ChartLayout::default());

        prop_assert_eq!(projection.len(), series.len());
        for point in projection.points() {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y.is_finite());
        }
        if series.is_empty() {
            prop_assert!(projection.ticks().is_empty());
        } else {
            prop_assert_eq!(projection.ticks().len(), 6);
            prop_assert!(projection.ticks().iter().all(|tick| tick.y.is_finite()));
        }
    }

    #[test]
    fn any_normal_series_projects_to_finite_geometry(
        series in proptest::collection::vec(proptest::num::f64::NORMAL, 1..64),
        width in 64.0f64..2_048.0,
        height in 64.0f64..1_024.0
    ) {
        let projection = project_series(&series, Viewport::new(width, height), ChartLayout::default());

        prop_assert_eq!(projection.len(), series.len());
        for point in projection.points() {
            prop_assert!(point.x.is_finite(), "x = {}", point.x);
            prop_assert!(point.y.is_finite(), "y = {}", point.y);
        }
        prop_assert_eq!(projection.ticks().len(), 6);
        for tick in projection.ticks() {
            prop_assert!(tick.value.is_finite(), "tick value = {}", tick.value);
            prop_assert!(tick.y.is_finite(), "tick y = {}", tick.y);
        }
    }

    #[test]
    fn pick_index_is_always_inside_the_series(
        series in proptest::collection::vec(-1_000.0f64..1_000.0, 1..128),
        tap_x in -1.0e7f64..1.0e7,
        tap_y in -1.0e7f64..1.0e7
    ) {
        let projection = project_series(&series, Viewport::new(411.0, 180.0), ChartLayout::default());

        let picked = projection.pick(PixelPoint::new(tap_x, tap_y)).expect("non-empty series");
        prop_assert!(picked.index < series.len());
        prop_assert_eq!(picked.point, projection.points()[picked.index]);
    }

    #[test]
    fn tapping_a_projected_point_picks_it(
        series in proptest::collection::vec(-1_000.0f64..1_000.0, 1..128),
        width in 64.0f64..2_048.0
    ) {
        let projection = project_series(&series, Viewport::new(width, 240.0), ChartLayout::default());

        for (index, point) in projection.points().iter().enumerate() {
            let picked = projection.pick(*point).expect("non-empty series");
            prop_assert_eq!(picked.index, index);
        }
    }

    #[test]
    fn larger_values_never_plot_lower(
        series in proptest::collection::vec(-1_000.0f64..1_000.0, 2..64)
    ) {
        let projection = project_series(&series, Viewport::new(640.0, 320.0), ChartLayout::default());
        let points = projection.points();

        for i in 0..series.len() {
            for j in 0..series.len() {
                if series[i] > series[j] {
                    prop_assert!(points[i].y <= points[j].y);
                }
            }
        }
    }

    #[test]
    fn repeated_projection_is_bit_identical(
        series in proptest::collection::vec(-1_000.0f64..1_000.0, 0..64),
        width in 64.0f64..2_048.0,
        height in 64.0f64..1_024.0
    ) {
        let viewport = Viewport::new(width, height);
        let first = project_series(&series, viewport, ChartLayout::default());
        let second = project_series(&series, viewport, ChartLayout::default());

        for (a, b) in first.points().iter().zip(second.points()) {
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
        prop_assert_eq!(first, second);
    }
}
