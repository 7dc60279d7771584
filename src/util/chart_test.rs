use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// nice_step
// =============================================================

#[test]
fn nice_step_rounds_up_to_one_two_five() {
    assert!(approx(nice_step(19.0, 5), 5.0));
    assert!(approx(nice_step(10.0, 5), 2.0));
    assert!(approx(nice_step(4.0, 5), 1.0));
    assert!(approx(nice_step(700.0, 5), 200.0));
}

#[test]
fn nice_step_degenerate_range_is_one() {
    assert!(approx(nice_step(0.0, 5), 1.0));
    assert!(approx(nice_step(-3.0, 5), 1.0));
    assert!(approx(nice_step(f64::NAN, 5), 1.0));
    assert!(approx(nice_step(10.0, 0), 1.0));
}

// =============================================================
// layout
// =============================================================

#[test]
fn engagement_layout_scales_to_twenty() {
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, PlotArea::default());
    assert!(approx(geometry.y_max, 20.0));
    let labels: Vec<&str> = geometry.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);
}

#[test]
fn engagement_layout_spans_plot_width() {
    let area = PlotArea::default();
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, area);
    assert_eq!(geometry.points.len(), 6);
    assert!(approx(geometry.points[0].x, area.left()));
    assert!(approx(geometry.points[5].x, area.right()));
    assert_eq!(geometry.x_ticks.len(), 6);
    assert_eq!(geometry.x_ticks[0].label, "Jan");
    assert_eq!(geometry.x_ticks[5].label, "Jun");
}

#[test]
fn higher_values_are_drawn_higher() {
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, PlotArea::default());
    // Feb (19) sits above Jan (12), which sits above Mar (3).
    assert!(geometry.points[1].y < geometry.points[0].y);
    assert!(geometry.points[0].y < geometry.points[2].y);
}

#[test]
fn zero_tick_sits_on_bottom_edge() {
    let area = PlotArea::default();
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, area);
    assert!(approx(geometry.y_ticks[0].pos, area.bottom()));
    assert!(approx(geometry.y_ticks.last().map_or(0.0, |t| t.pos), area.top()));
}

#[test]
fn single_point_is_centered() {
    const ONE: Series = Series { label: "one", values: &[4.0], stroke: "#000", fill: "none", tension: 0.4 };
    let area = PlotArea::default();
    let geometry = layout(&ONE, &["Only"], area);
    assert!(approx(geometry.points[0].x, (area.left() + area.right()) / 2.0));
    assert!(!geometry.line_path.contains(" C "));
}

#[test]
fn empty_series_has_no_paths() {
    const EMPTY: Series = Series { label: "empty", values: &[], stroke: "#000", fill: "none", tension: 0.4 };
    let geometry = layout(&EMPTY, &[], PlotArea::default());
    assert!(geometry.points.is_empty());
    assert!(geometry.line_path.is_empty());
    assert!(geometry.area_path.is_empty());
    assert!(approx(geometry.y_max, 1.0));
}

// =============================================================
// smoothing
// =============================================================

#[test]
fn smooth_path_has_one_segment_per_gap() {
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, PlotArea::default());
    assert!(geometry.line_path.starts_with("M "));
    assert_eq!(geometry.line_path.matches(" C ").count(), 5);
    assert!(geometry.area_path.starts_with(&geometry.line_path));
    assert!(geometry.area_path.ends_with(" Z"));
}

#[test]
fn zero_tension_puts_controls_on_points() {
    let points = [Point { x: 60.0, y: 100.0 }, Point { x: 120.0, y: 50.0 }, Point { x: 180.0, y: 200.0 }];
    for ((before, after), p) in control_points(&points, 0.0, PlotArea::default()).into_iter().zip(points) {
        assert_eq!(before, p);
        assert_eq!(after, p);
    }
}

#[test]
fn control_points_stay_inside_plot_area() {
    let area = PlotArea::default();
    let geometry = layout(&ENGAGEMENT_SERIES, &ENGAGEMENT_LABELS, area);
    for (before, after) in control_points(&geometry.points, 0.4, area) {
        for c in [before, after] {
            assert!(c.x >= area.left() && c.x <= area.right());
            assert!(c.y >= area.top() && c.y <= area.bottom());
        }
    }
}

#[test]
fn endpoint_handles_collapse_outward() {
    let points = [Point { x: 60.0, y: 100.0 }, Point { x: 120.0, y: 100.0 }];
    let controls = control_points(&points, 0.4, PlotArea::default());
    assert_eq!(controls[0].0, points[0]);
    assert_eq!(controls[1].1, points[1]);
}
