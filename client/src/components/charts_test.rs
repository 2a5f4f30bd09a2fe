use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn bars_scale_to_the_largest_value() {
    let bars = bar_layout(&[10.0, 5.0, 0.0], 300.0, 100.0);
    assert_eq!(bars.len(), 3);
    assert!(close(bars[0].height, 100.0));
    assert!(close(bars[0].y, 0.0));
    assert!(close(bars[1].height, 50.0));
    assert!(close(bars[2].height, 0.0));
    assert!(close(bars[2].y, 100.0));
    assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
}

#[test]
fn bars_stay_inside_width() {
    let bars = bar_layout(&[1.0; 10], 600.0, 100.0);
    for bar in bars {
        assert!(bar.x >= 0.0);
        assert!(bar.x + bar.width <= 600.0 + 1e-9);
    }
}

#[test]
fn all_zero_values_draw_flat() {
    let bars = bar_layout(&[0.0, 0.0], 100.0, 50.0);
    assert!(bars.iter().all(|bar| close(bar.height, 0.0)));
    assert!(bar_layout(&[], 100.0, 50.0).is_empty());
}

#[test]
fn line_points_span_full_width() {
    let points = line_points(&[1.0, 2.0, 4.0], 200.0, 100.0);
    assert!(close(points[0].0, 0.0));
    assert!(close(points[2].0, 200.0));
    assert!(close(points[2].1, 0.0));
    assert!(close(points[0].1, 75.0));
}

#[test]
fn single_line_point_is_centred() {
    let points = line_points(&[3.0], 200.0, 100.0);
    assert_eq!(points.len(), 1);
    assert!(close(points[0].0, 100.0));
}

#[test]
fn polyline_formats_pairs() {
    assert_eq!(polyline(&[(0.0, 10.0), (5.26, 2.0)]), "0.0,10.0 5.3,2.0");
}

#[test]
fn pie_slices_cover_the_circle() {
    let slices = pie_slices(&[1.0, 1.0, 2.0]);
    assert_eq!(slices.len(), 3);
    assert!(close(slices[0].start, 0.0));
    assert!(close(slices[1].start, slices[0].end));
    assert!(close(slices[2].end, TAU));
    assert!(close(slices[2].end - slices[2].start, std::f64::consts::PI));
}

#[test]
fn pie_without_positive_values_is_empty() {
    assert!(pie_slices(&[]).is_empty());
    assert!(pie_slices(&[0.0, -1.0]).is_empty());
}

#[test]
fn arc_path_uses_large_arc_flag_past_half() {
    let small = arc_path(50.0, 50.0, 10.0, Slice { start: 0.0, end: 1.0 });
    assert!(small.contains(" 0 0 1 "));
    let large = arc_path(50.0, 50.0, 10.0, Slice { start: 0.0, end: 4.0 });
    assert!(large.contains(" 0 1 1 "));
}

#[test]
fn full_slice_draws_a_circle() {
    let path = arc_path(50.0, 50.0, 10.0, Slice { start: 0.0, end: TAU });
    assert!(path.starts_with("M 50.00 40.00"));
    assert_eq!(path.matches(" A ").count(), 2);
}

#[test]
fn palette_has_eight_colours() {
    assert_eq!(COLORS.len(), 8);
}
