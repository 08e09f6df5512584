// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several line series, including gaps and degenerate ranges.

use chart_core::{Chart, Series};

#[test]
fn autoscale_spans_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(1.0, 100.0), (2.0, 60.0), (4.0, 35.0)]));
    chart.add_series(Series::line("b", vec![(1.0, 250.0), (8.0, 20.0)]));

    chart.autoscale_axes(0.0);

    assert!((chart.x_axis.min - 1.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 8.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 20.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 250.0).abs() < 1e-9);
}

#[test]
fn autoscale_pads_by_margin() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(0.0, 0.0), (10.0, 20.0)]));

    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 10.5).abs() < 1e-9);
    assert!((chart.y_axis.min + 1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 21.0).abs() < 1e-9);
}

#[test]
fn autoscale_ignores_gaps() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(1.0, 5.0), (2.0, f64::NAN), (3.0, 7.0)]));

    chart.autoscale_axes(0.0);

    assert!((chart.y_axis.min - 5.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 7.0).abs() < 1e-9);
}

#[test]
fn single_point_gets_unit_window() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(4.0, 35.0)]));

    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min - 3.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 4.5).abs() < 1e-9);
    assert!(chart.y_axis.min < 35.0 && chart.y_axis.max > 35.0);
}

#[test]
fn empty_chart_falls_back_to_unit_square() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}
