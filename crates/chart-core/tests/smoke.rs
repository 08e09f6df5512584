// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Chart, Marker, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.title = "Smoke".into();
    chart.show_grid = true;
    chart.show_legend = true;
    chart.x_axis.label = "workers".into();
    chart.y_axis.label = "time,ms".into();
    chart.add_series(
        Series::line("a", vec![(1.0, 100.0), (2.0, 60.0), (4.0, 35.0), (8.0, 30.0)]).with_marker(Marker::Circle),
    );
    chart.add_series(
        Series::line("b", vec![(1.0, 80.0), (2.0, 70.0), (4.0, 50.0), (8.0, 45.0)]).with_marker(Marker::Circle),
    );
    chart.autoscale_axes(0.05);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (800, 600));
}

#[test]
fn render_is_deterministic() {
    let mut chart = Chart::new();
    chart.title = "Experiments".into();
    chart.show_legend = true;
    chart.add_series(Series::line("a", vec![(1.0, 3.0), (2.0, 1.0)]).with_marker(Marker::Circle));
    chart.autoscale_axes(0.05);

    let opts = RenderOptions::default();
    let first = chart.render_to_png_bytes(&opts).expect("first render");
    let second = chart.render_to_png_bytes(&opts).expect("second render");
    assert_eq!(first, second);
}
