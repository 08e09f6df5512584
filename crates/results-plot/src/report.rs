// File: crates/results-plot/src/report.rs
// Summary: Turns a results table into the worker-scaling chart and writes it as PNG.

use std::path::Path;

use chart_core::{Chart, Marker, RenderOptions, Series, Theme};
use log::debug;

use crate::error::{ReportError, Result};
use crate::table::Table;

/// Columns plotted by default: the sample text plus the three corpus books the benchmark ran on.
pub const DEFAULT_SERIES: [&str; 4] = [
    "sample",
    "Lee_Albany_1884",
    "Woolf_Years_1937",
    "Blackmore_Springhaven_1887",
];

/// What to plot and how the figure looks.
#[derive(Clone, Debug)]
pub struct ReportSpec {
    pub x_column: String,
    /// Plotted columns, in legend order.
    pub series: Vec<String>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    /// Axis padding as a fraction of the data span.
    pub margin: f64,
    pub theme: Theme,
}

impl Default for ReportSpec {
    fn default() -> Self {
        Self {
            x_column: "workers".to_string(),
            series: DEFAULT_SERIES.iter().map(|s| s.to_string()).collect(),
            title: "Experiments".to_string(),
            x_label: "workers".to_string(),
            y_label: "time,ms".to_string(),
            width_in: 8.0,
            height_in: 6.0,
            dpi: 100.0,
            margin: 0.05,
            theme: Theme::default(),
        }
    }
}

impl ReportSpec {
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::figure(self.width_in, self.height_in, self.dpi);
        opts.theme = self.theme;
        opts
    }
}

/// Resolve every column first, then assemble the chart.
/// The first missing column, x column first, is the one reported.
pub fn build_chart(table: &Table, spec: &ReportSpec) -> Result<Chart> {
    let xs = table.column(&spec.x_column)?;
    let ys = spec
        .series
        .iter()
        .map(|name| table.column(name).map(|col| (name, col)))
        .collect::<Result<Vec<_>>>()?;

    let mut chart = Chart::new();
    chart.title = spec.title.clone();
    chart.x_axis.label = spec.x_label.clone();
    chart.y_axis.label = spec.y_label.clone();
    chart.show_grid = true;
    chart.show_legend = true;
    for (name, col) in ys {
        chart.add_series(Series::from_columns(name.as_str(), xs, col).with_marker(Marker::Circle));
    }
    chart.autoscale_axes(spec.margin);
    debug!(
        "Axis ranges: x [{:.3}, {:.3}], y [{:.3}, {:.3}]",
        chart.x_axis.min, chart.x_axis.max, chart.y_axis.min, chart.y_axis.max
    );
    Ok(chart)
}

/// Build and encode the chart entirely in memory.
pub fn render_png(table: &Table, spec: &ReportSpec) -> Result<Vec<u8>> {
    let chart = build_chart(table, spec)?;
    let bytes = chart
        .render_to_png_bytes(&spec.render_options())
        .map_err(ReportError::Render)?;
    debug!("Encoded {} PNG bytes", bytes.len());
    Ok(bytes)
}

/// Render and write to `output`, replacing any existing file.
/// The file is only touched once the image is fully encoded.
pub fn render(table: &Table, spec: &ReportSpec, output: &Path) -> Result<()> {
    let bytes = render_png(table, spec)?;
    let write_err = |source| ReportError::Write { path: output.to_path_buf(), source };
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }
    std::fs::write(output, bytes).map_err(write_err)
}
