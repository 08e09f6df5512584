// File: crates/chart-core/src/series.rs
// Summary: Labelled XY line series with optional point markers.
// Notes:
// - Points are drawn in the order given; nothing here sorts by x.
// - Non-finite y values break the line and get no marker.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
    /// Explicit stroke color; `None` takes the theme palette entry for the series index.
    pub color: Option<skia::Color>,
    pub stroke_width: f32,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, marker: Marker::None, color: None, stroke_width: 2.0 }
    }

    /// Pair two equal-length columns into points, in row order.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::line(label, data)
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Consecutive point pairs that form a drawable segment.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.data_xy.windows(2).filter_map(|w| {
            let (a, b) = (w[0], w[1]);
            let ok = a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite();
            ok.then_some((a, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_splits_segments() {
        let s = Series::line("s", vec![(1.0, 3.0), (2.0, f64::NAN), (4.0, 1.0), (8.0, 0.5)]);
        assert_eq!(s.segments().count(), 1);
        assert_eq!(s.finite_points().count(), 3);
    }

    #[test]
    fn columns_keep_row_order() {
        let s = Series::from_columns("s", &[4.0, 1.0, 2.0], &[10.0, 30.0, 20.0]);
        assert_eq!(s.data_xy, vec![(4.0, 10.0), (1.0, 30.0), (2.0, 20.0)]);
        assert_eq!(s.marker, Marker::None);
    }
}
