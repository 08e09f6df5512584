// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors plus the categorical series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

// Ten-color categorical cycle (blue, orange, green, red, purple, brown, pink, gray, olive, cyan).
fn category10() -> [skia::Color; 10] {
    [
        skia::Color::from_rgb(0x1f, 0x77, 0xb4),
        skia::Color::from_rgb(0xff, 0x7f, 0x0e),
        skia::Color::from_rgb(0x2c, 0xa0, 0x2c),
        skia::Color::from_rgb(0xd6, 0x27, 0x28),
        skia::Color::from_rgb(0x94, 0x67, 0xbd),
        skia::Color::from_rgb(0x8c, 0x56, 0x4b),
        skia::Color::from_rgb(0xe3, 0x77, 0xc2),
        skia::Color::from_rgb(0x7f, 0x7f, 0x7f),
        skia::Color::from_rgb(0xbc, 0xbd, 0x22),
        skia::Color::from_rgb(0x17, 0xbe, 0xcf),
    ]
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: category10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: category10(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0xff, 0x80, 0x00),
                skia::Color::from_argb(255, 0x80, 0x80, 0xff),
                skia::Color::from_argb(255, 0xff, 0x40, 0x40),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
                skia::Color::from_argb(255, 0x80, 0xff, 0x80),
                skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            ],
        }
    }

    /// Palette color for the `index`-th series, cycling past the end.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), t.series_color(10));
        assert_ne!(t.series_color(0), t.series_color(1));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("DARK").map(|t| t.name), Some("dark"));
        assert!(find("sepia").is_none());
    }
}
