// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DPI, HEIGHT, LABEL_FONT_PX, TICK_FONT_PX, TITLE_FONT_PX, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const MAX_TICKS: usize = 8;
const TICK_LEN: f32 = 4.0;
const MARKER_RADIUS: f32 = 4.0;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_ROW: f32 = 20.0;
const LEGEND_SWATCH: f32 = 28.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn at all (titles, labels, ticks, legend text).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Options for a figure measured in inches at `dpi` pixels per inch.
    pub fn figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        let dpi = if dpi > 0.0 { dpi } else { DPI };
        Self {
            width: (width_in * dpi).round() as i32,
            height: (height_in * dpi).round() as i32,
            ..Self::default()
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: false,
            show_legend: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padded by `margin` of the span on each side.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Legend labels in draw order.
    pub fn legend_entries(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    fn color_of(&self, index: usize, theme: &Theme) -> skia::Color {
        self.series[index].color.unwrap_or_else(|| theme.series_color(index))
    }

    /// Render into a tightly packed RGBA8 buffer: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        if plot.is_empty() {
            bail!("insets {:?} leave no plot area on a {}x{} surface", opts.insets, opts.width, opts.height);
        }

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.draw(surface.canvas(), opts, plot, shaper.as_ref());

        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            bail!("failed to read back raster surface");
        }
        Ok((px, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, px)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// Nothing is written unless encoding succeeded.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, plot: RectI32, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let map = Mapping { rect: plot, x: &self.x_axis, y: &self.y_axis };
        let x_ticks = Ticks::for_axis(&self.x_axis);
        let y_ticks = Ticks::for_axis(&self.y_axis);

        if self.show_grid {
            draw_grid(canvas, &map, &x_ticks, &y_ticks, theme);
        }
        draw_axes(canvas, &map, &x_ticks, &y_ticks, theme, shaper);

        canvas.save();
        canvas.clip_rect(to_rect(plot), None, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &map, s, self.color_of(i, theme));
        }
        canvas.restore();

        if let Some(shaper) = shaper {
            draw_titles(canvas, opts, plot, &self.title, &self.x_axis.label, &self.y_axis.label, shaper);
        }
        if self.show_legend && !self.series.is_empty() {
            draw_legend(canvas, self, plot, theme, shaper);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

struct Mapping<'a> {
    rect: RectI32,
    x: &'a Axis,
    y: &'a Axis,
}

impl Mapping<'_> {
    fn sx(&self, x: f64) -> f32 {
        self.rect.left as f32 + ((x - self.x.min) / self.x.span()) as f32 * self.rect.width() as f32
    }
    fn sy(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - ((y - self.y.min) / self.y.span()) as f32 * self.rect.height() as f32
    }
}

struct Ticks {
    values: Vec<f64>,
    step: f64,
}

impl Ticks {
    fn for_axis(axis: &Axis) -> Self {
        Self {
            values: nice_ticks(axis.min, axis.max, MAX_TICKS),
            step: nice_step(axis.max - axis.min, MAX_TICKS),
        }
    }
}

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, map: &Mapping<'_>, xt: &Ticks, yt: &Ticks, theme: &Theme) {
    let paint = stroke(theme.grid, 0.8);
    let r = map.rect;
    for &x in &xt.values {
        let px = map.sx(x);
        canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
    }
    for &y in &yt.values {
        let py = map.sy(y);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    map: &Mapping<'_>,
    xt: &Ticks,
    yt: &Ticks,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let r = map.rect;
    canvas.draw_rect(to_rect(r), &stroke(theme.axis_line, 1.0));

    let tick_paint = stroke(theme.tick, 1.0);
    for &x in &xt.values {
        let px = map.sx(x);
        canvas.draw_line((px, r.bottom as f32), (px, r.bottom as f32 + TICK_LEN), &tick_paint);
        if let Some(sh) = shaper {
            let label = format_tick(x, xt.step);
            sh.draw_centered(canvas, &label, px, r.bottom as f32 + TICK_LEN + TICK_FONT_PX + 2.0, TICK_FONT_PX, theme.tick);
        }
    }
    for &y in &yt.values {
        let py = map.sy(y);
        canvas.draw_line((r.left as f32 - TICK_LEN, py), (r.left as f32, py), &tick_paint);
        if let Some(sh) = shaper {
            let label = format_tick(y, yt.step);
            sh.draw_right(canvas, &label, r.left as f32 - TICK_LEN - 3.0, py + TICK_FONT_PX * 0.35, TICK_FONT_PX, theme.tick);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, map: &Mapping<'_>, series: &Series, color: skia::Color) {
    let line = stroke(color, series.stroke_width);
    for ((x0, y0), (x1, y1)) in series.segments() {
        canvas.draw_line((map.sx(x0), map.sy(y0)), (map.sx(x1), map.sy(y1)), &line);
    }
    if series.marker == Marker::Circle {
        let dot = fill(color);
        for (x, y) in series.finite_points() {
            canvas.draw_circle((map.sx(x), map.sy(y)), MARKER_RADIUS, &dot);
        }
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    plot: RectI32,
    title: &str,
    x_label: &str,
    y_label: &str,
    shaper: &TextShaper,
) {
    let theme = &opts.theme;
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, plot.center_x(), plot.top as f32 - 12.0, TITLE_FONT_PX, theme.title);
    }
    if !x_label.is_empty() {
        shaper.draw_centered(canvas, x_label, plot.center_x(), opts.height as f32 - 14.0, LABEL_FONT_PX, theme.axis_label);
    }
    if !y_label.is_empty() {
        // rotate so the label reads bottom-to-top along the left edge
        canvas.save();
        canvas.translate((LABEL_FONT_PX + 8.0, plot.center_y()));
        canvas.rotate(-90.0, None);
        shaper.draw_centered(canvas, y_label, 0.0, 0.0, LABEL_FONT_PX, theme.axis_label);
        canvas.restore();
    }
}

fn draw_legend(canvas: &skia::Canvas, chart: &Chart, plot: RectI32, theme: &Theme, shaper: Option<&TextShaper>) {
    let labels = chart.legend_entries();
    let text_w = shaper
        .map(|sh| labels.iter().map(|l| sh.measure_width(l, TICK_FONT_PX)).fold(0.0_f32, f32::max))
        .unwrap_or(0.0);
    let w = LEGEND_PAD * 3.0 + LEGEND_SWATCH + text_w;
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * labels.len() as f32;

    // upper right corner of the plot area
    let right = plot.right as f32 - LEGEND_PAD;
    let top = plot.top as f32 + LEGEND_PAD;
    let frame = skia::Rect::from_ltrb(right - w, top, right, top + h);
    canvas.draw_rect(frame, &fill(theme.legend_background));
    canvas.draw_rect(frame, &stroke(theme.legend_border, 1.0));

    for (i, s) in chart.series.iter().enumerate() {
        let color = chart.color_of(i, theme);
        let cy = top + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let x0 = frame.left + LEGEND_PAD;
        let x1 = x0 + LEGEND_SWATCH;
        canvas.draw_line((x0, cy), (x1, cy), &stroke(color, s.stroke_width));
        if s.marker == Marker::Circle {
            canvas.draw_circle(((x0 + x1) * 0.5, cy), MARKER_RADIUS, &fill(color));
        }
        if let Some(sh) = shaper {
            sh.draw_left(canvas, &s.label, x1 + LEGEND_PAD, cy + TICK_FONT_PX * 0.35, TICK_FONT_PX, theme.axis_label);
        }
    }
}
