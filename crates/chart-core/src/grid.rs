// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span / max_ticks` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span.abs() / max_ticks.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]`, at most about `max_ticks + 1` of them.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, max_ticks);
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + eps {
            break;
        }
        // snap -0.0 and float dust to a clean zero
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    ticks
}

/// Format a tick with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    while decimals < 6 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        decimals += 1;
    }
    format!("{value:.decimals$}")
}
