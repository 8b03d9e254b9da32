//! FLIM numeric helpers: log/linear axis tick calculation, phasor geometry,
//! histogram quantization and the SBR metric.
//!
//! Everything in here is a pure function over slices; the plot wrapper and
//! the counter widgets call into this module but none of it touches the UI.

use egui::Color32;

use crate::format::format_power_of_ten;

/// Reference lifetimes (seconds) drawn on the universal phasor semicircle.
pub const PHASOR_LIFETIMES: [f64; 12] = [
    0.1e-9, 0.5e-9, 1e-9, 2e-9, 3e-9, 4e-9, 5e-9, 6e-9, 7e-9, 8e-9, 9e-9, 10e-9,
];

/// Ratio between the heterodyne sampling clock and the laser clock.
pub const HETERODYNE_FACTOR: f64 = 255.0 / 256.0;

/// An axis tick: plot-space position plus its label.
pub type Tick = (f64, String);

/// Result of transforming a data set into log10 presentation space.
#[derive(Debug, Clone)]
pub struct LogModeValues {
    /// log10 of the input, with non-positive inputs clamped to 1e-9 before
    /// the transform and negative logs clamped to -0.1 after it.
    pub values: Vec<f64>,
    /// Linearly spaced integer exponents from 0 to `max_exponent`, one per
    /// input sample.
    pub exponents: Vec<i32>,
    /// The largest integer exponent found in the data.
    pub max_exponent: i32,
}

/// Transform `values` into log10 space for display on a log axis.
pub fn calc_log_mode_values(values: &[f64]) -> LogModeValues {
    let log_values: Vec<f64> = values
        .iter()
        .map(|&v| {
            let v = if v <= 0.0 { 1e-9 } else { v };
            let lv = v.log10();
            if lv < 0.0 {
                -0.1
            } else {
                lv
            }
        })
        .collect();
    let exponents_int: Vec<i32> = log_values.iter().map(|&v| v as i32).collect();
    let max_exponent = exponents_int.iter().copied().max().unwrap_or(0);
    let n = log_values.len();
    let exponents = (0..n)
        .map(|i| {
            if n <= 1 {
                0
            } else {
                (max_exponent as f64 * i as f64 / (n - 1) as f64) as i32
            }
        })
        .collect();
    LogModeValues {
        values: log_values,
        exponents,
        max_exponent,
    }
}

/// Power-of-ten tick labels for the integer exponents of a log axis.
pub fn calc_log_mode_axis_ticks(exponents: &[i32]) -> Vec<Tick> {
    exponents
        .iter()
        .map(|&e| (e as f64, format_power_of_ten(e)))
        .collect()
}

/// Log-transform `values` and produce the matching axis ticks in one call.
pub fn calc_log_mode_values_and_ticks(values: &[f64]) -> (LogModeValues, Vec<Tick>) {
    let log = calc_log_mode_values(values);
    let ticks = calc_log_mode_axis_ticks(&log.exponents);
    (log, ticks)
}

/// Linear-axis ticks from 0 to `max_value`. The step starts at one decade
/// below the magnitude of `max_value` and doubles until at most `max_ticks`
/// ticks remain.
pub fn calc_lin_mode_axis_ticks(max_value: f64, max_ticks: usize) -> Vec<Tick> {
    if max_value <= 0.0 {
        return vec![(0.0, "0".to_string())];
    }
    let mut step = 10f64.powf(max_value.log10().floor() - 1.0);
    let mut ticks = arange(0.0, max_value + step, step);
    while ticks.len() > max_ticks {
        step *= 2.0;
        ticks = arange(0.0, max_value + step, step);
    }
    ticks
        .into_iter()
        .map(|v| (v, format!("{}", v as i64)))
        .collect()
}

/// Ticks for unchanged linear values (the values pass through untouched).
pub fn calc_lin_mode_values_and_ticks(values: &[f64], max_ticks: usize) -> Vec<Tick> {
    let max_value = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !max_value.is_finite() {
        return vec![(0.0, "0".to_string())];
    }
    calc_lin_mode_axis_ticks(max_value, max_ticks)
}

fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut v = start;
    // Half-step tolerance keeps float accumulation from dropping the last tick.
    while v < stop - step * 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

/// Phase and modulation lifetimes (ns scale, ×10³ applied as in the
/// acquisition firmware) from a single phasor coordinate.
///
/// Returns `(None, None)` when the modulation frequency is zero and
/// `tau_m = None` when the modulation component goes negative.
pub fn phasor_tau(g: f64, s: f64, freq_mhz: f64, harmonic: u32) -> (Option<f64>, Option<f64>) {
    if freq_mhz == 0.0 {
        return (None, None);
    }
    let base = 1.0 / (2.0 * std::f64::consts::PI * freq_mhz * harmonic as f64);
    let tau_phi = base * (s / g) * 1e3;
    let tau_m_component = 1.0 / (s * s + g * g) - 1.0;
    let tau_m = if tau_m_component < 0.0 {
        None
    } else {
        Some(base * tau_m_component.sqrt() * 1e3)
    };
    (Some(tau_phi), tau_m)
}

/// (g, s) coordinates of the reference lifetimes on the universal
/// semicircle, together with the (possibly extended) lifetime set.
///
/// At 10 and 20 MHz the default lifetimes are extended up to 25 ns so the
/// semicircle stays populated at long periods.
pub fn phasor_points(
    harmonic: u32,
    laser_period_ns: f64,
    frequency_mhz: f64,
    lifetimes: &[f64],
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut tau_m: Vec<f64> = lifetimes.to_vec();
    if frequency_mhz == 10.0 || frequency_mhz == 20.0 {
        let mut extra = 10e-9;
        while extra < 26e-9 {
            tau_m.push(extra);
            extra += 5e-9;
        }
    }
    let fex = (1.0 / laser_period_ns) * 1e9;
    let k = 1.0 / (2.0 * std::f64::consts::PI * harmonic as f64 * fex);
    let mut g = Vec::with_capacity(tau_m.len());
    let mut s = Vec::with_capacity(tau_m.len());
    for &tau in &tau_m {
        let phi = (tau / k).atan();
        let factor = (tau / k) * (tau / k);
        let m = (1.0 / (1.0 + factor)).sqrt();
        g.push(m * phi.cos());
        s.push(m * phi.sin());
    }
    (g, s, tau_m)
}

/// NaN-ignoring mean of a set of phasor points. `None` when the input is
/// empty or all coordinates are NaN.
pub fn phasor_points_mean(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut sum_g = 0.0;
    let mut sum_s = 0.0;
    let mut count_g = 0usize;
    let mut count_s = 0usize;
    for &(g, s) in points {
        if !g.is_nan() {
            sum_g += g;
            count_g += 1;
        }
        if !s.is_nan() {
            sum_s += s;
            count_s += 1;
        }
    }
    if count_g == 0 || count_s == 0 {
        return None;
    }
    Some((sum_g / count_g as f64, sum_s / count_s as f64))
}

/// A quantized phasor cloud: a normalized 2D histogram over [-2, 2]².
#[derive(Debug, Clone)]
pub struct PhasorHistogram {
    /// `cells[ix][iy]`, normalized to max 1.0; empty cells are NaN so
    /// colormapped rendering leaves them transparent.
    pub cells: Vec<Vec<f64>>,
    /// Number of cells per axis.
    pub size: usize,
    /// Smallest non-zero raw count.
    pub min_nonzero: f64,
    /// Largest raw count.
    pub max: f64,
}

/// Quantize phasor points into a 2D histogram with `bins * 4` cells per
/// axis over the fixed range [-2, 2]. Returns `None` when there is nothing
/// to draw (no input points, or every point falls outside the range).
pub fn quantize_phasors(x: &[f64], y: &[f64], bins: usize) -> Option<PhasorHistogram> {
    if x.is_empty() || y.is_empty() {
        return None;
    }
    let n = bins * 4;
    let (lo, hi) = (-2.0f64, 2.0f64);
    let width = (hi - lo) / n as f64;
    let mut cells = vec![vec![0.0f64; n]; n];
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        if !(xv >= lo && xv <= hi && yv >= lo && yv <= hi) {
            continue;
        }
        let ix = (((xv - lo) / width) as usize).min(n - 1);
        let iy = (((yv - lo) / width) as usize).min(n - 1);
        cells[ix][iy] += 1.0;
    }
    let mut min_nonzero = f64::INFINITY;
    let mut max = 0.0f64;
    for row in &cells {
        for &c in row {
            if c > 0.0 {
                min_nonzero = min_nonzero.min(c);
                max = max.max(c);
            }
        }
    }
    if max == 0.0 {
        return None;
    }
    for row in &mut cells {
        for c in row.iter_mut() {
            *c = if *c == 0.0 { f64::NAN } else { *c / max };
        }
    }
    Some(PhasorHistogram {
        cells,
        size: n,
        min_nonzero,
        max,
    })
}

/// Gradient stops for the "hot" colormap (black → red → yellow → white).
pub fn hot_colormap() -> Vec<(f32, Color32)> {
    vec![
        (0.0, Color32::BLACK),
        (0.33, Color32::from_rgb(255, 0, 0)),
        (0.67, Color32::from_rgb(255, 255, 0)),
        (1.0, Color32::WHITE),
    ]
}

/// Gradient stops for the "cool" colormap (cyan → magenta).
pub fn cool_colormap(start: f32, end: f32) -> Vec<(f32, Color32)> {
    vec![
        (start, Color32::from_rgb(0, 255, 255)),
        (end, Color32::from_rgb(255, 0, 255)),
    ]
}

/// Sample a colormap at `t` ∈ [0, 1] with linear interpolation between stops.
pub fn sample_colormap(stops: &[(f32, Color32)], t: f32) -> Color32 {
    match stops {
        [] => Color32::TRANSPARENT,
        [only] => only.1,
        _ => {
            let t = t.clamp(stops[0].0, stops[stops.len() - 1].0);
            for pair in stops.windows(2) {
                let (p0, c0) = pair[0];
                let (p1, c1) = pair[1];
                if t <= p1 {
                    let f = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
                    return lerp_color(c0, c1, f);
                }
            }
            stops[stops.len() - 1].1
        }
    }
}

fn lerp_color(a: Color32, b: Color32, f: f32) -> Color32 {
    let l = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
    Color32::from_rgba_unmultiplied(
        l(a.r(), b.r()),
        l(a.g(), b.g()),
        l(a.b(), b.b()),
        l(a.a(), b.a()),
    )
}

/// Convert a 256-bin micro-time bin index into nanoseconds, scaled by the
/// heterodyne factor. Zero frequency maps to 0.
pub fn bin_to_time_ns(bin: u32, frequency_mhz: f64) -> f64 {
    let laser_period_ns = if frequency_mhz == 0.0 {
        0.0
    } else {
        crate::convert::mhz_to_ns(frequency_mhz)
    };
    ((bin as f64 * laser_period_ns) / 256.0) * HETERODYNE_FACTOR
}

/// Inverse of [`bin_to_time_ns`]. Zero frequency maps to bin 0.
pub fn time_ns_to_bin(micro_time_ns: f64, frequency_mhz: f64) -> f64 {
    let laser_period_ns = if frequency_mhz == 0.0 {
        0.0
    } else {
        crate::convert::mhz_to_ns(frequency_mhz)
    };
    if laser_period_ns == 0.0 {
        return 0.0;
    }
    (micro_time_ns * 256.0) / (HETERODYNE_FACTOR * laser_period_ns)
}

/// Signal-to-Background Ratio in dB: 10·log10(mean / population std-dev).
pub fn calculate_sbr(y: &[f64]) -> f64 {
    if y.is_empty() {
        return f64::NAN;
    }
    let n = y.len() as f64;
    let mean = y.iter().sum::<f64>() / n;
    let var = y.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std = var.sqrt();
    10.0 * (mean / std).log10()
}
