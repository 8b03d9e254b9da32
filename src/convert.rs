//! Unit conversions shared by counters, inputs and the plot helpers.

use serde::{Deserialize, Serialize};

/// Time units understood by [`convert_time`] and the counter widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl TimeUnit {
    /// Seconds per one unit.
    pub fn to_seconds(self) -> f64 {
        match self {
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Millis => 1e-3,
            TimeUnit::Micros => 1e-6,
            TimeUnit::Nanos => 1e-9,
        }
    }

    /// Short label used in counter displays ("s", "ms", ...).
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
            TimeUnit::Nanos => "ns",
        }
    }
}

/// Convert a time value between units, pivoting through seconds.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    value * from.to_seconds() / to.to_seconds()
}

/// Laser period in nanoseconds → modulation frequency in MHz.
pub fn ns_to_mhz(ns_value: f64) -> f64 {
    let hz = 1.0 / (ns_value * 1e-9);
    hz / 1e6
}

/// Modulation frequency in MHz → laser period in nanoseconds.
pub fn mhz_to_ns(mhz_value: f64) -> f64 {
    let s = 1.0 / (mhz_value * 1e6);
    s * 1e9
}

/// Render a large count as a compact human-readable string with a K/M/G/T/P
/// suffix and two decimals, e.g. `12_345_678` → `"12.34M"`.
pub fn humanize_number(number: f64) -> String {
    if !(number > 0.0) {
        return "0".to_string();
    }
    const UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];
    // log10/3 is exact at decade boundaries, unlike ln(x)/ln(1000).
    let magnitude = (number.log10() / 3.0).floor().max(0.0) as usize;
    let magnitude = magnitude.min(UNITS.len() - 1);
    let scaled = number / 1000f64.powi(magnitude as i32);
    let whole = scaled.trunc() as i64;
    // Two decimal digits, truncated rather than rounded.
    let frac = ((scaled - whole as f64) * 100.0).trunc() as i64;
    format!("{}.{:02}{}", whole, frac, UNITS[magnitude])
}
