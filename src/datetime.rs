//! Timestamp helpers used for snapshot file naming and acquisition tags.

use chrono::Utc;

/// Current Unix timestamp with fractional seconds.
pub fn timestamp() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + now.timestamp_subsec_nanos() as f64 * 1e-9
}

/// Current Unix timestamp truncated to whole seconds.
pub fn timestamp_int() -> i64 {
    Utc::now().timestamp()
}
