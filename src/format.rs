//! Tick-label and channel-label formatting helpers.

use crate::error::{Result, WidgetError};

const UNICODE_SUP: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}',
    '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Format an exponent as a power of ten using Unicode superscripts,
/// e.g. `3` → `"10³"`. Negative exponents collapse to `"0"` (they only occur
/// for the clamped low end of a log axis).
pub fn format_power_of_ten(exponent: i32) -> String {
    if exponent < 0 {
        return "0".to_string();
    }
    let mut out = String::from("10");
    for digit in exponent.to_string().chars() {
        let idx = digit.to_digit(10).unwrap_or(0) as usize;
        out.push(UNICODE_SUP[idx]);
    }
    out
}

/// Extract every run of decimal digits from `text`, applying `transform` to
/// each parsed number.
pub fn extract_numbers_from_text(text: &str, transform: impl Fn(i64) -> i64) -> Vec<i64> {
    let mut numbers = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(n) = current.parse::<i64>() {
                numbers.push(transform(n));
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(n) = current.parse::<i64>() {
            numbers.push(transform(n));
        }
    }
    numbers
}

/// Extract the first number from a label like `"Channel 3"` and return it as
/// a zero-based index (`2`).
pub fn extract_index_from_label(text: &str) -> Result<usize> {
    let numbers = extract_numbers_from_text(text, |n| n);
    let first = numbers
        .first()
        .ok_or_else(|| WidgetError::NoNumberInLabel(text.to_string()))?;
    Ok((first - 1).max(0) as usize)
}

/// Extract a pair of numbers from a label like `"Ch 1 - Ch 4"` and return
/// them as zero-based indices.
pub fn extract_index_pair_from_label(text: &str) -> Vec<usize> {
    extract_numbers_from_text(text, |n| n - 1)
        .into_iter()
        .map(|n| n.max(0) as usize)
        .collect()
}
