use flim_widgets::convert::*;
use flim_widgets::format::*;

#[test]
fn mhz_ns_reciprocal() {
    assert!((mhz_to_ns(80.0) - 12.5).abs() < 1e-12);
    assert!((ns_to_mhz(12.5) - 80.0).abs() < 1e-12);
    let f = 42.7;
    assert!((ns_to_mhz(mhz_to_ns(f)) - f).abs() < 1e-9);
}

#[test]
fn convert_time_pivots_through_seconds() {
    assert_eq!(convert_time(1.0, TimeUnit::Seconds, TimeUnit::Millis), 1000.0);
    assert_eq!(convert_time(1500.0, TimeUnit::Millis, TimeUnit::Seconds), 1.5);
    assert_eq!(convert_time(2.0, TimeUnit::Minutes, TimeUnit::Seconds), 120.0);
    assert!((convert_time(1.0, TimeUnit::Nanos, TimeUnit::Micros) - 1e-3).abs() < 1e-15);
}

#[test]
fn humanize_number_suffixes() {
    assert_eq!(humanize_number(0.0), "0");
    assert_eq!(humanize_number(12_345_678.0), "12.34M");
    assert_eq!(humanize_number(1_500.0), "1.50K");
    assert_eq!(humanize_number(2_000_000_000.0), "2.00G");
}

#[test]
fn humanize_number_truncates_decimals() {
    // 1.239K renders as 1.23K, not 1.24K.
    assert_eq!(humanize_number(1_239.0), "1.23K");
}

#[test]
fn power_of_ten_superscripts() {
    assert_eq!(format_power_of_ten(0), "10\u{2070}");
    assert_eq!(format_power_of_ten(3), "10\u{00B3}");
    assert_eq!(format_power_of_ten(12), "10\u{00B9}\u{00B2}");
    assert_eq!(format_power_of_ten(-1), "0");
}

#[test]
fn extract_numbers_with_transform() {
    let nums = extract_numbers_from_text("Ch 2 and Ch 10", |n| n * 2);
    assert_eq!(nums, vec![4, 20]);
}

#[test]
fn extract_index_is_zero_based() {
    assert_eq!(extract_index_from_label("Channel 3").unwrap(), 2);
    assert!(extract_index_from_label("no digits here").is_err());
}

#[test]
fn extract_index_pair() {
    assert_eq!(extract_index_pair_from_label("Ch 1 - Ch 4"), vec![0, 3]);
}
