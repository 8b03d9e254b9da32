use flim_widgets::convert::TimeUnit;
use flim_widgets::widgets::counters::{format_time_value, CounterMode, CpsCounter, TimeCounter};
use flim_widgets::widgets::progress::ProgressBar;
use flim_widgets::SbrLabel;

#[test]
fn cps_counter_waits_for_the_interval() {
    let mut counter = CpsCounter::new();
    // Only half the interval has elapsed: no recomputation.
    assert!(counter.update(5e8, 0.0, 1e9, 100, 0, 1e9).is_none());
    assert_eq!(counter.text(), "No CPS");
}

#[test]
fn cps_counter_computes_rate_and_humanizes() {
    let mut counter = CpsCounter::new();
    // 2_000_000 counts over 2 seconds -> 1M CPS.
    let cps = counter.update(2e9, 0.0, 1e9, 2_000_000, 0, 2e6).unwrap();
    assert_eq!(cps, 1_000_000.0);
    assert_eq!(counter.text(), "1.00M CPS");
    assert!(!counter.is_vibrating());
}

#[test]
fn cps_counter_vibrates_above_threshold() {
    let mut counter = CpsCounter::new();
    counter.update(2e9, 0.0, 1e9, 2_000_000, 0, 1000.0).unwrap();
    assert!(counter.is_vibrating());
    counter.update(4e9, 2e9, 1e9, 2_000_100, 2_000_000, 1000.0).unwrap();
    assert!(!counter.is_vibrating());
}

#[test]
fn cps_counter_animation_disabled() {
    let mut counter = CpsCounter::new();
    counter.threshold_animation = false;
    counter.update(2e9, 0.0, 1e9, 2_000_000, 0, 1.0).unwrap();
    assert!(!counter.is_vibrating());
}

#[test]
fn clear_all_animations_stops_every_counter() {
    let mut counters = vec![CpsCounter::new(), CpsCounter::new()];
    for c in counters.iter_mut() {
        c.start_animation();
    }
    CpsCounter::clear_all_animations(counters.iter_mut());
    assert!(counters.iter().all(|c| !c.is_vibrating()));
}

#[test]
fn countdown_reaches_zero_and_completes() {
    let mut counter = TimeCounter::countdown(10.0, TimeUnit::Seconds, TimeUnit::Seconds);
    counter.update_count(3.0);
    assert!(!counter.completed());
    assert_eq!(counter.text(), "Remaining time:07:00 (s)");
    counter.update_count(11.0);
    assert!(counter.completed());
    assert_eq!(counter.text(), "Remaining time:00:00 (s)");
}

#[test]
fn countup_measures_elapsed_time() {
    let mut counter = TimeCounter::countup(0.0, TimeUnit::Seconds, TimeUnit::Minutes);
    assert_eq!(counter.mode, CounterMode::Countup);
    // 3600 s -> 60 min -> divmod(60 / 60, 60) -> fields (0, 1).
    counter.update_count(3600.0);
    assert_eq!(counter.text(), "Elapsed time:00:01 (m)");
}

#[test]
fn countdown_in_nanoseconds() {
    let mut counter = TimeCounter::countdown(5e9, TimeUnit::Nanos, TimeUnit::Seconds);
    counter.update_count(1e9);
    assert_eq!(counter.text(), "Remaining time:04:00 (s)");
}

#[test]
fn time_format_per_unit() {
    assert_eq!(format_time_value(7.25, TimeUnit::Seconds), "07:250 (s)");
    assert_eq!(format_time_value(1500.0, TimeUnit::Millis), "01:500 (ms)");
    // Minutes run through divmod(value / 60, 60).
    assert_eq!(format_time_value(120.0, TimeUnit::Minutes), "00:02 (m)");
    assert_eq!(format_time_value(3_600.0, TimeUnit::Minutes), "01:00 (m)");
}

#[test]
fn sbr_label_formats_decimals() {
    let mut label = SbrLabel::new();
    let y: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64).sin()).collect();
    label.update(&y, 2);
    assert!(label.text().ends_with(" SBR"));
    let number: f64 = label
        .text()
        .trim_end_matches(" SBR")
        .parse()
        .expect("numeric SBR");
    assert!(number.is_finite());
}

#[test]
fn progress_bar_completes_at_full() {
    let mut bar = ProgressBar::with_label("Acquisition");
    bar.update(50, 100, None);
    assert_eq!(bar.value(), 50);
    assert!(!bar.completed());
    bar.update(100, 100, Some("done"));
    assert!(bar.completed());
    bar.clear();
    assert_eq!(bar.value(), 0);
    assert!(!bar.completed());
}

#[test]
fn indeterminate_progress_ignores_updates() {
    let mut bar = ProgressBar::new();
    bar.set_indeterminate(true);
    bar.update(50, 100, None);
    assert_eq!(bar.value(), 0);
}
