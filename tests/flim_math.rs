use flim_widgets::flim::*;

#[test]
fn log_mode_values_never_below_clamp() {
    let values = [0.0, -5.0, 0.5, 1.0, 10.0, 1e6];
    let log = calc_log_mode_values(&values);
    for v in &log.values {
        assert!(*v >= -0.1, "log value {v} below clamp");
    }
}

#[test]
fn log_mode_values_decades() {
    let log = calc_log_mode_values(&[1.0, 10.0, 100.0]);
    assert_eq!(log.values, vec![0.0, 1.0, 2.0]);
    assert_eq!(log.max_exponent, 2);
    assert_eq!(log.exponents, vec![0, 1, 2]);
}

#[test]
fn log_mode_ticks_are_powers_of_ten() {
    let (_log, ticks) = calc_log_mode_values_and_ticks(&[1.0, 1000.0]);
    assert!(ticks.iter().any(|(_, label)| label == "10\u{00B3}"));
    for (pos, _) in &ticks {
        assert_eq!(*pos, pos.trunc());
    }
}

#[test]
fn lin_mode_tick_count_respects_budget() {
    for max_value in [9.0, 100.0, 12_345.0, 7.3e6] {
        for max_ticks in [4usize, 10, 20] {
            let ticks = calc_lin_mode_axis_ticks(max_value, max_ticks);
            assert!(
                ticks.len() <= max_ticks,
                "{} ticks for max_value {max_value}, budget {max_ticks}",
                ticks.len()
            );
            assert_eq!(ticks[0].0, 0.0);
        }
    }
}

#[test]
fn lin_mode_non_positive_max_collapses_to_zero_tick() {
    let ticks = calc_lin_mode_axis_ticks(0.0, 10);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].1, "0");
}

#[test]
fn lin_mode_ticks_cover_the_data() {
    let ticks = calc_lin_mode_axis_ticks(100.0, 10);
    let last = ticks.last().unwrap().0;
    assert!(last >= 100.0 - 1e-9, "last tick {last} below max value");
}

#[test]
fn phasor_tau_zero_frequency_returns_none() {
    assert_eq!(phasor_tau(0.5, 0.5, 0.0, 1), (None, None));
}

#[test]
fn phasor_tau_modulation_component() {
    // On the unit circle the modulation component is exactly zero.
    let (phi, m) = phasor_tau(1.0, 0.0, 80.0, 1);
    assert!(phi.is_some());
    assert_eq!(m, Some(0.0));
    // Outside the unit circle it goes negative and tau_m disappears.
    let (_, m) = phasor_tau(1.2, 0.3, 80.0, 1);
    assert!(m.is_none());
}

#[test]
fn phasor_points_lie_on_universal_semicircle() {
    let (g, s, _) = phasor_points(1, 12.5, 80.0, &PHASOR_LIFETIMES);
    for (gv, sv) in g.iter().zip(s.iter()) {
        let d = (gv - 0.5) * (gv - 0.5) + sv * sv;
        assert!((d - 0.25).abs() < 1e-9, "point ({gv}, {sv}) off the semicircle");
    }
}

#[test]
fn phasor_points_extend_lifetimes_at_low_frequency() {
    let (_, _, tau_10) = phasor_points(1, 100.0, 10.0, &PHASOR_LIFETIMES);
    let (_, _, tau_80) = phasor_points(1, 12.5, 80.0, &PHASOR_LIFETIMES);
    assert!(tau_10.len() > tau_80.len());
    assert!(tau_10.iter().any(|&t| t > 20e-9));
}

#[test]
fn phasor_mean_ignores_nan() {
    let points = [(1.0, 2.0), (f64::NAN, 4.0), (3.0, f64::NAN)];
    let (g, s) = phasor_points_mean(&points).unwrap();
    assert_eq!(g, 2.0);
    assert_eq!(s, 3.0);
}

#[test]
fn phasor_mean_empty_or_all_nan_is_none() {
    assert!(phasor_points_mean(&[]).is_none());
    assert!(phasor_points_mean(&[(f64::NAN, f64::NAN)]).is_none());
}

#[test]
fn quantize_normalizes_to_max_one() {
    let x = [0.0, 0.0, 1.0];
    let y = [0.0, 0.0, 1.0];
    let hist = quantize_phasors(&x, &y, 16).unwrap();
    assert_eq!(hist.size, 64);
    assert_eq!(hist.max, 2.0);
    assert_eq!(hist.min_nonzero, 1.0);
    let max_cell = hist
        .cells
        .iter()
        .flatten()
        .filter(|c| !c.is_nan())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(max_cell, 1.0);
}

#[test]
fn quantize_empty_cells_are_nan() {
    let hist = quantize_phasors(&[0.0], &[0.0], 16).unwrap();
    assert!(hist.cells[0][0].is_nan());
}

#[test]
fn quantize_nothing_to_draw_is_none() {
    assert!(quantize_phasors(&[], &[], 16).is_none());
    // All points outside the [-2, 2] range.
    assert!(quantize_phasors(&[5.0], &[5.0], 16).is_none());
}

#[test]
fn bin_time_round_trip() {
    let t = bin_to_time_ns(128, 80.0);
    let b = time_ns_to_bin(t, 80.0);
    assert!((b - 128.0).abs() < 1e-9);
}

#[test]
fn bin_time_zero_frequency() {
    assert_eq!(bin_to_time_ns(128, 0.0), 0.0);
    assert_eq!(time_ns_to_bin(12.5, 0.0), 0.0);
}

#[test]
fn sbr_scale_invariant_under_positive_scaling() {
    let y: Vec<f64> = (0..100).map(|i| 50.0 + (i as f64 * 0.37).sin() * 5.0).collect();
    let scaled: Vec<f64> = y.iter().map(|v| v * 3.5).collect();
    let a = calculate_sbr(&y);
    let b = calculate_sbr(&scaled);
    assert!((a - b).abs() < 1e-9, "SBR changed under scaling: {a} vs {b}");
}

#[test]
fn colormap_sampling_endpoints() {
    let hot = hot_colormap();
    assert_eq!(sample_colormap(&hot, 0.0), egui::Color32::BLACK);
    assert_eq!(sample_colormap(&hot, 1.0), egui::Color32::WHITE);
    let cool = cool_colormap(0.0, 1.0);
    assert_eq!(sample_colormap(&cool, 0.0), egui::Color32::from_rgb(0, 255, 255));
}
