use egui::Color32;
use flim_widgets::{
    Axis, FlimPlot, LineLook, ScatterLook, SemicircleOrientation, SeriesOptions, WidgetError,
};

fn opts() -> SeriesOptions {
    SeriesOptions {
        auto_range: false,
        ..Default::default()
    }
}

#[test]
fn init_and_read_series() {
    let mut plot = FlimPlot::new("p");
    plot.init_series("decay", &[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0], LineLook::default(), &opts());
    let display = plot.series("decay").unwrap();
    assert_eq!(display, vec![[0.0, 5.0], [1.0, 6.0], [2.0, 7.0]]);
    let (x, y) = plot.cached_series("decay").unwrap();
    assert_eq!(x, vec![0.0, 1.0, 2.0]);
    assert_eq!(y, vec![5.0, 6.0, 7.0]);
}

#[test]
fn log_mode_transforms_display_but_keeps_cache() {
    let mut plot = FlimPlot::new("p");
    let options = SeriesOptions {
        log_mode: true,
        scale_axis: Axis::Y,
        ..opts()
    };
    plot.init_series("decay", &[0.0, 1.0, 2.0], &[1.0, 10.0, 100.0], LineLook::default(), &options);
    let display = plot.series("decay").unwrap();
    assert_eq!(display, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    let (_, y) = plot.cached_series("decay").unwrap();
    assert_eq!(y, vec![1.0, 10.0, 100.0]);
}

#[test]
fn shift_rotates_samples() {
    let mut plot = FlimPlot::new("p");
    let options = SeriesOptions {
        shift: 1,
        shift_axis: Axis::Y,
        ..opts()
    };
    plot.init_series("decay", &[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], LineLook::default(), &options);
    let display = plot.series("decay").unwrap();
    let shifted: Vec<f64> = display.iter().map(|p| p[1]).collect();
    assert_eq!(shifted, vec![3.0, 1.0, 2.0]);
}

#[test]
fn update_unknown_key_is_an_error() {
    let mut plot = FlimPlot::new("p");
    let err = plot
        .update_series("missing", &[0.0], &[1.0], true, &opts())
        .unwrap_err();
    assert!(matches!(err, WidgetError::UnknownKey(_)));
}

#[test]
fn update_appends_or_replaces_cache() {
    let mut plot = FlimPlot::new("p");
    plot.init_series("decay", &[0.0], &[1.0], LineLook::default(), &opts());
    plot.update_series("decay", &[1.0], &[2.0], false, &opts()).unwrap();
    let (x, _) = plot.cached_series("decay").unwrap();
    assert_eq!(x, vec![0.0, 1.0]);
    plot.update_series("decay", &[9.0], &[9.0], true, &opts()).unwrap();
    let (x, y) = plot.cached_series("decay").unwrap();
    assert_eq!(x, vec![9.0]);
    assert_eq!(y, vec![9.0]);
}

#[test]
fn remove_series_then_read_fails() {
    let mut plot = FlimPlot::new("p");
    plot.init_series("decay", &[0.0], &[1.0], LineLook::default(), &opts());
    plot.remove_series("decay").unwrap();
    assert!(plot.series("decay").is_err());
    assert!(plot.remove_series("decay").is_err());
}

#[test]
fn region_masks_cached_samples() {
    let mut plot = FlimPlot::new("p");
    plot.init_series(
        "decay",
        &[0.0, 1.0, 2.0, 3.0, 4.0],
        &[10.0, 11.0, 12.0, 13.0, 14.0],
        LineLook::default(),
        &opts(),
    );
    plot.add_region(1.0, 3.0, Color32::from_rgba_unmultiplied(255, 0, 0, 40));
    assert_eq!(plot.region_bounds(), Some((1.0, 3.0)));
    let (x, y) = plot.region_series("decay").unwrap();
    assert_eq!(x, vec![1.0, 2.0, 3.0]);
    assert_eq!(y, vec![11.0, 12.0, 13.0]);
    plot.remove_region();
    assert!(plot.region_bounds().is_none());
    assert!(plot.region_series("decay").is_err());
}

#[test]
fn second_region_request_keeps_first() {
    let mut plot = FlimPlot::new("p");
    plot.add_region(0.0, 1.0, Color32::RED);
    plot.add_region(5.0, 6.0, Color32::RED);
    assert_eq!(plot.region_bounds(), Some((0.0, 1.0)));
}

#[test]
fn semicircle_points_lie_on_circle() {
    let mut plot = FlimPlot::new("p");
    plot.draw_semicircle(
        "universal",
        0.5,
        0.0,
        0.5,
        100,
        LineLook::default(),
        SemicircleOrientation::Up,
    );
    let pts = plot.series("universal").unwrap();
    assert_eq!(pts.len(), 100);
    for p in &pts {
        let d = (p[0] - 0.5) * (p[0] - 0.5) + p[1] * p[1];
        assert!((d - 0.25).abs() < 1e-9);
        assert!(p[1] >= 0.0);
    }
    assert_eq!(pts.first().unwrap()[1], 0.0);
    assert_eq!(pts.last().unwrap()[1], 0.0);
}

#[test]
fn scatter_requires_text_key_with_text() {
    let mut plot = FlimPlot::new("p");
    let err = plot.add_scatter(
        "mean",
        &[(0.5, 0.3)],
        ScatterLook::default(),
        None,
        Some(flim_widgets::TextLook::default()),
    );
    assert!(err.is_err());
    plot.add_scatter("mean", &[(0.5, 0.3)], ScatterLook::default(), None, None)
        .unwrap();
    plot.remove_item("mean").unwrap();
    assert!(plot.remove_item("mean").is_err());
}

#[test]
fn clear_resets_everything() {
    let mut plot = FlimPlot::new("p");
    plot.init_series("a", &[0.0], &[1.0], LineLook::default(), &opts());
    plot.add_line("guide", Some(1.0), None, LineLook::default());
    plot.add_region(0.0, 1.0, Color32::RED);
    plot.clear();
    assert!(plot.series("a").is_err());
    assert!(plot.remove_item("guide").is_err());
    assert!(plot.region_bounds().is_none());
}
