use std::time::Duration;

use flim_widgets::snapshot::{SavePlotImageTask, SnapshotEvent, SnapshotFormat};
use image::RgbaImage;

fn sample_image() -> RgbaImage {
    let mut img = RgbaImage::new(8, 8);
    for px in img.pixels_mut() {
        *px = image::Rgba([255, 0, 0, 255]);
    }
    img
}

#[test]
fn snapshot_writes_all_formats_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("decay_plot");
    let (task, events) = SavePlotImageTask::new(
        sample_image(),
        &base,
        vec![SnapshotFormat::Png, SnapshotFormat::Bmp],
    );
    task.spawn();

    match events.recv_timeout(Duration::from_secs(10)).unwrap() {
        SnapshotEvent::Saved(paths) => {
            assert_eq!(paths.len(), 2);
            assert!(base.with_extension("png").exists());
            assert!(base.with_extension("bmp").exists());
        }
        SnapshotEvent::Failed(e) => panic!("snapshot failed: {e}"),
    }
}

#[test]
fn snapshot_defaults_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("plot");
    let (task, events) = SavePlotImageTask::new(sample_image(), &base, Vec::new());
    task.spawn();
    match events.recv_timeout(Duration::from_secs(10)).unwrap() {
        SnapshotEvent::Saved(paths) => {
            assert_eq!(paths, vec![base.with_extension("png")]);
        }
        SnapshotEvent::Failed(e) => panic!("snapshot failed: {e}"),
    }
}

#[test]
fn snapshot_reports_failure_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("does-not-exist").join("plot");
    let (task, events) = SavePlotImageTask::new(sample_image(), &base, Vec::new());
    task.spawn();
    match events.recv_timeout(Duration::from_secs(10)).unwrap() {
        SnapshotEvent::Failed(_) => {}
        SnapshotEvent::Saved(paths) => panic!("unexpected success: {paths:?}"),
    }
}
