use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use flim_widgets::dialogs::*;
use flim_widgets::WidgetError;

const MAGIC: &[u8; 4] = b"SP01";

fn write_measurement_file(path: &Path, header: &serde_json::Value) {
    let mut f = File::create(path).unwrap();
    f.write_all(MAGIC).unwrap();
    let header_bytes = serde_json::to_vec(header).unwrap();
    f.write_all(&(header_bytes.len() as u32).to_le_bytes()).unwrap();
    f.write_all(&header_bytes).unwrap();
    f.write_all(&[0u8; 16]).unwrap(); // payload
}

#[test]
fn metadata_header_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spectroscopy_run.bin");
    let header = serde_json::json!({"channels": [0, 1], "bin_width_micros": 1000});
    write_measurement_file(&path, &header);

    let metadata = extract_file_metadata(&path, MAGIC).unwrap();
    assert_eq!(metadata["channels"], serde_json::json!([0, 1]));
    assert_eq!(metadata["bin_width_micros"], 1000);
}

#[test]
fn wrong_magic_is_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.bin");
    fs::write(&path, b"XXXXrest").unwrap();
    let err = open_bin_checked(&path, Some(MAGIC)).unwrap_err();
    assert!(matches!(err, WidgetError::InvalidFile(_)));
}

#[test]
fn truncated_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, b"SP").unwrap();
    assert!(open_bin_checked(&path, Some(MAGIC)).is_err());
}

#[test]
fn parse_json_file_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();
    assert!(matches!(
        parse_json_file(&path).unwrap_err(),
        WidgetError::Json(_)
    ));
}

#[test]
fn copy_file_with_prefix_renames() {
    let dir = tempfile::tempdir().unwrap();
    let origin = dir.path().join("spectroscopy_run.bin");
    fs::write(&origin, b"data").unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    let copied = copy_file_with_prefix(&origin, "2024-06-01", &out_dir).unwrap();
    assert_eq!(
        copied.file_name().unwrap().to_str().unwrap(),
        "2024-06-01_spectroscopy_run.bin"
    );
    assert_eq!(fs::read(copied).unwrap(), b"data");
}

fn touch_with_age(path: &Path, age: Duration) {
    fs::write(path, b"x").unwrap();
    let f = OpenOptions::new().write(true).open(path).unwrap();
    f.set_modified(SystemTime::now() - age).unwrap();
}

fn make_data_dir(root: &Path) -> std::path::PathBuf {
    let data = root.join(DATA_DIR);
    fs::create_dir_all(&data).unwrap();
    data
}

#[test]
fn recent_spectroscopy_skips_calibration_and_phasors() {
    let dir = tempfile::tempdir().unwrap();
    let data = make_data_dir(dir.path());
    touch_with_age(&data.join("spectroscopy_old.bin"), Duration::from_secs(300));
    touch_with_age(&data.join("spectroscopy_new.bin"), Duration::from_secs(10));
    touch_with_age(
        &data.join("spectroscopy-calibration_newest.bin"),
        Duration::from_secs(1),
    );
    touch_with_age(
        &data.join("spectroscopy-phasors_newest.bin"),
        Duration::from_secs(1),
    );

    let newest = recent_spectroscopy_file(dir.path()).unwrap();
    assert_eq!(
        newest.file_name().unwrap().to_str().unwrap(),
        "spectroscopy_new.bin"
    );
}

#[test]
fn recent_phasors_requires_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let data = make_data_dir(dir.path());
    touch_with_age(&data.join("spectroscopy_run.bin"), Duration::from_secs(5));
    assert!(matches!(
        recent_phasors_file(dir.path()).unwrap_err(),
        WidgetError::NoRecentFile(_)
    ));
    touch_with_age(
        &data.join("spectroscopy-phasors_run.bin"),
        Duration::from_secs(5),
    );
    assert!(recent_phasors_file(dir.path()).is_ok());
}

#[test]
fn recent_n_intensity_files_are_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let fcs = dir.path().join(DATA_DIR).join("fcs-intensity");
    fs::create_dir_all(&fcs).unwrap();
    touch_with_age(&fcs.join("intensity-tracing_1.bin"), Duration::from_secs(30));
    touch_with_age(&fcs.join("intensity-tracing_2.bin"), Duration::from_secs(20));
    touch_with_age(&fcs.join("intensity-tracing_3.bin"), Duration::from_secs(10));

    let files = recent_n_intensity_tracing_files(2, dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(
        files[0].file_name().unwrap().to_str().unwrap(),
        "intensity-tracing_3.bin"
    );
    assert_eq!(
        files[1].file_name().unwrap().to_str().unwrap(),
        "intensity-tracing_2.bin"
    );
}

#[test]
fn compare_file_timestamps_measures_difference() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    touch_with_age(&a, Duration::from_secs(100));
    touch_with_age(&b, Duration::from_secs(40));
    let diff = compare_file_timestamps(&a, &b).unwrap();
    assert!((diff - 60.0).abs() < 5.0, "diff was {diff}");
}
