//! Thin file-I/O wrappers: file-picker dialogs, JSON/binary readers and
//! recent-measurement-file lookup.
//!
//! The dialog entry points follow a "show a warning box and return `None`"
//! contract: any validation or parse failure is reported to the user via
//! [`crate::popups::warning`] and the caller just sees `None`. The
//! underlying parsing helpers return [`Result`] so they stay testable
//! without a display.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

use crate::error::{Result, WidgetError};
use crate::popups;

/// Folder (relative to an export root) where acquisition files land.
pub const DATA_DIR: &str = ".flim-labs/data";

// ─────────────────────────────────────────────────────────────────────────────
// Dialog wrappers
// ─────────────────────────────────────────────────────────────────────────────

/// Open a file dialog filtered to `*.json`, then read and parse the chosen
/// file. Returns `None` when the user cancels or the file is invalid (the
/// failure is shown as a warning box).
pub fn read_json(file_type: &str, filter: Option<&str>) -> Option<(PathBuf, Value)> {
    let filter_label = match filter {
        Some(f) => format!("JSON files (*{f}*.json)"),
        None => "JSON files (*.json)".to_string(),
    };
    let path = rfd::FileDialog::new()
        .set_title(format!("Load {file_type} file"))
        .add_filter(filter_label, &["json"])
        .pick_file()?;
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        popups::warning(
            "Invalid extension",
            "Invalid extension. File should be a .json",
        );
        return None;
    }
    match parse_json_file(&path) {
        Ok(data) => Some((path, data)),
        Err(WidgetError::Json(e)) => {
            warn!("JSON parse failed for {}: {e}", path.display());
            popups::warning("Invalid JSON", "The file could not be parsed as valid JSON.");
            None
        }
        Err(e) => {
            warn!("reading {} failed: {e}", path.display());
            popups::warning(
                "Error reading file",
                &format!("Error reading {file_type} file: {e}"),
            );
            None
        }
    }
}

/// Open a file dialog filtered to `*.bin`, validate the 4-byte magic number
/// and hand the open file to `read_cb`. Returns `None` when the user cancels
/// or validation fails.
pub fn read_bin<T>(
    file_type: &str,
    magic: Option<&[u8; 4]>,
    filter: Option<&str>,
    read_cb: impl FnOnce(&mut File, &Path) -> Result<T>,
) -> Option<T> {
    let filter_label = match filter {
        Some(f) => format!("Bin files (*{f}*.bin)"),
        None => "Bin files (*.bin)".to_string(),
    };
    let path = rfd::FileDialog::new()
        .set_title(format!("Load {file_type} file"))
        .add_filter(filter_label, &["bin"])
        .pick_file()?;
    if path.extension().and_then(|e| e.to_str()) != Some("bin") {
        popups::warning(
            "Invalid extension",
            "Invalid extension. File should be a .bin",
        );
        return None;
    }
    match open_bin_checked(&path, magic).and_then(|mut f| read_cb(&mut f, &path)) {
        Ok(value) => Some(value),
        Err(WidgetError::InvalidFile(_)) => {
            popups::warning(
                "Invalid file",
                &format!("Invalid file. The file is not a valid {file_type} file."),
            );
            None
        }
        Err(e) => {
            warn!("reading {} failed: {e}", path.display());
            popups::warning(
                "Error reading file",
                &format!("Error reading {file_type} file: {e}"),
            );
            None
        }
    }
}

/// Open a directory-picker dialog.
pub fn select_directory() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Directory")
        .pick_folder()
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a JSON file from disk.
pub fn parse_json_file(path: &Path) -> Result<Value> {
    let txt = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&txt)?)
}

/// Open a binary file, consuming and validating the 4-byte magic number when
/// one is expected. The returned file is positioned just after the magic.
pub fn open_bin_checked(path: &Path, magic: Option<&[u8; 4]>) -> Result<File> {
    let mut f = File::open(path)?;
    if let Some(expected) = magic {
        let mut head = [0u8; 4];
        f.read_exact(&mut head)?;
        if &head != expected {
            return Err(WidgetError::InvalidFile(path.display().to_string()));
        }
    }
    Ok(f)
}

/// Extract the JSON metadata header of a measurement file: 4 magic bytes, a
/// little-endian `u32` header length, then the JSON header itself.
pub fn extract_file_metadata(path: &Path, magic: &[u8; 4]) -> Result<Value> {
    let mut f = open_bin_checked(path, Some(magic))?;
    let mut len_bytes = [0u8; 4];
    f.read_exact(&mut len_bytes)?;
    let header_length = u32::from_le_bytes(len_bytes) as usize;
    let mut header = vec![0u8; header_length];
    f.read_exact(&mut header)?;
    Ok(serde_json::from_slice(&header)?)
}

/// Copy `origin` into `save_dir` as `<save_name>_<original file name>` and
/// return the new path.
pub fn copy_file_with_prefix(origin: &Path, save_name: &str, save_dir: &Path) -> Result<PathBuf> {
    let file_name = origin
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| WidgetError::InvalidFile(origin.display().to_string()))?;
    let new_path = save_dir.join(format!("{save_name}_{file_name}"));
    std::fs::copy(origin, &new_path)?;
    Ok(new_path)
}

/// Absolute difference between the modification times of two files, in
/// seconds.
pub fn compare_file_timestamps(a: &Path, b: &Path) -> Result<f64> {
    let secs = |p: &Path| -> Result<f64> {
        let t = std::fs::metadata(p)?.modified()?;
        Ok(t.duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64())
    };
    Ok((secs(a)? - secs(b)?).abs())
}

// ─────────────────────────────────────────────────────────────────────────────
// Recent measurement files
// ─────────────────────────────────────────────────────────────────────────────

fn recent_files(
    data_folder: &Path,
    label: &str,
    keep: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<(std::time::SystemTime, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(data_folder)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !keep(name) {
            continue;
        }
        let mtime = entry.metadata()?.modified()?;
        entries.push((mtime, entry.path()));
    }
    if entries.is_empty() {
        return Err(WidgetError::NoRecentFile(label.to_string()));
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(entries.into_iter().map(|(_, p)| p).collect())
}

fn data_folder(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

/// Most recent spectroscopy file (excluding calibration and phasors runs).
pub fn recent_spectroscopy_file(root: &Path) -> Result<PathBuf> {
    let files = recent_files(&data_folder(root), "spectroscopy", |n| {
        n.starts_with("spectroscopy") && !n.contains("calibration") && !n.contains("phasors")
    })?;
    Ok(files[0].clone())
}

/// Most recent spectroscopy-phasors file (excluding calibration runs).
pub fn recent_phasors_file(root: &Path) -> Result<PathBuf> {
    let files = recent_files(&data_folder(root), "phasors", |n| {
        n.starts_with("spectroscopy-phasors") && !n.contains("calibration")
    })?;
    Ok(files[0].clone())
}

/// Most recent intensity-tracing file.
pub fn recent_intensity_tracing_file(root: &Path) -> Result<PathBuf> {
    let files = recent_files(&data_folder(root), "intensity tracing", |n| {
        n.starts_with("intensity-tracing")
    })?;
    Ok(files[0].clone())
}

/// The `num` most recent intensity-tracing files from the FCS intensity
/// sub-folder.
pub fn recent_n_intensity_tracing_files(num: usize, root: &Path) -> Result<Vec<PathBuf>> {
    let folder = data_folder(root).join("fcs-intensity");
    let mut files = recent_files(&folder, "intensity tracing", |n| {
        n.starts_with("intensity-tracing")
    })?;
    files.truncate(num);
    Ok(files)
}

/// Most recent FCS file (excluding intermediate calc and intensity files).
pub fn recent_fcs_file(root: &Path) -> Result<PathBuf> {
    let files = recent_files(&data_folder(root), "FCS", |n| {
        n.starts_with("fcs") && !n.contains("calc") && !n.contains("intensity")
    })?;
    Ok(files[0].clone())
}

/// Most recent time-tagger spectroscopy file.
pub fn recent_time_tagger_file(root: &Path) -> Result<PathBuf> {
    let files = recent_files(&data_folder(root), "Time Tagger", |n| {
        n.starts_with("time_tagger_spectroscopy")
    })?;
    Ok(files[0].clone())
}
