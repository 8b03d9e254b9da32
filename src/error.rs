//! Crate-wide error type.
//!
//! All fallible operations in this library return [`WidgetError`] through the
//! [`Result`] alias. I/O, serialization and image failures convert via
//! `#[from]`; domain failures (bad magic bytes, unknown dataset keys) carry a
//! message describing what the caller passed in.

use thiserror::Error;

/// Convenience alias for results using the library error type.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("SVG error: {0}")]
    Svg(String),

    /// The selected file is not what the dialog asked for (wrong extension,
    /// bad magic bytes, truncated header).
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// A dataset/series key that was never registered on the plot.
    #[error("Unknown data-set key: {0}")]
    UnknownKey(String),

    /// No file matching the requested prefix exists in the data folder.
    #[error("No {0} files found")]
    NoRecentFile(String),

    #[error("No number found in label: {0:?}")]
    NoNumberInLabel(String),
}
