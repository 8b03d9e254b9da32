//! Fire-and-forget background saving of rendered plot images.
//!
//! [`SavePlotImageTask`] takes an RGBA frame (e.g. an eframe screenshot
//! region), writes it to disk in one or more formats on a worker thread and
//! reports the outcome through an mpsc channel. There is no cancellation or
//! further coordination.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use image::RgbaImage;
use log::{debug, warn};

/// Image formats supported for plot snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl SnapshotFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SnapshotFormat::Png => "png",
            SnapshotFormat::Jpeg => "jpg",
            SnapshotFormat::Bmp => "bmp",
            SnapshotFormat::Tiff => "tiff",
        }
    }
}

/// Outcome of a snapshot task.
#[derive(Debug, Clone)]
pub enum SnapshotEvent {
    /// All requested files were written.
    Saved(Vec<PathBuf>),
    /// Writing failed; the message describes the first failure.
    Failed(String),
}

/// Background task writing a plot image to `<base>.<ext>` for each format.
pub struct SavePlotImageTask {
    image: RgbaImage,
    base_path: PathBuf,
    formats: Vec<SnapshotFormat>,
    events: Sender<SnapshotEvent>,
}

impl SavePlotImageTask {
    /// Create a task together with the receiver for its completion event.
    ///
    /// `formats` defaults to PNG when empty.
    pub fn new(
        image: RgbaImage,
        base_path: impl Into<PathBuf>,
        formats: Vec<SnapshotFormat>,
    ) -> (Self, Receiver<SnapshotEvent>) {
        let (tx, rx) = channel();
        let formats = if formats.is_empty() {
            vec![SnapshotFormat::Png]
        } else {
            formats
        };
        (
            Self {
                image,
                base_path: base_path.into(),
                formats,
                events: tx,
            },
            rx,
        )
    }

    /// Spawn the worker thread. The task reports through the receiver
    /// returned by [`SavePlotImageTask::new`] and the thread ends after one
    /// event.
    pub fn spawn(self) {
        thread::spawn(move || {
            let mut saved = Vec::with_capacity(self.formats.len());
            for fmt in &self.formats {
                let path = self.base_path.with_extension(fmt.extension());
                match self.image.save(&path) {
                    Ok(()) => {
                        debug!("snapshot written to {}", path.display());
                        saved.push(path);
                    }
                    Err(e) => {
                        warn!("snapshot write to {} failed: {e}", path.display());
                        let _ = self.events.send(SnapshotEvent::Failed(e.to_string()));
                        return;
                    }
                }
            }
            let _ = self.events.send(SnapshotEvent::Saved(saved));
        });
    }
}

/// Convert an egui screenshot region into an image buffer for saving.
pub fn color_image_to_rgba(img: &egui::ColorImage) -> RgbaImage {
    let (w, h) = (img.size[0] as u32, img.size[1] as u32);
    let mut out = RgbaImage::new(w, h);
    for (i, px) in img.pixels.iter().enumerate() {
        let x = (i as u32) % w;
        let y = (i as u32) / w;
        out.put_pixel(x, y, image::Rgba([px.r(), px.g(), px.b(), px.a()]));
    }
    out
}
