//! Icon and animation asset loading.
//!
//! Widgets that show an icon, watermark or loading animation take an
//! `egui::TextureHandle`; this module produces those handles from PNG, SVG
//! and animated GIF files on disk.

use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::AnimationDecoder;

use crate::error::{Result, WidgetError};

/// Load a still image (PNG, JPEG, BMP, ...) into a texture.
pub fn load_image_texture(ctx: &Context, path: &Path) -> Result<TextureHandle> {
    let img = image::open(path)?.into_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let color = ColorImage::from_rgba_unmultiplied([w, h], img.as_raw());
    Ok(ctx.load_texture(path.display().to_string(), color, TextureOptions::LINEAR))
}

/// Rasterize an SVG file at its intrinsic size into a texture.
pub fn load_svg_texture(ctx: &Context, path: &Path) -> Result<TextureHandle> {
    let data = std::fs::read(path)?;
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).map_err(|e| WidgetError::Svg(e.to_string()))?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return Err(WidgetError::Svg(format!(
            "zero-sized SVG: {}",
            path.display()
        )));
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| WidgetError::Svg("could not allocate pixmap".to_string()))?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let color = ColorImage::from_rgba_unmultiplied(
        [size.width() as usize, size.height() as usize],
        pixmap.data(),
    );
    Ok(ctx.load_texture(path.display().to_string(), color, TextureOptions::LINEAR))
}

/// One frame of an animated GIF.
pub struct AnimationFrame {
    pub texture: TextureHandle,
    /// How long this frame stays on screen.
    pub delay: Duration,
}

/// A decoded GIF animation ready for frame-by-frame display.
pub struct Animation {
    pub frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Total loop duration.
    pub fn duration(&self) -> Duration {
        self.frames.iter().map(|f| f.delay).sum()
    }

    /// The frame to display at `elapsed` time into the (looping) animation.
    pub fn frame_at(&self, elapsed: Duration) -> Option<&AnimationFrame> {
        if self.frames.is_empty() {
            return None;
        }
        let total = self.duration();
        if total.is_zero() {
            return self.frames.first();
        }
        let mut t = Duration::from_nanos((elapsed.as_nanos() % total.as_nanos()) as u64);
        for frame in &self.frames {
            if t < frame.delay {
                return Some(frame);
            }
            t -= frame.delay;
        }
        self.frames.last()
    }
}

/// Decode an animated GIF into per-frame textures with their delays.
pub fn load_gif_animation(ctx: &Context, path: &Path) -> Result<Animation> {
    let file = std::fs::File::open(path)?;
    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(file))?;
    let mut frames = Vec::new();
    for (i, frame) in decoder.into_frames().enumerate() {
        let frame = frame?;
        let (num_ms, den_ms) = frame.delay().numer_denom_ms();
        let delay_ms = if den_ms == 0 {
            num_ms as f64
        } else {
            num_ms as f64 / den_ms as f64
        };
        let buf = frame.into_buffer();
        let (w, h) = (buf.width() as usize, buf.height() as usize);
        let color = ColorImage::from_rgba_unmultiplied([w, h], buf.as_raw());
        let texture = ctx.load_texture(
            format!("{}#{i}", path.display()),
            color,
            TextureOptions::LINEAR,
        );
        frames.push(AnimationFrame {
            texture,
            delay: Duration::from_millis(delay_ms.max(10.0) as u64),
        });
    }
    Ok(Animation { frames })
}
