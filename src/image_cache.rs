//! Step image loading and texture caching.
//!
//! Step images are read synchronously from disk on first use, decoded with
//! the `image` crate, and uploaded as egui textures. A load failure never
//! aborts the step: the dialog falls back to text-only and the failure is
//! logged. Failures are cached too, so a missing file warns once instead of
//! every frame.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, TextureHandle, TextureOptions, Vec2};

/// Cached load outcome per image path.
enum CacheEntry {
    Loaded(TextureHandle),
    Failed,
}

/// Texture cache keyed by image path.
#[derive(Default)]
pub struct StepImageCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl StepImageCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `path`, loading and uploading on first use.
    ///
    /// Returns `None` after a failed load; the dialog then renders
    /// text-only.
    pub fn texture(&mut self, ctx: &Context, path: &Path) -> Option<TextureHandle> {
        if !self.entries.contains_key(path) {
            let entry = match load_color_image(path) {
                Ok(img) => {
                    let name = format!("guidepost-image:{}", path.display());
                    CacheEntry::Loaded(ctx.load_texture(name, img, TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::warn!("Failed to load step image {path:?}: {e}");
                    CacheEntry::Failed
                }
            };
            self.entries.insert(path.to_path_buf(), entry);
        }
        match self.entries.get(path) {
            Some(CacheEntry::Loaded(tex)) => Some(tex.clone()),
            _ => None,
        }
    }

    /// Drop all cached textures and failure markers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Decode an image file into an egui color image.
///
/// Animated formats (GIF) decode as their first frame.
pub fn load_color_image(path: &Path) -> anyhow::Result<ColorImage> {
    let img = image::open(path)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// Display size for a texture capped at `max_width`, preserving aspect
/// ratio. Images narrower than the cap render at their natural size.
pub fn scaled_size(texture_size: Vec2, max_width: f32) -> Vec2 {
    if texture_size.x <= max_width || texture_size.x <= 0.0 {
        texture_size
    } else {
        Vec2::new(max_width, texture_size.y * max_width / texture_size.x)
    }
}
