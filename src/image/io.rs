//! I/O helpers at the edge of the engine.
//!
//! - `decode_rgba`: decode PNG/JPEG bytes into an owned RGBA buffer.
//! - `load_rgba_image`: read an image file into an owned RGBA buffer.
//! - `save_rgba_png`: write an RGBA buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Decoding and encoding are delegated to the `image` crate; the processing
//! modules only ever see `RgbaImage`.
use super::rgba::RgbaImage;
use image::{ImageBuffer, Rgba as ImageRgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode compressed image bytes into an RGBA buffer.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| format!("Failed to decode image: {e}"))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaImage::from_raw(width, height, img.into_raw()).map_err(|e| e.to_string())
}

/// Load an image from disk and convert it to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    decode_rgba(&bytes).map_err(|e| format!("{e} ({})", path.display()))
}

/// Save an RGBA buffer to a PNG.
pub fn save_rgba_png(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let width = u32::try_from(image.width())
        .map_err(|_| format!("Image too wide to encode: {}", image.width()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| format!("Image too tall to encode: {}", image.height()))?;
    let out: ImageBuffer<ImageRgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, image.as_bytes().to_vec())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
