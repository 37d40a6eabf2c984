//! PNG snapshots of CPU-evaluated frames.
//!
//! Feature-gated behind `png` so browser builds skip the `image` crate;
//! the pixel conversion itself lives in [`crate::pixel`].

use crate::error::BackgroundError;
use crate::pixel::frame_rgba;
use std::path::Path;

/// Writes one frame of the background at `time` seconds as a PNG.
///
/// Returns `BackgroundError::InvalidDimensions` for zero dimensions, or
/// `BackgroundError::Io` on encode/write failure.
pub fn write_png(width: u32, height: u32, time: f32, path: &Path) -> Result<(), BackgroundError> {
    let rgba = frame_rgba(width, height, time)?;
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| BackgroundError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| BackgroundError::Io(e.to_string()))
}
