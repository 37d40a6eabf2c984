//! CPU frame evaluation to RGBA8 pixel buffers.
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! in-memory consumer share one conversion.

use crate::error::BackgroundError;
use crate::waves;
use glam::Vec2;

/// Evaluates one frame of the background as a tightly packed RGBA8
/// buffer in top-down row order.
///
/// Pixels are sampled at their centers, matching `gl_FragCoord`, with
/// rows flipped from the GL bottom-up convention to image order.
/// Channel sums above 1 clamp at quantization; alpha is always 255.
///
/// Returns `BackgroundError::InvalidDimensions` if either dimension is
/// zero.
pub fn frame_rgba(width: u32, height: u32, time: f32) -> Result<Vec<u8>, BackgroundError> {
    if width == 0 || height == 0 {
        return Err(BackgroundError::InvalidDimensions);
    }
    let resolution = Vec2::new(width as f32, height as f32);
    let mut buf = Vec::with_capacity(width as usize * height as usize * 4);
    for row in 0..height {
        let frag_y = (height - row) as f32 - 0.5;
        for col in 0..width {
            let frag = Vec2::new(col as f32 + 0.5, frag_y);
            let color = waves::eval_pixel(frag, resolution, time);
            buf.push(quantize(color.x));
            buf.push(quantize(color.y));
            buf.push(quantize(color.z));
            buf.push(255);
        }
    }
    Ok(buf)
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
