//! Per-pixel waveform model for the animated background.
//!
//! This is the CPU mirror of the fragment stage in [`crate::shaders`]:
//! the same five sine-displaced bands, evaluated in `f32` with the same
//! constants, so snapshots and tests see what the GPU draws. Everything
//! here is a pure function of (pixel, resolution, time).

use glam::{Vec2, Vec3};

/// Number of overlaid wave lines. Lines are indexed `0..LINE_COUNT` and
/// derive their parameters from `t = index / LINE_COUNT`.
pub const LINE_COUNT: usize = 5;

/// Peak vertical displacement of a wave, in uv units.
pub const WAVE_AMPLITUDE: f32 = 0.2;

/// Half-thickness of the fully lit band core, in uv units.
pub const CORE_HALF_THICKNESS: f32 = 0.004;

/// Half-width of the soft falloff around the band core at the screen
/// edges; it narrows toward the center.
pub const GLOW_WIDTH: f32 = 0.06;

/// Lower bound on the falloff half-width. The glow ramp reaches exactly
/// zero near the screen center, where an unguarded Hermite falloff would
/// divide by zero (undefined in GLSL, NaN here).
pub const GLOW_FLOOR: f32 = 1e-4;

/// GLSL-style Hermite smoothstep.
///
/// Accepts reversed edges (`edge0 > edge1`), which produce the mirrored
/// 1 -> 0 ramp the band falloffs rely on. The edges must differ.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Centered, aspect-corrected uv coordinates for a pixel.
///
/// The origin sits at the screen center and one uv unit spans the
/// viewport height, so `uv.y` covers [-0.5, 0.5] while `uv.x` scales
/// with the aspect ratio.
pub fn normalized_uv(pixel: Vec2, resolution: Vec2) -> Vec2 {
    (pixel - 0.5 * resolution) / resolution.y
}

/// Shape parameters for one wave line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    /// Phase advance per second, in radians.
    pub speed: f32,
    /// Spatial frequency along x, in radians per uv unit.
    pub frequency: f32,
    /// Band color before intensity falloff.
    pub tint: Vec3,
}

impl LineSpec {
    /// Parameters for line `index`, meaningful for `index < LINE_COUNT`.
    ///
    /// With `t = index / LINE_COUNT`: speed `0.3 + 0.3t`, frequency
    /// `4 + t`, tint `(0.2 + 0.7t, 0.2 + 0.4t, 0.3)`.
    pub fn for_index(index: usize) -> Self {
        let t = index as f32 / LINE_COUNT as f32;
        Self {
            speed: 0.3 + t * 0.3,
            frequency: 4.0 + t,
            tint: Vec3::new(0.2 + t * 0.7, 0.2 + t * 0.4, 0.3),
        }
    }
}

/// Vertical displacement of a line at `uv_x`, damped to zero at the
/// screen edges so every wave pins flat where it fades out.
pub fn wave_offset(uv_x: f32, time: f32, line: &LineSpec) -> f32 {
    let envelope = smoothstep(1.0, 0.0, uv_x.abs());
    envelope * (time * line.speed + uv_x * line.frequency).sin() * WAVE_AMPLITUDE
}

/// Band brightness at `wave_distance` (the pixel's vertical distance
/// from the displaced wave), for a column at `|uv.x| = abs_x`.
///
/// Full brightness within [`CORE_HALF_THICKNESS`] of the wave, then a
/// Hermite falloff over a glow that widens from [`GLOW_FLOOR`] at the
/// center to [`GLOW_WIDTH`] at the edges.
pub fn band_intensity(abs_x: f32, wave_distance: f32) -> f32 {
    let glow = (GLOW_WIDTH * smoothstep(0.2, 0.9, abs_x)).max(GLOW_FLOOR);
    smoothstep(glow, 0.0, wave_distance - CORE_HALF_THICKNESS)
}

/// Horizontal fade: 1 across the middle of the screen, 0 at and beyond
/// `|uv.x| = 1`.
pub fn edge_fade(abs_x: f32) -> f32 {
    smoothstep(1.0, 0.3, abs_x)
}

/// Color contribution of one line at `uv`.
pub fn line_sample(uv: Vec2, time: f32, line: &LineSpec) -> Vec3 {
    let abs_x = uv.x.abs();
    let wave_y = uv.y + wave_offset(uv.x, time, line);
    line.tint * band_intensity(abs_x, wave_y.abs()) * edge_fade(abs_x)
}

/// Summed color of all lines at one pixel.
///
/// The sum is left unclamped; the output format clamps at quantization.
pub fn eval_pixel(pixel: Vec2, resolution: Vec2, time: f32) -> Vec3 {
    let uv = normalized_uv(pixel, resolution);
    let mut acc = Vec3::ZERO;
    for index in 0..LINE_COUNT {
        acc += line_sample(uv, time, &LineSpec::for_index(index));
    }
    acc
}
