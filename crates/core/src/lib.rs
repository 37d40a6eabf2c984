#![deny(unsafe_code)]
//! Core building blocks for the wave-line animated background.
//!
//! Provides the per-pixel waveform model (`waves`), viewport sizing
//! (`viewport`), frame timing (`clock`), CPU frame export (`pixel`),
//! embedded GLSL sources (`shaders`), and color presentation (`color`).
//! The `render` feature adds the glow-based GPU pipeline; the `png`
//! feature adds PNG snapshot output.

pub mod clock;
pub mod color;
pub mod error;
pub mod pixel;
pub mod shaders;
pub mod viewport;
pub mod waves;

#[cfg(feature = "png")]
pub mod snapshot;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "render")]
pub use glow;

pub use clock::FrameClock;
pub use color::Srgb;
pub use error::BackgroundError;
pub use viewport::{BackingSize, LogicalSize, Viewport};
