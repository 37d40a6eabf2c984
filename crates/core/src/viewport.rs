//! Viewport sizing: logical CSS size, device pixel ratio, backing store.
//!
//! The render target reports its size twice: the backing store (device
//! pixels, what the GPU rasterizes into) and the CSS size (logical
//! pixels, what layout sees). Both derive from one [`Viewport`] value.

/// Logical viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

/// Backing store size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

/// A viewport: logical size plus the device pixel ratio in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub logical: LogicalSize,
    pub dpr: f64,
}

impl Viewport {
    /// Builds a viewport from a logical size and a device pixel ratio.
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            logical: LogicalSize { width, height },
            dpr,
        }
    }

    /// Backing store resolution: the logical size scaled by the device
    /// pixel ratio. Fractional results truncate, matching assignment to
    /// a canvas `width`/`height` attribute.
    pub fn backing(&self) -> BackingSize {
        BackingSize {
            width: (self.logical.width * self.dpr) as u32,
            height: (self.logical.height * self.dpr) as u32,
        }
    }

    /// CSS width of the target element, e.g. `"800px"`. Always the
    /// logical size, never scaled by the pixel ratio.
    pub fn css_width(&self) -> String {
        format!("{}px", self.logical.width)
    }

    /// CSS height of the target element, e.g. `"600px"`.
    pub fn css_height(&self) -> String {
        format!("{}px", self.logical.height)
    }
}
