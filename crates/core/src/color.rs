//! Color presentation for the wave-line palette.
//!
//! The waveform math works in `glam::Vec3`; this module converts those
//! values into an [`Srgb`] color for display purposes (the line table,
//! JSON output). Conversion clamps, hex quantizes to 8-bit.

use glam::Vec3;
use serde::{Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// Hex output has 8-bit quantization (1/255 precision loss), which is
/// acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Srgb {
    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped to [0, 1] and quantized to 8-bit with
    /// rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<Vec3> for Srgb {
    /// Clamps an accumulated (possibly over-bright) color into sRGB range.
    fn from(v: Vec3) -> Self {
        Srgb {
            r: v.x.clamp(0.0, 1.0),
            g: v.y.clamp(0.0, 1.0),
            b: v.z.clamp(0.0, 1.0),
        }
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_formats_primary_colors() {
        assert_eq!(
            Srgb {
                r: 1.0,
                g: 0.0,
                b: 0.0
            }
            .to_hex(),
            "#ff0000"
        );
        assert_eq!(
            Srgb {
                r: 0.0,
                g: 0.0,
                b: 0.0
            }
            .to_hex(),
            "#000000"
        );
    }

    #[test]
    fn to_hex_rounds_to_eight_bits() {
        // 0.2 * 255 = 51 = 0x33, 0.3 * 255 = 76.5 rounds to 77 = 0x4d
        let hex = Srgb {
            r: 0.2,
            g: 0.2,
            b: 0.3,
        }
        .to_hex();
        assert_eq!(hex, "#33334d");
    }

    #[test]
    fn to_hex_clamps_out_of_range_components() {
        let hex = Srgb {
            r: 1.5,
            g: -0.2,
            b: 0.5,
        }
        .to_hex();
        assert_eq!(hex, "#ff0080", "over-range must clamp, not wrap");
    }

    #[test]
    fn from_vec3_clamps_accumulated_color() {
        let srgb = Srgb::from(Vec3::new(2.4, -1.0, 0.25));
        assert_eq!(srgb.r, 1.0);
        assert_eq!(srgb.g, 0.0);
        assert_eq!(srgb.b, 0.25);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Srgb {
            r: 0.2,
            g: 0.2,
            b: 0.3,
        })
        .unwrap();
        assert_eq!(json, "\"#33334d\"");
    }
}
