//! Embedded GLSL ES 3.00 sources and the pipeline wire contract.
//!
//! Shader source is opaque text data handed to the driver's compiler;
//! it lives here ungated so callers (the CLI's contract listing, the
//! GPU pipeline) share one copy. The fragment stage must stay in lock
//! step with the CPU model in [`crate::waves`]: same constants, same
//! five-line loop, same unclamped additive sum.

/// Uniform carrying the backing resolution, in device pixels.
pub const UNIFORM_RESOLUTION: &str = "iResolution";

/// Uniform carrying elapsed seconds since construction.
pub const UNIFORM_TIME: &str = "iTime";

/// Vertex attribute carrying the quad corner positions.
pub const ATTRIB_POSITION: &str = "position";

/// Vertex stage: passes the quad corners straight to clip space.
pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

/// Fragment stage: five sine-displaced glowing bands, summed additively.
///
/// `waveLine` displaces the pixel's uv.y by an edge-damped sine of
/// (time, x), lights a thin band around the displaced wave with a glow
/// that widens toward the screen edges, and fades the result out as
/// |uv.x| approaches 1. The glow width is floored at 1e-4 so the
/// falloff's Hermite ramp never divides by zero at the screen center.
pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec2 iResolution;
uniform float iTime;

out vec4 fragColor;

vec4 waveLine(vec2 uv, float speed, float frequency, vec3 tint) {
    uv.y += smoothstep(1.0, 0.0, abs(uv.x)) * sin(iTime * speed + uv.x * frequency) * 0.2;
    float glow = max(0.06 * smoothstep(0.2, 0.9, abs(uv.x)), 1e-4);
    float band = smoothstep(glow, 0.0, abs(uv.y) - 0.004);
    return vec4(band * tint, 1.0) * smoothstep(1.0, 0.3, abs(uv.x));
}

void main() {
    vec2 uv = (gl_FragCoord.xy - 0.5 * iResolution.xy) / iResolution.y;
    vec4 color = vec4(0.0);
    for (float i = 0.0; i < 5.0; i += 1.0) {
        float t = i / 5.0;
        color += waveLine(uv, 0.3 + t * 0.3, 4.0 + t, vec3(0.2 + t * 0.7, 0.2 + t * 0.4, 0.3));
    }
    fragColor = color;
}
"#;
