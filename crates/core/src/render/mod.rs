//! GPU rendering pipeline.
//!
//! Only available with the `render` feature. Everything here needs a
//! live `glow::Context` except the error types and source formatting.
//!
//! # Module overview
//!
//! - [`shader`] -- Stage compilation, program linking, error formatting.
//! - [`geometry`] -- The full-screen quad and its attribute layout.
//! - [`renderer`] -- The per-frame renderer driving the whole pipeline.

pub mod geometry;
pub mod renderer;
pub mod shader;

// Re-export key types at the render module level for convenience.
pub use geometry::{FullscreenQuad, QUAD_VERTEX_COUNT};
pub use renderer::{RendererError, ShaderRenderer};
pub use shader::{
    build_program, compile_stage, format_shader_error, link_program, ShaderError, ShaderStage,
};
