//! Shader stage compilation and program linking.
//!
//! The compile and link functions need a live `glow::Context`; the
//! error formatting is pure string work and testable anywhere. Driver
//! diagnostics reference source line numbers, so compile failures carry
//! a numbered listing of the offending source next to the log.

use std::fmt;
use thiserror::Error;

/// The two programmable stages of the background pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL object type for this stage.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors from shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A stage was rejected by the driver's compiler.
    #[error("{stage} shader compile error:\n{log}")]
    Compile {
        /// The stage that failed.
        stage: ShaderStage,
        /// Driver log, with a numbered source listing when available.
        log: String,
    },
    /// Both stages compiled but the program failed to link.
    #[error("program link error:\n{0}")]
    Link(String),
}

/// Pairs the driver's error log with a line-numbered copy of the source.
///
/// Line numbers are right-aligned to the widest number so the listing
/// stays columnar. Either input may be empty; whatever is present is
/// returned, joined by a blank line when both are.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let width = source.lines().count().to_string().len();
    let mut listing = String::new();
    for (i, line) in source.lines().enumerate() {
        if !listing.is_empty() {
            listing.push('\n');
        }
        listing.push_str(&format!("{:>width$}: {line}", i + 1));
    }

    match (listing.is_empty(), log.is_empty()) {
        (_, true) => listing,
        (true, false) => log.to_string(),
        (false, false) => format!("{listing}\n\n{log}"),
    }
}

/// Compiles one shader stage from source.
///
/// On failure the partial shader object is deleted and a
/// [`ShaderError::Compile`] carries the driver log plus the numbered
/// source listing.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if the driver rejects the source.
#[allow(unsafe_code)]
pub fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow exposes raw GL entry points as unsafe. The stage maps
    // to one of the two valid shader kinds, and the handle is deleted on
    // the failure path.
    unsafe {
        let shader = gl
            .create_shader(stage.gl_type())
            .map_err(|log| ShaderError::Compile { stage, log })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if gl.get_shader_compile_status(shader) {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            Err(ShaderError::Compile {
                stage,
                log: format_shader_error(source, &log),
            })
        }
    }
}

/// Links compiled vertex and fragment stages into a program.
///
/// The stages are detached after linking regardless of outcome -- the
/// program keeps its own copies. On failure the partial program object
/// is deleted.
///
/// # Errors
///
/// Returns `ShaderError::Link` if the driver rejects the combination.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: the stage handles come from successful compile_stage
    // calls; the program object is deleted on the failure path.
    unsafe {
        let program = gl.create_program().map_err(ShaderError::Link)?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        if gl.get_program_link_status(program) {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            Err(ShaderError::Link(log))
        }
    }
}

/// Compiles both stages and links them into a program.
///
/// Setup aborts at the first failing step: a rejected vertex stage is
/// reported before the fragment stage is ever compiled. The stage
/// objects are freed on every path; only the linked program survives.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if either stage fails, or
/// `ShaderError::Link` if linking fails.
#[allow(unsafe_code)]
pub fn build_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
        Ok(f) => f,
        Err(e) => {
            // SAFETY: vertex is a live handle from compile_stage.
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };

    let program = link_program(gl, vertex, fragment);

    // SAFETY: both handles are live; a linked program keeps its own
    // copies, and on failure they are no longer needed either.
    unsafe {
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- format_shader_error ---

    #[test]
    fn formatting_numbers_every_source_line() {
        let source = "precision highp float;\nuniform float iTime\nvoid main() {}";
        let log = "ERROR: 0:2: ';' : missing before 'void'";
        let formatted = format_shader_error(source, log);

        assert!(
            formatted.contains("1: precision highp float;"),
            "expected numbered line 1, got:\n{formatted}"
        );
        assert!(
            formatted.contains("2: uniform float iTime"),
            "expected numbered line 2, got:\n{formatted}"
        );
        assert!(
            formatted.contains(log),
            "expected the driver log, got:\n{formatted}"
        );
    }

    #[test]
    fn formatting_keeps_source_order() {
        let source = "alpha\nbravo\ncharlie";
        let formatted = format_shader_error(source, "");
        assert_eq!(formatted, "1: alpha\n2: bravo\n3: charlie");
    }

    #[test]
    fn formatting_right_aligns_line_numbers() {
        let source = ["float a;"; 11].join("\n");
        let formatted = format_shader_error(&source, "err");
        let lines: Vec<&str> = formatted.lines().collect();

        assert!(
            lines[0].starts_with(" 1: "),
            "single digits should pad, got: '{}'",
            lines[0]
        );
        assert!(
            lines[10].starts_with("11: "),
            "double digits should not pad, got: '{}'",
            lines[10]
        );
    }

    #[test]
    fn formatting_with_empty_source_returns_the_log() {
        assert_eq!(format_shader_error("", "some error"), "some error");
    }

    #[test]
    fn formatting_with_empty_log_returns_the_listing() {
        assert_eq!(format_shader_error("void main() {}", ""), "1: void main() {}");
    }

    #[test]
    fn formatting_with_both_empty_is_empty() {
        assert_eq!(format_shader_error("", ""), "");
    }

    #[test]
    fn formatting_separates_listing_and_log_with_a_blank_line() {
        let formatted = format_shader_error("x", "boom");
        assert_eq!(formatted, "1: x\n\nboom");
    }

    // --- stages and errors ---

    #[test]
    fn stages_map_to_their_gl_object_types() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn stage_display_is_lowercase() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn compile_error_display_names_the_stage_and_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "'waveLine' : no matching overloaded function".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("fragment"), "missing stage in: {msg}");
        assert!(msg.contains("waveLine"), "missing log in: {msg}");
    }

    #[test]
    fn link_error_display_includes_the_log() {
        let err = ShaderError::Link("vertex outputs do not match fragment inputs".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("do not match"),
            "missing log in: {msg}"
        );
    }

    #[test]
    fn shader_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ShaderError>();
    }

    #[test]
    #[ignore = "requires GL context"]
    fn compile_stage_reports_the_driver_log() {
        // Would test: compiling "not glsl" returns Compile with a
        // numbered listing and the driver message.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn build_program_frees_stage_objects_on_success() {
        // Would test: after build_program, only the program handle is
        // live; the stage handles are deleted.
    }
}
