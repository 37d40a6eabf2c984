//! Full-screen quad geometry.
//!
//! Four corner vertices drawn as a two-triangle strip cover the whole
//! viewport; the vertex stage passes them straight to clip space. The
//! quad is uploaded once at construction and never changes.

use crate::shaders;

/// Quad corners in clip space, in strip order: bottom-left,
/// bottom-right, top-left, top-right.
pub const QUAD_VERTICES: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// Vertices issued per draw; the strip makes two triangles of them.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// The uploaded quad: a vertex array capturing the corner buffer and
/// the `position` attribute layout.
pub struct FullscreenQuad {
    vao: glow::VertexArray,
}

impl FullscreenQuad {
    /// Uploads the quad and records the attribute layout against
    /// `program`'s position attribute.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if the vertex array or buffer cannot
    /// be created, or a description if the program lacks the attribute.
    /// Partially created objects are deleted on every failure path.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context, program: glow::Program) -> Result<Self, String> {
        use glow::HasContext;

        // SAFETY: object creation takes no raw pointers, and the buffer
        // upload reads exactly the bytes of QUAD_VERTICES.
        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = match gl.create_buffer() {
                Ok(b) => b,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(e);
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );

            let position = match gl.get_attrib_location(program, shaders::ATTRIB_POSITION) {
                Some(index) => index,
                None => {
                    gl.bind_vertex_array(None);
                    gl.delete_buffer(vbo);
                    gl.delete_vertex_array(vao);
                    return Err(format!(
                        "attribute '{}' missing from the program",
                        shaders::ATTRIB_POSITION
                    ));
                }
            };
            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_f32(position, 2, glow::FLOAT, false, 0, 0);
            gl.bind_vertex_array(None);

            Ok(Self { vao })
        }
    }

    /// Binds the quad's vertex array for drawing.
    #[allow(unsafe_code)]
    pub fn bind(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: the vertex array is a live handle created in upload.
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }
}
