// OpenGL video renderer on top of glow

use glow::HasContext;
use hearth_core::{PlayerError, Result};
use hearth_renderer_api::{
    QuadParams, TextureFilter, TextureId, TextureParams, TextureWrap, VideoRenderer,
};
use log::{debug, error, info};
use std::num::NonZeroU32;
use std::sync::Arc;

const VERTEX_SHADER: &str = r#"#version 130
in vec2 a_pos;
in vec2 a_uv;
out vec2 v_uv;
void main() {
    v_uv = a_uv;
    gl_Position = vec4(a_pos, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 130
in vec2 v_uv;
out vec4 frag_color;
uniform sampler2D u_texture;
uniform float u_alpha;
void main() {
    vec4 color = texture(u_texture, v_uv);
    frag_color = vec4(color.rgb, color.a * u_alpha);
}
"#;

/// Full-viewport quad: position (vec2) + uv (vec2), drawn as a triangle fan
#[rustfmt::skip]
pub(crate) const QUAD_VERTICES: [f32; 16] = [
    // pos.x, pos.y, uv.x, uv.y
    -1.0, -1.0,  0.0, 0.0,  // bottom-left
     1.0, -1.0,  1.0, 0.0,  // bottom-right
     1.0,  1.0,  1.0, 1.0,  // top-right
    -1.0,  1.0,  0.0, 1.0,  // top-left
];

pub(crate) fn gl_wrap(wrap: TextureWrap) -> i32 {
    match wrap {
        TextureWrap::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
        TextureWrap::Repeat => glow::REPEAT as i32,
    }
}

pub(crate) fn gl_filter(filter: TextureFilter) -> i32 {
    match filter {
        TextureFilter::Linear => glow::LINEAR as i32,
        TextureFilter::Nearest => glow::NEAREST as i32,
    }
}

pub(crate) fn to_texture_id(texture: glow::Texture) -> TextureId {
    TextureId(texture.0.get())
}

pub(crate) fn to_gl_texture(texture: TextureId) -> Option<glow::Texture> {
    NonZeroU32::new(texture.get()).map(glow::NativeTexture)
}

/// Renders engine-written textures into the host's GL context
pub struct GlVideoRenderer {
    gl: Arc<glow::Context>,
    program: Option<glow::Program>,
    vao: Option<glow::VertexArray>,
    vbo: Option<glow::Buffer>,
    textures: Vec<glow::Texture>,
}

impl GlVideoRenderer {
    pub fn new(gl: Arc<glow::Context>) -> Self {
        Self {
            gl,
            program: None,
            vao: None,
            vbo: None,
            textures: Vec::new(),
        }
    }

    /// Compile the quad program and upload the quad on first use
    fn ensure_pipeline(&mut self) -> Result<glow::Program> {
        if let Some(program) = self.program {
            return Ok(program);
        }

        let gl = &self.gl;
        unsafe {
            let vertex_shader = compile_shader(gl, glow::VERTEX_SHADER, VERTEX_SHADER)?;
            let fragment_shader = match compile_shader(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER) {
                Ok(shader) => shader,
                Err(e) => {
                    gl.delete_shader(vertex_shader);
                    return Err(e);
                }
            };

            let program = gl.create_program().map_err(|e| {
                PlayerError::Render(format!("Failed to create shader program: {}", e))
            })?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.bind_attrib_location(program, 0, "a_pos");
            gl.bind_attrib_location(program, 1, "a_uv");
            gl.link_program(program);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(PlayerError::Render(format!(
                    "Shader program linking failed: {}",
                    log
                )));
            }

            let mut partial = PartialPipeline::new(program);
            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(e) => {
                    partial.abandon(|object| delete_object(gl, object));
                    return Err(PlayerError::Render(format!(
                        "Failed to create vertex array: {}",
                        e
                    )));
                }
            };
            partial.push(PipelineObject::VertexArray(vao));
            gl.bind_vertex_array(Some(vao));

            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.bind_vertex_array(None);
                    partial.abandon(|object| delete_object(gl, object));
                    return Err(PlayerError::Render(format!(
                        "Failed to create buffer: {}",
                        e
                    )));
                }
            };
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, 16, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, 16, 8);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            self.program = Some(program);
            self.vao = Some(vao);
            self.vbo = Some(vbo);
            info!("Video quad pipeline initialized");
            Ok(program)
        }
    }
}

/// GL object owned by the quad pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PipelineObject {
    Program(glow::Program),
    VertexArray(glow::VertexArray),
}

/// Objects created by a pipeline build that has not finished yet
pub(crate) struct PartialPipeline {
    created: Vec<PipelineObject>,
}

impl PartialPipeline {
    pub(crate) fn new(program: glow::Program) -> Self {
        Self {
            created: vec![PipelineObject::Program(program)],
        }
    }

    pub(crate) fn push(&mut self, object: PipelineObject) {
        self.created.push(object);
    }

    /// Hand every created object to `delete`, newest first
    pub(crate) fn abandon<F: FnMut(PipelineObject)>(self, mut delete: F) {
        for object in self.created.into_iter().rev() {
            delete(object);
        }
    }
}

unsafe fn delete_object(gl: &glow::Context, object: PipelineObject) {
    match object {
        PipelineObject::Program(program) => gl.delete_program(program),
        PipelineObject::VertexArray(vao) => gl.delete_vertex_array(vao),
    }
}

unsafe fn compile_shader(gl: &glow::Context, kind: u32, source: &str) -> Result<glow::Shader> {
    let shader = gl
        .create_shader(kind)
        .map_err(|e| PlayerError::Render(format!("Failed to create shader: {}", e)))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(PlayerError::Render(format!(
            "Shader compilation failed: {}",
            log
        )));
    }
    Ok(shader)
}

impl VideoRenderer for GlVideoRenderer {
    fn create_texture(&mut self, params: &TextureParams) -> Result<TextureId> {
        let gl = &self.gl;
        let texture = unsafe {
            gl.enable(glow::TEXTURE_2D);
            let texture = gl.create_texture().map_err(|e| {
                gl.disable(glow::TEXTURE_2D);
                PlayerError::Render(format!("Failed to create texture: {}", e))
            })?;

            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, gl_wrap(params.wrap));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, gl_wrap(params.wrap));
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                gl_filter(params.filter),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                gl_filter(params.filter),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.disable(glow::TEXTURE_2D);
            texture
        };

        self.textures.push(texture);
        let id = to_texture_id(texture);
        debug!("Created video texture {}", id.get());
        Ok(id)
    }

    fn draw_quad(&mut self, texture: TextureId, params: &QuadParams) -> Result<()> {
        let gl_texture = to_gl_texture(texture)
            .ok_or_else(|| PlayerError::Render("texture 0 is not a texture".to_string()))?;
        let program = self.ensure_pipeline()?;

        let gl = &self.gl;
        unsafe {
            if params.clear {
                gl.clear_color(0.0, 0.0, 0.0, 0.0);
                gl.clear(glow::COLOR_BUFFER_BIT);
            }

            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            gl.use_program(Some(program));
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(gl_texture));
            if let Some(loc) = gl.get_uniform_location(program, "u_texture") {
                gl.uniform_1_i32(Some(&loc), 0);
            }
            if let Some(loc) = gl.get_uniform_location(program, "u_alpha") {
                gl.uniform_1_f32(Some(&loc), params.alpha);
            }

            gl.bind_vertex_array(self.vao);
            gl.draw_arrays(glow::TRIANGLE_FAN, 0, 4);
            gl.bind_vertex_array(None);

            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.use_program(None);
            gl.blend_func(glow::ONE, glow::ZERO);
            gl.flush();
        }
        Ok(())
    }

    fn release_texture(&mut self, texture: TextureId) {
        let Some(gl_texture) = to_gl_texture(texture) else {
            return;
        };
        if let Some(index) = self.textures.iter().position(|t| *t == gl_texture) {
            self.textures.swap_remove(index);
            unsafe { self.gl.delete_texture(gl_texture) };
            debug!("Released video texture {}", texture.get());
        } else {
            error!("Release of unknown texture {}", texture.get());
        }
    }
}

impl Drop for GlVideoRenderer {
    fn drop(&mut self) {
        let gl = &self.gl;
        unsafe {
            for texture in self.textures.drain(..) {
                gl.delete_texture(texture);
            }
            if let Some(program) = self.program.take() {
                gl.delete_program(program);
            }
            if let Some(vao) = self.vao.take() {
                gl.delete_vertex_array(vao);
            }
            if let Some(vbo) = self.vbo.take() {
                gl.delete_buffer(vbo);
            }
        }
    }
}
