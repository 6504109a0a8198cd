// OpenGL render target for engines that draw into a host texture

mod gl_renderer;

pub use gl_renderer::GlVideoRenderer;
