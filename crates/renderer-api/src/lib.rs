// Video render target abstraction layer

use hearth_core::Result;

/// GPU texture name, as the graphics API numbers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    ClampToEdge,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Linear,
    Nearest,
}

/// Sampling setup of a render target texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    pub wrap: TextureWrap,
    pub filter: TextureFilter,
}

impl TextureParams {
    /// Clamped, linearly filtered: what a video frame needs
    pub fn video() -> Self {
        Self {
            wrap: TextureWrap::ClampToEdge,
            filter: TextureFilter::Linear,
        }
    }
}

impl Default for TextureParams {
    fn default() -> Self {
        Self::video()
    }
}

/// How to composite one full-viewport quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadParams {
    /// Clear the viewport before drawing
    pub clear: bool,
    /// Opacity, 0.0 to 1.0
    pub alpha: f32,
}

impl QuadParams {
    /// `alpha` in the host's 0-255 range
    pub fn new(clear: bool, alpha: u32) -> Self {
        Self {
            clear,
            alpha: alpha.min(255) as f32 / 255.0,
        }
    }
}

/// Video renderer trait
/// Owns the textures a playback engine renders into and presents them.
/// Calls must be made with the host's rendering context current.
pub trait VideoRenderer: Send {
    /// Allocate a 2D texture; texturing state is left disabled
    fn create_texture(&mut self, params: &TextureParams) -> Result<TextureId>;

    /// Draw `texture` as one quad covering the viewport, with blending
    /// enabled during the draw and reset to opaque afterwards
    fn draw_quad(&mut self, texture: TextureId, params: &QuadParams) -> Result<()>;

    fn release_texture(&mut self, texture: TextureId);
}

#[cfg(any(test, feature = "test-util"))]
pub mod recording {
    use super::*;
    use hearth_core::PlayerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum RenderCall {
        Created(TextureId, TextureParams),
        Drawn(TextureId, QuadParams),
        Released(TextureId),
    }

    /// Renderer that logs calls; clones share the log
    #[derive(Clone, Default)]
    pub struct RecordingRenderer {
        calls: Arc<Mutex<Vec<RenderCall>>>,
        fail_create: Arc<Mutex<bool>>,
        next_id: Arc<Mutex<u32>>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_fail_create(&self, fail: bool) {
            *self.fail_create.lock() = fail;
        }

        pub fn calls(&self) -> Vec<RenderCall> {
            self.calls.lock().clone()
        }
    }

    impl VideoRenderer for RecordingRenderer {
        fn create_texture(&mut self, params: &TextureParams) -> Result<TextureId> {
            if *self.fail_create.lock() {
                return Err(PlayerError::Render("texture allocation failed".to_string()));
            }
            let mut next_id = self.next_id.lock();
            *next_id += 1;
            let texture = TextureId(*next_id);
            self.calls.lock().push(RenderCall::Created(texture, *params));
            Ok(texture)
        }

        fn draw_quad(&mut self, texture: TextureId, params: &QuadParams) -> Result<()> {
            self.calls.lock().push(RenderCall::Drawn(texture, *params));
            Ok(())
        }

        fn release_texture(&mut self, texture: TextureId) {
            self.calls.lock().push(RenderCall::Released(texture));
        }
    }
}
