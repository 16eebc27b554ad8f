//! Seam to the drawing backend.
//!
//! The engine never touches a canvas. Once per frame the animation driver
//! hands a `FrameData` to whatever `Renderer` the host supplied: the web
//! bridge copies it into a buffer for the page's WebGL code, tests record it.

use super::camera::CameraUniform;
use super::instance::RenderInstance;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Sprite quads, in spawn order.
    pub instances: &'a [RenderInstance],
    /// Orthographic view-projection for this frame.
    pub camera: CameraUniform,
    /// Clear colour, RGB in [0, 1].
    pub background: [f32; 3],
    /// Draw the debug grid.
    pub show_helper: bool,
}

pub trait Renderer {
    /// Backend identifier (e.g. "webgl", "buffer").
    fn backend(&self) -> &'static str;

    /// Draw one complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Resize the drawing surface, in CSS pixels.
    fn resize(&mut self, width: f32, height: f32);
}
