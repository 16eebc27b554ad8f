use dollar_drop::{CameraUniform, FrameData, RenderInstance, Renderer};

/// Renderer that copies each frame into flat buffers for the page's WebGL code.
/// The page reads them through the pointer exports after every tick.
pub struct BufferRenderer {
    instances: Vec<f32>,
    camera: [f32; CameraUniform::FLOATS],
    background: [f32; 3],
    show_helper: bool,
    width: f32,
    height: f32,
    draws: u64,
}

impl BufferRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            instances: Vec::with_capacity(64 * RenderInstance::FLOATS),
            camera: [0.0; CameraUniform::FLOATS],
            background: [0.0; 3],
            show_helper: false,
            width,
            height,
            draws: 0,
        }
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        (self.instances.len() / RenderInstance::FLOATS) as u32
    }

    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera.as_ptr()
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn show_helper(&self) -> bool {
        self.show_helper
    }

    /// Drawing surface size in CSS pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Renderer for BufferRenderer {
    fn backend(&self) -> &'static str {
        "buffer"
    }

    fn draw(&mut self, frame: &FrameData) {
        self.instances.clear();
        self.instances.extend_from_slice(bytemuck::cast_slice(frame.instances));
        self.camera = bytemuck::cast(frame.camera.projection);
        self.background = frame.background;
        self.show_helper = frame.show_helper;
        self.draws += 1;
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dollar_drop::Camera2D;

    #[test]
    fn draw_copies_frame() {
        let mut renderer = BufferRenderer::new(100.0, 100.0);
        let instances = [
            RenderInstance { x: 1.0, y: 2.0, size: 45.0, texture: 0.0 },
            RenderInstance { x: 3.0, y: 4.0, size: 45.0, texture: 0.0 },
        ];
        let camera = Camera2D::new(100.0, 100.0).uniform();
        renderer.draw(&FrameData {
            instances: &instances,
            camera,
            background: [0.5, 0.5, 0.5],
            show_helper: true,
        });

        assert_eq!(renderer.instance_count(), 2);
        assert_eq!(&renderer.instances()[4..8], &[3.0, 4.0, 45.0, 0.0]);
        assert_eq!(renderer.camera[0], camera.projection[0][0]);
        assert!(renderer.show_helper());
        assert_eq!(renderer.draws(), 1);
    }
}
