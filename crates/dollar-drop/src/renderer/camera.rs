use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Orthographic camera centered on the canvas.
/// One world unit maps to one CSS pixel, origin at the canvas center, Y-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    pub near: f32,
    pub far: f32,
    /// Eye distance along +Z.
    pub eye_z: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 16;
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            near: 0.1,
            far: 1000.0,
            eye_z: 10.0,
        }
    }

    pub fn left(&self) -> f32 {
        -self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        -self.height / 2.0
    }

    /// Projection combined with the view offset of the eye.
    pub fn view_projection(&self) -> Mat4 {
        let projection = Mat4::orthographic_rh(
            self.left(),
            self.right(),
            self.bottom(),
            self.top(),
            self.near,
            self.far,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.eye_z));
        projection * view
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            projection: self.view_projection().to_cols_array_2d(),
        }
    }

    /// Replace the frustum bounds after a container resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
