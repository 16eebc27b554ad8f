use bytemuck::{Pod, Zeroable};
use crate::components::sprite::Sprite;

/// Per-sprite render data read by the page's renderer.
/// 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X center in world space.
    pub x: f32,
    /// Y center in world space.
    pub y: f32,
    /// Quad edge length in world units.
    pub size: f32,
    /// Texture handle, as a float for the flat buffer.
    pub texture: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_sprite(sprite: &Sprite) -> Self {
        Self {
            x: sprite.pos.x,
            y: sprite.pos.y,
            size: sprite.size,
            texture: sprite.texture.0 as f32,
        }
    }
}

/// Instances for one frame, in spawn order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// The instances as one flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_4_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 4);
    }

    #[test]
    fn flat_view_interleaves_fields() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance { x: 1.0, y: 2.0, size: 45.0, texture: 0.0 });
        buf.push(RenderInstance { x: 3.0, y: 4.0, size: 45.0, texture: 1.0 });
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 45.0, 0.0, 3.0, 4.0, 45.0, 1.0]);
    }
}
