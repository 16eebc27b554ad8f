use crate::components::sprite::Sprite;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Rebuild the render buffer from the sprites, keeping their order.
pub fn build_render_buffer<'a>(sprites: impl Iterator<Item = &'a Sprite>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for sprite in sprites {
        buffer.push(RenderInstance::from_sprite(sprite));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SpriteId, TextureId};
    use glam::Vec2;

    #[test]
    fn buffer_mirrors_sprite_positions() {
        let sprites: Vec<Sprite> = (1..=3)
            .map(|i| Sprite {
                id: SpriteId(i),
                texture: TextureId(2),
                pos: Vec2::new(i as f32 * 10.0, -(i as f32)),
                size: 45.0,
                velocity_y: 0.0,
                target_y: 0.0,
                initial_y: 0.0,
                bounce_count: 0,
                delay: 0.0,
            })
            .collect();

        let mut buffer = RenderBuffer::new();
        buffer.push(RenderInstance::default());
        build_render_buffer(sprites.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.instances[2], RenderInstance { x: 30.0, y: -3.0, size: 45.0, texture: 2.0 });
    }
}
