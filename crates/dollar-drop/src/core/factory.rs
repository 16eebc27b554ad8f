//! Builds the row of sprites once the dollar texture has loaded.

use glam::Vec2;
use crate::api::config::PhysicsParams;
use crate::api::types::{Extent, SpriteId, TextureId};
use crate::components::sprite::Sprite;
use crate::core::rng::Rng;

/// How many sprites fit side by side across `width`.
pub fn sprite_count(width: f32, sprite_size: f32) -> u32 {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if !usable(width) || !usable(sprite_size) {
        return 0;
    }
    (width / sprite_size).floor() as u32
}

/// Height sprites start from: one sprite above the top edge.
pub fn spawn_y(viewport: Extent, sprite_size: f32) -> f32 {
    viewport.height / 2.0 + sprite_size
}

/// Height sprites come to rest at: sitting on the bottom edge.
pub fn rest_y(viewport: Extent, sprite_size: f32) -> f32 {
    -viewport.height / 2.0 + sprite_size / 2.0
}

/// Horizontal center of the sprite with 1-based `index`.
pub fn column_x(index: u32, viewport_width: f32, sprite_size: f32, side_offset: f32) -> f32 {
    -viewport_width / 2.0 + sprite_size / 2.0 + side_offset + (index as f32 - 1.0) * sprite_size
}

/// Create the sprite for 1-based `index`, at rest above the viewport with a random delay.
pub fn create_sprite(
    texture: TextureId,
    index: u32,
    viewport: Extent,
    side_offset: f32,
    params: &PhysicsParams,
    rng: &mut Rng,
) -> Sprite {
    let size = params.sprite_size;
    let initial_y = spawn_y(viewport, size);

    Sprite {
        id: SpriteId(index),
        texture,
        pos: Vec2::new(column_x(index, viewport.width, size, side_offset), initial_y),
        size,
        velocity_y: 0.0,
        target_y: rest_y(viewport, size),
        initial_y,
        bounce_count: 0,
        delay: rng.range(0.0, params.max_delay),
    }
}

/// Create the full row for `viewport`: `sprite_count` sprites, indices 1..=N.
pub fn create_row(
    texture: TextureId,
    viewport: Extent,
    side_offset: f32,
    params: &PhysicsParams,
    rng: &mut Rng,
) -> Vec<Sprite> {
    let count = sprite_count(viewport.width, params.sprite_size);
    (1..=count)
        .map(|index| create_sprite(texture, index, viewport, side_offset, params, rng))
        .collect()
}
