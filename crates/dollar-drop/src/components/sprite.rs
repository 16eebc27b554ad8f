use glam::Vec2;
use crate::api::types::{SpriteId, TextureId};

/// One falling dollar cutout.
///
/// `pos.x` is fixed at spawn. `pos.y` and `velocity_y` are owned by the
/// physics integrator and change once per frame once the sprite is awake.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// 1-based ordinal among the spawned sprites.
    pub id: SpriteId,
    /// Texture drawn on the quad.
    pub texture: TextureId,
    /// Position in world space (origin at the canvas center, Y-up).
    pub pos: Vec2,
    /// Rendered edge length in world units.
    pub size: f32,
    /// Signed vertical velocity in world units per frame. Negative is falling.
    pub velocity_y: f32,
    /// Height the sprite rests at. Constant for the sprite's lifetime.
    pub target_y: f32,
    /// Height the sprite starts from and is restored to on reset.
    pub initial_y: f32,
    /// Floor hits since the last reset.
    pub bounce_count: u32,
    /// Seconds of animation time the sprite stays dormant.
    pub delay: f32,
}

impl Sprite {
    /// Put the sprite back above the top edge with a fresh start delay.
    pub fn restore(&mut self, delay: f32) {
        self.pos.y = self.initial_y;
        self.velocity_y = 0.0;
        self.bounce_count = 0;
        self.delay = delay;
    }

    /// Whether the sprite is still waiting for its delay to pass.
    pub fn is_dormant(&self, elapsed: f32) -> bool {
        elapsed <= self.delay
    }
}
