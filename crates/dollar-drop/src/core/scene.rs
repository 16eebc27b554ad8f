use crate::components::sprite::Sprite;

/// Flat storage for the drop field's sprites, kept in spawn order.
pub struct Scene {
    sprites: Vec<Sprite>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            sprites: Vec::with_capacity(64),
        }
    }

    /// Add a sprite to the scene.
    pub fn spawn(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        self.sprites.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SpriteId, TextureId};
    use glam::Vec2;

    fn sprite(id: u32) -> Sprite {
        Sprite {
            id: SpriteId(id),
            texture: TextureId(0),
            pos: Vec2::new(id as f32 * 45.0, 0.0),
            size: 45.0,
            velocity_y: 0.0,
            target_y: 0.0,
            initial_y: 0.0,
            bounce_count: 0,
            delay: 0.0,
        }
    }

    #[test]
    fn spawn_and_iterate_mut() {
        let mut scene = Scene::new();
        scene.spawn(sprite(1));
        scene.spawn(sprite(2));
        assert_eq!(scene.len(), 2);
        for s in scene.iter_mut() {
            s.pos.y = -5.0;
        }
        assert!(scene.iter().all(|s| s.pos.y == -5.0));
    }

    #[test]
    fn iteration_keeps_spawn_order() {
        let mut scene = Scene::new();
        for id in 1..=4 {
            scene.spawn(sprite(id));
        }
        let ids: Vec<u32> = scene.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        scene.spawn(sprite(1));
        scene.clear();
        assert!(scene.is_empty());
    }
}
