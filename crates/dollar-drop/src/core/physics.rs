//! Vertical free-fall with a damped floor bounce.
//!
//! Units follow the footer animation: gravity scales with the frame delta but
//! position moves by the whole velocity each frame, so motion is
//! frame-rate dependent.

use crate::api::config::PhysicsParams;
use crate::components::sprite::Sprite;

/// What a single integration step did to a sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Elapsed time has not passed the sprite's delay. Nothing changed.
    Dormant,
    /// Gravity and velocity were applied; no floor contact.
    Moved,
    /// The sprite crossed its floor and was clamped back onto it.
    Bounced {
        /// Velocity at the moment of contact (negative).
        impact: f32,
        /// Velocity after reflection and damping.
        rebound: f32,
    },
}

/// Advance one sprite by one frame.
///
/// Once `bounce_count` reaches the limit, positive rebounds above the freeze
/// epsilon are zeroed. Gravity still applies on the next frame, so a
/// "frozen" sprite keeps re-touching the floor at vanishing amplitude.
pub fn step(sprite: &mut Sprite, delta: f32, elapsed: f32, params: &PhysicsParams) -> StepOutcome {
    if sprite.is_dormant(elapsed) {
        return StepOutcome::Dormant;
    }

    sprite.velocity_y -= params.gravity * delta;
    sprite.pos.y += sprite.velocity_y;

    let mut outcome = StepOutcome::Moved;
    if sprite.pos.y < sprite.target_y {
        let impact = sprite.velocity_y;
        sprite.pos.y = sprite.target_y;
        sprite.velocity_y *= -params.bounce_damping;
        sprite.bounce_count += 1;
        outcome = StepOutcome::Bounced {
            impact,
            rebound: sprite.velocity_y,
        };
    }

    if sprite.bounce_count >= params.bounce_limit && sprite.velocity_y > params.freeze_epsilon {
        sprite.velocity_y = 0.0;
        if let StepOutcome::Bounced { impact, .. } = outcome {
            outcome = StepOutcome::Bounced { impact, rebound: 0.0 };
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SpriteId, TextureId};
    use glam::Vec2;

    fn sprite_at(y: f32, target_y: f32, delay: f32) -> Sprite {
        Sprite {
            id: SpriteId(1),
            texture: TextureId(0),
            pos: Vec2::new(0.0, y),
            size: 45.0,
            velocity_y: 0.0,
            target_y,
            initial_y: y,
            bounce_count: 0,
            delay,
        }
    }

    #[test]
    fn dormant_sprite_does_not_move() {
        let params = PhysicsParams::default();
        let mut sprite = sprite_at(100.0, 0.0, 2.0);
        for i in 0..20 {
            let elapsed = i as f32 * 0.1;
            assert_eq!(step(&mut sprite, 0.1, elapsed, &params), StepOutcome::Dormant);
        }
        assert_eq!(sprite.pos.y, 100.0);
        assert_eq!(sprite.velocity_y, 0.0);
    }

    #[test]
    fn falling_velocity_strictly_decreases() {
        let params = PhysicsParams::default();
        let mut sprite = sprite_at(1000.0, 0.0, 0.0);
        let mut last = sprite.velocity_y;
        for _ in 0..10 {
            assert_eq!(step(&mut sprite, 0.016, 1.0, &params), StepOutcome::Moved);
            assert!(sprite.velocity_y < last);
            last = sprite.velocity_y;
        }
    }

    #[test]
    fn floor_contact_clamps_and_counts() {
        let params = PhysicsParams::default();
        let mut sprite = sprite_at(1.0, 0.0, 0.0);
        sprite.velocity_y = -5.0;
        let outcome = step(&mut sprite, 0.1, 1.0, &params);

        let impact = -5.0 - 9.8 * 0.1;
        match outcome {
            StepOutcome::Bounced { impact: i, rebound } => {
                assert!((i - impact).abs() < 1e-5);
                assert!((rebound - (-impact * 0.6)).abs() < 1e-5);
            }
            other => panic!("expected bounce, got {:?}", other),
        }
        assert_eq!(sprite.pos.y, 0.0);
        assert_eq!(sprite.bounce_count, 1);
    }

    #[test]
    fn rebound_is_zeroed_after_limit() {
        let params = PhysicsParams::default();
        let mut sprite = sprite_at(0.5, 0.0, 0.0);
        sprite.bounce_count = params.bounce_limit - 1;
        sprite.velocity_y = -3.0;

        let outcome = step(&mut sprite, 0.1, 1.0, &params);
        assert!(matches!(outcome, StepOutcome::Bounced { rebound, .. } if rebound == 0.0));
        assert_eq!(sprite.velocity_y, 0.0);
        assert_eq!(sprite.bounce_count, params.bounce_limit);
    }

    #[test]
    fn frozen_sprite_still_feels_gravity() {
        let params = PhysicsParams::default();
        let mut sprite = sprite_at(0.0, 0.0, 0.0);
        sprite.bounce_count = params.bounce_limit;

        // Resting on the floor: gravity pulls it under, it bounces with a tiny rebound.
        let outcome = step(&mut sprite, 0.001, 1.0, &params);
        assert!(matches!(outcome, StepOutcome::Bounced { .. }));
        assert_eq!(sprite.pos.y, 0.0);
        assert_eq!(sprite.bounce_count, params.bounce_limit + 1);
        // 9.8 * 0.001 * 0.6 is below the epsilon, so the clamp leaves it alone.
        assert!(sprite.velocity_y > 0.0 && sprite.velocity_y <= params.freeze_epsilon);
    }
}
