//! Animation driver: the per-frame loop over the drop field.

use crate::api::config::PhysicsParams;
use crate::api::types::{Extent, TextureId};
use crate::core::factory;
use crate::core::physics::{self, StepOutcome};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::AnimationClock;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameData, Renderer};
use crate::systems::render::build_render_buffer;

/// Mutable state shared by the trigger controller and the animation driver.
///
/// Everything the page script used to keep in module globals lives here and
/// is passed by reference; nothing else owns sprites or the clock.
pub struct AnimationState {
    pub scene: Scene,
    pub clock: AnimationClock,
    pub params: PhysicsParams,
    /// Set once the scroll trigger has fired. Never cleared.
    played: bool,
    /// Whether the frame loop has been scheduled.
    running: bool,
    rng: Rng,
}

impl AnimationState {
    pub fn new(params: PhysicsParams, seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            clock: AnimationClock::new(),
            params,
            played: false,
            running: false,
            rng: Rng::new(seed),
        }
    }

    /// Spawn the row of sprites for `viewport`. Replaces any existing row.
    /// Returns the number of sprites spawned.
    pub fn populate(&mut self, texture: TextureId, viewport: Extent, side_offset: f32) -> usize {
        self.scene.clear();
        for sprite in factory::create_row(texture, viewport, side_offset, &self.params, &mut self.rng) {
            self.scene.spawn(sprite);
        }
        log::info!(
            "drop: spawned {} sprites for {}x{}",
            self.scene.len(), viewport.width, viewport.height
        );
        self.scene.len()
    }

    /// Put every sprite back above the top edge with a fresh delay and zero the clock.
    /// Leaves the played flag and the loop untouched.
    pub fn restore_initial(&mut self) {
        let max_delay = self.params.max_delay;
        for sprite in self.scene.iter_mut() {
            sprite.restore(self.rng.range(0.0, max_delay));
        }
        self.clock.restart();
    }

    pub fn played(&self) -> bool {
        self.played
    }

    pub(crate) fn mark_played(&mut self) {
        self.played = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Per-frame statistics, mostly for the host's debug overlay and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub delta: f32,
    pub elapsed: f32,
    /// Sprites still waiting on their delay.
    pub dormant: u32,
    /// Floor contacts this frame.
    pub bounces: u32,
}

/// Runs the frame loop: clock, physics for every sprite, one draw.
pub struct AnimationDriver {
    buffer: RenderBuffer,
    background: [f32; 3],
    show_helper: bool,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(background: [f32; 3], show_helper: bool) -> Self {
        Self {
            buffer: RenderBuffer::new(),
            background,
            show_helper,
            frames: 0,
        }
    }

    /// Schedule the frame loop. Callers gate re-entry through the played flag.
    pub fn start(&mut self, state: &mut AnimationState) {
        state.running = true;
        log::info!("drop: frame loop started");
    }

    /// Run one frame. Does nothing until the loop has been started.
    pub fn tick(
        &mut self,
        state: &mut AnimationState,
        frame_dt: f32,
        camera: &Camera2D,
        renderer: &mut dyn Renderer,
    ) -> Option<FrameReport> {
        if !state.running {
            return None;
        }

        let delta = state.clock.advance(frame_dt);
        let elapsed = state.clock.elapsed();
        let mut report = FrameReport { delta, elapsed, ..FrameReport::default() };

        for sprite in state.scene.iter_mut() {
            match physics::step(sprite, delta, elapsed, &state.params) {
                StepOutcome::Dormant => report.dormant += 1,
                StepOutcome::Bounced { .. } => report.bounces += 1,
                StepOutcome::Moved => {}
            }
        }

        build_render_buffer(state.scene.iter(), &mut self.buffer);
        renderer.draw(&FrameData {
            instances: &self.buffer.instances,
            camera: camera.uniform(),
            background: self.background,
            show_helper: self.show_helper,
        });

        self.frames += 1;
        Some(report)
    }

    /// Frames drawn since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
