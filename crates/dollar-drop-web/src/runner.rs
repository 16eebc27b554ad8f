use dollar_drop::{
    apply_resize, resolve_extent, AnimationDriver, AnimationState, Camera2D, DropConfig,
    DropInput, Extent, FrameReport, InputQueue, TriggerController, TriggerPhase,
};
use crate::renderer::BufferRenderer;

/// Wires the drop animation to the page.
///
/// Page callbacks push `DropInput`s; the page's requestAnimationFrame loop
/// calls `tick` every frame. Inputs are applied at the start of the next
/// tick, so sprite state only ever changes between frames.
pub struct DropRunner {
    config: DropConfig,
    state: AnimationState,
    driver: AnimationDriver,
    trigger: TriggerController,
    input: InputQueue,
    camera: Camera2D,
    renderer: BufferRenderer,
    /// Drawing size at init. Sprites are laid out against it even after a resize.
    viewport: Extent,
    /// Breakpoint offset chosen from the init-time window.
    side_offset: f32,
    last_report: Option<FrameReport>,
}

impl DropRunner {
    pub fn new(config: DropConfig, container: Extent, window: Extent, seed: u64) -> Self {
        let viewport = resolve_extent(container, window);
        let state = AnimationState::new(config.physics.clone(), seed);
        let driver = AnimationDriver::new(config.background_rgb(), config.show_helper);
        let trigger = TriggerController::new(config.trigger_offset);
        let side_offset = config.side_offset_for(window.width);

        log::debug!(
            "runner: configured count {} overridden by width-derived count",
            config.configured_count_for(window.width)
        );

        Self {
            state,
            driver,
            trigger,
            input: InputQueue::new(),
            camera: Camera2D::new(viewport.width, viewport.height),
            renderer: BufferRenderer::new(viewport.width, viewport.height),
            viewport,
            side_offset,
            last_report: None,
            config,
        }
    }

    /// Queue a page event for the next frame.
    pub fn push_input(&mut self, event: DropInput) {
        self.input.push(event);
    }

    /// Run one frame: apply queued events, then advance and draw if playing.
    /// Returns true if a frame was drawn.
    pub fn tick(&mut self, dt: f32) -> bool {
        for event in self.input.drain() {
            self.apply(event);
        }

        self.last_report = self
            .driver
            .tick(&mut self.state, dt, &self.camera, &mut self.renderer);
        self.last_report.is_some()
    }

    fn apply(&mut self, event: DropInput) {
        match event {
            DropInput::TextureLoaded { texture } => {
                self.state.populate(texture, self.viewport, self.side_offset);
            }
            DropInput::TextureFailed => {
                log::warn!("runner: failed to load {}, nothing to drop", self.config.image_path);
            }
            DropInput::Scroll { trigger_bottom, viewport_bottom } => {
                self.trigger
                    .on_scroll(trigger_bottom, viewport_bottom, &mut self.state, &mut self.driver);
            }
            DropInput::Reset => {
                self.trigger.on_reset(&mut self.state);
            }
            DropInput::Resize { container, window } => {
                apply_resize(container, window, &mut self.camera, &mut self.renderer);
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.trigger.phase(&self.state) == TriggerPhase::Playing
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    pub fn last_report(&self) -> Option<FrameReport> {
        self.last_report
    }

    pub fn renderer(&self) -> &BufferRenderer {
        &self.renderer
    }

    // ---- Pointer accessors for page reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.renderer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.renderer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.renderer.camera_ptr()
    }

    pub fn canvas_width(&self) -> f32 {
        self.renderer.size().0
    }

    pub fn canvas_height(&self) -> f32 {
        self.renderer.size().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dollar_drop::TextureId;

    fn runner() -> DropRunner {
        DropRunner::new(
            DropConfig::default(),
            Extent::new(900.0, 300.0),
            Extent::new(1440.0, 800.0),
            21,
        )
    }

    #[test]
    fn nothing_drawn_before_trigger() {
        let mut r = runner();
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        assert!(!r.tick(0.016));
        assert_eq!(r.state().scene.len(), 20);
        assert_eq!(r.instance_count(), 0);
        assert!(!r.is_playing());
    }

    #[test]
    fn scroll_into_view_starts_drawing() {
        let mut r = runner();
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        r.push_input(DropInput::Scroll { trigger_bottom: 800.0, viewport_bottom: 800.0 });
        assert!(r.tick(0.016));
        assert!(r.is_playing());
        assert_eq!(r.instance_count(), 20);

        // Sprites use the desktop offset: window is wider than the breakpoint.
        let first_x = r.renderer().instances()[0];
        assert!((first_x - (-450.0 + 22.5 + 13.0)).abs() < 1e-4);
    }

    #[test]
    fn inputs_wait_for_the_next_frame() {
        let mut r = runner();
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        r.push_input(DropInput::Scroll { trigger_bottom: 800.0, viewport_bottom: 800.0 });
        assert!(!r.is_playing());
        r.tick(0.016);
        assert!(r.is_playing());
    }

    #[test]
    fn reset_rewinds_clock() {
        let mut r = runner();
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        r.push_input(DropInput::Scroll { trigger_bottom: 800.0, viewport_bottom: 800.0 });
        for _ in 0..120 {
            r.tick(1.0 / 60.0);
        }
        assert!(r.last_report().unwrap().elapsed > 1.9);

        r.push_input(DropInput::Reset);
        r.tick(1.0 / 60.0);
        let report = r.last_report().unwrap();
        assert_eq!(report.elapsed, 0.0);
        assert_eq!(report.dormant, 20);
    }

    #[test]
    fn resize_reshapes_camera_not_sprites() {
        let mut r = runner();
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        r.tick(0.016);
        r.push_input(DropInput::Resize {
            container: Extent::new(0.0, 0.0),
            window: Extent::new(600.0, 400.0),
        });
        r.tick(0.016);
        assert_eq!(r.canvas_width(), 600.0);
        assert_eq!(r.canvas_height(), 400.0);
        assert_eq!(r.state().scene.len(), 20);
    }

    #[test]
    fn resize_before_texture_keeps_init_layout() {
        let mut r = runner();
        r.push_input(DropInput::Resize {
            container: Extent::new(700.0, 300.0),
            window: Extent::new(800.0, 600.0),
        });
        r.push_input(DropInput::TextureLoaded { texture: TextureId(0) });
        r.tick(0.016);

        // Desktop offset and init-time width, although the window is now below the breakpoint.
        let sprites: Vec<_> = r.state().scene.iter().collect();
        assert_eq!(sprites.len(), 20);
        assert!((sprites[0].pos.x - (-450.0 + 22.5 + 13.0)).abs() < 1e-4, "x was {}", sprites[0].pos.x);
        assert_eq!(r.canvas_width(), 700.0);
    }

    #[test]
    fn failed_texture_leaves_field_empty() {
        let mut r = runner();
        r.push_input(DropInput::TextureFailed);
        r.push_input(DropInput::Scroll { trigger_bottom: 800.0, viewport_bottom: 800.0 });
        assert!(r.tick(0.016));
        assert_eq!(r.instance_count(), 0);
    }
}
