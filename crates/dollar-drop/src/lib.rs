//! Footer "dollar drop" animation: a row of sprites falls from above the
//! footer, bounces with decaying velocity and settles. Headless: the host
//! feeds frame deltas and page events, and supplies the renderer.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{DropConfig, PhysicsParams};
pub use api::types::{Extent, SpriteId, TextureId};
pub use components::sprite::Sprite;
pub use crate::core::factory::{create_row, create_sprite, sprite_count};
pub use crate::core::physics::{step, StepOutcome};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::AnimationClock;
pub use renderer::camera::{Camera2D, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::traits::{FrameData, Renderer};
pub use input::queue::{DropInput, InputQueue};
pub use systems::animation::{AnimationDriver, AnimationState, FrameReport};
pub use systems::trigger::{ScrollEdge, ScrollTrigger, TriggerController, TriggerOutcome, TriggerPhase};
pub use systems::viewport::{apply_resize, resolve_extent};
