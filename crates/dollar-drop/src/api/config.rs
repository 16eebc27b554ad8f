use serde::{Deserialize, Serialize};

/// Tunables for the drop physics.
/// Defaults reproduce the footer animation as shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Downward acceleration, applied as `velocity_y -= gravity * dt`.
    pub gravity: f32,
    /// Fraction of speed kept on each floor bounce.
    pub bounce_damping: f32,
    /// Bounce count after which upward rebounds are clamped.
    pub bounce_limit: u32,
    /// Rebound speed below which the freeze clamp does not engage.
    pub freeze_epsilon: f32,
    /// Edge length of a sprite in world units. Also the horizontal pitch.
    pub sprite_size: f32,
    /// Upper bound (exclusive) of the random start delay, in seconds.
    pub max_delay: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            bounce_damping: 0.6,
            bounce_limit: 10,
            freeze_epsilon: 0.01,
            sprite_size: 45.0,
            max_delay: 3.0,
        }
    }
}

/// Page-level configuration for the footer animation.
/// Loaded from a JSON string handed over by the page script; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    /// Path of the transparent sprite image the page loads.
    pub image_path: String,
    /// Draw the debug grid behind the sprites.
    pub show_helper: bool,
    /// Desired sprite count above the breakpoint. Overridden by the width-derived count.
    pub count: u32,
    /// Desired sprite count at or below the breakpoint. Overridden by the width-derived count.
    pub mobile_count: u32,
    /// Horizontal offset of the first sprite above the breakpoint.
    pub side_offset: f32,
    /// Horizontal offset of the first sprite at or below the breakpoint.
    pub mobile_side_offset: f32,
    /// Window width (inclusive) at which the mobile values apply.
    pub mobile_breakpoint: f32,
    /// Selector of the element whose box sizes the canvas.
    pub container_selector: String,
    /// Selector of the element whose bottom edge triggers the drop.
    pub trigger_selector: String,
    /// Extra distance below the viewport bottom at which the trigger activates.
    pub trigger_offset: f32,
    /// Clear colour as 0xRRGGBB.
    pub background: u32,
    pub physics: PhysicsParams,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            image_path: "./src/footer-dollar@2x.png".to_string(),
            show_helper: false,
            count: 10,
            mobile_count: 33,
            side_offset: 13.0,
            mobile_side_offset: 10.0,
            mobile_breakpoint: 991.0,
            container_selector: ".div-block-9".to_string(),
            trigger_selector: "footer".to_string(),
            trigger_offset: 1.0,
            background: 0x111111,
            physics: PhysicsParams::default(),
        }
    }
}

impl DropConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_mobile(&self, window_width: f32) -> bool {
        window_width <= self.mobile_breakpoint
    }

    /// Side offset for the current window width.
    pub fn side_offset_for(&self, window_width: f32) -> f32 {
        if self.is_mobile(window_width) {
            self.mobile_side_offset
        } else {
            self.side_offset
        }
    }

    /// Configured count for the current window width.
    /// Only reported in logs: the spawn count always comes from the container width.
    pub fn configured_count_for(&self, window_width: f32) -> u32 {
        if self.is_mobile(window_width) {
            self.mobile_count
        } else {
            self.count
        }
    }

    /// Background as RGB floats in [0, 1].
    pub fn background_rgb(&self) -> [f32; 3] {
        let r = ((self.background >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.background >> 8) & 0xff) as f32 / 255.0;
        let b = (self.background & 0xff) as f32 / 255.0;
        [r, g, b]
    }
}
