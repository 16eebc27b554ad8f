/// Unique identifier for a sprite in the drop field.
/// Matches the 1-based ordinal the sprite was spawned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// Handle to a texture the page has finished loading.
/// The numeric value is chosen by the host; the engine only passes it through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Container and window dimensions as reported by the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
