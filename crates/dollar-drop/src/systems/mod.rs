pub mod animation;
pub mod render;
pub mod trigger;
pub mod viewport;
