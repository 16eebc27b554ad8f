//! Canvas sizing. Sits at the edge of the engine: it only reshapes the
//! camera and the drawing surface, never the sprites.

use crate::api::types::Extent;
use crate::renderer::camera::Camera2D;
use crate::renderer::traits::Renderer;

/// The size to draw at: the container's box, falling back per axis to the
/// window when the container reports zero, NaN or infinity.
pub fn resolve_extent(container: Extent, window: Extent) -> Extent {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    let width = if usable(container.width) { container.width } else { window.width };
    let height = if usable(container.height) { container.height } else { window.height };
    if width != container.width || height != container.height {
        log::warn!(
            "viewport: container is {}x{}, using window size {}x{}",
            container.width, container.height, width, height
        );
    }
    Extent::new(width, height)
}

/// Apply a resize to the camera frustum and the drawing surface.
/// Sprite count and positions are left as spawned.
pub fn apply_resize(
    container: Extent,
    window: Extent,
    camera: &mut Camera2D,
    renderer: &mut dyn Renderer,
) -> Extent {
    let extent = resolve_extent(container, window);
    camera.resize(extent.width, extent.height);
    renderer.resize(extent.width, extent.height);
    log::debug!("viewport: resized to {}x{}", extent.width, extent.height);
    extent
}
