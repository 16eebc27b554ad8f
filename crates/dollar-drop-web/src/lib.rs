//! `wasm-bindgen` exports for the footer dollar drop.
//!
//! Page wiring, in order:
//! - `dollars_init` once the canvas and container exist
//! - `dollars_texture_loaded` / `dollars_texture_failed` from the image loader
//! - `dollars_scroll` from the scroll listener, `dollars_reset` from the replay
//!   button, `dollars_resize` from the window resize listener
//! - `dollars_tick` from requestAnimationFrame; when it returns true, read the
//!   instance and camera buffers and draw

pub mod renderer;
pub mod runner;

pub use renderer::BufferRenderer;
pub use runner::DropRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use dollar_drop::{DropConfig, DropInput, Extent, TextureId};

thread_local! {
    static RUNNER: RefCell<Option<DropRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut DropRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("dollar-drop: not initialized, call dollars_init() first");
                None
            }
        }
    })
}

fn push(event: DropInput) {
    with_runner(|r| r.push_input(event));
}

#[wasm_bindgen]
pub fn dollars_init(
    config_json: &str,
    container_width: f32,
    container_height: f32,
    window_width: f32,
    window_height: f32,
) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match DropConfig::from_json(config_json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("dollar-drop: bad config ({}), using defaults", err);
            DropConfig::default()
        }
    };

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let runner = DropRunner::new(
        config,
        Extent::new(container_width, container_height),
        Extent::new(window_width, window_height),
        seed,
    );

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("dollar-drop: initialized");
}

#[wasm_bindgen]
pub fn dollars_texture_loaded(texture: u32) {
    push(DropInput::TextureLoaded { texture: TextureId(texture) });
}

#[wasm_bindgen]
pub fn dollars_texture_failed() {
    push(DropInput::TextureFailed);
}

#[wasm_bindgen]
pub fn dollars_scroll(trigger_bottom: f32, viewport_bottom: f32) {
    push(DropInput::Scroll { trigger_bottom, viewport_bottom });
}

#[wasm_bindgen]
pub fn dollars_reset() {
    push(DropInput::Reset);
}

#[wasm_bindgen]
pub fn dollars_resize(container_width: f32, container_height: f32, window_width: f32, window_height: f32) {
    push(DropInput::Resize {
        container: Extent::new(container_width, container_height),
        window: Extent::new(window_width, window_height),
    });
}

/// Returns true when a new frame is ready in the buffers.
#[wasm_bindgen]
pub fn dollars_tick(dt: f32) -> bool {
    with_runner(|r| r.tick(dt)).unwrap_or(false)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

/// Column-major 4x4 view-projection, 16 floats.
#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_canvas_width() -> f32 {
    with_runner(|r| r.canvas_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_canvas_height() -> f32 {
    with_runner(|r| r.canvas_height()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_background() -> Vec<f32> {
    with_runner(|r| r.config().background_rgb().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_show_helper() -> bool {
    with_runner(|r| r.config().show_helper).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_is_playing() -> bool {
    with_runner(|r| r.is_playing()).unwrap_or(false)
}

// ---- Config accessors for the page's loader and observers ----

#[wasm_bindgen]
pub fn get_image_path() -> String {
    with_runner(|r| r.config().image_path.clone()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_container_selector() -> String {
    with_runner(|r| r.config().container_selector.clone()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_trigger_selector() -> String {
    with_runner(|r| r.config().trigger_selector.clone()).unwrap_or_default()
}
