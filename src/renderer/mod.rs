//! Rendering module
//!
//! Renderers read a `GameState` and never write back into it. The Canvas 2D
//! implementation is web-only; `hud` is shared with the native demo.

pub mod hud;
pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use hud::Hud;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::GameState;

/// Draws one frame from a read-only view of the simulation
pub trait Renderer {
    fn render(&mut self, state: &GameState, now_ms: f64);
}

/// Backing-store size (width, height) in device pixels for a canvas shown
/// `display_height` CSS pixels tall, keeping the world's aspect ratio
pub fn backing_size(display_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let height = (display_height * device_pixel_ratio).round().max(1.0);
    let width = (height * (WORLD_WIDTH / WORLD_HEIGHT) as f64).round().max(1.0);
    (width as u32, height as u32)
}

/// World-to-canvas scale for a backing store `canvas_width` pixels wide
pub fn world_scale(canvas_width: u32) -> f64 {
    canvas_width as f64 / WORLD_WIDTH as f64
}
