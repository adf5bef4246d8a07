//! Pointer-reactive trail animation for a 2D canvas.
//!
//! `core` holds the simulation and builds on every target; the browser glue
//! (canvas surface, listeners, animation frame loop) is wasm32 only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use app::{render_canvas, start, TrailCanvas};
