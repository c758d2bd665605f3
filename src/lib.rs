//! Attractor Engine - pointer-driven attractor field in WASM
//!
//! A static attractor body pulls a scatter of polygons and circles toward
//! itself and eases after the pointer. Rendered to a 2D canvas.
//!
//! Architecture:
//! - core/        - Math, random numbers, logging macros
//! - domain/      - Scene configuration and viewport
//! - systems/     - Bodies, collisions, plugins (attractors, wrap)
//! - simulation/  - Engine step pipeline, events, perf metrics
//! - scene/       - Stock scene construction and pointer follow
//! - session/     - Run/stop, frame ticks, debounced resize
//! - render/      - Frame extraction and canvas painting
//! - api/         - Public API

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod scene;
pub mod session;
pub mod render;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("attractor engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::browser::{mount, AttractorApp};
pub use api::wasm::AttractorScene;
pub use crate::core::math::{Bounds, Vec2};
pub use domain::{SceneConfig, Viewport};
pub use scene::{build_scene, Scene, SceneHandles};
pub use session::Session;
pub use simulation::{Engine, PerfStats, Plugin, World};
