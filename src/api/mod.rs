//! Public JS API
//!
//! - wasm.rs    - `AttractorScene`, a DOM-free facade the host drives itself
//! - browser.rs - `mount`, which wires a session to a page (canvas, mouse,
//!                resize, animation frames)

pub mod browser;
pub mod wasm;
