//! Rendering - world snapshot to draw commands, and the Canvas2D backend
//!
//! Extraction is pure so it runs (and is tested) natively; only
//! `CanvasRenderer` touches the DOM.

#[path = "render_extract.rs"]
mod extract;
mod canvas;

pub use canvas::CanvasRenderer;
pub use extract::{extract_frame, RenderFrame, RenderOptions, ShapeCommand};
