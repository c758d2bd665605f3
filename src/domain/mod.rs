//! Domain data: scene tuning and the viewport the scene lives in.

pub mod config;
pub mod viewport;

pub use config::{CircleSpec, PolygonSpec, SceneConfig};
pub use viewport::Viewport;
