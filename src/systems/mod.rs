//! Systems - bodies and the behaviours the engine runs over them
//!
//! - body/       - rigid body state and shapes
//! - plugins/    - optional per-body capabilities (attractors, screen wrap)
//! - collision/  - contact detection and resolution

pub mod body;
pub mod collision;
pub mod plugins;
