//! Plugins - optional capabilities a body can carry
//!
//! A body opts in by holding attractor rules or wrap bounds; the matching
//! plugin, once installed on the engine, services every body that has the
//! capability on each step.

mod attractors;
mod wrap;

pub use attractors::{
    accumulate_attractor_forces, apply_attractors, Attractor, AttractorsPlugin, GravityAttractor,
    LinearAttractor,
};
pub use wrap::{apply_wrap, wrap_position, WrapPlugin};
