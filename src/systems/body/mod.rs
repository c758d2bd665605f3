//! Body - a rigid shape integrated with position Verlet
//!
//! Shapes are stored in local coordinates around (0, 0); world vertices are
//! produced on demand from position and angle. Velocity is implicit:
//! `position - position_prev`, so moving a body with `translate` shifts both
//! and leaves its velocity untouched.

mod body;
mod options;
mod shape;

pub use body::{Body, BodyId};
pub use options::BodyOptions;
pub use shape::Shape;

/// Density used when a body has no explicit mass (mass per square pixel)
pub const DEFAULT_DENSITY: f32 = 0.001;

/// Air friction applied when none is configured
pub const DEFAULT_AIR_FRICTION: f32 = 0.01;
