use crate::systems::body::Body;

use super::{BASE_DELTA_MS, GRAVITY_SCALE};
use crate::core::math::Vec2;

pub(super) fn apply_gravity(bodies: &mut [Body], gravity: Vec2) {
    if gravity == Vec2::ZERO {
        return;
    }
    for body in bodies.iter_mut().filter(|b| !b.is_static) {
        body.force += gravity * (body.mass * GRAVITY_SCALE);
    }
}

/// Position Verlet: `v = (p - p_prev) * (1 - friction * dt / dt_base) + F / m * dt^2`
pub(super) fn integrate(bodies: &mut [Body], delta_ms: f32) {
    let delta_sq = delta_ms * delta_ms;
    let delta_ratio = delta_ms / BASE_DELTA_MS;

    for body in bodies.iter_mut() {
        if body.is_static {
            continue;
        }
        let damping = (1.0 - body.air_friction * delta_ratio).max(0.0);
        let velocity = body.velocity() * damping + body.force * (body.inverse_mass * delta_sq);
        body.position_prev = body.position;
        body.position += velocity;
    }
}

pub(super) fn clear_forces(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.force = Vec2::ZERO;
    }
}
