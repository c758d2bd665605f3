//! Contact detection and resolution between bodies
//!
//! Narrow phase treats every shape as its bounding circle. Resolution works
//! on Verlet state: overlap is removed by moving positions (and previous
//! positions with them), then the approaching normal velocity is replaced by
//! an impulse scaled by restitution.

use crate::core::math::Vec2;
use crate::systems::body::Body;

/// Fraction of penetration removed per step
const POSITION_CORRECTION: f32 = 0.8;
/// Penetration tolerated without correction (pixels)
const SLOP: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    /// Unit vector from `a` toward `b`
    pub normal: Vec2,
    pub depth: f32,
}

/// All overlapping pairs where at least one body can move
pub fn detect(bodies: &[Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for a in 0..bodies.len() {
        let ba = &bodies[a];
        let bounds_a = ba.bounds();
        for b in (a + 1)..bodies.len() {
            let bb = &bodies[b];
            if ba.is_static && bb.is_static {
                continue;
            }
            if !bounds_a.overlaps(&bb.bounds()) {
                continue;
            }
            let delta = bb.position - ba.position;
            let reach = ba.radius() + bb.radius();
            let dist_sq = delta.length_squared();
            if dist_sq >= reach * reach {
                continue;
            }
            let dist = dist_sq.sqrt();
            let normal = if dist > 1e-4 { delta * (1.0 / dist) } else { Vec2::new(1.0, 0.0) };
            contacts.push(Contact {
                a,
                b,
                normal,
                depth: reach - dist,
            });
        }
    }
    contacts
}

/// Separate and bounce every contact; returns how many were resolved
pub fn resolve(bodies: &mut [Body], contacts: &[Contact]) -> u32 {
    let mut resolved = 0;
    for c in contacts {
        let inv_a = bodies[c.a].inverse_mass;
        let inv_b = bodies[c.b].inverse_mass;
        let inv_sum = inv_a + inv_b;
        if inv_sum <= 0.0 {
            continue;
        }

        let correction = (c.depth - SLOP).max(0.0) * POSITION_CORRECTION / inv_sum;
        if correction > 0.0 {
            bodies[c.a].translate(-c.normal * (correction * inv_a));
            bodies[c.b].translate(c.normal * (correction * inv_b));
        }

        let va = bodies[c.a].velocity();
        let vb = bodies[c.b].velocity();
        let approach = (vb - va).dot(c.normal);
        if approach < 0.0 {
            let restitution = bodies[c.a].restitution.max(bodies[c.b].restitution);
            let j = -(1.0 + restitution) * approach / inv_sum;
            bodies[c.a].set_velocity(va - c.normal * (j * inv_a));
            bodies[c.b].set_velocity(vb + c.normal * (j * inv_b));
        }
        resolved += 1;
    }
    resolved
}
