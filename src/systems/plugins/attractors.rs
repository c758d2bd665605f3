use crate::core::math::Vec2;
use crate::simulation::{Engine, Plugin, Timing, World};
use crate::systems::body::Body;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Force rule a body exerts on every other body
pub trait Attractor: Send + Sync {
    /// Force applied to `target` by `source`; `None` skips the pair
    fn force(&self, source: &Body, target: &Body) -> Option<Vec2>;
}

/// Hookean pull: `F = (source - target) * strength`
#[derive(Clone, Copy, Debug)]
pub struct LinearAttractor {
    pub strength: f32,
}

impl LinearAttractor {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }
}

impl Attractor for LinearAttractor {
    #[inline]
    fn force(&self, source: &Body, target: &Body) -> Option<Vec2> {
        Some((source.position - target.position) * self.strength)
    }
}

/// Newtonian pull: `G * m_a * m_b / r^2` toward the source
#[derive(Clone, Copy, Debug)]
pub struct GravityAttractor {
    pub constant: f32,
}

impl GravityAttractor {
    pub fn new(constant: f32) -> Self {
        Self { constant }
    }
}

impl Attractor for GravityAttractor {
    fn force(&self, source: &Body, target: &Body) -> Option<Vec2> {
        let to_source = source.position - target.position;
        let dist_sq = to_source.length_squared();
        if dist_sq < 1e-4 {
            return None;
        }
        let magnitude = self.constant * source.mass * target.mass / dist_sq;
        Some(to_source.normalize() * magnitude)
    }
}

/// Sum of all attractor rules acting on `bodies[target]`
fn force_on(bodies: &[Body], sources: &[usize], target: usize) -> Vec2 {
    let mut total = Vec2::ZERO;
    for &s in sources {
        if s == target {
            continue;
        }
        let source = &bodies[s];
        for rule in source.attractors.iter() {
            if let Some(f) = rule.force(source, &bodies[target]) {
                total += f;
            }
        }
    }
    total
}

/// Net attractor force per body (index-aligned with `bodies`).
///
/// Non-static sources receive the opposite of what they exert.
pub fn accumulate_attractor_forces(bodies: &[Body]) -> Vec<Vec2> {
    let sources: Vec<usize> = bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.has_attractors())
        .map(|(i, _)| i)
        .collect();
    if sources.is_empty() {
        return vec![Vec2::ZERO; bodies.len()];
    }

    #[cfg(feature = "parallel")]
    let mut forces: Vec<Vec2> = (0..bodies.len())
        .into_par_iter()
        .map(|j| force_on(bodies, &sources, j))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut forces: Vec<Vec2> = (0..bodies.len())
        .map(|j| force_on(bodies, &sources, j))
        .collect();

    for &s in &sources {
        let source = &bodies[s];
        if source.is_static {
            continue;
        }
        for (j, target) in bodies.iter().enumerate() {
            if j == s {
                continue;
            }
            for rule in source.attractors.iter() {
                if let Some(f) = rule.force(source, target) {
                    forces[s] -= f;
                }
            }
        }
    }

    forces
}

/// Add attractor forces to every body's accumulator
pub fn apply_attractors(bodies: &mut [Body]) {
    let forces = accumulate_attractor_forces(bodies);
    for (body, f) in bodies.iter_mut().zip(forces) {
        body.apply_force(f);
    }
}

/// Runs attractor rules before each integration step
pub struct AttractorsPlugin;

impl Plugin for AttractorsPlugin {
    fn name(&self) -> &'static str {
        "attractors"
    }

    fn install(&self, engine: &mut Engine) {
        engine
            .events_mut()
            .on_before_update(Box::new(|world: &mut World, _: &Timing| {
                apply_attractors(world.bodies_mut())
            }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::BodyOptions;

    fn attractor_at(x: f32, y: f32) -> Body {
        Body::circle(x, y, 5.0, BodyOptions::default().fixed().attractor(LinearAttractor::new(1e-6)))
    }

    #[test]
    fn linear_force_is_proportional_to_offset() {
        let bodies = vec![
            attractor_at(100.0, 100.0),
            Body::circle(300.0, 50.0, 2.0, BodyOptions::default().mass(0.1)),
        ];
        let forces = accumulate_attractor_forces(&bodies);
        assert_eq!(forces[0], Vec2::ZERO);
        assert!((forces[1].x - (-200.0 * 1e-6)).abs() < 1e-9);
        assert!((forces[1].y - (50.0 * 1e-6)).abs() < 1e-9);
    }

    #[test]
    fn every_other_body_is_affected_regardless_of_order() {
        let bodies = vec![
            Body::circle(0.0, 0.0, 2.0, BodyOptions::default()),
            attractor_at(10.0, 0.0),
            Body::circle(20.0, 0.0, 2.0, BodyOptions::default()),
        ];
        let forces = accumulate_attractor_forces(&bodies);
        assert!(forces[0].x > 0.0);
        assert!(forces[2].x < 0.0);
    }

    #[test]
    fn dynamic_source_feels_the_reaction() {
        let source = Body::circle(
            0.0,
            0.0,
            5.0,
            BodyOptions::default().attractor(GravityAttractor::new(1.0)),
        );
        let bodies = vec![source, Body::circle(10.0, 0.0, 2.0, BodyOptions::default().mass(1.0))];
        let forces = accumulate_attractor_forces(&bodies);
        assert!(forces[1].x < 0.0);
        assert!((forces[0].x + forces[1].x).abs() < 1e-9);
    }

    #[test]
    fn no_sources_means_no_forces() {
        let bodies = vec![Body::circle(0.0, 0.0, 2.0, BodyOptions::default())];
        assert_eq!(accumulate_attractor_forces(&bodies), vec![Vec2::ZERO]);
    }
}
