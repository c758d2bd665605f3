use crate::core::random::SceneRng;
use crate::domain::{SceneConfig, Viewport};
use crate::simulation::Engine;
use crate::systems::body::{Body, BodyId, BodyOptions};

/// Spawn `scatter_count` polygon/circle pairs, each pair sharing one random
/// point inside the viewport. Returns (polygons, circles).
pub(super) fn scatter_bodies(
    engine: &mut Engine,
    viewport: Viewport,
    config: &SceneConfig,
    rng: &mut SceneRng,
) -> (Vec<BodyId>, Vec<BodyId>) {
    let count = config.scatter_count as usize;
    let mut polygons = Vec::with_capacity(count);
    let mut circles = Vec::with_capacity(count);
    let p = &config.polygon;
    let c = &config.circle;

    for _ in 0..count {
        let x = rng.range(0.0, viewport.width);
        let y = rng.range(0.0, viewport.height);

        let size = rng.range(p.min_size, p.max_size);
        let sides = rng.int_range(p.min_sides, p.max_sides);
        let polygon = Body::polygon(
            x,
            y,
            sides,
            size,
            BodyOptions::default()
                .mass(size / p.mass_divisor)
                .air_friction(p.air_friction)
                .fill(p.fill.as_str()),
        );
        polygons.push(engine.add_body(polygon));

        let radius = rng.range(c.min_radius, c.max_radius);
        let circle = Body::circle(
            x,
            y,
            radius,
            BodyOptions::default()
                .mass(c.mass)
                .air_friction(c.air_friction)
                .fill(c.fill.as_str()),
        );
        circles.push(engine.add_body(circle));
    }

    (polygons, circles)
}
