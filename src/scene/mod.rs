//! Scene bootstrapper
//!
//! Builds the attractor field: a zero-gravity engine with the attractor and
//! wrap plugins, one static attractor at the viewport centre that eases
//! toward the pointer after every step, and the scattered polygon/circle
//! pairs it pulls on.

mod pointer;
mod scatter;

pub use pointer::{follow_delta, install_follow, Mouse};

use crate::core::random::SceneRng;
use crate::domain::config::AttractorSpec;
use crate::domain::{SceneConfig, Viewport};
use crate::simulation::Engine;
use crate::systems::body::{Body, BodyId, BodyOptions};
use crate::systems::plugins::{AttractorsPlugin, LinearAttractor, WrapPlugin};

/// Ids of everything the bootstrapper spawned
#[derive(Clone, Debug, PartialEq)]
pub struct SceneHandles {
    pub attractor: BodyId,
    /// Radius chosen at startup; resizes do not change it
    pub attractor_radius: f32,
    pub polygons: Vec<BodyId>,
    pub circles: Vec<BodyId>,
}

impl SceneHandles {
    pub fn body_count(&self) -> usize {
        1 + self.polygons.len() + self.circles.len()
    }
}

/// A populated engine plus the handles needed to drive it
pub struct Scene {
    pub engine: Engine,
    pub handles: SceneHandles,
    pub mouse: Mouse,
}

/// `min(width, height) / divisor / 2`
pub fn attractor_radius(viewport: Viewport, divisor: f32) -> f32 {
    viewport.min_side() / divisor / 2.0
}

pub fn build_scene(viewport: Viewport, config: &SceneConfig, rng: &mut SceneRng) -> Scene {
    let mut engine = Engine::new(config.gravity);
    engine.use_plugin(&AttractorsPlugin);
    engine.use_plugin(&WrapPlugin);

    let (attractor, attractor_radius) = place_attractor(&mut engine, viewport, &config.attractor);
    let (polygons, circles) = scatter::scatter_bodies(&mut engine, viewport, config, rng);

    let mouse = Mouse::new();
    install_follow(&mut engine, attractor, mouse.clone(), config.follow_factor);

    let handles = SceneHandles {
        attractor,
        attractor_radius,
        polygons,
        circles,
    };
    console_log!(
        "scene built: {}x{} viewport, {} bodies, attractor radius {:.2}",
        viewport.width,
        viewport.height,
        handles.body_count(),
        attractor_radius
    );

    Scene {
        engine,
        handles,
        mouse,
    }
}

fn place_attractor(engine: &mut Engine, viewport: Viewport, spec: &AttractorSpec) -> (BodyId, f32) {
    let radius = attractor_radius(viewport, spec.size_divisor);
    let center = viewport.center();
    let body = Body::circle(
        center.x,
        center.y,
        radius,
        BodyOptions::default()
            .fixed()
            .fill(spec.fill.as_str())
            .attractor(LinearAttractor::new(spec.strength)),
    );
    (engine.add_body(body), radius)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
