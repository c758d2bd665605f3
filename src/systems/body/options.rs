use crate::core::math::Bounds;
use crate::systems::plugins::Attractor;

use super::DEFAULT_AIR_FRICTION;

/// Construction-time settings for a body
pub struct BodyOptions {
    /// Explicit mass; derived from area and density when `None`
    pub mass: Option<f32>,
    pub air_friction: f32,
    /// 0.0 = perfectly inelastic contact, 1.0 = elastic
    pub restitution: f32,
    pub is_static: bool,
    pub fill: String,
    pub attractors: Vec<Box<dyn Attractor>>,
    /// Screen-wrap region; `None` disables wrapping
    pub wrap: Option<Bounds>,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            mass: None,
            air_friction: DEFAULT_AIR_FRICTION,
            restitution: 0.0,
            is_static: false,
            fill: "#888".to_string(),
            attractors: Vec::new(),
            wrap: None,
        }
    }
}

impl BodyOptions {
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn air_friction(mut self, air_friction: f32) -> Self {
        self.air_friction = air_friction;
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn attractor(mut self, attractor: impl Attractor + 'static) -> Self {
        self.attractors.push(Box::new(attractor));
        self
    }

    pub fn wrap(mut self, bounds: Bounds) -> Self {
        self.wrap = Some(bounds);
        self
    }
}
