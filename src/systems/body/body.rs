use crate::core::math::{Bounds, Vec2};
use crate::systems::plugins::Attractor;

use super::options::BodyOptions;
use super::shape::Shape;
use super::DEFAULT_DENSITY;

pub type BodyId = u32;

/// Rigid Body - integrated as a unit
pub struct Body {
    /// Assigned by the world on insertion; 0 until then
    pub id: BodyId,
    pub shape: Shape,

    // === Physics State ===
    /// World position (centre of mass)
    pub position: Vec2,
    /// Position one step ago (Verlet)
    pub position_prev: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Force accumulated for the next step, cleared after integration
    pub force: Vec2,
    pub mass: f32,
    pub inverse_mass: f32,
    pub is_static: bool,

    // === Material ===
    pub air_friction: f32,
    pub restitution: f32,
    pub fill: String,

    // === Capabilities ===
    pub attractors: Vec<Box<dyn Attractor>>,
    pub wrap: Option<Bounds>,
}

impl Body {
    pub fn circle(x: f32, y: f32, radius: f32, options: BodyOptions) -> Self {
        Self::from_shape(Vec2::new(x, y), Shape::circle(radius), options)
    }

    pub fn polygon(x: f32, y: f32, sides: u32, radius: f32, options: BodyOptions) -> Self {
        Self::from_shape(Vec2::new(x, y), Shape::regular_polygon(sides, radius), options)
    }

    pub fn from_shape(position: Vec2, shape: Shape, options: BodyOptions) -> Self {
        let mass = options
            .mass
            .unwrap_or_else(|| shape.area() * DEFAULT_DENSITY)
            .max(f32::EPSILON);
        let inverse_mass = if options.is_static { 0.0 } else { 1.0 / mass };

        Self {
            id: 0,
            shape,
            position,
            position_prev: position,
            angle: 0.0,
            force: Vec2::ZERO,
            mass,
            inverse_mass,
            is_static: options.is_static,
            air_friction: options.air_friction,
            restitution: options.restitution,
            fill: options.fill,
            attractors: options.attractors,
            wrap: options.wrap,
        }
    }

    /// Displacement over the last step
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.position_prev
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.position_prev = self.position - velocity;
    }

    /// Move without changing velocity; works on static bodies too
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.position_prev += delta;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.translate(position - self.position);
    }

    /// Accumulate a force through the centre of mass for the next step
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.position, self.radius())
    }

    pub fn has_attractors(&self) -> bool {
        !self.attractors.is_empty()
    }

    /// Polygon corners in world space; empty for circles
    pub fn world_vertices(&self) -> Vec<Vec2> {
        match &self.shape {
            Shape::Circle { .. } => Vec::new(),
            Shape::Polygon { vertices, .. } => vertices
                .iter()
                .map(|v| self.position + v.rotate(self.angle))
                .collect(),
        }
    }
}
