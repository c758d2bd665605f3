use crate::core::math::Vec2;
use crate::systems::body::{Body, BodyId};

/// Flat body store; ids are handed out in insertion order starting at 1
pub struct World {
    bodies: Vec<Body>,
    gravity: Vec2,
    next_id: BodyId,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            next_id: 1,
        }
    }

    pub fn add(&mut self, mut body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }
}
