use std::cell::Cell;
use std::rc::Rc;

use crate::core::math::Vec2;
use crate::simulation::{Engine, Timing, World};
use crate::systems::body::BodyId;

/// Shared pointer position, written by the input layer and read by hooks.
///
/// Clones share the same cell. `None` until the first pointer event.
#[derive(Clone, Default)]
pub struct Mouse {
    position: Rc<Cell<Option<Vec2>>>,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position.get()
    }

    pub fn set_position(&self, position: Vec2) {
        self.position.set(Some(position));
    }
}

/// Translation that covers `factor` of the way from `current` to `target`
#[inline]
pub fn follow_delta(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    (target - current) * factor
}

/// Ease `body` toward the pointer after every engine step
pub fn install_follow(engine: &mut Engine, body: BodyId, mouse: Mouse, factor: f32) {
    engine.events_mut().on_after_update(Box::new(move |world: &mut World, _: &Timing| {
        let Some(target) = mouse.position() else {
            return;
        };
        if let Some(attractor) = world.body_mut(body) {
            let delta = follow_delta(attractor.position, target, factor);
            attractor.translate(delta);
        }
    }));
}
