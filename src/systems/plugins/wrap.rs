use crate::core::math::{Bounds, Vec2};
use crate::simulation::{Engine, Plugin, Timing, World};
use crate::systems::body::Body;

/// Position after re-entering through the opposite edge, or `None` if inside
pub fn wrap_position(p: Vec2, bounds: &Bounds) -> Option<Vec2> {
    if bounds.contains(p) {
        return None;
    }
    let x = if p.x < bounds.min.x {
        Some(bounds.max.x - (bounds.min.x - p.x))
    } else if p.x > bounds.max.x {
        Some(bounds.min.x + (p.x - bounds.max.x))
    } else {
        None
    };
    let y = if p.y < bounds.min.y {
        Some(bounds.max.y - (bounds.min.y - p.y))
    } else if p.y > bounds.max.y {
        Some(bounds.min.y + (p.y - bounds.max.y))
    } else {
        None
    };

    Some(Vec2::new(x.unwrap_or(p.x), y.unwrap_or(p.y)))
}

pub fn apply_wrap(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        let Some(bounds) = body.wrap else {
            continue;
        };
        if let Some(p) = wrap_position(body.position, &bounds) {
            body.set_position(p);
        }
    }
}

/// Teleports bodies with wrap bounds back into them after each step
pub struct WrapPlugin;

impl Plugin for WrapPlugin {
    fn name(&self) -> &'static str {
        "wrap"
    }

    fn install(&self, engine: &mut Engine) {
        engine
            .events_mut()
            .on_after_update(Box::new(|world: &mut World, _: &Timing| {
                apply_wrap(world.bodies_mut())
            }));
    }
}
