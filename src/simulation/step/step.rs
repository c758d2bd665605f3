use crate::systems::collision;

use super::integrate::{apply_gravity, clear_forces, integrate};
use super::{Engine, StepTimer};

pub(super) fn step(engine: &mut Engine, delta_ms: f32) {
    let perf_on = engine.perf_enabled;
    let step_start = if perf_on { Some(StepTimer::start()) } else { None };
    if perf_on {
        engine.perf_stats.reset();
        engine.perf_stats.body_count = engine.world.body_count() as u32;
    }

    engine.timing.delta_ms = delta_ms;

    // === BEFORE UPDATE ===
    let t0 = StepTimer::start_if(perf_on);
    for hook in engine.events.before_update.iter_mut() {
        hook(&mut engine.world, &engine.timing);
    }
    if let Some(t) = t0 {
        engine.perf_stats.before_update_ms = t.elapsed_ms();
    }

    // === INTEGRATION ===
    let t0 = StepTimer::start_if(perf_on);
    let gravity = engine.world.gravity();
    apply_gravity(engine.world.bodies_mut(), gravity);
    integrate(engine.world.bodies_mut(), delta_ms);
    if let Some(t) = t0 {
        engine.perf_stats.integrate_ms = t.elapsed_ms();
    }

    // === CONTACTS ===
    let t0 = StepTimer::start_if(perf_on);
    let contacts = collision::detect(engine.world.bodies());
    let resolved = collision::resolve(engine.world.bodies_mut(), &contacts);
    if let Some(t) = t0 {
        engine.perf_stats.collisions_ms = t.elapsed_ms();
        engine.perf_stats.contacts = contacts.len() as u32;
        engine.perf_stats.contacts_resolved = resolved;
    }

    clear_forces(engine.world.bodies_mut());

    engine.timing.timestamp_ms += delta_ms as f64;
    engine.timing.steps += 1;

    // === AFTER UPDATE ===
    let t0 = StepTimer::start_if(perf_on);
    for hook in engine.events.after_update.iter_mut() {
        hook(&mut engine.world, &engine.timing);
    }
    if let Some(t) = t0 {
        engine.perf_stats.after_update_ms = t.elapsed_ms();
    }

    if let Some(t) = step_start {
        engine.perf_stats.step_ms = t.elapsed_ms();
        engine.perf_stats.steps = engine.timing.steps as u32;
    }
}
