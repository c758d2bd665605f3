use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::systems::body::BodyOptions;
use crate::systems::plugins::{AttractorsPlugin, LinearAttractor, WrapPlugin};

#[test]
fn free_body_coasts_with_air_friction() {
    let mut engine = Engine::new(Vec2::ZERO);
    let id = engine.add_body(Body::circle(0.0, 0.0, 2.0, BodyOptions::default().air_friction(0.02)));
    engine.body_mut(id).unwrap().set_velocity(Vec2::new(10.0, 0.0));

    engine.update(BASE_DELTA_MS);

    let body = engine.body(id).unwrap();
    assert!((body.velocity().x - 9.8).abs() < 1e-4);
    assert!((body.position.x - 9.8).abs() < 1e-4);
}

#[test]
fn force_becomes_displacement_scaled_by_dt_squared() {
    let mut engine = Engine::new(Vec2::ZERO);
    let id = engine.add_body(Body::circle(0.0, 0.0, 2.0, BodyOptions::default().mass(2.0)));
    engine.body_mut(id).unwrap().apply_force(Vec2::new(0.0, 1e-4));

    engine.update(10.0);

    // 1e-4 / 2 * 100
    let body = engine.body(id).unwrap();
    assert!((body.position.y - 0.005).abs() < 1e-7);
    assert_eq!(body.force, Vec2::ZERO);
}

#[test]
fn static_bodies_ignore_forces_and_gravity() {
    let mut engine = Engine::new(Vec2::new(0.0, 1.0));
    let id = engine.add_body(Body::circle(50.0, 50.0, 5.0, BodyOptions::default().fixed()));
    engine.body_mut(id).unwrap().apply_force(Vec2::new(1.0, 1.0));

    for _ in 0..10 {
        engine.update(BASE_DELTA_MS);
    }

    assert_eq!(engine.body(id).unwrap().position, Vec2::new(50.0, 50.0));
}

#[test]
fn gravity_pulls_dynamic_bodies_down() {
    let mut engine = Engine::new(Vec2::new(0.0, 1.0));
    let id = engine.add_body(Body::circle(50.0, 50.0, 5.0, BodyOptions::default()));
    engine.update(BASE_DELTA_MS);
    assert!(engine.body(id).unwrap().position.y > 50.0);
}

#[test]
fn hooks_run_before_and_after_in_order() {
    let mut engine = Engine::new(Vec2::ZERO);
    let log = Rc::new(RefCell::new(Vec::new()));

    let before = Rc::clone(&log);
    engine.events_mut().on_before_update(Box::new(move |_: &mut World, timing: &Timing| {
        before.borrow_mut().push(("before", timing.steps));
    }));
    let after = Rc::clone(&log);
    engine.events_mut().on_after_update(Box::new(move |_: &mut World, timing: &Timing| {
        after.borrow_mut().push(("after", timing.steps));
    }));

    engine.update(BASE_DELTA_MS);
    engine.update(BASE_DELTA_MS);

    assert_eq!(
        *log.borrow(),
        vec![("before", 0), ("after", 1), ("before", 1), ("after", 2)]
    );
    assert_eq!(engine.timing().steps, 2);
    assert!((engine.timing().timestamp_ms - 2.0 * BASE_DELTA_MS as f64).abs() < 1e-6);
}

#[test]
fn plugins_install_once() {
    let mut engine = Engine::new(Vec2::ZERO);
    assert!(engine.use_plugin(&AttractorsPlugin));
    assert!(!engine.use_plugin(&AttractorsPlugin));
    assert!(engine.use_plugin(&WrapPlugin));
    assert!(engine.has_plugin("attractors"));
    assert!(engine.has_plugin("wrap"));
    assert_eq!(engine.events_mut().hook_count(), 2);
}

#[test]
fn attractor_pulls_free_body_closer() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.use_plugin(&AttractorsPlugin);
    engine.add_body(Body::circle(
        200.0,
        200.0,
        10.0,
        BodyOptions::default().fixed().attractor(LinearAttractor::new(1e-6)),
    ));
    let id = engine.add_body(Body::circle(400.0, 200.0, 2.0, BodyOptions::default().mass(0.1)));

    let start = engine.body(id).unwrap().position.x;
    for _ in 0..5 {
        engine.update(BASE_DELTA_MS);
    }
    let end = engine.body(id).unwrap().position.x;
    assert!(end < start);
}

#[test]
fn perf_stats_are_sampled_only_when_enabled() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.add_body(Body::circle(0.0, 0.0, 5.0, BodyOptions::default()));
    engine.add_body(Body::circle(4.0, 0.0, 5.0, BodyOptions::default()));

    engine.update(BASE_DELTA_MS);
    assert_eq!(engine.perf_stats().body_count(), 0);

    engine.enable_perf_metrics(true);
    engine.update(BASE_DELTA_MS);
    let stats = engine.perf_stats();
    assert_eq!(stats.body_count(), 2);
    assert_eq!(stats.contacts(), 1);
    assert_eq!(stats.steps(), 2);
    assert!(stats.step_ms() >= 0.0);
}
