use super::*;

fn seeded_session(width: f32, height: f32) -> Session {
    let config = SceneConfig {
        seed: Some(1234),
        ..SceneConfig::default()
    };
    Session::new(Viewport::new(width, height), config).unwrap()
}

#[test]
fn new_session_is_stopped_and_populated() {
    let mut session = seeded_session(800.0, 600.0);
    assert!(!session.is_running());
    assert_eq!(session.body_count(), 121);
    assert!(session.tick().is_none());
    assert_eq!(session.engine().timing().steps, 0);
}

#[test]
fn tick_steps_and_renders_while_running() {
    let mut session = seeded_session(800.0, 600.0);
    assert!(session.start());

    let shapes = session.tick().map(|f| f.shapes.len());
    assert_eq!(shapes, Some(121));
    assert_eq!(session.engine().timing().steps, 1);
    assert_eq!(session.rendered_frames(), 1);
}

#[test]
fn stop_then_start_resumes_without_recreating_bodies() {
    let mut session = seeded_session(800.0, 600.0);
    session.start();
    for _ in 0..5 {
        session.tick();
    }
    let ids: Vec<_> = session.engine().world().bodies().iter().map(|b| b.id).collect();

    session.stop();
    assert!(session.tick().is_none());
    assert_eq!(session.engine().timing().steps, 5);

    assert!(session.start());
    assert!(!session.start());
    session.tick();
    assert_eq!(session.engine().timing().steps, 6);
    assert_eq!(session.body_count(), 121);
    let ids_after: Vec<_> = session.engine().world().bodies().iter().map(|b| b.id).collect();
    assert_eq!(ids, ids_after);
}

#[test]
fn attractor_follows_pointer_only_once_it_is_known() {
    let mut session = seeded_session(800.0, 600.0);
    session.start();
    session.tick();
    assert_eq!(session.pointer(), None);
    assert_eq!(session.attractor_position(), Vec2::new(400.0, 300.0));

    session.set_pointer(500.0, 300.0);
    session.tick();
    let p = session.attractor_position();
    assert!((p.x - 412.0).abs() < 1e-3);
    assert!((p.y - 300.0).abs() < 1e-3);
}

#[test]
fn back_to_back_resizes_apply_once_with_latest_size() {
    let mut session = seeded_session(800.0, 600.0);

    session.request_resize(1000.0, 1024.0, 768.0);
    let due = session.request_resize(1100.0, 1280.0, 720.0);
    assert_eq!(due, 1350.0);

    assert_eq!(session.poll_resize(1250.0), None);
    assert_eq!(session.viewport(), Viewport::new(800.0, 600.0));

    assert_eq!(session.poll_resize(1350.0), Some(Viewport::new(1280.0, 720.0)));
    assert_eq!(session.poll_resize(5000.0), None);
    assert_eq!(session.viewport(), Viewport::new(1280.0, 720.0));
    assert_eq!(session.render_options().width, 1280);
    assert_eq!(session.render_options().height, 720);
}

#[test]
fn resize_leaves_bodies_and_attractor_radius_alone() {
    let mut session = seeded_session(800.0, 600.0);
    let before: Vec<_> = session.engine().world().bodies().iter().map(|b| b.position).collect();
    let radius = session.handles().attractor_radius;

    session.request_resize(0.0, 200.0, 100.0);
    session.poll_resize(250.0);

    let after: Vec<_> = session.engine().world().bodies().iter().map(|b| b.position).collect();
    assert_eq!(before, after);
    assert_eq!(session.handles().attractor_radius, radius);
    let attractor = session.engine().body(session.handles().attractor).unwrap();
    assert_eq!(attractor.radius(), radius);
}

#[test]
fn invalid_config_is_rejected() {
    let err = Session::from_config_json(Viewport::new(100.0, 100.0), r#"{"circle": {"mass": -1}}"#)
        .err()
        .unwrap();
    assert!(err.contains("circle.mass"), "{err}");
}

#[test]
fn unusable_viewport_is_an_error_not_a_panic() {
    for (w, h) in [(-10.0, 600.0), (800.0, f32::NAN), (f32::INFINITY, 600.0)] {
        let result = Session::new(Viewport::new(w, h), SceneConfig::default());
        assert!(result.is_err(), "{w}x{h} was accepted");
    }
}

#[test]
fn same_seed_gives_same_scene() {
    let a = seeded_session(640.0, 480.0);
    let b = seeded_session(640.0, 480.0);
    let pa: Vec<_> = a.engine().world().bodies().iter().map(|b| b.position).collect();
    let pb: Vec<_> = b.engine().world().bodies().iter().map(|b| b.position).collect();
    assert_eq!(pa, pb);
}
