use super::*;
use crate::core::math::Vec2;
use crate::systems::body::Shape;

fn stock_scene(width: f32, height: f32, seed: u64) -> Scene {
    let mut rng = SceneRng::seeded(seed);
    build_scene(Viewport::new(width, height), &SceneConfig::default(), &mut rng)
}

#[test]
fn spawns_sixty_polygons_and_sixty_circles() {
    let scene = stock_scene(1280.0, 720.0, 7);
    assert_eq!(scene.handles.polygons.len(), 60);
    assert_eq!(scene.handles.circles.len(), 60);
    assert_eq!(scene.engine.world().body_count(), 121);
    assert_eq!(scene.handles.body_count(), 121);
}

#[test]
fn polygons_respect_side_size_and_mass_rules() {
    for seed in 0..8 {
        let scene = stock_scene(1024.0, 768.0, seed);
        for id in &scene.handles.polygons {
            let body = scene.engine.body(*id).unwrap();
            let Shape::Polygon { sides, radius, vertices } = &body.shape else {
                panic!("polygon handle points at a circle");
            };
            assert!((3..=6).contains(sides));
            assert_eq!(vertices.len(), *sides as usize);
            assert!((4.0..=60.0).contains(radius));
            assert!((body.mass - radius / 20.0).abs() < 1e-6);
            assert_eq!(body.air_friction, 0.02);
            assert!(!body.is_static);
        }
    }
}

#[test]
fn circles_respect_radius_and_fixed_mass() {
    for seed in 0..8 {
        let scene = stock_scene(1024.0, 768.0, seed);
        for id in &scene.handles.circles {
            let body = scene.engine.body(*id).unwrap();
            let Shape::Circle { radius } = body.shape else {
                panic!("circle handle points at a polygon");
            };
            assert!((2.0..=20.0).contains(&radius));
            assert_eq!(body.mass, 0.1);
            assert_eq!(body.air_friction, 0.01);
        }
    }
}

#[test]
fn each_pair_shares_a_point_inside_the_viewport() {
    let scene = stock_scene(800.0, 600.0, 42);
    for (p, c) in scene.handles.polygons.iter().zip(&scene.handles.circles) {
        let polygon = scene.engine.body(*p).unwrap();
        let circle = scene.engine.body(*c).unwrap();
        assert_eq!(polygon.position, circle.position);
        assert!(Viewport::new(800.0, 600.0).bounds().contains(polygon.position));
    }
}

#[test]
fn attractor_is_static_centered_and_sized_from_min_side() {
    let scene = stock_scene(1000.0, 500.0, 1);
    let attractor = scene.engine.body(scene.handles.attractor).unwrap();

    assert!(attractor.is_static);
    assert!(attractor.has_attractors());
    assert_eq!(attractor.position, Vec2::new(500.0, 250.0));
    // min(1000, 500) / 25 / 2
    assert_eq!(scene.handles.attractor_radius, 10.0);
    assert_eq!(attractor.radius(), 10.0);
    assert_eq!(attractor_radius(Viewport::new(300.0, 900.0), 25.0), 6.0);
}

#[test]
fn engine_has_both_plugins_and_no_gravity() {
    let scene = stock_scene(640.0, 480.0, 3);
    assert!(scene.engine.has_plugin("attractors"));
    assert!(scene.engine.has_plugin("wrap"));
    assert_eq!(scene.engine.world().gravity(), Vec2::ZERO);
    let wrapped = scene.engine.world().bodies().iter().filter(|b| b.wrap.is_some()).count();
    assert_eq!(wrapped, 0);
}

#[test]
fn attractor_stays_put_without_pointer() {
    let mut scene = stock_scene(640.0, 480.0, 9);
    for _ in 0..10 {
        scene.engine.update(crate::simulation::BASE_DELTA_MS);
    }
    let attractor = scene.engine.body(scene.handles.attractor).unwrap();
    assert_eq!(attractor.position, Vec2::new(320.0, 240.0));
}

#[test]
fn attractor_covers_twelve_percent_of_the_gap_per_step() {
    let mut scene = stock_scene(640.0, 480.0, 11);
    let target = Vec2::new(420.0, 40.0);
    scene.mouse.set_position(target);

    let mut prev_gap = target - Vec2::new(320.0, 240.0);
    for _ in 0..20 {
        let before = scene.engine.body(scene.handles.attractor).unwrap().position;
        scene.engine.update(crate::simulation::BASE_DELTA_MS);
        let after = scene.engine.body(scene.handles.attractor).unwrap().position;

        let expected = before + (target - before) * 0.12;
        assert!((after.x - expected.x).abs() < 1e-3);
        assert!((after.y - expected.y).abs() < 1e-3);

        let gap = target - after;
        // Same side of the target on both axes: never overshoots
        assert!(gap.x * prev_gap.x >= 0.0 && gap.y * prev_gap.y >= 0.0);
        assert!(gap.length() < prev_gap.length());
        prev_gap = gap;
    }
}

#[test]
fn follow_delta_is_a_fraction_of_the_offset() {
    let d = follow_delta(Vec2::new(10.0, 10.0), Vec2::new(110.0, -90.0), 0.12);
    assert!((d.x - 12.0).abs() < 1e-5);
    assert!((d.y + 12.0).abs() < 1e-5);
}

#[test]
fn zero_scatter_count_leaves_only_the_attractor() {
    let config = SceneConfig {
        scatter_count: 0,
        ..SceneConfig::default()
    };
    let scene = build_scene(Viewport::new(100.0, 100.0), &config, &mut SceneRng::seeded(0));
    assert_eq!(scene.engine.world().body_count(), 1);
}
