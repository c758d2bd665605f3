use attractor_engine::AttractorScene;

#[test]
fn perf_smoke_step() {
    let mut scene = AttractorScene::new(1280.0, 720.0).unwrap();
    scene.enable_perf_metrics(true);
    scene.start();
    for _ in 0..30 {
        scene.tick();
    }
    let stats = scene.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 121);
    assert_eq!(stats.steps(), 30);
}
