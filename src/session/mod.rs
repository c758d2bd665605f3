//! Session - everything one mounted scene owns
//!
//! Holds the scene, the tracked viewport, the run/stop switches, the render
//! surface settings and the pending resize. Hosts drive it with `tick` once
//! per animation frame and forward pointer and resize events.

mod debounce;
mod runner;

pub use debounce::Debouncer;
pub use runner::Runner;

use crate::core::math::Vec2;
use crate::core::random::SceneRng;
use crate::domain::{SceneConfig, Viewport};
use crate::render::{extract_frame, RenderFrame, RenderOptions};
use crate::scene::{build_scene, Scene, SceneHandles};
use crate::simulation::{Engine, PerfStats};

pub struct Session {
    scene: Scene,
    config: SceneConfig,
    viewport: Viewport,
    runner: Runner,
    render_options: RenderOptions,
    resize: Debouncer<Viewport>,
    frame: RenderFrame,
    rendered_frames: u64,
}

impl Session {
    /// Build the scene for `viewport`. The session starts stopped.
    pub fn new(viewport: Viewport, config: SceneConfig) -> Result<Self, String> {
        viewport.validate()?;
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SceneRng::seeded(seed),
            None => SceneRng::from_entropy(),
        };
        let scene = build_scene(viewport, &config, &mut rng);
        let render_options = RenderOptions::new(viewport, config.background.clone());

        Ok(Self {
            resize: Debouncer::new(config.resize_debounce_ms),
            scene,
            config,
            viewport,
            runner: Runner::default(),
            render_options,
            frame: RenderFrame::default(),
            rendered_frames: 0,
        })
    }

    pub fn from_config_json(viewport: Viewport, json: &str) -> Result<Self, String> {
        Self::new(viewport, SceneConfig::from_json(json)?)
    }

    /// Begin stepping and rendering; bodies are kept from the last run
    pub fn start(&mut self) -> bool {
        let started = self.runner.start();
        if started {
            console_log!("session started ({} bodies)", self.body_count());
        }
        started
    }

    pub fn stop(&mut self) {
        if self.runner.is_running() {
            console_log!("session stopped at step {}", self.engine().timing().steps);
        }
        self.runner.stop();
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    /// One animation frame: step if stepping, extract a frame if rendering.
    pub fn tick(&mut self) -> Option<&RenderFrame> {
        if self.runner.is_stepping() {
            self.scene.engine.update(self.config.delta_ms);
        }
        if !self.runner.is_rendering() {
            return None;
        }
        extract_frame(self.scene.engine.world(), &self.render_options, &mut self.frame);
        self.rendered_frames += 1;
        Some(&self.frame)
    }

    /// Record the pointer position in canvas pixels
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.scene.mouse.set_position(Vec2::new(x, y));
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.scene.mouse.position()
    }

    /// Queue a viewport change; returns when it will be applied
    pub fn request_resize(&mut self, now_ms: f64, width: f32, height: f32) -> f64 {
        self.resize.trigger(now_ms, Viewport::new(width, height))
    }

    /// Apply the queued viewport change once the debounce has elapsed.
    ///
    /// Only the tracked viewport and the render surface change; bodies stay
    /// where they are and the attractor keeps its startup radius.
    pub fn poll_resize(&mut self, now_ms: f64) -> Option<Viewport> {
        let viewport = self.resize.poll(now_ms)?;
        self.apply_viewport(viewport);
        Some(viewport)
    }

    /// Apply the queued viewport change immediately. Hosts whose own timer
    /// already enforces the quiet period call this when it fires.
    pub fn flush_resize(&mut self) -> Option<Viewport> {
        let viewport = self.resize.flush()?;
        self.apply_viewport(viewport);
        Some(viewport)
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.render_options.resize(viewport);
        console_log!("viewport resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn resize_wait_ms(&self) -> f64 {
        self.resize.wait_ms()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn handles(&self) -> &SceneHandles {
        &self.scene.handles
    }

    pub fn engine(&self) -> &Engine {
        &self.scene.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.scene.engine
    }

    pub fn body_count(&self) -> usize {
        self.scene.engine.world().body_count()
    }

    pub fn attractor_position(&self) -> Vec2 {
        self.scene
            .engine
            .body(self.scene.handles.attractor)
            .map(|b| b.position)
            .unwrap_or_else(|| self.viewport.center())
    }

    pub fn rendered_frames(&self) -> u64 {
        self.rendered_frames
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.scene.engine.enable_perf_metrics(enabled);
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.scene.engine.perf_stats()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
