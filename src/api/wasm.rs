use wasm_bindgen::prelude::*;

use crate::domain::{SceneConfig, Viewport};
use crate::session::Session;
use crate::simulation::PerfStats;

/// Scene handle for hosts that run their own frame loop and input handling
#[wasm_bindgen]
pub struct AttractorScene {
    session: Session,
}

#[wasm_bindgen]
impl AttractorScene {
    /// Build the stock scene for a `width` x `height` viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<AttractorScene, JsValue> {
        let session = Session::new(Viewport::new(width, height), SceneConfig::default())
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { session })
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: f32, height: f32, json: String) -> Result<AttractorScene, JsValue> {
        let session = Session::from_config_json(Viewport::new(width, height), &json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { session })
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.session.is_running()
    }

    /// Run one frame; returns the number of shapes rendered (0 when stopped)
    pub fn tick(&mut self) -> usize {
        self.session.tick().map(|f| f.shapes.len()).unwrap_or(0)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.session.set_pointer(x, y);
    }

    /// Queue a resize at host time `now_ms`; returns when it will apply
    pub fn request_resize(&mut self, now_ms: f64, width: f32, height: f32) -> f64 {
        self.session.request_resize(now_ms, width, height)
    }

    /// Apply a queued resize whose debounce has elapsed
    pub fn poll_resize(&mut self, now_ms: f64) -> bool {
        self.session.poll_resize(now_ms).is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.session.viewport().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.session.viewport().height
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.session.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn attractor_x(&self) -> f32 {
        self.session.attractor_position().x
    }

    #[wasm_bindgen(getter)]
    pub fn attractor_y(&self) -> f32 {
        self.session.attractor_position().y
    }

    #[wasm_bindgen(getter)]
    pub fn attractor_radius(&self) -> f32 {
        self.session.handles().attractor_radius
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u64 {
        self.session.engine().timing().steps
    }

    /// Flattened `[x, y, radius]` per body, for hosts that draw themselves
    pub fn body_circles(&self) -> Vec<f32> {
        let world = self.session.engine().world();
        let mut out = Vec::with_capacity(world.body_count() * 3);
        for body in world.bodies() {
            out.push(body.position.x);
            out.push(body.position.y);
            out.push(body.radius());
        }
        out
    }

    #[wasm_bindgen(getter)]
    pub fn polygon_count(&self) -> usize {
        self.session.handles().polygons.len()
    }

    #[wasm_bindgen(getter)]
    pub fn circle_count(&self) -> usize {
        self.session.handles().circles.len()
    }

    pub fn config_json(&self) -> String {
        self.session.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.session.enable_perf_metrics(enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.session.perf_stats()
    }
}
