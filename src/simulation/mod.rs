//! Engine - owns the world and advances it one fixed step at a time
//!
//! Step pipeline (see step/step.rs):
//! 1. `before_update` hooks (attractor forces are installed here)
//! 2. gravity
//! 3. Verlet integration with air friction
//! 4. contact detection + resolution
//! 5. force accumulators cleared
//! 6. `after_update` hooks (pointer follow, screen wrap)
//!
//! Plugins add behaviour by registering hooks; the engine itself knows
//! nothing about attractors or wrapping.

use crate::core::math::Vec2;
use crate::systems::body::{Body, BodyId};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "world/world.rs"]
mod world;
#[path = "events/events.rs"]
mod events;
#[path = "plugin/plugin.rs"]
mod plugin;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/step.rs"]
mod step;

pub use events::{Events, UpdateHook};
pub use perf_stats::PerfStats;
pub use plugin::Plugin;
pub use world::World;

pub(crate) use perf_timer::StepTimer;

/// Step length the air-friction coefficients are calibrated against (60 Hz)
pub const BASE_DELTA_MS: f32 = 1000.0 / 60.0;

/// Scales `gravity * mass` into a per-step force
pub const GRAVITY_SCALE: f32 = 0.001;

/// Clock state handed to hooks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Simulated time elapsed, in milliseconds
    pub timestamp_ms: f64,
    /// Length of the step being run
    pub delta_ms: f32,
    /// Completed steps
    pub steps: u64,
}

pub struct Engine {
    world: World,
    events: Events,
    timing: Timing,
    plugins: Vec<&'static str>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Engine {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            world: World::new(gravity),
            events: Events::default(),
            timing: Timing {
                timestamp_ms: 0.0,
                delta_ms: BASE_DELTA_MS,
                steps: 0,
            },
            plugins: Vec::new(),
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn events_mut(&mut self) -> &mut Events {
        &mut self.events
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        self.world.add(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.world.body(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.world.body_mut(id)
    }

    /// Install a plugin once; returns false if one with the same name is
    /// already installed.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> bool {
        let name = plugin.name();
        if self.has_plugin(name) {
            return false;
        }
        plugin.install(self);
        self.plugins.push(name);
        console_log!("plugin installed: {}", name);
        true
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| *p == name)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Advance the world by `delta_ms`
    pub fn update(&mut self, delta_ms: f32) {
        step::step(self, delta_ms);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
