//! Scene tuning loaded from JSON
//!
//! Every field has a default, so `{}` is a valid config and produces the stock
//! scene: 60 polygon/circle pairs, a linear attractor of strength 1e-6 that
//! follows the pointer at 12% per step, and a 250ms resize debounce.

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

/// Largest polygon side count a config may request
pub const MAX_POLYGON_SIDES: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Scatter iterations; each one spawns a polygon and a circle
    pub scatter_count: u32,
    pub polygon: PolygonSpec,
    pub circle: CircleSpec,
    pub attractor: AttractorSpec,
    /// Fraction of the remaining pointer distance covered per step
    pub follow_factor: f32,
    pub resize_debounce_ms: f64,
    /// Fixed physics timestep
    pub delta_ms: f32,
    pub gravity: Vec2,
    /// Fixed seed for reproducible scenes; `None` seeds from the host
    pub seed: Option<u64>,
    /// CSS background of the canvas
    pub background: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonSpec {
    pub min_sides: u32,
    pub max_sides: u32,
    pub min_size: f32,
    pub max_size: f32,
    /// mass = size / mass_divisor
    pub mass_divisor: f32,
    pub air_friction: f32,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleSpec {
    pub min_radius: f32,
    pub max_radius: f32,
    pub mass: f32,
    pub air_friction: f32,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractorSpec {
    /// radius = min(width, height) / size_divisor / 2
    pub size_divisor: f32,
    pub strength: f32,
    pub fill: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scatter_count: 60,
            polygon: PolygonSpec::default(),
            circle: CircleSpec::default(),
            attractor: AttractorSpec::default(),
            follow_factor: 0.12,
            resize_debounce_ms: 250.0,
            delta_ms: 1000.0 / 60.0,
            gravity: Vec2::ZERO,
            seed: None,
            background: "transparent".to_string(),
        }
    }
}

impl Default for PolygonSpec {
    fn default() -> Self {
        Self {
            min_sides: 3,
            max_sides: 6,
            min_size: 4.0,
            max_size: 60.0,
            mass_divisor: 20.0,
            air_friction: 0.02,
            fill: "#444".to_string(),
        }
    }
}

impl Default for CircleSpec {
    fn default() -> Self {
        Self {
            min_radius: 2.0,
            max_radius: 20.0,
            mass: 0.1,
            air_friction: 0.01,
            fill: "#888".to_string(),
        }
    }
}

impl Default for AttractorSpec {
    fn default() -> Self {
        Self {
            size_divisor: 25.0,
            strength: 1e-6,
            fill: "#000".to_string(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject ranges the scatter generator cannot sample from
    pub fn validate(&self) -> Result<(), String> {
        let p = &self.polygon;
        if p.min_sides < 3 {
            return Err(format!("polygon.min_sides must be >= 3, got {}", p.min_sides));
        }
        if p.max_sides > MAX_POLYGON_SIDES {
            return Err(format!(
                "polygon.max_sides must be <= {MAX_POLYGON_SIDES}, got {}",
                p.max_sides
            ));
        }
        if p.min_sides > p.max_sides {
            return Err(format!(
                "polygon sides range is empty: {}..={}",
                p.min_sides, p.max_sides
            ));
        }
        check_range("polygon size", p.min_size, p.max_size)?;
        check_positive("polygon.mass_divisor", p.mass_divisor)?;

        let c = &self.circle;
        check_range("circle radius", c.min_radius, c.max_radius)?;
        check_positive("circle.mass", c.mass)?;

        check_positive("attractor.size_divisor", self.attractor.size_divisor)?;
        check_positive("delta_ms", self.delta_ms)?;

        if !(0.0..=1.0).contains(&self.follow_factor) {
            return Err(format!("follow_factor must be in [0, 1], got {}", self.follow_factor));
        }
        if self.resize_debounce_ms < 0.0 {
            return Err(format!(
                "resize_debounce_ms must be >= 0, got {}",
                self.resize_debounce_ms
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, min: f32, max: f32) -> Result<(), String> {
    if !(min > 0.0) || !(min <= max) || !max.is_finite() {
        return Err(format!("{name} range is invalid: {min}..={max}"));
    }
    Ok(())
}

fn check_positive(name: &str, value: f32) -> Result<(), String> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(format!("{name} must be a positive number, got {value}"));
    }
    Ok(())
}
