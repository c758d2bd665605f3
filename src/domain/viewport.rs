use serde::{Deserialize, Serialize};

use crate::core::math::{Bounds, Vec2};

/// Size of the drawing surface in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }

    /// Both sides must be finite and non-negative
    pub fn validate(&self) -> Result<(), String> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if !(side >= 0.0 && side.is_finite()) {
                return Err(format!("viewport {name} must be a finite number >= 0, got {side}"));
            }
        }
        Ok(())
    }
}
