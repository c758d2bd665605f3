mod vec2;
mod bounds;

pub use bounds::Bounds;
pub use vec2::Vec2;
