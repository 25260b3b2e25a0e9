//! Floating-point geometric primitives.

mod ray2;
mod vec2;

pub use ray2::Ray2;
pub use vec2::Vec2;
