//! planar - Planar geometry primitives
//!
//! Single-precision 2D vectors, axis-aligned rectangles and a ray/rectangle
//! slab test that handles axis-aligned rays and degenerate boxes without
//! dividing by zero. Every operation is a pure function of `Copy` values.

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod tolerance;

pub use bounds::Rect2;
pub use error::ParseError;
pub use primitives::{Ray2, Vec2};
pub use tolerance::{approx_eq, APPROX_EPSILON};
