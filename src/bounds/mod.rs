//! Bounding shapes.

mod rect;

pub use rect::Rect2;
