//! Axis-aligned rectangle.

use crate::primitives::Vec2;

/// A 2D axis-aligned rectangle.
///
/// Defined by its minimum corner and non-negative extents, it covers the
/// closed region `[x, x + width] x [y, y + height]`. A zero width or height
/// is allowed and describes a segment or a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2 {
    /// Minimum x coordinate.
    pub x: f32,
    /// Minimum y coordinate.
    pub y: f32,
    /// Extent along x, expected to be non-negative.
    pub width: f32,
    /// Extent along y, expected to be non-negative.
    pub height: f32,
}

impl Rect2 {
    /// Creates a rectangle from its minimum corner and extents.
    ///
    /// Does not validate that `width` and `height` are non-negative.
    /// Intersection results are unspecified for negative extents.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its minimum corner and a size vector.
    #[inline]
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Creates a rectangle from two arbitrary opposite corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::from_min_size(min, max - min)
    }

    /// Returns the left bound.
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    /// Returns the right bound, `x + width`.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom bound.
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    /// Returns the top bound, `y + height`.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.min_x(), self.min_y())
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.max_x(), self.max_y())
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min().lerp(self.max(), 0.5)
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns `true` if the point lies in the rectangle, boundary included.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Returns `true` if the two rectangles overlap. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = Rect2::new(1.0, -1.0, 1.0, 1.0);
        assert_eq!(r.min_x(), 1.0);
        assert_eq!(r.max_x(), 2.0);
        assert_eq!(r.min_y(), -1.0);
        assert_eq!(r.max_y(), 0.0);
        assert_eq!(r.min(), Vec2::new(1.0, -1.0));
        assert_eq!(r.max(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_from_corners() {
        // Corners in "wrong" order
        let r = Rect2::from_corners(Vec2::new(10.0, 10.0), Vec2::new(0.0, 5.0));
        assert_eq!(r, Rect2::new(0.0, 5.0, 10.0, 5.0));

        let r = Rect2::from_corners(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
        assert_eq!(r, Rect2::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_from_min_size() {
        let r = Rect2::from_min_size(Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0));
        assert_eq!(r, Rect2::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(r.size(), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_dimensions() {
        let r = Rect2::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(r.area(), 50.0);
        assert_eq!(r.center(), Vec2::new(5.0, 2.5));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect2::new(0.0, 0.0, 10.0, 10.0);

        assert!(r.contains_point(Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(Vec2::new(0.0, 0.0))); // On boundary
        assert!(r.contains_point(Vec2::new(10.0, 10.0))); // On boundary
        assert!(!r.contains_point(Vec2::new(-1.0, 5.0)));
        assert!(!r.contains_point(Vec2::new(5.0, 11.0)));
    }

    #[test]
    fn test_degenerate_contains() {
        let segment = Rect2::new(1.0, 0.0, 0.0, 4.0);
        assert!(segment.contains_point(Vec2::new(1.0, 2.0)));
        assert!(!segment.contains_point(Vec2::new(1.001, 2.0)));

        let point = Rect2::new(3.0, 3.0, 0.0, 0.0);
        assert!(point.contains_point(Vec2::new(3.0, 3.0)));
        assert_eq!(point.area(), 0.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect2::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect2::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect2::new(20.0, 20.0, 10.0, 10.0);
        let touching = Rect2::new(10.0, 0.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
    }
}
