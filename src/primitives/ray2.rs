//! 2D ray type.

use super::Vec2;
use crate::bounds::Rect2;

/// A 2D ray defined by an origin point and direction.
///
/// The ray covers `origin + t * direction` for `t >= 0`. The direction is
/// stored as-is (not necessarily normalized); its length only scales `t`.
///
/// # Example
///
/// ```
/// use planar::{Ray2, Rect2, Vec2};
///
/// let rect = Rect2::new(1.0, -1.0, 1.0, 1.0);
/// let ray = Ray2::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, -1.0));
///
/// // Touches the top-left corner at t = 1.
/// assert!(ray.intersects_rect(&rect));
/// assert_eq!(ray.clip_rect(&rect), Some((1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2 {
    /// Origin point of the ray
    pub origin: Vec2,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2,
}

impl Ray2 {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub const fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Vec2, through: Vec2) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// - `t = 0` returns the origin
    /// - `t > 0` returns points along the ray direction
    /// - `t < 0` returns points behind the origin (not on the ray)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin.scaled_add(self.direction, t)
    }

    /// Returns a ray pointing in the opposite direction from the same origin.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }

    /// Returns a ray translated by the given offset.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }

    /// Clips the ray against a rectangle (slab method).
    ///
    /// Returns `Some((t_enter, t_exit))`, the closed parameter interval of
    /// the ray inside `rect`, with `0 <= t_enter <= t_exit`. Grazing an edge
    /// or touching a corner yields `t_enter == t_exit`.
    ///
    /// An axis on which the direction is exactly zero never divides: it
    /// either accepts every `t` (origin within that axis' bounds) or
    /// rejects the ray outright. `t_exit` is infinite when both direction
    /// components are zero and the origin is inside.
    ///
    /// The direction is first rescaled so its largest component has
    /// magnitude 1, which keeps each component's sign and zero status.
    /// Whether the ray hits therefore does not depend on its length, even
    /// for directions tiny enough to overflow the division. The returned
    /// parameters are converted back to the original direction and can be
    /// infinite in that case.
    pub fn clip_rect(&self, rect: &Rect2) -> Option<(f32, f32)> {
        let scale = self.direction.x.abs().max(self.direction.y.abs());
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let dir = self.direction / scale;

        let (x_near, x_far) = slab(self.origin.x, dir.x, rect.min_x(), rect.max_x())?;
        let (y_near, y_far) = slab(self.origin.y, dir.y, rect.min_y(), rect.max_y())?;

        // Forward half-line only.
        let t_enter = x_near.max(y_near).max(0.0);
        let t_exit = x_far.min(y_far);

        if t_enter <= t_exit {
            Some((t_enter / scale, t_exit / scale))
        } else {
            None
        }
    }

    /// Checks if the ray intersects a rectangle, boundary included.
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect2) -> bool {
        self.clip_rect(rect).is_some()
    }
}

/// Parameter interval during which `origin + t * dir` stays within
/// `[lo, hi]` on one axis, or `None` if it never does.
#[inline]
fn slab(origin: f32, dir: f32, lo: f32, hi: f32) -> Option<(f32, f32)> {
    if dir == 0.0 {
        return if origin >= lo && origin <= hi {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        } else {
            None
        };
    }

    let ta = (lo - origin) / dir;
    let tb = (hi - origin) / dir;
    // Negative directions reach `hi` first.
    Some((ta.min(tb), ta.max(tb)))
}

impl Default for Ray2 {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            direction: Vec2::X,
        }
    }
}
