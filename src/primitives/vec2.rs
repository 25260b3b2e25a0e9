//! 2D vector type for points, directions and offsets.

use crate::error::ParseError;
use crate::tolerance::approx_eq;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A 2D single-precision vector.
///
/// Used both for positions and for directions. All methods take `self` by
/// value and return a new vector; the `*_assign`/`*_mut` variants write the
/// receiver instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Returns `self + v * s`.
    #[inline]
    pub fn scaled_add(self, v: Self, s: f32) -> Self {
        Self {
            x: self.x + v.x * s,
            y: self.y + v.y * s,
        }
    }

    /// Performs `self += v * s`, writing the receiver.
    #[inline]
    pub fn scaled_add_assign(&mut self, v: Self, s: f32) {
        self.x += v.x * s;
        self.y += v.y * s;
    }

    /// Returns `self * t`.
    #[inline]
    pub fn scale(self, t: f32) -> Self {
        self * t
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Lowers each component of the receiver to `other`'s where smaller.
    ///
    /// Meant for accumulating the minimum corner of a bounding box.
    #[inline]
    pub fn min_assign(&mut self, other: Self) {
        *self = self.min(other);
    }

    /// Raises each component of the receiver to `other`'s where larger.
    #[inline]
    pub fn max_assign(&mut self, other: Self) {
        *self = self.max(other);
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    /// `t` is not clamped, values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the squared distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Returns the distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// The vector must be non-zero. A zero vector yields NaN components;
    /// use [`try_normalize`](Self::try_normalize) when that can happen.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Scales the receiver to unit length in place.
    ///
    /// Same precondition as [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Returns a normalized vector, or `None` if the length is too small
    /// to normalize reliably.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > f32::EPSILON {
            Some(self / len)
        } else {
            None
        }
    }

    /// Reports whether both components are equal within
    /// [`APPROX_EPSILON`](crate::tolerance::APPROX_EPSILON).
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<Vec2> for (f32, f32) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// Formats as `(x,y)`. A precision, as in `{:.2}`, applies to both components.
///
/// Without a precision each component prints at full `f32` precision
/// (shortest form that parses back to the same value), not rounded to a
/// fixed number of significant digits.
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*},{:.*})", p, self.x, p, self.y),
            None => write!(f, "({},{})", self.x, self.y),
        }
    }
}

/// Parses the `(x,y)` form produced by `Display`. Whitespace around the
/// parentheses and the components is ignored.
impl FromStr for Vec2 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                log::debug!("rejected vector {s:?}: missing parentheses");
                ParseError::MissingParens
            })?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            log::debug!("rejected vector {s:?}: {} components", parts.len());
            return Err(ParseError::ComponentCount(parts.len()));
        }

        let component = |p: &str| {
            p.parse::<f32>().map_err(|_| {
                log::debug!("rejected vector {s:?}: bad component {p:?}");
                ParseError::InvalidNumber(p.to_string())
            })
        };

        Ok(Self::new(component(parts[0])?, component(parts[1])?))
    }
}
