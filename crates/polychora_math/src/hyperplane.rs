//! 3-spaces and lines embedded in 4D
//!
//! The slicing hyperplane is [`Hyperplane4::W_ZERO`], the 3-space of all
//! points with w = 0.

use crate::Vec4;

/// Parametric line `offset + direction * t`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line4 {
    pub direction: Vec4,
    pub offset: Vec4,
}

impl Line4 {
    pub fn new(direction: Vec4, offset: Vec4) -> Self {
        Self { direction, offset }
    }

    /// Line through two points, with `t = 0` at `a` and `t = 1` at `b`
    pub fn through(a: Vec4, b: Vec4) -> Self {
        Self::new(b - a, a)
    }

    #[inline]
    pub fn evaluate(&self, t: f64) -> Vec4 {
        self.offset + self.direction * t
    }
}

/// A 3-space given by a normal and any point lying in it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperplane4 {
    pub normal: Vec4,
    pub offset: Vec4,
}

impl Hyperplane4 {
    pub const W_ZERO: Self = Self {
        normal: Vec4::W,
        offset: Vec4::ZERO,
    };

    pub fn new(normal: Vec4, offset: Vec4) -> Self {
        Self { normal, offset }
    }

    /// Line parameter of the intersection point.
    ///
    /// Returns ±infinity when the line is parallel to and outside the
    /// hyperplane, and NaN when the line lies inside it.
    pub fn intersect_line(&self, line: &Line4) -> f64 {
        (self.offset - line.offset).dot(self.normal) / line.direction.dot(self.normal)
    }

    /// Intersection point, with the same edge-case values as
    /// [`intersect_line`](Self::intersect_line)
    pub fn intersection_with_line(&self, line: &Line4) -> Vec4 {
        line.evaluate(self.intersect_line(line))
    }

    /// Signed distance scaled by the normal's length
    #[inline]
    pub fn side(&self, p: Vec4) -> f64 {
        (p - self.offset).dot(self.normal)
    }
}
