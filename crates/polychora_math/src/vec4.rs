//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Bivector4, Multivector, Rotor4};

/// 4D Vector with x, y, z, w components
/// The w component is the axis the slicing hyperplane is perpendicular to
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Multivector for Vec4 {}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const ONES: Self = Self { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Unit vector along the given axis (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// # Panics
    /// Panics if `axis >= 4`.
    #[inline]
    pub fn basis(axis: usize) -> Self {
        let mut out = Self::ZERO;
        out[axis] = 1.0;
        out
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length, or ZERO for the zero vector
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn dist(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Extract the xyz components as an array (for 3D rendering)
    #[inline]
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components as an array in x, y, z, w order
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Outer (wedge) product, giving the bivector of the plane spanned by both vectors
    pub fn outer(self, other: Self) -> Bivector4 {
        Bivector4::new(
            self.x * other.y - other.x * self.y,
            self.x * other.z - other.x * self.z,
            self.x * other.w - other.x * self.w,
            self.y * other.z - other.y * self.z,
            self.y * other.w - other.y * self.w,
            self.z * other.w - other.z * self.w,
        )
    }

    /// Ternary cross product: a vector orthogonal to `self`, `a` and `b`
    pub fn cross(self, a: Self, b: Self) -> Self {
        let bv = a.outer(b);
        Self::new(
            self.y * bv.zw - self.z * bv.yw + self.w * bv.yz,
            -self.x * bv.zw + self.z * bv.xw - self.w * bv.xz,
            self.x * bv.yw - self.y * bv.xw + self.w * bv.xy,
            -self.x * bv.yz + self.y * bv.xz - self.z * bv.xy,
        )
    }

    /// Left contraction of this vector onto a bivector
    pub fn dot_bivector(self, bv: Bivector4) -> Self {
        Self::new(
            -self.y * bv.xy - self.z * bv.xz - self.w * bv.xw,
            self.x * bv.xy - self.z * bv.yz - self.w * bv.yw,
            self.x * bv.xz + self.y * bv.yz - self.w * bv.zw,
            self.x * bv.xw + self.y * bv.yw + self.z * bv.zw,
        )
    }

    /// Rotate this vector by a rotor
    #[inline]
    pub fn rotated(self, rotor: &Rotor4) -> Self {
        rotor.rotate(self)
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl std::ops::Mul<f64> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::MulAssign<f64> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::ops::Div<f64> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl std::ops::Index<usize> for Vec4 {
    type Output = f64;
    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.components()[axis]
    }
}

impl std::ops::IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.components_mut()[axis]
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_basis_and_index() {
        assert_eq!(Vec4::basis(0), Vec4::X);
        assert_eq!(Vec4::basis(3), Vec4::W);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[2], 3.0);
        let mut m = v;
        m[3] = -1.0;
        assert_eq!(m.w, -1.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length_and_dist() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert!(approx_eq(v.length(), 5.0));
        assert!(approx_eq(Vec4::ZERO.dist(v), 5.0));
    }

    #[test]
    fn test_normalized() {
        let v = Vec4::new(3.0, 0.0, 4.0, 0.0);
        assert!(approx_eq(v.normalized().length(), 1.0));
        assert_eq!(Vec4::ZERO.normalized(), Vec4::ZERO);
    }

    #[test]
    fn test_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vec4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Vec4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_lerp() {
        let a = Vec4::ZERO;
        let b = Vec4::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(a.lerp(b, 0.5), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_component_mul() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 0.5, -1.0, 0.0);
        assert_eq!(a.component_mul(b), Vec4::new(2.0, 1.0, -3.0, 0.0));
    }

    #[test]
    fn test_outer_is_antisymmetric() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(-2.0, 0.5, 1.0, 3.0);
        assert_eq!(a.outer(b), b.outer(a).opposite());
        assert_eq!(Vec4::X.outer(Vec4::Y), Bivector4::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(a.outer(a), Bivector4::ZERO);
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(-2.0, 0.5, 1.0, 3.0);
        let c = Vec4::new(0.0, 1.0, -1.0, 2.0);
        let n = a.cross(b, c);
        assert!(approx_eq(n.dot(a), 0.0), "got {:?}", n);
        assert!(approx_eq(n.dot(b), 0.0), "got {:?}", n);
        assert!(approx_eq(n.dot(c), 0.0), "got {:?}", n);

        // Cross of the first three basis vectors points along W
        let w = Vec4::X.cross(Vec4::Y, Vec4::Z);
        assert!(approx_eq(w.x, 0.0) && approx_eq(w.y, 0.0) && approx_eq(w.z, 0.0));
        assert!(approx_eq(w.w.abs(), 1.0));
    }

    #[test]
    fn test_dot_bivector() {
        // Contracting X onto the XY plane gives Y
        let v = Vec4::X.dot_bivector(Vec4::X.outer(Vec4::Y));
        assert_eq!(v, Vec4::Y);
        let v = Vec4::Y.dot_bivector(Vec4::X.outer(Vec4::Y));
        assert_eq!(v, -Vec4::X);
    }
}
