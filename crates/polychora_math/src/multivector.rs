//! Component-wise helpers shared by the fixed-length algebra types
//!
//! [`Vec4`](crate::Vec4), [`Bivector4`](crate::Bivector4) and
//! [`Rotor4`](crate::Rotor4) are all `#[repr(C)]` structs of `f64`, so their
//! components can be viewed as a flat slice through `bytemuck`.

use bytemuck::Pod;

/// A fixed-length list of `f64` components.
///
/// Normalizing a zero-magnitude value divides by zero and yields NaN
/// components; callers that need a fallback check [`is_zero`](Self::is_zero)
/// first.
pub trait Multivector: Pod {
    /// Components in storage order
    #[inline]
    fn components(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    #[inline]
    fn components_mut(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Sum of all components squared
    #[inline]
    fn mag_sq(&self) -> f64 {
        self.components().iter().map(|c| c * c).sum()
    }

    #[inline]
    fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Squared distance between two values of the same type
    fn sq_dist(&self, other: &Self) -> f64 {
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.components().iter().all(|&c| c == 0.0)
    }

    /// Multiply every component in place
    fn scale(&mut self, scalar: f64) -> &mut Self {
        for c in self.components_mut() {
            *c *= scalar;
        }
        self
    }

    /// Scale in place to unit magnitude
    fn normalize(&mut self) -> &mut Self {
        let inv = 1.0 / self.mag();
        self.scale(inv)
    }

    #[inline]
    fn scaled(&self, scalar: f64) -> Self {
        let mut out = *self;
        out.scale(scalar);
        out
    }

    #[inline]
    fn unit(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bivector4, Rotor4, Vec4};

    #[test]
    fn test_components_follow_field_order() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.components(), &[1.0, 2.0, 3.0, 4.0]);

        let b = Bivector4::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(b.components(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!(Rotor4::IDENTITY.components().len(), 8);
        assert_eq!(Rotor4::IDENTITY.components()[0], 1.0);
    }

    #[test]
    fn test_mag_and_sq_dist() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.mag_sq(), 25.0);
        assert_eq!(v.mag(), 5.0);
        assert_eq!(v.sq_dist(&Vec4::ZERO), 25.0);
        assert_eq!(v.sq_dist(&v), 0.0);
    }

    #[test]
    fn test_scale_in_place_chains() {
        let mut v = Vec4::new(3.0, 0.0, 4.0, 0.0);
        v.scale(2.0).scale(0.5);
        assert_eq!(v, Vec4::new(3.0, 0.0, 4.0, 0.0));
        v.normalize();
        assert!((v.mag() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_zero() {
        assert!(Vec4::ZERO.is_zero());
        assert!(Bivector4::ZERO.is_zero());
        assert!(!Rotor4::IDENTITY.is_zero());
    }

    #[test]
    fn test_normalizing_zero_is_nan() {
        let n = Vec4::ZERO.unit();
        assert!(n.x.is_nan());
    }
}
