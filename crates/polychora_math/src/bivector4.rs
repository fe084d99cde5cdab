//! 4D Bivector type
//!
//! A bivector is an oriented plane element. Components are stored in the
//! order XY, XZ, XW, YZ, YW, ZW, which matches the bivector block of [`Rotor4`].
//!
//! [`Rotor4`]: crate::Rotor4

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Multivector, RotationPlane};

/// Rank-2 element of the 4D geometric algebra
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Bivector4 {
    pub xy: f64,
    pub xz: f64,
    pub xw: f64,
    pub yz: f64,
    pub yw: f64,
    pub zw: f64,
}

impl Multivector for Bivector4 {}

impl Bivector4 {
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    #[inline]
    pub const fn new(xy: f64, xz: f64, xw: f64, yz: f64, yw: f64, zw: f64) -> Self {
        Self { xy, xz, xw, yz, yw, zw }
    }

    /// Unit bivector of a coordinate plane
    pub fn from_plane(plane: RotationPlane) -> Self {
        let mut out = Self::ZERO;
        out.components_mut()[plane.index()] = 1.0;
        out
    }

    /// Additive inverse (the same plane with the opposite orientation)
    #[inline]
    pub fn opposite(self) -> Self {
        -self
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| a * b)
            .sum()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 6] {
        [self.xy, self.xz, self.xw, self.yz, self.yw, self.zw]
    }
}

impl std::ops::Neg for Bivector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.xy, -self.xz, -self.xw, -self.yz, -self.yw, -self.zw)
    }
}

impl std::ops::Mul<f64> for Bivector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}
