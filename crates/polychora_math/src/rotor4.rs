//! 4D Rotor for representing rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! A rotor has 8 components:
//! - 1 scalar
//! - 6 bivectors (one for each plane)
//! - 1 pseudoscalar (4-vector)
//!
//! A vector is rotated with the sandwich product `v' = R⁻¹ v R`, so
//! `a.mult(&b)` applies `a` first and then `b`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Bivector4, Multivector, Vec4};

/// The 6 rotation planes in 4D space, in bivector component order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    pub const ALL: [Self; 6] = [Self::XY, Self::XZ, Self::XW, Self::YZ, Self::YW, Self::ZW];

    /// Index of this plane's component within a [`Bivector4`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// 4D Rotor for representing rotations
///
/// Rotor = scalar + bivectors + pseudoscalar
/// R = s + b_xy*e12 + b_xz*e13 + b_xw*e14 + b_yz*e23 + b_yw*e24 + b_zw*e34 + p*e1234
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rotor4 {
    /// Scalar component
    pub s: f64,
    /// Bivector component for XY plane (e12)
    pub b_xy: f64,
    /// Bivector component for XZ plane (e13)
    pub b_xz: f64,
    /// Bivector component for XW plane (e14)
    pub b_xw: f64,
    /// Bivector component for YZ plane (e23)
    pub b_yz: f64,
    /// Bivector component for YW plane (e24)
    pub b_yw: f64,
    /// Bivector component for ZW plane (e34)
    pub b_zw: f64,
    /// Pseudoscalar component (e1234)
    pub p: f64,
}

impl Multivector for Rotor4 {}

impl Default for Rotor4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotor4 {
    /// Identity rotor (no rotation)
    pub const IDENTITY: Self = Self {
        s: 1.0,
        b_xy: 0.0,
        b_xz: 0.0,
        b_xw: 0.0,
        b_yz: 0.0,
        b_yw: 0.0,
        b_zw: 0.0,
        p: 0.0,
    };

    /// Build a rotor from components in storage order
    #[inline]
    pub const fn from_array(c: [f64; 8]) -> Self {
        Self {
            s: c[0],
            b_xy: c[1],
            b_xz: c[2],
            b_xw: c[3],
            b_yz: c[4],
            b_yw: c[5],
            b_zw: c[6],
            p: c[7],
        }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 8] {
        [self.s, self.b_xy, self.b_xz, self.b_xw, self.b_yz, self.b_yw, self.b_zw, self.p]
    }

    /// Assemble a rotor from a scalar, a bivector and a pseudoscalar
    #[inline]
    pub fn from_scalar_bivector(s: f64, b: Bivector4, p: f64) -> Self {
        Self {
            s,
            b_xy: b.xy,
            b_xz: b.xz,
            b_xw: b.xw,
            b_yz: b.yz,
            b_yw: b.yw,
            b_zw: b.zw,
            p,
        }
    }

    /// The bivector block of this rotor
    #[inline]
    pub fn bivector(&self) -> Bivector4 {
        Bivector4::new(self.b_xy, self.b_xz, self.b_xw, self.b_yz, self.b_yw, self.b_zw)
    }

    /// Rotor turning by `angle` across the plane described by `axis`.
    ///
    /// `axis` holds up to 7 coefficients in the order
    /// `[xy, xz, xw, yz, yw, zw, xyzw]`; missing trailing values are zero and
    /// extra values are ignored. The axis is normalized first. A zero axis
    /// yields the identity.
    pub fn plane_angle(axis: &[f64], angle: f64) -> Self {
        let mut c = [0.0; 8];
        for (dst, src) in c[1..].iter_mut().zip(axis) {
            *dst = *src;
        }

        let mag = c[1..].iter().map(|a| a * a).sum::<f64>().sqrt();
        if mag > 0.0 {
            let inv = 1.0 / mag;
            for a in &mut c[1..] {
                *a *= inv;
            }
        }

        let half = angle / 2.0;
        let sin_h = half.sin();
        for a in &mut c[1..] {
            *a *= sin_h;
        }
        c[0] = half.cos();

        let mut rotor = Self::from_array(c);
        if rotor.is_zero() {
            return Self::IDENTITY;
        }
        rotor.normalize();
        rotor
    }

    /// Rotor turning by `angle` across the plane of a bivector
    #[inline]
    pub fn from_bivector_angle(plane: Bivector4, angle: f64) -> Self {
        Self::plane_angle(plane.components(), angle)
    }

    /// Rotor turning by `angle` across a coordinate plane
    ///
    /// Positive angles in the XY plane carry X towards Y.
    #[inline]
    pub fn from_plane_angle(plane: RotationPlane, angle: f64) -> Self {
        Self::from_bivector_angle(Bivector4::from_plane(plane), angle)
    }

    /// Rotor carrying unit vector `from` onto unit vector `to`.
    ///
    /// Inputs are expected to be unit length. Antiparallel inputs have no
    /// unique answer and produce NaN components.
    pub fn between(from: Vec4, to: Vec4) -> Self {
        let mut rotor = Self::from_scalar_bivector(1.0 + from.dot(to), from.outer(to), 0.0);
        rotor.normalize();
        rotor
    }

    /// Inverse of a unit rotor: negated bivector block, scalar and
    /// pseudoscalar unchanged
    pub fn inverse(&self) -> Self {
        Self {
            s: self.s,
            b_xy: -self.b_xy,
            b_xz: -self.b_xz,
            b_xw: -self.b_xw,
            b_yz: -self.b_yz,
            b_yw: -self.b_yw,
            b_zw: -self.b_zw,
            p: self.p,
        }
    }

    /// Geometric product `self * other`.
    ///
    /// The result rotates by `self` and then by `other`.
    pub fn mult(&self, other: &Self) -> Self {
        let a = self.to_array();
        let b = other.to_array();

        Self::from_array([
            a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3] - a[4] * b[4] - a[5] * b[5] - a[6] * b[6] + a[7] * b[7],
            a[0] * b[1] + a[1] * b[0] - a[2] * b[4] - a[3] * b[5] + a[4] * b[2] + a[5] * b[3] - a[6] * b[7] - a[7] * b[6],
            a[0] * b[2] + a[1] * b[4] + a[2] * b[0] - a[3] * b[6] - a[4] * b[1] + a[5] * b[7] + a[6] * b[3] + a[7] * b[5],
            a[0] * b[3] + a[1] * b[5] + a[2] * b[6] + a[3] * b[0] - a[4] * b[7] - a[5] * b[1] - a[6] * b[2] - a[7] * b[4],
            a[0] * b[4] - a[1] * b[2] + a[2] * b[1] - a[3] * b[7] + a[4] * b[0] - a[5] * b[6] + a[6] * b[5] - a[7] * b[3],
            a[0] * b[5] - a[1] * b[3] + a[2] * b[7] + a[3] * b[1] + a[4] * b[6] + a[5] * b[0] - a[6] * b[4] + a[7] * b[2],
            a[0] * b[6] - a[1] * b[7] - a[2] * b[3] + a[3] * b[2] - a[4] * b[5] + a[5] * b[4] + a[6] * b[0] - a[7] * b[1],
            a[0] * b[7] + a[1] * b[6] - a[2] * b[5] + a[3] * b[4] + a[4] * b[3] - a[5] * b[2] + a[6] * b[1] + a[7] * b[0],
        ])
    }

    /// Rotate a 4D vector using the sandwich product: v' = R⁻¹ * v * R
    pub fn rotate(&self, v: Vec4) -> Vec4 {
        let r = self.inverse().to_array();
        let v = v.to_array();

        // R⁻¹ v: a vector part followed by a trivector part (XYZ, XYW, XZW, YZW)
        let m = [
            r[0] * v[0] + r[1] * v[1] + r[2] * v[2] + r[3] * v[3],
            r[0] * v[1] - r[1] * v[0] + r[4] * v[2] + r[5] * v[3],
            r[0] * v[2] - r[2] * v[0] - r[4] * v[1] + r[6] * v[3],
            r[0] * v[3] - r[3] * v[0] - r[5] * v[1] - r[6] * v[2],
            r[1] * v[2] - r[2] * v[1] + r[4] * v[0] + r[7] * v[3],
            r[1] * v[3] - r[3] * v[1] + r[5] * v[0] - r[7] * v[2],
            r[2] * v[3] - r[3] * v[2] + r[6] * v[0] + r[7] * v[1],
            r[4] * v[3] - r[5] * v[2] + r[6] * v[1] - r[7] * v[0],
        ];

        // (R⁻¹ v) R: the trivector terms cancel
        let b = self.to_array();
        Vec4::new(
            m[0] * b[0] - m[1] * b[1] - m[2] * b[2] - m[3] * b[3] - m[4] * b[4] - m[5] * b[5] - m[6] * b[6] + m[7] * b[7],
            m[0] * b[1] + m[1] * b[0] - m[2] * b[4] - m[3] * b[5] + m[4] * b[2] + m[5] * b[3] - m[6] * b[7] - m[7] * b[6],
            m[0] * b[2] + m[1] * b[4] + m[2] * b[0] - m[3] * b[6] - m[4] * b[1] + m[5] * b[7] + m[6] * b[3] + m[7] * b[5],
            m[0] * b[3] + m[1] * b[5] + m[2] * b[6] + m[3] * b[0] - m[4] * b[7] - m[5] * b[1] - m[6] * b[2] - m[7] * b[4],
        )
    }

    /// Rotation angle of a unit rotor
    #[inline]
    pub fn angle(&self) -> f64 {
        2.0 * self.s.acos()
    }

    /// Unit plane coefficients `[xy, xz, xw, yz, yw, zw, xyzw]` of a unit rotor.
    ///
    /// The identity has no plane; its coefficients come out as NaN.
    pub fn plane(&self) -> [f64; 7] {
        let inv = 1.0 / (self.angle() / 2.0).sin();
        let c = self.to_array();
        let mut out = [0.0; 7];
        for (dst, src) in out.iter_mut().zip(&c[1..]) {
            *dst = src * inv;
        }
        out
    }

    /// Convert rotor to a 4x4 rotation matrix
    /// Useful for sending to GPU
    pub fn to_matrix(&self) -> [[f64; 4]; 4] {
        // We compute the matrix by rotating each basis vector
        let x_col = self.rotate(Vec4::X);
        let y_col = self.rotate(Vec4::Y);
        let z_col = self.rotate(Vec4::Z);
        let w_col = self.rotate(Vec4::W);

        // Column-major order
        [
            x_col.to_array(),
            y_col.to_array(),
            z_col.to_array(),
            w_col.to_array(),
        ]
    }
}
