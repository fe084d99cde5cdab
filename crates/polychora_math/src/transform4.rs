//! 4D Transform (translation, rotation, per-axis scale)
//!
//! Points are rotated, then scaled component-wise, then translated.

use serde::{Deserialize, Serialize};

use crate::{Matrix5, Rotor4, Vec4};

/// How the last row of [`Transform4::matrix_for`] is filled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Last row `[0, 0, 0, 0, 1]`: an ordinary affine matrix
    #[default]
    Perspective,
    /// Last row `[0, 0, 0, 1, 0]`: the homogeneous coordinate takes the w value
    Orthographic,
}

/// A 4D transform with translation, rotation, and per-axis scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform4 {
    pub translation: Vec4,
    pub rotation: Rotor4,
    pub scale: Vec4,
}

impl Default for Transform4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform4 {
    pub fn identity() -> Self {
        Self {
            translation: Vec4::ZERO,
            rotation: Rotor4::IDENTITY,
            scale: Vec4::ONES,
        }
    }

    pub fn from_translation(translation: Vec4) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    pub fn from_translation_rotation(translation: Vec4, rotation: Rotor4) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec4::ONES,
        }
    }

    /// Transform a point: rotate, scale, then translate
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        self.transform_direction(p) + self.translation
    }

    /// Transform a direction: rotate and scale, no translation
    pub fn transform_direction(&self, d: Vec4) -> Vec4 {
        self.rotation.rotate(d).component_mul(self.scale)
    }

    /// Homogeneous matrix equivalent to [`transform_point`](Self::transform_point)
    pub fn matrix(&self) -> Matrix5 {
        self.matrix_for(Projection::Perspective)
    }

    pub fn matrix_for(&self, projection: Projection) -> Matrix5 {
        let basis = |axis: usize| {
            let d = self.transform_direction(Vec4::basis(axis));
            [d.x, d.y, d.z, d.w, 0.0]
        };
        let t = self.translation;
        let mut m = Matrix5::from_cols([
            basis(0),
            basis(1),
            basis(2),
            basis(3),
            [t.x, t.y, t.z, t.w, 1.0],
        ]);

        if projection == Projection::Orthographic {
            for col in 0..5 {
                m.set_cell(col, 4, if col == 3 { 1.0 } else { 0.0 });
            }
        }
        m
    }

    /// Inverse of [`matrix`](Self::matrix), computed by elimination
    pub fn matrix_inverse(&self) -> Matrix5 {
        self.matrix().inv()
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: Vec4) {
        self.translation += offset;
    }

    /// Apply an extra rotation after the current one
    pub fn rotate(&mut self, rotor: &Rotor4) {
        self.rotation = self.rotation.mult(rotor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RotationPlane;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    fn sample() -> Transform4 {
        Transform4 {
            translation: Vec4::new(1.0, -2.0, 0.5, 3.0),
            rotation: Rotor4::from_plane_angle(RotationPlane::XY, 0.4)
                .mult(&Rotor4::from_plane_angle(RotationPlane::ZW, -1.1)),
            scale: Vec4::new(2.0, 1.0, 0.5, 3.0),
        }
    }

    #[test]
    fn test_identity() {
        let t = Transform4::identity();
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.transform_point(p), p);
        assert_eq!(t.matrix(), Matrix5::IDENTITY);
    }

    #[test]
    fn test_transform_point_order() {
        let t = Transform4 {
            translation: Vec4::new(0.0, 0.0, 0.0, 1.0),
            rotation: Rotor4::from_plane_angle(RotationPlane::XY, PI / 2.0),
            scale: Vec4::new(1.0, 3.0, 1.0, 1.0),
        };
        // X rotates to Y, is then scaled by 3 along Y, then moved along W
        let p = t.transform_point(Vec4::X);
        assert!(vec_approx_eq(p, Vec4::new(0.0, 3.0, 0.0, 1.0)), "got {:?}", p);
    }

    #[test]
    fn test_matrix_matches_transform_point() {
        let t = sample();
        let m = t.matrix();
        let p = Vec4::new(0.3, -1.0, 2.0, 0.7);
        assert!(vec_approx_eq(m.transform_point(p), t.transform_point(p)));
        assert_eq!(m.column(4), [1.0, -2.0, 0.5, 3.0, 1.0]);
        for col in 0..4 {
            assert_eq!(m.cell(col, 4), 0.0);
        }
    }

    #[test]
    fn test_matrix_inverse_round_trip() {
        let t = sample();
        let p = Vec4::new(0.3, -1.0, 2.0, 0.7);
        let back = t.matrix_inverse().transform_point(t.transform_point(p));
        assert!(vec_approx_eq(back, p), "got {:?}", back);
    }

    #[test]
    fn test_orthographic_last_row() {
        let m = sample().matrix_for(Projection::Orthographic);
        let last_row: Vec<f64> = (0..5).map(|c| m.cell(c, 4)).collect();
        assert_eq!(last_row, vec![0.0, 0.0, 0.0, 1.0, 0.0]);
        // The upper block is untouched
        assert_eq!(m.column(4)[..4], sample().matrix().column(4)[..4]);
    }

    #[test]
    fn test_translate_and_rotate() {
        let mut t = Transform4::identity();
        t.translate(Vec4::new(1.0, 0.0, 0.0, 0.0));
        t.rotate(&Rotor4::from_plane_angle(RotationPlane::XW, PI / 2.0));
        let p = t.transform_point(Vec4::X);
        assert!(vec_approx_eq(p, Vec4::new(1.0, 0.0, 0.0, 1.0)), "got {:?}", p);
    }
}
