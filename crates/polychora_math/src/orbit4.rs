//! Viewer state for looking at a 4D scene
//!
//! Both controllers store only their primary state; position and
//! orientation are derived on demand.

use crate::{Euler4, RotationPlane, Rotor4, Transform4, Vec4};

/// Pointer travel (pixels) per unit of pan, relative to distance
const PAN_SCALE: f64 = 1000.0;
/// Pointer travel per radian of orbit turn
const TURN_SCALE: f64 = 250.0;
/// Scroll travel per doubling of distance
const ZOOM_SCALE: f64 = 1000.0;
/// Pointer travel per radian of first-person turn, and per unit of dolly
const FIRST_PERSON_SCALE: f64 = 1000.0;

/// Local -Z is forward
const FORWARD: Vec4 = Vec4::new(0.0, 0.0, -1.0, 0.0);

/// Orbiting viewer: looks at `center` from `distance` away
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit4 {
    pub center: Vec4,
    pub orientation_euler: Euler4,
    pub distance: f64,
}

impl Default for Orbit4 {
    fn default() -> Self {
        Self {
            center: Vec4::ZERO,
            orientation_euler: Euler4::new([0.0; 6], Self::ORDERING),
            distance: 1.0,
        }
    }
}

impl Orbit4 {
    /// Yaw and pitch come first so [`turn`](Self::turn) drives them
    pub const ORDERING: [RotationPlane; 6] = [
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XY,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    pub fn orientation(&self) -> Rotor4 {
        self.orientation_euler.as_rotor()
    }

    pub fn position(&self) -> Vec4 {
        let forward = self.orientation().inverse().rotate(FORWARD);
        self.center + forward * self.distance
    }

    pub fn transform(&self) -> Transform4 {
        Transform4::from_translation_rotation(self.position(), self.orientation())
    }

    /// Move the center within the view plane
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let inverse = self.orientation().inverse();
        let right = inverse.rotate(Vec4::X);
        let up = inverse.rotate(Vec4::Y);
        let step = self.distance / PAN_SCALE;
        self.center += right * (-dx * step) + up * (dy * step);
    }

    pub fn turn(&mut self, dx: f64, dy: f64) {
        self.orientation_euler.angles[0] += dx / TURN_SCALE;
        self.orientation_euler.angles[1] -= dy / TURN_SCALE;
    }

    pub fn zoom(&mut self, dy: f64) {
        self.distance *= 2f64.powf(dy / ZOOM_SCALE);
    }
}

/// Free-flying viewer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FirstPerson4 {
    pub position: Vec4,
    pub orientation: Rotor4,
}

impl FirstPerson4 {
    pub fn transform(&self) -> Transform4 {
        Transform4::from_translation_rotation(self.position, self.orientation)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        let inverse = self.orientation.inverse();
        let right = inverse.rotate(Vec4::X);
        let up = inverse.rotate(Vec4::Y);
        self.position += right * (-dx / FIRST_PERSON_SCALE) + up * (dy / FIRST_PERSON_SCALE);
    }

    pub fn turn(&mut self, dx: f64, dy: f64) {
        self.orientation = self
            .orientation
            .mult(&Rotor4::from_plane_angle(RotationPlane::XZ, -dx / FIRST_PERSON_SCALE))
            .mult(&Rotor4::from_plane_angle(RotationPlane::YZ, dy / FIRST_PERSON_SCALE));
    }

    /// Move along the current forward direction
    pub fn dolly(&mut self, dy: f64) {
        let forward = self.orientation.inverse().rotate(FORWARD);
        self.position += forward * (dy / FIRST_PERSON_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Multivector;

    const EPSILON: f64 = 1e-10;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_orbit_default_sits_behind_center() {
        let orbit = Orbit4::default();
        assert_eq!(orbit.orientation(), Rotor4::IDENTITY);
        assert!(vec_approx_eq(orbit.position(), Vec4::new(0.0, 0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_orbit_zoom_doubles_distance() {
        let mut orbit = Orbit4::default();
        orbit.zoom(1000.0);
        assert!((orbit.distance - 2.0).abs() < EPSILON);
        orbit.zoom(-2000.0);
        assert!((orbit.distance - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_orbit_pan_scales_with_distance() {
        let mut orbit = Orbit4 {
            distance: 2.0,
            ..Default::default()
        };
        orbit.pan(500.0, 250.0);
        assert!(vec_approx_eq(orbit.center, Vec4::new(-1.0, 0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_orbit_turn_keeps_distance() {
        let mut orbit = Orbit4 {
            center: Vec4::new(1.0, 2.0, 3.0, 4.0),
            distance: 3.0,
            ..Default::default()
        };
        orbit.turn(100.0, -40.0);
        assert!((orbit.orientation_euler.angles[0] - 0.4).abs() < EPSILON);
        assert!((orbit.orientation_euler.angles[1] - 0.16).abs() < EPSILON);
        assert!((orbit.position().dist(orbit.center) - 3.0).abs() < EPSILON);
        assert_eq!(orbit.transform().translation, orbit.position());
    }

    #[test]
    fn test_first_person_dolly_and_pan() {
        let mut viewer = FirstPerson4::default();
        viewer.dolly(1000.0);
        assert!(vec_approx_eq(viewer.position, FORWARD));
        viewer.pan(-1000.0, 1000.0);
        assert!(vec_approx_eq(viewer.position, Vec4::new(1.0, 1.0, -1.0, 0.0)));
    }

    #[test]
    fn test_first_person_turn_stays_unit() {
        let mut viewer = FirstPerson4::default();
        for _ in 0..10 {
            viewer.turn(123.0, -45.0);
        }
        assert!((viewer.orientation.mag() - 1.0).abs() < EPSILON);
        assert_ne!(viewer.orientation, Rotor4::IDENTITY);
    }
}
