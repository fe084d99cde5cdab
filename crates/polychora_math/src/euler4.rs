//! Six-angle orientation description
//!
//! An [`Euler4`] lists one angle per coordinate plane together with the order
//! in which the plane rotations are applied. Converting to a rotor is exact;
//! converting back is a numeric fit by gradient descent.

use serde::{Deserialize, Serialize};

use crate::{Bivector4, Multivector, RotationPlane, Rotor4};

/// Angles (radians) paired position-wise with the plane each one rotates in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler4 {
    pub angles: [f64; 6],
    pub ordering: [RotationPlane; 6],
}

/// Tuning for [`Euler4::fit_rotor`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentParams {
    pub iterations: usize,
    pub learning_rate: f64,
    /// Forward-difference step used for the numeric gradient
    pub difference_step: f64,
}

impl Default for DescentParams {
    fn default() -> Self {
        Self {
            iterations: 256,
            learning_rate: std::f64::consts::FRAC_PI_2,
            difference_step: 1e-15,
        }
    }
}

/// Result of fitting angles to a rotor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerFit {
    pub euler: Euler4,
    /// Squared distance between the target rotor and `euler.as_rotor()`
    pub residual: f64,
}

impl Default for Euler4 {
    fn default() -> Self {
        Self::new([0.0; 6], Self::DEFAULT_ORDERING)
    }
}

impl Euler4 {
    pub const DEFAULT_ORDERING: [RotationPlane; 6] = RotationPlane::ALL;

    pub fn new(angles: [f64; 6], ordering: [RotationPlane; 6]) -> Self {
        Self { angles, ordering }
    }

    /// Compose the plane rotations in `ordering`, first entry applied first
    pub fn as_rotor(&self) -> Rotor4 {
        rotor_for(&self.angles, &self.ordering)
    }

    /// Fit angles for `rotor` with the default descent parameters
    pub fn from_rotor(rotor: &Rotor4, ordering: [RotationPlane; 6]) -> Self {
        Self::fit_rotor(rotor, ordering, &DescentParams::default()).euler
    }

    /// Fit angles for `rotor` by gradient descent on the squared component
    /// distance, starting from all-zero angles.
    ///
    /// The fit is best-effort: large rotations can settle in a local minimum,
    /// which shows up as a non-negligible `residual`.
    pub fn fit_rotor(rotor: &Rotor4, ordering: [RotationPlane; 6], params: &DescentParams) -> EulerFit {
        let loss = |angles: &[f64; 6]| rotor.sq_dist(&rotor_for(angles, &ordering));

        let mut angles = [0.0; 6];
        for _ in 0..params.iterations {
            let current = loss(&angles);

            let mut gradient = [0.0; 6];
            for (i, slope) in gradient.iter_mut().enumerate() {
                let mut probe = angles;
                probe[i] += params.difference_step;
                *slope = (loss(&probe) - current) / params.difference_step;
            }

            for (angle, slope) in angles.iter_mut().zip(gradient) {
                *angle -= slope * params.learning_rate;
            }
        }

        EulerFit {
            euler: Self::new(angles, ordering),
            residual: loss(&angles),
        }
    }
}

fn rotor_for(angles: &[f64; 6], ordering: &[RotationPlane; 6]) -> Rotor4 {
    angles
        .iter()
        .zip(ordering)
        .fold(Rotor4::IDENTITY, |rotor, (&angle, &plane)| {
            rotor.mult(&Rotor4::plane_angle(Bivector4::from_plane(plane).components(), angle))
        })
}
