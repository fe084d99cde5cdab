//! 4D Mathematics Library
//!
//! This crate provides the algebra used to build, move and slice 4D polytopes.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Bivector4`] - oriented plane element, the outer product of two vectors
//! - [`Rotor4`] - 4D rotation using geometric algebra
//! - [`Euler4`] - six plane angles with an application order
//! - [`Matrix5`] - 5x5 homogeneous matrix
//! - [`Transform4`] - translation, rotation and per-axis scale
//!
//! ## Geometry
//!
//! - [`Hyperplane4`] - a 3-space in 4D, e.g. the w = 0 slicing plane
//! - [`Line4`] - a parametric line in 4D
//!
//! ## Viewers
//!
//! - [`Orbit4`], [`FirstPerson4`] - camera state with derived pose

mod multivector;
mod vec4;
mod bivector4;
mod rotor4;
pub mod euler4;
pub mod matrix5;
pub mod transform4;
pub mod hyperplane;
pub mod orbit4;

pub use multivector::Multivector;
pub use vec4::Vec4;
pub use bivector4::Bivector4;
pub use rotor4::{Rotor4, RotationPlane};
pub use euler4::{DescentParams, Euler4, EulerFit};
pub use matrix5::Matrix5;
pub use transform4::{Projection, Transform4};
pub use hyperplane::{Hyperplane4, Line4};
pub use orbit4::{FirstPerson4, Orbit4};
