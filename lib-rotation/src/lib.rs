#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod error;
pub use error::*;

pub mod euler_angles;
pub use euler_angles::*;

pub mod quaternion;
pub use quaternion::*;

pub mod convert;
pub use convert::*;

#[cfg(test)]
mod tests;

pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// How close `|sin(pitch)|` may get to 1 before the orientation is treated as gimbal locked.
///
pub const SINGULARITY_TOLERANCE: f64 = 1e-6;
