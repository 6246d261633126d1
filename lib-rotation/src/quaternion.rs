use core::ops::{Div, Mul, Neg};
use crate::*;

/// Quaternion `w + xi + yj + zk`. Only describes a rotation when it has unit magnitude, nothing
/// here assumes that though, see [`Quaternion::normalize`].
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f64,
    pub x: f64, 
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 4]> for Quaternion {
    fn from(values: [f64; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Quaternion 
{
    /// Create a new quaternion with the given values.
    /// 
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    /// 
    pub const fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// The components as `[w, x, y, z]`.
    /// 
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Get the magnitude of the quaternion.
    /// 
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the quaternion to make it a unit quaternion.
    /// 
    /// Fails for the zero quaternion and for quaternions with NaN/infinite components instead of
    /// handing back NaNs.
    /// 
    pub fn normalize(&self) -> Result<Quaternion, RotationError> {
        let [w, x, y, z] = self.to_array();
        if !(w.is_finite() && x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(RotationError::NonFinite);
        }

        // Scale down by the largest component first so squaring huge components cannot overflow.
        let scale = libm::fmax(
            libm::fmax(libm::fabs(w), libm::fabs(x)),
            libm::fmax(libm::fabs(y), libm::fabs(z)),
        );
        if scale == 0.0 {
            return Err(RotationError::ZeroNorm);
        }
        let scaled = *self / scale;
        Ok(scaled / scaled.magnitude())
    }

    /// Approximate equality check with a given tolerance.
    /// 
    pub fn approx_eq(&self, other: &Quaternion, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
            && libm::fabs(self.w - other.w) <= tol
    }
}

impl From<&EulerAngles> for Quaternion {
    fn from(angles: &EulerAngles) -> Self {
        euler_to_quaternion(angles)
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        euler_to_quaternion(&angles)
    }
}

impl Div<f64> for Quaternion
{
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Quaternion {
            w: self.w / other,
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f64> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Quaternion {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

/// `q` and `-q` describe the same rotation.
impl Neg for Quaternion
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}
