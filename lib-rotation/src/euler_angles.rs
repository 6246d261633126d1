use crate::*;

/// Orientation as a product of three rotations in radians, applied in intrinsic Z-Y-X order: yaw
/// about the body Z-axis first, then pitch about the rotated Y-axis, then roll about the twice
/// rotated X-axis.
/// 
/// Roll = rotation around X-axis
/// Pitch = rotation around Y-axis
/// Yaw = rotation around Z-axis
/// 
/// Any value is accepted on construction. Angles coming out of [`quaternion_to_euler`] have
/// pitch in `[-π/2, π/2]` and roll/yaw in `(-π, π]`.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles
{
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles
{
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        EulerAngles { roll, pitch, yaw }
    }

    /// Creates an all zeros euler angles instance, i.e. the identity/no rotation angles.
    /// 
    pub const fn identity() -> Self {
        EulerAngles { roll: 0.0, pitch: 0.0, yaw: 0.0 }
    }

    /// Creates euler angles from values given in degrees.
    /// 
    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        EulerAngles::new(roll * DEG_TO_RAD, pitch * DEG_TO_RAD, yaw * DEG_TO_RAD)
    }

    /// The angles in degrees as `[roll, pitch, yaw]`, meant for displaying only.
    /// 
    pub fn to_degrees(&self) -> [f64; 3] {
        [self.roll * RAD_TO_DEG, self.pitch * RAD_TO_DEG, self.yaw * RAD_TO_DEG]
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        libm::fabs(self.roll - other.roll) <= tol
            && libm::fabs(self.pitch - other.pitch) <= tol
            && libm::fabs(self.yaw - other.yaw) <= tol
    }
}

impl TryFrom<Quaternion> for EulerAngles {
    type Error = RotationError;

    fn try_from(value: Quaternion) -> Result<Self, Self::Error> {
        quaternion_to_euler(&value)
    }
}

impl TryFrom<&Quaternion> for EulerAngles {
    type Error = RotationError;

    fn try_from(q: &Quaternion) -> Result<Self, Self::Error> {
        quaternion_to_euler(q)
    }
}
