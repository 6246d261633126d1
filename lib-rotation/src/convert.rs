use core::f64::consts::FRAC_PI_2;
use log::warn;
use crate::*;

/// Converts euler angles (intrinsic Z-Y-X) to a unit quaternion.
/// 
/// Every finite input is valid. The result is renormalized, the formula is exact on paper but the
/// six half angle products drift a little in floating point.
/// 
pub fn euler_to_quaternion(angles: &EulerAngles) -> Quaternion {
    let cr = libm::cos(angles.roll * 0.5);
    let sr = libm::sin(angles.roll * 0.5);
    let cp = libm::cos(angles.pitch * 0.5);
    let sp = libm::sin(angles.pitch * 0.5);
    let cy = libm::cos(angles.yaw * 0.5);
    let sy = libm::sin(angles.yaw * 0.5);

    let q = Quaternion {
        w: cr * cp * cy + sr * sp * sy,
        x: sr * cp * cy - cr * sp * sy,
        y: cr * sp * cy + sr * cp * sy,
        z: cr * cp * sy - sr * sp * cy,
    };

    // Analytically the magnitude is 1, never zero.
    q / q.magnitude()
}

/// Converts a quaternion to euler angles (intrinsic Z-Y-X). The quaternion does not need to be
/// normalized, only its direction is used.
/// 
/// When pitch ends up at ±90° (gimbal lock) roll and yaw rotate about the same axis and cannot be
/// told apart. In that case roll is set to exactly 0 and the whole remaining rotation is reported
/// as yaw, and a warning is logged.
/// 
/// Fails when the quaternion is zero or has non-finite components.
/// 
pub fn quaternion_to_euler(q: &Quaternion) -> Result<EulerAngles, RotationError> {
    let Quaternion { w, x, y, z } = q.normalize()?;

    // Sine of the pitch, rounding can push it just past ±1.
    let t0 = clamp_unit(2.0 * (w * y - z * x));

    if libm::fabs(t0) > 1.0 - SINGULARITY_TOLERANCE {
        let pitch = libm::copysign(FRAC_PI_2, t0);
        warn!("Gimbal lock detected! Pitch is {:.1}°", pitch * RAD_TO_DEG);
        let yaw = wrap_angle(2.0 * libm::atan2(x, w));
        return Ok(EulerAngles::new(0.0, pitch, yaw));
    }

    // Roll (x-axis rotation), atan2 gives -π for a negative zero numerator.
    let roll = wrap_angle(libm::atan2(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y)));

    // Pitch (y-axis rotation)
    let pitch = libm::asin(t0);

    // Yaw (z-axis rotation)
    let yaw = wrap_angle(libm::atan2(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z)));

    Ok(EulerAngles::new(roll, pitch, yaw))
}
