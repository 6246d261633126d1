use core::f64::consts::PI;

/// Clamps a value into `[-1, 1]`, the domain of `asin`/`acos`. Values that should be exactly
/// `±1` often land a few ulps outside of that range after a handful of multiplications.
/// 
/// NaN is passed through unchanged.
/// 
pub fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value < -1.0 {
        -1.0
    } else {
        value
    }
}

/// Wraps an angle in radians into `(-π, π]`. Angles already in range are returned untouched.
/// 
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = libm::atan2(libm::sin(angle), libm::cos(angle));
    if wrapped <= -PI {
        return PI;
    }
    wrapped
}
