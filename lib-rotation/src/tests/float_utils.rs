use core::f64::consts::{FRAC_PI_2, PI};

use crate::*;

#[test]
fn test_clamp_unit_absorbs_overshoot() {
    assert_eq!(clamp_unit(1.0000001), 1.0);
    assert_eq!(clamp_unit(-1.0000001), -1.0);

    // Without the clamp asin would hand back NaN here.
    assert!(libm::asin(1.0000001).is_nan());
    assert_eq!(libm::asin(clamp_unit(1.0000001)), FRAC_PI_2);
    assert_eq!(libm::asin(clamp_unit(-1.0000001)), -FRAC_PI_2);
}

#[test]
fn test_clamp_unit_keeps_values_in_range() {
    for value in [-1.0, -0.5, 0.0, 0.25, 0.999999, 1.0] {
        assert_eq!(clamp_unit(value), value);
    }
    assert!(clamp_unit(f64::NAN).is_nan());
}

#[test]
fn test_wrap_angle() {
    assert_eq!(wrap_angle(0.5), 0.5);
    assert!(libm::fabs(wrap_angle(1.5 * PI) + FRAC_PI_2) < 1e-12);
    assert!(libm::fabs(wrap_angle(-1.5 * PI) - FRAC_PI_2) < 1e-12);
    assert!(libm::fabs(wrap_angle(3.0 * PI + 0.5) - (0.5 - PI)) < 1e-12);

    // The range is half open, -π maps onto π.
    assert_eq!(wrap_angle(-PI), PI);
    assert_eq!(wrap_angle(PI), PI);
}
