//! Length units and fixed baseball dimensions.
//!
//! Pitch-tracking data arrives in feet; the scene is built in meters.

use nalgebra::Vector3;

/// Meters per foot.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Regulation baseball radius in feet.
pub const BASEBALL_RADIUS_FT: f64 = 0.12;

/// Converts feet to meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

/// Converts meters back to feet.
#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / FEET_TO_METERS
}

/// Converts inches to meters.
#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    feet_to_meters(inches / INCHES_PER_FOOT)
}

/// Converts every component of a vector from feet to meters.
#[inline]
pub fn vec_feet_to_meters(v: &Vector3<f64>) -> Vector3<f64> {
    v.map(feet_to_meters)
}

/// Baseball radius in meters.
#[inline]
pub fn baseball_radius() -> f64 {
    feet_to_meters(BASEBALL_RADIUS_FT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_known_conversions() {
        assert_eq!(feet_to_meters(0.0), 0.0);
        assert_relative_eq!(feet_to_meters(1.0), 0.3048);
        assert_relative_eq!(feet_to_meters(54.0), 16.4592, epsilon = 1e-12);
        assert_relative_eq!(inches_to_meters(17.0), 0.4318, epsilon = 1e-12);
        assert_relative_eq!(baseball_radius(), 0.036576, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_conversion() {
        let v = vec_feet_to_meters(&Vector3::new(1.0, -2.0, 10.0));
        assert_relative_eq!(v, Vector3::new(0.3048, -0.6096, 3.048), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_conversion_invertible(x in -1.0e6f64..1.0e6) {
            let back = feet_to_meters(x) / FEET_TO_METERS;
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
            prop_assert!((meters_to_feet(feet_to_meters(x)) - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_conversion_linear(a in -1.0e4f64..1.0e4, b in -1.0e4f64..1.0e4) {
            let lhs = feet_to_meters(a + b);
            let rhs = feet_to_meters(a) + feet_to_meters(b);
            prop_assert!((lhs - rhs).abs() <= 1e-9);
        }
    }
}
