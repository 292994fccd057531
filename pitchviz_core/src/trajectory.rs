//! Trajectory sampler.
//!
//! Turns the release conditions of one pitch into an evenly time-sampled
//! flight path. Each axis follows constant-acceleration kinematics
//! independently:
//!
//! ```text
//! p(t) = p0 + v0·t + ½·a·t²,   t ∈ [0, T]
//! ```
//!
//! The flight time `T` is the time to cover the release distance along the
//! y axis at the release velocity, `|y0 / vy0|`. Points are returned in meters.

use crate::error::VizError;
use crate::record::{PitchRecord, ReleaseState};
use crate::units::vec_feet_to_meters;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Sample count used when the caller does not pick one.
pub const DEFAULT_NUM_POINTS: usize = 20;

/// Flight time used when `vy0 == 0`.
///
/// Not a physical estimate: a zero y velocity never reaches the plate, so
/// this just keeps the output well-defined.
pub const FALLBACK_FLIGHT_TIME: f64 = 0.5;

/// A sampled pitch flight path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Positions in meters, ordered by sample time
    pub points: Vec<Vector3<f64>>,

    /// Estimated flight time in seconds
    pub flight_time: f64,
}

impl Trajectory {
    /// Position at release.
    pub fn release_point(&self) -> Option<Vector3<f64>> {
        self.points.first().copied()
    }

    /// Plate-crossing position (the last sample).
    pub fn plate_crossing(&self) -> Option<Vector3<f64>> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample times matching `points`.
    pub fn sample_times(&self) -> impl Iterator<Item = f64> + '_ {
        sample_times(self.flight_time, self.points.len())
    }
}

/// Flight time estimate from release y position and y velocity.
pub fn flight_time(release_y: f64, vy0: f64) -> f64 {
    if vy0 != 0.0 {
        (release_y / vy0).abs()
    } else {
        FALLBACK_FLIGHT_TIME
    }
}

/// `num_points` times evenly spaced over `[0, flight_time]`, both ends
/// included.
fn sample_times(flight_time: f64, num_points: usize) -> impl Iterator<Item = f64> {
    let steps = num_points.saturating_sub(1).max(1) as f64;
    (0..num_points).map(move |i| i as f64 * flight_time / steps)
}

/// Samples a trajectory from already-parsed release conditions.
pub fn sample_state(state: &ReleaseState, num_points: usize) -> Result<Trajectory, VizError> {
    if num_points < 2 {
        return Err(VizError::InvalidSampleCount(num_points));
    }

    let t_flight = flight_time(state.position.y, state.velocity.y);
    if !t_flight.is_finite() {
        return Err(VizError::NonFinite("flight time"));
    }
    let points: Vec<Vector3<f64>> = sample_times(t_flight, num_points)
        .map(|t| vec_feet_to_meters(&state.position_at(t)))
        .collect();
    // A tiny vy0 gives a huge T, and t² can overflow even for finite inputs
    if points.iter().any(|p| p.iter().any(|c| !c.is_finite())) {
        return Err(VizError::NonFinite("position"));
    }

    Ok(Trajectory {
        points,
        flight_time: t_flight,
    })
}

/// Samples the trajectory of one pitch record.
///
/// Fails with [`VizError::Parse`] if a present physical field is not numeric,
/// with [`VizError::InvalidSampleCount`] if `num_points < 2`, and with
/// [`VizError::NonFinite`] if the kinematics overflow. Degenerate physics
/// (zero velocity, zero acceleration) is not an error.
pub fn sample(record: &PitchRecord, num_points: usize) -> Result<Trajectory, VizError> {
    let state = ReleaseState::from_record(record)?;
    sample_state(&state, num_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::feet_to_meters;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn fastball() -> PitchRecord {
        PitchRecord::new()
            .with("release_pos_y", "54.0")
            .with("vy0", "-130.0")
    }

    #[test]
    fn test_flight_time() {
        assert_eq!(flight_time(54.0, -130.0), 54.0 / 130.0);
        assert_eq!(flight_time(-54.0, -130.0), 54.0 / 130.0);
        assert_eq!(flight_time(54.0, 0.0), FALLBACK_FLIGHT_TIME);
    }

    #[test]
    fn test_fastball_scenario() {
        let traj = sample(&fastball(), DEFAULT_NUM_POINTS).unwrap();

        assert_eq!(traj.len(), 20);
        assert_relative_eq!(traj.flight_time, 0.415_384_6, epsilon = 1e-6);

        let first = traj.release_point().unwrap();
        assert_relative_eq!(first, Vector3::new(0.0, 16.4592, 1.8288), epsilon = 1e-9);

        let last = traj.plate_crossing().unwrap();
        assert_relative_eq!(last.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.z, 1.8288, epsilon = 1e-9);
    }

    #[test]
    fn test_only_y_changes_without_lateral_motion() {
        let traj = sample(&fastball(), 10).unwrap();
        for p in &traj.points {
            assert_eq!(p.x, 0.0);
            assert_eq!(p.z, feet_to_meters(6.0));
        }
        // y decreases monotonically toward the plate
        for pair in traj.points.windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn test_zero_velocity_uses_fallback() {
        let traj = sample(&PitchRecord::new(), 5).unwrap();

        assert_eq!(traj.flight_time, 0.5);
        let release = Vector3::new(0.0, feet_to_meters(50.0), feet_to_meters(6.0));
        for p in &traj.points {
            assert_eq!(*p, release);
        }
    }

    #[test]
    fn test_sample_times_cover_flight() {
        let traj = sample(&fastball(), 5).unwrap();
        let times: Vec<f64> = traj.sample_times().collect();

        assert_eq!(times.len(), 5);
        assert_eq!(times[0], 0.0);
        assert_relative_eq!(times[4], traj.flight_time, epsilon = 1e-15);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_gravity_drops_the_ball() {
        let record = fastball().with("az", "-32.174");
        let traj = sample(&record, DEFAULT_NUM_POINTS).unwrap();

        let t = traj.flight_time;
        let expected_z = feet_to_meters(6.0 - 0.5 * 32.174 * t * t);
        assert_relative_eq!(traj.plate_crossing().unwrap().z, expected_z, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_sample_count() {
        assert!(matches!(
            sample(&fastball(), 1),
            Err(VizError::InvalidSampleCount(1))
        ));
        assert!(matches!(
            sample(&fastball(), 0),
            Err(VizError::InvalidSampleCount(0))
        ));
    }

    #[test]
    fn test_parse_error_aborts_sampling() {
        let record = fastball().with("vz0", "abc");
        assert!(matches!(sample(&record, 20), Err(VizError::Parse { .. })));
    }

    #[test]
    fn test_tiny_velocity_overflow_is_rejected() {
        let record = fastball().with("vy0", "1e-300").with("az", "-32.0");
        let err = sample(&record, DEFAULT_NUM_POINTS).unwrap_err();

        assert!(matches!(err, VizError::NonFinite("position")));
        assert!(err.is_record_local());
    }

    #[test]
    fn test_empty_trajectory_has_no_endpoints() {
        let traj = Trajectory {
            points: Vec::new(),
            flight_time: 0.0,
        };
        assert_eq!(traj.release_point(), None);
        assert_eq!(traj.plate_crossing(), None);
    }

    fn finite() -> impl Strategy<Value = f64> {
        -200.0f64..200.0
    }

    proptest! {
        #[test]
        fn prop_exact_point_count(n in 2usize..200, vy in finite()) {
            let record = PitchRecord::new().with("vy0", vy.to_string());
            let traj = sample(&record, n).unwrap();
            prop_assert_eq!(traj.len(), n);
        }

        #[test]
        fn prop_first_point_is_release(
            x in finite(), y in finite(), z in finite(),
            vx in finite(), vy in finite(), vz in finite(),
            ax in finite(), ay in finite(), az in finite(),
        ) {
            let record: PitchRecord = [
                ("release_pos_x", x), ("release_pos_y", y), ("release_pos_z", z),
                ("vx0", vx), ("vy0", vy), ("vz0", vz),
                ("ax", ax), ("ay", ay), ("az", az),
            ]
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();

            let traj = sample(&record, DEFAULT_NUM_POINTS).unwrap();
            let release = Vector3::new(feet_to_meters(x), feet_to_meters(y), feet_to_meters(z));
            prop_assert_eq!(traj.release_point(), Some(release));
        }

        #[test]
        fn prop_flight_time_rule(y in finite(), vy in finite()) {
            let record = PitchRecord::new()
                .with("release_pos_y", y.to_string())
                .with("vy0", vy.to_string());
            let traj = sample(&record, 2).unwrap();
            if vy != 0.0 {
                prop_assert_eq!(traj.flight_time, (y / vy).abs());
            } else {
                prop_assert_eq!(traj.flight_time, 0.5);
            }
        }

        #[test]
        fn prop_deterministic(vy in finite(), az in finite()) {
            let record = PitchRecord::new()
                .with("vy0", vy.to_string())
                .with("az", az.to_string());
            prop_assert_eq!(sample(&record, 20).unwrap(), sample(&record, 20).unwrap());
        }
    }
}
