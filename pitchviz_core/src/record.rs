//! Pitch records and typed field access.
//!
//! A [`PitchRecord`] is one row of imported tabular data, kept as raw strings.
//! Numbers are parsed on demand through [`PitchRecord::parse_field`], which is
//! the only place defaulting and numeric validation happen.

use crate::error::VizError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names used by pitchviz.
pub mod fields {
    pub const RELEASE_POS_X: &str = "release_pos_x";
    pub const RELEASE_POS_Y: &str = "release_pos_y";
    pub const RELEASE_POS_Z: &str = "release_pos_z";
    pub const VX0: &str = "vx0";
    pub const VY0: &str = "vy0";
    pub const VZ0: &str = "vz0";
    pub const AX: &str = "ax";
    pub const AY: &str = "ay";
    pub const AZ: &str = "az";
    pub const AT_BAT_NUMBER: &str = "at_bat_number";
    pub const PITCH_TYPE: &str = "pitch_type";
}

/// Default release position in feet (x, y, z).
pub const DEFAULT_RELEASE_POS: [f64; 3] = [0.0, 50.0, 6.0];

/// Grouping key used when a record has no `at_bat_number`.
pub const DEFAULT_AT_BAT: &str = "UnknownAtBat";

/// Pitch code used when a record has no `pitch_type`.
pub const DEFAULT_PITCH_TYPE: &str = "UNK";

/// One row of pitch-tracking data: column name to raw value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    fields: HashMap<String, String>,
}

impl PitchRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a numeric field, falling back to `default` when the column is
    /// absent.
    ///
    /// A present value must parse to a finite number. Empty cells, text, and
    /// `NaN`/`inf` spellings are rejected with [`VizError::Parse`].
    pub fn parse_field(&self, name: &str, default: f64) -> Result<f64, VizError> {
        let Some(raw) = self.get(name) else {
            return Ok(default);
        };
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| VizError::parse(name, raw))
    }

    /// Grouping key for at-bat containers.
    pub fn at_bat_key(&self) -> &str {
        self.get(fields::AT_BAT_NUMBER).unwrap_or(DEFAULT_AT_BAT)
    }

    /// Pitch classification code.
    pub fn pitch_type_key(&self) -> &str {
        self.get(fields::PITCH_TYPE).unwrap_or(DEFAULT_PITCH_TYPE)
    }
}

impl<K, V> FromIterator<(K, V)> for PitchRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Initial conditions of a pitch at release, in feet and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReleaseState {
    /// Release position (ft)
    pub position: Vector3<f64>,

    /// Velocity at release (ft/s)
    pub velocity: Vector3<f64>,

    /// Constant acceleration over the flight (ft/s²)
    pub acceleration: Vector3<f64>,
}

impl ReleaseState {
    /// Parses the nine physical fields of a record, applying defaults for
    /// absent columns.
    pub fn from_record(record: &PitchRecord) -> Result<Self, VizError> {
        let [px, py, pz] = DEFAULT_RELEASE_POS;
        Ok(Self {
            position: Vector3::new(
                record.parse_field(fields::RELEASE_POS_X, px)?,
                record.parse_field(fields::RELEASE_POS_Y, py)?,
                record.parse_field(fields::RELEASE_POS_Z, pz)?,
            ),
            velocity: Vector3::new(
                record.parse_field(fields::VX0, 0.0)?,
                record.parse_field(fields::VY0, 0.0)?,
                record.parse_field(fields::VZ0, 0.0)?,
            ),
            acceleration: Vector3::new(
                record.parse_field(fields::AX, 0.0)?,
                record.parse_field(fields::AY, 0.0)?,
                record.parse_field(fields::AZ, 0.0)?,
            ),
        })
    }

    /// Constant-acceleration position at time `t`, in feet.
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        self.position + self.velocity * t + self.acceleration * (0.5 * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_use_defaults() {
        let record = PitchRecord::new();
        let state = ReleaseState::from_record(&record).unwrap();

        assert_eq!(state.position, Vector3::new(0.0, 50.0, 6.0));
        assert_eq!(state.velocity, Vector3::zeros());
        assert_eq!(state.acceleration, Vector3::zeros());
        assert_eq!(record.at_bat_key(), "UnknownAtBat");
        assert_eq!(record.pitch_type_key(), "UNK");
    }

    #[test]
    fn test_parse_present_fields() {
        let record = PitchRecord::new()
            .with("release_pos_x", "-1.5")
            .with("release_pos_y", " 54.0 ")
            .with("vy0", "-130")
            .with("az", "-3.2e1");

        assert_eq!(record.parse_field("release_pos_x", 0.0).unwrap(), -1.5);
        assert_eq!(record.parse_field("release_pos_y", 50.0).unwrap(), 54.0);
        assert_eq!(record.parse_field("vy0", 0.0).unwrap(), -130.0);
        assert_eq!(record.parse_field("az", 0.0).unwrap(), -32.0);
    }

    #[test]
    fn test_non_numeric_is_parse_error() {
        for bad in ["", "fast", "NaN", "inf", "1.2.3"] {
            let record = PitchRecord::new().with("vx0", bad);
            let err = record.parse_field("vx0", 0.0).unwrap_err();
            match err {
                VizError::Parse { field, value } => {
                    assert_eq!(field, "vx0");
                    assert_eq!(value, bad);
                }
                other => panic!("expected parse error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_release_state_propagates_parse_error() {
        let record = PitchRecord::new().with("ay", "n/a");
        assert!(matches!(
            ReleaseState::from_record(&record),
            Err(VizError::Parse { .. })
        ));
    }

    #[test]
    fn test_keys_from_record() {
        let record: PitchRecord = [("at_bat_number", "7"), ("pitch_type", "SL")]
            .into_iter()
            .collect();
        assert_eq!(record.at_bat_key(), "7");
        assert_eq!(record.pitch_type_key(), "SL");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_position_at() {
        let state = ReleaseState {
            position: Vector3::new(1.0, 50.0, 6.0),
            velocity: Vector3::new(2.0, -100.0, 0.0),
            acceleration: Vector3::new(0.0, 20.0, -32.0),
        };
        assert_eq!(state.position_at(0.0), state.position);

        let p = state.position_at(0.5);
        assert!((p.x - 2.0).abs() < 1e-12);
        assert!((p.y - 2.5).abs() < 1e-12);
        assert!((p.z - 2.0).abs() < 1e-12);
    }
}
