//! Pitch type color palette.
//!
//! Colors follow the Baseball Savant convention for the six most common pitch
//! types. Anything else is drawn in neutral gray.

use pitchviz_env::MaterialSpec;
use serde::{Deserialize, Serialize};

/// Metallic factor shared by every pitch material.
pub const PITCH_METALLIC: f32 = 0.8;

/// Roughness factor shared by every pitch material.
pub const PITCH_ROUGHNESS: f32 = 0.2;

/// Base color for pitch codes outside the table.
pub const UNKNOWN_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Pitch types with a dedicated color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchType {
    /// FF
    FourSeam,
    /// SI
    Sinker,
    /// CU
    Curveball,
    /// SL
    Slider,
    /// CH
    Changeup,
    /// FC
    Cutter,
}

impl PitchType {
    /// All pitch types in the table.
    pub const ALL: [PitchType; 6] = [
        PitchType::FourSeam,
        PitchType::Sinker,
        PitchType::Curveball,
        PitchType::Slider,
        PitchType::Changeup,
        PitchType::Cutter,
    ];

    /// Looks up a pitch code. Codes are case-sensitive, as in the source data.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FF" => Some(PitchType::FourSeam),
            "SI" => Some(PitchType::Sinker),
            "CU" => Some(PitchType::Curveball),
            "SL" => Some(PitchType::Slider),
            "CH" => Some(PitchType::Changeup),
            "FC" => Some(PitchType::Cutter),
            _ => None,
        }
    }

    /// Two-letter pitch code.
    pub fn code(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "FF",
            PitchType::Sinker => "SI",
            PitchType::Curveball => "CU",
            PitchType::Slider => "SL",
            PitchType::Changeup => "CH",
            PitchType::Cutter => "FC",
        }
    }

    /// Base color (RGBA).
    pub fn color(&self) -> [f32; 4] {
        match self {
            PitchType::FourSeam => [0.95, 0.1, 0.1, 1.0],  // red
            PitchType::Sinker => [0.95, 0.5, 0.1, 1.0],    // orange
            PitchType::Curveball => [0.1, 0.1, 0.95, 1.0], // blue
            PitchType::Slider => [0.8, 0.8, 0.0, 1.0],     // yellow
            PitchType::Changeup => [0.0, 0.8, 0.0, 1.0],   // green
            PitchType::Cutter => [0.8, 0.1, 0.8, 1.0],     // purple
        }
    }
}

impl std::fmt::Display for PitchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Base color for any pitch code, gray if unknown.
pub fn pitch_color(code: &str) -> [f32; 4] {
    PitchType::from_code(code)
        .map(|p| p.color())
        .unwrap_or(UNKNOWN_COLOR)
}

/// Full material style for a pitch code.
pub fn pitch_material_spec(code: &str) -> MaterialSpec {
    MaterialSpec {
        base_color: pitch_color(code),
        metallic: PITCH_METALLIC,
        roughness: PITCH_ROUGHNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_table() {
        assert_eq!(pitch_color("FF"), [0.95, 0.10, 0.10, 1.0]);
        assert_eq!(pitch_color("SI"), [0.95, 0.50, 0.10, 1.0]);
        assert_eq!(pitch_color("CU"), [0.10, 0.10, 0.95, 1.0]);
        assert_eq!(pitch_color("SL"), [0.80, 0.80, 0.00, 1.0]);
        assert_eq!(pitch_color("CH"), [0.00, 0.80, 0.00, 1.0]);
        assert_eq!(pitch_color("FC"), [0.80, 0.10, 0.80, 1.0]);
    }

    #[test]
    fn test_unknown_codes_are_gray() {
        for code in ["ZZ", "UNK", "", "ff", "KC"] {
            assert_eq!(pitch_color(code), [0.8, 0.8, 0.8, 1.0]);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for pitch in PitchType::ALL {
            assert_eq!(PitchType::from_code(pitch.code()), Some(pitch));
        }
    }

    #[test]
    fn test_material_spec_is_glossy() {
        let spec = pitch_material_spec("CH");
        assert_eq!(spec.metallic, 0.8);
        assert_eq!(spec.roughness, 0.2);
        assert_eq!(spec.base_color, PitchType::Changeup.color());
    }
}
