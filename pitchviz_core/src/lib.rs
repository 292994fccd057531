//! pitchviz Core - Pitch Trajectories as 3D Geometry
//!
//! Converts pitch-tracking rows (release position, velocity, and acceleration)
//! into curve geometry inside a 3D scene:
//! 1. **Sampler**: constant-acceleration flight path, evenly sampled over the
//!    estimated flight time, converted from feet to meters
//! 2. **Scene builder**: one curve per pitch with a ball marker at the plate,
//!    optional at-bat grouping and pitch-type materials
//! 3. **Strike zone**: a fixed-size wireframe box at the plate
//!
//! All scene mutations go through [`pitchviz_env::SceneHost`].

pub mod batch;
pub mod error;
pub mod import;
pub mod palette;
pub mod record;
pub mod scene_builder;
pub mod strike_zone;
pub mod trajectory;
pub mod units;

// Re-export key types for convenience
pub use batch::{visualize_batch, BatchReport, SkippedRecord, VisualizeOptions, VisualizedPitch};
pub use error::VizError;
pub use import::{import_csv, records_from_reader};
pub use palette::PitchType;
pub use record::{PitchRecord, ReleaseState};
pub use scene_builder::{
    assign_group, assign_material, build_pitch_geometry, get_or_create_material,
    PitchCurveGeometry,
};
pub use strike_zone::{add_strike_zone, build_strike_zone, StrikeZone};
pub use trajectory::{sample, Trajectory};
pub use units::feet_to_meters;
