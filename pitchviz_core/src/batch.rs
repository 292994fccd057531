//! Batch visualization - the entry point that ties sampler and builder together.
//!
//! A batch is a plain sequential loop over the records. For each record:
//!
//! ```text
//! PitchRecord ──sample()──► Trajectory ──build_pitch_geometry()──► PitchCurveGeometry
//!                                                                        │
//!                            SceneHost ◄── create / group / material ────┘
//! ```
//!
//! Sampling happens before any host call, so a record that fails to parse
//! or whose kinematics overflow leaves the scene untouched. Such records are skipped and counted; host
//! failures abort the batch and propagate as-is.

use crate::error::VizError;
use crate::record::PitchRecord;
use crate::scene_builder::{assign_group, assign_material, build_pitch_geometry, create_pitch_curve};
use crate::trajectory::{sample, DEFAULT_NUM_POINTS};
use pitchviz_env::{ObjectId, SceneHost};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Options for a visualization batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizeOptions {
    /// Move each pitch into an `AtBat_<n>` container
    pub group_by_at_bat: bool,

    /// Give each pitch a `Pitch_<code>` material
    pub assign_materials: bool,

    /// Trajectory samples per pitch (at least 2)
    pub num_points: usize,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            group_by_at_bat: false,
            assign_materials: false,
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

impl VisualizeOptions {
    /// Enables or disables at-bat grouping.
    pub fn with_grouping(mut self, enabled: bool) -> Self {
        self.group_by_at_bat = enabled;
        self
    }

    /// Enables or disables pitch materials.
    pub fn with_materials(mut self, enabled: bool) -> Self {
        self.assign_materials = enabled;
        self
    }

    /// Sets the number of trajectory samples.
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }
}

/// One pitch that made it into the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizedPitch {
    /// Row index in the input batch
    pub index: usize,

    pub object: ObjectId,

    /// Name the host gave the object
    pub object_name: String,

    /// Container name, if grouping was enabled
    pub group: Option<String>,

    /// Material name, if materials were enabled
    pub material: Option<String>,

    /// Flight time (s)
    pub flight_time: f64,
}

/// One record that was left out of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Row index in the input batch
    pub index: usize,

    pub reason: String,
}

/// Outcome of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub visualized: Vec<VisualizedPitch>,
    pub skipped: Vec<SkippedRecord>,
}

impl BatchReport {
    pub fn visualized_count(&self) -> usize {
        self.visualized.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Total records seen.
    pub fn total(&self) -> usize {
        self.visualized.len() + self.skipped.len()
    }
}

/// Samples, builds, and places one pitch.
pub fn visualize_pitch<H: SceneHost>(
    host: &mut H,
    index: usize,
    record: &PitchRecord,
    options: &VisualizeOptions,
) -> Result<VisualizedPitch, VizError> {
    let trajectory = sample(record, options.num_points)?;
    let geometry = build_pitch_geometry(record, &trajectory.points, trajectory.flight_time)?;

    let object = create_pitch_curve(host, &geometry)?;
    let group = assign_group(host, object, record, options.group_by_at_bat)?;
    let material = assign_material(host, object, record, options.assign_materials)?;
    let object_name = host.object_name(object)?;

    debug!(
        "Pitch {} -> {} (T={:.3}s, group={:?}, material={:?})",
        index, object_name, trajectory.flight_time, group, material
    );

    Ok(VisualizedPitch {
        index,
        object,
        object_name,
        group,
        material,
        flight_time: trajectory.flight_time,
    })
}

/// Visualizes every record in order.
///
/// Returns [`VizError::NoData`] for an empty batch and
/// [`VizError::InvalidSampleCount`] for bad options, before touching the host.
pub fn visualize_batch<H: SceneHost>(
    host: &mut H,
    records: &[PitchRecord],
    options: &VisualizeOptions,
) -> Result<BatchReport, VizError> {
    if records.is_empty() {
        return Err(VizError::NoData);
    }
    if options.num_points < 2 {
        return Err(VizError::InvalidSampleCount(options.num_points));
    }

    let mut report = BatchReport::default();
    for (index, record) in records.iter().enumerate() {
        match visualize_pitch(host, index, record, options) {
            Ok(pitch) => report.visualized.push(pitch),
            Err(e) if e.is_record_local() => {
                warn!("Skipping record {}: {}", index, e);
                report.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Visualized {} pitches ({} skipped)",
        report.visualized_count(),
        report.skipped_count()
    );
    Ok(report)
}
