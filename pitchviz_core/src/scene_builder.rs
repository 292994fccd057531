//! Scene builder - turns sampled trajectories into host geometry.
//!
//! Each pitch becomes a single curve object with two splines:
//! - the open flight path through every trajectory sample
//! - a closed 8-point loop of baseball radius around the last sample
//!
//! The loop stands in for the ball at the plate. It is a circle in the x/z
//! plane (fixed y), not a sphere; with the bevel applied it reads as a small
//! ring facing the catcher.

use crate::error::VizError;
use crate::palette::pitch_material_spec;
use crate::record::PitchRecord;
use crate::units::baseball_radius;
use nalgebra::Vector3;
use pitchviz_env::{Container, CurveSpec, HostError, MaterialId, ObjectId, SceneHost, SplineSpec};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Object name requested for every pitch curve.
pub const PITCH_OBJECT_NAME: &str = "Pitch";

/// Curve data name for every pitch curve.
pub const PITCH_CURVE_DATA_NAME: &str = "PitchTrajectory";

/// Smoothing subdivisions per curve segment.
pub const CURVE_RESOLUTION: u32 = 12;

/// Number of points on the end-of-flight marker loop.
pub const END_MARKER_POINTS: usize = 8;

/// Renderable geometry for one pitch, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchCurveGeometry {
    /// Flight path, release first
    pub path: Vec<Vector3<f64>>,

    /// Closed loop around the last path point
    pub end_marker: Vec<Vector3<f64>>,

    /// Pipe radius of both splines
    pub bevel_radius: f64,

    pub resolution: u32,

    /// Flight time of the sampled path (s)
    pub flight_time: f64,

    /// Pitch code the geometry was built for
    pub pitch_type: String,

    /// At-bat key the geometry was built for
    pub at_bat: String,
}

impl PitchCurveGeometry {
    /// Where the ball ends up.
    pub fn end_point(&self) -> Option<Vector3<f64>> {
        self.path.last().copied()
    }

    /// Host description of this geometry as one curve object.
    pub fn to_curve_spec(&self) -> CurveSpec {
        CurveSpec {
            object_name: PITCH_OBJECT_NAME.to_string(),
            data_name: PITCH_CURVE_DATA_NAME.to_string(),
            splines: vec![
                SplineSpec::nurbs(self.path.iter().map(|p| [p.x, p.y, p.z]), false),
                SplineSpec::nurbs(self.end_marker.iter().map(|p| [p.x, p.y, p.z]), true),
            ],
            bevel_depth: self.bevel_radius,
            resolution_u: CURVE_RESOLUTION,
        }
    }
}

/// Eight points at 45° steps on a circle in the x/z plane through `center`.
pub fn end_marker_loop(center: &Vector3<f64>, radius: f64) -> Vec<Vector3<f64>> {
    (0..END_MARKER_POINTS)
        .map(|i| {
            let angle = i as f64 * FRAC_PI_4;
            Vector3::new(
                center.x + radius * angle.cos(),
                center.y,
                center.z + radius * angle.sin(),
            )
        })
        .collect()
}

/// Builds the curve geometry for one sampled pitch.
///
/// `points` must hold at least two samples.
pub fn build_pitch_geometry(
    record: &PitchRecord,
    points: &[Vector3<f64>],
    flight_time: f64,
) -> Result<PitchCurveGeometry, VizError> {
    let Some(end) = points.last().filter(|_| points.len() >= 2) else {
        return Err(VizError::InvalidSampleCount(points.len()));
    };
    let radius = baseball_radius();

    Ok(PitchCurveGeometry {
        path: points.to_vec(),
        end_marker: end_marker_loop(end, radius),
        bevel_radius: radius,
        resolution: CURVE_RESOLUTION,
        flight_time,
        pitch_type: record.pitch_type_key().to_string(),
        at_bat: record.at_bat_key().to_string(),
    })
}

/// Creates the curve object for `geometry` in the host's default placement.
pub fn create_pitch_curve<H: SceneHost>(
    host: &mut H,
    geometry: &PitchCurveGeometry,
) -> Result<ObjectId, HostError> {
    host.create_curve(&geometry.to_curve_spec())
}

/// Container name for an at-bat.
pub fn at_bat_group_name(at_bat: &str) -> String {
    format!("AtBat_{}", at_bat)
}

/// Material name for a pitch code.
pub fn pitch_material_name(pitch_type: &str) -> String {
    format!("Pitch_{}", pitch_type)
}

/// Returns the material for a pitch code, creating it on first use.
pub fn get_or_create_material<H: SceneHost>(
    host: &mut H,
    pitch_type: &str,
) -> Result<MaterialId, HostError> {
    host.get_or_create_material(
        &pitch_material_name(pitch_type),
        &pitch_material_spec(pitch_type),
    )
}

/// Moves `object` into the container for the record's at-bat.
///
/// After this call the object is linked into exactly one container. Returns
/// the container name, or `None` if grouping is disabled.
pub fn assign_group<H: SceneHost>(
    host: &mut H,
    object: ObjectId,
    record: &PitchRecord,
    grouping_enabled: bool,
) -> Result<Option<String>, HostError> {
    if !grouping_enabled {
        return Ok(None);
    }

    let name = at_bat_group_name(record.at_bat_key());
    let group = Container::Group(host.get_or_create_group(&name)?);

    host.link_object(object, group)?;
    for container in host.containers_of(object)? {
        if container != group {
            host.unlink_object(object, container)?;
        }
    }
    Ok(Some(name))
}

/// Sets the record's pitch material as slot 0 of `object`.
///
/// Replaces an existing slot 0 instead of appending. Returns the material
/// name, or `None` if materials are disabled.
pub fn assign_material<H: SceneHost>(
    host: &mut H,
    object: ObjectId,
    record: &PitchRecord,
    materials_enabled: bool,
) -> Result<Option<String>, HostError> {
    if !materials_enabled {
        return Ok(None);
    }

    let pitch_type = record.pitch_type_key();
    let material = get_or_create_material(host, pitch_type)?;

    if host.material_slots(object)?.is_empty() {
        host.append_material(object, material)?;
    } else {
        host.set_material_slot(object, 0, material)?;
    }
    Ok(Some(pitch_material_name(pitch_type)))
}
