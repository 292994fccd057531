//! Rerun visualization for finished scenes.
//!
//! Replays a [`MemoryScene`] into the Rerun viewer. Visualization is optional
//! and only available with the `visualization` feature.
//!
//! # What Gets Logged
//!
//! - Pitch curves as line strips, colored by their slot-0 material and as
//!   thick as the bevel radius
//! - The end-of-flight loop of each pitch as a closed strip
//! - The strike zone as a box
//! - Entity paths follow group membership: `world/<group>/<object>`

use pitchviz_env::MemoryScene;

#[cfg(feature = "visualization")]
use pitchviz_env::{Container, ObjectData, SceneHost, SceneObject};
#[cfg(feature = "visualization")]
use rerun::{components::LineStrip3D, Boxes3D, Color, LineStrips3D, Radius, RecordingStream};

/// Rerun logger for pitch scenes.
pub struct RerunLogger {
    #[cfg(feature = "visualization")]
    rec: Option<RecordingStream>,

    /// Whether visualization is enabled
    enabled: bool,
}

impl RerunLogger {
    /// Creates a new logger with visualization disabled.
    pub fn disabled() -> Self {
        Self {
            #[cfg(feature = "visualization")]
            rec: None,
            enabled: false,
        }
    }

    /// Creates a logger that spawns the Rerun viewer.
    #[cfg(feature = "visualization")]
    pub fn new(app_id: &str) -> Self {
        match rerun::RecordingStreamBuilder::new(app_id).spawn() {
            Ok(rec) => Self::from_stream(rec),
            Err(e) => {
                tracing::warn!("Failed to initialize Rerun: {:?}", e);
                Self::disabled()
            }
        }
    }

    /// Creates a logger that saves an .rrd file instead of spawning a viewer.
    #[cfg(feature = "visualization")]
    pub fn new_to_file(app_id: &str, path: &str) -> Self {
        match rerun::RecordingStreamBuilder::new(app_id).save(path) {
            Ok(rec) => Self::from_stream(rec),
            Err(e) => {
                tracing::warn!("Failed to open Rerun recording {}: {:?}", path, e);
                Self::disabled()
            }
        }
    }

    #[cfg(feature = "visualization")]
    fn from_stream(rec: RecordingStream) -> Self {
        // Pitch data is z-up, catcher looking down -y
        if let Err(e) = rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP()) {
            tracing::warn!("Failed to set Rerun view coordinates: {:?}", e);
        }
        tracing::info!("Rerun visualization enabled");
        Self {
            rec: Some(rec),
            enabled: true,
        }
    }

    /// Creates a logger - returns disabled if visualization feature not enabled.
    #[cfg(not(feature = "visualization"))]
    pub fn new(_app_id: &str) -> Self {
        tracing::info!("Rerun visualization not available (compile with --features visualization)");
        Self::disabled()
    }

    #[cfg(not(feature = "visualization"))]
    pub fn new_to_file(app_id: &str, _path: &str) -> Self {
        Self::new(app_id)
    }

    /// Returns whether visualization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logs every object in the scene. Returns the number of objects logged.
    #[cfg(feature = "visualization")]
    pub fn log_scene(&self, scene: &MemoryScene) -> usize {
        let Some(ref rec) = self.rec else {
            return 0;
        };

        let mut logged = 0;
        for object in scene.objects() {
            let path = entity_path(scene, object);
            let result = match &object.data {
                ObjectData::Curve(curve) => {
                    let strips: Vec<LineStrip3D> = curve
                        .splines
                        .iter()
                        .map(|spline| {
                            let mut points: Vec<[f32; 3]> = spline
                                .positions()
                                .map(|[x, y, z]| [x as f32, y as f32, z as f32])
                                .collect();
                            if spline.cyclic {
                                if let Some(&first) = points.first() {
                                    points.push(first);
                                }
                            }
                            points.into_iter().collect()
                        })
                        .collect();
                    rec.log(
                        path.as_str(),
                        &LineStrips3D::new(strips)
                            .with_colors([object_color(scene, object)])
                            .with_radii([Radius::new_scene_units(curve.bevel_depth as f32)]),
                    )
                }
                ObjectData::Box(zone) => {
                    let c = zone.center.map(|v| v as f32);
                    let h = zone.half_extents.map(|v| v as f32);
                    rec.log(
                        path.as_str(),
                        &Boxes3D::from_centers_and_half_sizes([c], [h])
                            .with_colors([Color::from_rgb(255, 255, 255)])
                            .with_radii([Radius::new_scene_units(zone.wireframe_thickness as f32)]),
                    )
                }
            };
            match result {
                Ok(()) => logged += 1,
                Err(e) => tracing::warn!("Failed to log {}: {:?}", path, e),
            }
        }
        logged
    }

    #[cfg(not(feature = "visualization"))]
    pub fn log_scene(&self, _scene: &MemoryScene) -> usize {
        0
    }
}

#[cfg(feature = "visualization")]
fn entity_path(scene: &MemoryScene, object: &SceneObject) -> String {
    let group = scene
        .containers_of(object.id)
        .unwrap_or_default()
        .into_iter()
        .find_map(|c| match c {
            Container::Group(id) => scene.group(id).map(|g| g.name.clone()),
            Container::Root => None,
        });
    match group {
        Some(group) => format!("world/{}/{}", group, object.name),
        None => format!("world/{}", object.name),
    }
}

#[cfg(feature = "visualization")]
fn object_color(scene: &MemoryScene, object: &SceneObject) -> Color {
    let [r, g, b, a] = object
        .materials
        .first()
        .and_then(|id| scene.material(*id))
        .map(|m| m.spec.base_color)
        .unwrap_or([1.0, 1.0, 1.0, 1.0]);
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_unmultiplied_rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger() {
        let logger = RerunLogger::disabled();
        assert!(!logger.is_enabled());

        // No-op without a recording stream
        assert_eq!(logger.log_scene(&MemoryScene::new()), 0);
    }
}
