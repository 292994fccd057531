//! JSON exporter for finished scenes.
//!
//! Dumps a [`MemoryScene`] (objects, containers, materials) together with the
//! batch summary, for inspection or for loading into another tool.

use pitchviz_core::{BatchReport, SkippedRecord};
use pitchviz_env::{Container, MemoryScene, ObjectData, SceneHost};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One scene object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedObject {
    pub name: String,

    /// Curve or box geometry, in meters
    pub data: ObjectData,

    /// Material names, slot 0 first
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub materials: Vec<String>,

    /// Container names (`"root"` for the top level)
    pub containers: Vec<String>,
}

/// One grouping container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedGroup {
    pub name: String,
    pub objects: Vec<String>,
}

/// One material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedMaterial {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

/// Batch counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub visualized: usize,
    pub skipped: usize,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_records: Vec<SkippedRecord>,
}

impl From<&BatchReport> for BatchSummary {
    fn from(report: &BatchReport) -> Self {
        Self {
            visualized: report.visualized_count(),
            skipped: report.skipped_count(),
            skipped_records: report.skipped.clone(),
        }
    }
}

/// Complete scene export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneExport {
    /// Input file the scene was built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub objects: Vec<ExportedObject>,
    pub groups: Vec<ExportedGroup>,
    pub materials: Vec<ExportedMaterial>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BatchSummary>,
}

impl SceneExport {
    /// Snapshots a scene.
    pub fn from_scene(scene: &MemoryScene) -> Self {
        let objects = scene
            .objects()
            .map(|object| {
                let containers = scene
                    .containers_of(object.id)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|c| container_name(scene, c))
                    .collect();
                let materials = object
                    .materials
                    .iter()
                    .filter_map(|id| scene.material(*id).map(|m| m.name.clone()))
                    .collect();
                ExportedObject {
                    name: object.name.clone(),
                    data: object.data.clone(),
                    materials,
                    containers,
                }
            })
            .collect();

        let groups = scene
            .groups()
            .map(|group| ExportedGroup {
                name: group.name.clone(),
                objects: group
                    .objects
                    .iter()
                    .filter_map(|id| scene.object(*id).map(|o| o.name.clone()))
                    .collect(),
            })
            .collect();

        let materials = scene
            .materials()
            .map(|m| ExportedMaterial {
                name: m.name.clone(),
                base_color: m.spec.base_color,
                metallic: m.spec.metallic,
                roughness: m.spec.roughness,
            })
            .collect();

        Self {
            source: None,
            objects,
            groups,
            materials,
            summary: None,
        }
    }

    /// Records the input file name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches the batch summary.
    pub fn with_report(mut self, report: &BatchReport) -> Self {
        self.summary = Some(report.into());
        self
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn container_name(scene: &MemoryScene, container: Container) -> Option<String> {
    match container {
        Container::Root => Some("root".to_string()),
        Container::Group(id) => scene.group(id).map(|g| g.name.clone()),
    }
}
