//! Error types for the scene host abstraction.

use crate::types::{GroupId, MaterialId, ObjectId};
use thiserror::Error;

/// Errors raised by a scene host.
///
/// The core never tries to recover from these; they bubble up to whoever
/// drove the batch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    /// No object with this handle exists in the scene
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// No group with this handle exists in the scene
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    /// No material with this handle exists in the scene
    #[error("Material not found: {0}")]
    MaterialNotFound(MaterialId),

    /// A named datablock already exists and the host cannot rename it
    #[error("Name collision: {kind} '{name}' already exists")]
    NameCollision { kind: &'static str, name: String },

    /// Material slot index past the end of the object's slot list
    #[error("Material slot {slot} out of range for object {object}")]
    SlotOutOfRange { object: ObjectId, slot: usize },

    /// Geometry the host refuses to build (e.g. a spline with no points)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Backend-specific failure
    #[error("Host error: {0}")]
    Backend(String),
}

impl HostError {
    /// Creates a name collision error.
    pub fn collision(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NameCollision {
            kind,
            name: name.into(),
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }
}
