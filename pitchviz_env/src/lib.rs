//! pitchviz Scene Host Abstraction Layer
//!
//! This crate is the boundary between the pitch trajectory core and whatever
//! 3D application ends up owning the geometry. The core only ever talks to a
//! [`SceneHost`]:
//! - Curves and wireframe boxes (`create_curve()`, `create_box()`)
//! - Named groups and materials (`get_or_create_group()`, `get_or_create_material()`)
//! - Links and material slots (`link_object()`, `set_material_slot()`, ...)
//!
//! [`MemoryScene`] implements the trait over plain maps. The command-line tool
//! uses it as its scene, and every test in the workspace uses it as the host.
//!
//! # Example
//!
//! ```ignore
//! use pitchviz_env::{MemoryScene, SceneHost};
//!
//! let mut scene = MemoryScene::new();
//! let group = scene.get_or_create_group("AtBat_7")?;
//! assert_eq!(scene.get_or_create_group("AtBat_7")?, group);
//! ```

mod error;
mod host;
mod memory_impl;
mod types;

pub use error::HostError;
pub use host::SceneHost;
pub use memory_impl::{MemoryScene, ObjectData, SceneGroup, SceneMaterial, SceneObject};
pub use types::{
    BoxSpec, Container, CurveSpec, GroupId, MaterialId, MaterialSpec, ObjectId, SplineSpec,
};
