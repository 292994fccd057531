//! Core scene host trait.

use crate::error::HostError;
use crate::types::{BoxSpec, Container, CurveSpec, GroupId, MaterialId, MaterialSpec, ObjectId};

/// The capability interface a 3D application exposes to pitchviz.
///
/// The core never touches a global scene registry; everything it creates goes
/// through one of these calls. Execution is single-threaded, so methods take
/// `&mut self` and no locking is involved.
///
/// # Implementations
///
/// - **In-memory**: [`MemoryScene`](crate::MemoryScene) - plain maps, used by
///   the CLI and as the test double
/// - **Embedded**: an adapter over a real 3D application's object model
///
/// # Naming
///
/// Groups and materials are unique by name. `create_group` and
/// `create_material` must fail with [`HostError::NameCollision`] rather than
/// silently renaming; callers go through the `get_or_create_*` helpers, which
/// never trigger a collision. Object names are *not* unique: the host may
/// disambiguate them (`Pitch`, `Pitch.001`, ...).
pub trait SceneHost {
    /// Creates a curve object and links it into [`Container::Root`].
    fn create_curve(&mut self, spec: &CurveSpec) -> Result<ObjectId, HostError>;

    /// Creates a wireframe box object and links it into [`Container::Root`].
    fn create_box(&mut self, spec: &BoxSpec) -> Result<ObjectId, HostError>;

    /// Returns the final (possibly disambiguated) name of an object.
    fn object_name(&self, object: ObjectId) -> Result<String, HostError>;

    /// Looks up a group by name.
    fn find_group(&self, name: &str) -> Option<GroupId>;

    /// Creates a new group as a child of the scene root.
    fn create_group(&mut self, name: &str) -> Result<GroupId, HostError>;

    /// Looks up a material by name.
    fn find_material(&self, name: &str) -> Option<MaterialId>;

    /// Creates a new material with the given style.
    fn create_material(&mut self, name: &str, spec: &MaterialSpec)
        -> Result<MaterialId, HostError>;

    /// Lists every container the object is currently linked into.
    fn containers_of(&self, object: ObjectId) -> Result<Vec<Container>, HostError>;

    /// Links an object into a container. Linking twice is a no-op.
    fn link_object(&mut self, object: ObjectId, container: Container) -> Result<(), HostError>;

    /// Unlinks an object from a container. Unlinking an absent link is a no-op.
    fn unlink_object(&mut self, object: ObjectId, container: Container)
        -> Result<(), HostError>;

    /// Returns the object's material slots in order.
    fn material_slots(&self, object: ObjectId) -> Result<Vec<MaterialId>, HostError>;

    /// Replaces the material in an existing slot.
    fn set_material_slot(
        &mut self,
        object: ObjectId,
        slot: usize,
        material: MaterialId,
    ) -> Result<(), HostError>;

    /// Appends a new material slot.
    fn append_material(&mut self, object: ObjectId, material: MaterialId)
        -> Result<(), HostError>;

    /// Returns the group with this name, creating it on first use.
    fn get_or_create_group(&mut self, name: &str) -> Result<GroupId, HostError> {
        match self.find_group(name) {
            Some(id) => Ok(id),
            None => self.create_group(name),
        }
    }

    /// Returns the material with this name, creating it with `spec` on first
    /// use. An existing material keeps its original style.
    fn get_or_create_material(
        &mut self,
        name: &str,
        spec: &MaterialSpec,
    ) -> Result<MaterialId, HostError> {
        match self.find_material(name) {
            Some(id) => Ok(id),
            None => self.create_material(name, spec),
        }
    }
}
