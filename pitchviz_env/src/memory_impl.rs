//! In-memory implementation of SceneHost.

use crate::error::HostError;
use crate::host::SceneHost;
use crate::types::{BoxSpec, Container, CurveSpec, GroupId, MaterialId, MaterialSpec, ObjectId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Geometry carried by a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectData {
    Curve(CurveSpec),
    Box(BoxSpec),
}

/// A renderable object in a [`MemoryScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,

    /// Disambiguated object name
    pub name: String,

    pub data: ObjectData,

    /// Material slots, slot 0 first
    pub materials: Vec<MaterialId>,
}

/// A named grouping container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub id: GroupId,
    pub name: String,

    /// Linked objects in link order
    pub objects: Vec<ObjectId>,
}

/// A named visual style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMaterial {
    pub id: MaterialId,
    pub name: String,
    pub spec: MaterialSpec,
}

/// Scene graph held entirely in memory.
///
/// This is the host used by the command-line tool and the test double for
/// everything that drives a [`SceneHost`]. Handles are allocated from one
/// monotonically increasing counter, so they are never reused within a scene.
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    groups: BTreeMap<GroupId, SceneGroup>,
    materials: BTreeMap<MaterialId, SceneMaterial>,

    group_names: HashMap<String, GroupId>,
    material_names: HashMap<String, MaterialId>,
    object_names: HashSet<String>,

    /// Objects linked at the top level, in link order
    root: Vec<ObjectId>,

    next_handle: u64,
}

impl MemoryScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an object by handle.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Iterates all objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Returns a group by handle.
    pub fn group(&self, id: GroupId) -> Option<&SceneGroup> {
        self.groups.get(&id)
    }

    /// Returns a group by name.
    pub fn group_by_name(&self, name: &str) -> Option<&SceneGroup> {
        self.group_names.get(name).and_then(|id| self.groups.get(id))
    }

    /// Iterates all groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = &SceneGroup> {
        self.groups.values()
    }

    /// Returns a material by handle.
    pub fn material(&self, id: MaterialId) -> Option<&SceneMaterial> {
        self.materials.get(&id)
    }

    /// Returns a material by name.
    pub fn material_by_name(&self, name: &str) -> Option<&SceneMaterial> {
        self.material_names.get(name).and_then(|id| self.materials.get(id))
    }

    /// Iterates all materials in creation order.
    pub fn materials(&self) -> impl Iterator<Item = &SceneMaterial> {
        self.materials.values()
    }

    /// Objects linked at the top level.
    pub fn root_objects(&self) -> &[ObjectId] {
        &self.root
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    fn allocate(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    /// Picks `base`, or `base.001`, `base.002`, ... if it is taken.
    fn unique_object_name(&self, base: &str) -> String {
        if !self.object_names.contains(base) {
            return base.to_string();
        }
        (1u32..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| !self.object_names.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn insert_object(&mut self, requested_name: &str, data: ObjectData) -> ObjectId {
        let id = ObjectId(self.allocate());
        let name = self.unique_object_name(requested_name);
        self.object_names.insert(name.clone());
        self.objects.insert(
            id,
            SceneObject {
                id,
                name,
                data,
                materials: Vec::new(),
            },
        );
        self.root.push(id);
        id
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, HostError> {
        self.objects.get_mut(&id).ok_or(HostError::ObjectNotFound(id))
    }

    fn check_object(&self, id: ObjectId) -> Result<(), HostError> {
        if self.objects.contains_key(&id) {
            Ok(())
        } else {
            Err(HostError::ObjectNotFound(id))
        }
    }
}

fn validate_curve(spec: &CurveSpec) -> Result<(), HostError> {
    if spec.splines.is_empty() {
        return Err(HostError::invalid_geometry("curve has no splines"));
    }
    if !(spec.bevel_depth.is_finite() && spec.bevel_depth >= 0.0) {
        return Err(HostError::invalid_geometry(format!(
            "bevel depth {} must be finite and non-negative",
            spec.bevel_depth
        )));
    }
    for (i, spline) in spec.splines.iter().enumerate() {
        if spline.points.is_empty() {
            return Err(HostError::invalid_geometry(format!("spline {} has no points", i)));
        }
        if spline.points.iter().flatten().any(|c| !c.is_finite()) {
            return Err(HostError::invalid_geometry(format!(
                "spline {} has non-finite coordinates",
                i
            )));
        }
    }
    Ok(())
}

impl SceneHost for MemoryScene {
    fn create_curve(&mut self, spec: &CurveSpec) -> Result<ObjectId, HostError> {
        validate_curve(spec)?;
        Ok(self.insert_object(&spec.object_name, ObjectData::Curve(spec.clone())))
    }

    fn create_box(&mut self, spec: &BoxSpec) -> Result<ObjectId, HostError> {
        let non_finite = spec
            .center
            .iter()
            .chain(spec.half_extents.iter())
            .any(|c| !c.is_finite());
        if non_finite || spec.half_extents.iter().any(|&h| h < 0.0) {
            return Err(HostError::invalid_geometry(format!(
                "box '{}' has invalid extents",
                spec.name
            )));
        }
        Ok(self.insert_object(&spec.name, ObjectData::Box(spec.clone())))
    }

    fn object_name(&self, object: ObjectId) -> Result<String, HostError> {
        self.objects
            .get(&object)
            .map(|o| o.name.clone())
            .ok_or(HostError::ObjectNotFound(object))
    }

    fn find_group(&self, name: &str) -> Option<GroupId> {
        self.group_names.get(name).copied()
    }

    fn create_group(&mut self, name: &str) -> Result<GroupId, HostError> {
        if self.group_names.contains_key(name) {
            return Err(HostError::collision("group", name));
        }
        let id = GroupId(self.allocate());
        self.groups.insert(
            id,
            SceneGroup {
                id,
                name: name.to_string(),
                objects: Vec::new(),
            },
        );
        self.group_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.material_names.get(name).copied()
    }

    fn create_material(
        &mut self,
        name: &str,
        spec: &MaterialSpec,
    ) -> Result<MaterialId, HostError> {
        if self.material_names.contains_key(name) {
            return Err(HostError::collision("material", name));
        }
        let id = MaterialId(self.allocate());
        self.materials.insert(
            id,
            SceneMaterial {
                id,
                name: name.to_string(),
                spec: *spec,
            },
        );
        self.material_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn containers_of(&self, object: ObjectId) -> Result<Vec<Container>, HostError> {
        self.check_object(object)?;
        let root = self
            .root
            .contains(&object)
            .then_some(Container::Root);
        let groups = self
            .groups
            .values()
            .filter(|g| g.objects.contains(&object))
            .map(|g| Container::Group(g.id));
        Ok(root.into_iter().chain(groups).collect())
    }

    fn link_object(&mut self, object: ObjectId, container: Container) -> Result<(), HostError> {
        self.check_object(object)?;
        let members = match container {
            Container::Root => &mut self.root,
            Container::Group(id) => {
                &mut self
                    .groups
                    .get_mut(&id)
                    .ok_or(HostError::GroupNotFound(id))?
                    .objects
            }
        };
        if !members.contains(&object) {
            members.push(object);
        }
        Ok(())
    }

    fn unlink_object(
        &mut self,
        object: ObjectId,
        container: Container,
    ) -> Result<(), HostError> {
        self.check_object(object)?;
        let members = match container {
            Container::Root => &mut self.root,
            Container::Group(id) => {
                &mut self
                    .groups
                    .get_mut(&id)
                    .ok_or(HostError::GroupNotFound(id))?
                    .objects
            }
        };
        members.retain(|&o| o != object);
        Ok(())
    }

    fn material_slots(&self, object: ObjectId) -> Result<Vec<MaterialId>, HostError> {
        self.objects
            .get(&object)
            .map(|o| o.materials.clone())
            .ok_or(HostError::ObjectNotFound(object))
    }

    fn set_material_slot(
        &mut self,
        object: ObjectId,
        slot: usize,
        material: MaterialId,
    ) -> Result<(), HostError> {
        if !self.materials.contains_key(&material) {
            return Err(HostError::MaterialNotFound(material));
        }
        let obj = self.object_mut(object)?;
        let entry = obj
            .materials
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { object, slot })?;
        *entry = material;
        Ok(())
    }

    fn append_material(
        &mut self,
        object: ObjectId,
        material: MaterialId,
    ) -> Result<(), HostError> {
        if !self.materials.contains_key(&material) {
            return Err(HostError::MaterialNotFound(material));
        }
        self.object_mut(object)?.materials.push(material);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplineSpec;

    fn curve(name: &str) -> CurveSpec {
        CurveSpec {
            object_name: name.to_string(),
            data_name: "Curve".to_string(),
            splines: vec![SplineSpec::nurbs([[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], false)],
            bevel_depth: 0.01,
            resolution_u: 12,
        }
    }

    const GRAY: MaterialSpec = MaterialSpec {
        base_color: [0.8, 0.8, 0.8, 1.0],
        metallic: 0.0,
        roughness: 0.5,
    };

    #[test]
    fn test_create_curve_links_to_root() {
        let mut scene = MemoryScene::new();
        let id = scene.create_curve(&curve("Pitch")).unwrap();

        assert_eq!(scene.root_objects(), &[id]);
        assert_eq!(scene.containers_of(id).unwrap(), vec![Container::Root]);
        assert_eq!(scene.object_name(id).unwrap(), "Pitch");
    }

    #[test]
    fn test_object_names_disambiguated() {
        let mut scene = MemoryScene::new();
        let a = scene.create_curve(&curve("Pitch")).unwrap();
        let b = scene.create_curve(&curve("Pitch")).unwrap();
        let c = scene.create_curve(&curve("Pitch")).unwrap();

        assert_eq!(scene.object_name(a).unwrap(), "Pitch");
        assert_eq!(scene.object_name(b).unwrap(), "Pitch.001");
        assert_eq!(scene.object_name(c).unwrap(), "Pitch.002");
    }

    #[test]
    fn test_invalid_curve_rejected() {
        let mut scene = MemoryScene::new();

        let mut empty = curve("Pitch");
        empty.splines.clear();
        assert!(matches!(
            scene.create_curve(&empty),
            Err(HostError::InvalidGeometry(_))
        ));

        let mut nan = curve("Pitch");
        nan.splines[0].points[1][0] = f64::NAN;
        assert!(scene.create_curve(&nan).is_err());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_group_name_collision() {
        let mut scene = MemoryScene::new();
        scene.create_group("AtBat_1").unwrap();

        let err = scene.create_group("AtBat_1").unwrap_err();
        assert_eq!(err, HostError::collision("group", "AtBat_1"));
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut scene = MemoryScene::new();

        let g1 = scene.get_or_create_group("AtBat_1").unwrap();
        let g2 = scene.get_or_create_group("AtBat_1").unwrap();
        assert_eq!(g1, g2);
        assert_eq!(scene.group_count(), 1);

        let m1 = scene.get_or_create_material("Pitch_FF", &GRAY).unwrap();
        let m2 = scene.get_or_create_material("Pitch_FF", &GRAY).unwrap();
        assert_eq!(m1, m2);
        assert_eq!(scene.material_count(), 1);
    }

    #[test]
    fn test_link_and_unlink() {
        let mut scene = MemoryScene::new();
        let obj = scene.create_curve(&curve("Pitch")).unwrap();
        let group = scene.create_group("AtBat_3").unwrap();

        scene.link_object(obj, Container::Group(group)).unwrap();
        scene.link_object(obj, Container::Group(group)).unwrap();
        assert_eq!(scene.group(group).unwrap().objects, vec![obj]);

        scene.unlink_object(obj, Container::Root).unwrap();
        assert!(scene.root_objects().is_empty());
        assert_eq!(
            scene.containers_of(obj).unwrap(),
            vec![Container::Group(group)]
        );

        // Unlinking again is a no-op
        scene.unlink_object(obj, Container::Root).unwrap();
    }

    #[test]
    fn test_link_unknown_group() {
        let mut scene = MemoryScene::new();
        let obj = scene.create_curve(&curve("Pitch")).unwrap();

        let err = scene.link_object(obj, Container::Group(GroupId(99))).unwrap_err();
        assert_eq!(err, HostError::GroupNotFound(GroupId(99)));
    }

    #[test]
    fn test_material_slots() {
        let mut scene = MemoryScene::new();
        let obj = scene.create_curve(&curve("Pitch")).unwrap();
        let red = scene.create_material("Red", &GRAY).unwrap();
        let blue = scene.create_material("Blue", &GRAY).unwrap();

        assert!(matches!(
            scene.set_material_slot(obj, 0, red),
            Err(HostError::SlotOutOfRange { slot: 0, .. })
        ));

        scene.append_material(obj, red).unwrap();
        scene.set_material_slot(obj, 0, blue).unwrap();
        assert_eq!(scene.material_slots(obj).unwrap(), vec![blue]);

        assert!(matches!(
            scene.append_material(obj, MaterialId(1000)),
            Err(HostError::MaterialNotFound(_))
        ));
    }

    #[test]
    fn test_create_box() {
        let mut scene = MemoryScene::new();
        let spec = BoxSpec {
            name: "StrikeZone".to_string(),
            center: [0.0, 0.0, 0.762],
            half_extents: [0.2159, 0.001524, 0.3048],
            wireframe_thickness: 0.001,
        };
        let id = scene.create_box(&spec).unwrap();

        match &scene.object(id).unwrap().data {
            ObjectData::Box(b) => assert_eq!(b, &spec),
            other => panic!("expected box, got {:?}", other),
        }
    }
}
