//! Value types that cross the scene host boundary.

use serde::{Deserialize, Serialize};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

handle!(
    /// Handle to a renderable object owned by the host.
    ObjectId,
    "object"
);
handle!(
    /// Handle to a named grouping container (a "collection").
    GroupId,
    "group"
);
handle!(
    /// Handle to a named visual style.
    MaterialId,
    "material"
);

/// Where an object is linked in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The scene's default top-level placement
    Root,
    /// A named grouping container
    Group(GroupId),
}

/// One NURBS sub-curve of a curve object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineSpec {
    /// Control points as homogeneous (x, y, z, w), in meters
    pub points: Vec<[f64; 4]>,

    /// Closes the spline back onto its first point
    pub cyclic: bool,
}

impl SplineSpec {
    /// Creates a NURBS spline with unit weights.
    pub fn nurbs(points: impl IntoIterator<Item = [f64; 3]>, cyclic: bool) -> Self {
        Self {
            points: points.into_iter().map(|[x, y, z]| [x, y, z, 1.0]).collect(),
            cyclic,
        }
    }

    /// Returns the control points without their weights.
    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.points.iter().map(|p| [p[0], p[1], p[2]])
    }
}

/// A 3D curve object with a round bevel ("pipe") cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    /// Requested object name (the host may disambiguate it)
    pub object_name: String,

    /// Name of the underlying curve data
    pub data_name: String,

    /// Sub-curves, rendered as one unit
    pub splines: Vec<SplineSpec>,

    /// Cross-section radius in meters
    pub bevel_depth: f64,

    /// Smoothing subdivisions per segment
    pub resolution_u: u32,
}

/// A principled surface style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Base color, RGBA in [0, 1]
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

/// An axis-aligned box drawn as a wireframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Requested object name
    pub name: String,

    /// Box center in meters
    pub center: [f64; 3],

    /// Half extents along x, y, z in meters
    pub half_extents: [f64; 3],

    /// Thickness of the wireframe edges in meters
    pub wireframe_thickness: f64,
}
