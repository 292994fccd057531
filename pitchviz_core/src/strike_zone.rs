//! Strike zone builder.
//!
//! The zone uses fixed, batter-independent dimensions: 17 in wide (plate
//! width), 2 ft tall, centered 2.5 ft above the plate. Real zones run roughly
//! 1.5 to 3.5 ft depending on the batter.

use crate::units::{feet_to_meters, inches_to_meters};
use nalgebra::Vector3;
use pitchviz_env::{BoxSpec, ObjectId, SceneHost};
use serde::{Deserialize, Serialize};

/// Object name given to the strike zone box.
pub const STRIKE_ZONE_NAME: &str = "StrikeZone";

/// Plate width in inches.
pub const ZONE_WIDTH_IN: f64 = 17.0;

/// Zone height in feet.
pub const ZONE_HEIGHT_FT: f64 = 2.0;

/// Zone depth in feet (a thin slab at the plate).
pub const ZONE_THICKNESS_FT: f64 = 0.01;

/// Height of the zone center above the plate, in feet.
pub const ZONE_CENTER_HEIGHT_FT: f64 = 2.5;

/// Wireframe edge thickness in meters.
pub const ZONE_WIREFRAME_THICKNESS: f64 = 0.001;

/// Geometry of the strike zone, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeZone {
    pub center: Vector3<f64>,

    /// (width/2, thickness/2, height/2)
    pub half_extents: Vector3<f64>,

    pub wireframe_thickness: f64,
}

impl StrikeZone {
    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extents.z * 2.0
    }

    /// Bottom and top edges of the zone (z, meters).
    pub fn vertical_bounds(&self) -> (f64, f64) {
        (
            self.center.z - self.half_extents.z,
            self.center.z + self.half_extents.z,
        )
    }

    /// Host description of the zone as a wireframe box.
    pub fn to_box_spec(&self) -> BoxSpec {
        BoxSpec {
            name: STRIKE_ZONE_NAME.to_string(),
            center: self.center.into(),
            half_extents: self.half_extents.into(),
            wireframe_thickness: self.wireframe_thickness,
        }
    }
}

/// Computes the strike zone descriptor. Always succeeds.
pub fn build_strike_zone() -> StrikeZone {
    let width = inches_to_meters(ZONE_WIDTH_IN);
    let height = feet_to_meters(ZONE_HEIGHT_FT);
    let thickness = feet_to_meters(ZONE_THICKNESS_FT);

    StrikeZone {
        center: Vector3::new(0.0, 0.0, feet_to_meters(ZONE_CENTER_HEIGHT_FT)),
        half_extents: Vector3::new(width / 2.0, thickness / 2.0, height / 2.0),
        wireframe_thickness: ZONE_WIREFRAME_THICKNESS,
    }
}

/// Builds the strike zone and asks the host to create it.
pub fn add_strike_zone<H: SceneHost>(host: &mut H) -> Result<ObjectId, pitchviz_env::HostError> {
    let zone = build_strike_zone();
    let id = host.create_box(&zone.to_box_spec())?;
    tracing::debug!("Strike zone created as {}", id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pitchviz_env::{MemoryScene, ObjectData};

    #[test]
    fn test_zone_dimensions() {
        let zone = build_strike_zone();

        assert_relative_eq!(zone.width(), 17.0 / 12.0 * 0.3048, epsilon = 1e-12);
        assert_relative_eq!(zone.height(), 0.6096, epsilon = 1e-12);
        assert_relative_eq!(zone.half_extents.y, 0.001524, epsilon = 1e-12);
        assert_eq!(zone.center.x, 0.0);
        assert_eq!(zone.center.y, 0.0);
        assert_relative_eq!(zone.center.z, 0.762, epsilon = 1e-12);
        assert_eq!(zone.wireframe_thickness, 0.001);
    }

    #[test]
    fn test_vertical_bounds() {
        let (bottom, top) = build_strike_zone().vertical_bounds();
        assert_relative_eq!(bottom, feet_to_meters(1.5), epsilon = 1e-12);
        assert_relative_eq!(top, feet_to_meters(3.5), epsilon = 1e-12);
    }

    #[test]
    fn test_add_strike_zone_to_scene() {
        let mut scene = MemoryScene::new();
        let id = add_strike_zone(&mut scene).unwrap();

        let object = scene.object(id).unwrap();
        assert_eq!(object.name, "StrikeZone");
        assert!(matches!(object.data, ObjectData::Box(_)));
        assert_eq!(scene.root_objects(), &[id]);
    }
}
