//! Spatial description types returned by `get_geometries`.

use serde::{Deserialize, Serialize};

/// 3D vector, units meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geometry of a component relative to its mounting frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// Human-readable label
    pub label: String,

    /// Center point of the geometry
    pub center: Vector3,
}
