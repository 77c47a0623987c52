//! Wire-format records
//!
//! Flat, serializable descriptions of shapes and transforms as they travel
//! between planning components. These carry no behavior beyond small
//! conversion helpers; validation happens in [`crate::construct_object`].

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Isometry3, Point3, Quat, Quaternion, Translation3, Vec3};

/// A point on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WirePoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl WirePoint {
    /// Creates a new wire point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts to a `nalgebra` vector
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for WirePoint {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for WirePoint {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// A free vector on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WireVector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl WireVector3 {
    /// Creates a new wire vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An orientation quaternion on the wire (`x, y, z, w` order)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireQuaternion {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// Scalar component
    pub w: f64,
}

impl Default for WireQuaternion {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }
    }
}

impl WireQuaternion {
    /// Normalized rotation; a zero-norm quaternion maps to identity
    pub fn to_rotation(self) -> Quat {
        let q = Quaternion::new(self.w, self.x, self.y, self.z);
        Quat::try_new(q, f64::EPSILON).unwrap_or_else(Quat::identity)
    }
}

impl From<Quat> for WireQuaternion {
    fn from(q: Quat) -> Self {
        Self { x: q.i, y: q.j, z: q.k, w: q.w }
    }
}

/// A rigid pose on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WirePose {
    /// Translation
    pub position: WirePoint,
    /// Rotation
    pub orientation: WireQuaternion,
}

impl WirePose {
    /// Pose with identity rotation at `position`
    pub const fn from_position(position: WirePoint) -> Self {
        Self {
            position,
            orientation: WireQuaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 },
        }
    }

    /// Converts to a rigid transform
    pub fn to_isometry(&self) -> Isometry3 {
        Isometry3::from_parts(
            Translation3::new(self.position.x, self.position.y, self.position.z),
            self.orientation.to_rotation(),
        )
    }

    /// Converts from a rigid transform
    pub fn from_isometry(iso: &Isometry3) -> Self {
        Self {
            position: iso.translation.vector.into(),
            orientation: iso.rotation.into(),
        }
    }
}

/// Flat shape description
///
/// `dimensions` depends on `shape_type`: `[radius]` for spheres,
/// `[x, y, z]` for boxes, `[radius, length]` for cylinders and empty for
/// meshes. Meshes carry their geometry in `vertices` and `triangles`, the
/// latter flattened in groups of three vertex indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireShape {
    /// Type code, one of the associated constants
    pub shape_type: i8,
    /// Type-specific dimensions
    #[serde(default)]
    pub dimensions: Vec<f64>,
    /// Flattened triangle vertex indices (mesh only)
    #[serde(default)]
    pub triangles: Vec<i32>,
    /// Mesh vertices (mesh only)
    #[serde(default)]
    pub vertices: Vec<WirePoint>,
}

impl WireShape {
    /// Sphere type code
    pub const SPHERE: i8 = 0;
    /// Box type code
    pub const BOX: i8 = 1;
    /// Cylinder type code
    pub const CYLINDER: i8 = 2;
    /// Mesh type code
    pub const MESH: i8 = 3;

    /// Creates a primitive shape record
    pub fn new(shape_type: i8, dimensions: Vec<f64>) -> Self {
        Self {
            shape_type,
            dimensions,
            triangles: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Creates a mesh record
    pub fn mesh(vertices: Vec<WirePoint>, triangles: Vec<i32>) -> Self {
        Self {
            shape_type: Self::MESH,
            dimensions: Vec::new(),
            triangles,
            vertices,
        }
    }

    /// Empties dimensions, vertices and triangles, keeping the type code
    pub fn clear(&mut self) {
        self.dimensions.clear();
        self.vertices.clear();
        self.triangles.clear();
    }
}
