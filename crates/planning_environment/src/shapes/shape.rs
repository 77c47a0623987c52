//! In-memory geometric shapes

use std::fmt;

use super::mesh::Mesh;

/// Shape kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Sphere
    Sphere,
    /// Box
    Box,
    /// Cylinder
    Cylinder,
    /// Triangle mesh
    Mesh,
    /// Infinite plane
    Plane,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Mesh => "mesh",
            Self::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// Geometric shape, centered at its own origin
///
/// Boxes are axis-aligned in the shape frame; cylinders run along Z.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Sphere of the given radius
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Box with full side lengths along X, Y and Z
    Box {
        /// Side lengths
        size: [f64; 3],
    },
    /// Cylinder along Z
    Cylinder {
        /// Radius
        radius: f64,
        /// Full length along Z
        length: f64,
    },
    /// Triangle mesh
    Mesh(Mesh),
    /// Plane `a*x + b*y + c*z + d = 0`
    Plane {
        /// X coefficient
        a: f64,
        /// Y coefficient
        b: f64,
        /// Z coefficient
        c: f64,
        /// Offset
        d: f64,
    },
}

impl Shape {
    /// Creates a sphere
    pub const fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Creates a box from its side lengths
    pub const fn cuboid(x: f64, y: f64, z: f64) -> Self {
        Self::Box { size: [x, y, z] }
    }

    /// Creates a cylinder
    pub const fn cylinder(radius: f64, length: f64) -> Self {
        Self::Cylinder { radius, length }
    }

    /// Creates a plane
    pub const fn plane(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Plane { a, b, c, d }
    }

    /// The kind of this shape
    pub const fn shape_type(&self) -> ShapeType {
        match self {
            Self::Sphere { .. } => ShapeType::Sphere,
            Self::Box { .. } => ShapeType::Box,
            Self::Cylinder { .. } => ShapeType::Cylinder,
            Self::Mesh(_) => ShapeType::Mesh,
            Self::Plane { .. } => ShapeType::Plane,
        }
    }

    /// Borrow the mesh, if this is one
    pub const fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

impl From<Mesh> for Shape {
    fn from(mesh: Mesh) -> Self {
        Self::Mesh(mesh)
    }
}
