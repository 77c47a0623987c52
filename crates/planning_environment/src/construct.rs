//! Conversion between wire shape records and in-memory shapes

use thiserror::Error;

use crate::foundation::math::{utils, Vec3};
use crate::msg::{WirePoint, WireShape};
use crate::shapes::{Mesh, Shape, ShapeType};

/// Shape conversion errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Dimension list length does not match the shape type
    #[error("unexpected number of dimensions in {shape_type} definition: expected {expected}, got {actual}")]
    DimensionCount {
        /// Shape being built
        shape_type: ShapeType,
        /// Required dimension count
        expected: usize,
        /// Dimension count received
        actual: usize,
    },

    /// Malformed mesh data
    #[error("invalid mesh: {0}")]
    MeshValidation(String),

    /// Wire type code names no known shape
    #[error("unable to construct shape corresponding to object of type {type_code}")]
    Construction {
        /// Offending type code
        type_code: i8,
    },

    /// Shape kind has no wire representation
    #[error("unable to construct object message for shape of type {0}")]
    UnsupportedShapeType(ShapeType),
}

impl ShapeError {
    /// True for every way [`construct_object`] can fail
    pub const fn is_construction_failure(&self) -> bool {
        matches!(
            self,
            Self::DimensionCount { .. } | Self::MeshValidation(_) | Self::Construction { .. }
        )
    }
}

fn expect_dimensions(obj: &WireShape, shape_type: ShapeType, expected: usize) -> Result<(), ShapeError> {
    if obj.dimensions.len() == expected {
        Ok(())
    } else {
        Err(ShapeError::DimensionCount {
            shape_type,
            expected,
            actual: obj.dimensions.len(),
        })
    }
}

fn construct_mesh(obj: &WireShape) -> Result<Mesh, ShapeError> {
    expect_dimensions(obj, ShapeType::Mesh, 0)?;

    if obj.triangles.len() % 3 != 0 {
        return Err(ShapeError::MeshValidation(format!(
            "number of triangle indices ({}) is not divisible by 3",
            obj.triangles.len()
        )));
    }
    if obj.triangles.is_empty() || obj.vertices.is_empty() {
        return Err(ShapeError::MeshValidation("mesh definition is empty".to_string()));
    }

    let vertices: Vec<Vec3> = obj.vertices.iter().map(|p| p.to_vec3()).collect();
    let triangles = obj
        .triangles
        .iter()
        .map(|&i| {
            u32::try_from(i).map_err(|_| ShapeError::MeshValidation(format!("negative triangle index {i}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Mesh::from_vertices_and_triangles(vertices, triangles)
}

// Wire indices are i32; larger vertex indices cannot be expressed
fn wire_triangle_indices(triangles: &[u32]) -> Result<Vec<i32>, ShapeError> {
    triangles
        .iter()
        .map(|&i| {
            i32::try_from(i)
                .map_err(|_| ShapeError::MeshValidation(format!("triangle index {i} does not fit a wire index")))
        })
        .collect()
}

/// Build a shape from its wire description
///
/// Spheres need exactly one dimension (radius), boxes three (x, y, z),
/// cylinders two (radius, length) and meshes none. Meshes also need a
/// non-empty vertex list and a non-empty triangle index list whose length
/// is a multiple of three, with every index naming an existing vertex.
pub fn construct_object(obj: &WireShape) -> Result<Shape, ShapeError> {
    let result = match obj.shape_type {
        WireShape::SPHERE => {
            expect_dimensions(obj, ShapeType::Sphere, 1).map(|()| Shape::sphere(obj.dimensions[0]))
        }
        WireShape::BOX => expect_dimensions(obj, ShapeType::Box, 3)
            .map(|()| Shape::cuboid(obj.dimensions[0], obj.dimensions[1], obj.dimensions[2])),
        WireShape::CYLINDER => expect_dimensions(obj, ShapeType::Cylinder, 2)
            .map(|()| Shape::cylinder(obj.dimensions[0], obj.dimensions[1])),
        WireShape::MESH => construct_mesh(obj).map(Shape::Mesh),
        type_code => Err(ShapeError::Construction { type_code }),
    };

    if let Err(e) = &result {
        log::debug!("Rejected wire shape of type {}: {}", obj.shape_type, e);
    }
    result
}

/// Build the wire description of `shape`, inflated by `padding`
///
/// See [`fill_object_msg`] for how padding applies to each kind.
pub fn construct_object_msg(shape: &Shape, padding: f64) -> Result<WireShape, ShapeError> {
    let mut obj = WireShape::default();
    fill_object_msg(shape, &mut obj, padding)?;
    Ok(obj)
}

/// Write the wire description of `shape` into `obj`, inflated by `padding`
///
/// `obj` is cleared first. Spheres grow their radius by `padding`; boxes
/// grow every side by twice `padding`; cylinders grow the radius by
/// `padding` and the length by twice `padding`.
///
/// Meshes are inflated axis by axis: each vertex's offset from the vertex
/// centroid moves `padding` further from the centroid along every axis
/// where the offset is non-zero. This approximates a dilation; it is not an
/// offset surface.
///
/// Planes have no wire form; `obj` is left cleared and an error returned.
pub fn fill_object_msg(shape: &Shape, obj: &mut WireShape, padding: f64) -> Result<(), ShapeError> {
    obj.clear();

    match shape {
        Shape::Sphere { radius } => {
            obj.shape_type = WireShape::SPHERE;
            obj.dimensions.push(radius + padding);
        }
        Shape::Box { size } => {
            obj.shape_type = WireShape::BOX;
            obj.dimensions.extend(size.iter().map(|s| s + padding * 2.0));
        }
        Shape::Cylinder { radius, length } => {
            obj.shape_type = WireShape::CYLINDER;
            obj.dimensions.push(radius + padding);
            obj.dimensions.push(length + padding * 2.0);
        }
        Shape::Mesh(mesh) => {
            obj.shape_type = WireShape::MESH;

            let center = utils::centroid(mesh.vertices());
            obj.vertices.extend(mesh.vertices().iter().map(|v| {
                let offset = v - center;
                let inflated = offset.map(|c| utils::inflate_away_from_zero(c, padding));
                WirePoint::from(center + inflated)
            }));

            match wire_triangle_indices(mesh.triangles()) {
                Ok(triangles) => obj.triangles = triangles,
                Err(err) => {
                    obj.clear();
                    return Err(err);
                }
            }
        }
        Shape::Plane { .. } => {
            let err = ShapeError::UnsupportedShapeType(shape.shape_type());
            log::debug!("{err}");
            return Err(err);
        }
    }

    Ok(())
}
