//! Solid bodies placed in the world
//!
//! A [`Body`] is a shape's geometry positioned by a rigid pose, optionally
//! scaled and padded. Bodies answer two questions: what sphere encloses
//! them, and does a point lie inside them.

use crate::construct::ShapeError;
use crate::foundation::math::{Isometry3, Point3, Vec3};
use crate::shapes::{Mesh, Shape};

use super::primitives::{BoundingSphere, Ray, Triangle};

/// Geometry of a body in its own frame
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Sphere centered at the body origin
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Box centered at the body origin
    Box {
        /// Full side lengths
        size: [f64; 3],
    },
    /// Cylinder along the body Z axis
    Cylinder {
        /// Radius
        radius: f64,
        /// Full length
        length: f64,
    },
    /// Closed triangle mesh
    Mesh(Mesh),
}

impl TryFrom<&Shape> for BodyShape {
    type Error = ShapeError;

    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Sphere { radius } => Ok(Self::Sphere { radius: *radius }),
            Shape::Box { size } => Ok(Self::Box { size: *size }),
            Shape::Cylinder { radius, length } => Ok(Self::Cylinder {
                radius: *radius,
                length: *length,
            }),
            Shape::Mesh(mesh) => Ok(Self::Mesh(mesh.clone())),
            Shape::Plane { .. } => Err(ShapeError::UnsupportedShapeType(shape.shape_type())),
        }
    }
}

/// A positioned, scaled and padded solid
#[derive(Debug, Clone)]
pub struct Body {
    shape: BodyShape,
    pose: Isometry3,
    scale: f64,
    padding: f64,
    // Mesh vertices after scale and padding, in the body frame
    mesh_vertices: Vec<Vec3>,
    mesh_center: Vec3,
}

impl Body {
    /// Creates a body at the identity pose with unit scale and no padding
    pub fn new(shape: BodyShape) -> Self {
        let mut body = Self {
            shape,
            pose: Isometry3::identity(),
            scale: 1.0,
            padding: 0.0,
            mesh_vertices: Vec::new(),
            mesh_center: Vec3::zeros(),
        };
        body.update_mesh_vertices();
        body
    }

    /// Creates a body from a shape; planes have no body
    pub fn from_shape(shape: &Shape) -> Result<Self, ShapeError> {
        BodyShape::try_from(shape).map(Self::new)
    }

    /// Builder-style pose
    #[must_use]
    pub fn with_pose(mut self, pose: Isometry3) -> Self {
        self.pose = pose;
        self
    }

    /// Builder-style padding
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.set_padding(padding);
        self
    }

    /// Builder-style scale
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.set_scale(scale);
        self
    }

    /// Body geometry
    pub const fn shape(&self) -> &BodyShape {
        &self.shape
    }

    /// World pose
    pub const fn pose(&self) -> &Isometry3 {
        &self.pose
    }

    /// Scale factor
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Padding
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Move the body
    pub fn set_pose(&mut self, pose: Isometry3) {
        self.pose = pose;
    }

    /// Change the scale factor
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.update_mesh_vertices();
    }

    /// Change the padding
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
        self.update_mesh_vertices();
    }

    /// Sphere enclosing the scaled and padded body, in world coordinates
    pub fn compute_bounding_sphere(&self) -> BoundingSphere {
        let (local_center, radius) = match &self.shape {
            BodyShape::Sphere { radius } => (Vec3::zeros(), self.scaled_radius(*radius)),
            BodyShape::Box { .. } => (Vec3::zeros(), self.half_extents().magnitude()),
            BodyShape::Cylinder { radius, length } => {
                let r = self.scaled_radius(*radius);
                let half_length = self.scaled_length(*length) * 0.5;
                (Vec3::zeros(), r.hypot(half_length))
            }
            BodyShape::Mesh(_) => {
                let radius = self
                    .mesh_vertices
                    .iter()
                    .map(|v| (v - self.mesh_center).magnitude())
                    .fold(0.0, f64::max);
                (self.mesh_center, radius)
            }
        };

        let center = self.pose.transform_point(&Point3::from(local_center));
        BoundingSphere::new(center.coords, radius)
    }

    /// Whether `point` (world coordinates) lies inside the body
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let local = self.pose.inverse_transform_point(&Point3::from(*point)).coords;

        match &self.shape {
            BodyShape::Sphere { radius } => {
                let r = self.scaled_radius(*radius);
                local.magnitude_squared() < r * r
            }
            BodyShape::Box { .. } => {
                let half = self.half_extents();
                local.x.abs() <= half.x && local.y.abs() <= half.y && local.z.abs() <= half.z
            }
            BodyShape::Cylinder { radius, length } => {
                let r = self.scaled_radius(*radius);
                let half_length = self.scaled_length(*length) * 0.5;
                local.z.abs() <= half_length && local.x * local.x + local.y * local.y < r * r
            }
            BodyShape::Mesh(mesh) => self.mesh_contains_local(mesh, &local),
        }
    }

    fn scaled_radius(&self, radius: f64) -> f64 {
        radius * self.scale + self.padding
    }

    fn scaled_length(&self, length: f64) -> f64 {
        length * self.scale + 2.0 * self.padding
    }

    fn half_extents(&self) -> Vec3 {
        match &self.shape {
            BodyShape::Box { size } => Vec3::new(
                self.scaled_length(size[0]),
                self.scaled_length(size[1]),
                self.scaled_length(size[2]),
            ) * 0.5,
            _ => Vec3::zeros(),
        }
    }

    fn update_mesh_vertices(&mut self) {
        let BodyShape::Mesh(mesh) = &self.shape else {
            return;
        };
        let center = mesh.aabb_center();
        let (scale, padding) = (self.scale, self.padding);
        self.mesh_vertices = mesh
            .vertices()
            .iter()
            .map(|v| {
                let offset = (v - center) * scale;
                let push = offset.try_normalize(f64::EPSILON).map_or_else(Vec3::zeros, |dir| dir * padding);
                center + offset + push
            })
            .collect();
        self.mesh_center = center;
    }

    fn mesh_contains_local(&self, mesh: &Mesh, local: &Vec3) -> bool {
        let radius_sq = self
            .mesh_vertices
            .iter()
            .map(|v| (v - self.mesh_center).magnitude_squared())
            .fold(0.0, f64::max);
        if (local - self.mesh_center).magnitude_squared() > radius_sq {
            return false;
        }

        // Odd number of crossings along an arbitrary ray means inside.
        // The direction is skewed so it rarely grazes edges of axis-aligned meshes.
        let ray = Ray::new(*local, Vec3::new(0.577_215_664_9, 0.301_029_995_7, 0.760_245_608_3));
        let crossings = mesh
            .triangles()
            .chunks_exact(3)
            .map(|t| {
                Triangle::new(
                    self.mesh_vertices[t[0] as usize],
                    self.mesh_vertices[t[1] as usize],
                    self.mesh_vertices[t[2] as usize],
                )
            })
            .filter(|tri| tri.intersect_ray(&ray).is_some())
            .count();
        crossings % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn unit_cube_mesh() -> Mesh {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let triangles = vec![
            0, 2, 1, 0, 3, 2, // bottom
            4, 5, 6, 4, 6, 7, // top
            0, 1, 5, 0, 5, 4, // front
            2, 3, 7, 2, 7, 6, // back
            1, 2, 6, 1, 6, 5, // right
            3, 0, 4, 3, 4, 7, // left
        ];
        Mesh::from_vertices_and_triangles(vertices, triangles).unwrap()
    }

    fn at(x: f64, y: f64, z: f64) -> Isometry3 {
        Isometry3::translation(x, y, z)
    }

    #[test]
    fn test_sphere_contains_center_not_surface() {
        let body = Body::from_shape(&Shape::sphere(1.0)).unwrap().with_pose(at(1.0, 2.0, 3.0));
        assert!(body.contains_point(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(body.contains_point(&Vec3::new(1.5, 2.0, 3.0)));
        assert!(!body.contains_point(&Vec3::new(2.0, 2.0, 3.0)));
    }

    #[test]
    fn test_sphere_padding_and_scale() {
        let body = Body::from_shape(&Shape::sphere(1.0)).unwrap().with_scale(2.0).with_padding(0.5);
        assert!(body.contains_point(&Vec3::new(2.4, 0.0, 0.0)));
        assert!(!body.contains_point(&Vec3::new(2.6, 0.0, 0.0)));
        assert_relative_eq!(body.compute_bounding_sphere().radius, 2.5);
    }

    #[test]
    fn test_box_respects_rotation() {
        let rotation = Isometry3::rotation(Vec3::z() * std::f64::consts::FRAC_PI_2);
        let body = Body::from_shape(&Shape::cuboid(4.0, 1.0, 1.0)).unwrap().with_pose(rotation);
        // Long axis now runs along world Y
        assert!(body.contains_point(&Vec3::new(0.0, 1.9, 0.0)));
        assert!(!body.contains_point(&Vec3::new(1.9, 0.0, 0.0)));
    }

    #[test]
    fn test_box_bounding_sphere_is_half_diagonal() {
        let body = Body::from_shape(&Shape::cuboid(2.0, 4.0, 4.0)).unwrap().with_pose(at(1.0, 0.0, 0.0));
        let sphere = body.compute_bounding_sphere();
        assert_relative_eq!(sphere.radius, 3.0, epsilon = EPSILON);
        assert_relative_eq!(sphere.center, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cylinder_containment() {
        let body = Body::from_shape(&Shape::cylinder(1.0, 2.0)).unwrap();
        assert!(body.contains_point(&Vec3::new(0.5, 0.5, 0.9)));
        assert!(!body.contains_point(&Vec3::new(0.0, 0.0, 1.1)));
        assert!(!body.contains_point(&Vec3::new(0.8, 0.8, 0.0)));
        assert_relative_eq!(body.compute_bounding_sphere().radius, 2.0_f64.sqrt(), epsilon = EPSILON);
    }

    #[test]
    fn test_mesh_cube_containment() {
        let body = Body::new(BodyShape::Mesh(unit_cube_mesh())).with_pose(at(5.0, 0.0, 0.0));
        assert!(body.contains_point(&Vec3::new(5.0, 0.0, 0.0)));
        assert!(body.contains_point(&Vec3::new(5.3, -0.2, 0.4)));
        assert!(!body.contains_point(&Vec3::new(5.0, 0.0, 0.7)));
        assert!(!body.contains_point(&Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_mesh_padding_grows_body() {
        let body = Body::new(BodyShape::Mesh(unit_cube_mesh())).with_padding(0.5);
        assert!(body.contains_point(&Vec3::new(0.0, 0.0, 0.7)));
        let radius = body.compute_bounding_sphere().radius;
        assert_relative_eq!(radius, 0.75_f64.sqrt() + 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_plane_has_no_body() {
        let err = Body::from_shape(&Shape::plane(0.0, 0.0, 1.0, 0.0)).unwrap_err();
        assert!(matches!(err, ShapeError::UnsupportedShapeType(_)));
    }
}
