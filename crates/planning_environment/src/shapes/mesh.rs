//! Triangle mesh shape
//!
//! Vertices are stored once and referenced by a flattened triangle index
//! list, three indices per triangle.

use crate::construct::ShapeError;
use crate::foundation::math::Vec3;

/// An indexed triangle mesh
///
/// Only built through the validating constructors, so every triangle index
/// names an existing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<u32>,
    // Unit normal per triangle (right-hand rule), zero for degenerate triangles
    triangle_normals: Vec<Vec3>,
}

impl Mesh {
    /// Creates a mesh from vertex positions and a flattened triangle index list
    ///
    /// Fails when the index count is not a multiple of three or an index
    /// points past the vertex list.
    pub fn from_vertices_and_triangles(vertices: Vec<Vec3>, triangles: Vec<u32>) -> Result<Self, ShapeError> {
        if triangles.len() % 3 != 0 {
            return Err(ShapeError::MeshValidation(format!(
                "number of triangle indices ({}) is not divisible by 3",
                triangles.len()
            )));
        }
        if let Some(&bad) = triangles.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(ShapeError::MeshValidation(format!(
                "triangle index {bad} out of range for {} vertices",
                vertices.len()
            )));
        }

        let mut mesh = Self {
            vertices,
            triangles,
            triangle_normals: Vec::new(),
        };
        mesh.compute_triangle_normals();
        Ok(mesh)
    }

    /// Creates a mesh from a triangle soup (every three vertices form a triangle)
    ///
    /// Vertices closer than `epsilon` to an already seen vertex are merged
    /// into it, so shared corners end up indexed once.
    pub fn from_triangle_soup(soup: &[Vec3], epsilon: f64) -> Result<Self, ShapeError> {
        if soup.len() % 3 != 0 {
            return Err(ShapeError::MeshValidation(format!(
                "number of soup vertices ({}) is not divisible by 3",
                soup.len()
            )));
        }

        let epsilon_sq = epsilon * epsilon;
        let mut vertices: Vec<Vec3> = Vec::new();
        let mut triangles = Vec::with_capacity(soup.len());

        for v in soup {
            let existing = vertices
                .iter()
                .position(|u| (u - v).magnitude_squared() <= epsilon_sq);
            let index = existing.unwrap_or_else(|| {
                vertices.push(*v);
                vertices.len() - 1
            });
            triangles.push(index as u32);
        }

        log::trace!(
            "Consolidated triangle soup of {} vertices into {} unique vertices",
            soup.len(),
            vertices.len()
        );
        Self::from_vertices_and_triangles(vertices, triangles)
    }

    /// Vertex positions
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Flattened triangle vertex indices, grouped in triples
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Unit normal per triangle, zero for degenerate triangles
    pub fn triangle_normals(&self) -> &[Vec3] {
        &self.triangle_normals
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Corner positions of triangle `index`
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let t = &self.triangles[index * 3..index * 3 + 3];
        [
            self.vertices[t[0] as usize],
            self.vertices[t[1] as usize],
            self.vertices[t[2] as usize],
        ]
    }

    /// Iterate triangles as corner triples
    pub fn triangles_iter(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangle_count()).map(move |i| self.triangle(i))
    }

    /// Center of the axis-aligned bounds of the vertices
    pub fn aabb_center(&self) -> Vec3 {
        let mut iter = self.vertices.iter();
        let Some(first) = iter.next() else {
            return Vec3::zeros();
        };
        let (min, max) = iter.fold((*first, *first), |(min, max), v| (min.inf(v), max.sup(v)));
        (min + max) * 0.5
    }

    fn compute_triangle_normals(&mut self) {
        self.triangle_normals = self
            .triangles_iter()
            .map(|[v0, v1, v2]| {
                (v1 - v0)
                    .cross(&(v2 - v0))
                    .try_normalize(f64::EPSILON)
                    .unwrap_or_else(Vec3::zeros)
            })
            .collect();
    }
}
