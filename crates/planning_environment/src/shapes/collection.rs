//! Ordered shape collections
//!
//! A `Vec<Shape>` owns its shapes outright. Cloning copies every shape;
//! releasing is dropping.

use super::shape::Shape;

/// Deep-copy every shape in order
pub fn clone_shape_vector(shapes: &[Shape]) -> Vec<Shape> {
    shapes.to_vec()
}

/// Release every shape and leave the vector empty
///
/// Calling this again on the same vector does nothing.
pub fn dispose_shape_vector(shapes: &mut Vec<Shape>) {
    log::trace!("Disposing {} shapes", shapes.len());
    shapes.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::shapes::Mesh;

    fn sample_shapes() -> Vec<Shape> {
        let mesh = Mesh::from_vertices_and_triangles(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
        .unwrap();
        vec![
            Shape::sphere(0.5),
            Shape::cuboid(1.0, 2.0, 3.0),
            Shape::cylinder(0.25, 2.0),
            Shape::Mesh(mesh),
        ]
    }

    #[test]
    fn test_clone_preserves_order_and_geometry() {
        let shapes = sample_shapes();
        let copies = clone_shape_vector(&shapes);
        assert_eq!(copies, shapes);
    }

    #[test]
    fn test_clone_of_clone_has_distinct_storage() {
        let shapes = sample_shapes();
        let first = clone_shape_vector(&shapes);
        let second = clone_shape_vector(&first);

        assert_eq!(second, shapes);
        for ((a, b), c) in shapes.iter().zip(&first).zip(&second) {
            assert!(!std::ptr::eq(a, b));
            assert!(!std::ptr::eq(b, c));
            assert!(!std::ptr::eq(a, c));
        }

        let source_vertices = shapes[3].as_mesh().unwrap().vertices().as_ptr();
        let cloned_vertices = second[3].as_mesh().unwrap().vertices().as_ptr();
        assert_ne!(source_vertices, cloned_vertices);
    }

    #[test]
    fn test_clone_empty() {
        assert!(clone_shape_vector(&[]).is_empty());
    }

    #[test]
    fn test_dispose_empties_and_is_repeatable() {
        let mut shapes = sample_shapes();
        dispose_shape_vector(&mut shapes);
        assert!(shapes.is_empty());
        dispose_shape_vector(&mut shapes);
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_dispose_leaves_clones_alone() {
        let mut shapes = sample_shapes();
        let copies = clone_shape_vector(&shapes);
        dispose_shape_vector(&mut shapes);
        assert_eq!(copies.len(), 4);
        assert_eq!(copies[0], Shape::sphere(0.5));
    }
}
