//! Geometric shapes
//!
//! - [`shape`] - The closed [`Shape`] enum and its [`ShapeType`] tag
//! - [`mesh`] - Indexed triangle meshes
//! - [`collection`] - Cloning and releasing ordered shape vectors

pub mod shape;
pub mod mesh;
pub mod collection;

pub use shape::{Shape, ShapeType};
pub use mesh::Mesh;
pub use collection::{clone_shape_vector, dispose_shape_vector};
