//! # Planning Environment
//!
//! Shape and body adapter utilities for a robot motion-planning environment.
//!
//! ## Features
//!
//! - **Wire conversion**: Build in-memory [`Shape`]s from flat [`WireShape`]
//!   records and serialize them back with optional padding
//! - **Shape collections**: Deep-copy and release ordered shape vectors
//! - **Transform conversion**: Wire poses/vectors to `nalgebra` types
//! - **Containment masking**: Flag sample poses that fall inside bodies
//!
//! ## Quick Start
//!
//! ```rust
//! use planning_environment::prelude::*;
//!
//! let wire = WireShape::new(WireShape::BOX, vec![2.0, 4.0, 6.0]);
//! let shape = construct_object(&wire)?;
//! assert_eq!(shape, Shape::Box { size: [2.0, 4.0, 6.0] });
//!
//! let padded = construct_object_msg(&shape, 1.0)?;
//! assert_eq!(padded.dimensions, vec![4.0, 6.0, 8.0]);
//! # Ok::<(), ShapeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod foundation;
pub mod config;
pub mod msg;
pub mod shapes;
pub mod bodies;

mod construct;
mod conversions;
mod mask;

pub use construct::{construct_object, construct_object_msg, fill_object_msg, ShapeError};
pub use conversions::{poses_to_affine, vectors_to_vector3};
pub use mask::mask_poses_inside_body_vectors;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        construct_object, construct_object_msg, fill_object_msg, ShapeError,
        poses_to_affine, vectors_to_vector3,
        mask_poses_inside_body_vectors,
        foundation::math::{Affine3, Isometry3, Point3, Vec3},
        config::{Config, ConfigError, PlanningConfig},
        msg::{WirePoint, WirePose, WireQuaternion, WireShape, WireVector3},
        shapes::{clone_shape_vector, dispose_shape_vector, Mesh, Shape, ShapeType},
        bodies::{Body, BodyShape, BodyVector, BoundingSphere},
    };
}
