//! Geometric bodies for point-containment queries
//!
//! # Module Organization
//!
//! - [`primitives`] - Rays, bounding spheres and triangles
//! - [`body`] - Posed, scaled and padded solids
//! - [`body_vector`] - Ordered body collections with padded twins
//!
//! # Key Types
//!
//! - [`Body`] - A solid answering bounding-sphere and containment queries
//! - [`BodyVector`] - What the containment masker scans
//! - [`BoundingSphere`] - Cheap pre-filter before exact containment

pub mod primitives;
pub mod body;
pub mod body_vector;

pub use primitives::{BoundingSphere, Ray, Triangle};
pub use body::{Body, BodyShape};
pub use body_vector::BodyVector;
