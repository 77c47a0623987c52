//! Ordered body collections

use crate::construct::ShapeError;
use crate::foundation::math::Isometry3;
use crate::shapes::Shape;

use super::body::Body;

/// An ordered collection of bodies
///
/// Every body has a padded twin carrying the collection's extra padding on
/// top of its own. Both stay at the same pose.
#[derive(Debug, Clone, Default)]
pub struct BodyVector {
    bodies: Vec<Body>,
    padded_bodies: Vec<Body>,
    padding: f64,
}

impl BodyVector {
    /// Creates an empty collection without extra padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection whose padded twins get `padding` extra
    pub fn with_padding(padding: f64) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }

    /// Extra padding applied to padded twins
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Append a body
    pub fn add_body(&mut self, body: Body) {
        let extra = body.padding() + self.padding;
        self.padded_bodies.push(body.clone().with_padding(extra));
        self.bodies.push(body);
    }

    /// Append a body built from `shape` at `pose`
    pub fn add_shape(&mut self, shape: &Shape, pose: Isometry3) -> Result<(), ShapeError> {
        let body = Body::from_shape(shape)?.with_pose(pose);
        self.add_body(body);
        Ok(())
    }

    /// Number of bodies
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    /// Whether there are no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body `index`, unpadded
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Body `index` with the collection padding added
    pub fn padded_body(&self, index: usize) -> Option<&Body> {
        self.padded_bodies.get(index)
    }

    /// Move body `index` (and its padded twin)
    pub fn set_pose(&mut self, index: usize, pose: Isometry3) {
        if let (Some(body), Some(padded)) = (self.bodies.get_mut(index), self.padded_bodies.get_mut(index)) {
            body.set_pose(pose);
            padded.set_pose(pose);
        }
    }

    /// Iterate unpadded bodies in order
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }
}

impl<'a> IntoIterator for &'a BodyVector {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
