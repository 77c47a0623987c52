//! Wire transform types to `nalgebra` types

use nalgebra::convert;

use crate::foundation::math::{Affine3, Vec3};
use crate::msg::{WirePose, WireVector3};

/// Convert poses to affine transforms, one for one and in order
pub fn poses_to_affine(poses: &[WirePose]) -> Vec<Affine3> {
    poses
        .iter()
        .map(|pose| convert::<_, Affine3>(pose.to_isometry()))
        .collect()
}

/// Convert vectors to `nalgebra` vectors, one for one and in order
pub fn vectors_to_vector3(vectors: &[WireVector3]) -> Vec<Vec3> {
    vectors.iter().map(|v| Vec3::new(v.x, v.y, v.z)).collect()
}
