//! Math utilities and types
//!
//! Double-precision aliases over `nalgebra`. Wire shapes carry `f64`
//! dimensions, so everything downstream stays in `f64`.

pub use nalgebra::{Quaternion, Translation3, UnitQuaternion};

/// 3D vector type
pub type Vec3 = nalgebra::Vector3<f64>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f64>;

/// Rigid transform (rotation + translation)
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// General affine transform
pub type Affine3 = nalgebra::Affine3<f64>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f64>;

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Arithmetic mean of a set of points, axis by axis
    ///
    /// Returns the origin for an empty slice.
    pub fn centroid(points: &[Vec3]) -> Vec3 {
        if points.is_empty() {
            return Vec3::zeros();
        }
        let sum = points.iter().fold(Vec3::zeros(), |acc, p| acc + p);
        sum / points.len() as f64
    }

    /// Push `value` away from zero by `amount`; zero stays zero
    pub fn inflate_away_from_zero(value: f64, amount: f64) -> f64 {
        if value > 0.0 {
            value + amount
        } else if value < 0.0 {
            value - amount
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use super::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid_is_per_axis_mean() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 4.0),
            Vec3::new(1.0, 3.0, 2.0),
        ];
        let c = centroid(&points);
        assert_relative_eq!(c, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_centroid_of_nothing_is_origin() {
        assert_eq!(centroid(&[]), Vec3::zeros());
    }

    #[test]
    fn test_inflate_away_from_zero() {
        assert_relative_eq!(inflate_away_from_zero(1.5, 0.5), 2.0);
        assert_relative_eq!(inflate_away_from_zero(-1.5, 0.5), -2.0);
        assert_relative_eq!(inflate_away_from_zero(0.0, 0.5), 0.0);
    }
}
