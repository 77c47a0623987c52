//! Configuration system

pub use serde::{Serialize, Deserialize};

use crate::bodies::{Body, BodyVector};
use crate::construct::{construct_object_msg, ShapeError};
use crate::foundation::math::{Isometry3, Vec3};
use crate::msg::WireShape;
use crate::shapes::{Mesh, Shape};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;
        Self::parse(path, &contents)
    }

    /// Parse configuration text, picking the format from the file extension
    fn parse(path: &str, contents: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Planning environment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Padding applied when shapes are published as wire records
    pub object_padding: f64,

    /// Extra padding carried by padded body twins
    pub body_padding: f64,

    /// Scale applied to bodies built from shapes
    pub body_scale: f64,

    /// Distance under which triangle-soup vertices are merged
    pub mesh_merge_epsilon: f64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            object_padding: 0.0,
            body_padding: 0.0,
            body_scale: 1.0,
            mesh_merge_epsilon: 1e-9,
        }
    }
}

impl Config for PlanningConfig {}

impl PlanningConfig {
    /// Wire record for `shape` with the configured object padding
    pub fn serialize_shape(&self, shape: &Shape) -> Result<WireShape, ShapeError> {
        construct_object_msg(shape, self.object_padding)
    }

    /// Body collection for posed shapes using the configured scale and padding
    pub fn body_vector<'a, I>(&self, shapes: I) -> Result<BodyVector, ShapeError>
    where
        I: IntoIterator<Item = (&'a Shape, Isometry3)>,
    {
        let mut bodies = BodyVector::with_padding(self.body_padding);
        for (shape, pose) in shapes {
            let body = Body::from_shape(shape)?
                .with_scale(self.body_scale)
                .with_pose(pose);
            bodies.add_body(body);
        }
        Ok(bodies)
    }

    /// Mesh from a triangle soup, merging vertices within the configured epsilon
    pub fn mesh_from_soup(&self, soup: &[Vec3]) -> Result<Mesh, ShapeError> {
        Mesh::from_triangle_soup(soup, self.mesh_merge_epsilon)
    }
}
