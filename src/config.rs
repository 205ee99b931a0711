// =============================================================================
// Shape configuration file (TOML)
// =============================================================================

use crate::error::{ConfigError, ShapeError};
use crate::shape::{Circle, PiConstant, Rectangle, ShapeKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// How constructors treat negative or non-finite dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Store whatever was given.
    #[default]
    Permissive,
    /// Reject with a [`ShapeError`].
    Strict,
}

/// One `[[shapes]]` table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl ShapeSpec {
    pub fn build(&self, validation: Validation, pi: PiConstant) -> Result<ShapeKind, ShapeError> {
        let shape = match (*self, validation) {
            (ShapeSpec::Circle { radius }, Validation::Permissive) => {
                Circle::with_pi(radius, pi).into()
            }
            (ShapeSpec::Circle { radius }, Validation::Strict) => {
                Circle::try_with_pi(radius, pi)?.into()
            }
            (ShapeSpec::Rectangle { width, height }, Validation::Permissive) => {
                Rectangle::new(width, height).into()
            }
            (ShapeSpec::Rectangle { width, height }, Validation::Strict) => {
                Rectangle::try_new(width, height)?.into()
            }
        };
        Ok(shape)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub validation: Validation,
    pub pi: PiConstant,
    pub shapes: Vec<ShapeSpec>,
}

impl Default for Config {
    /// A circle of radius 5 and a 4x6 rectangle.
    fn default() -> Self {
        Config {
            validation: Validation::default(),
            pi: PiConstant::default(),
            shapes: vec![
                ShapeSpec::Circle { radius: 5.0 },
                ShapeSpec::Rectangle {
                    width: 4.0,
                    height: 6.0,
                },
            ],
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        debug!(
            shapes = config.shapes.len(),
            validation = ?config.validation,
            pi = ?config.pi,
            "parsed config"
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading shape config");
        Self::from_toml_str(&content)
    }

    /// Builds every configured shape, stopping at the first rejection.
    pub fn build_shapes(&self) -> Result<Vec<ShapeKind>, ShapeError> {
        self.shapes
            .iter()
            .map(|spec| spec.build(self.validation, self.pi))
            .collect()
    }
}
