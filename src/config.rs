//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`POLY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use polychora_math::{DescentParams, Euler4, RotationPlane, Rotor4, Transform4, Vec4};
use polychora_mesh::Polytope;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which shape to build and how
    #[serde(default)]
    pub polytope: PolytopeConfig,
    /// Placement of the shape before slicing
    #[serde(default)]
    pub transform: TransformConfig,
    /// Euler angle fitting
    #[serde(default)]
    pub euler: DescentParams,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`POLY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // POLY_POLYTOPE__SHAPE=24-cell -> polytope.shape = "24-cell"
        figment = figment.merge(Env::prefixed("POLY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolytopeConfig {
    /// Shape name (e.g. "tesseract", "24-cell", "hexacosichoron")
    pub shape: Polytope,
    /// Uniform scale applied after construction
    pub scale: f64,
    /// Replace the shape by its dual before transforming
    pub dual: bool,
}

impl Default for PolytopeConfig {
    fn default() -> Self {
        Self {
            shape: Polytope::default(),
            scale: 1.0,
            dual: false,
        }
    }
}

/// Placement of the shape relative to the w = 0 hyperplane
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Translation [x, y, z, w]
    pub translation: [f64; 4],
    /// Rotation angles in radians, one per entry of `plane_order`
    pub angles: [f64; 6],
    /// Order in which the plane rotations are applied
    pub plane_order: [RotationPlane; 6],
    /// Per-axis scale [x, y, z, w]
    pub scale: [f64; 4],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            translation: [0.0; 4],
            angles: [0.0; 6],
            plane_order: RotationPlane::ALL,
            scale: [1.0; 4],
        }
    }
}

impl TransformConfig {
    /// Rotor composed from the configured plane angles
    pub fn rotor(&self) -> Rotor4 {
        self.euler().as_rotor()
    }

    pub fn euler(&self) -> Euler4 {
        Euler4::new(self.angles, self.plane_order)
    }

    pub fn to_transform(&self) -> Transform4 {
        Transform4 {
            translation: Vec4::from(self.translation),
            rotation: self.rotor(),
            scale: Vec4::from(self.scale),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
