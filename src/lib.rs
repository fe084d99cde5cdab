//! Polychora - regular 4D polytopes and their 3D cross-sections

pub mod config;
pub mod pipeline;

pub use config::{AppConfig, ConfigError};
pub use pipeline::{run, FacetCounts, SliceReport};
