//! Error types for engine operations

use posture_domain::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading or evaluating frameworks
#[derive(Error, Debug)]
pub enum EngineError {
    /// Framework definition is structurally invalid
    #[error("Invalid framework definition: {0}")]
    Catalog(#[from] CatalogError),

    /// Failed to read a definition or config file
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),
}
