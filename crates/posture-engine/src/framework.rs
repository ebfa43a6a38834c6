//! Framework definitions loaded from TOML
//!
//! A definition file declares the catalog and both crosswalk tables:
//!
//! ```toml
//! id = "cis-v8"
//! name = "CIS Controls v8"
//!
//! [[groups]]
//! id = "1"
//! name = "Inventory of Enterprise Assets"
//!
//! [[safeguards]]
//! id = "1.1"
//! name = "Establish asset inventory"
//! group_id = "1"
//! applicability_tiers = [1, 2, 3]
//!
//! [crosswalk.primary]
//! "Endpoint" = ["1"]
//!
//! [crosswalk.secondary]
//! "PCI" = ["1"]
//! ```
//!
//! Loading validates the catalog and then the crosswalks against it, so a
//! definition that loads is internally consistent.

use crate::EngineError;
use posture_domain::{Crosswalk, FrameworkCatalog, GroupSpec, Safeguard};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// On-disk shape of a definition file
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    id: String,
    name: String,
    #[serde(default)]
    groups: Vec<GroupSpec>,
    #[serde(default)]
    safeguards: Vec<Safeguard>,
    #[serde(default)]
    crosswalk: Crosswalk,
}

/// Validated catalog plus its crosswalk tables
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkDefinition {
    /// Groups and safeguards
    pub catalog: FrameworkCatalog,
    /// Inventory mapping tables
    pub crosswalk: Crosswalk,
}

impl FrameworkDefinition {
    /// Combine an already-built catalog with crosswalk tables
    ///
    /// # Errors
    /// Fails when the crosswalk targets a group the catalog lacks.
    pub fn new(catalog: FrameworkCatalog, crosswalk: Crosswalk) -> Result<Self, EngineError> {
        crosswalk.validate(&catalog)?;
        Ok(Self { catalog, crosswalk })
    }

    /// Load a definition from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let definition = Self::from_toml_str(&contents)?;
        debug!(
            path = %path.as_ref().display(),
            framework = %definition.id(),
            "loaded framework definition"
        );
        Ok(definition)
    }

    /// Parse a definition from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, EngineError> {
        let file: DefinitionFile = toml::from_str(toml_str)?;
        let catalog =
            FrameworkCatalog::from_parts(file.id, file.name, file.groups, file.safeguards)?;
        Self::new(catalog, file.crosswalk)
    }

    /// Framework id
    pub fn id(&self) -> &str {
        &self.catalog.id
    }

    /// Framework display name
    pub fn name(&self) -> &str {
        &self.catalog.name
    }
}
