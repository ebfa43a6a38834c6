//! Inventory objects as supplied by the inventory subsystem

use serde::{Deserialize, Serialize};

/// Tracked object (product, system, data set...) read from the inventory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryObject {
    /// Identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Organizational product categories (primary crosswalk input)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Legacy compliance-family classifications (secondary crosswalk input)
    #[serde(default)]
    pub secondary_classifications: Vec<String>,
    /// Whether the object has gone through formal classification
    #[serde(default)]
    pub is_formally_classified: bool,
    /// Measured compliance figure in percent, if any has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_percent: Option<f64>,
}

impl InventoryObject {
    /// Create an unclassified object with no compliance figure
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a primary category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Add a secondary classification
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.secondary_classifications.push(classification.into());
        self
    }

    /// Mark as formally classified
    pub fn formally_classified(mut self) -> Self {
        self.is_formally_classified = true;
        self
    }

    /// Record a compliance figure
    pub fn with_compliance(mut self, percent: f64) -> Self {
        self.compliance_percent = Some(percent);
        self
    }

    /// Whether a non-zero compliance figure has been measured
    ///
    /// A recorded 0% does not count: it shows tracking exists but proves no
    /// coverage.
    pub fn has_measured_compliance(&self) -> bool {
        self.compliance_percent.is_some_and(|percent| percent > 0.0)
    }
}
