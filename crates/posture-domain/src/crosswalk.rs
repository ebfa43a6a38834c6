//! Inventory-to-framework crosswalks
//!
//! Each framework carries two independent lookup tables: one from primary
//! product categories and one from secondary (legacy compliance-family)
//! classifications. An object qualifies for a group through either table;
//! the two are unioned, never intersected, and duplicates collapse.

use crate::catalog::FrameworkCatalog;
use crate::error::CatalogError;
use crate::inventory::InventoryObject;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Crosswalk tables for one framework
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Crosswalk {
    /// Primary category -> group ids
    #[serde(default)]
    pub primary: BTreeMap<String, Vec<String>>,
    /// Secondary classification -> group ids
    #[serde(default)]
    pub secondary: BTreeMap<String, Vec<String>>,
    /// Declared primary categories; when non-empty, `primary` keys must be members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_categories: Vec<String>,
    /// Declared classifications; when non-empty, `secondary` keys must be members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_classifications: Vec<String>,
}

impl Crosswalk {
    /// Create an empty crosswalk
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primary-category entry
    pub fn with_primary<I, S>(mut self, category: impl Into<String>, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary
            .entry(category.into())
            .or_default()
            .extend(group_ids.into_iter().map(Into::into));
        self
    }

    /// Add a secondary-classification entry
    pub fn with_secondary<I, S>(mut self, classification: impl Into<String>, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary
            .entry(classification.into())
            .or_default()
            .extend(group_ids.into_iter().map(Into::into));
        self
    }

    /// Check every table against the catalog and declared taxonomies
    ///
    /// # Errors
    /// Returns the first entry that targets a missing group or uses an
    /// undeclared key.
    pub fn validate(&self, catalog: &FrameworkCatalog) -> Result<(), CatalogError> {
        for (table, known) in [
            (&self.primary, &self.known_categories),
            (&self.secondary, &self.known_classifications),
        ] {
            for (key, group_ids) in table {
                if !known.is_empty() && !known.contains(key) {
                    return Err(CatalogError::UnknownCategory(key.clone()));
                }
                if let Some(missing) = group_ids.iter().find(|id| !catalog.contains_group(id)) {
                    return Err(CatalogError::UnknownCrosswalkGroup {
                        key: key.clone(),
                        group_id: missing.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Group ids an object maps to
    ///
    /// Categories and classifications without an entry contribute nothing.
    pub fn map_object(&self, object: &InventoryObject) -> BTreeSet<String> {
        let primary = object
            .categories
            .iter()
            .filter_map(|category| self.primary.get(category));
        let secondary = object
            .secondary_classifications
            .iter()
            .filter_map(|classification| self.secondary.get(classification));

        primary.chain(secondary).flatten().cloned().collect()
    }

    /// Objects mapped to each group of the catalog
    ///
    /// Every catalog group is present as a key, even with no objects; each
    /// list preserves the input order of `objects`.
    pub fn build_mapping<'a>(
        &self,
        catalog: &FrameworkCatalog,
        objects: &'a [InventoryObject],
    ) -> BTreeMap<String, Vec<&'a InventoryObject>> {
        let mut mapping: BTreeMap<String, Vec<&'a InventoryObject>> = catalog
            .group_ids()
            .map(|id| (id.to_string(), Vec::new()))
            .collect();

        for object in objects {
            for group_id in self.map_object(object) {
                mapping.entry(group_id).or_default().push(object);
            }
        }

        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GroupSpec, Safeguard};

    fn catalog() -> FrameworkCatalog {
        let groups = ["ID.AM", "PR.DS", "DE.CM"]
            .iter()
            .map(|id| GroupSpec { id: id.to_string(), name: id.to_string() })
            .collect();
        let safeguards = vec![Safeguard::new("ID.AM-1", "a", "ID.AM")];
        FrameworkCatalog::from_parts("csf", "CSF", groups, safeguards).unwrap()
    }

    fn crosswalk() -> Crosswalk {
        Crosswalk::new()
            .with_primary("endpoint", ["ID.AM", "DE.CM"])
            .with_primary("database", ["PR.DS"])
            .with_secondary("AU", ["DE.CM"])
            .with_secondary("SC", ["PR.DS"])
    }

    #[test]
    fn test_union_of_both_tables_without_duplicates() {
        let object = InventoryObject::new("laptop")
            .with_category("endpoint")
            .with_classification("AU");

        let groups = crosswalk().map_object(&object);

        assert_eq!(groups.into_iter().collect::<Vec<_>>(), vec!["DE.CM", "ID.AM"]);
    }

    #[test]
    fn test_either_signal_qualifies() {
        let by_category = InventoryObject::new("a").with_category("database");
        let by_classification = InventoryObject::new("b").with_classification("SC");

        assert!(crosswalk().map_object(&by_category).contains("PR.DS"));
        assert!(crosswalk().map_object(&by_classification).contains("PR.DS"));
    }

    #[test]
    fn test_unmapped_keys_contribute_nothing() {
        let object = InventoryObject::new("x").with_category("printer").with_classification("ZZ");
        assert!(crosswalk().map_object(&object).is_empty());
    }

    #[test]
    fn test_build_mapping_keeps_every_group_and_order() {
        let objects = vec![
            InventoryObject::new("first").with_category("endpoint"),
            InventoryObject::new("second").with_classification("AU"),
            InventoryObject::new("third").with_category("printer"),
        ];

        let mapping = crosswalk().build_mapping(&catalog(), &objects);

        assert_eq!(mapping.len(), 3);
        assert!(mapping["PR.DS"].is_empty());
        let ids: Vec<_> = mapping["DE.CM"].iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(mapping["ID.AM"].len(), 1);
    }

    #[test]
    fn test_build_mapping_with_no_objects() {
        let mapping = crosswalk().build_mapping(&catalog(), &[]);
        assert_eq!(
            mapping.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["DE.CM", "ID.AM", "PR.DS"]
        );
        assert!(mapping.values().all(Vec::is_empty));
    }

    #[test]
    fn test_validate_rejects_unknown_group() {
        let bad = crosswalk().with_secondary("IR", ["RS.RP"]);
        assert_eq!(
            bad.validate(&catalog()),
            Err(CatalogError::UnknownCrosswalkGroup {
                key: "IR".to_string(),
                group_id: "RS.RP".to_string(),
            })
        );
        assert!(crosswalk().validate(&catalog()).is_ok());
    }

    #[test]
    fn test_validate_rejects_undeclared_key() {
        let mut declared = crosswalk();
        declared.known_categories = vec!["endpoint".to_string()];
        assert_eq!(
            declared.validate(&catalog()),
            Err(CatalogError::UnknownCategory("database".to_string()))
        );
    }
}
