//! Framework catalog structure
//!
//! A catalog is static reference data: groups of safeguards for one
//! framework. It is built once from flat parts and validated so that every
//! safeguard belongs to exactly one existing group.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Smallest assessable unit of a framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Safeguard {
    /// Identifier, unique within the framework (e.g. "4.1")
    pub id: String,
    /// Short name
    pub name: String,
    /// Requirement text
    #[serde(default)]
    pub description: String,
    /// Owning group
    pub group_id: String,
    /// Rollout tiers this safeguard belongs to; `None` means always included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicability_tiers: Option<BTreeSet<u8>>,
}

impl Safeguard {
    /// Create a safeguard with no tier restriction
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            group_id: group_id.into(),
            applicability_tiers: None,
        }
    }

    /// Restrict the safeguard to the given tiers
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = u8>) -> Self {
        self.applicability_tiers = Some(tiers.into_iter().collect());
        self
    }

    /// Lowest tier the safeguard applies to, if restricted
    pub fn min_tier(&self) -> Option<u8> {
        self.applicability_tiers.as_ref()?.first().copied()
    }
}

/// Whether a safeguard is in scope for a tier filter
///
/// Shared by aggregation and catalog display so both always agree. A
/// safeguard is out of scope only when a filter is given and the lowest tier
/// it belongs to exceeds that filter.
pub fn is_in_tier(safeguard: &Safeguard, tier_filter: Option<u8>) -> bool {
    match (tier_filter, safeguard.min_tier()) {
        (Some(filter), Some(min_tier)) => min_tier <= filter,
        _ => true,
    }
}

/// Named cluster of safeguards (control family, domain or category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Identifier, unique within the framework
    pub id: String,
    /// Display name
    pub name: String,
    /// Member safeguards in declaration order
    #[serde(default)]
    pub safeguards: Vec<Safeguard>,
}

impl Group {
    /// Safeguards in scope for a tier filter
    pub fn applicable_safeguards(
        &self,
        tier_filter: Option<u8>,
    ) -> impl Iterator<Item = &Safeguard> {
        self.safeguards.iter().filter(move |s| is_in_tier(s, tier_filter))
    }
}

/// Group header as declared in configuration, before safeguards are attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// Validated catalog for one framework
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkCatalog {
    /// Framework identifier (e.g. "cis-v8")
    pub id: String,
    /// Display name
    pub name: String,
    groups: Vec<Group>,
    #[serde(skip)]
    group_index: HashMap<String, usize>,
    /// Safeguard id to (group position, position within group)
    #[serde(skip)]
    safeguard_index: HashMap<String, (usize, usize)>,
}

impl FrameworkCatalog {
    /// Build a catalog from group headers and a flat safeguard list
    ///
    /// # Errors
    /// Fails fast on duplicate ids, invalid tiers, or a safeguard whose
    /// `group_id` does not name a declared group.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        groups: Vec<GroupSpec>,
        safeguards: Vec<Safeguard>,
    ) -> Result<Self, CatalogError> {
        let mut group_index = HashMap::with_capacity(groups.len());
        let mut built: Vec<Group> = Vec::with_capacity(groups.len());

        for spec in groups {
            if group_index.contains_key(&spec.id) {
                return Err(CatalogError::DuplicateGroup(spec.id));
            }
            group_index.insert(spec.id.clone(), built.len());
            built.push(Group {
                id: spec.id,
                name: spec.name,
                safeguards: Vec::new(),
            });
        }

        let mut safeguard_index = HashMap::with_capacity(safeguards.len());
        for safeguard in safeguards {
            if safeguard_index.contains_key(&safeguard.id) {
                return Err(CatalogError::DuplicateSafeguard(safeguard.id));
            }
            if let Some(tiers) = &safeguard.applicability_tiers {
                if tiers.is_empty() || tiers.contains(&0) {
                    return Err(CatalogError::InvalidTiers(safeguard.id));
                }
            }
            let Some(&position) = group_index.get(&safeguard.group_id) else {
                return Err(CatalogError::UnknownGroup {
                    safeguard_id: safeguard.id,
                    group_id: safeguard.group_id,
                });
            };
            let members = &mut built[position].safeguards;
            safeguard_index.insert(safeguard.id.clone(), (position, members.len()));
            members.push(safeguard);
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            groups: built,
            group_index,
            safeguard_index,
        })
    }

    /// Groups in declaration order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a group by id
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.group_index.get(id).map(|&i| &self.groups[i])
    }

    /// Whether a group id exists
    pub fn contains_group(&self, id: &str) -> bool {
        self.group_index.contains_key(id)
    }

    /// Group ids in declaration order
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.id.as_str())
    }

    /// Look up a safeguard by id
    pub fn safeguard(&self, id: &str) -> Option<&Safeguard> {
        self.safeguard_index
            .get(id)
            .map(|&(group, member)| &self.groups[group].safeguards[member])
    }

    /// Whether a safeguard id exists
    pub fn contains_safeguard(&self, id: &str) -> bool {
        self.safeguard_index.contains_key(id)
    }

    /// Total number of safeguards across all groups
    pub fn safeguard_count(&self) -> usize {
        self.safeguard_index.len()
    }
}
