//! Framework evaluation

use crate::{EngineConfig, FrameworkDefinition, GroupReport, PostureReport};
use posture_domain::{
    aggregate_framework, derive_maturity, resolve_maturity, AssessmentSnapshot, InventoryObject,
    MaturityLevel,
};
use tracing::{debug, info, Level};

/// Evaluates one framework against assessment snapshots and inventory
///
/// The engine holds only configuration; every call works on the snapshot it
/// is given, so one engine can serve any number of evaluations.
#[derive(Debug, Clone)]
pub struct PostureEngine {
    framework: FrameworkDefinition,
    config: EngineConfig,
}

impl PostureEngine {
    /// Create an engine for a framework
    pub fn new(framework: FrameworkDefinition, config: EngineConfig) -> Self {
        Self { framework, config }
    }

    /// Create an engine with default configuration
    pub fn with_defaults(framework: FrameworkDefinition) -> Self {
        Self::new(framework, EngineConfig::default())
    }

    /// Framework being evaluated
    pub fn framework(&self) -> &FrameworkDefinition {
        &self.framework
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a snapshot and inventory into a report
    ///
    /// Records that name safeguards or groups outside this framework are
    /// ignored; a single store may hold assessments for several frameworks.
    pub fn evaluate(
        &self,
        snapshot: &AssessmentSnapshot,
        inventory: &[InventoryObject],
    ) -> PostureReport {
        let catalog = &self.framework.catalog;
        let tier_filter = self.config.tier_filter;

        self.trace_foreign_records(snapshot);

        let result = aggregate_framework(catalog.groups(), &snapshot.assessments, tier_filter);
        let mut mapping = self.framework.crosswalk.build_mapping(catalog, inventory);

        let groups: Vec<GroupReport> = catalog
            .groups()
            .iter()
            .zip(result.groups)
            .map(|(group, group_result)| {
                let mapped = mapping.remove(&group.id).unwrap_or_default();
                let auto_maturity = if self.config.auto_estimate {
                    derive_maturity(&mapped)
                } else {
                    MaturityLevel::NotAddressed
                };

                let manual = snapshot.override_for(&group.id);
                let resolved = resolve_maturity(&group_result, auto_maturity, manual);

                debug!(
                    group = %group.id,
                    score = group_result.score,
                    assessed = group_result.assessed_count,
                    applicable = group_result.total_applicable,
                    mapped = mapped.len(),
                    effective = resolved.level.as_u8(),
                    source = resolved.source.as_str(),
                    "evaluated group"
                );

                GroupReport {
                    group_id: group.id.clone(),
                    name: group.name.clone(),
                    result: group_result,
                    auto_maturity,
                    override_level: manual.map(|o| o.maturity()),
                    effective: resolved.level,
                    source: resolved.source,
                    mapped_objects: mapped.iter().map(|o| o.id.clone()).collect(),
                }
            })
            .collect();

        info!(
            framework = %catalog.id,
            score = result.overall.score,
            maturity = result.overall.maturity.as_u8(),
            assessed = result.overall.assessed_count,
            total = result.overall.total_safeguards,
            "evaluated framework"
        );

        PostureReport {
            framework_id: catalog.id.clone(),
            framework_name: catalog.name.clone(),
            tier_filter,
            overall: result.overall,
            groups,
        }
    }

    fn trace_foreign_records(&self, snapshot: &AssessmentSnapshot) {
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }
        let catalog = &self.framework.catalog;

        let foreign_assessments = snapshot
            .assessments
            .keys()
            .filter(|id| !catalog.contains_safeguard(id))
            .count();
        let foreign_overrides = snapshot
            .overrides
            .keys()
            .filter(|id| !catalog.contains_group(id))
            .count();

        if foreign_assessments > 0 || foreign_overrides > 0 {
            debug!(
                framework = %catalog.id,
                assessments = foreign_assessments,
                overrides = foreign_overrides,
                "ignoring records outside framework"
            );
        }
    }
}

/// Evaluate several frameworks over the same snapshot and inventory
///
/// Each engine applies its own crosswalks; reports come back in input order.
pub fn evaluate_all(
    engines: &[PostureEngine],
    snapshot: &AssessmentSnapshot,
    inventory: &[InventoryObject],
) -> Vec<PostureReport> {
    engines
        .iter()
        .map(|engine| engine.evaluate(snapshot, inventory))
        .collect()
}
