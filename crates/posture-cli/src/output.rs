//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use posture_domain::{ImplementationStatus, MaturityLevel, PolicyStatus, StatusDefinition};
use posture_engine::{FrameworkDefinition, PostureReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format posture reports.
    pub fn format_reports(&self, reports: &[PostureReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Table => Ok(reports
                .iter()
                .map(|r| self.format_report_table(r))
                .collect::<Vec<_>>()
                .join("\n\n")),
            OutputFormat::Quiet => Ok(reports
                .iter()
                .flat_map(|r| {
                    r.groups.iter().map(move |g| {
                        format!("{}\t{}\t{}", r.framework_id, g.group_id, g.effective.as_u8())
                    })
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format one report as a heading plus a group table.
    fn format_report_table(&self, report: &PostureReport) -> String {
        let mut heading = format!(
            "{} ({}): overall {:.2}, maturity {}, {}/{} safeguards assessed",
            report.framework_name,
            report.framework_id,
            report.overall.score,
            self.maturity(report.overall.maturity),
            report.overall.assessed_count,
            report.overall.total_safeguards,
        );
        if let Some(tier) = report.tier_filter {
            heading.push_str(&format!(" (tier <= {})", tier));
        }

        if report.groups.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No groups defined.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Group",
            "Name",
            "Score",
            "Assessed",
            "Auto",
            "Override",
            "Effective",
            "Source",
        ]);

        for group in &report.groups {
            let score = if group.result.is_assessed() {
                format!("{:.2}", group.result.score)
            } else {
                "-".to_string()
            };
            let assessed =
                format!("{}/{}", group.result.assessed_count, group.result.total_applicable);
            let override_level = group
                .override_level
                .map(|l| l.as_u8().to_string())
                .unwrap_or_else(|| "-".to_string());

            builder.push_record([
                group.group_id.clone(),
                group.name.clone(),
                score,
                assessed,
                group.auto_maturity.as_u8().to_string(),
                override_level,
                self.maturity(group.effective),
                group.source.as_str().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", heading, table)
    }

    /// Format a framework definition summary.
    pub fn format_framework(&self, definition: &FrameworkDefinition) -> Result<String> {
        let groups = definition.catalog.groups().len();
        let safeguards = definition.catalog.safeguard_count();
        let primary = definition.crosswalk.primary.len();
        let secondary = definition.crosswalk.secondary.len();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": definition.id(),
                "name": definition.name(),
                "groups": groups,
                "safeguards": safeguards,
                "primary_crosswalk_entries": primary,
                "secondary_crosswalk_entries": secondary,
            }))?),
            OutputFormat::Table => Ok(self.success(&format!(
                "{} ({}) is valid: {} group(s), {} safeguard(s), \
                 {} primary and {} secondary crosswalk entries",
                definition.name(),
                definition.id(),
                groups,
                safeguards,
                primary,
                secondary
            ))),
            OutputFormat::Quiet => Ok(definition.id().to_string()),
        }
    }

    /// Format both status vocabularies.
    pub fn format_statuses(&self) -> Result<String> {
        let policy: Vec<StatusDefinition> =
            PolicyStatus::ALL.iter().map(|s| s.definition()).collect();
        let implementation: Vec<StatusDefinition> =
            ImplementationStatus::ALL.iter().map(|s| s.definition()).collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "policy": policy,
                "implementation": implementation,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Axis", "Id", "Label", "Value"]);
                let rows = policy
                    .iter()
                    .map(|d| ("policy", d))
                    .chain(implementation.iter().map(|d| ("implementation", d)));
                for (axis, definition) in rows {
                    let value = definition
                        .value
                        .map(|v| format!("{:.2}", v))
                        .unwrap_or_else(|| "N/A".to_string());
                    builder.push_record([axis, definition.id, definition.label, value.as_str()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(policy
                .iter()
                .map(|d| format!("policy\t{}", d.id))
                .chain(implementation.iter().map(|d| format!("implementation\t{}", d.id)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a maturity level, colored by band.
    pub fn maturity(&self, level: MaturityLevel) -> String {
        let text = level.to_string();
        let color = match level.as_u8() {
            0 | 1 => "red",
            2 => "yellow",
            3 => "cyan",
            _ => "green",
        };
        self.colorize(&text, color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} assessment(s)", operation, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
