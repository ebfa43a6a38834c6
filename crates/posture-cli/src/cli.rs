//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Posture - Track and score security-framework maturity.
#[derive(Debug, Parser)]
#[command(name = "posture")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Assessment database path
    #[arg(long, global = true, env = "POSTURE_DB")]
    pub db: Option<PathBuf>,

    /// Settings file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids and levels only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and validate a framework definition
    Validate(ValidateArgs),

    /// Record a policy/implementation assessment for one safeguard
    Assess(AssessArgs),

    /// Bulk-apply a suggestion file
    Apply(ApplyArgs),

    /// Manage group maturity overrides
    Override(OverrideArgs),

    /// Score frameworks against recorded assessments and inventory
    Score(ScoreArgs),

    /// List the policy and implementation status vocabularies
    Statuses,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Framework definition (TOML)
    pub framework: PathBuf,
}

/// Arguments for the assess command.
#[derive(Debug, Parser)]
pub struct AssessArgs {
    /// Safeguard id (e.g. 4.1)
    pub safeguard_id: String,

    /// Policy status id; an empty string clears it
    #[arg(short, long)]
    pub policy: Option<String>,

    /// Implementation status id; an empty string clears it
    #[arg(short, long)]
    pub implementation: Option<String>,

    /// Free-text note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for the apply command.
#[derive(Debug, Parser)]
pub struct ApplyArgs {
    /// JSON file of suggested statuses
    pub file: PathBuf,

    /// Parse and report without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for override management.
#[derive(Debug, Parser)]
pub struct OverrideArgs {
    #[command(subcommand)]
    pub action: OverrideAction,
}

/// Override management actions.
#[derive(Debug, Subcommand)]
pub enum OverrideAction {
    /// Set or replace a group override
    Set {
        /// Group id
        group_id: String,

        /// Maturity level (0-5)
        #[arg(allow_negative_numbers = true)]
        level: i64,

        /// Justification
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Remove a group override
    Clear {
        /// Group id
        group_id: String,
    },
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Framework definitions (TOML)
    #[arg(required = true)]
    pub frameworks: Vec<PathBuf>,

    /// Inventory objects (JSON array)
    #[arg(short, long)]
    pub inventory: Option<PathBuf>,

    /// Highest rollout tier in scope
    #[arg(short, long)]
    pub tier: Option<u8>,

    /// Do not estimate maturity from inventory
    #[arg(long)]
    pub no_estimate: bool,
}
