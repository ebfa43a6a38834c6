//! Posture CLI - Command-line interface for framework maturity scoring.

use clap::Parser;
use posture_cli::commands;
use posture_cli::{Cli, Command, Formatter, Settings};
use posture_store::SqliteStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Log to stderr so JSON output on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> posture_cli::Result<()> {
    // Load settings, writing defaults on first run
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => {
            let path = Settings::path()?;
            if path.exists() {
                Settings::load_from(&path)?
            } else {
                let settings = Settings::default();
                settings.save_to(&path).ok();
                settings
            }
        }
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Validate(args) => commands::execute_validate(args, &formatter)?,
        Command::Statuses => commands::execute_statuses(&formatter)?,
        cmd => {
            // Commands that require the assessment database
            let db_path = settings.database(cli.db)?;
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut store = SqliteStore::new(&db_path)?;

            match cmd {
                Command::Assess(args) => commands::execute_assess(args, &mut store, &formatter)?,
                Command::Apply(args) => commands::execute_apply(args, &mut store, &formatter)?,
                Command::Override(args) => {
                    commands::execute_override(args, &mut store, &formatter)?
                }
                Command::Score(args) => {
                    commands::execute_score(args, &store, settings.tier_filter, &formatter)?
                }
                Command::Validate(_) | Command::Statuses => unreachable!(),
            }
        }
    }

    Ok(())
}
