//! vacuum CLI - lint results dashboard

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use vacuum::error::{FixSuggestion, VacuumError};
use vacuum::rulesets::{self, RulesetMode};
use vacuum::{DashboardConfig, Report, SourceDocument};

const LOG_ENV: &str = "VACUUM_LOG";

#[derive(Parser)]
#[command(name = "vacuum")]
#[command(about = "vacuum - browse OpenAPI lint results in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard for a lint report
    Dashboard {
        /// Path to the lint report (.json, otherwise YAML)
        report: PathBuf,

        /// The analyzed specification, for source snippets
        #[arg(short, long)]
        spec: Option<PathBuf>,

        /// Dashboard config file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs here while the dashboard owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Generate a ruleset file from the built-in rules
    GenerateRuleset {
        /// recommended | all
        mode: Option<String>,

        /// Output name, written as <name>-<mode>.yaml
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dashboard {
            report,
            spec,
            config,
            log_file,
        } => match init_dashboard_tracing(log_file.as_deref()) {
            Ok(()) => run_dashboard(&report, spec.as_deref(), config.as_deref()).await,
            Err(e) => Err(e),
        },
        Commands::GenerateRuleset { mode, name } => {
            init_tracing();
            generate_ruleset(mode.as_deref(), name.as_deref()).map_err(anyhow::Error::from)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if let Some(suggestion) = e
            .downcast_ref::<VacuumError>()
            .and_then(|v| v.fix_suggestion())
        {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// stderr belongs to the alternate screen while the dashboard runs.
fn init_dashboard_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

async fn run_dashboard(
    report_path: &Path,
    spec_path: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = DashboardConfig::load(config_path)?;
    let report = Report::load(report_path)?;

    let source = match spec_path {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read spec '{}'", path.display()))?;
            Some(SourceDocument::new(&text))
        }
        None => None,
    };

    tracing::info!(
        report = %report_path.display(),
        violations = report.results.len(),
        "report loaded"
    );

    vacuum::tui::run(report, source, config).await
}

fn generate_ruleset(mode: Option<&str>, name: Option<&str>) -> Result<(), VacuumError> {
    let mode = RulesetMode::from_arg(mode)?;
    let name = name.unwrap_or(rulesets::DEFAULT_OUTPUT_NAME);

    println!(
        "{} Generating RuleSet rules: {}\n\n{}\n",
        "→".cyan(),
        mode.as_str().cyan().bold(),
        mode.description()
    );

    let path = rulesets::write_ruleset(mode, name, Path::new(""))?;

    println!(
        "{} RuleSet generated for '{}', written to '{}'",
        "✓".green(),
        mode,
        path.display()
    );
    Ok(())
}
