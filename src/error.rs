//! Error types with fix suggestions

use std::path::PathBuf;

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum VacuumError {
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Report + config loading
    // ─────────────────────────────────────────────────────────────
    #[error("Unable to read report '{}': {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read dashboard config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dashboard config '{}': {details}", path.display())]
    Config { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────
    // Ruleset generation
    // ─────────────────────────────────────────────────────────────
    #[error("please supply 'recommended' or 'all' and a file path to output the ruleset.")]
    MissingRulesetMode,

    #[error("please use 'all' or 'recommended' your choice '{mode}' is not valid")]
    InvalidRulesetMode { mode: String },

    #[error("Unable to write RuleSet file: '{}': {source}", path.display())]
    RulesetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────
    #[error("failed to initialize terminal UI: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("no rule categories to display")]
    NoCategories,
}

impl FixSuggestion for VacuumError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            VacuumError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            VacuumError::JsonParse(_) => {
                Some("Check the report is valid JSON (try parsing with jq)")
            }
            VacuumError::Io(_) => Some("Check file path and permissions"),
            VacuumError::ReportRead { .. } => Some("Check the report path exists and is readable"),
            VacuumError::ConfigRead { .. } => {
                Some("Check the --config path exists and is readable")
            }
            VacuumError::Config { .. } => {
                Some("Config keys: snippet_context, overall_gauge, stats_panel")
            }
            VacuumError::MissingRulesetMode | VacuumError::InvalidRulesetMode { .. } => {
                Some("Run: vacuum generate-ruleset recommended|all <ruleset-output-name>")
            }
            VacuumError::RulesetWrite { .. } => {
                Some("Check the output directory exists and is writable")
            }
            VacuumError::TerminalInit(_) => Some("Run the dashboard from an interactive terminal"),
            VacuumError::NoCategories => None,
        }
    }
}
