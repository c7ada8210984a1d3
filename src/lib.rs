//! vacuum - terminal dashboard for OpenAPI lint results

pub mod config;
pub mod error;
pub mod model;
pub mod rulesets;
pub mod tui;

pub use config::DashboardConfig;
pub use error::{FixSuggestion, VacuumError};
pub use model::{Report, Rule, RuleCategory, RuleResult, RuleResultSet, Severity, SourceDocument};
pub use rulesets::{RuleSet, RulesetMode};
