//! Lint report files: the dashboard's input

use std::path::Path;

use serde::Deserialize;

use super::results::{RuleFunctionResult, RuleResultSet};
use super::rules::{Rule, Severity, CATEGORY_VALIDATION};
use super::spec::{SpecIndex, SpecInfo};
use crate::error::VacuumError;
use crate::rulesets::{self, RulesetMode};

/// A serialized lint run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub spec_info: SpecInfo,
    #[serde(default)]
    pub index: SpecIndex,
    /// Built-in ruleset the run evaluated
    #[serde(default)]
    pub ruleset: RulesetMode,
    /// Custom rule definitions used by the run, in addition to the built-in set
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub results: Vec<RuleFunctionResult>,
}

impl Report {
    pub fn from_yaml(text: &str) -> Result<Self, VacuumError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, VacuumError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a report, choosing the parser by extension (`.json`, else YAML).
    pub fn load(path: &Path) -> Result<Self, VacuumError> {
        let text = std::fs::read_to_string(path).map_err(|source| VacuumError::ReportRead {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Group the report's violations by rule, resolving rule ids against
    /// custom rules first and the built-in catalog second.
    pub fn result_set(&self) -> RuleResultSet {
        let builtin = rulesets::builtin_rules();
        let mut evaluated: Vec<Rule> = builtin
            .iter()
            .filter(|r| self.ruleset.includes(r))
            .cloned()
            .collect();
        evaluated.extend(self.rules.iter().cloned());

        RuleResultSet::from_violations(self.results.clone(), evaluated, |id| {
            self.rules
                .iter()
                .chain(builtin.iter())
                .find(|r| r.id == id)
                .cloned()
                .unwrap_or_else(|| {
                    tracing::warn!(rule_id = id, "report references an unknown rule");
                    Rule::new(id, CATEGORY_VALIDATION, Severity::Warn)
                })
        })
    }
}
