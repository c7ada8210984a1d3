//! Built-in rulesets and the `generate-ruleset` writer

mod catalog;

pub use catalog::builtin_rules;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VacuumError;
use crate::model::Rule;

pub const DEFAULT_OUTPUT_NAME: &str = "ruleset";
const DOCUMENTATION_URL: &str = "https://quobix.com/vacuum/rulesets";

/// Which slice of the catalog a ruleset contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetMode {
    #[default]
    Recommended,
    All,
}

impl RulesetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::All => "all",
        }
    }

    pub fn includes(&self, rule: &Rule) -> bool {
        match self {
            Self::Recommended => rule.recommended,
            Self::All => true,
        }
    }

    /// Validate the positional CLI argument.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, VacuumError> {
        arg.ok_or(VacuumError::MissingRulesetMode)?.parse()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Recommended => {
                "Recommended rules for a high quality specification. \
                 These rules will ensure a specification is accurate and of high quality."
            }
            Self::All => {
                "Every rule vacuum ships with, including strict style rules \
                 that are not part of the recommended set."
            }
        }
    }
}

impl FromStr for RulesetMode {
    type Err = VacuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "all" => Ok(Self::All),
            other => Err(VacuumError::InvalidRulesetMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RulesetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ruleset document, keyed by rule id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub documentation_url: String,
    pub description: String,
    pub rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    pub fn generate(mode: RulesetMode) -> Self {
        let rules = builtin_rules()
            .into_iter()
            .filter(|r| mode.includes(r))
            .map(|r| (r.id.clone(), r))
            .collect();
        Self {
            documentation_url: DOCUMENTATION_URL.to_string(),
            description: mode.description().to_string(),
            rules,
        }
    }

    pub fn to_yaml(&self) -> Result<String, VacuumError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// `<name>-<mode>.yaml`
pub fn output_file_name(name: &str, mode: RulesetMode) -> String {
    format!("{}-{}.yaml", name, mode)
}

/// Generate the ruleset for `mode` and write it into `dir`.
pub fn write_ruleset(mode: RulesetMode, name: &str, dir: &Path) -> Result<PathBuf, VacuumError> {
    let ruleset = RuleSet::generate(mode);
    let yaml = ruleset.to_yaml()?;
    let path = dir.join(output_file_name(name, mode));

    std::fs::write(&path, yaml).map_err(|source| VacuumError::RulesetWrite {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        mode = %mode,
        rules = ruleset.rules.len(),
        path = %path.display(),
        "ruleset written"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_from_arg() {
        assert_eq!(RulesetMode::from_arg(Some("all")).unwrap(), RulesetMode::All);
        assert!(matches!(
            RulesetMode::from_arg(None),
            Err(VacuumError::MissingRulesetMode)
        ));
        assert!(matches!(
            RulesetMode::from_arg(Some("everything")),
            Err(VacuumError::InvalidRulesetMode { .. })
        ));
    }

    #[test]
    fn test_recommended_is_subset_of_all() {
        let recommended = RuleSet::generate(RulesetMode::Recommended);
        let all = RuleSet::generate(RulesetMode::All);
        assert!(recommended.rules.len() < all.rules.len());
        assert!(recommended.rules.keys().all(|k| all.rules.contains_key(k)));
        assert!(recommended.rules.values().all(|r| r.recommended));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("ruleset", RulesetMode::All), "ruleset-all.yaml");
        assert_eq!(
            output_file_name("team", RulesetMode::Recommended),
            "team-recommended.yaml"
        );
    }

    #[test]
    fn test_write_ruleset_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = write_ruleset(RulesetMode::All, "out", dir.path()).unwrap();
        assert!(path.ends_with("out-all.yaml"));

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: RuleSet = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, RuleSet::generate(RulesetMode::All));
        assert!(text.contains("documentationUrl"));
    }

    #[test]
    fn test_write_ruleset_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_ruleset(RulesetMode::Recommended, "out", &missing).unwrap_err();
        assert!(matches!(err, VacuumError::RulesetWrite { .. }));
    }
}
