//! Dashboard configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::VacuumError;

/// Dashboard settings, loaded from an optional YAML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Lines shown either side of a violation in the snippet pane
    pub snippet_context: usize,

    /// Append an aggregate gauge after the category gauges
    pub overall_gauge: bool,

    /// Show the document stats chart under the gauges
    pub stats_panel: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            snippet_context: 3,
            overall_gauge: true,
            stats_panel: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, VacuumError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = std::fs::read_to_string(path).map_err(|source| VacuumError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml).map_err(|e| VacuumError::Config {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = DashboardConfig::from_yaml("snippet_context: 5").unwrap();
        assert_eq!(config.snippet_context, 5);
        assert!(config.overall_gauge);
        assert!(config.stats_panel);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(DashboardConfig::from_yaml("snippet_lines: 5").is_err());
    }

    #[test]
    fn no_path_is_default() {
        assert_eq!(DashboardConfig::load(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = DashboardConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, VacuumError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}
