//! Rule definitions and the fixed category list

use serde::{Deserialize, Serialize};

pub const CATEGORY_INFO: &str = "information";
pub const CATEGORY_OPERATIONS: &str = "operations";
pub const CATEGORY_TAGS: &str = "tags";
pub const CATEGORY_SCHEMAS: &str = "schemas";
pub const CATEGORY_VALIDATION: &str = "validation";
pub const CATEGORY_DESCRIPTIONS: &str = "descriptions";
pub const CATEGORY_EXAMPLES: &str = "examples";
pub const CATEGORY_SECURITY: &str = "security";

/// A named grouping of rules, used for tabs and health scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl RuleCategory {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// The categories in the order the dashboard shows them.
pub fn rule_categories_ordered() -> Vec<RuleCategory> {
    vec![
        RuleCategory::new(
            CATEGORY_INFO,
            "Contract Information",
            "Information rules check the info object: title, description, contact and \
             license details that tell consumers who owns the contract.",
        ),
        RuleCategory::new(
            CATEGORY_OPERATIONS,
            "Operations",
            "Operation rules check every path operation has a unique, well formed \
             operationId, success responses, tags and parameters that make sense.",
        ),
        RuleCategory::new(
            CATEGORY_TAGS,
            "Tags",
            "Tag rules check that tags are declared globally, described, sorted and used \
             consistently by operations.",
        ),
        RuleCategory::new(
            CATEGORY_SCHEMAS,
            "Schemas",
            "Schema rules check component schemas are typed, used, free of duplicate enum \
             entries and free of sibling properties next to $ref.",
        ),
        RuleCategory::new(
            CATEGORY_VALIDATION,
            "Structure Validation",
            "Validation rules check the document is structurally sound: paths resolve, path \
             parameters are declared, servers are defined and the spec parses.",
        ),
        RuleCategory::new(
            CATEGORY_DESCRIPTIONS,
            "Descriptions",
            "Description rules check operations, parameters and components are described, \
             and that descriptions are not copy pasted or carrying markup.",
        ),
        RuleCategory::new(
            CATEGORY_EXAMPLES,
            "Examples",
            "Example rules check media types and schemas carry examples, and that those \
             examples validate against their schemas.",
        ),
        RuleCategory::new(
            CATEGORY_SECURITY,
            "Security",
            "Security rules check operations reference defined security schemes and that \
             credentials are never sent in the clear.",
        ),
    ]
}

/// How bad a rule violation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    #[serde(alias = "warning")]
    Warn,
    Info,
    Hint,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Error => "✗",
            Self::Warn => "▲",
            Self::Info => "●",
            Self::Hint => "○",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    #[default]
    Validation,
    Style,
}

/// The `then` clause: which function runs against the matched nodes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub function: String,
}

/// A single lint rule definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub recommended: bool,
    #[serde(rename = "type", default)]
    pub rule_type: RuleType,
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub then: RuleAction,
    #[serde(default)]
    pub how_to_fix: String,
}

impl Rule {
    /// Minimal rule, used for ids a report references but nothing defines.
    pub fn new(id: &str, category: &str, severity: Severity) -> Self {
        Self {
            id: id.to_string(),
            description: String::new(),
            category: category.to_string(),
            severity,
            recommended: false,
            rule_type: RuleType::Validation,
            given: "$".to_string(),
            then: RuleAction::default(),
            how_to_fix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_order_is_fixed() {
        let ids: Vec<String> = rule_categories_ordered().into_iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                CATEGORY_INFO,
                CATEGORY_OPERATIONS,
                CATEGORY_TAGS,
                CATEGORY_SCHEMAS,
                CATEGORY_VALIDATION,
                CATEGORY_DESCRIPTIONS,
                CATEGORY_EXAMPLES,
                CATEGORY_SECURITY,
            ]
        );
    }

    #[test]
    fn test_severity_accepts_warning_alias() {
        let sev: Severity = serde_yaml::from_str("warning").unwrap();
        assert_eq!(sev, Severity::Warn);
        assert_eq!(sev.to_string(), "warn");
    }

    #[test]
    fn test_rule_defaults_from_yaml() {
        let yaml = r#"
            id: my-rule
            description: custom
            category: tags
        "#;
        let rule: Rule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.severity, Severity::Warn);
        assert_eq!(rule.rule_type, RuleType::Validation);
        assert!(!rule.recommended);
    }
}
