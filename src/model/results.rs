//! Rule evaluation output: violations grouped by the rule that fired them

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::rules::Rule;

/// Zero-based line/character position in the analyzed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// One fired instance of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFunctionResult {
    pub rule_id: String,
    pub message: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl RuleFunctionResult {
    /// 1-based `line:column`, or `-` when the result carries no range.
    pub fn location(&self) -> String {
        match self.range {
            Some(range) => format!("{}:{}", range.start.line + 1, range.start.character + 1),
            None => "-".to_string(),
        }
    }
}

/// A rule that fired, with its ordered violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub rule: Rule,
    pub violations: Vec<RuleFunctionResult>,
}

/// Immutable evaluation output consumed by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleResultSet {
    results: Vec<RuleResult>,
    evaluated: Vec<Rule>,
}

impl RuleResultSet {
    pub fn new(results: Vec<RuleResult>, evaluated: Vec<Rule>) -> Self {
        Self { results, evaluated }
    }

    /// Group flat violations by rule id, keeping first-seen order.
    pub fn from_violations<F>(
        violations: Vec<RuleFunctionResult>,
        evaluated: Vec<Rule>,
        mut resolve: F,
    ) -> Self
    where
        F: FnMut(&str) -> Rule,
    {
        let mut results: Vec<RuleResult> = Vec::new();
        for violation in violations {
            match results.iter_mut().find(|r| r.rule.id == violation.rule_id) {
                Some(existing) => existing.violations.push(violation),
                None => {
                    let rule = resolve(&violation.rule_id);
                    results.push(RuleResult {
                        rule,
                        violations: vec![violation],
                    });
                }
            }
        }
        Self::new(results, evaluated)
    }

    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    /// Fired rules belonging to a category, in result order
    pub fn rules_in_category(&self, category_id: &str) -> Vec<&RuleResult> {
        self.results
            .iter()
            .filter(|r| r.rule.category == category_id)
            .collect()
    }

    pub fn violation_count(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }

    /// Health score in [0, 100]: share of the category's rules that did not fire.
    pub fn calculate_category_health(&self, category_id: &str) -> i32 {
        let failed: HashSet<&str> = self
            .results
            .iter()
            .filter(|r| r.rule.category == category_id && !r.violations.is_empty())
            .map(|r| r.rule.id.as_str())
            .collect();

        let mut evaluated: HashSet<&str> = self
            .evaluated
            .iter()
            .filter(|r| r.category == category_id)
            .map(|r| r.id.as_str())
            .collect();
        evaluated.extend(failed.iter().copied());

        if evaluated.is_empty() {
            return 100;
        }
        let passed = evaluated.len() - failed.len();
        ((passed * 100) / evaluated.len()) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rules::{Severity, CATEGORY_OPERATIONS, CATEGORY_TAGS};

    fn violation(rule_id: &str, message: &str) -> RuleFunctionResult {
        RuleFunctionResult {
            rule_id: rule_id.to_string(),
            message: message.to_string(),
            path: "$.paths".to_string(),
            range: None,
            suggested_fix: None,
        }
    }

    fn resolve(id: &str) -> Rule {
        Rule::new(id, CATEGORY_OPERATIONS, Severity::Warn)
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let set = RuleResultSet::from_violations(
            vec![
                violation("b-rule", "one"),
                violation("a-rule", "two"),
                violation("b-rule", "three"),
            ],
            Vec::new(),
            resolve,
        );
        let ids: Vec<&str> = set.results().iter().map(|r| r.rule.id.as_str()).collect();
        assert_eq!(ids, vec!["b-rule", "a-rule"]);
        assert_eq!(set.results()[0].violations.len(), 2);
        assert_eq!(set.violation_count(), 3);
    }

    #[test]
    fn test_health_counts_passed_rules() {
        let evaluated = vec![
            resolve("a-rule"),
            resolve("b-rule"),
            resolve("c-rule"),
            resolve("d-rule"),
        ];
        let set = RuleResultSet::from_violations(
            vec![violation("a-rule", "x"), violation("a-rule", "y")],
            evaluated,
            resolve,
        );
        assert_eq!(set.calculate_category_health(CATEGORY_OPERATIONS), 75);
    }

    #[test]
    fn test_health_of_unused_category_is_full() {
        let set = RuleResultSet::default();
        assert_eq!(set.calculate_category_health(CATEGORY_TAGS), 100);
    }

    #[test]
    fn test_health_counts_fired_rules_outside_evaluated_set() {
        let set =
            RuleResultSet::from_violations(vec![violation("custom", "x")], Vec::new(), resolve);
        assert_eq!(set.calculate_category_health(CATEGORY_OPERATIONS), 0);
    }

    #[test]
    fn test_location_is_one_based() {
        let mut v = violation("a", "b");
        assert_eq!(v.location(), "-");
        v.range = Some(Range {
            start: Position {
                line: 9,
                character: 2,
            },
            end: Position::default(),
        });
        assert_eq!(v.location(), "10:3");
    }
}
