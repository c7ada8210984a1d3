//! Lint data the dashboard consumes

mod report;
mod results;
mod rules;
mod spec;

pub use report::Report;
pub use results::{Position, Range, RuleFunctionResult, RuleResult, RuleResultSet};
pub use rules::{
    rule_categories_ordered, Rule, RuleAction, RuleCategory, RuleType, Severity,
    CATEGORY_DESCRIPTIONS, CATEGORY_EXAMPLES, CATEGORY_INFO, CATEGORY_OPERATIONS,
    CATEGORY_SCHEMAS, CATEGORY_SECURITY, CATEGORY_TAGS, CATEGORY_VALIDATION,
};
pub use spec::{SourceDocument, SpecIndex, SpecInfo};
