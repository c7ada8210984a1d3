//! TabbedView - category tabs and everything derived from the selection
//!
//! Every mutation ends in `recompute`, which rebuilds the rule list, the
//! violation list and the detail panels from the current indices. Nothing is
//! patched in place, so the indices can never point past the data on screen.

use crate::error::VacuumError;
use crate::model::{
    RuleCategory, RuleFunctionResult, RuleResult, RuleResultSet, Severity, SourceDocument,
};

use super::scroll::{ScrollList, ScrollOp};

/// Which list a movement applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Rules,
    Violations,
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived panels
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPanel {
    pub name: String,
    pub description: String,
    pub rule_count: usize,
    pub violation_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePanel {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub given: String,
    pub violation_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationPanel {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub path: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub highlighted: bool,
}

/// Everything the detail panes show for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panels {
    pub category: CategoryPanel,
    pub rule: Option<RulePanel>,
    pub violation: Option<ViolationPanel>,
    pub snippet: Vec<SnippetLine>,
    pub fix: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// TabbedView
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabbedView<'a> {
    results: &'a RuleResultSet,
    source: Option<&'a SourceDocument>,
    categories: Vec<RuleCategory>,
    snippet_context: usize,

    selected_category: usize,
    selected_rule: usize,
    selected_violation: usize,

    rules: ScrollList<&'a RuleResult>,
    violations: ScrollList<&'a RuleFunctionResult>,
    panels: Panels,
}

impl<'a> TabbedView<'a> {
    pub fn new(
        categories: Vec<RuleCategory>,
        results: &'a RuleResultSet,
        source: Option<&'a SourceDocument>,
        snippet_context: usize,
    ) -> Result<Self, VacuumError> {
        if categories.is_empty() {
            return Err(VacuumError::NoCategories);
        }
        let mut view = Self {
            results,
            source,
            categories,
            snippet_context,
            selected_category: 0,
            selected_rule: 0,
            selected_violation: 0,
            rules: ScrollList::default(),
            violations: ScrollList::default(),
            panels: Panels::default(),
        };
        view.select_category(0);
        Ok(view)
    }

    pub fn categories(&self) -> &[RuleCategory] {
        &self.categories
    }

    pub fn selected_category(&self) -> usize {
        self.selected_category
    }

    pub fn selected_rule(&self) -> usize {
        self.selected_rule
    }

    pub fn selected_violation(&self) -> usize {
        self.selected_violation
    }

    pub fn rules(&self) -> &ScrollList<&'a RuleResult> {
        &self.rules
    }

    pub fn violations(&self) -> &ScrollList<&'a RuleFunctionResult> {
        &self.violations
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn current_category(&self) -> &RuleCategory {
        &self.categories[self.selected_category]
    }

    pub fn current_rule(&self) -> Option<&'a RuleResult> {
        self.rules.items().get(self.selected_rule).copied()
    }

    pub fn current_violation(&self) -> Option<&'a RuleFunctionResult> {
        self.violations.items().get(self.selected_violation).copied()
    }

    /// Whether the selected rule has anything to inspect
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn select_category(&mut self, index: usize) {
        self.selected_category = index.min(self.categories.len() - 1);
        self.selected_rule = 0;
        self.selected_violation = 0;
        self.rules.reset();
        self.violations.reset();
        self.recompute();
        tracing::debug!(
            category = %self.current_category().id,
            rules = self.rules.len(),
            "category selected"
        );
    }

    pub fn select_rule(&mut self, index: usize) {
        if self.rules.is_empty() {
            return;
        }
        self.selected_rule = index.min(self.rules.len() - 1);
        self.selected_violation = 0;
        self.violations.reset();
        self.recompute();
    }

    /// Previous tab; returns false at the first tab, where nothing changes.
    pub fn focus_left(&mut self) -> bool {
        if self.selected_category == 0 {
            return false;
        }
        self.select_category(self.selected_category - 1);
        true
    }

    /// Next tab; returns false at the last tab, where nothing changes.
    pub fn focus_right(&mut self) -> bool {
        if self.selected_category + 1 >= self.categories.len() {
            return false;
        }
        self.select_category(self.selected_category + 1);
        true
    }

    /// Move the selection of `list` by `delta` rows, keeping it on screen.
    pub fn move_selection(&mut self, list: ListKind, delta: isize) {
        match list {
            ListKind::Rules => {
                if let Some(next) = step(self.selected_rule, delta, self.rules.len()) {
                    if next != self.selected_rule {
                        self.select_rule(next);
                    }
                }
            }
            ListKind::Violations => {
                if let Some(next) = step(self.selected_violation, delta, self.violations.len()) {
                    self.selected_violation = next;
                    self.recompute();
                }
            }
        }
    }

    /// Scroll `list`, then drag its selection into the new viewport.
    pub fn scroll(&mut self, list: ListKind, op: ScrollOp) {
        match list {
            ListKind::Rules => {
                if self.rules.is_empty() {
                    return;
                }
                self.rules.apply(op);
                let next = self.rules.clamp_into_view(self.selected_rule);
                if next != self.selected_rule {
                    self.selected_rule = next;
                    self.selected_violation = 0;
                    self.violations.reset();
                }
            }
            ListKind::Violations => {
                if self.violations.is_empty() {
                    return;
                }
                self.violations.apply(op);
                self.selected_violation = self.violations.clamp_into_view(self.selected_violation);
            }
        }
        self.recompute();
    }

    /// Back to the first violation of the current rule.
    pub fn reset_violation(&mut self) {
        self.selected_violation = 0;
        self.violations.reset();
        self.recompute();
    }

    /// Row capacity of each list, from the current layout.
    pub fn set_viewports(&mut self, rules: usize, violations: usize) {
        self.rules.set_viewport(rules);
        self.violations.set_viewport(violations);
        self.recompute();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derivation
    // ─────────────────────────────────────────────────────────────────────

    fn recompute(&mut self) {
        let rules = self
            .results
            .rules_in_category(&self.categories[self.selected_category].id);
        self.rules.replace_items(rules);
        self.selected_rule = self.selected_rule.min(self.rules.len().saturating_sub(1));

        let violations: Vec<&'a RuleFunctionResult> = self
            .current_rule()
            .map(|r| r.violations.iter().collect())
            .unwrap_or_default();
        self.violations.replace_items(violations);
        self.selected_violation = self
            .selected_violation
            .min(self.violations.len().saturating_sub(1));

        self.rules.ensure_visible(self.selected_rule);
        self.violations.ensure_visible(self.selected_violation);
        self.panels = self.build_panels();
    }

    fn build_panels(&self) -> Panels {
        let category = self.current_category();
        let rule = self.current_rule();
        let violation = self.current_violation();

        Panels {
            category: CategoryPanel {
                name: category.name.clone(),
                description: category.description.clone(),
                rule_count: self.rules.len(),
                violation_count: self.rules.items().iter().map(|r| r.violations.len()).sum(),
            },
            rule: rule.map(|r| RulePanel {
                id: r.rule.id.clone(),
                description: r.rule.description.clone(),
                severity: r.rule.severity,
                given: r.rule.given.clone(),
                violation_count: r.violations.len(),
            }),
            violation: rule.zip(violation).map(|(r, v)| ViolationPanel {
                rule_id: r.rule.id.clone(),
                severity: r.rule.severity,
                message: v.message.clone(),
                path: v.path.clone(),
                location: v.location(),
            }),
            snippet: violation.map(|v| self.snippet(v)).unwrap_or_default(),
            fix: violation.and_then(|v| {
                v.suggested_fix.clone().or_else(|| {
                    rule.map(|r| r.rule.how_to_fix.clone())
                        .filter(|fix| !fix.is_empty())
                })
            }),
        }
    }

    fn snippet(&self, violation: &RuleFunctionResult) -> Vec<SnippetLine> {
        let (Some(source), Some(range)) = (self.source, violation.range) else {
            return Vec::new();
        };
        let target = range.start.line;
        let lines = source.lines();
        if target >= lines.len() {
            return Vec::new();
        }
        let start = target.saturating_sub(self.snippet_context);
        let end = target
            .saturating_add(self.snippet_context)
            .saturating_add(1)
            .min(lines.len());
        (start..end)
            .map(|i| SnippetLine {
                number: i + 1,
                text: lines[i].clone(),
                highlighted: i == target,
            })
            .collect()
    }
}

/// `current + delta` clamped into `[0, len)`; `None` for an empty list.
fn step(current: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = current.saturating_add_signed(delta);
    Some(next.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Range, Rule};

    fn violation(rule_id: &str, n: usize) -> RuleFunctionResult {
        RuleFunctionResult {
            rule_id: rule_id.to_string(),
            message: format!("{} violation {}", rule_id, n),
            path: format!("$.paths[{}]", n),
            range: Some(Range {
                start: Position {
                    line: n,
                    character: 0,
                },
                end: Position::default(),
            }),
            suggested_fix: None,
        }
    }

    /// A: rule1 (3 violations), rule2 (1 violation). B: no rules.
    fn fixture() -> (Vec<RuleCategory>, RuleResultSet) {
        let categories = vec![
            RuleCategory::new("a", "Alpha", "first"),
            RuleCategory::new("b", "Beta", "second"),
        ];
        let mut violations: Vec<RuleFunctionResult> =
            (0..3).map(|n| violation("rule1", n)).collect();
        violations.push(violation("rule2", 0));
        let results = RuleResultSet::from_violations(violations, Vec::new(), |id| {
            let mut rule = Rule::new(id, "a", Severity::Error);
            rule.how_to_fix = format!("fix {}", id);
            rule
        });
        (categories, results)
    }

    #[test]
    fn test_empty_categories_rejected() {
        let results = RuleResultSet::default();
        assert!(matches!(
            TabbedView::new(Vec::new(), &results, None, 3),
            Err(VacuumError::NoCategories)
        ));
    }

    #[test]
    fn test_starts_on_first_rule_and_violation() {
        let (cats, results) = fixture();
        let view = TabbedView::new(cats, &results, None, 3).unwrap();
        assert_eq!(view.selected_category(), 0);
        assert_eq!(view.rules().len(), 2);
        assert_eq!(view.violations().len(), 3);
        assert_eq!(view.current_rule().unwrap().rule.id, "rule1");
        assert_eq!(view.panels().category.violation_count, 4);
        assert_eq!(view.panels().fix.as_deref(), Some("fix rule1"));
    }

    #[test]
    fn test_focus_right_into_empty_category_and_back() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.select_rule(1);

        assert!(view.focus_right());
        assert_eq!(view.selected_category(), 1);
        assert!(view.rules().is_empty());
        assert!(view.violations().is_empty());
        assert!(!view.has_violations());
        assert!(view.panels().violation.is_none());

        assert!(view.focus_left());
        assert_eq!(view.selected_rule(), 0);
        assert_eq!(view.selected_violation(), 0);
        assert_eq!(view.current_rule().unwrap().rule.id, "rule1");
    }

    #[test]
    fn test_focus_at_edges_is_untouched() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.move_selection(ListKind::Rules, 1);
        let before = view.clone();
        assert!(!view.focus_left());
        assert_eq!(view, before);

        view.focus_right();
        let before = view.clone();
        assert!(!view.focus_right());
        assert_eq!(view, before);
    }

    #[test]
    fn test_select_category_is_idempotent() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.select_category(0);
        let once = view.clone();
        view.select_category(0);
        assert_eq!(view, once);
    }

    #[test]
    fn test_select_rule_resets_violation() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.move_selection(ListKind::Violations, 2);
        assert_eq!(view.selected_violation(), 2);

        view.select_rule(1);
        assert_eq!(view.selected_violation(), 0);
        assert_eq!(view.violations().len(), 1);

        view.select_rule(99);
        assert_eq!(view.selected_rule(), 1);
    }

    #[test]
    fn test_select_category_clamps() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.select_category(42);
        assert_eq!(view.selected_category(), 1);
    }

    #[test]
    fn test_move_selection_clamps() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.move_selection(ListKind::Violations, -1);
        assert_eq!(view.selected_violation(), 0);
        view.move_selection(ListKind::Violations, 10);
        assert_eq!(view.selected_violation(), 2);
        view.move_selection(ListKind::Rules, 5);
        assert_eq!(view.selected_rule(), 1);
    }

    #[test]
    fn test_scroll_drags_selection_into_view() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.set_viewports(1, 1);

        view.scroll(ListKind::Violations, ScrollOp::Bottom);
        assert_eq!(view.violations().offset(), 2);
        assert_eq!(view.selected_violation(), 2);

        view.scroll(ListKind::Rules, ScrollOp::PageDown);
        assert_eq!(view.selected_rule(), 1);
        assert_eq!(view.selected_violation(), 0);
    }

    #[test]
    fn test_selection_stays_visible() {
        let (cats, results) = fixture();
        let mut view = TabbedView::new(cats, &results, None, 3).unwrap();
        view.set_viewports(1, 2);
        view.move_selection(ListKind::Violations, 2);
        assert!(view.violations().visible_range().contains(&2));
        view.reset_violation();
        assert_eq!(view.violations().offset(), 0);
    }

    #[test]
    fn test_snippet_marks_violation_line() {
        let (cats, results) = fixture();
        let doc = SourceDocument::new("l1\nl2\nl3\nl4\nl5\nl6");
        let mut view = TabbedView::new(cats, &results, Some(&doc), 1).unwrap();
        view.move_selection(ListKind::Violations, 2);

        let snippet = &view.panels().snippet;
        let numbers: Vec<usize> = snippet.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
        assert!(snippet[1].highlighted);
        assert_eq!(snippet[1].text, "l3");
    }

    #[test]
    fn test_snippet_with_huge_context_shows_whole_source() {
        let (cats, results) = fixture();
        let doc = SourceDocument::new("l1\nl2\nl3");
        let config = crate::config::DashboardConfig::from_yaml(
            "snippet_context: 18446744073709551615",
        )
        .unwrap();
        let mut view = TabbedView::new(cats, &results, Some(&doc), config.snippet_context).unwrap();
        view.move_selection(ListKind::Violations, 1);

        let snippet = &view.panels().snippet;
        let numbers: Vec<usize> = snippet.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(snippet[1].highlighted);
    }
}
