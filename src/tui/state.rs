//! Dashboard - root session state and its transition table
//!
//! `apply` is a pure function of (state, action): it mutates the state and
//! reports whether the loop should redraw, ignore, or quit. Drawing lives in
//! `widgets`, which reads the state and never writes it.

use ratatui::layout::Rect;

use crate::config::DashboardConfig;
use crate::error::VacuumError;
use crate::model::{RuleCategory, RuleResultSet, SourceDocument, SpecIndex, SpecInfo};

use super::events::Action;
use super::gauge::CategoryGauge;
use super::layout::{dashboard_grid, Grid, Pane};
use super::tabs::{ListKind, TabbedView};

/// What the dashboard is focused on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through categories and rules
    Browsing,
    /// Stepping through the selected rule's violations
    ViolationDetail,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browsing => write!(f, "BROWSING"),
            Self::ViolationDetail => write!(f, "VIOLATION"),
        }
    }
}

/// Result of applying one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Redraw,
    Ignored,
}

/// Read-only data a session is built from
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    pub categories: &'a [RuleCategory],
    pub results: &'a RuleResultSet,
    pub index: &'a SpecIndex,
    pub info: &'a SpecInfo,
    pub source: Option<&'a SourceDocument>,
}

#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    tabs: TabbedView<'a>,
    gauges: Vec<CategoryGauge>,
    index: &'a SpecIndex,
    info: &'a SpecInfo,
    mode: Mode,
    area: Rect,
    show_stats: bool,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        input: DashboardInput<'a>,
        config: &DashboardConfig,
        area: Rect,
    ) -> Result<Self, VacuumError> {
        let tabs = TabbedView::new(
            input.categories.to_vec(),
            input.results,
            input.source,
            config.snippet_context,
        )?;
        let gauges =
            CategoryGauge::for_categories(input.categories, input.results, config.overall_gauge);

        let mut dashboard = Self {
            tabs,
            gauges,
            index: input.index,
            info: input.info,
            mode: Mode::Browsing,
            area,
            show_stats: config.stats_panel,
        };
        dashboard.resize(area);
        Ok(dashboard)
    }

    pub fn tabs(&self) -> &TabbedView<'a> {
        &self.tabs
    }

    pub fn gauges(&self) -> &[CategoryGauge] {
        &self.gauges
    }

    pub fn index(&self) -> &SpecIndex {
        self.index
    }

    pub fn info(&self) -> &SpecInfo {
        self.info
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// The screen description for the current state
    pub fn layout(&self) -> Grid {
        dashboard_grid(self.gauges.len(), self.show_stats)
    }

    /// List that up/down and scroll keys act on
    pub fn active_list(&self) -> ListKind {
        match self.mode {
            Mode::Browsing => ListKind::Rules,
            Mode::ViolationDetail => ListKind::Violations,
        }
    }

    /// Re-derive list viewports from the layout at the new size.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        let layout = self.layout();
        let rows = |pane| {
            layout
                .area_of(area, pane)
                .map(|r| usize::from(r.height.saturating_sub(2)))
                .unwrap_or(1)
        };
        self.tabs.set_viewports(rows(Pane::Rules), rows(Pane::Violations));
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match (self.mode, action) {
            (_, Action::Quit) => Outcome::Quit,
            (_, Action::Resize(width, height)) => {
                self.resize(Rect::new(0, 0, width, height));
                Outcome::Redraw
            }
            (_, Action::Scroll(op)) => {
                self.tabs.scroll(self.active_list(), op);
                Outcome::Redraw
            }

            (Mode::Browsing, Action::FocusLeft) => {
                self.tabs.focus_left();
                Outcome::Redraw
            }
            (Mode::Browsing, Action::FocusRight) => {
                self.tabs.focus_right();
                Outcome::Redraw
            }
            (Mode::Browsing, Action::Up) => {
                self.tabs.move_selection(ListKind::Rules, -1);
                Outcome::Redraw
            }
            (Mode::Browsing, Action::Down) => {
                self.tabs.move_selection(ListKind::Rules, 1);
                Outcome::Redraw
            }
            (Mode::Browsing, Action::Confirm) => {
                if self.tabs.has_violations() {
                    self.mode = Mode::ViolationDetail;
                    Outcome::Redraw
                } else {
                    Outcome::Ignored
                }
            }

            (Mode::ViolationDetail, Action::Back) => {
                self.tabs.reset_violation();
                self.mode = Mode::Browsing;
                Outcome::Redraw
            }
            (Mode::ViolationDetail, Action::Up) => {
                self.tabs.move_selection(ListKind::Violations, -1);
                Outcome::Redraw
            }
            (Mode::ViolationDetail, Action::Down) => {
                self.tabs.move_selection(ListKind::Violations, 1);
                Outcome::Redraw
            }

            _ => Outcome::Ignored,
        };

        if outcome != Outcome::Ignored {
            tracing::debug!(?action, mode = %self.mode, ?outcome, "action applied");
        }
        outcome
    }
}
