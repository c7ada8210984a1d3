//! Declarative layout tree
//!
//! The dashboard describes its screen as rows and columns with relative
//! weights, rebuilt from state on every frame. Resolving the tree against a
//! terminal area yields one rectangle per named pane.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Named widget slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Gauge(usize),
    Stats,
    Tabs,
    Description,
    Rules,
    Violations,
    ViolationDetail,
    Snippet,
    Fix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid {
    Split {
        direction: Direction,
        children: Vec<(u32, Grid)>,
    },
    Pane(Pane),
    Empty,
}

impl Grid {
    /// Children stacked top to bottom
    pub fn rows(children: Vec<(u32, Grid)>) -> Self {
        Self::Split {
            direction: Direction::Vertical,
            children,
        }
    }

    /// Children side by side
    pub fn cols(children: Vec<(u32, Grid)>) -> Self {
        Self::Split {
            direction: Direction::Horizontal,
            children,
        }
    }

    /// Rectangles for every pane in the tree, in tree order.
    pub fn resolve(&self, area: Rect) -> Vec<(Pane, Rect)> {
        let mut out = Vec::new();
        self.resolve_into(area, &mut out);
        out
    }

    /// Rectangle of a single pane, if the tree contains it
    pub fn area_of(&self, area: Rect, pane: Pane) -> Option<Rect> {
        self.resolve(area)
            .into_iter()
            .find(|(p, _)| *p == pane)
            .map(|(_, r)| r)
    }

    fn resolve_into(&self, area: Rect, out: &mut Vec<(Pane, Rect)>) {
        match self {
            Grid::Pane(pane) => out.push((*pane, area)),
            Grid::Empty => {}
            Grid::Split {
                direction,
                children,
            } => {
                let total: u32 = children.iter().map(|(w, _)| *w).sum::<u32>().max(1);
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(children.iter().map(|(w, _)| Constraint::Ratio(*w, total)))
                    .split(area);
                for ((_, child), rect) in children.iter().zip(chunks.iter()) {
                    child.resolve_into(*rect, out);
                }
            }
        }
    }
}

/// The dashboard screen for `gauge_count` gauges.
///
/// ```text
/// ┌ gauges ┐ ┌ tabs ─────────────────────────────┐
/// │        │ ├ description ──────┐ ┌ violation ─┤
/// │        │ ├ rules ────────────┤ ├ snippet ───┤
/// ├ stats ─┤ ├ violations ───────┤ ├ fix ───────┤
/// └────────┘ └───────────────────┘ └────────────┘
/// ```
pub fn dashboard_grid(gauge_count: usize, stats: bool) -> Grid {
    let gauges = Grid::rows((0..gauge_count).map(|i| (1, Grid::Pane(Pane::Gauge(i)))).collect());
    let sidebar = if stats {
        Grid::rows(vec![(7, gauges), (3, Grid::Pane(Pane::Stats))])
    } else {
        gauges
    };

    let lists = Grid::rows(vec![
        (2, Grid::Pane(Pane::Description)),
        (4, Grid::Pane(Pane::Rules)),
        (4, Grid::Pane(Pane::Violations)),
    ]);
    let details = Grid::rows(vec![
        (3, Grid::Pane(Pane::ViolationDetail)),
        (4, Grid::Pane(Pane::Snippet)),
        (3, Grid::Pane(Pane::Fix)),
    ]);
    let main = Grid::rows(vec![
        (1, Grid::Pane(Pane::Tabs)),
        (9, Grid::cols(vec![(5, lists), (3, details)])),
    ]);

    Grid::cols(vec![(20, sidebar), (1, Grid::Empty), (79, main)])
}
