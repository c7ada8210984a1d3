//! TUI Module - lint results dashboard
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     UI LAYER (widgets/, layout.rs)                  │
//! │  Grid rebuilt per frame. Pure rendering over Dashboard.             │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ Dashboard (read only)
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │             DOMAIN LAYER (state.rs, tabs.rs, scroll.rs)             │
//! │  Action → state mutation → derived panels. No IO.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ crossterm Event channel
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       CONNECTOR LAYER (app.rs)                      │
//! │  Terminal session, input thread, render loop.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod events;
mod gauge;
mod layout;
mod scroll;
mod state;
mod tabs;
mod theme;

pub mod widgets;

pub use app::{event_loop, TuiApp};
pub use events::Action;
pub use gauge::{CategoryGauge, HealthBand};
pub use layout::{dashboard_grid, Grid, Pane};
pub use scroll::{ScrollList, ScrollOp};
pub use state::{Dashboard, DashboardInput, Mode, Outcome};
pub use tabs::{ListKind, Panels, SnippetLine, TabbedView};
pub use theme::Theme;

use crate::config::DashboardConfig;
use crate::model::{Report, SourceDocument};

/// Run the TUI dashboard
pub async fn run(
    report: Report,
    source: Option<SourceDocument>,
    config: DashboardConfig,
) -> anyhow::Result<()> {
    TuiApp::new(report, source, config).run().await
}
