//! TUI Application - terminal session and render loop

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::events::Action;
use super::state::{Dashboard, DashboardInput, Outcome};
use super::theme::Theme;
use super::widgets::render;
use crate::config::DashboardConfig;
use crate::error::VacuumError;
use crate::model::{
    rule_categories_ordered, Report, RuleCategory, RuleResultSet, SourceDocument, SpecIndex,
    SpecInfo,
};

/// TUI Application
pub struct TuiApp {
    categories: Vec<RuleCategory>,
    results: RuleResultSet,
    index: SpecIndex,
    info: SpecInfo,
    source: Option<SourceDocument>,
    config: DashboardConfig,
    theme: Theme,
}

impl TuiApp {
    pub fn new(report: Report, source: Option<SourceDocument>, config: DashboardConfig) -> Self {
        let results = report.result_set();
        Self {
            categories: rule_categories_ordered(),
            results,
            index: report.index,
            info: report.spec_info,
            source,
            config,
            theme: Theme::new(),
        }
    }

    /// Run the dashboard until the operator quits
    pub async fn run(self) -> anyhow::Result<()> {
        let mut session = TerminalSession::acquire()?;

        let size = session.terminal.size()?;
        let input = DashboardInput {
            categories: &self.categories,
            results: &self.results,
            index: &self.index,
            info: &self.info,
            source: self.source.as_ref(),
        };
        let mut dashboard =
            Dashboard::new(input, &self.config, Rect::new(0, 0, size.width, size.height))?;

        let mut events = spawn_input_reader()?;
        tracing::info!(
            rules = self.results.results().len(),
            violations = self.results.violation_count(),
            "dashboard session started"
        );

        let result =
            event_loop(&mut dashboard, &mut session.terminal, &self.theme, &mut events).await;

        drop(session);
        tracing::info!("dashboard session ended");
        result
    }
}

/// Draw once, then apply one event at a time until quit or the input
/// channel closes. Every handled event gets a full clear and redraw.
/// A failed terminal read ends the session with an error.
pub async fn event_loop<B: Backend>(
    dashboard: &mut Dashboard<'_>,
    terminal: &mut Terminal<B>,
    theme: &Theme,
    events: &mut UnboundedReceiver<io::Result<Event>>,
) -> anyhow::Result<()> {
    terminal.draw(|frame| render(frame, dashboard, theme))?;

    while let Some(event) = events.recv().await {
        let event = event.context("terminal input failed")?;
        let Some(action) = Action::from_event(&event) else {
            continue;
        };
        match dashboard.apply(action) {
            Outcome::Quit => break,
            Outcome::Redraw => {
                terminal.clear()?;
                terminal.draw(|frame| render(frame, dashboard, theme))?;
            }
            Outcome::Ignored => {}
        }
    }

    Ok(())
}

/// Blocking reads happen on their own thread; the loop only sees the channel.
/// The first read error is forwarded, then the thread stops.
fn spawn_input_reader() -> anyhow::Result<UnboundedReceiver<io::Result<Event>>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("vacuum-input".to_string())
        .spawn(move || loop {
            let event = event::read();
            let failed = event.is_err();
            if tx.send(event).is_err() || failed {
                break;
            }
        })
        .context("failed to start input thread")?;
    Ok(rx)
}

/// Raw mode + alternate screen for the lifetime of the value
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn acquire() -> Result<Self, VacuumError> {
        enable_raw_mode().map_err(VacuumError::TerminalInit)?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };
        match setup() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = restore_terminal();
                Err(VacuumError::TerminalInit(e))
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
