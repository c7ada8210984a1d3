//! TUI Widgets - pane renderers
//!
//! Each pane is a stateless renderer over `Dashboard`. The layout is resolved
//! fresh on every frame and every pane is drawn from scratch.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::gauge::CategoryGauge;
use super::layout::Pane;
use super::state::{Dashboard, Mode};
use super::theme::Theme;

/// Draw the whole dashboard.
pub fn render(frame: &mut Frame, dashboard: &Dashboard<'_>, theme: &Theme) {
    for (pane, area) in dashboard.layout().resolve(frame.area()) {
        match pane {
            Pane::Gauge(i) => {
                if let Some(gauge) = dashboard.gauges().get(i) {
                    render_gauge(frame, area, gauge, theme);
                }
            }
            Pane::Stats => render_stats(frame, area, dashboard, theme),
            Pane::Tabs => render_tabs(frame, area, dashboard, theme),
            Pane::Description => render_description(frame, area, dashboard, theme),
            Pane::Rules => render_rules(frame, area, dashboard, theme),
            Pane::Violations => render_violations(frame, area, dashboard, theme),
            Pane::ViolationDetail => render_violation_detail(frame, area, dashboard, theme),
            Pane::Snippet => render_snippet(frame, area, dashboard, theme),
            Pane::Fix => render_fix(frame, area, dashboard, theme),
        }
    }
}

fn panel(title: String, focused: bool, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(title)
}

fn render_gauge(frame: &mut Frame, area: Rect, gauge: &CategoryGauge, theme: &Theme) {
    let color = theme.band_color(gauge.band());
    let widget = Gauge::default()
        .block(panel(format!(" {} ", gauge.label), false, theme))
        .gauge_style(Style::default().fg(color))
        .percent(gauge.score())
        .label(format!("{}%", gauge.score()));
    frame.render_widget(widget, area);
}

fn render_stats(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let stats = dashboard.index().stats();
    let chart = BarChart::default()
        .block(panel(format!(" {} ", dashboard.info().summary()), false, theme))
        .data(&stats[..])
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.accent_blue))
        .value_style(theme.header())
        .label_style(theme.dimmed());
    frame.render_widget(chart, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let tabs = dashboard.tabs();
    let titles: Vec<Line> = tabs
        .categories()
        .iter()
        .map(|c| Line::from(c.name.clone()))
        .collect();

    let keys: &[(&str, &str)] = match dashboard.mode() {
        Mode::Browsing => &[
            ("[←→]", " category  "),
            ("[↑↓]", " rule  "),
            ("[enter]", " inspect  "),
            ("[q]", " quit "),
        ],
        Mode::ViolationDetail => &[
            ("[↑↓]", " violation  "),
            ("[^d/^u]", " scroll  "),
            ("[esc]", " back  "),
            ("[q]", " quit "),
        ],
    };
    let mut hints = vec![Span::raw(" ")];
    for (key, label) in keys {
        hints.push(Span::styled(*key, theme.accent()));
        hints.push(Span::styled(*label, theme.dimmed()));
    }

    let heading = match dashboard.info().title.as_deref() {
        Some(title) if !title.is_empty() => {
            format!(" vacuum │ {} │ {} ", title, dashboard.mode())
        }
        _ => format!(" vacuum │ {} ", dashboard.mode()),
    };

    let widget = Tabs::new(titles)
        .select(tabs.selected_category())
        .style(theme.dimmed())
        .highlight_style(theme.highlight())
        .divider(" │ ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.dimmed())
                .title(Span::styled(heading, theme.header()))
                .title_bottom(Line::from(hints)),
        );
    frame.render_widget(widget, area);
}

fn render_description(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let category = &dashboard.tabs().panels().category;
    let lines = vec![
        Line::from(Span::styled(category.description.clone(), theme.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled(category.rule_count.to_string(), theme.accent()),
            Span::styled(" rules fired, ", theme.dimmed()),
            Span::styled(category.violation_count.to_string(), theme.accent()),
            Span::styled(" violations", theme.dimmed()),
        ]),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(format!(" {} ", category.name), false, theme));
    frame.render_widget(widget, area);
}

fn render_rules(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let tabs = dashboard.tabs();
    let rules = tabs.rules();
    let focused = dashboard.mode() == Mode::Browsing;
    let block = panel(format!(" Rules ({}) ", rules.len()), focused, theme);

    if rules.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("✓ nothing fired in {}", tabs.current_category().name),
            theme.dimmed(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rules
        .items()
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", r.rule.severity.icon()),
                    theme.severity_style(r.rule.severity),
                ),
                Span::styled(r.rule.id.clone(), theme.text()),
                Span::styled(format!(" ({})", r.violations.len()), theme.dimmed()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            theme.selected_row()
        } else {
            theme.selected_row_inactive()
        })
        .highlight_symbol("▶ ");
    let mut state = ListState::default()
        .with_offset(rules.offset())
        .with_selected(Some(tabs.selected_rule()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_violations(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let tabs = dashboard.tabs();
    let violations = tabs.violations();
    let focused = dashboard.mode() == Mode::ViolationDetail;
    let block = panel(format!(" Violations ({}) ", violations.len()), focused, theme);
    let width = usize::from(area.width.saturating_sub(14));

    let items: Vec<ListItem> = violations
        .items()
        .iter()
        .map(|v| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>8} ", v.location()), theme.dimmed()),
                Span::styled(utils::truncate(&v.message, width), theme.text()),
            ]))
        })
        .collect();

    let selected = (!violations.is_empty()).then_some(tabs.selected_violation());
    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            theme.selected_row()
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "▶ " } else { "  " });
    let mut state = ListState::default()
        .with_offset(violations.offset())
        .with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_violation_detail(
    frame: &mut Frame,
    area: Rect,
    dashboard: &Dashboard<'_>,
    theme: &Theme,
) {
    let panels = dashboard.tabs().panels();
    let lines = match (&panels.violation, &panels.rule) {
        (Some(v), rule) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} {} ", v.severity.icon(), v.severity),
                        theme.severity_style(v.severity),
                    ),
                    Span::styled(v.rule_id.clone(), theme.header()),
                ]),
                Line::from(Span::styled(v.message.clone(), theme.text())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Path:     ", theme.dimmed()),
                    Span::styled(v.path.clone(), theme.accent()),
                ]),
                Line::from(vec![
                    Span::styled("Location: ", theme.dimmed()),
                    Span::styled(v.location.clone(), theme.accent()),
                ]),
            ];
            if let Some(rule) = rule.as_ref().filter(|r| !r.description.is_empty()) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(rule.description.clone(), theme.dimmed())));
            }
            lines
        }
        (None, _) => vec![Line::from(Span::styled(
            "No violation selected",
            theme.dimmed(),
        ))],
    };

    let focused = dashboard.mode() == Mode::ViolationDetail;
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" Violation ".to_string(), focused, theme));
    frame.render_widget(widget, area);
}

fn render_snippet(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let snippet = &dashboard.tabs().panels().snippet;
    let lines: Vec<Line> = if snippet.is_empty() {
        vec![Line::from(Span::styled("No source available", theme.dimmed()))]
    } else {
        snippet
            .iter()
            .map(|l| {
                let style = if l.highlighted {
                    theme.warning()
                } else {
                    theme.text()
                };
                Line::from(vec![
                    Span::styled(format!("{:>5} │ ", l.number), theme.dimmed()),
                    Span::styled(l.text.clone(), style),
                ])
            })
            .collect()
    };
    let widget = Paragraph::new(lines).block(panel(" Source ".to_string(), false, theme));
    frame.render_widget(widget, area);
}

fn render_fix(frame: &mut Frame, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let line = match &dashboard.tabs().panels().fix {
        Some(fix) => Line::from(Span::styled(fix.clone(), theme.text())),
        None => Line::from(Span::styled("No suggested fix", theme.dimmed())),
    };
    let widget = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(panel(" How to fix ".to_string(), false, theme));
    frame.render_widget(widget, area);
}

/// Common widget utilities
pub mod utils {
    /// Truncate to `max_len` characters, ending in an ellipsis when cut
    pub fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else if max_len <= 3 {
            s.chars().take(max_len).collect()
        } else {
            let head: String = s.chars().take(max_len - 3).collect();
            format!("{}...", head)
        }
    }
}
