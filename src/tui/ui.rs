//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::Clock;
use crate::features::focus::{format_duration, SessionKind, TimerState};
use crate::tui::app::App;

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Stats
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Focus => Color::Red,
        SessionKind::Break => Color::Green,
    }
}

fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>, area: Rect) {
    let timer = &app.timer;
    let title = format!(" {} #{} ({}) ", timer.kind(), timer.cycle(), timer.state());
    let color = kind_color(timer.kind());

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

fn render_countdown<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>, area: Rect) {
    let style = match app.timer.state() {
        TimerState::Running => Style::default().add_modifier(Modifier::BOLD),
        TimerState::Paused => Style::default().fg(Color::Yellow),
        TimerState::Idle => Style::default().fg(Color::DarkGray),
    };

    let countdown = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(app.timer.format_remaining(), style)).centered(),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

fn render_progress<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(app.timer.kind())))
        .ratio(app.timer.progress());

    frame.render_widget(gauge, area);
}

fn render_stats<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>, area: Rect) {
    let week = app.timer.weekly_stats();
    let lines = vec![
        Line::from(format!("Cycles today:   {}", app.cycles_today())),
        Line::from(format!(
            "This week:      {} focus, {} breaks",
            week.focus_sessions, week.break_sessions
        )),
        Line::from(format!(
            "Focused:        {}",
            format_duration(chrono::Duration::minutes(i64::from(week.focus_minutes)))
        )),
    ];

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(stats, area);
}

fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<'_, C>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | s:skip | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
