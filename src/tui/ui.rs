//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::timer::{Clock, Timer};
use crate::tui::app::{App, Level, Mode};

const STOPPED: Color = Color::Rgb(0xcc, 0x33, 0x33);
const RUNNING: Color = Color::Rgb(0x33, 0xcc, 0x33);

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    // Create layout: header, timers, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timers
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timers(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let running = app.timers.timers().iter().filter(|t| t.is_running()).count();
    let title = format!(
        " Multi-Timer ({} timers, {running} running)  Press space to start/stop ",
        app.timers.len()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Build the spans for one timer row.
fn timer_line<'a, C: Clock>(app: &'a App<C>, index: usize, timer: &'a Timer) -> Line<'a> {
    let is_selected = index == app.selected;
    let now = app.timers.clock().now();

    let label = match (&app.mode, is_selected) {
        (Mode::Editing { buffer }, true) => Span::styled(
            format!("{buffer}▏"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(
            timer.label(),
            Style::default().add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        ),
    };

    let display_bg = if timer.is_running() { RUNNING } else { STOPPED };

    Line::from(vec![
        Span::styled(
            format!("{:>3}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {} ", timer.display(now)),
            Style::default()
                .fg(Color::Black)
                .bg(display_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        label,
        Span::styled(
            format!("  [{} sessions]", timer.sessions().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Render the timer list.
fn render_timers<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .timers
        .timers()
        .iter()
        .enumerate()
        .map(|(i, timer)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(timer_line(app, i, timer)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    if !app.timers.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let (text, color) = app.status.as_ref().map_or(
        (
            "space:start/stop | a:add | r:rename | s:save | e:export | ?:help | q:quit",
            Color::DarkGray,
        ),
        |status| {
            let color = match status.level {
                Level::Info => Color::DarkGray,
                Level::Warning => Color::Yellow,
                Level::Error => Color::Red,
            };
            (status.text.as_str(), color)
        },
    );

    let status = Paragraph::new(text).style(Style::default().fg(color));

    frame.render_widget(status, area);
}
