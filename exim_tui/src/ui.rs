//! UI rendering

mod aspects_view;
mod help_view;
mod inventory_view;

use crate::app::{App, LogKind, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab() {
        Tab::Carac => aspects_view::draw(f, app, chunks[1]),
        Tab::Inventaire => inventory_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    if let Some(edit) = &app.edit {
        let line = Line::from(vec![
            Span::styled("Edit: ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}▏", edit.buffer), Style::default().fg(Color::White)),
            Span::styled("   [Enter] Save  [Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Edit "));
        f.render_widget(paragraph, area);
        return;
    }

    let common_keys = vec![("Tab", "Next tab"), ("e", "Other actor"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab() {
        Tab::Carac => vec![("↑/↓", "Select"), ("Enter/Space", "Roll"), ("i", "Portrait")],
        Tab::Inventaire => vec![
            ("↑/↓ ←/→", "Select"),
            ("Enter", "Edit"),
            ("o/a/r", "New objet/arme/armure"),
            ("d", "Delete"),
            ("x", "Give"),
        ],
        Tab::Help => vec![("↑/↓", "Scroll log")],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_tab();
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" EXIM · {} ", app.actor().name)),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Sheet log panel, shared by the sheet tabs
pub fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .log
        .lines
        .iter()
        .skip(app.log.scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = match line.kind {
                LogKind::Info => Style::default().fg(Color::White),
                LogKind::Warn => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                LogKind::Success => Style::default().fg(Color::Green),
                LogKind::Failure => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(line.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(list, area);
}
