//! Help tab view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let threshold = app.resolver.rules().failure_threshold;
    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("1-3", "Jump to tab (Carac/Inventaire/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("e", "Switch to the other actor"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section("═══ Aspects ═══"),
        key_line("Enter / Space", "Roll the selected aspect"),
        key_line("i", "Change portrait path"),
        Line::from(""),
        section("═══ Inventory ═══"),
        key_line("←/→", "Select column"),
        key_line("Enter", "Edit selected field"),
        key_line("o / a / r", "New objet / arme / armure"),
        key_line("d / Del", "Delete item"),
        key_line("x", "Give a copy to the other actor (stacks by name and type)"),
        Line::from(""),
        section("═══ Worn dice ═══"),
        Line::from(format!("  A total above {} succeeds.", threshold)),
        Line::from(format!("  A total of {} or less wears the die down one step:", threshold)),
        Line::from("  d20 → d12 → d10 → d8 → d6 → d4 → exhausted"),
        Line::from("  An exhausted aspect cannot be rolled."),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(paragraph, chunks[0]);
    super::draw_log(f, app, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
