//! Aspects tab view - die ranks and rolling

use crate::app::App;
use exim_core::DieRank;
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
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_aspects(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(chunks[1]);

    draw_last_roll(f, app, right[0]);
    super::draw_log(f, app, right[1]);
}

fn draw_aspects(f: &mut Frame, app: &App, area: Rect) {
    let actor = app.actor();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Portrait: ", Style::default().fg(Color::Gray)),
            Span::styled(actor.img.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    for (i, (name, raw)) in actor.aspects().enumerate() {
        let selected = i == app.selected_aspect;
        let (prefix, style) = if selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let rank = raw.parse::<DieRank>().ok();
        let (die_text, die_color) = match rank {
            Some(DieRank::Exhausted) | None => ("exhausted".to_string(), Color::DarkGray),
            Some(r) => (r.to_string(), rank_color(r)),
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:14}", name), style),
            Span::styled(format!("{:10}", die_text), Style::default().fg(die_color)),
            Span::styled(wear_bar(rank), Style::default().fg(die_color)),
        ]));
    }

    if actor.aspects().next().is_none() {
        lines.push(Line::from(Span::styled(
            "  (no aspects)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} · Aspects ", actor.name)),
    );
    f.render_widget(paragraph, area);
}

fn draw_last_roll(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.last_card {
        Some(card) => {
            let color = if card.outcome.succeeded { Color::Green } else { Color::Red };
            vec![
                Line::from(Span::styled(
                    card.headline(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(card.body(), Style::default().fg(color))),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No roll yet. Totals of 3 or less wear the die down.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Last roll "));
    f.render_widget(paragraph, area);
}

/// One block per failure the die can still absorb
fn wear_bar(rank: Option<DieRank>) -> String {
    let left = rank.map(DieRank::steps_to_exhaustion).unwrap_or(0);
    format!("{}{}", "█".repeat(left), "░".repeat(6 - left))
}

fn rank_color(rank: DieRank) -> Color {
    match rank {
        DieRank::D20 | DieRank::D12 => Color::Green,
        DieRank::D10 | DieRank::D8 => Color::Yellow,
        DieRank::D6 | DieRank::D4 => Color::Red,
        DieRank::Exhausted => Color::DarkGray,
    }
}
