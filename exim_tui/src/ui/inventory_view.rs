//! Inventory tab view - item list and editing

use crate::app::{App, ITEM_FIELDS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area);

    draw_items(f, app, chunks[0]);
    super::draw_log(f, app, chunks[1]);
}

fn draw_items(f: &mut Frame, app: &App, area: Rect) {
    let actor = app.actor();

    let header = Row::new(
        std::iter::once("Type")
            .chain(ITEM_FIELDS.iter().map(|(_, title)| *title))
            .map(|t| Cell::from(t).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
    );

    let rows: Vec<Row> = actor
        .inventory
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.selected_item;
            let values = [
                item.data.name.clone(),
                item.data.system.qty.to_string(),
                item.data.system.poids.to_string(),
                item.data.system.description.clone(),
            ];
            let cells = std::iter::once(Cell::from(item.kind().as_str()).style(Style::default().fg(Color::DarkGray)))
                .chain(values.into_iter().enumerate().map(|(col, value)| {
                    let style = if selected && col == app.selected_field {
                        Style::default().fg(Color::Black).bg(Color::Yellow)
                    } else if selected {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Cell::from(value).style(style)
                }));
            Row::new(cells)
        })
        .collect();

    let total_weight = actor.inventory.total_weight();

    let title = Line::from(vec![
        Span::raw(format!(" {} · Inventaire ", actor.name)),
        Span::styled(
            format!("(weight {}, give to {}) ", total_weight, app.other_actor().name),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}
