use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!("Active Users (Total: {})", app.users.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.users.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from("No active users to display."),
            Line::from(""),
            Line::from("Press 'a' to add one."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let header = Row::new(["First name", "Last name", "Email"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .users
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.first_name.as_str()),
                Cell::from(user.last_name.as_str()),
                Cell::from(user.email.as_str()),
            ])
            .style(Style::default().fg(Color::White))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ],
    )
    .header(header)
    .column_spacing(2)
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(block);

    // The state's offset scrolls the selected row into view
    frame.render_stateful_widget(table, area, &mut app.table_state);
}
