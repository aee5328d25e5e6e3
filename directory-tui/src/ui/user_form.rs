use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use directory_service::Field;

use crate::app::FormState;
use crate::ui::layout;

fn label(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name",
        Field::LastName => "Last name",
        Field::Email => "Email",
    }
}

pub fn render(form: &FormState, frame: &mut Frame) {
    let area = layout::centered_rect(60, 15, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add new user")
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .split(inner);

    for (i, field) in FormState::FIELDS.into_iter().enumerate() {
        let focused = form.focus == field;
        let value = if focused {
            format!("{}_", form.value(field))
        } else {
            form.value(field).to_string()
        };

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label(field))
                .border_style(border_style),
        );
        frame.render_widget(input, sections[i]);
    }

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(Line::from(vec![
            Span::styled(
                "✗ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error, Style::default().fg(Color::Red)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(error_line, sections[3]);
    }
}
