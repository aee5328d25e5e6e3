use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use directory_rpc::User;

use crate::ui::layout;

pub fn render(user: &User, frame: &mut Frame) {
    let area = layout::centered_rect(40, 6, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            format!("Delete {}?", user.first_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            user.email.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from("y: Delete   n: Cancel"),
    ];

    let dialog = Paragraph::new(text).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(dialog, area);
}
