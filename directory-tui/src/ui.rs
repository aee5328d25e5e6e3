pub mod components;
pub mod confirm_dialog;
pub mod layout;
pub mod user_form;
pub mod user_table;

use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());

    components::render_header("User Directory", frame, chunks[0]);
    user_table::render(app, frame, chunks[1]);

    match &app.status {
        Some(status) => components::render_status(status, frame, chunks[2]),
        None => components::render_footer(footer_text(app.state), frame, chunks[2]),
    }

    // Modals draw over the table
    match app.state {
        AppState::UserTable => {}
        AppState::AddUser => user_form::render(&app.form, frame),
        AppState::ConfirmDelete => {
            if let Some(user) = &app.pending_delete {
                confirm_dialog::render(user, frame);
            }
        }
    }
}

fn footer_text(state: AppState) -> &'static str {
    match state {
        AppState::UserTable => "j/k: Navigate | a: Add user | d: Delete | q: Quit",
        AppState::AddUser => "Tab: Next field | Enter: Add | Esc: Close",
        AppState::ConfirmDelete => "y/Enter: Delete | n/Esc: Cancel",
    }
}
