use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppState};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit();
            return Ok(());
        }

        match self.state {
            AppState::UserTable => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Char('a') => self.open_form(),
                KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
                _ => {}
            },
            AppState::AddUser => match key_event.code {
                KeyCode::Esc => self.close_form(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
                KeyCode::Backspace => self.form.pop(),
                KeyCode::Char(c) => self.form.push(c),
                _ => {}
            },
            AppState::ConfirmDelete => match key_event.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => self.cancel_delete(),
                _ => {}
            },
        }
        Ok(())
    }
}
