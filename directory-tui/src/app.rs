use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::widgets::TableState;
use ratatui::DefaultTerminal;

use std::time::{Duration, Instant};

use directory_rpc::{DirectoryApi, NewUser, SeedOutcome, User};
use directory_service::config::UiConfig;
use directory_service::Field;

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browse active users
    UserTable,
    /// Modal form for a new user
    AddUser,
    /// Waiting for the operator to confirm a delete
    ConfirmDelete,
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub api: DirectoryApi,
    /// Active users as last read from the directory
    pub users: Vec<User>,
    pub selected_index: usize,
    /// Scroll offset and highlight for the user table, kept in step with `selected_index`
    pub table_state: TableState,
    pub should_quit: bool,

    pub form: FormState,
    pub pending_delete: Option<User>,

    pub status: Option<StatusMessage>,
    pub status_ttl: Duration,
}

// =============================================================================
// Form State
// =============================================================================

#[derive(Debug, Clone)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub focus: Field,
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            focus: Field::FirstName,
            error: None,
        }
    }
}

impl FormState {
    pub const FIELDS: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
        }
    }

    pub fn push(&mut self, c: char) {
        self.error = None;
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn pop(&mut self) {
        self.error = None;
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Field::FirstName => Field::LastName,
            Field::LastName => Field::Email,
            Field::Email => Field::FirstName,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            Field::FirstName => Field::Email,
            Field::LastName => Field::FirstName,
            Field::Email => Field::LastName,
        };
    }

    pub fn candidate(&self) -> NewUser {
        NewUser::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Status Line
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// `None` keeps the message until it is replaced
    pub expires_at: Option<Instant>,
}

impl StatusMessage {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

// =============================================================================
// App Implementation
// =============================================================================

impl App {
    pub fn new(api: DirectoryApi, ui_config: &UiConfig) -> Self {
        let status = match api.seed_outcome() {
            Some(SeedOutcome::Failed(reason)) => Some(StatusMessage {
                text: format!("Could not load users: {}", reason),
                kind: StatusKind::Warning,
                expires_at: None,
            }),
            _ => None,
        };

        let mut app = Self {
            state: AppState::UserTable,
            api,
            users: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            should_quit: false,
            form: FormState::default(),
            pending_delete: None,
            status,
            status_ttl: Duration::from_secs(ui_config.status_message_secs),
        };
        app.refresh_users();
        app
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Drop the status message once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    pub fn refresh_users(&mut self) {
        self.users = self.api.user_handler().list_active();
        if self.selected_index >= self.users.len() {
            self.selected_index = self.users.len().saturating_sub(1);
        }
        self.sync_table_state();
    }

    fn sync_table_state(&mut self) {
        let selected = (!self.users.is_empty()).then_some(self.selected_index);
        self.table_state.select(selected);
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.sync_table_state();
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.users.len().saturating_sub(1) {
            self.selected_index += 1;
        }
        self.sync_table_state();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Add User
    // =========================================================================

    pub fn open_form(&mut self) {
        self.form.clear();
        self.state = AppState::AddUser;
    }

    pub fn close_form(&mut self) {
        self.form.clear();
        self.state = AppState::UserTable;
    }

    pub fn submit_form(&mut self) {
        self.submit_form_at(Instant::now());
    }

    pub fn submit_form_at(&mut self, now: Instant) {
        let candidate = self.form.candidate();
        match self.api.user_handler_mut().add_user(candidate) {
            Ok(user) => {
                self.close_form();
                self.refresh_users();
                if let Some(index) = self.users.iter().position(|u| u.id == user.id) {
                    self.selected_index = index;
                    self.sync_table_state();
                }
                self.status = Some(StatusMessage {
                    text: "User added successfully.".to_string(),
                    kind: StatusKind::Success,
                    // A ttl too large to represent keeps the message until replaced
                    expires_at: now.checked_add(self.status_ttl),
                });
            }
            Err(e) => {
                // Keep the modal open with the input intact
                self.form.error = Some(e.to_string());
            }
        }
    }

    // =========================================================================
    // Delete User
    // =========================================================================

    pub fn request_delete(&mut self) {
        if let Some(user) = self.selected_user().cloned() {
            self.pending_delete = Some(user);
            self.state = AppState::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(user) = self.pending_delete.take() {
            self.api.user_handler_mut().remove_user(user.id);
            self.refresh_users();
        }
        self.state = AppState::UserTable;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.state = AppState::UserTable;
    }
}
