//! Command handlers - business logic for processing UI events and responses

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Lifecycle
    // ========================

    /// First fetch of the list, issued once when the app starts
    pub fn mount(&mut self) -> Vec<NetworkCommand> {
        self.refresh_books()
    }

    /// Cancel whatever is still in flight before the app goes away
    pub fn unmount(&mut self) -> Vec<NetworkCommand> {
        let mut commands: Vec<NetworkCommand> = self.books.cancel().into_iter().collect();
        if let Some(id) = self.form.pending_request_id.take() {
            commands.push(NetworkCommand::CancelRequest(id));
        }
        commands
    }

    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.input_mode = InputMode::Normal;
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.input_mode = InputMode::Normal;
        self.active_panel = self.active_panel.prev();
    }

    pub fn scroll_up(&mut self) {
        self.books.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.books.scroll_down();
    }

    pub fn resize_list(&mut self, width: u16, height: u16) {
        self.books.set_viewport(width, height);
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel == Panel::Form {
            self.input_mode = InputMode::Editing;
            self.form.select_field(self.form.active_field);
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        if self.input_mode == InputMode::Editing {
            self.form.enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.input_mode == InputMode::Editing {
            self.form.delete_char();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.form.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.form.move_cursor_right();
    }

    // ========================
    // Requests
    // ========================

    /// Explicit refresh of the book list
    pub fn refresh_books(&mut self) -> Vec<NetworkCommand> {
        let id = self.next_id();
        self.books.refresh(id)
    }

    pub fn submit_form(&mut self) -> Option<NetworkCommand> {
        self.stop_editing();
        let id = self.next_id();
        self.form.submit(id)
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response; returns follow-up commands (a list refresh
    /// after a successful create).
    pub fn handle_response(&mut self, response: NetworkResponse) -> Vec<NetworkCommand> {
        match response {
            NetworkResponse::BooksLoaded { id, books, time_ms } => {
                if self.books.handle_loaded(id, books) {
                    self.last_time_ms = Some(time_ms);
                }
                Vec::new()
            }
            NetworkResponse::BooksFailed { id, message, time_ms } => {
                if self.books.handle_failed(id, message) {
                    self.last_time_ms = Some(time_ms);
                }
                Vec::new()
            }
            NetworkResponse::BookCreated { id, book, time_ms } => {
                if self.form.handle_created(id, book) {
                    self.last_time_ms = Some(time_ms);
                    self.refresh_books()
                } else {
                    Vec::new()
                }
            }
            NetworkResponse::CreateFailed { id, message, time_ms } => {
                if self.form.handle_failed(id, message) {
                    self.last_time_ms = Some(time_ms);
                }
                Vec::new()
            }
        }
    }
}
