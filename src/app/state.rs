//! App state - pure data structure with no I/O logic

use crate::app::book_form::BookCreateForm;
use crate::app::book_list::BookListView;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;

/// Root of the application: the list, the form, and the focus around them
pub struct AppState {
    pub books: BookListView,
    pub form: BookCreateForm,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Request sequencing
    pub next_request_id: u64,
    pub last_time_ms: Option<u64>,

    pub api_url: String,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            books: BookListView::new(),
            form: BookCreateForm::new(),
            active_panel: Panel::Books,
            input_mode: InputMode::Normal,
            show_help: false,
            next_request_id: 1,
            last_time_ms: None,
            api_url: api_url.into(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_help: self.show_help,
            api_url: self.api_url.clone(),
            list_status: self.books.status.clone(),
            list_scroll: self.books.scroll,
            loaded_at: self
                .books
                .loaded_at
                .map(|t| t.format("%H:%M:%S").to_string()),
            form_values: self.form_values(),
            active_field: self.form.active_field,
            cursor_position: self.form.cursor_position,
            form_message: self.form.message.clone(),
            is_submitting: self.form.is_submitting(),
            last_time_ms: self.last_time_ms,
        }
    }

    fn form_values(&self) -> [String; 5] {
        crate::models::FormField::ALL.map(|f| self.form.field(f).to_string())
    }
}
