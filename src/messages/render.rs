//! Render state - data structure sent from App layer to UI for rendering

use crate::app::book_form::FormMessage;
use crate::app::book_list::ListStatus;
use crate::constants::DEFAULT_API_URL;
use crate::messages::ui_events::{InputMode, Panel};
use crate::models::FormField;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub api_url: String,

    // Book list
    pub list_status: ListStatus,
    pub list_scroll: u16,
    pub loaded_at: Option<String>,

    // Form, values in `FormField::ALL` order
    pub form_values: [String; 5],
    pub active_field: FormField,
    pub cursor_position: usize,
    pub form_message: Option<FormMessage>,
    pub is_submitting: bool,

    pub last_time_ms: Option<u64>,
}

impl RenderState {
    pub fn form_value(&self, field: FormField) -> &str {
        FormField::ALL
            .iter()
            .position(|f| *f == field)
            .map(|i| self.form_values[i].as_str())
            .unwrap_or("")
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_panel: Panel::Books,
            input_mode: InputMode::Normal,
            show_help: false,
            api_url: String::from(DEFAULT_API_URL),
            list_status: ListStatus::Loading,
            list_scroll: 0,
            loaded_at: None,
            form_values: Default::default(),
            active_field: FormField::Titulo,
            cursor_position: 0,
            form_message: None,
            is_submitting: false,
            last_time_ms: None,
        }
    }
}
