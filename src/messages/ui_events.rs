//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,
    /// Inner size of the list panel after a terminal resize
    ListResized { width: u16, height: u16 },

    // Book list
    RefreshBooks,

    // Form field selection
    NextField,
    PrevField,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Form actions
    SubmitForm,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Panel {
    Books,
    Form,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Books => Panel::Form,
            Panel::Form => Panel::Books,
        }
    }

    pub fn prev(&self) -> Panel {
        // Two panels: cycling backwards lands on the same one as forwards
        self.next()
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => handle_normal_keys(key, active_panel),
        InputMode::Editing => handle_editing_keys(key),
    }
}

fn handle_normal_keys(key: KeyEvent, active_panel: Panel) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        KeyCode::Char('r') => Some(UiEvent::RefreshBooks),
        _ => match active_panel {
            Panel::Books => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
                KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
                _ => None,
            },
            Panel::Form => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevField),
                KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextField),
                KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
                KeyCode::Char('s') => Some(UiEvent::SubmitForm),
                _ => None,
            },
        },
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Enter => Some(UiEvent::SubmitForm),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
