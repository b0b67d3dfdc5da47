//! Book create form - field state, validation and submission bookkeeping

use crate::messages::NetworkCommand;
use crate::models::{CreatedBook, FormField, NewBookRequest};

/// Feedback line shown under the form
#[derive(Clone, Debug, PartialEq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }
}

pub struct BookCreateForm {
    pub titulo: String,
    pub ano: String,
    pub autor_id: String,
    pub tipo_id: String,
    pub editora_id: String,
    pub active_field: FormField,
    pub cursor_position: usize,
    pub message: Option<FormMessage>,
    pub pending_request_id: Option<u64>,
}

impl Default for BookCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCreateForm {
    pub fn new() -> Self {
        BookCreateForm {
            titulo: String::new(),
            ano: String::new(),
            autor_id: String::new(),
            tipo_id: String::new(),
            editora_id: String::new(),
            active_field: FormField::Titulo,
            cursor_position: 0,
            message: None,
            pending_request_id: None,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Titulo => &self.titulo,
            FormField::Ano => &self.ano,
            FormField::AutorId => &self.autor_id,
            FormField::TipoId => &self.tipo_id,
            FormField::EditoraId => &self.editora_id,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Titulo => &mut self.titulo,
            FormField::Ano => &mut self.ano,
            FormField::AutorId => &mut self.autor_id,
            FormField::TipoId => &mut self.tipo_id,
            FormField::EditoraId => &mut self.editora_id,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_request_id.is_some()
    }

    // ========================
    // Field navigation
    // ========================

    pub fn select_field(&mut self, field: FormField) {
        self.active_field = field;
        self.cursor_position = self.field(field).len();
    }

    pub fn next_field(&mut self) {
        self.select_field(self.active_field.next());
    }

    pub fn prev_field(&mut self) {
        self.select_field(self.active_field.prev());
    }

    // ========================
    // Input editing
    // ========================

    pub fn move_cursor_left(&mut self) {
        let input = self.field(self.active_field);
        if self.cursor_position > 0 {
            self.cursor_position = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.field(self.active_field);
        if self.cursor_position < input.len() {
            self.cursor_position = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
        }
    }

    /// Insert a character at the cursor. Numeric fields only take digits and
    /// a single leading minus sign.
    pub fn enter_char(&mut self, c: char) {
        let field = self.active_field;
        let cursor_pos = self.cursor_position;
        let input = self.field_mut(field);

        if field.is_numeric() {
            // Nothing goes in front of a sign
            if cursor_pos == 0 && input.starts_with('-') {
                return;
            }
            let allowed = c.is_ascii_digit() || (c == '-' && cursor_pos == 0);
            if !allowed {
                return;
            }
        }

        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.field_mut(self.active_field);
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
        self.active_field = FormField::Titulo;
        self.cursor_position = 0;
    }

    // ========================
    // Submission
    // ========================

    /// Build the request body from the current fields.
    ///
    /// Every field is required; numeric fields must parse as integers.
    pub fn build_request(&self) -> Result<NewBookRequest, String> {
        // The title is sent exactly as typed, so only an empty field is missing
        for field in FormField::ALL {
            if self.field(field).is_empty() {
                return Err(format!("Preencha o campo \"{}\".", field.label()));
            }
        }

        Ok(NewBookRequest {
            titulo: self.titulo.clone(),
            ano_publicacao: parse_number(&self.ano, FormField::Ano)?,
            autor_id: parse_number(&self.autor_id, FormField::AutorId)?,
            tipo_id: parse_number(&self.tipo_id, FormField::TipoId)?,
            editora_id: parse_number(&self.editora_id, FormField::EditoraId)?,
        })
    }

    /// Validate and tag a create request with `id`.
    ///
    /// Returns None while a previous submission is still in flight or when
    /// validation fails (the reason is left in `message`).
    pub fn submit(&mut self, id: u64) -> Option<NetworkCommand> {
        if self.is_submitting() {
            return None;
        }

        match self.build_request() {
            Ok(request) => {
                self.pending_request_id = Some(id);
                self.message = None;
                Some(NetworkCommand::CreateBook { id, request })
            }
            Err(reason) => {
                self.message = Some(FormMessage::Error(reason));
                None
            }
        }
    }

    /// Apply a successful create. Returns true when the parent should be told.
    pub fn handle_created(&mut self, id: u64, book: CreatedBook) -> bool {
        if self.pending_request_id != Some(id) {
            return false;
        }
        self.pending_request_id = None;
        self.message = Some(FormMessage::Success(format!(
            "Livro \"{}\" cadastrado com sucesso!",
            book.titulo
        )));
        self.clear();
        true
    }

    /// Apply a failed create. Fields are left as typed.
    pub fn handle_failed(&mut self, id: u64, message: String) -> bool {
        if self.pending_request_id != Some(id) {
            return false;
        }
        self.pending_request_id = None;
        self.message = Some(FormMessage::Error(message));
        true
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, field: FormField) -> Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("Valor inválido para \"{}\".", field.label()))
}
