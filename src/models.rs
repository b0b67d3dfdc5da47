use serde::{Deserialize, Serialize};

use crate::constants::MISSING_VALUE;

/// A catalog record as served by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub ano_publicacao: Option<i32>,
    #[serde(default)]
    pub autor_nome: Option<String>,
    #[serde(default)]
    pub editora_nome: Option<String>,
    #[serde(default)]
    pub tipo_nome: Option<String>,
}

impl Book {
    pub fn year_display(&self) -> String {
        self.ano_publicacao
            .map(|y| y.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }

    pub fn author_display(&self) -> &str {
        self.autor_nome.as_deref().unwrap_or(MISSING_VALUE)
    }

    pub fn publisher_display(&self) -> &str {
        self.editora_nome.as_deref().unwrap_or(MISSING_VALUE)
    }

    pub fn type_display(&self) -> &str {
        self.tipo_nome.as_deref().unwrap_or(MISSING_VALUE)
    }
}

/// Body of a create request, built from the form at submission time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBookRequest {
    pub titulo: String,
    pub ano_publicacao: i32,
    pub autor_id: i64,
    pub tipo_id: i64,
    pub editora_id: i64,
}

/// What the backend echoes back after a create.
///
/// Only `titulo` is required; backends differ in how much of the row they return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedBook {
    #[serde(default)]
    pub id: Option<i64>,
    pub titulo: String,
}

/// Fields of the create form, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Titulo,
    Ano,
    AutorId,
    TipoId,
    EditoraId,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Titulo,
        FormField::Ano,
        FormField::AutorId,
        FormField::TipoId,
        FormField::EditoraId,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Titulo => "Título",
            FormField::Ano => "Ano de Publicação",
            FormField::AutorId => "ID do Autor",
            FormField::TipoId => "ID do Tipo",
            FormField::EditoraId => "ID da Editora",
        }
    }

    /// Numeric fields only accept digits, like an HTML number input
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Titulo)
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Titulo => FormField::Ano,
            FormField::Ano => FormField::AutorId,
            FormField::AutorId => FormField::TipoId,
            FormField::TipoId => FormField::EditoraId,
            FormField::EditoraId => FormField::Titulo,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Titulo => FormField::EditoraId,
            FormField::Ano => FormField::Titulo,
            FormField::AutorId => FormField::Ano,
            FormField::TipoId => FormField::AutorId,
            FormField::EditoraId => FormField::TipoId,
        }
    }
}
