//! Application constants
//!
//! Centralized location for user-facing strings and configuration defaults.

/// Default base URL of the catalog backend
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Path of the book collection endpoint, relative to the base URL
pub const BOOKS_PATH: &str = "livros";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "biblioteca.log";

/// Application name
pub const APP_NAME: &str = "Biblioteca";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LOADING_MESSAGE: &str = "Carregando livros...";
pub const EMPTY_LIST_MESSAGE: &str = "Nenhum livro encontrado.";
pub const FETCH_FAILED_MESSAGE: &str = "Erro ao carregar livros";
pub const SUBMIT_FAILED_MESSAGE: &str = "Erro ao cadastrar livro";

/// Placeholder for a null column in a book row
pub const MISSING_VALUE: &str = "—";
