//! # Biblioteca TUI
//!
//! A terminal front-end for a library catalog REST backend.
//!
//! ## Features
//! - Book list fetched from `GET /livros` with loading, error and empty states
//! - Create form posting to `POST /livros`
//! - Explicit list refresh after every successful creation
//! - Request sequencing and cancellation, so stale responses never reach the screen
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, BookCreateForm, BookListView, ListStatus};
pub use config::{AppConfig, CliArgs};
pub use error::{ApiError, ConfigError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Book, CreatedBook, FormField, NewBookRequest};
pub use network::{CatalogClient, NetworkActor};
