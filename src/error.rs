//! Error types for catalog backend calls and configuration
//!
//! Every failure ends up as a line of text on screen; the `Display` impls are
//! what the user reads.

use thiserror::Error;

use crate::constants::{FETCH_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The list endpoint answered with a non-2xx status
    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed { status: u16 },

    /// The create endpoint answered with a non-2xx status
    #[error("{}", SUBMIT_FAILED_MESSAGE)]
    SubmitFailed { status: u16 },

    #[error("{}", transport_message(.0))]
    Transport(#[from] reqwest::Error),

    #[error("Resposta inválida do servidor: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status behind the failure, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::FetchFailed { status } | ApiError::SubmitFailed { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Tempo de requisição esgotado".to_string()
    } else if e.is_connect() {
        format!("Falha de conexão: {}", e)
    } else {
        format!("Falha na requisição: {}", e)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("URL da API inválida '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("timeout deve ser maior que zero")]
    ZeroTimeout,

    #[error("falha ao criar cliente HTTP: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_display_fixed_text() {
        assert_eq!(
            ApiError::FetchFailed { status: 500 }.to_string(),
            "Erro ao carregar livros"
        );
        assert_eq!(
            ApiError::SubmitFailed { status: 400 }.to_string(),
            "Erro ao cadastrar livro"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::FetchFailed { status: 503 }.status(), Some(503));
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::from(decode).status(), None);
    }

    #[test]
    fn test_decode_error_mentions_response() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let msg = ApiError::from(decode).to_string();
        assert!(msg.starts_with("Resposta inválida do servidor"));
    }
}
