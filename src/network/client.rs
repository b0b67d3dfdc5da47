//! HTTP client wrapper - talks to the catalog backend

use std::time::{Duration, Instant};

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::constants::BOOKS_PATH;
use crate::error::{ApiError, ConfigError};
use crate::models::{Book, CreatedBook, NewBookRequest};

/// Client for the `/livros` collection of the catalog backend
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    books_url: Url,
}

impl CatalogClient {
    /// `base_url` must end with `/` (see [`crate::config::parse_api_url`]).
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ConfigError> {
        let books_url = base_url
            .join(BOOKS_PATH)
            .map_err(|e| ConfigError::InvalidApiUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(CatalogClient {
            http: create_client(timeout)?,
            books_url,
        })
    }

    pub fn books_url(&self) -> &Url {
        &self.books_url
    }

    /// `GET /livros`
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let start = Instant::now();
        let resp = self
            .http
            .get(self.books_url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), elapsed_ms = start.elapsed().as_millis() as u64, "list response");
        if !status.is_success() {
            return Err(ApiError::FetchFailed {
                status: status.as_u16(),
            });
        }
        read_json(resp).await
    }

    /// `POST /livros` with a JSON body
    pub async fn create_book(&self, request: &NewBookRequest) -> Result<CreatedBook, ApiError> {
        let start = Instant::now();
        let resp = self
            .http
            .post(self.books_url.clone())
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), elapsed_ms = start.elapsed().as_millis() as u64, "create response");
        if !status.is_success() {
            return Err(ApiError::SubmitFailed {
                status: status.as_u16(),
            });
        }
        read_json(resp).await
    }
}

/// Buffer the body and decode it; malformed JSON surfaces as `ApiError::Decode`
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Create an HTTP client with the given timeout
fn create_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
