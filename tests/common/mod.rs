//! In-memory catalog backend for integration tests.
//!
//! Serves `/livros` on a random local port with axum, the same shape as the
//! real backend: `GET` lists rows, `POST` inserts one and echoes it back.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use reqwest::Url;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use biblioteca_tui::config::parse_api_url;
use biblioteca_tui::{Book, NewBookRequest};

#[derive(Clone, Default)]
pub struct Catalog {
    pub books: Arc<RwLock<Vec<Book>>>,
    pub received: Arc<RwLock<Vec<NewBookRequest>>>,
    pub list_calls: Arc<AtomicUsize>,
    /// When set, `GET` is answered with this status and no body
    pub fail_list: Option<StatusCode>,
    /// When set, `POST` is answered with this status after recording the body
    pub fail_create: Option<StatusCode>,
}

impl Catalog {
    pub fn with_books(books: Vec<Book>) -> Self {
        Catalog {
            books: Arc::new(RwLock::new(books)),
            ..Catalog::default()
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Catalog {
            fail_list: Some(status),
            fail_create: Some(status),
            ..Catalog::default()
        }
    }

    pub fn refusing_creates(books: Vec<Book>, status: StatusCode) -> Self {
        Catalog {
            fail_create: Some(status),
            ..Catalog::with_books(books)
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/livros", get(list_books).post(create_book))
            .with_state(self.clone())
    }
}

async fn list_books(State(catalog): State<Catalog>) -> Result<Json<Vec<Book>>, StatusCode> {
    catalog.list_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = catalog.fail_list {
        return Err(status);
    }
    Ok(Json(catalog.books.read().await.clone()))
}

async fn create_book(
    State(catalog): State<Catalog>,
    Json(input): Json<NewBookRequest>,
) -> Result<(StatusCode, Json<Book>), StatusCode> {
    catalog.received.write().await.push(input.clone());
    if let Some(status) = catalog.fail_create {
        return Err(status);
    }

    let mut books = catalog.books.write().await;
    let book = Book {
        id: books.len() as i64 + 1,
        titulo: input.titulo,
        ano_publicacao: Some(input.ano_publicacao),
        autor_nome: Some(format!("Autor {}", input.autor_id)),
        editora_nome: Some(format!("Editora {}", input.editora_id)),
        tipo_nome: Some(format!("Tipo {}", input.tipo_id)),
    };
    books.push(book.clone());
    Ok((StatusCode::CREATED, Json(book)))
}

/// Serve `router` on a random port and return its base URL
pub async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    parse_api_url(&format!("http://{addr}")).unwrap()
}

pub fn dune() -> Book {
    Book {
        id: 1,
        titulo: "Dune".into(),
        ano_publicacao: Some(1965),
        autor_nome: Some("Frank Herbert".into()),
        editora_nome: Some("Ace".into()),
        tipo_nome: Some("Ficção".into()),
    }
}

/// `GET /livros` that answers with `[dune()]` only after `delay`
pub fn slow_router(delay: std::time::Duration) -> Router {
    Router::new().route(
        "/livros",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(vec![dune()])
        }),
    )
}
