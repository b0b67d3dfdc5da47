//! Network messages - communication between App and Network layers

use crate::models::{Book, CreatedBook, NewBookRequest};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the whole book collection
    FetchBooks { id: u64 },
    /// Create a book
    CreateBook { id: u64, request: NewBookRequest },
    /// Cancel a pending request; no response is sent for it afterwards
    CancelRequest(u64),
    /// Shutdown the network actor, cancelling everything in flight
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    BooksLoaded {
        id: u64,
        books: Vec<Book>,
        time_ms: u64,
    },
    BooksFailed {
        id: u64,
        message: String,
        time_ms: u64,
    },
    BookCreated {
        id: u64,
        book: CreatedBook,
        time_ms: u64,
    },
    CreateFailed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::BooksLoaded { id, .. } => *id,
            NetworkResponse::BooksFailed { id, .. } => *id,
            NetworkResponse::BookCreated { id, .. } => *id,
            NetworkResponse::CreateFailed { id, .. } => *id,
        }
    }
}
