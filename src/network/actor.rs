//! Network actor - runs catalog requests in the Tokio async runtime

use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::CatalogClient;

/// Network actor that processes catalog commands
pub struct NetworkActor {
    client: CatalogClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<u64>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl NetworkActor {
    pub fn new(client: CatalogClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchBooks { id }) => {
                            let client = self.client.clone();
                            tracing::info!(id, url = %client.books_url(), "Fetching books");
                            self.spawn_cancellable(id, async move {
                                let start = Instant::now();
                                let result = client.list_books().await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                match result {
                                    Ok(books) => {
                                        tracing::info!(id, count = books.len(), time_ms, "Books loaded");
                                        NetworkResponse::BooksLoaded { id, books, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, status = ?e.status(), error = %e, "Fetching books failed");
                                        NetworkResponse::BooksFailed { id, message: e.to_string(), time_ms }
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::CreateBook { id, request }) => {
                            let client = self.client.clone();
                            tracing::info!(id, titulo = %request.titulo, "Creating book");
                            self.spawn_cancellable(id, async move {
                                let start = Instant::now();
                                let result = client.create_book(&request).await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                match result {
                                    Ok(book) => {
                                        tracing::info!(id, book_id = ?book.id, time_ms, "Book created");
                                        NetworkResponse::BookCreated { id, book, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, status = ?e.status(), error = %e, "Creating book failed");
                                        NetworkResponse::CreateFailed { id, message: e.to_string(), time_ms }
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling request");
                                let _ = cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            self.active_requests.shutdown().await;
                            break;
                        }
                    }
                }

                Some(finished) = self.active_requests.join_next() => {
                    if let Ok(id) = finished {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }
    }

    /// Spawn a request that reports its response unless cancelled first
    fn spawn_cancellable<F>(&mut self, id: u64, request: F)
    where
        F: Future<Output = NetworkResponse> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.cancel_handles.insert(id, cancel_tx);
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tokio::select! {
                biased;

                _ = cancel_rx => {
                    tracing::debug!(id, "Request dropped before completion");
                }
                response = request => {
                    let _ = response_tx.send(response);
                }
            }
            id
        });
    }
}
