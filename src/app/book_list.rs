//! Book list component - owns the loading/error/data state of the catalog view

use chrono::{DateTime, Local};

use crate::messages::NetworkCommand;
use crate::models::Book;
use crate::ui::{book_list_height, book_list_lines};

/// What the list panel currently shows. Exactly one of these at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ListStatus {
    Loading,
    Loaded(Vec<Book>),
    Failed(String),
}

pub struct BookListView {
    pub status: ListStatus,
    pub pending_request_id: Option<u64>,
    pub scroll: u16,
    pub loaded_at: Option<DateTime<Local>>,
    /// Inner size of the list panel as last reported by the terminal
    pub viewport: Option<(u16, u16)>,
}

impl Default for BookListView {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListView {
    pub fn new() -> Self {
        BookListView {
            status: ListStatus::Loading,
            pending_request_id: None,
            scroll: 0,
            loaded_at: None,
            viewport: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Start a fresh fetch under `id`.
    ///
    /// A fetch still in flight is cancelled first, so only the newest request
    /// can ever reach the list.
    pub fn refresh(&mut self, id: u64) -> Vec<NetworkCommand> {
        let mut commands = Vec::with_capacity(2);
        if let Some(cmd) = self.cancel() {
            commands.push(cmd);
        }

        self.status = ListStatus::Loading;
        self.scroll = 0;
        self.pending_request_id = Some(id);
        commands.push(NetworkCommand::FetchBooks { id });
        commands
    }

    /// Cancel the in-flight fetch, if any
    pub fn cancel(&mut self) -> Option<NetworkCommand> {
        self.pending_request_id.take().map(NetworkCommand::CancelRequest)
    }

    /// Apply a successful fetch. Returns false for responses to superseded requests.
    pub fn handle_loaded(&mut self, id: u64, books: Vec<Book>) -> bool {
        if self.pending_request_id != Some(id) {
            tracing::debug!(id, "Ignoring stale book list");
            return false;
        }
        self.pending_request_id = None;
        self.status = ListStatus::Loaded(books);
        self.loaded_at = Some(Local::now());
        true
    }

    /// Apply a failed fetch. The previously loaded list is not kept on screen.
    pub fn handle_failed(&mut self, id: u64, message: String) -> bool {
        if self.pending_request_id != Some(id) {
            tracing::debug!(id, "Ignoring stale fetch failure");
            return false;
        }
        self.pending_request_id = None;
        self.status = ListStatus::Failed(message);
        true
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if (self.scroll as usize) < self.max_scroll() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    /// Record the panel's text area and pull the scroll offset back into range
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Some((width, height));
        let max = self.max_scroll().min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.min(max);
    }

    /// Largest offset that still fills the panel. Long titles wrap, so this is
    /// measured on the rendered rows once the panel width is known.
    fn max_scroll(&self) -> usize {
        if !matches!(self.status, ListStatus::Loaded(_)) {
            return 0;
        }
        match self.viewport {
            Some((width, height)) => {
                book_list_height(&self.status, width).saturating_sub(height as usize)
            }
            None => book_list_lines(&self.status).len().saturating_sub(1),
        }
    }
}
