//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::DocumentStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current analytics document and its refresh source
    pub store: Arc<DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}
