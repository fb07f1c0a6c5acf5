//! Shared application state.

use std::sync::Arc;

use bookstore_db::BookStore;

/// State handed to every handler.
///
/// Cloned per request; the store itself is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        AppState { store }
    }
}
