//! HTTP handlers.
//!
//! - [`books`] - CRUD, search, categories and catalog views
//! - [`health`] - Store liveness check

pub mod books;
pub mod health;
