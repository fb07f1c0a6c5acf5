//! # Store Interface
//!
//! The seam between the HTTP handlers and persistence. Handlers hold an
//! `Arc<dyn BookStore>` injected at startup instead of reaching for a
//! process-wide pool, which keeps them testable against an in-memory fake.
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐      ┌──────────────────┐
//! │  catalog-api     │      │  dyn BookStore   │      │  BookRepository  │
//! │  handlers        │ ───► │  (this trait)    │ ◄─── │  (PgPool)        │
//! └──────────────────┘      └──────────────────┘      └──────────────────┘
//! ```

use async_trait::async_trait;
use bookstore_core::{Book, BookInput};

use crate::error::DbResult;

/// Persistence operations for the catalog.
///
/// Every method runs exactly one statement. Listing methods return an empty
/// `Vec` (never an error) when nothing matches.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, optionally filtered by exact category.
    async fn list(&self, category: Option<&str>) -> DbResult<Vec<Book>>;

    /// One book by id, `None` if it doesn't exist.
    async fn get(&self, id: i32) -> DbResult<Option<Book>>;

    /// Case-insensitive substring search over title, author, description.
    async fn search(&self, term: &str) -> DbResult<Vec<Book>>;

    /// Top-rated books.
    async fn featured(&self) -> DbResult<Vec<Book>>;

    /// Books flagged new or created recently.
    async fn new_arrivals(&self) -> DbResult<Vec<Book>>;

    /// Books currently on discount.
    async fn discounted(&self) -> DbResult<Vec<Book>>;

    /// Distinct categories, alphabetically.
    async fn categories(&self) -> DbResult<Vec<String>>;

    /// Inserts a book; the store assigns id and timestamps.
    async fn create(&self, input: BookInput) -> DbResult<Book>;

    /// Replaces every editable field.
    ///
    /// Returns `DbError::NotFound` when no book has this id.
    async fn update(&self, id: i32, input: BookInput) -> DbResult<Book>;

    /// Hard-deletes a book.
    ///
    /// Returns `DbError::NotFound` when no book has this id.
    async fn delete(&self, id: i32) -> DbResult<()>;

    /// Round-trips a trivial statement to prove the store is reachable.
    async fn ping(&self) -> DbResult<()>;
}
