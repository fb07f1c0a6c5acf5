//! # bookstore-db: Database Layer for the Bookstore Catalog
//!
//! This crate provides PostgreSQL access for the catalog service using sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Catalog Data Flow                        │
//! │                                                                         │
//! │  HTTP handler (GET /api/v1/books/search?q=go)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐  ┌──────────┐  │   │
//! │  │   │  schema   │──►│  query    │──►│ repository│─►│  codec   │  │   │
//! │  │   │ COLUMNS   │   │ Statement │   │ bind+run  │  │ PgRow →  │  │   │
//! │  │   │ (ordered) │   │ sql+params│   │ (PgPool)  │  │ Book     │  │   │
//! │  │   └───────────┘   └───────────┘   └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 PostgreSQL (table: books)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`schema`] - The ordered column descriptor every statement derives from
//! - [`query`] - Pure SQL builder (no I/O)
//! - [`codec`] - Row decoding with the skip-bad-rows listing policy
//! - [`store`] - The `BookStore` trait handlers depend on
//! - [`repository`] - PostgreSQL implementation of `BookStore`
//! - [`pool`] - Connection pool creation and configuration
//! - [`seed`] - Destructive development reseed
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{BookStore, Database, DbConfig};
//!
//! let config = DbConfig::from_url(&database_url)?;
//! let db = Database::new(config).await?;
//!
//! let featured = db.books().featured().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod pool;
pub mod query;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::BookStore;

// Connection options for callers that assemble them from parts
pub use sqlx::postgres::PgConnectOptions;

// Repository re-export for convenience
pub use repository::book::BookRepository;
