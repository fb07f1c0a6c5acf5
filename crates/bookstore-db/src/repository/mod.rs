//! # Repository Module
//!
//! PostgreSQL implementations of the store interface.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Statement Lifecycle                                  │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │  store.search("go")                                            │
//! │       ▼                                                                 │
//! │  BookRepository                                                        │
//! │       │  query::search("go") → Statement { sql, params }               │
//! │       │  bind params in order                                          │
//! │       ▼                                                                 │
//! │  PgPool → PostgreSQL                                                   │
//! │       │  Vec<PgRow>                                                     │
//! │       ▼                                                                 │
//! │  codec::decode_books(rows, "search") → Vec<Book>                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookRepository`](book::BookRepository) - Book CRUD, search and views

pub mod book;
