//! # Bookstore Catalog API
//!
//! HTTP/JSON server for the book catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Layers                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  server        │  │  handlers      │  │  state                     ││
//! │  │                │  │                │  │                            ││
//! │  │ • router       │─►│ • books (CRUD, │─►│ • Arc<dyn BookStore>       ││
//! │  │ • CORS         │  │   views)       │  │   (BookRepository in prod, ││
//! │  │ • TraceLayer   │  │ • health       │  │    in-memory fake in tests)││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DATABASE_URL` - PostgreSQL connection string (or `DB_HOST`, `DB_PORT`,
//!   `DB_NAME`, `DB_USER`, `DB_PASSWORD`)
//! - `DB_MAX_CONNECTIONS` / `DB_MIN_CONNECTIONS` / `DB_MAX_LIFETIME_SECS`
//! - `HTTP_HOST` / `HTTP_PORT` - bind address (default: 0.0.0.0:8080)
//! - `CORS_ORIGINS` - comma-separated allow list (default: any origin)
//! - `SEED_ON_STARTUP` - truncate and load sample books (default: false)
//!
//! ## API Docs
//! Swagger UI at `/docs`, OpenAPI JSON at `/api-docs/openapi.json`.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

// Re-exports
pub use config::{ApiConfig, ConfigError, DatabaseTarget, DbParts};
pub use docs::ApiDoc;
pub use error::{ApiError, ApiResult};
pub use server::router;
pub use state::AppState;
