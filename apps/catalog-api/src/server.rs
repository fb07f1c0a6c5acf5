//! # HTTP Server
//!
//! Builds the router: catalog endpoints under `/api/v1`, the health check and
//! API docs at the root, request tracing and CORS.
//!
//! ## Routes
//! ```text
//! GET    /health
//! GET    /api/v1/books?category=
//! POST   /api/v1/books
//! GET    /api/v1/books/search?q=
//! GET    /api/v1/books/featured
//! GET    /api/v1/books/new
//! GET    /api/v1/books/discounted
//! GET    /api/v1/books/{id}
//! PUT    /api/v1/books/{id}
//! DELETE /api/v1/books/{id}
//! GET    /api/v1/categories
//! GET    /api-docs/openapi.json
//! GET    /docs
//! ```
//!
//! The fixed `/books/<view>` segments take priority over `/books/{id}`.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::docs;
use crate::handlers::{books, health};
use crate::state::AppState;

/// Prefix for every catalog route.
pub const API_PREFIX: &str = "/api/v1";

/// Builds the complete application router.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route("/books/featured", get(books::featured_books))
        .route("/books/new", get(books::new_books))
        .route("/books/discounted", get(books::discounted_books))
        .route(
            "/books/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/categories", get(books::list_categories));

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(health::health))
        .merge(docs::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise restricted to them.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
