//! # API Documentation
//!
//! OpenAPI document for the catalog, derived from the `#[utoipa::path]`
//! annotations on the handlers, and the Swagger UI that renders it.
//!
//! ```text
//! GET /api-docs/openapi.json   the document
//! GET /docs                    Swagger UI
//! ```

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use bookstore_core::{Book, BookInput};

use crate::error::ErrorResponse;
use crate::handlers::books::{self, MessageResponse};
use crate::handlers::health::{self, HealthResponse};
use crate::state::AppState;

/// Where the document is served.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Where the Swagger UI is mounted.
pub const SWAGGER_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore Catalog API",
        description = "CRUD and catalog views over a single books table."
    ),
    paths(
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_categories,
        books::search_books,
        books::featured_books,
        books::new_books,
        books::discounted_books,
        health::health,
    ),
    components(schemas(Book, BookInput, ErrorResponse, MessageResponse, HealthResponse)),
    tags(
        (name = "books", description = "Catalog records and views"),
        (name = "health", description = "Store liveness")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it loads.
pub fn swagger_ui() -> Router<AppState> {
    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_PATH, ApiDoc::openapi())
        .into()
}
