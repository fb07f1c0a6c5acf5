//! # Book Handlers
//!
//! CRUD and catalog views over `/api/v1/books`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  extract (path / query / JSON body)  ── rejection ──► 400              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (bookstore-core)            ── invalid  ──► 400              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  state.store.<op>()                   ── missing  ──► 404              │
//! │       │                               ── failure  ──► 500              │
//! │       ▼                                                                 │
//! │  Json(Book) / Json(Vec<Book>)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use bookstore_core::validation::validate_search_term;
use bookstore_core::{Book, BookInput, CoreError};

use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::state::AppState;

/// Success body for DELETE.
pub const BOOK_DELETED: &str = "book deleted successfully";

/// `GET /books` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// `GET /books/search` query string.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `{"message": ...}` body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn book_id(path: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("invalid book id"))
}

fn book_body(body: Result<Json<BookInput>, JsonRejection>) -> ApiResult<BookInput> {
    let Json(input) = body?;
    input.validate().map_err(CoreError::from)?;
    Ok(input)
}

// =============================================================================
// CRUD
// =============================================================================

/// `GET /books?category=` - every book, optionally one category.
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    params(("category" = Option<String>, Query, description = "Exact category; empty means no filter")),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = params?;
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let books = state.store.list(category).await?;
    Ok(Json(books))
}

/// `GET /books/{id}`
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "No such book", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;

    match state.store.get(id).await? {
        Some(book) => Ok(Json(book)),
        None => Err(CoreError::BookNotFound(id).into()),
    }
}

/// `POST /books` - 201 with the stored record.
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Stored book with its id and timestamps", body = Book),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let input = book_body(body)?;

    let book = state.store.create(input).await?;
    info!(id = book.id, title = %book.title, "Book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /books/{id}` - replaces every editable field.
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Bad id or body", body = ErrorResponse),
        (status = 404, description = "No such book", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;
    let input = book_body(body)?;

    let book = state.store.update(id, input).await?;
    debug!(id, "Book updated");

    Ok(Json(book))
}

/// `DELETE /books/{id}`
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book removed", body = MessageResponse),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "No such book", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = book_id(path)?;

    state.store.delete(id).await?;
    info!(id, "Book deleted");

    Ok(Json(MessageResponse {
        message: BOOK_DELETED.to_string(),
    }))
}

// =============================================================================
// Views
// =============================================================================

/// `GET /categories` - distinct categories, alphabetical.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "books",
    responses(
        (status = 200, description = "Distinct categories", body = [String]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.store.categories().await?))
}

/// `GET /books/search?q=` - substring match on title, author, description.
#[utoipa::path(
    get,
    path = "/api/v1/books/search",
    tag = "books",
    params(("q" = String, Query, description = "Case-insensitive substring; must not be blank")),
    responses(
        (status = 200, description = "Books whose title, author or description contain q", body = [Book]),
        (status = 400, description = "Missing or blank q", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = params?;
    let term = validate_search_term(params.q.as_deref().unwrap_or_default())?;

    let books = state.store.search(&term).await?;
    debug!(term = %term, hits = books.len(), "Search complete");

    Ok(Json(books))
}

/// `GET /books/featured`
#[utoipa::path(
    get,
    path = "/api/v1/books/featured",
    tag = "books",
    responses(
        (status = 200, description = "Rated 4.5 or higher, best first, at most 10", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn featured_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.featured().await?))
}

/// `GET /books/new`
#[utoipa::path(
    get,
    path = "/api/v1/books/new",
    tag = "books",
    responses(
        (status = 200, description = "Flagged new or added in the last 30 days, newest first, at most 10", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn new_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.new_arrivals().await?))
}

/// `GET /books/discounted`
#[utoipa::path(
    get,
    path = "/api/v1/books/discounted",
    tag = "books",
    responses(
        (status = 200, description = "On sale, largest discount first, at most 20", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn discounted_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.discounted().await?))
}
