//! # Book Repository
//!
//! Runs the statements produced by [`crate::query`] against PostgreSQL and
//! decodes the results with [`crate::codec`].
//!
//! ## Not-Found Signalling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get     SELECT ... WHERE id = $1          0 rows  → Ok(None)          │
//! │  update  UPDATE ... RETURNING ...          0 rows  → DbError::NotFound │
//! │  delete  DELETE ... WHERE id = $1          0 affected → NotFound       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPool, PgQueryResult, PgRow};
use sqlx::query::Query;
use sqlx::Postgres;
use tracing::debug;

use bookstore_core::{Book, BookInput};

use crate::codec;
use crate::error::{DbError, DbResult};
use crate::query::{self, SqlParam, Statement};
use crate::store::BookStore;

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let programming = repo.list(Some("Programming")).await?;
/// let book = repo.get(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: PgPool) -> Self {
        BookRepository { pool }
    }

    /// Empties the table and restarts the id sequence.
    ///
    /// Destructive: only the development seeder calls this.
    pub async fn truncate(&self) -> DbResult<()> {
        debug!("Truncating books table");
        self.execute(query::truncate()).await?;
        Ok(())
    }

    /// Counts all books (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Statement Execution
    // =========================================================================

    async fn fetch_all(&self, stmt: Statement) -> DbResult<Vec<PgRow>> {
        let Statement { sql, params } = stmt;
        let rows = bind_params(sqlx::query(&sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(&self, stmt: Statement) -> DbResult<Option<PgRow>> {
        let Statement { sql, params } = stmt;
        let row = bind_params(sqlx::query(&sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_one(&self, stmt: Statement) -> DbResult<PgRow> {
        let Statement { sql, params } = stmt;
        let row = bind_params(sqlx::query(&sql), params)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn execute(&self, stmt: Statement) -> DbResult<PgQueryResult> {
        let Statement { sql, params } = stmt;
        let result = bind_params(sqlx::query(&sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result)
    }

    /// Runs a multi-row read and decodes it with the skip-bad-rows policy.
    async fn fetch_books(&self, stmt: Statement, view: &str) -> DbResult<Vec<Book>> {
        let rows = self.fetch_all(stmt).await?;
        let books = codec::decode_books(&rows, view);

        debug!(view, rows = rows.len(), returned = books.len(), "Fetched books");
        Ok(books)
    }
}

/// Binds positional parameters in order (`params[0]` is `$1`).
fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: Vec<SqlParam>,
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(v),
            SqlParam::NullableInt(v) => query.bind(v),
            SqlParam::Float(v) => query.bind(v),
            SqlParam::NullableFloat(v) => query.bind(v),
            SqlParam::Bool(v) => query.bind(v),
            SqlParam::Text(v) => query.bind(v),
        };
    }
    query
}

#[async_trait]
impl BookStore for BookRepository {
    async fn list(&self, category: Option<&str>) -> DbResult<Vec<Book>> {
        debug!(category = ?category, "Listing books");
        self.fetch_books(query::list(category), "list").await
    }

    async fn get(&self, id: i32) -> DbResult<Option<Book>> {
        debug!(id, "Fetching book");

        match self.fetch_optional(query::get_by_id(id)).await? {
            Some(row) => Ok(Some(codec::decode_book(&row)?)),
            None => Ok(None),
        }
    }

    async fn search(&self, term: &str) -> DbResult<Vec<Book>> {
        debug!(term = %term, "Searching books");
        self.fetch_books(query::search(term), "search").await
    }

    async fn featured(&self) -> DbResult<Vec<Book>> {
        self.fetch_books(query::featured(), "featured").await
    }

    async fn new_arrivals(&self) -> DbResult<Vec<Book>> {
        self.fetch_books(query::new_arrivals(), "new").await
    }

    async fn discounted(&self) -> DbResult<Vec<Book>> {
        self.fetch_books(query::discounted(), "discounted").await
    }

    async fn categories(&self) -> DbResult<Vec<String>> {
        let rows = self.fetch_all(query::categories()).await?;
        Ok(codec::decode_all(&rows, "categories", codec::decode_category))
    }

    async fn create(&self, input: BookInput) -> DbResult<Book> {
        debug!(title = %input.title, "Inserting book");

        let row = self.fetch_one(query::insert(&input)).await?;
        let assigned = codec::decode_store_assigned(&row)?;

        Ok(Book::from_input(
            assigned.id,
            input,
            assigned.created_at,
            assigned.updated_at,
        ))
    }

    async fn update(&self, id: i32, input: BookInput) -> DbResult<Book> {
        debug!(id, "Updating book");

        match self.fetch_optional(query::update(id, &input)).await? {
            Some(row) => codec::decode_book(&row),
            None => Err(DbError::not_found("Book", id)),
        }
    }

    async fn delete(&self, id: i32) -> DbResult<()> {
        debug!(id, "Deleting book");

        let result = self.execute(query::delete(id)).await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(())
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
