//! # Row Codec
//!
//! Turns PostgreSQL rows into [`Book`] records.
//!
//! ## Decode Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Single-row results (get, update RETURNING)                            │
//! │    decode_book(row) → Ok(Book) | Err(DbError::Decode) → 500           │
//! │                                                                         │
//! │  Multi-row results (list, search, featured, new, discounted)           │
//! │    row 1 ──► Ok  ──► kept                                              │
//! │    row 2 ──► Err ──► warn!(view, error), dropped                       │
//! │    row 3 ──► Ok  ──► kept                                              │
//! │    ...                                                                  │
//! │    warn!(view, skipped = 1, decoded = 2)                               │
//! │                                                                         │
//! │  One malformed row must not blank out an entire listing.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nullable columns decode into `Option`s; SQL `NULL` stays `None`.

use bookstore_core::Book;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};
use tracing::warn;

use crate::error::{DbError, DbResult};
use crate::schema::col;

/// Reads one named column, tagging failures with the column name.
fn column<'r, T>(row: &'r PgRow, name: &str) -> DbResult<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| DbError::Decode {
        column: name.to_string(),
        message: e.to_string(),
    })
}

/// Decodes a full `books` row.
pub fn decode_book(row: &PgRow) -> DbResult<Book> {
    Ok(Book {
        id: column(row, col::ID)?,
        title: column(row, col::TITLE)?,
        author: column(row, col::AUTHOR)?,
        isbn: column(row, col::ISBN)?,
        year: column(row, col::YEAR)?,
        price: column(row, col::PRICE)?,
        category: column(row, col::CATEGORY)?,
        original_price: column(row, col::ORIGINAL_PRICE)?,
        discount: column(row, col::DISCOUNT)?,
        cover_image: column(row, col::COVER_IMAGE)?,
        rating: column(row, col::RATING)?,
        reviews_count: column(row, col::REVIEWS_COUNT)?,
        is_new: column(row, col::IS_NEW)?,
        pages: column(row, col::PAGES)?,
        language: column(row, col::LANGUAGE)?,
        publisher: column(row, col::PUBLISHER)?,
        description: column(row, col::DESCRIPTION)?,
        created_at: column(row, col::CREATED_AT)?,
        updated_at: column(row, col::UPDATED_AT)?,
    })
}

/// The fields an INSERT leaves to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreAssigned {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Decodes the `RETURNING id, created_at, updated_at` row of an INSERT.
pub fn decode_store_assigned(row: &PgRow) -> DbResult<StoreAssigned> {
    Ok(StoreAssigned {
        id: column(row, col::ID)?,
        created_at: column(row, col::CREATED_AT)?,
        updated_at: column(row, col::UPDATED_AT)?,
    })
}

/// Decodes the `category` column of a categories row.
pub fn decode_category(row: &PgRow) -> DbResult<String> {
    column(row, col::CATEGORY)
}

/// Decodes every row of a listing, dropping (and logging) rows that fail.
pub fn decode_books(rows: &[PgRow], view: &str) -> Vec<Book> {
    decode_all(rows, view, decode_book)
}

/// Applies `decode` to each row, keeping successes in order.
///
/// Each failure is logged with the view name; a summary with the skip count
/// is logged once when anything was dropped.
pub fn decode_all<R, T, F>(rows: &[R], view: &str, decode: F) -> Vec<T>
where
    F: Fn(&R) -> DbResult<T>,
{
    let mut decoded = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match decode(row) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                skipped += 1;
                warn!(view, row = index, error = %e, "Skipping row that failed to decode");
            }
        }
    }

    if skipped > 0 {
        warn!(
            view,
            skipped,
            decoded = decoded.len(),
            "Listing returned with undecodable rows dropped"
        );
    }

    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_fake(row: &Result<i32, &'static str>) -> DbResult<i32> {
        row.map_err(|column| DbError::Decode {
            column: column.to_string(),
            message: "unexpected NULL".to_string(),
        })
    }

    #[test]
    fn test_decode_all_keeps_good_rows_in_order() {
        let rows = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(decode_all(&rows, "list", decode_fake), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_all_skips_bad_rows() {
        let rows = vec![Ok(1), Err("title"), Ok(3), Err("price")];
        assert_eq!(decode_all(&rows, "search", decode_fake), vec![1, 3]);
    }

    #[test]
    fn test_decode_all_with_no_rows_is_empty_not_error() {
        let rows: Vec<Result<i32, &'static str>> = Vec::new();
        assert!(decode_all(&rows, "featured", decode_fake).is_empty());
    }
}
