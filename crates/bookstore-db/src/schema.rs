//! # Books Table Descriptor
//!
//! The single, ordered description of the `books` table. Every statement
//! template in [`crate::query`] and every column the row codec reads is
//! derived from [`COLUMNS`], so adding a field means touching this file and
//! the `Book` type, not a dozen SQL strings.
//!
//! ## Column Roles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  COLUMNS (ordered)                                                      │
//! │                                                                         │
//! │  id ─────────────── store-assigned (SERIAL)                            │
//! │  title ... description ── editable: carry a binder from BookInput      │
//! │  created_at ─────── store-assigned (DEFAULT NOW())                     │
//! │  updated_at ─────── store-assigned (NOW() on every update)             │
//! │                                                                         │
//! │  SELECT list  = all columns, in order                                  │
//! │  INSERT list  = editable columns, in order → $1..$16                   │
//! │  UPDATE SET   = editable columns, in order → $1..$16, id = $17         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstore_core::BookInput;

use crate::query::SqlParam;

/// Table holding the catalog.
pub const TABLE: &str = "books";

/// Column names, shared by the statement builder and the row codec.
pub mod col {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const ISBN: &str = "isbn";
    pub const YEAR: &str = "year";
    pub const PRICE: &str = "price";
    pub const CATEGORY: &str = "category";
    pub const ORIGINAL_PRICE: &str = "original_price";
    pub const DISCOUNT: &str = "discount";
    pub const COVER_IMAGE: &str = "cover_image";
    pub const RATING: &str = "rating";
    pub const REVIEWS_COUNT: &str = "reviews_count";
    pub const IS_NEW: &str = "is_new";
    pub const PAGES: &str = "pages";
    pub const LANGUAGE: &str = "language";
    pub const PUBLISHER: &str = "publisher";
    pub const DESCRIPTION: &str = "description";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
}

/// Extracts the bound value for one editable column.
pub type Binder = fn(&BookInput) -> SqlParam;

/// One column of the `books` table.
#[derive(Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    /// `Some` for client-editable columns, `None` for store-assigned ones.
    pub binder: Option<Binder>,
}

impl Column {
    const fn generated(name: &'static str) -> Self {
        Column { name, binder: None }
    }

    const fn editable(name: &'static str, binder: Binder) -> Self {
        Column {
            name,
            binder: Some(binder),
        }
    }

    /// Returns true if clients write this column.
    pub fn is_editable(&self) -> bool {
        self.binder.is_some()
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("editable", &self.is_editable())
            .finish()
    }
}

/// Every column of `books`, in canonical order.
pub static COLUMNS: &[Column] = &[
    Column::generated(col::ID),
    Column::editable(col::TITLE, |b| SqlParam::Text(b.title.clone())),
    Column::editable(col::AUTHOR, |b| SqlParam::Text(b.author.clone())),
    Column::editable(col::ISBN, |b| SqlParam::Text(b.isbn.clone())),
    Column::editable(col::YEAR, |b| SqlParam::Int(b.year)),
    Column::editable(col::PRICE, |b| SqlParam::Float(b.price)),
    Column::editable(col::CATEGORY, |b| SqlParam::Text(b.category.clone())),
    Column::editable(col::ORIGINAL_PRICE, |b| {
        SqlParam::NullableFloat(b.original_price)
    }),
    Column::editable(col::DISCOUNT, |b| SqlParam::Int(b.discount)),
    Column::editable(col::COVER_IMAGE, |b| SqlParam::Text(b.cover_image.clone())),
    Column::editable(col::RATING, |b| SqlParam::Float(b.rating)),
    Column::editable(col::REVIEWS_COUNT, |b| SqlParam::Int(b.reviews_count)),
    Column::editable(col::IS_NEW, |b| SqlParam::Bool(b.is_new)),
    Column::editable(col::PAGES, |b| SqlParam::NullableInt(b.pages)),
    Column::editable(col::LANGUAGE, |b| SqlParam::Text(b.language.clone())),
    Column::editable(col::PUBLISHER, |b| SqlParam::Text(b.publisher.clone())),
    Column::editable(col::DESCRIPTION, |b| SqlParam::Text(b.description.clone())),
    Column::generated(col::CREATED_AT),
    Column::generated(col::UPDATED_AT),
];

/// Comma-separated list of every column, for SELECT and RETURNING clauses.
pub fn select_list() -> String {
    join(COLUMNS.iter())
}

/// The editable columns, in canonical order.
pub fn editable_columns() -> impl Iterator<Item = &'static Column> {
    COLUMNS.iter().filter(|c| c.is_editable())
}

/// Comma-separated list of the editable columns, for INSERT.
pub fn insert_list() -> String {
    join(editable_columns())
}

/// Values for the editable columns of `input`, in canonical order.
pub fn editable_params(input: &BookInput) -> Vec<SqlParam> {
    editable_columns()
        .filter_map(|c| c.binder.map(|bind| bind(input)))
        .collect()
}

fn join<'a>(columns: impl Iterator<Item = &'a Column>) -> String {
    columns.map(|c| c.name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BookInput {
        BookInput {
            title: "Clean Architecture".to_string(),
            author: "Robert C. Martin".to_string(),
            isbn: "978-0134494166".to_string(),
            year: 2017,
            price: 1250.0,
            category: "Software Design".to_string(),
            original_price: None,
            discount: 21,
            cover_image: "clean.jpg".to_string(),
            rating: 4.5,
            reviews_count: 90,
            is_new: true,
            pages: Some(800),
            language: "English".to_string(),
            publisher: "Prentice Hall".to_string(),
            description: "A blueprint for software structure.".to_string(),
        }
    }

    #[test]
    fn test_select_list_order() {
        assert_eq!(
            select_list(),
            "id, title, author, isbn, year, price, category, original_price, discount, \
             cover_image, rating, reviews_count, is_new, pages, language, publisher, \
             description, created_at, updated_at"
        );
    }

    #[test]
    fn test_store_assigned_columns_are_not_editable() {
        let generated: Vec<_> = COLUMNS
            .iter()
            .filter(|c| !c.is_editable())
            .map(|c| c.name)
            .collect();
        assert_eq!(generated, vec![col::ID, col::CREATED_AT, col::UPDATED_AT]);
        assert_eq!(editable_columns().count(), 16);
    }

    #[test]
    fn test_editable_params_follow_column_order() {
        let params = editable_params(&input());

        assert_eq!(params.len(), editable_columns().count());
        assert_eq!(params[0], SqlParam::Text("Clean Architecture".to_string()));
        assert_eq!(params[3], SqlParam::Int(2017));
        assert_eq!(params[6], SqlParam::NullableFloat(None));
        assert_eq!(params[12], SqlParam::NullableInt(Some(800)));
        assert_eq!(
            params[15],
            SqlParam::Text("A blueprint for software structure.".to_string())
        );
    }
}
