//! # Query Builder
//!
//! Produces the SQL text and the ordered parameter list for every catalog
//! operation. This module is pure: it never touches a connection, so each
//! statement can be checked in a unit test.
//!
//! ## Parameter Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SQL text is assembled ONLY from:                                      │
//! │    • the column descriptor (schema::COLUMNS)                           │
//! │    • static fragments and named constants in this file                 │
//! │                                                                         │
//! │  Client input (category, search term, body fields, id) is ALWAYS      │
//! │  a positional parameter ($1, $2, ...), never part of the text.         │
//! │                                                                         │
//! │  GET /books?category=x' OR 1=1 --                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sql:    SELECT ... FROM books WHERE category = $1                     │
//! │  params: [Text("x' OR 1=1 --")]   ← compared literally, matches none   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filters and orderings are fixed per view; there is no dynamic sort DSL.

use bookstore_core::BookInput;

use crate::schema::{self, col, TABLE};

// =============================================================================
// View Constants
// =============================================================================

/// Minimum rating for the featured view.
pub const FEATURED_MIN_RATING: f64 = 4.5;

/// Maximum rows in the featured view.
pub const FEATURED_LIMIT: u32 = 10;

/// Books created within this many days count as new.
pub const NEW_WINDOW_DAYS: u32 = 30;

/// Maximum rows in the new-arrivals view.
pub const NEW_LIMIT: u32 = 10;

/// Maximum rows in the discounted view.
pub const DISCOUNTED_LIMIT: u32 = 20;

// =============================================================================
// Statement
// =============================================================================

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    NullableInt(Option<i32>),
    Float(f64),
    NullableFloat(Option<f64>),
    Bool(bool),
    Text(String),
}

/// SQL text plus its positional parameters (`$1` is `params[0]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    fn new(sql: String) -> Self {
        Statement {
            sql,
            params: Vec::new(),
        }
    }

    fn with_params(sql: String, params: Vec<SqlParam>) -> Self {
        Statement { sql, params }
    }
}

fn select_from() -> String {
    format!("SELECT {} FROM {}", schema::select_list(), TABLE)
}

// =============================================================================
// Reads
// =============================================================================

/// All books, optionally restricted to one category.
///
/// An empty category is treated as "no filter".
pub fn list(category: Option<&str>) -> Statement {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => Statement::with_params(
            format!("{} WHERE {} = $1", select_from(), col::CATEGORY),
            vec![SqlParam::Text(category.to_string())],
        ),
        None => Statement::new(select_from()),
    }
}

/// A single book by primary key.
pub fn get_by_id(id: i32) -> Statement {
    Statement::with_params(
        format!("{} WHERE {} = $1", select_from(), col::ID),
        vec![SqlParam::Int(id)],
    )
}

/// Case-insensitive substring match on title, author, or description.
///
/// Both the columns and the bound pattern go through the database's
/// `LOWER()`, so the two sides are folded by the same collation. The term's
/// LIKE metacharacters are escaped and it is wrapped in `%` so it matches
/// anywhere in the column.
pub fn search(term: &str) -> Statement {
    let sql = format!(
        "{} WHERE LOWER({title}) LIKE LOWER($1) OR LOWER({author}) LIKE LOWER($1) OR LOWER({description}) LIKE LOWER($1)",
        select_from(),
        title = col::TITLE,
        author = col::AUTHOR,
        description = col::DESCRIPTION,
    );

    Statement::with_params(sql, vec![SqlParam::Text(search_pattern(term))])
}

/// Builds the `%term%` LIKE pattern for a search term. Case is preserved.
///
/// ## Example
/// ```rust
/// use bookstore_db::query::search_pattern;
///
/// assert_eq!(search_pattern("Go"), "%Go%");
/// assert_eq!(search_pattern("100%"), "%100\\%%");
/// ```
pub fn search_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Highly rated books, best first.
pub fn featured() -> Statement {
    Statement::new(format!(
        "{} WHERE {rating} >= {min} ORDER BY {rating} DESC, {reviews} DESC LIMIT {limit}",
        select_from(),
        rating = col::RATING,
        reviews = col::REVIEWS_COUNT,
        min = FEATURED_MIN_RATING,
        limit = FEATURED_LIMIT,
    ))
}

/// Books flagged new or created recently, newest first.
pub fn new_arrivals() -> Statement {
    Statement::new(format!(
        "{} WHERE {is_new} = TRUE OR {created} >= NOW() - INTERVAL '{days} days' \
         ORDER BY {created} DESC LIMIT {limit}",
        select_from(),
        is_new = col::IS_NEW,
        created = col::CREATED_AT,
        days = NEW_WINDOW_DAYS,
        limit = NEW_LIMIT,
    ))
}

/// Books on sale, biggest discount first, then by title.
pub fn discounted() -> Statement {
    Statement::new(format!(
        "{} WHERE {discount} > 0 ORDER BY {discount} DESC, {title} ASC LIMIT {limit}",
        select_from(),
        discount = col::DISCOUNT,
        title = col::TITLE,
        limit = DISCOUNTED_LIMIT,
    ))
}

/// Distinct categories in alphabetical order.
pub fn categories() -> Statement {
    Statement::new(format!(
        "SELECT DISTINCT {category} FROM {TABLE} ORDER BY {category}",
        category = col::CATEGORY,
    ))
}

// =============================================================================
// Writes
// =============================================================================

/// Inserts every editable field; the store assigns id and both timestamps.
pub fn insert(input: &BookInput) -> Statement {
    let params = schema::editable_params(input);
    let placeholders = (1..=params.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");

    Statement::with_params(
        format!(
            "INSERT INTO {TABLE} ({}) VALUES ({placeholders}) RETURNING {}, {}, {}",
            schema::insert_list(),
            col::ID,
            col::CREATED_AT,
            col::UPDATED_AT,
        ),
        params,
    )
}

/// Replaces every editable field of one book and returns the full row.
///
/// `updated_at` is set by the store. No row returned means no such id.
pub fn update(id: i32, input: &BookInput) -> Statement {
    let assignments = schema::editable_columns()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", c.name, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let mut params = schema::editable_params(input);
    let id_placeholder = params.len() + 1;
    params.push(SqlParam::Int(id));

    Statement::with_params(
        format!(
            "UPDATE {TABLE} SET {assignments}, {updated} = NOW() WHERE {id_col} = ${id_placeholder} RETURNING {}",
            schema::select_list(),
            updated = col::UPDATED_AT,
            id_col = col::ID,
        ),
        params,
    )
}

/// Hard-deletes one book. Zero rows affected means no such id.
pub fn delete(id: i32) -> Statement {
    Statement::with_params(
        format!("DELETE FROM {TABLE} WHERE {} = $1", col::ID),
        vec![SqlParam::Int(id)],
    )
}

/// Empties the table and resets the id sequence. Development seeding only.
pub fn truncate() -> Statement {
    Statement::new(format!("TRUNCATE TABLE {TABLE} RESTART IDENTITY CASCADE"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SELECT: &str = "SELECT id, title, author, isbn, year, price, category, original_price, \
                          discount, cover_image, rating, reviews_count, is_new, pages, language, \
                          publisher, description, created_at, updated_at FROM books";

    fn input() -> BookInput {
        BookInput {
            title: "The Go Programming Language".to_string(),
            author: "Alan A. A. Donovan".to_string(),
            isbn: "978-0134190440".to_string(),
            year: 2015,
            price: 890.5,
            category: "Programming".to_string(),
            original_price: Some(990.0),
            discount: 10,
            cover_image: "go.jpg".to_string(),
            rating: 4.8,
            reviews_count: 150,
            is_new: false,
            pages: None,
            language: "English".to_string(),
            publisher: "Addison-Wesley Professional".to_string(),
            description: "A comprehensive guide to the Go language.".to_string(),
        }
    }

    #[test]
    fn test_list_without_filter() {
        let stmt = list(None);
        assert_eq!(stmt.sql, SELECT);
        assert!(stmt.params.is_empty());

        // Empty category behaves like no filter
        assert_eq!(list(Some("")), stmt);
    }

    #[test]
    fn test_list_category_is_bound_not_interpolated() {
        let hostile = "x' OR '1'='1";
        let stmt = list(Some(hostile));

        assert_eq!(stmt.sql, format!("{SELECT} WHERE category = $1"));
        assert!(!stmt.sql.contains(hostile));
        assert_eq!(stmt.params, vec![SqlParam::Text(hostile.to_string())]);
    }

    #[test]
    fn test_get_by_id() {
        let stmt = get_by_id(42);
        assert_eq!(stmt.sql, format!("{SELECT} WHERE id = $1"));
        assert_eq!(stmt.params, vec![SqlParam::Int(42)]);
    }

    #[test]
    fn test_search() {
        let stmt = search("KLEPPMANN");
        assert_eq!(
            stmt.sql,
            format!(
                "{SELECT} WHERE LOWER(title) LIKE LOWER($1) OR LOWER(author) LIKE LOWER($1) OR LOWER(description) LIKE LOWER($1)"
            )
        );
        assert_eq!(stmt.params, vec![SqlParam::Text("%KLEPPMANN%".to_string())]);
    }

    #[test]
    fn test_search_leaves_case_folding_to_the_database() {
        let stmt = search("Über Ñandú");
        assert_eq!(stmt.params, vec![SqlParam::Text("%Über Ñandú%".to_string())]);
        assert_eq!(stmt.sql.matches("LIKE LOWER($1)").count(), 3);
    }

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        assert_eq!(search_pattern("data_intensive"), "%data\\_intensive%");
        assert_eq!(search_pattern("a\\b"), "%a\\\\b%");
        assert_eq!(search_pattern("'; DROP TABLE books; --"), "%'; DROP TABLE books; --%");
    }

    #[test]
    fn test_fixed_views() {
        assert_eq!(
            featured().sql,
            format!("{SELECT} WHERE rating >= 4.5 ORDER BY rating DESC, reviews_count DESC LIMIT 10")
        );
        assert_eq!(
            new_arrivals().sql,
            format!(
                "{SELECT} WHERE is_new = TRUE OR created_at >= NOW() - INTERVAL '30 days' \
                 ORDER BY created_at DESC LIMIT 10"
            )
        );
        assert_eq!(
            discounted().sql,
            format!("{SELECT} WHERE discount > 0 ORDER BY discount DESC, title ASC LIMIT 20")
        );
        assert!(featured().params.is_empty());
        assert!(new_arrivals().params.is_empty());
        assert!(discounted().params.is_empty());
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            categories().sql,
            "SELECT DISTINCT category FROM books ORDER BY category"
        );
    }

    #[test]
    fn test_insert() {
        let stmt = insert(&input());

        assert_eq!(
            stmt.sql,
            "INSERT INTO books (title, author, isbn, year, price, category, original_price, \
             discount, cover_image, rating, reviews_count, is_new, pages, language, publisher, \
             description) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
             $15, $16) RETURNING id, created_at, updated_at"
        );
        assert_eq!(stmt.params.len(), 16);
        assert_eq!(stmt.params[6], SqlParam::NullableFloat(Some(990.0)));
        assert_eq!(stmt.params[12], SqlParam::NullableInt(None));
    }

    #[test]
    fn test_update() {
        let stmt = update(3, &input());

        assert!(stmt.sql.starts_with("UPDATE books SET title = $1, author = $2, "));
        assert!(stmt
            .sql
            .contains("publisher = $15, description = $16, updated_at = NOW() WHERE id = $17"));
        assert!(stmt.sql.ends_with(
            "RETURNING id, title, author, isbn, year, price, category, original_price, discount, \
             cover_image, rating, reviews_count, is_new, pages, language, publisher, description, \
             created_at, updated_at"
        ));
        assert!(!stmt.sql.contains("created_at = "));
        assert_eq!(stmt.params.len(), 17);
        assert_eq!(stmt.params[16], SqlParam::Int(3));
    }

    #[test]
    fn test_delete_and_truncate() {
        let stmt = delete(9);
        assert_eq!(stmt.sql, "DELETE FROM books WHERE id = $1");
        assert_eq!(stmt.params, vec![SqlParam::Int(9)]);

        assert_eq!(
            truncate().sql,
            "TRUNCATE TABLE books RESTART IDENTITY CASCADE"
        );
    }
}
