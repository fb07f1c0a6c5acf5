//! # Development Seed Data
//!
//! A destructive reseed: empty the table, restart ids at 1, insert three
//! known books. Used by the `seed` binary and by `catalog-api` when
//! `SEED_ON_STARTUP=true`.

use bookstore_core::BookInput;
use tracing::info;

use crate::error::DbResult;
use crate::repository::book::BookRepository;
use crate::store::BookStore;

/// The sample catalog, in insertion order (ids 1, 2, 3 after a reseed).
pub fn sample_books() -> Vec<BookInput> {
    vec![
        BookInput {
            title: "The Go Programming Language".to_string(),
            author: "Alan A. A. Donovan".to_string(),
            isbn: "978-0134190440".to_string(),
            year: 2015,
            price: 890.50,
            category: "Programming".to_string(),
            original_price: Some(990.00),
            discount: 10,
            cover_image: "go.jpg".to_string(),
            rating: 4.8,
            reviews_count: 150,
            is_new: false,
            pages: Some(500),
            language: "English".to_string(),
            publisher: "Addison-Wesley Professional".to_string(),
            description: "A comprehensive guide to the Go language.".to_string(),
        },
        BookInput {
            title: "Clean Architecture".to_string(),
            author: "Robert C. Martin".to_string(),
            isbn: "978-0134494166".to_string(),
            year: 2017,
            price: 1250.00,
            category: "Software Design".to_string(),
            original_price: Some(1600.00),
            discount: 21,
            cover_image: "clean.jpg".to_string(),
            rating: 4.5,
            reviews_count: 90,
            is_new: true,
            pages: Some(800),
            language: "English".to_string(),
            publisher: "Prentice Hall".to_string(),
            description: "A blueprint for software structure.".to_string(),
        },
        BookInput {
            title: "Designing Data-Intensive Applications".to_string(),
            author: "Martin Kleppmann".to_string(),
            isbn: "978-1449373320".to_string(),
            year: 2017,
            price: 1500.75,
            category: "Database".to_string(),
            original_price: Some(1500.75),
            discount: 0,
            cover_image: "data.jpg".to_string(),
            rating: 4.9,
            reviews_count: 200,
            is_new: false,
            pages: Some(650),
            language: "English".to_string(),
            publisher: "O'Reilly Media".to_string(),
            description: "The essential guide to the fundamentals of systems.".to_string(),
        },
    ]
}

/// Truncates `books` and inserts [`sample_books`]. Returns the insert count.
///
/// Stops at the first failed insert.
pub async fn reseed(books: &BookRepository) -> DbResult<usize> {
    books.truncate().await?;
    info!("Table 'books' cleared");

    let mut inserted = 0;
    for input in sample_books() {
        books.create(input).await?;
        inserted += 1;
    }

    info!(inserted, "Database seeded with sample books");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_books_are_valid() {
        for book in sample_books() {
            assert!(book.validate().is_ok(), "{} should validate", book.title);
        }
    }

    #[test]
    fn test_sample_books_cover_distinct_categories() {
        let books = sample_books();
        let mut categories: Vec<&str> = books.iter().map(|b| b.category.as_str()).collect();
        categories.sort();
        categories.dedup();

        assert_eq!(categories, vec!["Database", "Programming", "Software Design"]);
    }
}
