//! # Domain Types
//!
//! The catalog has exactly one entity: a book.
//!
//! ## Type Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        BookInput         │        │           Book           │      │
//! │  │  ──────────────────────  │        │  ──────────────────────  │      │
//! │  │  editable fields only    │ ─────► │  id (store-assigned)     │      │
//! │  │  (POST / PUT body)       │ insert │  BookInput fields        │      │
//! │  │                          │ update │  created_at, updated_at  │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Nullable Fields
//! `original_price` and `pages` are `Option`s. Absence is a real state
//! distinct from zero: it serializes as JSON `null` and is bound as SQL
//! `NULL`, never as `0`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// =============================================================================
// Book
// =============================================================================

/// A catalog entry as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Book {
    /// Store-assigned identifier, immutable after creation.
    pub id: i32,

    pub title: String,
    pub author: String,
    pub isbn: String,

    /// Publication year.
    pub year: i32,

    /// Current selling price.
    pub price: f64,

    pub category: String,

    /// Price before discount, when the book is on sale.
    pub original_price: Option<f64>,

    /// Discount percentage (0-100).
    pub discount: i32,

    /// Cover image reference (file name or URL).
    pub cover_image: String,

    /// Average rating (0.0-5.0).
    pub rating: f64,

    pub reviews_count: i32,

    /// Flagged as a new arrival regardless of creation date.
    pub is_new: bool,

    /// Page count, when known.
    pub pages: Option<i32>,

    pub language: String,
    pub publisher: String,

    /// Free-text description, may be empty.
    pub description: String,

    /// When the book was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the book was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Assembles a record from the written fields and the store-assigned ones.
    pub fn from_input(
        id: i32,
        input: BookInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Book {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            year: input.year,
            price: input.price,
            category: input.category,
            original_price: input.original_price,
            discount: input.discount,
            cover_image: input.cover_image,
            rating: input.rating,
            reviews_count: input.reviews_count,
            is_new: input.is_new,
            pages: input.pages,
            language: input.language,
            publisher: input.publisher,
            description: input.description,
            created_at,
            updated_at,
        }
    }

    /// Returns the editable portion of this record.
    pub fn to_input(&self) -> BookInput {
        BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            year: self.year,
            price: self.price,
            category: self.category.clone(),
            original_price: self.original_price,
            discount: self.discount,
            cover_image: self.cover_image.clone(),
            rating: self.rating,
            reviews_count: self.reviews_count,
            is_new: self.is_new,
            pages: self.pages,
            language: self.language.clone(),
            publisher: self.publisher.clone(),
            description: self.description.clone(),
        }
    }
}

// =============================================================================
// Book Input
// =============================================================================

/// The client-writable fields of a book (request body for create and update).
///
/// Fields without `#[serde(default)]` are required: a body that omits them
/// fails to deserialize. Update replaces every field wholesale, so omitted
/// optional fields are reset to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub price: f64,
    pub category: String,

    #[serde(default)]
    pub original_price: Option<f64>,

    #[serde(default)]
    pub discount: i32,

    pub cover_image: String,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub reviews_count: i32,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub pages: Option<i32>,

    pub language: String,
    pub publisher: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Accepts `"description": null` the same as an omitted description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_body() -> serde_json::Value {
        json!({
            "title": "Test Driven Development",
            "author": "Kent Beck",
            "isbn": "978-0321146533",
            "year": 2002,
            "price": 1290.0,
            "category": "Programming",
            "cover_image": "tdd.jpg",
            "language": "English",
            "publisher": "Addison-Wesley"
        })
    }

    #[test]
    fn test_input_defaults_optional_fields() {
        let input: BookInput = serde_json::from_value(minimal_body()).unwrap();

        assert_eq!(input.original_price, None);
        assert_eq!(input.pages, None);
        assert_eq!(input.discount, 0);
        assert_eq!(input.rating, 0.0);
        assert_eq!(input.reviews_count, 0);
        assert!(!input.is_new);
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let mut body = minimal_body();
        body["description"] = serde_json::Value::Null;

        let input: BookInput = serde_json::from_value(body).unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_input_missing_required_field_is_rejected() {
        let mut body = minimal_body();
        body.as_object_mut().unwrap().remove("isbn");

        let err = serde_json::from_value::<BookInput>(body).unwrap_err();
        assert!(err.to_string().contains("isbn"));
    }

    #[test]
    fn test_absent_nullable_fields_serialize_as_null() {
        let input: BookInput = serde_json::from_value(minimal_body()).unwrap();
        let now = Utc::now();
        let book = Book::from_input(7, input, now, now);

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], json!(7));
        assert!(value["original_price"].is_null());
        assert!(value["pages"].is_null());
    }

    #[test]
    fn test_input_round_trips_through_book() {
        let mut input: BookInput = serde_json::from_value(minimal_body()).unwrap();
        input.original_price = Some(1500.0);
        input.pages = Some(240);

        let now = Utc::now();
        let book = Book::from_input(1, input.clone(), now, now);
        assert_eq!(book.to_input(), input);
    }
}
