//! # Validation Module
//!
//! Input validation for the bookstore catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Required fields present                                           │
//! │  └── Correct JSON types                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required strings not blank                                        │
//! │  └── Numeric ranges (price, discount, rating, pages)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (PostgreSQL)                                        │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A request that fails layer 1 or 2 never reaches the store.

use crate::error::ValidationError;
use crate::types::BookInput;
use crate::{MAX_DISCOUNT_PERCENT, MAX_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Book Input
// =============================================================================

impl BookInput {
    /// Checks every field rule, returning the first violation.
    ///
    /// ## Rules
    /// - title, author, isbn, category, cover_image, language, publisher: not blank
    /// - price >= 0, original_price >= 0 when present
    /// - discount in 0..=100, rating in 0.0..=5.0, reviews_count >= 0
    /// - pages > 0 when present
    ///
    /// ## Example
    /// ```rust,ignore
    /// input.validate()?;
    /// store.create(input).await?;
    /// ```
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("title", &self.title)?;
        validate_required("author", &self.author)?;
        validate_required("isbn", &self.isbn)?;
        validate_required("category", &self.category)?;
        validate_required("cover_image", &self.cover_image)?;
        validate_required("language", &self.language)?;
        validate_required("publisher", &self.publisher)?;

        validate_price("price", self.price)?;
        if let Some(original_price) = self.original_price {
            validate_price("original_price", original_price)?;
        }

        validate_discount(self.discount)?;
        validate_rating(self.rating)?;

        if self.reviews_count < 0 {
            return Err(ValidationError::Negative {
                field: "reviews_count".to_string(),
            });
        }

        if let Some(pages) = self.pages {
            if pages <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "pages".to_string(),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required string field is not blank.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_required;
///
/// assert!(validate_required("title", "Clean Architecture").is_ok());
/// assert!(validate_required("title", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a search term.
///
/// A blank term is rejected. Anything else is returned exactly as sent,
/// surrounding whitespace included, with no length cap.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    validate_required("q", term)?;
    Ok(term.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price. Zero is allowed (free books), negatives and NaN are not.
pub fn validate_price(field: &str, price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage (0-100 inclusive).
pub fn validate_discount(discount: i32) -> ValidationResult<()> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT as f64,
        });
    }

    Ok(())
}

/// Validates a rating (0.0-5.0 inclusive).
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookInput {
        BookInput {
            title: "Designing Data-Intensive Applications".to_string(),
            author: "Martin Kleppmann".to_string(),
            isbn: "978-1449373320".to_string(),
            year: 2017,
            price: 1500.75,
            category: "Database".to_string(),
            original_price: None,
            discount: 0,
            cover_image: "data.jpg".to_string(),
            rating: 4.9,
            reviews_count: 200,
            is_new: false,
            pages: Some(650),
            language: "English".to_string(),
            publisher: "O'Reilly Media".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_blank_required_strings() {
        let mut input = valid_input();
        input.publisher = "  ".to_string();
        assert_eq!(
            input.validate(),
            Err(ValidationError::Required {
                field: "publisher".to_string()
            })
        );

        let mut input = valid_input();
        input.title = String::new();
        assert_eq!(input.validate().unwrap_err().field(), "title");
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let mut input = valid_input();
        input.description = String::new();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_prices() {
        let mut input = valid_input();
        input.price = 0.0;
        assert!(input.validate().is_ok());

        input.price = -1.0;
        assert_eq!(input.validate().unwrap_err().field(), "price");

        let mut input = valid_input();
        input.original_price = Some(-10.0);
        assert_eq!(input.validate().unwrap_err().field(), "original_price");

        assert!(validate_price("price", f64::NAN).is_err());
    }

    #[test]
    fn test_discount_bounds() {
        assert!(validate_discount(0).is_ok());
        assert!(validate_discount(100).is_ok());
        assert!(validate_discount(-1).is_err());
        assert!(validate_discount(101).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_pages_and_reviews() {
        let mut input = valid_input();
        input.pages = Some(0);
        assert_eq!(input.validate().unwrap_err().field(), "pages");

        input.pages = None;
        assert!(input.validate().is_ok());

        input.reviews_count = -5;
        assert_eq!(input.validate().unwrap_err().field(), "reviews_count");
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term(" go ").unwrap(), " go ");
        assert!(validate_search_term("").is_err());
        assert!(validate_search_term("   ").is_err());
        assert!(validate_search_term("\t\n").is_err());

        let long = "a".repeat(500);
        assert_eq!(validate_search_term(&long).unwrap(), long);
    }
}
