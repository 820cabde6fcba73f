//! Book attribute validation
//!
//! Pure field-level checks enforced before every write. The checks run in a
//! fixed order and stop at the first failure, so when several fields are
//! invalid at once the surfaced message is deterministic:
//!
//! 1. rating must be in the range 1-3
//! 2. title, author and publisher must not be blank or whitespace-only
//! 3. status must equal either "CheckedIn" or "CheckedOut"
//! 4. publish date must be non-blank and composed of decimal digits only

use crate::db::models::Book;

/// Status value for a book currently on the shelf
pub const CHECKED_IN: &str = "CheckedIn";

/// Status value for a book currently borrowed
pub const CHECKED_OUT: &str = "CheckedOut";

/// A failed field check; the `Display` string is the wire-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid rating range")]
    RatingRange,

    #[error("invalid text entry")]
    TextEntry,

    #[error("invalid status entry")]
    StatusEntry,

    #[error("invalid date entry")]
    DateEntry,
}

/// Validate a book record against all field constraints.
///
/// Pure function, no I/O. Returns the first failed check.
pub fn validate(book: &Book) -> Result<(), ValidationError> {
    if !(1..=3).contains(&book.rating) {
        return Err(ValidationError::RatingRange);
    }

    for value in [&book.title, &book.author, &book.publisher] {
        if value.trim().is_empty() {
            return Err(ValidationError::TextEntry);
        }
    }

    if book.status != CHECKED_IN && book.status != CHECKED_OUT {
        return Err(ValidationError::StatusEntry);
    }

    // Whitespace is not a digit, so this also rejects blank entries.
    if book.publish_date.is_empty() || !book.publish_date.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::DateEntry);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_book() -> Book {
        Book {
            id: "b-1".to_string(),
            title: "The Moon Is a Harsh Mistress".to_string(),
            author: "Robert A. Heinlein".to_string(),
            publisher: "Putnam".to_string(),
            publish_date: "1966".to_string(),
            rating: 2,
            status: CHECKED_IN.to_string(),
        }
    }

    #[test]
    fn test_valid_book_passes() {
        assert_eq!(validate(&valid_book()), Ok(()));
    }

    #[test]
    fn test_rating_bounds() {
        for rating in 1..=3 {
            let book = Book {
                rating,
                ..valid_book()
            };
            assert_eq!(validate(&book), Ok(()));
        }
        for rating in [0, 4, -1, 40] {
            let book = Book {
                rating,
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::RatingRange));
        }
    }

    #[test]
    fn test_blank_text_fields_rejected() {
        for value in ["", " ", "\t", " \n "] {
            let book = Book {
                title: value.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::TextEntry));

            let book = Book {
                author: value.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::TextEntry));

            let book = Book {
                publisher: value.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::TextEntry));
        }
    }

    #[test]
    fn test_status_is_case_sensitive() {
        for status in [CHECKED_IN, CHECKED_OUT] {
            let book = Book {
                status: status.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Ok(()));
        }
        for status in ["checkedin", "CHECKEDOUT", "Checked In", "Lost", ""] {
            let book = Book {
                status: status.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::StatusEntry));
        }
    }

    #[test]
    fn test_publish_date_digits_only() {
        for date in ["1969", "0", "20240101"] {
            let book = Book {
                publish_date: date.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Ok(()));
        }
        for date in ["", " ", "19A9", "1969 ", "-1969", "19.69"] {
            let book = Book {
                publish_date: date.to_string(),
                ..valid_book()
            };
            assert_eq!(validate(&book), Err(ValidationError::DateEntry));
        }
    }

    #[test]
    fn test_rating_is_checked_first() {
        // Rating and title both invalid: the rating message wins.
        let book = Book {
            rating: 0,
            title: String::new(),
            ..valid_book()
        };
        assert_eq!(validate(&book), Err(ValidationError::RatingRange));

        // Title and status both invalid: the text message wins.
        let book = Book {
            title: String::new(),
            status: "Lost".to_string(),
            ..valid_book()
        };
        assert_eq!(validate(&book), Err(ValidationError::TextEntry));

        // Status and date both invalid: the status message wins.
        let book = Book {
            status: "Lost".to_string(),
            publish_date: "19A9".to_string(),
            ..valid_book()
        };
        assert_eq!(validate(&book), Err(ValidationError::StatusEntry));
    }

    proptest! {
        #[test]
        fn prop_rating_outside_range_rejected(
            rating in any::<i64>().prop_filter("outside 1-3", |r| !(1..=3).contains(r))
        ) {
            let book = Book { rating, ..valid_book() };
            prop_assert_eq!(validate(&book), Err(ValidationError::RatingRange));
        }

        #[test]
        fn prop_digit_strings_accepted(date in "[0-9]{1,8}") {
            let book = Book { publish_date: date, ..valid_book() };
            prop_assert_eq!(validate(&book), Ok(()));
        }

        #[test]
        fn prop_non_digit_dates_rejected(date in "[0-9]{0,4}[^0-9][0-9a-zA-Z]{0,4}") {
            let book = Book { publish_date: date, ..valid_book() };
            prop_assert_eq!(validate(&book), Err(ValidationError::DateEntry));
        }
    }
}
