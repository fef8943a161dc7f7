//! Form values and numeric coercion
//!
//! Forms hold raw text exactly as typed. Conversion to request bodies
//! coerces numbers: malformed input becomes 0, never NaN and never an
//! omitted field. There is no other client-side validation.

use crate::types::{Book, BookUpdate, NewBook};
use serde::{Deserialize, Serialize};

/// Parse a price the way a lenient number input does.
///
/// Leading whitespace is skipped and the longest decimal prefix is used,
/// so `"12.50 EUR"` is 12.5. Anything unparseable, non-finite or negative
/// is 0.
pub fn parse_price(text: &str) -> f64 {
    let text = text.trim_start();
    let len = decimal_prefix_len(text);
    if len == 0 {
        return 0.0;
    }
    match text[..len].parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parse a quantity from its leading integer digits.
///
/// `"3.9"` is 3 and `"7 copies"` is 7. Unparseable or negative input is 0;
/// values past `u32::MAX` saturate.
pub fn parse_quantity(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }
    digits[..end]
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
}

/// Length of the longest prefix of `s` that reads as a decimal number
fn decimal_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // Exponent only counts when digits follow it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// The add-book form, as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub quantity: String,
    pub publication_date: String,
}

impl AddBookForm {
    /// Build the `POST /books` body
    pub fn to_new_book(&self) -> NewBook {
        let publication_date = self.publication_date.trim();
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            price: parse_price(&self.price),
            quantity: parse_quantity(&self.quantity),
            publication_date: (!publication_date.is_empty())
                .then(|| publication_date.to_string()),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The edit-book form staged inside the modal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditBookForm {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: String,
    pub quantity: String,
}

impl EditBookForm {
    /// Stage explicit values into the form inputs
    pub fn stage(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    pub fn from_book(book: &Book) -> Self {
        Self::stage(
            book.id.clone(),
            book.title.clone(),
            book.author.clone(),
            book.price,
            book.quantity,
        )
    }

    /// Build the `PUT /books/{id}` body
    pub fn to_update(&self) -> BookUpdate {
        BookUpdate {
            title: self.title.clone(),
            author: self.author.clone(),
            price: parse_price(&self.price),
            quantity: parse_quantity(&self.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99"), 9.99);
        assert_eq!(parse_price("  12.5abc"), 12.5);
        assert_eq!(parse_price(".5"), 0.5);
        assert_eq!(parse_price("5."), 5.0);
        assert_eq!(parse_price("1e2"), 100.0);
        assert_eq!(parse_price("1e"), 1.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("."), 0.0);
        assert_eq!(parse_price("-4"), 0.0);
        assert_eq!(parse_price("1e999"), 0.0);
        assert_eq!(parse_price("Infinity"), 0.0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity(" 7 copies"), 7);
        assert_eq!(parse_quantity("+2"), 2);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("x1"), 0);
        assert_eq!(parse_quantity("-5"), 0);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }

    #[test]
    fn test_add_form_to_new_book() {
        let form = AddBookForm {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "9780441013593".into(),
            price: "abc".into(),
            quantity: "".into(),
            publication_date: "  ".into(),
        };
        let book = form.to_new_book();
        assert_eq!(book.price, 0.0);
        assert_eq!(book.quantity, 0);
        assert_eq!(book.publication_date, None);
    }

    #[test]
    fn test_edit_form_stage_renders_plain_numbers() {
        let form = EditBookForm::stage("42", "Dune", "Herbert", 9.99, 3);
        assert_eq!(form.id, "42");
        assert_eq!(form.price, "9.99");
        assert_eq!(form.quantity, "3");
        assert_eq!(EditBookForm::stage("1", "", "", 10.0, 0).price, "10");
    }

    #[test]
    fn test_edit_form_round_trips_through_update() {
        let mut book = Book::new("7", "Emma", "Austen");
        book.price = 4.5;
        book.quantity = 12;
        let update = EditBookForm::from_book(&book).to_update();
        assert_eq!(update.price, 4.5);
        assert_eq!(update.quantity, 12);
    }

    proptest! {
        #[test]
        fn price_is_always_a_non_negative_number(input in ".*") {
            let price = parse_price(&input);
            prop_assert!(price.is_finite());
            prop_assert!(price >= 0.0);
        }

        #[test]
        fn new_book_body_always_has_numeric_fields(price in ".*", quantity in ".*") {
            let form = AddBookForm {
                title: "t".into(),
                author: "a".into(),
                price,
                quantity,
                ..Default::default()
            };
            let body = serde_json::to_value(form.to_new_book()).unwrap();
            prop_assert!(body["price"].is_number());
            prop_assert!(body["quantity"].is_u64());
        }
    }
}
