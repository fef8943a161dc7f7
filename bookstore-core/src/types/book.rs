//! The Book record as served by the backend

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog record.
///
/// The client holds only a transient copy of each book, taken from the
/// last list response. Text and numeric fields tolerate `null` and missing
/// values so that loosely-typed backend documents still render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Server-assigned opaque identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Unit price, never negative
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: f64,

    /// Copies in stock
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Creation timestamp as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Book {
    /// Create a book with the required fields and zeroed stock
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: None,
            price: 0.0,
            quantity: 0,
            publication_date: None,
            created_at: None,
        }
    }

    /// ISBN, treating an empty string as absent
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// The listing endpoint's response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookList {
    #[serde(default)]
    pub total_books: u64,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl BookList {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            total_books: books.len() as u64,
            books,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a listed book by id
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.trunc().min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}
