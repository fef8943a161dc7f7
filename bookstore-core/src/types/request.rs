//! Request and response bodies for the mutation endpoints

use serde::{Deserialize, Serialize};

/// Body of `POST /books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

/// Body of `PUT /books/{id}`: the editable subset of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub quantity: u32,
}

/// Acknowledgement returned by a successful mutation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,

    /// Id of a newly created book
    #[serde(default)]
    pub book_id: Option<String>,
}

/// Structured error payload sent with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Response of `GET /books/stats/count`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BookStats {
    #[serde(default)]
    pub total_books: u64,
}

/// Response of the backend's `/health` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,
}
