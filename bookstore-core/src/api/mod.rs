//! REST backend abstraction

mod http;

pub use http::HttpBookApi;

use crate::error::Result;
use crate::types::{Book, BookList, BookStats, BookUpdate, HealthStatus, MutationAck, NewBook};
use async_trait::async_trait;
use std::sync::Arc;

/// The book endpoints of the REST backend.
///
/// Each call is one request attempt; implementations never retry.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /books`
    async fn list(&self) -> Result<BookList>;

    /// `GET /books/{id}`
    async fn get(&self, id: &str) -> Result<Book>;

    /// `POST /books`
    async fn create(&self, book: &NewBook) -> Result<MutationAck>;

    /// `PUT /books/{id}`
    async fn update(&self, id: &str, update: &BookUpdate) -> Result<MutationAck>;

    /// `DELETE /books/{id}`
    async fn delete(&self, id: &str) -> Result<()>;

    /// `GET /books/stats/count`
    async fn count(&self) -> Result<BookStats>;

    /// Backend liveness probe
    async fn health(&self) -> Result<HealthStatus>;
}

#[async_trait]
impl<T: BookApi + ?Sized> BookApi for Arc<T> {
    async fn list(&self) -> Result<BookList> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> Result<Book> {
        (**self).get(id).await
    }

    async fn create(&self, book: &NewBook) -> Result<MutationAck> {
        (**self).create(book).await
    }

    async fn update(&self, id: &str, update: &BookUpdate) -> Result<MutationAck> {
        (**self).update(id, update).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id).await
    }

    async fn count(&self) -> Result<BookStats> {
        (**self).count().await
    }

    async fn health(&self) -> Result<HealthStatus> {
        (**self).health().await
    }
}
