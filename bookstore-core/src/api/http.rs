//! reqwest-backed implementation of [`BookApi`]

use super::BookApi;
use crate::error::{ApiError, Result};
use crate::types::{
    Book, BookList, BookStats, BookUpdate, ErrorBody, HealthStatus, MutationAck, NewBook,
};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// Talks to the REST backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: Client,
    /// API root, e.g. `http://localhost:8080/api`
    base: String,
}

impl HttpBookApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    /// Use a preconfigured reqwest client (timeouts, proxies)
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        let base = api_url.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base)
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base, urlencoding::encode(id))
    }

    fn stats_url(&self) -> String {
        format!("{}/books/stats/count", self.base)
    }

    /// The health probe sits at the server root, beside the `/api` prefix
    fn health_url(&self) -> String {
        let root = self.base.strip_suffix("/api").unwrap_or(&self.base);
        format!("{}/health", root)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`]
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());

    tracing::debug!(status = status.as_u16(), ?message, "Backend rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Mutation bodies vary between backends; anything undecodable is an empty ack
async fn ack(response: Response) -> Result<MutationAck> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).unwrap_or_default())
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list(&self) -> Result<BookList> {
        let url = self.books_url();
        tracing::debug!(%url, "GET books");
        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Book> {
        let url = self.book_url(id);
        tracing::debug!(%url, "GET book");
        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, book: &NewBook) -> Result<MutationAck> {
        let url = self.books_url();
        tracing::debug!(%url, title = %book.title, "POST book");
        let response = check(self.client.post(&url).json(book).send().await?).await?;
        ack(response).await
    }

    async fn update(&self, id: &str, update: &BookUpdate) -> Result<MutationAck> {
        let url = self.book_url(id);
        tracing::debug!(%url, "PUT book");
        let response = check(self.client.put(&url).json(update).send().await?).await?;
        ack(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.book_url(id);
        tracing::debug!(%url, "DELETE book");
        check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }

    async fn count(&self) -> Result<BookStats> {
        let url = self.stats_url();
        tracing::debug!(%url, "GET book count");
        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.health_url();
        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }
}
