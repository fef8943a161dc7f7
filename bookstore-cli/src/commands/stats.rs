//! Stats command implementation

use super::Client;
use anyhow::{Context, Result};
use bookstore_core::BookApi;

/// Print the backend's book count
pub async fn stats(client: &Client) -> Result<()> {
    let api = client.api();
    let stats = api
        .count()
        .await
        .with_context(|| format!("Could not read stats from {}", api.base_url()))?;

    println!("Total books: {}", stats.total_books);
    Ok(())
}
