//! Health command implementation

use super::Client;
use anyhow::{Context, Result};
use bookstore_core::BookApi;

/// Probe the backend's health endpoint
pub async fn health(client: &Client) -> Result<()> {
    let api = client.api();
    let health = api
        .health()
        .await
        .with_context(|| format!("Backend at {} is unreachable", api.base_url()))?;

    println!("Backend: {}", health.status);
    if let Some(message) = health.message {
        println!("  {}", message);
    }
    Ok(())
}
