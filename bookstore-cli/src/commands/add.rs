//! Add command implementation

use super::{report, Client};
use anyhow::Result;
use bookstore_core::AddBookForm;

/// Submit a new book and show the refreshed total
pub async fn add(client: &mut Client, form: AddBookForm) -> Result<()> {
    let since = client.state().form_message.generation;

    let effects = client.create(form).await;
    client.settle(effects).await;

    report(client, since)?;
    println!("Total: {} books", client.state().total_books());
    Ok(())
}
