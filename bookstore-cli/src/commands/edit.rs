//! Edit command implementation

use super::{report, Client};
use anyhow::{bail, Result};

/// Fields given on the command line; `None` keeps the staged value
#[derive(Debug, Default)]
pub struct EditChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

/// Stage the book into the edit form, apply the changes and submit
pub async fn edit(client: &mut Client, id: &str, changes: EditChanges) -> Result<()> {
    let since = client.state().form_message.generation;

    let effects = client.open_edit_by_id(id).await;
    client.settle(effects).await;
    let Some(mut form) = client.state().edit_form().cloned() else {
        report(client, since)?;
        bail!("Book {} could not be opened for editing", id);
    };

    if let Some(title) = changes.title {
        form.title = title;
    }
    if let Some(author) = changes.author {
        form.author = author;
    }
    if let Some(price) = changes.price {
        form.price = price;
    }
    if let Some(quantity) = changes.quantity {
        form.quantity = quantity;
    }

    let effects = client.update(form).await;
    client.settle(effects).await;
    report(client, since)
}
