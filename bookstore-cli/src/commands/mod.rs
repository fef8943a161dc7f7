//! CLI command implementations

mod add;
mod delete;
mod edit;
mod health;
mod list;
mod stats;

pub use add::add;
pub use delete::delete;
pub use edit::{edit, EditChanges};
pub use health::health;
pub use list::list;
pub use stats::stats;

use anyhow::{bail, Result};
use bookstore_core::{CatalogClient, HttpBookApi, Outcome};

/// Catalog session used by every command
pub type Client = CatalogClient<HttpBookApi>;

/// Print the feedback an operation left behind.
///
/// `since` is the message generation before the operation; error
/// feedback fails the command.
fn report(client: &Client, since: u64) -> Result<()> {
    let message = &client.state().form_message;
    if message.generation == since {
        return Ok(());
    }
    match message.outcome {
        Some(Outcome::Error) => bail!("{}", message.text),
        _ => {
            println!("{}", message.text);
            Ok(())
        }
    }
}
