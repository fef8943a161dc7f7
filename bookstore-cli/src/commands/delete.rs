//! Delete command implementation

use super::{report, Client};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Ask on the terminal; only an explicit yes confirms
fn prompt_yes_no(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Delete a book after confirmation
pub async fn delete(client: &mut Client, id: &str, yes: bool) -> Result<()> {
    let since = client.state().form_message.generation;

    let effects = client
        .delete(id, &mut |prompt: &str| yes || prompt_yes_no(prompt))
        .await;
    if effects.is_empty() {
        println!("Cancelled");
        return Ok(());
    }

    client.settle(effects).await;
    report(client, since)
}
