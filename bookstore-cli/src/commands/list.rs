//! List command implementation

use super::Client;
use anyhow::{bail, Result};
use bookstore_core::html::{
    format_price, render_book_list, EMPTY_HINT, EMPTY_TITLE, UNREACHABLE_HINT, UNREACHABLE_TITLE,
};
use bookstore_core::{Book, ListView};

/// One line per book: id, title, author and whichever tags apply
fn book_line(book: &Book) -> String {
    let mut tags = Vec::new();
    if book.price != 0.0 {
        tags.push(format_price(book.price));
    }
    if book.quantity != 0 {
        tags.push(format!("{} in stock", book.quantity));
    }
    if let Some(isbn) = book.isbn() {
        tags.push(isbn.to_string());
    }

    let mut line = format!("{:<24}  {} by {}", book.id, book.title, book.author);
    if !tags.is_empty() {
        line.push_str("  [");
        line.push_str(&tags.join(", "));
        line.push(']');
    }
    line
}

/// Fetch and print the collection
pub async fn list(client: &mut Client, json: bool, html: bool) -> Result<()> {
    client.list().await;

    let state = client.state();
    let ListView::Loaded(books) = &state.list else {
        eprintln!("{}", UNREACHABLE_TITLE);
        eprintln!("{}", UNREACHABLE_HINT);
        bail!("Could not load books from {}", client.api().base_url());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
        return Ok(());
    }

    if html {
        println!("{}", render_book_list(state, client.variant()));
        return Ok(());
    }

    if books.is_empty() {
        println!("{}", EMPTY_TITLE);
        println!("{}", EMPTY_HINT);
        return Ok(());
    }

    for book in &books.books {
        println!("{}", book_line(book));
    }
    println!("Total: {} books", books.total_books);

    Ok(())
}
