//! HTML rendering of the book list container
//!
//! Every interpolated value goes through [`escape_html`], in text and in
//! attributes alike. Cards carry their book id in `data-book-id` and
//! their buttons submit `action:id` to one delegated listener on the
//! container; no markup embeds executable handlers.

use crate::config::Variant;
use crate::state::{ListView, UiState};
use crate::types::Book;
use std::fmt::Write;

/// Per-card delay step for the list render animation, in seconds
const LIST_STAGGER: f64 = 0.08;

/// Per-card delay step for the first render after page load, in seconds
const ENTRANCE_STAGGER: f64 = 0.1;

pub const EMPTY_TITLE: &str = "Your collection is empty";
pub const EMPTY_HINT: &str = "Add your first book above to get started!";
pub const UNREACHABLE_TITLE: &str = "Could not connect to server";
pub const UNREACHABLE_HINT: &str = "Make sure the backend is running";
pub const LOADING_TITLE: &str = "Loading your collection...";

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Display form of a price tag
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Inner markup of the list container for the current state
pub fn render_book_list(state: &UiState, variant: Variant) -> String {
    match &state.list {
        ListView::NotLoaded => placeholder(LOADING_TITLE, None),
        ListView::Unreachable => placeholder(UNREACHABLE_TITLE, Some(UNREACHABLE_HINT)),
        ListView::Loaded(list) if list.is_empty() => placeholder(EMPTY_TITLE, Some(EMPTY_HINT)),
        ListView::Loaded(list) => {
            let stagger = variant.is_rich().then_some(if state.entrance {
                ENTRANCE_STAGGER
            } else {
                LIST_STAGGER
            });
            list.books
                .iter()
                .enumerate()
                .map(|(index, book)| {
                    let removing = variant.is_rich() && state.removing.as_deref() == Some(&book.id);
                    render_book_card(book, stagger.map(|step| step * index as f64), removing)
                })
                .collect()
        }
    }
}

/// One book card. `delay` is the entrance animation delay in seconds.
pub fn render_book_card(book: &Book, delay: Option<f64>, removing: bool) -> String {
    let id = escape_html(&book.id);
    let mut html = String::new();

    let class = if removing { "book-card removing" } else { "book-card" };
    let _ = write!(html, r#"<div class="{class}" data-book-id="{id}""#);
    if let Some(delay) = delay {
        let _ = write!(html, r#" style="animation-delay: {delay:.2}s""#);
    }
    html.push('>');

    let _ = write!(
        html,
        r#"<div class="book-info"><h3>{}</h3><p class="author">by {}</p><div class="book-meta">"#,
        escape_html(&book.title),
        escape_html(&book.author),
    );
    if book.price != 0.0 {
        let _ = write!(html, r#"<span class="meta-tag">{}</span>"#, format_price(book.price));
    }
    if book.quantity != 0 {
        let _ = write!(html, r#"<span class="meta-tag">{} in stock</span>"#, book.quantity);
    }
    if let Some(isbn) = book.isbn() {
        let _ = write!(html, r#"<span class="meta-tag">{}</span>"#, escape_html(isbn));
    }
    html.push_str("</div></div>");

    let _ = write!(
        html,
        concat!(
            r#"<div class="book-actions">"#,
            r#"<button type="submit" class="btn-action btn-edit" name="target" value="edit:{id}" data-action="edit" title="Edit">Edit</button>"#,
            r#"<button type="submit" class="btn-action btn-delete" name="target" value="delete:{id}" data-action="delete" title="Delete">Delete</button>"#,
            "</div></div>"
        ),
        id = id
    );
    html
}

fn placeholder(title: &str, hint: Option<&str>) -> String {
    let mut html = format!(r#"<div class="no-books"><p>{}</p>"#, escape_html(title));
    if let Some(hint) = hint {
        let _ = write!(html, r#"<p class="hint">{}</p>"#, escape_html(hint));
    }
    html.push_str("</div>");
    html
}
