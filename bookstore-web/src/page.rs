//! Catalog page rendering
//!
//! The page is a pure function of the session's [`UiState`]. Element ids
//! are the contract the stylesheet and the page scripts rely on.

use bookstore_core::client::messages;
use bookstore_core::html::{escape_html, render_book_list};
use bookstore_core::{ClientConfig, UiState, Variant};
use std::fmt::Write;

const STYLE: &str = r#"
:root { --success: #00c853; --danger: #ff5252; }
body { font-family: system-ui, sans-serif; margin: 0; padding: 24px; background: #0f1117; color: #e6e6e6; }
body.scroll-locked { overflow: hidden; }
.stats { margin-bottom: 16px; }
.stat-number { font-size: 2rem; font-weight: 700; }
form.add-book { display: grid; gap: 8px; max-width: 480px; }
.message.success { color: var(--success); }
.message.error { color: var(--danger); }
.books-grid { display: grid; gap: 12px; margin-top: 24px; }
.book-card { display: flex; justify-content: space-between; padding: 12px; border-radius: 8px; background: rgba(255, 255, 255, 0.05); animation: cardIn 0.4s ease-out both; }
.book-card.removing { animation: cardSlideOut 0.3s ease-out forwards; }
.meta-tag { margin-right: 6px; font-size: 0.875rem; opacity: 0.8; }
.no-books { text-align: center; opacity: 0.7; }
.no-books .hint { font-size: 0.875rem; margin-top: 8px; }
.modal { display: none; position: fixed; inset: 0; }
.modal.show { display: flex; align-items: center; justify-content: center; }
.modal-backdrop { position: absolute; inset: 0; margin: 0; }
.modal-backdrop button { width: 100%; height: 100%; border: 0; background: rgba(0, 0, 0, 0.6); cursor: default; }
.modal-content { position: relative; padding: 24px; border-radius: 8px; background: #1b1e27; }
.toast { position: fixed; bottom: 24px; right: 24px; padding: 12px 16px; border-radius: 8px; background: #1b1e27; visibility: hidden; }
.toast.show { visibility: visible; animation: toastOut 0.3s ease-in 3.2s forwards; }
.toast-icon.success { color: var(--success); }
.toast-icon.error { color: var(--danger); }
@keyframes cardIn { from { opacity: 0; transform: translateY(8px); } }
@keyframes cardSlideOut { to { opacity: 0; transform: translateX(100px) scale(0.9); } }
@keyframes toastOut { to { opacity: 0; } }
"#;

/// Posts Escape to the session and reloads with the new state
const ESCAPE_SCRIPT: &str = r#"
document.addEventListener('keydown', (e) => {
    if (e.key !== 'Escape') return;
    fetch('/keys', {
        method: 'POST',
        headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
        body: 'key=Escape'
    }).then((r) => r.text()).then((html) => {
        document.open();
        document.write(html);
        document.close();
    });
});
"#;

/// Re-fetches the session page once the removal animation has played.
/// Takes the delay in milliseconds.
fn removal_script(delay_ms: u128) -> String {
    format!(
        r#"
setTimeout(() => {{
    fetch('/page').then((r) => r.text()).then((html) => {{
        document.open();
        document.write(html);
        document.close();
    }});
}}, {delay_ms});
"#
    )
}

/// Render the whole catalog page
pub fn render_page(state: &UiState, config: &ClientConfig) -> String {
    let variant = config.variant;
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Bookstore</title>");
    let _ = write!(html, "<style>{STYLE}</style></head>");
    html.push_str(if state.scroll_locked {
        r#"<body class="scroll-locked">"#
    } else {
        "<body>"
    });

    let _ = write!(
        html,
        r#"<header class="stats"><span id="totalBooks" class="stat-number">{}</span> books</header>"#,
        state.total_books()
    );

    render_add_form(&mut html, state);

    let _ = write!(
        html,
        r#"<form id="booksList" class="books-grid" method="post" action="/events">{}</form>"#,
        render_book_list(state, variant)
    );

    render_edit_modal(&mut html, state, variant);
    render_confirm_dialog(&mut html, state);
    render_toast(&mut html, state);

    if variant.is_rich() {
        let _ = write!(html, "<script>{ESCAPE_SCRIPT}</script>");
        if state.removing.is_some() {
            let script = removal_script(config.removal_delay.as_millis());
            let _ = write!(html, "<script>{script}</script>");
        }
    }
    html.push_str("</body></html>");
    html
}

fn input(html: &mut String, id: &str, name: &str, kind: &str, label: &str, value: &str) {
    let _ = write!(
        html,
        r#"<input id="{id}" name="{name}" type="{kind}" placeholder="{label}" value="{}">"#,
        escape_html(value)
    );
}

fn render_add_form(html: &mut String, state: &UiState) {
    let form = &state.add_form;
    html.push_str(r#"<form id="addBookForm" class="add-book" method="post" action="/books">"#);
    input(html, "title", "title", "text", "Title", &form.title);
    input(html, "author", "author", "text", "Author", &form.author);
    input(html, "isbn", "isbn", "text", "ISBN", &form.isbn);
    input(html, "price", "price", "text", "Price", &form.price);
    input(html, "quantity", "quantity", "text", "Quantity", &form.quantity);
    input(
        html,
        "publicationDate",
        "publication_date",
        "text",
        "Publication date",
        &form.publication_date,
    );
    html.push_str(r#"<button type="submit" class="btn-primary">Add Book</button></form>"#);

    let _ = write!(
        html,
        r#"<p id="formMessage" class="{}">{}</p>"#,
        state.form_message.class(),
        escape_html(&state.form_message.text)
    );
}

fn render_edit_modal(html: &mut String, state: &UiState, variant: Variant) {
    let form = state.edit_form().cloned().unwrap_or_default();
    let class = if state.modal.is_open() { "modal show" } else { "modal" };

    let _ = write!(html, r#"<div id="editModal" class="{class}">"#);
    if variant.is_rich() {
        html.push_str(concat!(
            r#"<form class="modal-backdrop" method="post" action="/events">"#,
            r#"<button type="submit" name="target" value="backdrop" aria-label="Close"></button>"#,
            "</form>"
        ));
    }

    html.push_str(r#"<div class="modal-content"><h2>Edit Book</h2>"#);
    html.push_str(r#"<form id="editBookForm" method="post" action="/edit">"#);
    let _ = write!(
        html,
        r#"<input id="editBookId" name="id" type="hidden" value="{}">"#,
        escape_html(&form.id)
    );
    input(html, "editTitle", "title", "text", "Title", &form.title);
    input(html, "editAuthor", "author", "text", "Author", &form.author);
    input(html, "editPrice", "price", "text", "Price", &form.price);
    input(html, "editQuantity", "quantity", "text", "Quantity", &form.quantity);
    html.push_str(concat!(
        r#"<button type="submit" class="btn-primary">Save Changes</button></form>"#,
        r#"<form method="post" action="/modal/close"><button type="submit" class="btn-secondary">Cancel</button></form>"#,
        "</div></div>"
    ));
}

fn render_confirm_dialog(html: &mut String, state: &UiState) {
    let Some(id) = &state.pending_delete else {
        return;
    };
    let _ = write!(
        html,
        concat!(
            r#"<div id="confirmDialog" class="modal show" data-book-id="{}"><div class="modal-content">"#,
            r#"<form method="post" action="/delete/confirm"><p>{}</p>"#,
            r#"<button type="submit" name="answer" value="yes" class="btn-danger">OK</button>"#,
            r#"<button type="submit" name="answer" value="no" class="btn-secondary">Cancel</button>"#,
            "</form></div></div>"
        ),
        escape_html(id),
        messages::DELETE_PROMPT
    );
}

fn render_toast(html: &mut String, state: &UiState) {
    let toast = &state.toast;
    let class = if toast.visible { "toast show" } else { "toast" };
    let icon = toast.outcome.map(|o| o.class()).unwrap_or("success");
    let _ = write!(
        html,
        r#"<div id="toast" class="{class}"><span class="toast-icon {icon}">&#9679;</span><span id="toastMessage">{}</span></div>"#,
        escape_html(&toast.message)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{Book, BookList, EditBookForm, ListView, Modal, Outcome};

    fn rich() -> ClientConfig {
        ClientConfig::default()
    }

    fn plain() -> ClientConfig {
        ClientConfig::default().with_variant(Variant::Plain)
    }

    #[test]
    fn test_page_contains_dom_contract() {
        let html = render_page(&UiState::default(), &rich());
        for id in [
            "addBookForm",
            "formMessage",
            "booksList",
            "totalBooks",
            "editModal",
            "editBookForm",
            "editBookId",
            "editTitle",
            "editAuthor",
            "editPrice",
            "editQuantity",
            "toast",
            "toastMessage",
        ] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert!(!html.contains(r#"id="confirmDialog""#));
    }

    #[test]
    fn test_open_modal_shows_staged_values() {
        let state = UiState {
            modal: Modal::Edit(EditBookForm::stage("42", "Dune", "Herbert", 9.99, 3)),
            scroll_locked: true,
            ..Default::default()
        };
        let html = render_page(&state, &rich());
        assert!(html.contains(r#"<div id="editModal" class="modal show">"#));
        assert!(html.contains(r#"id="editBookId" name="id" type="hidden" value="42""#));
        assert!(html.contains(r#"value="Dune""#));
        assert!(html.contains(r#"value="9.99""#));
        assert!(html.contains(r#"<body class="scroll-locked">"#));
    }

    #[test]
    fn test_plain_page_has_no_backdrop_or_script() {
        let html = render_page(&UiState::default(), &plain());
        assert!(!html.contains(r#"value="backdrop""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_toast_and_total() {
        let mut state = UiState {
            list: ListView::Loaded(BookList::new(vec![Book::new("1", "A", "B")])),
            ..Default::default()
        };
        state.toast.show("Failed to delete book", Outcome::Error);

        let html = render_page(&state, &rich());
        assert!(html.contains(r#"<span id="totalBooks" class="stat-number">1</span>"#));
        assert!(html.contains(r#"<div id="toast" class="toast show">"#));
        assert!(html.contains(r#"toast-icon error"#));
        assert!(html.contains("Failed to delete book"));
    }

    #[test]
    fn test_confirm_dialog_for_pending_delete() {
        let state = UiState {
            pending_delete: Some("42".into()),
            ..Default::default()
        };
        let html = render_page(&state, &plain());
        assert!(html.contains(r#"id="confirmDialog""#));
        assert!(html.contains(messages::DELETE_PROMPT));
    }

    #[test]
    fn test_add_form_values_are_escaped() {
        let mut state = UiState::default();
        state.add_form.title = r#""><script>x</script>"#.into();
        let html = render_page(&state, &plain());
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_removal_schedules_page_refetch() {
        let state = UiState {
            list: ListView::Loaded(BookList::new(vec![Book::new("42", "Dune", "Herbert")])),
            removing: Some("42".into()),
            ..Default::default()
        };

        let html = render_page(&state, &rich());
        assert!(html.contains("fetch('/page')"));
        assert!(html.contains("}, 300);"));

        let idle = render_page(&UiState::default(), &rich());
        assert!(!idle.contains("fetch('/page')"));
    }
}
