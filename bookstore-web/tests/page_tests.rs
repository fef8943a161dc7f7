//! Integration tests for the Bookstore catalog page

use async_trait::async_trait;
use axum_test::TestServer;
use bookstore_core::client::messages;
use bookstore_core::{
    ApiError, Book, BookApi, BookList, BookStats, BookUpdate, ClientConfig, HealthStatus,
    MutationAck, NewBook, Variant,
};
use bookstore_web::routes::create_router;
use bookstore_web::state::AppState;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Backend stand-in keeping books in memory
#[derive(Default)]
struct MemoryApi {
    books: Mutex<Vec<Book>>,
    calls: Mutex<Vec<String>>,
    offline: AtomicBool,
}

impl MemoryApi {
    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl BookApi for MemoryApi {
    async fn list(&self) -> Result<BookList, ApiError> {
        self.record("list".into())?;
        Ok(BookList::new(self.books.lock().unwrap().clone()))
    }

    async fn get(&self, id: &str) -> Result<Book, ApiError> {
        self.record(format!("get {id}"))?;
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: None,
            })
    }

    async fn create(&self, book: &NewBook) -> Result<MutationAck, ApiError> {
        self.record("create".into())?;
        if book.title.is_empty() || book.author.is_empty() {
            return Err(ApiError::Status {
                status: 400,
                message: Some("Title and Author are required".into()),
            });
        }
        let mut books = self.books.lock().unwrap();
        let mut stored = Book::new(format!("b{}", books.len() + 1), &book.title, &book.author);
        stored.price = book.price;
        stored.quantity = book.quantity;
        books.push(stored);
        Ok(MutationAck::default())
    }

    async fn update(&self, id: &str, update: &BookUpdate) -> Result<MutationAck, ApiError> {
        self.record(format!("update {id}"))?;
        let mut books = self.books.lock().unwrap();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ApiError::Status {
                status: 404,
                message: Some("Book not found".into()),
            })?;
        book.title = update.title.clone();
        book.author = update.author.clone();
        book.price = update.price;
        book.quantity = update.quantity;
        Ok(MutationAck::default())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {id}"))?;
        self.books.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<BookStats, ApiError> {
        self.record("count".into())?;
        Ok(BookStats {
            total_books: self.books.lock().unwrap().len() as u64,
        })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record("health".into())?;
        Ok(HealthStatus {
            status: "healthy".into(),
            message: None,
        })
    }
}

fn dune() -> Book {
    let mut book = Book::new("42", "Dune", "Herbert");
    book.price = 9.99;
    book.quantity = 3;
    book
}

/// Create a test server over a memory backend
fn create_test_server(books: Vec<Book>, config: ClientConfig) -> (TestServer, Arc<MemoryApi>) {
    let api = Arc::new(MemoryApi::default());
    *api.books.lock().unwrap() = books;

    let state = AppState::new(api.clone(), config);
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");
    (server, api)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _api) = create_test_server(vec![], ClientConfig::default());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_unreachable_backend() {
    let (server, api) = create_test_server(vec![], ClientConfig::default());
    api.offline.store(true, Ordering::SeqCst);

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["backend"], "unreachable");
}

#[tokio::test]
async fn test_index_lists_books() {
    let (server, api) = create_test_server(vec![dune()], ClientConfig::default());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-book-id="42""#));
    assert!(html.contains("$9.99"));
    assert!(html.contains(r#"<span id="totalBooks" class="stat-number">1</span>"#));
    assert_eq!(api.call_count("list"), 1);
}

#[tokio::test]
async fn test_index_with_unreachable_backend() {
    let (server, api) = create_test_server(vec![dune()], ClientConfig::default());
    api.offline.store(true, Ordering::SeqCst);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Could not connect to server"));
}

#[tokio::test]
async fn test_add_book_refreshes_list() {
    let (server, api) = create_test_server(vec![], ClientConfig::default());

    let response = server
        .post("/books")
        .form(&[
            ("title", "<b>Emma</b>"),
            ("author", "Austen"),
            ("price", "oops"),
            ("quantity", "2"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(messages::BOOK_ADDED));
    assert!(html.contains("&lt;b&gt;Emma&lt;/b&gt;"));
    assert!(!html.contains("<b>Emma</b>"));
    assert!(html.contains("2 in stock"));
    assert_eq!(api.call_count("create"), 1);
    assert_eq!(api.call_count("list"), 1);
}

#[tokio::test]
async fn test_add_book_rejection_shows_inline_message() {
    let (server, api) = create_test_server(vec![], ClientConfig::default());

    let response = server
        .post("/books")
        .form(&[("title", ""), ("author", "")])
        .await;

    let html = response.text();
    assert!(html.contains(r#"<p id="formMessage" class="message error">Title and Author are required</p>"#));
    assert_eq!(api.call_count("list"), 0);
}

#[tokio::test]
async fn test_edit_flow() {
    let (server, api) = create_test_server(vec![dune()], ClientConfig::default());
    server.get("/").await.assert_status_ok();

    let html = server
        .post("/events")
        .form(&[("target", "edit:42")])
        .await
        .text();
    assert!(html.contains(r#"<div id="editModal" class="modal show">"#));
    assert!(html.contains(r#"id="editBookId" name="id" type="hidden" value="42""#));

    let html = server
        .post("/edit")
        .form(&[
            ("id", "42"),
            ("title", "Dune Messiah"),
            ("author", "Herbert"),
            ("price", "12.5"),
            ("quantity", "4"),
        ])
        .await
        .text();
    assert!(html.contains(r#"<div id="editModal" class="modal">"#));
    assert!(html.contains(messages::BOOK_UPDATED));
    assert!(html.contains("Dune Messiah"));
    assert!(html.contains("$12.50"));
    assert_eq!(api.call_count("update 42"), 1);
}

#[tokio::test]
async fn test_backdrop_and_escape_close_modal() {
    let (server, _api) = create_test_server(vec![dune()], ClientConfig::default());
    server.get("/").await;

    server.post("/events").form(&[("target", "edit:42")]).await;
    let html = server.post("/events").form(&[("target", "modal")]).await.text();
    assert!(html.contains(r#"class="modal show""#));

    let html = server.post("/events").form(&[("target", "backdrop")]).await.text();
    assert!(html.contains(r#"<div id="editModal" class="modal">"#));

    server.post("/events").form(&[("target", "edit:42")]).await;
    let html = server.post("/keys").form(&[("key", "Escape")]).await.text();
    assert!(html.contains(r#"<div id="editModal" class="modal">"#));
}

#[tokio::test]
async fn test_cancel_button_closes_modal_in_plain_variant() {
    let config = ClientConfig::default().with_variant(Variant::Plain);
    let (server, _api) = create_test_server(vec![dune()], config);
    server.get("/").await;

    server.post("/events").form(&[("target", "edit:42")]).await;
    let html = server.post("/keys").form(&[("key", "Escape")]).await.text();
    assert!(html.contains(r#"class="modal show""#));

    let html = server.post("/modal/close").await.text();
    assert!(html.contains(r#"<div id="editModal" class="modal">"#));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (server, api) = create_test_server(vec![dune()], ClientConfig::default());
    server.get("/").await;

    let html = server
        .post("/events")
        .form(&[("target", "delete:42")])
        .await
        .text();
    assert!(html.contains(r#"id="confirmDialog""#));
    assert_eq!(api.call_count("delete"), 0);

    let html = server
        .post("/delete/confirm")
        .form(&[("answer", "no")])
        .await
        .text();
    assert!(!html.contains(r#"id="confirmDialog""#));
    assert_eq!(api.call_count("delete"), 0);

    server.post("/events").form(&[("target", "delete:42")]).await;
    let html = server
        .post("/delete/confirm")
        .form(&[("answer", "yes")])
        .await
        .text();
    assert_eq!(api.call_count("delete 42"), 1);
    assert!(html.contains(r#"class="book-card removing" data-book-id="42""#));
}

#[tokio::test]
async fn test_removal_timer_refreshes_list() {
    let config = ClientConfig {
        removal_delay: Duration::from_millis(10),
        toast_duration: Duration::from_millis(10),
        ..ClientConfig::default()
    };
    let (server, api) = create_test_server(vec![dune()], config);
    server.get("/").await;

    server.post("/events").form(&[("target", "delete:42")]).await;
    server
        .post("/delete/confirm")
        .form(&[("answer", "yes")])
        .await;

    // Removal animation, then the refresh it triggers
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(api.call_count("list"), 2);
}

#[tokio::test]
async fn test_delete_feedback_reaches_the_page() {
    let config = ClientConfig {
        removal_delay: Duration::from_millis(10),
        ..ClientConfig::default()
    };
    let (server, api) = create_test_server(vec![dune()], config);
    server.get("/").await;

    server.post("/events").form(&[("target", "delete:42")]).await;
    let html = server
        .post("/delete/confirm")
        .form(&[("answer", "yes")])
        .await
        .text();
    assert!(html.contains(r#"class="book-card removing""#));
    assert!(html.contains("fetch('/page')"));
    assert!(html.contains("}, 10);"));

    tokio::time::sleep(Duration::from_millis(200)).await;

    // What the page script fetches once the animation is over
    let response = server.get("/page").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<div id="toast" class="toast show">"#));
    assert!(html.contains(messages::BOOK_REMOVED));
    assert!(!html.contains(r#"data-book-id="42""#));
    assert!(!html.contains("fetch('/page')"));
    assert_eq!(api.call_count("list"), 2);
}

#[tokio::test]
async fn test_reload_discards_session_state() {
    let (server, _api) = create_test_server(vec![dune()], ClientConfig::default());
    server.get("/").await;

    server.post("/events").form(&[("target", "edit:42")]).await;
    let html = server
        .post("/books")
        .form(&[("title", ""), ("author", "")])
        .await
        .text();
    assert!(html.contains(r#"class="modal show""#));
    assert!(html.contains(r#"<body class="scroll-locked">"#));
    assert!(html.contains("Title and Author are required"));

    let html = server.get("/").await.text();
    assert!(html.contains(r#"<div id="editModal" class="modal">"#));
    assert!(html.contains("<body>"));
    assert!(html.contains(r#"<p id="formMessage" class="message"></p>"#));
    assert!(html.contains(r#"data-book-id="42""#));
}

#[tokio::test]
async fn test_reload_drops_pending_delete() {
    let (server, api) = create_test_server(vec![dune()], ClientConfig::default());
    server.get("/").await;

    let html = server.post("/events").form(&[("target", "delete:42")]).await.text();
    assert!(html.contains(r#"id="confirmDialog""#));

    let html = server.get("/").await.text();
    assert!(!html.contains(r#"id="confirmDialog""#));

    server.post("/delete/confirm").form(&[("answer", "yes")]).await;
    assert_eq!(api.call_count("delete"), 0);
}

#[tokio::test]
async fn test_unknown_click_target_is_rejected() {
    let (server, _api) = create_test_server(vec![], ClientConfig::default());

    let response = server
        .post("/events")
        .form(&[("target", "launch:42")])
        .await;

    response.assert_status_bad_request();
}
