//! Catalog page handlers
//!
//! Every handler locks the session, runs one controller operation,
//! settles its effects and answers with the re-rendered page.

use crate::page::render_page;
use crate::state::{AppState, Session};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use bookstore_core::{AddBookForm, ClickTarget, EditBookForm, Effect, Key};
use serde::Deserialize;

/// Delegated click posted by the list container or the modal backdrop
#[derive(Debug, Deserialize)]
pub struct ClickForm {
    /// `edit:<id>`, `delete:<id>`, `backdrop` or `modal`
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyForm {
    pub key: String,
}

/// Answer to the delete confirmation dialog
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub answer: String,
}

impl ConfirmForm {
    fn granted(&self) -> bool {
        matches!(self.answer.as_str(), "yes" | "ok" | "true")
    }
}

/// Run immediate effects, hand timers to the scheduler and render
async fn finish(state: &AppState, session: &mut Session, effects: Vec<Effect>) -> Html<String> {
    let timers = session.settle(effects).await;
    state.schedule(timers);
    Html(render_page(session.state(), session.config()))
}

/// Page load: fetch the list and render
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    session.initialize().await;
    Html(render_page(session.state(), session.config()))
}

/// Current session page, without the reset a page load does
pub async fn current_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_page(session.state(), session.config()))
}

/// Submit the add form
pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>,
) -> Html<String> {
    let mut session = state.session.lock().await;
    let effects = session.create(form).await;
    finish(&state, &mut session, effects).await
}

/// Delegated click on a card button, the modal backdrop or its content
pub async fn click(
    State(state): State<AppState>,
    Form(form): Form<ClickForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let target: ClickTarget = form
        .target
        .parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let mut session = state.session.lock().await;
    let effects = session.handle_click(target).await;
    Ok(finish(&state, &mut session, effects).await)
}

/// Key press forwarded by the page script
pub async fn key(State(state): State<AppState>, Form(form): Form<KeyForm>) -> Html<String> {
    let mut session = state.session.lock().await;
    let effects = session.handle_key(Key::from(form.key.as_str())).await;
    finish(&state, &mut session, effects).await
}

/// Submit the edit form
pub async fn edit_book(
    State(state): State<AppState>,
    Form(form): Form<EditBookForm>,
) -> Html<String> {
    let mut session = state.session.lock().await;
    let effects = session.update(form).await;
    finish(&state, &mut session, effects).await
}

pub async fn close_modal(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    session.close_edit();
    finish(&state, &mut session, Vec::new()).await
}

/// Answer the pending delete confirmation
pub async fn confirm_delete(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForm>,
) -> Html<String> {
    let mut session = state.session.lock().await;
    let effects = session.answer_delete(form.granted()).await;
    finish(&state, &mut session, effects).await
}
