//! The catalog controller
//!
//! [`CatalogClient`] implements every user- or lifecycle-triggered
//! operation against a [`BookApi`], writes the outcome into its
//! [`UiState`] and returns the follow-up [`Effect`]s. Handlers never
//! return errors: every failure ends as visible feedback in the state.
//!
//! Front-ends drive it in two steps: [`CatalogClient::settle`] runs
//! refreshes right away and hands back timer effects, and
//! [`CatalogClient::fire`] applies a timer effect once its delay elapsed.

use crate::api::BookApi;
use crate::config::{ClientConfig, Variant};
use crate::form::{AddBookForm, EditBookForm};
use crate::state::{ListView, Modal, Outcome, UiState};
use std::str::FromStr;
use std::time::Duration;

/// User-facing feedback texts
pub mod messages {
    pub const BOOK_ADDED: &str = "Book added to your collection!";
    pub const ADD_FAILED: &str = "Failed to add book";
    pub const CONNECTION_ERROR: &str = "Error connecting to server";
    pub const BOOK_UPDATED: &str = "Book updated successfully!";
    pub const UPDATE_FAILED: &str = "Failed to update book";
    pub const BOOK_REMOVED: &str = "Book removed from collection";
    pub const DELETE_FAILED: &str = "Failed to delete book";
    pub const DELETE_PROMPT: &str = "Remove this book from your collection?";
    pub const BOOK_NOT_FOUND: &str = "Book not found";
}

/// Follow-up work requested by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Reload the list from the backend
    Refresh,
    /// Hide the toast shown as `generation`
    HideToast { generation: u64, after: Duration },
    /// Drop the inline message style set as `generation`
    ResetMessage { generation: u64, after: Duration },
    /// The removal animation of a deleted card finished
    FinishRemoval { book_id: String, after: Duration },
}

impl Effect {
    /// Delay before a timer effect fires; `None` for immediate effects
    pub fn delay(&self) -> Option<Duration> {
        match self {
            Effect::Refresh => None,
            Effect::HideToast { after, .. }
            | Effect::ResetMessage { after, .. }
            | Effect::FinishRemoval { after, .. } => Some(*after),
        }
    }
}

/// Buttons on a book card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
}

/// Where a click landed, as seen by the delegated listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Card { action: CardAction, book_id: String },
    /// The dimmed area around the modal
    ModalBackdrop,
    /// Anywhere inside the modal dialog itself
    ModalContent,
}

impl FromStr for ClickTarget {
    type Err = String;

    /// Parse the `value` a delegated button submits: `edit:<id>`,
    /// `delete:<id>`, `backdrop` or `modal`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("edit", id)) if !id.is_empty() => Ok(ClickTarget::Card {
                action: CardAction::Edit,
                book_id: id.to_string(),
            }),
            Some(("delete", id)) if !id.is_empty() => Ok(ClickTarget::Card {
                action: CardAction::Delete,
                book_id: id.to_string(),
            }),
            None if s == "backdrop" => Ok(ClickTarget::ModalBackdrop),
            None if s == "modal" => Ok(ClickTarget::ModalContent),
            _ => Err(format!("Unknown click target: {s}")),
        }
    }
}

/// Keys the page listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// One catalog session
pub struct CatalogClient<A> {
    api: A,
    config: ClientConfig,
    state: UiState,
}

impl<A: BookApi> CatalogClient<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            state: UiState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Page ready: drop the previous page's state, load the list and
    /// stagger the card entrance
    pub async fn initialize(&mut self) {
        self.state.reload();
        self.list().await;
        self.state.entrance = self.variant().is_rich();
    }

    /// Fetch the list and replace the container contents.
    ///
    /// Failures render as the unreachable view; nothing is returned.
    pub async fn list(&mut self) {
        self.state.entrance = false;
        self.state.removing = None;
        match self.api.list().await {
            Ok(list) => {
                tracing::debug!(total = list.total_books, shown = list.books.len(), "Loaded books");
                self.state.list = ListView::Loaded(list);
            }
            Err(err) => {
                tracing::warn!(%err, "Could not load books");
                self.state.list = ListView::Unreachable;
            }
        }
    }

    /// Submit the add form
    pub async fn create(&mut self, form: AddBookForm) -> Vec<Effect> {
        let book = form.to_new_book();
        self.state.add_form = form;

        match self.api.create(&book).await {
            Ok(ack) => {
                tracing::info!(book_id = ?ack.book_id, title = %book.title, "Book added");
                self.state.add_form.reset();
                vec![self.notify(messages::BOOK_ADDED, Outcome::Success), Effect::Refresh]
            }
            Err(err) if err.is_network() => {
                tracing::warn!(%err, "Add book request failed");
                vec![self.show_message(messages::CONNECTION_ERROR, Outcome::Error)]
            }
            Err(err) => {
                tracing::warn!(%err, "Backend rejected new book");
                let text = err
                    .server_message()
                    .unwrap_or(messages::ADD_FAILED)
                    .to_string();
                vec![self.show_message(text, Outcome::Error)]
            }
        }
    }

    /// Stage a book's values into the edit form, then open the modal
    pub fn open_edit(&mut self, id: &str, title: &str, author: &str, price: f64, quantity: u32) {
        let form = EditBookForm::stage(id, title, author, price, quantity);
        self.state.modal = Modal::Edit(form);
        self.state.scroll_locked = self.variant().is_rich();
    }

    /// Open the modal for a book, taken from the current list or fetched
    pub async fn open_edit_by_id(&mut self, id: &str) -> Vec<Effect> {
        if let Some(book) = self.state.list.find(id).cloned() {
            self.open_edit(&book.id, &book.title, &book.author, book.price, book.quantity);
            return Vec::new();
        }

        match self.api.get(id).await {
            Ok(book) => {
                self.open_edit(&book.id, &book.title, &book.author, book.price, book.quantity);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(%err, id, "Could not load book for editing");
                let text = if err.is_network() {
                    messages::CONNECTION_ERROR
                } else {
                    messages::BOOK_NOT_FOUND
                };
                vec![self.notify(text, Outcome::Error)]
            }
        }
    }

    pub fn close_edit(&mut self) {
        self.state.modal = Modal::Closed;
        self.state.scroll_locked = false;
    }

    /// Submit the edit form
    pub async fn update(&mut self, form: EditBookForm) -> Vec<Effect> {
        let update = form.to_update();
        if let Modal::Edit(staged) = &mut self.state.modal {
            *staged = form.clone();
        }

        match self.api.update(&form.id, &update).await {
            Ok(_) => {
                tracing::info!(id = %form.id, "Book updated");
                self.close_edit();
                vec![self.notify(messages::BOOK_UPDATED, Outcome::Success), Effect::Refresh]
            }
            Err(err) => {
                tracing::warn!(%err, id = %form.id, "Update failed");
                vec![self.notify(messages::UPDATE_FAILED, Outcome::Error)]
            }
        }
    }

    /// Delete after asking `confirm`; a declined prompt sends nothing
    pub async fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Vec<Effect> {
        if !confirm.confirm(messages::DELETE_PROMPT) {
            tracing::debug!(id, "Delete cancelled");
            return Vec::new();
        }

        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Book deleted");
                if self.variant().is_rich() {
                    self.state.removing = Some(id.to_string());
                    vec![Effect::FinishRemoval {
                        book_id: id.to_string(),
                        after: self.config.removal_delay,
                    }]
                } else {
                    vec![self.notify(messages::BOOK_REMOVED, Outcome::Success), Effect::Refresh]
                }
            }
            Err(err) => {
                tracing::warn!(%err, id, "Delete failed");
                vec![self.notify(messages::DELETE_FAILED, Outcome::Error)]
            }
        }
    }

    /// Ask for confirmation through the page's dialog
    pub fn request_delete(&mut self, id: &str) {
        self.state.pending_delete = Some(id.to_string());
    }

    /// Answer the pending confirmation dialog
    pub async fn answer_delete(&mut self, granted: bool) -> Vec<Effect> {
        let Some(id) = self.state.pending_delete.take() else {
            return Vec::new();
        };
        self.delete(&id, &mut |_: &str| granted).await
    }

    /// Delegated click on the list container or the modal
    pub async fn handle_click(&mut self, target: ClickTarget) -> Vec<Effect> {
        match target {
            ClickTarget::Card {
                action: CardAction::Edit,
                book_id,
            } => match self.state.list.find(&book_id).cloned() {
                Some(book) => {
                    self.open_edit(&book.id, &book.title, &book.author, book.price, book.quantity)
                }
                None => tracing::warn!(book_id = %book_id, "Edit clicked for a book not in the list"),
            },
            ClickTarget::Card {
                action: CardAction::Delete,
                book_id,
            } => self.request_delete(&book_id),
            ClickTarget::ModalBackdrop if self.variant().is_rich() => self.close_edit(),
            ClickTarget::ModalBackdrop | ClickTarget::ModalContent => {}
        }
        Vec::new()
    }

    /// Key pressed anywhere on the page
    pub async fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        if key != Key::Escape {
            return Vec::new();
        }
        if self.state.pending_delete.is_some() {
            return self.answer_delete(false).await;
        }
        if self.variant().is_rich() && self.state.modal.is_open() {
            self.close_edit();
        }
        Vec::new()
    }

    /// Run immediate effects and return the timers still to schedule.
    ///
    /// Several refresh requests collapse into one list fetch.
    pub async fn settle(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let (refresh, timers): (Vec<_>, Vec<_>) =
            effects.into_iter().partition(|e| *e == Effect::Refresh);
        if !refresh.is_empty() {
            self.list().await;
        }
        timers
    }

    /// Apply an effect whose delay has elapsed, returning any follow-ups
    pub async fn fire(&mut self, effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::Refresh => {
                self.list().await;
                Vec::new()
            }
            Effect::HideToast { generation, .. } => {
                self.state.toast.hide(generation);
                Vec::new()
            }
            Effect::ResetMessage { generation, .. } => {
                self.state.form_message.reset_style(generation);
                Vec::new()
            }
            Effect::FinishRemoval { book_id, .. } => {
                tracing::debug!(book_id = %book_id, "Removal animation finished");
                vec![self.notify(messages::BOOK_REMOVED, Outcome::Success), Effect::Refresh]
            }
        }
    }

    /// Mutation feedback: toast in the rich variant, inline message otherwise
    fn notify(&mut self, text: &str, outcome: Outcome) -> Effect {
        if self.variant().is_rich() {
            let generation = self.state.toast.show(text, outcome);
            Effect::HideToast {
                generation,
                after: self.config.toast_duration,
            }
        } else {
            self.show_message(text, outcome)
        }
    }

    fn show_message(&mut self, text: impl Into<String>, outcome: Outcome) -> Effect {
        let generation = self.state.form_message.show(text, outcome);
        Effect::ResetMessage {
            generation,
            after: self.config.message_duration,
        }
    }
}
