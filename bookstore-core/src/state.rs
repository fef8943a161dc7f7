//! UI state for one catalog session
//!
//! Everything a page render needs lives in [`UiState`]; renderers read it
//! and only the controller writes it.

use crate::form::{AddBookForm, EditBookForm};
use crate::types::{Book, BookList};
use serde::Serialize;

/// Outcome carried by a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    /// CSS class used for this outcome
    pub fn class(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// What the list container currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ListView {
    /// No fetch has completed yet
    #[default]
    NotLoaded,
    /// The last fetch succeeded
    Loaded(BookList),
    /// The last fetch failed to reach the backend or decode its answer
    Unreachable,
}

impl ListView {
    pub fn books(&self) -> &[Book] {
        match self {
            ListView::Loaded(list) => &list.books,
            _ => &[],
        }
    }

    /// Side lookup table for delegated card events
    pub fn find(&self, id: &str) -> Option<&Book> {
        match self {
            ListView::Loaded(list) => list.find(id),
            _ => None,
        }
    }
}

/// The single edit modal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "form", rename_all = "snake_case")]
pub enum Modal {
    #[default]
    Closed,
    Edit(EditBookForm),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Edit(_))
    }
}

/// Transient auto-hiding notification banner
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Toast {
    pub visible: bool,
    pub message: String,
    pub outcome: Option<Outcome>,
    /// Bumped on every show; a hide timer only applies to its own show
    pub generation: u64,
}

impl Toast {
    /// Show a message and return the generation to hide later
    pub fn show(&mut self, message: impl Into<String>, outcome: Outcome) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.outcome = Some(outcome);
        self.visible = true;
        self.generation
    }

    /// Hide the toast if it still shows the given generation
    pub fn hide(&mut self, generation: u64) -> bool {
        if self.generation != generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

/// Text area next to the add form.
///
/// The style class reverts after a delay while the text stays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineMessage {
    pub text: String,
    pub outcome: Option<Outcome>,
    pub generation: u64,
}

impl InlineMessage {
    pub fn show(&mut self, text: impl Into<String>, outcome: Outcome) -> u64 {
        self.generation += 1;
        self.text = text.into();
        self.outcome = Some(outcome);
        self.generation
    }

    /// Drop the style class if no newer message replaced it
    pub fn reset_style(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.outcome.is_none() {
            return false;
        }
        self.outcome = None;
        true
    }

    /// CSS class list for the message node
    pub fn class(&self) -> String {
        match self.outcome {
            Some(outcome) => format!("message {}", outcome.class()),
            None => "message".to_string(),
        }
    }
}

/// Complete UI state of a catalog session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiState {
    pub list: ListView,
    pub modal: Modal,
    /// Page scrolling is suppressed while the modal is open
    pub scroll_locked: bool,
    pub toast: Toast,
    pub form_message: InlineMessage,
    /// Values currently typed into the add form
    pub add_form: AddBookForm,
    /// Book awaiting a delete confirmation answer
    pub pending_delete: Option<String>,
    /// Card currently playing its removal animation
    pub removing: Option<String>,
    /// Stagger card entrance animations on the next render
    pub entrance: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh page session.
    ///
    /// Generations keep counting so timers from the previous page cannot
    /// touch feedback shown on the new one.
    pub fn reload(&mut self) {
        let toast = self.toast.generation;
        let message = self.form_message.generation;
        *self = Self::new();
        self.toast.generation = toast;
        self.form_message.generation = message;
    }

    /// Total displayed in the stats counter
    pub fn total_books(&self) -> u64 {
        match &self.list {
            ListView::Loaded(list) => list.total_books,
            _ => 0,
        }
    }

    /// Form staged in the open edit modal
    pub fn edit_form(&self) -> Option<&EditBookForm> {
        match &self.modal {
            Modal::Edit(form) => Some(form),
            Modal::Closed => None,
        }
    }
}
