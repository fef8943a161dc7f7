//! Bookstore Core Library
//!
//! This crate provides the client side of the bookstore inventory: the book
//! wire types, form coercion, HTML rendering of the catalog list, the UI
//! state of a session, and the [`CatalogClient`] controller that talks to
//! the REST backend through the [`BookApi`] seam.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod html;
pub mod state;
pub mod types;

pub use api::{BookApi, HttpBookApi};
pub use client::{CardAction, CatalogClient, ClickTarget, Confirm, Effect, Key};
pub use config::{ClientConfig, Variant};
pub use error::{ApiError, ConfigError, Result};
pub use form::{AddBookForm, EditBookForm};
pub use state::{InlineMessage, ListView, Modal, Outcome, Toast, UiState};
pub use types::{Book, BookList, BookStats, BookUpdate, HealthStatus, MutationAck, NewBook};
