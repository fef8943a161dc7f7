//! Bookstore Web Library
//!
//! This module exports the page server components for testing and reuse.

pub mod config;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;
