//! Wire types shared with the REST backend

mod book;
mod request;

pub use book::{Book, BookList};
pub(crate) use request::ErrorBody;
pub use request::{BookStats, BookUpdate, HealthStatus, MutationAck, NewBook};
