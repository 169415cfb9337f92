//! Domain models for the content catalog.

mod content;

pub use content::{Content, ContentFields};
