//! Data models module
//!
//! Defines the Note assembled from configuration and CLI input.

mod note;

pub use note::Note;
