//! Terminal display module
//!
//! Prints dry-run note previews, with rich formatting when colors are enabled.

mod formatter;
mod terminal;

pub use formatter::print_note;
pub use terminal::ColorChoice;
