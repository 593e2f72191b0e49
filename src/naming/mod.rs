//! Note naming module
//!
//! Derives the note file name from a title and a date, and the title-cased
//! heading used inside the note.

mod title_case;

pub use title_case::title_case;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Lowercase the title, turn spaces into hyphens, percent-encode `'` and `,`.
///
/// Only those two characters are escaped; everything else passes through.
pub fn sanitize_title(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .replace('\'', "%27")
        .replace(',', "%2C")
}

/// Compose `<output_folder>/<YYYY-MM-DD>_<sanitized title>.md`
pub fn note_path(output_folder: &Path, date: NaiveDate, title: &str) -> PathBuf {
    let filename = format!("{}_{}.md", date.format("%Y-%m-%d"), sanitize_title(title));
    output_folder.join(filename)
}
