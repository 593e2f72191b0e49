//! Markdown renderer module
//!
//! Fills the fixed note template: a front-matter block followed by the
//! title-cased heading.

use chrono::NaiveDateTime;

use crate::models::Note;

/// Timestamp format of the `pubDate` field
const PUB_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Separator between tags; the template supplies the outer quotes
const TAG_SEPARATOR: &str = "\", \"";

/// Markdown renderer for notes
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a complete note to Markdown
    pub fn render(&self, note: &Note) -> String {
        let mut output = String::new();

        output.push_str(&self.render_front_matter(note));
        output.push('\n');
        output.push_str(&self.render_heading(note));

        output
    }

    fn render_front_matter(&self, note: &Note) -> String {
        let mut output = String::new();

        output.push_str("---\n");
        output.push_str(&format!("title: \"{}\"\n", note.title));
        output.push_str(&format!("pubDate: {}\n", format_pub_date(note.created_at)));
        output.push_str("description: \"\"\n");
        output.push_str(&format!("author: \"{}\"\n", note.author));
        output.push_str(&format!("tags: [\"{}\"]\n", note.tags.join(TAG_SEPARATOR)));
        output.push_str("---\n");

        output
    }

    fn render_heading(&self, note: &Note) -> String {
        format!("# {}\n", note.heading())
    }
}

fn format_pub_date(created_at: NaiveDateTime) -> String {
    created_at.format(PUB_DATE_FORMAT).to_string()
}
