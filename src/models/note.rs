use chrono::NaiveDateTime;

use crate::config::Config;
use crate::naming;

/// Values substituted into the note template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Title exactly as given on the command line
    pub title: String,
    /// Local time the note was rendered
    pub created_at: NaiveDateTime,
    pub author: String,
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(title: &str, config: &Config, created_at: NaiveDateTime) -> Self {
        Self {
            title: title.to_string(),
            created_at,
            author: config.author.clone(),
            tags: config.default_tags.clone(),
        }
    }

    /// Title-cased title used as the document heading
    pub fn heading(&self) -> String {
        naming::title_case(&self.title)
    }
}
