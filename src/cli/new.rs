use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{self, Config};
use crate::display::{self, ColorChoice};
use crate::error::{NoteError, Result};
use crate::models::Note;
use crate::naming;
use crate::output;
use crate::renderer::Renderer;

/// Options for a single note run
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Print the note instead of writing it
    pub dry_run: bool,
    /// Truncate an existing note at the same path
    pub force: bool,
    pub color: ColorChoice,
}

/// Create a note for the single title in `titles`
pub fn run(titles: Vec<String>, options: NewOptions) -> Result<()> {
    let title = single_title(titles)?;
    let config_path = Path::new(config::CONFIG_FILE);

    debug!(path = %config_path.display(), "loading config");
    let config = config::load(config_path)?;
    print_config(&config);

    let output_folder = PathBuf::from(&config.output_folder);

    if options.dry_run {
        let path = naming::note_path(&output_folder, Local::now().date_naive(), &title);
        let markdown = render(&title, &config);

        println!("Note preview: {}", path.display());
        display::print_note(&markdown, options.color);
        return Ok(());
    }

    output::ensure_dir(&output_folder)?;

    let path = naming::note_path(&output_folder, Local::now().date_naive(), &title);
    debug!(path = %path.display(), force = options.force, "writing note");

    let markdown = render(&title, &config);
    output::write_note(&path, &markdown, options.force)?;
    debug!(bytes = markdown.len(), "note written");

    println!("Note created: {}", path.display());

    Ok(())
}

fn single_title(titles: Vec<String>) -> Result<String> {
    let mut titles = titles.into_iter();
    match (titles.next(), titles.next()) {
        (Some(title), None) => Ok(title),
        _ => Err(NoteError::Usage),
    }
}

fn render(title: &str, config: &Config) -> String {
    let note = Note::new(title, config, Local::now().naive_local());
    Renderer::new().render(&note)
}

fn print_config(config: &Config) {
    println!("Author: {}", config.author);
    println!("Default Tags: [{}]", config.default_tags.join(" "));
    println!("Output Folder: {}", config.output_folder);
}
