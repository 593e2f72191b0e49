mod cli;
mod config;
mod display;
mod error;
mod logger;
mod models;
mod naming;
mod output;
mod renderer;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::new::NewOptions;
use crate::display::ColorChoice;
use crate::error::NoteError;

#[derive(Parser)]
#[command(name = "notegen", version)]
#[command(about = "Scaffold a dated markdown note with front matter", long_about = None)]
struct Cli {
    /// Title of the note
    #[arg(value_name = "TITLE", allow_hyphen_values = true)]
    titles: Vec<String>,

    /// Print the note instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Overwrite a note that already exists at the same path
    #[arg(short, long)]
    force: bool,

    /// When to color the dry-run preview
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            report(&NoteError::Usage);
            std::process::exit(1);
        }
    };
    logger::init(cli.verbose);

    let options = NewOptions {
        dry_run: cli.dry_run,
        force: cli.force,
        color: cli.color,
    };

    if let Err(e) = cli::new::run(cli.titles, options) {
        report(&e);
        std::process::exit(1);
    }
}

fn report(err: &NoteError) {
    match err {
        NoteError::Usage => println!("{}", err),
        err if err.is_fatal() => tracing::error!("{}", err),
        err => eprintln!("{}", err),
    }
}
