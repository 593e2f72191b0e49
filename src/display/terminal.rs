//! TTY detection and color choice

use clap::ValueEnum;
use std::io::IsTerminal;

/// When to use colored output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Determine if colors should be used for stdout
    pub fn should_use_colors(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
