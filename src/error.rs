use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading `config.json`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("outputFolder is empty in the config file")]
    EmptyOutputFolder,
}

/// Notegen error types
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Please provide a filename.")]
    Usage,

    #[error("Error reading config file: {0}")]
    Config(#[from] ConfigError),

    #[error("Error creating directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Error creating file: '{}' already exists (use --force to overwrite)",
        .0.display()
    )]
    AlreadyExists(PathBuf),

    #[error("Error creating file '{}': {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteError {
    /// Errors reported through the fatal log rather than plain stderr
    pub fn is_fatal(&self) -> bool {
        matches!(self, NoteError::Config(_) | NoteError::CreateDir { .. })
    }
}

/// Result type for notegen operations
pub type Result<T> = std::result::Result<T, NoteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_usage() {
        assert_eq!(NoteError::Usage.to_string(), "Please provide a filename.");
    }

    #[test]
    fn test_error_display_empty_output_folder() {
        let err = NoteError::from(ConfigError::EmptyOutputFolder);
        assert_eq!(
            err.to_string(),
            "Error reading config file: outputFolder is empty in the config file"
        );
    }

    #[test]
    fn test_error_display_read() {
        let err = ConfigError::Read {
            path: PathBuf::from("config.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read 'config.json': not found");
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = NoteError::AlreadyExists(PathBuf::from("out/note.md"));
        assert!(err.to_string().contains("'out/note.md' already exists"));
    }

    #[test]
    fn test_fatal_classification() {
        let io_err = || io::Error::new(io::ErrorKind::PermissionDenied, "denied");

        assert!(NoteError::from(ConfigError::EmptyOutputFolder).is_fatal());
        assert!(NoteError::CreateDir {
            path: PathBuf::from("out"),
            source: io_err(),
        }
        .is_fatal());

        assert!(!NoteError::Usage.is_fatal());
        assert!(!NoteError::AlreadyExists(PathBuf::from("out/a.md")).is_fatal());
        assert!(!NoteError::CreateFile {
            path: PathBuf::from("out/a.md"),
            source: io_err(),
        }
        .is_fatal());
        assert!(!NoteError::Write {
            path: PathBuf::from("out/a.md"),
            source: io_err(),
        }
        .is_fatal());
    }
}
