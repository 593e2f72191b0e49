//! Filesystem output module
//!
//! Creates the output folder and writes rendered notes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{NoteError, Result};

/// Permissions for newly created directories (rwxr-xr-x)
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Create `path` and any missing parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path).map_err(|source| NoteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to a new file at `path`.
///
/// Fails with `AlreadyExists` unless `overwrite` is set, in which case an
/// existing file is truncated.
pub fn write_note(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            NoteError::AlreadyExists(path.to_path_buf())
        } else {
            NoteError::CreateFile {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| NoteError::Write {
            path: path.to_path_buf(),
            source,
        })
}
