use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// A directory could not be listed, or an entry's metadata could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

impl TreeError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Convert a walker error, falling back to `root` when it carries no path.
    pub(crate) fn from_walk(err: walkdir::Error, root: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        TreeError::read(path, err.into())
    }
}
