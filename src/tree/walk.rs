use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::{DirEntry, WalkDir};

use super::layout::DirectoryStates;
use super::{EntryKind, TreeConfig, TreeEntry};
use crate::error::TreeError;

/// macOS Finder metadata. Counted toward its directory, never yielded.
const HIDDEN_METADATA: &str = ".DS_Store";

/// Pre-order walk of a directory tree that lays out each entry as it goes.
///
/// Siblings are visited in file-name order. Each yielded entry carries its
/// last-sibling flag and the open/complete state of its ancestors *at the
/// moment it is visited*, which is exactly what a streaming printer needs.
/// The walk ends after the first error.
pub struct TreeWalk {
    root: PathBuf,
    include_files: bool,
    inner: walkdir::IntoIter,
    states: DirectoryStates,
    failed: bool,
}

impl TreeWalk {
    /// Fails up front if `root` cannot be listed.
    pub fn new(root: impl AsRef<Path>, config: &TreeConfig) -> Result<Self, TreeError> {
        let root = root.as_ref().to_path_buf();
        fs::read_dir(&root).map_err(|e| TreeError::read(&root, e))?;

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Self {
            include_files: config.include_files,
            states: DirectoryStates::new(config.include_files),
            root,
            inner,
            failed: false,
        })
    }

    /// Bookkeeping accumulated so far.
    pub fn states(&self) -> &DirectoryStates {
        &self.states
    }

    fn visit(&mut self, entry: &DirEntry) -> Result<Option<TreeEntry>, TreeError> {
        // Skip root itself
        if entry.depth() == 0 {
            return Ok(None);
        }

        let is_dir = entry.file_type().is_dir();
        if !self.include_files && !is_dir {
            return Ok(None);
        }

        let Some(parent) = entry.path().parent() else {
            return Ok(None);
        };
        let rel_parent = parent.strip_prefix(&self.root).unwrap_or(parent);
        trace!(path = %entry.path().display(), depth = entry.depth(), "visiting entry");

        let state = self.states.record_child(rel_parent, parent)?;

        // Counted above, so it can still take the last slot from a visible sibling.
        if entry.file_name() == OsStr::new(HIDDEN_METADATA) {
            return Ok(None);
        }

        let kind = if is_dir {
            EntryKind::Directory
        } else {
            let metadata = entry
                .metadata()
                .map_err(|e| TreeError::from_walk(e, &self.root))?;
            EntryKind::File {
                size: metadata.len(),
            }
        };

        Ok(Some(TreeEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path().to_path_buf(),
            depth: entry.depth(),
            kind,
            is_last: state.is_complete(),
            ancestors_open: self.states.ancestors_open(rel_parent),
        }))
    }
}

impl Iterator for TreeWalk {
    type Item = Result<TreeEntry, TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let visited = match self.inner.next()? {
                Ok(entry) => self.visit(&entry),
                Err(e) => Err(TreeError::from_walk(e, &self.root)),
            };
            match visited {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
