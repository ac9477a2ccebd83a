//! Directory traversal, per-directory bookkeeping, and last-sibling/offset layout.

mod layout;
pub(crate) mod walk;

use std::path::{Path, PathBuf};

use crate::error::TreeError;

pub use layout::{expected_children, DirPhase, DirectoryState, DirectoryStates};
pub use walk::TreeWalk;

/// What a visited entry is, as far as the printed line cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory (symlinks are not followed).
    File { size: u64 },
}

/// A single entry in the rendered directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    pub kind: EntryKind,
    /// Whether the containing directory became complete with this entry.
    pub is_last: bool,
    /// One flag per strict ancestor of the containing directory, root first.
    /// `true` means that ancestor still has children left to visit.
    pub ancestors_open: Vec<bool>,
}

impl TreeEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Configuration for tree building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Whether regular files are visited and counted, or directories only.
    pub include_files: bool,
}

/// Walk `root` and collect every entry. Stops at the first error.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Vec<TreeEntry>, TreeError> {
    TreeWalk::new(root, config)?.collect()
}
