use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TreeError;

/// Lifecycle of a directory that has had at least one child visited.
/// A directory with no record yet is "unseen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirPhase {
    Open,
    Complete,
}

/// Running child count of one directory against its expected total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryState {
    pub child_count: usize,
    pub expected: usize,
}

impl DirectoryState {
    pub fn new(expected: usize) -> Self {
        Self {
            child_count: 0,
            expected,
        }
    }

    pub fn phase(&self) -> DirPhase {
        if self.child_count >= self.expected {
            DirPhase::Complete
        } else {
            DirPhase::Open
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == DirPhase::Complete
    }
}

/// Count the children of `dir` the walk will visit: everything when files
/// are included, sub-directories only otherwise. Symlinks are not followed.
pub fn expected_children(dir: &Path, include_files: bool) -> Result<usize, TreeError> {
    let mut count = 0;
    for child in fs::read_dir(dir).map_err(|e| TreeError::read(dir, e))? {
        let child = child.map_err(|e| TreeError::read(dir, e))?;
        if include_files {
            count += 1;
            continue;
        }
        let file_type = child
            .file_type()
            .map_err(|e| TreeError::read(child.path(), e))?;
        if file_type.is_dir() {
            count += 1;
        }
    }
    Ok(count)
}

/// Per-traversal map from root-relative directory path to its state.
/// The root itself is keyed by the empty path.
#[derive(Debug, Default)]
pub struct DirectoryStates {
    include_files: bool,
    states: HashMap<PathBuf, DirectoryState>,
}

impl DirectoryStates {
    pub fn new(include_files: bool) -> Self {
        Self {
            include_files,
            states: HashMap::new(),
        }
    }

    /// Count one more visited child of `rel_dir`, listing `abs_dir` once to
    /// learn the expected total the first time the directory is seen.
    pub fn record_child(
        &mut self,
        rel_dir: &Path,
        abs_dir: &Path,
    ) -> Result<DirectoryState, TreeError> {
        let state = match self.states.entry(rel_dir.to_path_buf()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let expected = expected_children(abs_dir, self.include_files)?;
                debug!(dir = %abs_dir.display(), expected, "directory opened");
                slot.insert(DirectoryState::new(expected))
            }
        };
        state.child_count += 1;
        if state.child_count == state.expected {
            debug!(dir = %abs_dir.display(), children = state.child_count, "directory complete");
        }
        Ok(*state)
    }

    pub fn get(&self, rel_dir: &Path) -> Option<&DirectoryState> {
        self.states.get(rel_dir)
    }

    /// `None` while the directory is unseen.
    pub fn phase(&self, rel_dir: &Path) -> Option<DirPhase> {
        self.get(rel_dir).map(DirectoryState::phase)
    }

    /// Open/complete flags for every strict ancestor of `rel_dir`, root
    /// first. An unseen ancestor counts as open.
    pub fn ancestors_open(&self, rel_dir: &Path) -> Vec<bool> {
        let mut chain: Vec<&Path> = rel_dir.ancestors().skip(1).collect();
        chain.reverse();
        chain
            .into_iter()
            .map(|ancestor| !self.get(ancestor).is_some_and(DirectoryState::is_complete))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
