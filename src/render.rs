//! Line formatting and the streaming tree printer.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::TreeError;
use crate::tree::{EntryKind, TreeConfig, TreeEntry, TreeWalk};

pub const BRANCH: &str = "\u{251c}\u{2500}\u{2500}\u{2500}"; // ├───
pub const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500}\u{2500}"; // └───
pub const STICK_OFFSET: &str = "\u{2502}\t"; // │
pub const SPACE_OFFSET: &str = "\t";

/// Continuation markers for every strict ancestor level of the entry.
pub fn offset(entry: &TreeEntry) -> String {
    entry
        .ancestors_open
        .iter()
        .map(|&open| if open { STICK_OFFSET } else { SPACE_OFFSET })
        .collect()
}

pub fn connector(entry: &TreeEntry) -> &'static str {
    if entry.is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

/// Size annotation appended to file names; directories get none.
pub fn size_suffix(kind: EntryKind) -> Option<String> {
    match kind {
        EntryKind::Directory => None,
        EntryKind::File { size: 0 } => Some("(empty)".to_string()),
        EntryKind::File { size } => Some(format!("({size}b)")),
    }
}

/// Full display line for one entry, without the trailing newline.
pub fn format_line(entry: &TreeEntry) -> String {
    let mut line = offset(entry);
    line.push_str(connector(entry));
    line.push_str(&entry.name);
    if let Some(suffix) = size_suffix(entry.kind) {
        line.push(' ');
        line.push_str(&suffix);
    }
    line
}

/// Walk `root` and write one line per entry to `out`, returning how many
/// lines were written. Lines written before an error stay written.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    root: &Path,
    config: &TreeConfig,
) -> Result<usize, TreeError> {
    let mut written = 0;
    for entry in TreeWalk::new(root, config)? {
        let entry = entry?;
        writeln!(out, "{}", format_line(&entry)).map_err(TreeError::Write)?;
        written += 1;
    }
    debug!(root = %root.display(), lines = written, "tree rendered");
    Ok(written)
}

/// Holds a [`TreeConfig`] so the same settings can render several roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePrinter {
    config: TreeConfig,
}

impl TreePrinter {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W, root: &Path) -> Result<usize, TreeError> {
        render(out, root, &self.config)
    }

    /// Render into a `String`; convenient for tests and embedding.
    pub fn render_to_string(&self, root: &Path) -> Result<String, TreeError> {
        let mut buf = Vec::new();
        self.render(&mut buf, root)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
