#![allow(dead_code)]

use dirtree::tree::TreeConfig;
use dirtree::TreePrinter;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// TreeConfig that shows regular files (`-f`).
pub fn files_config() -> TreeConfig {
    TreeConfig {
        include_files: true,
    }
}

/// TreeConfig that shows directories only.
pub fn dirs_config() -> TreeConfig {
    TreeConfig {
        include_files: false,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            write_file(tmp.path(), p, "");
        }
    }
    tmp
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, contents).unwrap();
}

/// Render `root` to a String with the given config.
pub fn render_string(root: &Path, config: TreeConfig) -> String {
    TreePrinter::new(config).render_to_string(root).unwrap()
}
