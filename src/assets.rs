//! Shell completions and man page for the `dirtree` command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use tracing::debug;

use crate::cli::Args;

const BIN_NAME: &str = "dirtree";

pub const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

/// Write completions to `<out_dir>/completions` and the man page to
/// `<out_dir>/man`, returning every file written.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("{}: failed to create directory", dir.display()))?;
    }

    let mut written = Vec::with_capacity(SHELLS.len() + 1);
    for shell in SHELLS {
        let mut cmd = Args::command();
        let path = generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
        debug!(path = %path.display(), %shell, "completion written");
        written.push(path);
    }

    let mut page = Vec::new();
    Man::new(Args::command())
        .render(&mut page)
        .context("failed to render man page")?;
    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    fs::write(&man_path, page)
        .with_context(|| format!("{}: failed to write man page", man_path.display()))?;
    written.push(man_path);

    Ok(written)
}
