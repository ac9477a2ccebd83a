use clap::Parser;
use std::path::PathBuf;

use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory hierarchy as a tree",
    after_help = "Examples:\n  dirtree .\n  dirtree ./src -f"
)]
pub struct Args {
    /// Directory to render
    pub path: PathBuf,

    /// Include regular files (with their sizes)
    #[arg(short = 'f')]
    pub show_files: bool,
}

impl From<&Args> for TreeConfig {
    fn from(args: &Args) -> Self {
        TreeConfig {
            include_files: args.show_files,
        }
    }
}
