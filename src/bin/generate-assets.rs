#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "generate-assets",
    about = "Write shell completions and the man page for dirtree"
)]
struct AssetArgs {
    /// Directory that receives completions/ and man/
    #[arg(short = 'o', long = "out-dir", default_value = "dist")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = AssetArgs::parse();
    for path in dirtree::assets::generate(&args.out_dir)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
