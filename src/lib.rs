#![forbid(unsafe_code)]
//! dirtree — print a directory hierarchy as a box-drawing tree.

pub mod assets;
pub mod cli;
pub mod error;
pub mod render;
pub mod tree;

pub use error::TreeError;
pub use render::{render, TreePrinter};
pub use tree::TreeConfig;
