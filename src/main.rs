//! mdbundle - Bundle the contents of selected files into one Markdown document
//!
//! mdbundle reads each file given on the command line, wraps its content in a
//! labeled START/END block, and writes the concatenation to `blah.md` in the
//! current working directory (overwritten on every run).

use anyhow::Result;
use clap::Parser;

mod bundle;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
