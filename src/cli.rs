//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// mdbundle - bundle file contents into a single shareable Markdown document.
#[derive(Parser, Debug)]
#[command(name = "mdbundle")]
#[command(
    author,
    version,
    about,
    long_about = r#"mdbundle reads each FILE in order, wraps its content in a labeled
START/END block, and writes the concatenation to 'blah.md' in the current
working directory (overwritten on every run).

Files that cannot be read (missing, a directory, not valid UTF-8) are skipped
and listed at the end; one file's failure never aborts the remaining files.

Examples:
    mdbundle src/App.tsx src/components/EditModal.tsx
    mdbundle README.md Cargo.toml --quiet
"#
)]
pub struct Cli {
    /// Files to bundle, in order.
    #[arg(
        value_name = "FILE",
        required = true,
        num_args = 1..,
        long_help = "Files to bundle. Order is significant: blocks appear in the output\n\
document in the order the files are given here. Paths are resolved against\n\
the current working directory."
    )]
    pub files: Vec<PathBuf>,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (suppress per-file progress lines).
    #[arg(
        short,
        long,
        long_help = "Suppress per-file progress lines. The final summary and any failure\n\
listing are still printed."
    )]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root =
        std::env::current_dir().context("cannot determine the current working directory")?;

    crate::bundle::run_bundle(&root, &cli.files, cli.quiet)
}
