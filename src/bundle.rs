//! Bundle flow - read each input file and assemble the output document
//!
//! Processing is strictly sequential and per-file failures are isolated: a
//! path that cannot be read is recorded and the remaining paths still run.
//! The document is rebuilt from scratch on every run and persisted via
//! write-then-rename, so no partial file is ever left at the output path.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::{Block, Failure};
use crate::core::paths::{normalize, normalize_display, relative_label};
use crate::core::reader::read_text;
use crate::core::render::{fence_tag, render_document};

/// Fixed output filename, written into the working directory
pub const OUTPUT_FILENAME: &str = "blah.md";

/// Counts for the console summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleStats {
    pub attempted: usize,
    pub included: usize,
    pub failed: usize,
}

/// Normalized form of a command-line path, used for progress lines and
/// failure listings
pub fn display_path(raw: &Path) -> String {
    normalize_display(&normalize(raw))
}

/// Process one path: resolve it against `root`, read it, and build its block.
///
/// Returns the [`Failure`] (with the display path) instead when the file
/// cannot be included.
pub fn bundle_one(root: &Path, raw: &Path) -> Result<Block, Failure> {
    let resolved = if raw.is_absolute() {
        normalize(raw)
    } else {
        normalize(&root.join(raw))
    };

    match read_text(&resolved) {
        Ok(content) => {
            let label = relative_label(&resolved, root);
            let tag = fence_tag(&resolved);
            Ok(Block::new(label, tag, content))
        }
        Err(reason) => Err(Failure::new(display_path(raw), reason)),
    }
}

/// Persist the document via write-then-rename so a failed write never leaves
/// a partial file at the output path.
fn write_document(output_path: &Path, document: &str) -> Result<()> {
    let dir = output_path.parent().unwrap_or_else(|| Path::new("."));
    let tmp_path = dir.join(format!(".{}.tmp", OUTPUT_FILENAME));

    fs::write(&tmp_path, document)
        .with_context(|| format!("failed to write bundle to {}", tmp_path.display()))?;

    if let Err(e) = fs::rename(&tmp_path, output_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("failed to replace {}", output_path.display()));
    }

    Ok(())
}

/// Bundle the given paths, in input order, and write the output document.
///
/// Terminates without writing when the list is empty or when no file could be
/// read; the previous output file, if any, is left untouched in both cases.
pub fn run_bundle(root: &Path, files: &[PathBuf], quiet: bool) -> Result<()> {
    if files.is_empty() {
        bail!("no file paths provided");
    }

    let output_path = root.join(OUTPUT_FILENAME);

    if !quiet {
        println!("Preparing bundle in: {}", output_path.display());
        println!("Attempting to read files...");
    }

    let mut blocks = Vec::new();
    let mut failures = Vec::new();

    for raw in files {
        if !quiet {
            println!("- Reading: {}", display_path(raw));
        }

        match bundle_one(root, raw) {
            Ok(block) => blocks.push(block),
            Err(failure) => {
                eprintln!(
                    "  {} {}: {}",
                    "Error:".red(),
                    failure.path,
                    failure.reason
                );
                failures.push(failure);
            }
        }
    }

    if blocks.is_empty() {
        bail!("no content was read from any valid files; bundle not created");
    }

    let document = render_document(&blocks);
    write_document(&output_path, &document)?;

    let stats = BundleStats {
        attempted: files.len(),
        included: blocks.len(),
        failed: failures.len(),
    };

    println!(
        "\n{} Content of {} file(s) written to '{}'.",
        "Success!".green(),
        stats.included,
        OUTPUT_FILENAME
    );

    if stats.failed > 0 {
        println!(
            "\nCould not read {} of {} file(s):",
            stats.failed, stats.attempted
        );
        for failure in &failures {
            println!("- {} ({})", failure.path, failure.reason);
        }
    }

    Ok(())
}
