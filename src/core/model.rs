//! Bundle data model
//!
//! Every input path produces exactly one [`Block`] (on a successful read) or
//! exactly one [`Failure`] - never both, never neither.

use thiserror::Error;

/// Why a path could not be included in the bundle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The path does not resolve to an existing filesystem entry
    #[error("not found")]
    NotFound,

    /// The path resolves to a directory
    #[error("is a directory")]
    IsADirectory,

    /// Any other I/O or UTF-8 decoding failure during the read
    #[error("read error: {0}")]
    Read(String),
}

/// A labeled content block for one successfully read file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Path rendered relative to the working directory, shown in the markers
    pub label: String,

    /// Fence tag derived from the file extension
    pub tag: String,

    /// Full file content as UTF-8 text
    pub content: String,
}

impl Block {
    /// Create a new block
    pub fn new(
        label: impl Into<String>,
        tag: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            tag: tag.into(),
            content: content.into(),
        }
    }
}

/// A path that could not be included, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Normalized path as given on the command line
    pub path: String,

    /// Why the path was skipped
    pub reason: SkipReason,
}

impl Failure {
    /// Create a new failure record
    pub fn new(path: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}
