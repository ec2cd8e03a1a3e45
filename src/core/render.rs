//! Renderer module
//!
//! Formats blocks into the output document: a START marker, the content fenced
//! with the extension-derived tag, and an END marker per file, with blank-line
//! separation between successive files.

use std::path::Path;

use crate::core::model::Block;

/// Fence tag used when a file has no extension
pub const DEFAULT_TAG: &str = "text";

/// Derive the fence tag from a file's extension (without the leading dot).
///
/// Dotfiles such as `.gitignore` have no extension and get the default tag.
pub fn fence_tag(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_string())
        .unwrap_or_else(|| DEFAULT_TAG.to_string())
}

fn start_marker(label: &str) -> String {
    format!("\n```markdown\n--- START: {} ---\n```\n", label)
}

fn fenced_content(block: &Block) -> String {
    format!("```{}\n{}\n```", block.tag, block.content)
}

fn end_marker(label: &str) -> String {
    format!("\n```markdown\n--- END: {} ---\n```\n", label)
}

/// Render all blocks into the final document, in input order.
///
/// Each block contributes three parts (start marker, fenced content, end
/// marker); all parts are joined with a newline, which yields a blank line
/// between consecutive file groups.
pub fn render_document(blocks: &[Block]) -> String {
    let mut parts = Vec::with_capacity(blocks.len() * 3);

    for block in blocks {
        parts.push(start_marker(&block.label));
        parts.push(fenced_content(block));
        parts.push(end_marker(&block.label));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_tag_from_extension() {
        assert_eq!(fence_tag(Path::new("x.ts")), "ts");
        assert_eq!(fence_tag(Path::new("src/main.rs")), "rs");
        assert_eq!(fence_tag(Path::new("archive.tar.gz")), "gz");
    }

    #[test]
    fn test_fence_tag_defaults_to_text() {
        assert_eq!(fence_tag(Path::new("Makefile")), "text");
        assert_eq!(fence_tag(Path::new(".gitignore")), "text");
    }

    #[test]
    fn test_render_single_block() {
        let blocks = vec![Block::new("a.rs", "rs", "fn a() {}")];
        let expected = "\n```markdown\n--- START: a.rs ---\n```\n\n\
                        ```rs\nfn a() {}\n```\n\n\
                        ```markdown\n--- END: a.rs ---\n```\n";
        assert_eq!(render_document(&blocks), expected);
    }

    #[test]
    fn test_render_preserves_input_order() {
        let blocks = vec![
            Block::new("first.txt", "txt", "one"),
            Block::new("second.txt", "txt", "two"),
        ];
        let doc = render_document(&blocks);

        let first = doc.find("--- START: first.txt ---").unwrap();
        let second = doc.find("--- START: second.txt ---").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_separates_blocks_with_blank_line() {
        let blocks = vec![
            Block::new("a.txt", "txt", "one"),
            Block::new("b.txt", "txt", "two"),
        ];
        let doc = render_document(&blocks);

        // the END marker of one file and the START marker of the next are
        // separated by an empty line
        assert!(doc.contains("--- END: a.txt ---\n```\n\n\n```markdown\n--- START: b.txt ---"));
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render_document(&[]), "");
    }
}
