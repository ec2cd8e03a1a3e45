//! File reading with per-file failure classification
//!
//! Reads are strict UTF-8: a decoding failure is an ordinary read error, not a
//! lossy fallback.

use std::fs;
use std::path::Path;

use crate::core::model::SkipReason;

/// Read a file's full contents as UTF-8 text, classifying failures.
///
/// The file is either fully read or not included at all; there is no partial
/// or truncated read.
pub fn read_text(path: &Path) -> Result<String, SkipReason> {
    if !path.exists() {
        return Err(SkipReason::NotFound);
    }
    if path.is_dir() {
        return Err(SkipReason::IsADirectory);
    }

    fs::read_to_string(path).map_err(|e| SkipReason::Read(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_text_success() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        assert_eq!(read_text(&file_path).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_read_text_missing() {
        let temp = tempdir().unwrap();
        let result = read_text(&temp.path().join("nope.txt"));
        assert_eq!(result.unwrap_err(), SkipReason::NotFound);
    }

    #[test]
    fn test_read_text_directory() {
        let temp = tempdir().unwrap();
        let result = read_text(temp.path());
        assert_eq!(result.unwrap_err(), SkipReason::IsADirectory);
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("invalid_utf8.txt");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0xFF, 0xFE, 0x48, 0x65, 0x6C, 0x6C, 0x6F])
            .unwrap();

        match read_text(&file_path) {
            Err(SkipReason::Read(_)) => {}
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_text_empty_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_text(&file_path).unwrap(), "");
    }
}
