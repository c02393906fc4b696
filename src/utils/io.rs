//! File and stream I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Readers see either the old content or the new content, never a partial
/// write.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation))))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation))))?;

    Ok(())
}

/// Read newline-separated entries, dropping a trailing `\r` from each line.
/// Blank lines are kept: they are valid (empty) inputs.
pub fn read_lines<R: Read>(reader: R, operation: &str) -> Result<Vec<String>> {
    BufReader::new(reader)
        .lines()
        .map(|line| {
            line.map(|l| l.strip_suffix('\r').map(str::to_string).unwrap_or(l))
                .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new", "test write").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn write_file_atomic_fails_for_missing_dir() {
        let err = write_file_atomic(Path::new("/nonexistent/dir/file.txt"), "x", "test write")
            .unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_lines_handles_crlf_and_blank_lines() {
        let input = "Hello World\r\n\r\nFoo Bar\n";
        let lines = read_lines(input.as_bytes(), "test read").unwrap();
        assert_eq!(lines, vec!["Hello World", "", "Foo Bar"]);
    }
}
