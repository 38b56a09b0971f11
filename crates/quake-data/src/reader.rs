//! Log file loading for the Quake log parser.
//!
//! Reads a whole server log into memory. Server logs are not guaranteed to be
//! valid UTF-8 (player names are written in whatever encoding the client
//! used), so invalid sequences are replaced rather than rejected.

use std::borrow::Cow;
use std::path::Path;

use quake_core::error::{QuakeError, Result};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the log at `path` into a single string.
///
/// Fails with [`QuakeError::FileRead`] when the file is missing or
/// unreadable.
pub fn read_log(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| QuakeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let content = decode_log_bytes(&bytes, path);
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(content)
}

/// Split log content into lines, accepting both `\n` and `\r\n` endings.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn decode_log_bytes(bytes: &[u8], path: &Path) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(
                "Log {} contains invalid UTF-8; affected characters were replaced",
                path.display()
            );
            text
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_log(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    // ── read_log ──────────────────────────────────────────────────────────────

    #[test]
    fn test_read_log_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "games.log", b"  0:00 InitGame: \n  1:00 Exit:\n");

        let content = read_log(&path).unwrap();
        assert_eq!(content, "  0:00 InitGame: \n  1:00 Exit:\n");
    }

    #[test]
    fn test_read_log_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.log");

        let err = read_log(&path).unwrap_err();
        match &err {
            QuakeError::FileRead { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("nope.log"));
    }

    #[test]
    fn test_read_log_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_log(dir.path()),
            Err(QuakeError::FileRead { .. })
        ));
    }

    #[test]
    fn test_read_log_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        // 0xE9 is a Latin-1 'é', not valid UTF-8 on its own.
        let path = write_log(
            dir.path(),
            "latin1.log",
            b"Kill: 2 3 7: Jos\xE9 killed Zeh by MOD_ROCKET\n",
        );

        let content = read_log(&path).unwrap();
        assert!(content.contains("Jos\u{FFFD} killed Zeh"));
    }

    #[test]
    fn test_read_log_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "empty.log", b"");
        assert_eq!(read_log(&path).unwrap(), "");
    }

    // ── split_lines ───────────────────────────────────────────────────────────

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines = split_lines("a\r\nb\nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }
}
