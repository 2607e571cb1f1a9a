//! File reading with a two-step decoding strategy
//!
//! Handles:
//! - I/O failures (reported as unreadable, never raised)
//! - Non-UTF-8 files (strict decode first, lossy decode second)
//! - Binary files (any NUL character after decoding)

use std::fs;
use std::path::Path;

/// Result of the decoding step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Valid UTF-8
    Strict(String),
    /// Invalid sequences were replaced with U+FFFD
    Lossy(String),
}

impl Decoded {
    pub fn into_text(self) -> String {
        match self {
            Decoded::Strict(text) | Decoded::Lossy(text) => text,
        }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, Decoded::Lossy(_))
    }
}

/// Outcome of reading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Decoded text, with whether lossy conversion was needed
    Text { content: String, lossy: bool },
    /// Readable, but contains NUL characters
    Binary,
    /// Could not be read at all
    Unreadable { reason: String },
}

/// Decode bytes strictly, falling back to lossy conversion
pub fn decode(bytes: Vec<u8>) -> Decoded {
    match String::from_utf8(bytes) {
        Ok(text) => Decoded::Strict(text),
        Err(err) => Decoded::Lossy(String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}

/// Check for NUL characters anywhere in the text
pub fn is_binary(text: &str) -> bool {
    text.contains('\0')
}

/// Read a file as text
pub fn read_text(path: &Path) -> ReadOutcome {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return ReadOutcome::Unreadable {
                reason: e.to_string(),
            };
        }
    };

    let decoded = decode(bytes);
    let lossy = decoded.is_lossy();
    let content = decoded.into_text();

    if is_binary(&content) {
        return ReadOutcome::Binary;
    }

    ReadOutcome::Text { content, lossy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        assert_eq!(
            read_text(&file_path),
            ReadOutcome::Text {
                content: "Hello, World!".to_string(),
                lossy: false,
            }
        );
    }

    #[test]
    fn test_read_text_lossy_conversion() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("invalid_utf8.txt");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0xFF, 0xFE, 0x48, 0x65, 0x6C, 0x6C, 0x6F])
            .unwrap();

        match read_text(&file_path) {
            ReadOutcome::Text { content, lossy } => {
                assert!(lossy);
                assert!(content.ends_with("Hello"));
                assert!(content.contains('\u{FFFD}'));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_read_text_binary_anywhere() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("blob.txt");

        // NUL well past any prefix window
        let mut bytes = "must decide\n".repeat(2000).into_bytes();
        bytes.push(0x00);
        fs::write(&file_path, bytes).unwrap();

        assert_eq!(read_text(&file_path), ReadOutcome::Binary);
    }

    #[test]
    fn test_read_nonexistent_file() {
        match read_text(Path::new("/nonexistent/file.txt")) {
            ReadOutcome::Unreadable { reason } => assert!(!reason.is_empty()),
            other => panic!("expected unreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_text(dir.path()),
            ReadOutcome::Unreadable { .. }
        ));
    }

    #[test]
    fn test_decode_strict_then_lossy() {
        assert_eq!(decode(b"ok".to_vec()), Decoded::Strict("ok".to_string()));

        let lossy = decode(vec![b'a', 0xC3, b'b']);
        assert!(lossy.is_lossy());
        assert_eq!(lossy.into_text(), "a\u{FFFD}b");
    }

    #[test]
    fn test_is_binary() {
        assert!(is_binary("abc\0def"));
        assert!(!is_binary("abc def"));
    }
}
