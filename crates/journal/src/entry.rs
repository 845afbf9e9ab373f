//! The journal entry type and its constructors.

use crate::decode::decode_lossy;
use crate::error::{JournalError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// A single journal entry, decoded and ready for classification.
///
/// `byte_len` records the size of the raw input, not the decoded text;
/// the two differ when malformed sequences were dropped during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// Identifier of the source blob (usually the file name)
    pub name: String,
    /// Length of the raw input in bytes
    pub byte_len: usize,
    /// Decoded entry text
    pub text: String,
}

impl JournalEntry {
    /// Build an entry from a name and raw bytes.
    ///
    /// Never fails: undecodable byte sequences are dropped.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            byte_len: bytes.len(),
            text: decode_lossy(bytes),
        }
    }

    /// Build an entry directly from text (used by tests and the CLI's
    /// classify-only path).
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: name.into(),
            byte_len: text.len(),
            text,
        }
    }

    /// Load an entry from a file, using the file name as the entry name.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| JournalError::InvalidPath {
                path: path.display().to_string(),
            })?;

        let bytes = fs::read(path).map_err(|source| JournalError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        info!("Loaded journal entry {} ({} bytes)", name, bytes.len());
        Ok(Self::from_bytes(name, &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_records_raw_length() {
        let entry = JournalEntry::from_bytes("2024-03-01.txt", b"a \xFF day");
        assert_eq!(entry.byte_len, 7);
        assert_eq!(entry.text, "a  day");
    }

    #[test]
    fn test_from_text() {
        let entry = JournalEntry::from_text("note", "quiet evening");
        assert_eq!(entry.name, "note");
        assert_eq!(entry.byte_len, 13);
        assert_eq!(entry.text, "quiet evening");
    }

    #[test]
    fn test_load_missing_file() {
        let result = JournalEntry::load(Path::new("/nonexistent/entry.txt"));
        assert!(matches!(result, Err(JournalError::ReadFailed { .. })));
    }
}
