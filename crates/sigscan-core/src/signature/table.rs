//! Magic-byte signature table

use thiserror::Error;

use crate::sniff::SNIFF_WINDOW;

/// Errors that can occur when building a signature table
#[derive(Debug, Error)]
pub enum SignatureTableError {
    #[error("duplicate signature label: {0}")]
    DuplicateLabel(String),

    #[error("signature {0} has an empty pattern")]
    EmptyPattern(String),

    #[error("signature {label} pattern is {len} bytes, longer than the 128-byte sniff window")]
    PatternTooLong { label: String, len: usize },
}

/// A single magic-byte signature: a type label and the byte pattern
/// expected at the very start of a file of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    pub label: String,
    pub pattern: Vec<u8>,
}

impl SignatureEntry {
    /// Create a new signature entry
    #[must_use]
    pub fn new(label: impl Into<String>, pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

/// Table of known signatures, fixed after construction
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    /// Build a table from the given entries.
    ///
    /// # Errors
    /// Returns an error if two entries share a label, a pattern is
    /// empty, or a pattern is longer than the sniff window.
    pub fn new(entries: Vec<SignatureEntry>) -> Result<Self, SignatureTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.pattern.is_empty() {
                return Err(SignatureTableError::EmptyPattern(entry.label.clone()));
            }
            if entry.pattern.len() > SNIFF_WINDOW {
                return Err(SignatureTableError::PatternTooLong {
                    label: entry.label.clone(),
                    len: entry.pattern.len(),
                });
            }
            if entries[..i].iter().any(|other| other.label == entry.label) {
                return Err(SignatureTableError::DuplicateLabel(entry.label.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in table of recognized file types.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                SignatureEntry::new("PDF", *b"%PDF"),
                SignatureEntry::new("JPG", [0xFF, 0xD8]),
                SignatureEntry::new("PNG", [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
                // "GIF8" covers both the 87a and 89a variants
                SignatureEntry::new("GIF", *b"GIF8"),
            ],
        }
    }

    /// Every entry whose pattern is a byte-for-byte prefix of
    /// `prefix`. A prefix may match zero, one, or several entries;
    /// all matches are yielded, in table order.
    pub fn matches<'a>(&'a self, prefix: &'a [u8]) -> impl Iterator<Item = &'a SignatureEntry> {
        self.entries
            .iter()
            .filter(move |entry| prefix.starts_with(&entry.pattern))
    }

    /// All registered entries, in table order
    #[must_use]
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::builtin()
    }
}
