//! Core domain types for draftindex listings.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DocumentRecord
// ---------------------------------------------------------------------------

/// A single entry in `index.json`.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Filename within the year directory.
    pub file: String,
    /// Display title (never empty).
    pub title: String,
    /// Free-form date string, empty when absent.
    pub date: String,
    /// Short summary, empty when absent.
    pub summary: String,
}

impl DocumentRecord {
    /// Whether this record is the directory's readme, which lists first.
    pub fn is_readme(&self) -> bool {
        self.file.eq_ignore_ascii_case(README_FILE_NAME)
    }
}

/// Filename given priority in the ordered listing (matched case-insensitively).
pub const README_FILE_NAME: &str = "readme.md";

// ---------------------------------------------------------------------------
// HeaderFields
// ---------------------------------------------------------------------------

/// Recognized fields recovered from a document's header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
}

impl HeaderFields {
    /// True when no recognized key was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.summary.is_none()
    }
}

// ---------------------------------------------------------------------------
// SkippedFile
// ---------------------------------------------------------------------------

/// A document that was left out of the listing because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Filename within the year directory.
    pub file: String,
    /// Human-readable cause.
    pub reason: String,
}
