//! Year directory scanner.
//!
//! Lists the markdown documents directly inside a year folder and turns each
//! one into a [`DocumentRecord`]. Unreadable documents are reported back as
//! [`SkippedFile`]s instead of failing the scan.

use std::path::Path;

use tracing::{debug, instrument, warn};

use draftindex_markdown::{parse_header, title_from_filename};
use draftindex_shared::{DocumentRecord, DraftIndexError, Result, SkippedFile};

/// Extensions (lower-case, without the dot) treated as documents.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Everything collected from one directory scan, in filename order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<DocumentRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan `dir` (non-recursively) for markdown documents.
///
/// Fails with [`DraftIndexError::DirectoryNotFound`] if `dir` is missing or
/// not a directory. Per-file read failures are logged and collected in
/// [`ScanOutcome::skipped`].
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_directory(dir: &Path) -> Result<ScanOutcome> {
    if !dir.is_dir() {
        return Err(DraftIndexError::directory_not_found(dir));
    }

    let mut entries = std::fs::read_dir(dir)
        .map_err(|e| DraftIndexError::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| DraftIndexError::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut outcome = ScanOutcome::default();

    for entry in entries {
        let path = entry.path();
        if !path.is_file() || !is_document(&path) {
            continue;
        }

        let file = entry.file_name().to_string_lossy().into_owned();
        match read_record(&path, &file) {
            Ok(record) => {
                debug!(file = %record.file, title = %record.title, date = %record.date, "indexed document");
                outcome.records.push(record);
            }
            Err(err) => {
                warn!(file = %file, error = %err, "skipping unreadable document");
                outcome.skipped.push(SkippedFile {
                    file,
                    reason: skip_reason(err),
                });
            }
        }
    }

    debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "scan complete"
    );

    Ok(outcome)
}

/// Build the record for a single document.
pub fn build_record(file: &str, text: &str) -> DocumentRecord {
    let fields = parse_header(text);

    DocumentRecord {
        file: file.to_string(),
        title: non_empty(fields.title).unwrap_or_else(|| title_from_filename(file)),
        date: non_empty(fields.date).unwrap_or_default(),
        summary: non_empty(fields.summary).unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn read_record(path: &Path, file: &str) -> Result<DocumentRecord> {
    let bytes = std::fs::read(path).map_err(|e| DraftIndexError::file_read(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| DraftIndexError::file_read(path, e))?;
    Ok(build_record(file, &text))
}

fn skip_reason(err: DraftIndexError) -> String {
    match err {
        DraftIndexError::FileRead { reason, .. } => reason,
        other => other.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
