//! Listing order and `index.json` output.

use std::cmp::Ordering;
use std::path::Path;

use tracing::instrument;

use draftindex_shared::{DocumentRecord, DraftIndexError, Result};

/// Sort records for the listing.
///
/// The readme goes first; everything else is ordered by `date` descending
/// as a plain string comparison, so undated records land last. The sort is
/// stable, so equal dates keep their incoming (filename) order.
pub fn order_records(records: &mut [DocumentRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(a: &DocumentRecord, b: &DocumentRecord) -> Ordering {
    b.is_readme()
        .cmp(&a.is_readme())
        .then_with(|| b.date.cmp(&a.date))
}

/// Render records as a pretty-printed JSON array (two-space indent).
pub fn render_index(records: &[DocumentRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| DraftIndexError::Serialize(e.to_string()))
}

/// Replace `path` with `content` in one step (write to temp, then rename).
#[instrument(skip_all, fields(path = %path.display(), bytes = content.len()))]
pub fn write_index(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.json".to_string());
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    if let Err(e) = std::fs::write(&temp, content) {
        let _ = std::fs::remove_file(&temp);
        return Err(DraftIndexError::io(&temp, e));
    }

    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(DraftIndexError::io(path, e));
    }

    Ok(())
}
