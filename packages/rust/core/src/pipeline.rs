//! End-to-end index run: year folder → scan → order → render → `index.json`.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use draftindex_shared::{DocumentRecord, IndexConfig, Result, SkippedFile};

use crate::index::{order_records, render_index, write_index};
use crate::scanner::scan_directory;

/// Result of a successful index run.
#[derive(Debug)]
pub struct IndexReport {
    /// Where the listing was (or, in dry-run mode, would be) written.
    pub output_path: PathBuf,
    /// Records in listing order.
    pub records: Vec<DocumentRecord>,
    /// Documents left out because they could not be read.
    pub skipped: Vec<SkippedFile>,
    /// The rendered JSON listing.
    pub rendered: String,
    /// False when the run was a dry run.
    pub written: bool,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Build the listing for `config.year` and write it into the year folder.
///
/// Nothing is written unless every document has been collected, and a
/// missing year folder fails before any output is produced.
#[instrument(skip_all, fields(year = %config.year))]
pub fn generate_index(config: &IndexConfig) -> Result<IndexReport> {
    let start = Instant::now();
    let target_dir = config.target_dir();
    let output_path = config.output_path();

    info!(dir = %target_dir.display(), "scanning year folder");

    let scan = scan_directory(&target_dir)?;
    let mut records = scan.records;
    order_records(&mut records);

    let rendered = render_index(&records)?;

    let written = if config.dry_run {
        info!(records = records.len(), "dry run, leaving index untouched");
        false
    } else {
        write_index(&output_path, &rendered)?;
        info!(
            path = %output_path.display(),
            records = records.len(),
            skipped = scan.skipped.len(),
            "index written"
        );
        true
    };

    Ok(IndexReport {
        output_path,
        records,
        skipped: scan.skipped,
        rendered,
        written,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use draftindex_shared::AppConfig;

    fn setup(year: &str) -> (tempfile::TempDir, IndexConfig) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut config = IndexConfig::from_app(&AppConfig::default(), tmp.path());
        config.year = year.to_string();
        (tmp, config)
    }

    fn year_dir(config: &IndexConfig) -> PathBuf {
        let dir = config.target_dir();
        fs::create_dir_all(&dir).expect("mkdir year");
        dir
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write fixture");
    }

    #[test]
    fn writes_ordered_listing() {
        let (_tmp, config) = setup("2026");
        let dir = year_dir(&config);
        write(&dir, "2026-jan.md", "---\ndate: 2026-01-01\n---\n");
        write(&dir, "2026-mar.md", "---\ntitle: \"March\"\ndate: 2026-03-01\nsummary: Spring\n---\n");
        write(&dir, "2026-undated.md", "no header here");
        write(&dir, "README.md", "---\ndate: 1999-01-01\n---\n");

        let report = generate_index(&config).expect("generate");
        assert!(report.written);
        assert_eq!(report.output_path, dir.join("index.json"));

        let files: Vec<&str> = report.records.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(
            files,
            vec!["README.md", "2026-mar.md", "2026-jan.md", "2026-undated.md"]
        );

        let on_disk = fs::read_to_string(&report.output_path).expect("read index");
        assert_eq!(on_disk, report.rendered);

        let parsed: Vec<DocumentRecord> = serde_json::from_str(&on_disk).expect("parse index");
        assert_eq!(parsed[1].title, "March");
        assert_eq!(parsed[1].summary, "Spring");
        assert_eq!(parsed[2].title, "Jan");
        assert_eq!(parsed[3].title, "Undated");
        assert_eq!(parsed[3].date, "");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let (_tmp, config) = setup("2026");
        let dir = year_dir(&config);
        write(&dir, "a.md", "---\ndate: 2026-02-02\n---\n");
        write(&dir, "b.md", "---\ndate: 2026-02-02\n---\n");
        write(&dir, "c.markdown", "body");

        let first = generate_index(&config).expect("first run");
        let first_bytes = fs::read(&first.output_path).expect("read first");
        let second = generate_index(&config).expect("second run");
        let second_bytes = fs::read(&second.output_path).expect("read second");

        assert_eq!(first_bytes, second_bytes);
        assert_eq!(second.records.len(), 3);
    }

    #[test]
    fn missing_year_writes_nothing() {
        let (tmp, config) = setup("1999");
        fs::create_dir_all(tmp.path().join("year-drafts")).expect("mkdir drafts");

        let err = generate_index(&config).unwrap_err();
        assert!(err.is_directory_not_found());
        assert!(!config.output_path().exists());
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let (_tmp, config) = setup("2026");
        let dir = year_dir(&config);
        write(&dir, "good.md", "---\ntitle: Good\n---\n");
        fs::write(dir.join("bad.md"), [0xc3, 0x28, 0xa0, 0xa1]).expect("write bad");

        let report = generate_index(&config).expect("generate");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].file, "good.md");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "bad.md");
    }

    #[test]
    fn dry_run_leaves_prior_output() {
        let (_tmp, mut config) = setup("2026");
        let dir = year_dir(&config);
        write(&dir, "post.md", "body");
        write(&dir, "index.json", "previous");
        config.dry_run = true;

        let report = generate_index(&config).expect("generate");
        assert!(!report.written);
        assert!(report.rendered.contains("\"file\": \"post.md\""));
        assert_eq!(
            fs::read_to_string(dir.join("index.json")).expect("read"),
            "previous"
        );
    }

    #[test]
    fn empty_year_folder_yields_empty_array() {
        let (_tmp, config) = setup("2026");
        year_dir(&config);

        let report = generate_index(&config).expect("generate");
        assert!(report.records.is_empty());
        assert_eq!(fs::read_to_string(&report.output_path).expect("read"), "[]");
    }
}
