//! Markdown document metadata: header block parsing and filename titles.
//!
//! Both passes are pure string transforms with no I/O; the scanner in
//! `draftindex-core` feeds them file contents and names.

mod header;
mod title;

pub use header::parse_header;
pub use title::title_from_filename;
