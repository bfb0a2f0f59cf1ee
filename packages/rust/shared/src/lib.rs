//! Shared types, error model, and configuration for draftindex.
//!
//! This crate is the foundation depended on by the other draftindex crates.
//! It provides:
//! - [`DraftIndexError`], the unified error type
//! - Domain types ([`DocumentRecord`], [`HeaderFields`], [`SkippedFile`])
//! - Configuration ([`AppConfig`], [`IndexConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, IndexConfig, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{DraftIndexError, Result};
pub use types::{DocumentRecord, HeaderFields, README_FILE_NAME, SkippedFile};
