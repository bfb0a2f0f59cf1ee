//! Index generation for draftindex.
//!
//! This crate ties the year folder scan, listing order, and `index.json`
//! output together into a single run (`generate_index`).

pub mod index;
pub mod pipeline;
pub mod scanner;

pub use pipeline::{IndexReport, generate_index};
