//! Fallback titles derived from filenames.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Derive a human-readable title from a document filename.
///
/// Drops the extension and a leading four-digit year (with one optional
/// `-`/`_` after it), turns separators into spaces, and title-cases the
/// result. A word starts after any non-letter, so `o'brien` becomes
/// `O'Brien`. Falls back to the bare stem if nothing is left.
pub fn title_from_filename(file_name: &str) -> String {
    static YEAR_PREFIX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[0-9]{4}[-_]?").expect("valid regex"));

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let title = YEAR_PREFIX_RE
        .replace(stem, "")
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        stem.to_string()
    } else {
        title_case(&title)
    }
}

/// Upper-case letters that follow a non-letter, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if !c.is_alphabetic() {
            out.push(c);
        } else if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_year_prefix_and_extension() {
        assert_eq!(title_from_filename("2026-my-great-post.md"), "My Great Post");
    }

    #[test]
    fn trailing_year_is_kept() {
        assert_eq!(title_from_filename("notes_2026.md"), "Notes 2026");
    }

    #[test]
    fn underscore_and_bare_year_prefixes() {
        assert_eq!(title_from_filename("2026_launch_plan.markdown"), "Launch Plan");
        assert_eq!(title_from_filename("2026recap.md"), "Recap");
    }

    #[test]
    fn short_numeric_prefix_is_not_a_year() {
        assert_eq!(title_from_filename("202-errors.md"), "202 Errors");
    }

    #[test]
    fn lowercases_word_tails() {
        assert_eq!(title_from_filename("HELLO-wORLD.md"), "Hello World");
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(title_from_filename("2026--a__b.md"), "A B");
    }

    #[test]
    fn only_year_falls_back_to_stem() {
        assert_eq!(title_from_filename("2026.md"), "2026");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(title_from_filename("release.notes.md"), "Release.Notes");
    }

    #[test]
    fn words_start_after_any_non_letter() {
        assert_eq!(title_from_filename("o'brien_notes.md"), "O'Brien Notes");
        assert_eq!(title_from_filename("2026-draft(v2)-final.md"), "Draft(V2) Final");
        assert_eq!(title_from_filename("2nd-edition.md"), "2Nd Edition");
    }
}
