//! CLI definition, run dispatch, and tracing setup.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use draftindex_core::{IndexReport, generate_index};
use draftindex_shared::{AppConfig, DraftIndexError, IndexConfig, load_config, load_config_from};
use tracing::info;

/// Exit status when the year folder is missing or not a directory.
const EXIT_DIRECTORY_NOT_FOUND: u8 = 2;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// draftindex: list a year of markdown drafts in `index.json`.
#[derive(Parser, Debug)]
#[command(
    name = "draftindex",
    version,
    about = "Scan year-drafts/<YEAR>/ and write an index.json listing of its markdown files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Year folder to index (defaults to the configured year, 2026 out of the box).
    pub year: Option<String>,

    /// Base directory containing `year-drafts/` (defaults to the current directory).
    #[arg(long, env = "DRAFTINDEX_BASE")]
    pub base: Option<PathBuf>,

    /// Config file to use instead of `~/.draftindex/draftindex.toml`.
    #[arg(long, env = "DRAFTINDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the listing to stdout instead of writing `index.json`.
    #[arg(long)]
    pub dry_run: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "draftindex=info",
        1 => "draftindex=debug",
        _ => "draftindex=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Run one index generation and map the outcome to an exit status.
pub(crate) fn run(cli: Cli) -> Result<ExitCode> {
    let app = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let base = match &cli.base {
        Some(base) => base.clone(),
        None => std::env::current_dir().wrap_err("could not determine current directory")?,
    };

    let config = index_config(&cli, &app, base);
    info!(year = %config.year, base = %config.base_dir.display(), "generating index");

    match generate_index(&config) {
        Ok(report) => {
            print_summary(&report);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => exit_for_error(err),
    }
}

/// Merge CLI flags over the file config.
fn index_config(cli: &Cli, app: &AppConfig, base: PathBuf) -> IndexConfig {
    let mut config = IndexConfig::from_app(app, base);
    if let Some(year) = &cli.year {
        config.year = year.clone();
    }
    config.dry_run = cli.dry_run;
    config
}

fn exit_for_error(err: DraftIndexError) -> Result<ExitCode> {
    match exit_status(&err) {
        Some(status) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::from(status))
        }
        None => Err(err.into()),
    }
}

/// Exit status for errors reported without a diagnostic report.
fn exit_status(err: &DraftIndexError) -> Option<u8> {
    err.is_directory_not_found().then_some(EXIT_DIRECTORY_NOT_FOUND)
}

/// Skipped files are already reported as warnings by the scanner.
fn print_summary(report: &IndexReport) {
    if !report.written {
        println!("{}", report.rendered);
        return;
    }

    if report.skipped.is_empty() {
        println!(
            "Wrote {} ({} entries)",
            report.output_path.display(),
            report.records.len()
        );
    } else {
        println!(
            "Wrote {} ({} entries, {} skipped)",
            report.output_path.display(),
            report.records.len(),
            report.skipped.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_optional_positional() {
        let cli = Cli::try_parse_from(["draftindex"]).expect("parse");
        assert!(cli.year.is_none());

        let cli = Cli::try_parse_from(["draftindex", "2025", "--dry-run"]).expect("parse");
        assert_eq!(cli.year.as_deref(), Some("2025"));
        assert!(cli.dry_run);
    }

    #[test]
    fn cli_year_overrides_config_default() {
        let app = AppConfig::default();

        let cli = Cli::try_parse_from(["draftindex"]).expect("parse");
        let config = index_config(&cli, &app, PathBuf::from("/srv"));
        assert_eq!(config.year, "2026");

        let cli = Cli::try_parse_from(["draftindex", "2024"]).expect("parse");
        let config = index_config(&cli, &app, PathBuf::from("/srv"));
        assert_eq!(config.target_dir(), PathBuf::from("/srv/year-drafts/2024"));
    }

    #[test]
    fn missing_directory_maps_to_exit_two() {
        let err = DraftIndexError::directory_not_found("/nope");
        assert_eq!(exit_status(&err), Some(2));
        assert!(exit_for_error(err).is_ok());
    }

    #[test]
    fn other_errors_propagate() {
        assert_eq!(exit_status(&DraftIndexError::config("broken")), None);
        assert!(exit_for_error(DraftIndexError::config("broken")).is_err());
    }
}
