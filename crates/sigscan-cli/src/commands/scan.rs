//! Scan command: Walk a directory and export a CSV report
//!
//! This layer owns everything the core treats as pre-validated input:
//! checking the root directory, choosing and checking the output
//! path, and reporting the run outcome.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, Timelike};
use sigscan_core::{write_report, DirectoryScanner, SignatureTable};
use tracing::info;

/// Run the scan command
///
/// # Errors
/// Returns an error if the input or output path fails validation, or
/// if the report cannot be written.
pub fn run(path: &Path, output: Option<&Path>, recursive: bool) -> Result<()> {
    let root = validate_root(path)?;
    let output = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(),
    };
    validate_output(&output)?;

    info!("Directory to analyze: {}", root.display());
    info!("Output path:          {}", output.display());
    info!("Include subdirs:      {}", recursive);

    let result = DirectoryScanner::new(&root)
        .with_recursion(recursive)
        .scan(&SignatureTable::builtin());

    write_report(&output, &result)?;

    info!(
        "✓ Scan completed: {} files examined, {} records written, {} entries skipped",
        result.files_examined,
        result.records.len(),
        result.entries_skipped
    );
    Ok(())
}

/// Validate the input root and canonicalize it so report rows carry
/// absolute paths.
fn validate_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        bail!("directory does not exist: {}", path.display());
    }
    path.canonicalize()
        .with_context(|| format!("cannot resolve directory: {}", path.display()))
}

/// Validate the output path: the file must not already exist and its
/// parent directory must.
fn validate_output(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "output file exists, cannot overwrite: {}",
            path.display()
        );
    }
    match path.parent() {
        // An empty parent means a bare filename in the current directory
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Ok(()),
        Some(parent) => bail!("path to output file is not valid: {}", parent.display()),
        None => bail!("invalid output path: {}", path.display()),
    }
}

/// Default report path: `output/output_<timestamp>.csv`, where the
/// timestamp is `yyyyMMddHHmmss` plus four digits of fractional
/// seconds.
fn default_output_path() -> PathBuf {
    let now = Local::now();
    let stamp = format!(
        "{}{:04}",
        now.format("%Y%m%d%H%M%S"),
        now.nanosecond() / 100_000
    );
    PathBuf::from("output").join(format!("output_{stamp}.csv"))
}
