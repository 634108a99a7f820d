//! CSV report writer

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scanner::ScanResult;

/// Error raised when the report cannot be written.
///
/// Unlike per-file read errors during the scan, this is fatal: a
/// partial report may be left on disk, and the caller must be told
/// the run did not complete cleanly.
#[derive(Debug, Error)]
#[error("failed to write report to {path}: {source}")]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write records as CSV, one `path,TYPE,hash` line per record, in the
/// order the scan produced them. No header row, no quoting or
/// escaping: a path containing a comma produces an ambiguous row,
/// which is a known limitation of the report format.
///
/// The caller is expected to have validated that `path` does not
/// already exist; this performs a fresh create-and-write.
///
/// # Errors
/// Returns [`ReportError`] if the file cannot be created or written.
pub fn write_report(path: &Path, result: &ScanResult) -> Result<(), ReportError> {
    let wrap = |source| ReportError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for record in &result.records {
        writeln!(
            writer,
            "{},{},{}",
            record.path.display(),
            record.file_type,
            record.hash
        )
        .map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
