//! Scanner module: Directory traversal and record aggregation
//!
//! Walks a directory tree, sniffs each file's leading bytes, and
//! collects one record per matched signature.

mod walker;

pub use walker::{DirectoryScanner, ExportRecord, ScanResult};
