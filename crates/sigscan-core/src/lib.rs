//! sigscan-core: Core library for signature-based file identification
//!
//! Walks a directory tree, identifies files by comparing their leading
//! bytes against a table of known magic-byte signatures, computes a
//! content hash for every match, and aggregates the results into an
//! ordered record set ready for CSV export.
//!
//! The pipeline has three stages: [`sniff`] reads a bounded prefix of
//! each file, [`signature`] matches it against the table, and [`hash`]
//! digests the full contents of matched files. [`scanner`] drives the
//! traversal and [`report`] serializes the result.

pub mod hash;
pub mod report;
pub mod scanner;
pub mod signature;
pub mod sniff;

// Re-export commonly used types
pub use hash::compute_file_hash;
pub use report::{write_report, ReportError};
pub use scanner::{DirectoryScanner, ExportRecord, ScanResult};
pub use signature::{SignatureEntry, SignatureTable, SignatureTableError};
pub use sniff::{sniff_prefix, SNIFF_WINDOW};
