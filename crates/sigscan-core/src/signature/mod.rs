//! Signature module: Magic-byte patterns and the lookup table
//!
//! File types are recognized by comparing a file's leading bytes
//! against a data-driven table of known signatures. Extending the
//! tool to a new type means adding one table entry; no scanner
//! changes are required.

mod table;

pub use table::{SignatureEntry, SignatureTable, SignatureTableError};
