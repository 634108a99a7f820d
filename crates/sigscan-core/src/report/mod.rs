//! Report module: CSV serialization of scan results

mod writer;

pub use writer::{write_report, ReportError};
