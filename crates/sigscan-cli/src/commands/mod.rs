//! CLI commands

pub mod scan;
pub mod signatures;
