//! sigscan-cli library
//!
//! Exposes the command implementations so integration tests can drive
//! them directly.

pub mod commands;
