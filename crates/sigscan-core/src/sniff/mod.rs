//! Sniff module: Bounded prefix reads for signature matching

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Number of leading bytes inspected for signature matching.
pub const SNIFF_WINDOW: usize = 128;

/// Read up to [`SNIFF_WINDOW`] bytes from the start of `path`.
///
/// Returns exactly the bytes read: fewer than the window for a short
/// file, empty for an empty file. The buffer is truncated to the byte
/// count the read reported, never zero-padded, so signature matching
/// only ever sees bytes that are actually in the file.
///
/// One open/read/close cycle; the handle does not outlive the call.
/// Hashing a matched file reopens it separately.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn sniff_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; SNIFF_WINDOW];
    let n = file.read(&mut buf)?;
    buf.truncate(n);
    Ok(buf)
}
