//! Hash module: Content hashing for matched files

use std::fs::File;
use std::io;
use std::path::Path;

use md5::{Digest, Md5};


/// Compute the MD5 digest of a file's full contents, rendered as 32
/// lowercase hex characters.
///
/// The file is streamed through the hasher, so arbitrarily large
/// files are handled without buffering them whole. The digest is
/// opaque to downstream consumers; MD5 is used for its fixed 128-bit
/// output, not for any security property.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_hash(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
