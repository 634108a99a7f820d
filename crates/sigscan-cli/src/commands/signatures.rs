//! Signatures command: List the built-in signature table

use sigscan_core::SignatureTable;

/// Print each known type label with its magic-byte pattern in hex
pub fn run() {
    for entry in SignatureTable::builtin().entries() {
        println!("{}\t{}", entry.label, hex::encode_upper(&entry.pattern));
    }
}
