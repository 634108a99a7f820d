//! Directory walker: sniffs, matches, and hashes files into records

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::hash::compute_file_hash;
use crate::signature::{SignatureEntry, SignatureTable};
use crate::sniff::sniff_prefix;

/// One report row: a file that matched a signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub path: PathBuf,
    pub file_type: String,
    pub hash: String,
}

/// Outcome of a scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Records in discovery order, append-only during the scan
    pub records: Vec<ExportRecord>,
    /// Regular files whose prefix was examined
    pub files_examined: usize,
    /// Entries skipped because they could not be read or listed
    pub entries_skipped: usize,
}

/// Scanner that walks a directory and matches files against a
/// signature table
#[derive(Debug)]
pub struct DirectoryScanner {
    root: PathBuf,
    recursive: bool,
}

impl DirectoryScanner {
    /// Create a scanner rooted at `root`. Recursion is on by default.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
        }
    }

    /// Enable or disable descent into subdirectories
    #[must_use]
    pub fn with_recursion(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and collect one record per (file, matching
    /// signature) pair.
    ///
    /// The platform's raw listing order is unspecified, so the walk
    /// imposes a deterministic one: within each directory, regular
    /// files sorted lexicographically by name come first, then
    /// subdirectories sorted the same way, visited depth-first. A
    /// directory's own records therefore always precede those of its
    /// subdirectories, and report order is stable across runs.
    ///
    /// Unreadable files, unlistable subdirectories, symlinks, and
    /// special files are logged and skipped; they never abort the
    /// scan.
    pub fn scan(&self, table: &SignatureTable) -> ScanResult {
        let mut result = ScanResult::default();

        let mut walk = WalkDir::new(&self.root).min_depth(1);
        if !self.recursive {
            walk = walk.max_depth(1);
        }
        let walk = walk.sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    result.entries_skipped += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                if !entry.file_type().is_dir() {
                    debug!("Ignoring non-regular file: {}", entry.path().display());
                }
                continue;
            }
            result.files_examined += 1;
            match process_file(entry.path(), table) {
                Ok(records) => result.records.extend(records),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    result.entries_skipped += 1;
                }
            }
        }

        result
    }
}

/// Sniff a single file and build records for every signature that
/// matches its prefix.
///
/// The hash is computed at most once per file and shared across the
/// records when more than one signature matches. Sniffing and hashing
/// are separate open/read/close cycles; no handle is held across the
/// two. A hash-side read failure drops the file's matches entirely
/// rather than emitting partial records.
fn process_file(path: &Path, table: &SignatureTable) -> io::Result<Vec<ExportRecord>> {
    let prefix = sniff_prefix(path)?;
    let matched: Vec<&SignatureEntry> = table.matches(&prefix).collect();
    if matched.is_empty() {
        return Ok(Vec::new());
    }

    let hash = compute_file_hash(path)?;
    Ok(matched
        .into_iter()
        .map(|entry| ExportRecord {
            path: path.to_path_buf(),
            file_type: entry.label.clone(),
            hash: hash.clone(),
        })
        .collect())
}
