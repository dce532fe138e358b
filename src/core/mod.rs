//! core/mod.rs
//!
//! The brain of the tool:
//! - Know which containers we support, and which tag blocks each may carry
//! - Open a file, find the blocks that are really there, pick one to read
//! - Parse `key=value` tag assignments into typed values
//! - Emit plain data (property maps, typed fields) for the front-end
//!
//! The pipeline is explicit:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) open each path -> FileRecord (or a per-file TagError)
//!   (C) read/report from the record

pub mod assign;
pub mod audio;
pub mod error;
pub mod file;
pub mod filetype;
pub mod handle;
pub mod library;
pub mod policy;
pub mod probe;
pub mod record;
pub mod schema;
pub mod tags;
pub mod value;

use std::collections::HashSet;
use std::path::PathBuf;

use error::TagError;

/// Expand the given paths into audio files.
///
/// - Directories are walked recursively (supported extensions only)
/// - Plain paths pass through untouched, so `open` can report on them
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once (core owns ordering, front-ends shouldn't)
/// - Unreadable directories come back as errors next to the paths found
pub fn scan_paths(roots: &[PathBuf]) -> (Vec<PathBuf>, Vec<TagError>) {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out: Vec<PathBuf> = Vec::new();
    let mut errors: Vec<TagError> = Vec::new();

    for root in roots {
        let paths = if root.is_dir() {
            let (paths, walk_errors) = library::scan_audio_files(root);
            errors.extend(walk_errors);
            paths
        } else {
            vec![root.clone()]
        };
        for path in paths {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    out.sort();
    (out, errors)
}
