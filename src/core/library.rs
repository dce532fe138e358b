use std::path::{Path, PathBuf};

use super::error::TagError;
use super::filetype;

/// Every file under `root` whose extension the registry knows.
///
/// A directory that can't be read is reported and skipped; its siblings are
/// still walked.
pub fn scan_audio_files(root: &Path) -> (Vec<PathBuf>, Vec<TagError>) {
    let mut out = Vec::new();
    let mut errors = Vec::new();
    walk_dir(root, &mut out, &mut errors);
    (out, errors)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>, errors: &mut Vec<TagError>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            errors.push(scan_failed(dir, source));
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(source) => {
                errors.push(scan_failed(dir, source));
                continue;
            }
        };

        if path.is_dir() {
            walk_dir(&path, out, errors);
        } else if is_audio(&path) {
            out.push(path);
        }
    }
}

fn scan_failed(dir: &Path, source: std::io::Error) -> TagError {
    TagError::ScanFailed {
        path: dir.display().to_string(),
        source,
    }
}

fn is_audio(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .and_then(filetype::type_from_extension)
        .is_some()
}
