//! core/filetype.rs
//!
//! File type registry.
//!
//! Two fixed tables, built once on first use:
//! - extension -> `FileType` (several extensions may share a type)
//! - canonical name -> `FileType` (one name per type)
//!
//! There is no mutation API on purpose: these are process-wide constants.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::error::TagError;

/// Container types we know how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    Mp3,
    OggFlac,
    OggVorbis,
}

/// Returned by the reverse lookup for anything not in the name table.
pub const UNKNOWN_FILETYPE: &str = "unknown-filetype";

static EXTENSIONS: Lazy<BTreeMap<&'static str, FileType>> = Lazy::new(|| {
    BTreeMap::from([
        ("flac", FileType::OggFlac),
        ("flc", FileType::OggFlac),
        ("mp3", FileType::Mp3),
        ("ogg", FileType::OggVorbis),
        ("oga", FileType::OggVorbis),
    ])
});

static NAMES: Lazy<BTreeMap<&'static str, FileType>> = Lazy::new(|| {
    BTreeMap::from([
        ("ogg-flac", FileType::OggFlac),
        ("ogg-vorbis", FileType::OggVorbis),
        ("mp3", FileType::Mp3),
    ])
});

/// Guess the file type from whatever follows the last `.` in `filename`.
///
/// - Case-insensitive ("SONG.MP3" works)
/// - No dot at all -> `None`
/// - Unknown extension -> `None`
pub fn type_from_extension(filename: &str) -> Option<FileType> {
    let (_, ext) = filename.rsplit_once('.')?;
    EXTENSIONS.get(ext.to_lowercase().as_str()).copied()
}

/// Look up a canonical type name ("mp3", "ogg-flac", "ogg-vorbis").
pub fn type_from_name(name: &str) -> Option<FileType> {
    NAMES.get(name).copied()
}

/// Canonical name for a type. Diagnostics only, so it never fails.
pub fn name_from_type(file_type: FileType) -> &'static str {
    NAMES
        .iter()
        .find(|(_, t)| **t == file_type)
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_FILETYPE)
}

/// Every canonical name, sorted.
pub fn type_names() -> impl Iterator<Item = &'static str> {
    NAMES.keys().copied()
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name_from_type(*self))
    }
}

impl FromStr for FileType {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type_from_name(s).ok_or_else(|| TagError::UnknownFileTypeName(s.to_string()))
    }
}
