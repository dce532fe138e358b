//! core/tags/flac.rs
//! Is there a VORBIS_COMMENT block in this FLAC stream? (via `lofty`)
//!
//! Symphonia hands back a metadata revision for every FLAC stream, even one
//! without a comment block, so presence is decided by walking the metadata
//! blocks instead.
//!
//! - native FLAC: lofty reads the block list (tags only, no properties)
//! - Ogg FLAC: the mapping makes the comment packet mandatory

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::flac::FlacFile;
use tracing::warn;

const OGG_MAGIC: &[u8; 4] = b"OggS";

/// `None` when the stream can't be walked; callers fall back to whatever
/// the container probe reported.
pub fn flac_has_comment_block(path: &Path) -> Option<bool> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %path.display(), "FLAC open failed: {e}");
            return None;
        }
    };

    let mut magic = [0u8; 4];
    if file.read_exact(&mut magic).is_ok() && &magic == OGG_MAGIC {
        return Some(true);
    }
    if let Err(e) = file.rewind() {
        warn!(path = %path.display(), "FLAC rewind failed: {e}");
        return None;
    }

    let options = ParseOptions::new().read_properties(false);
    match FlacFile::read_from(&mut file, options) {
        Ok(flac) => Some(flac.vorbis_comments().is_some()),
        Err(e) => {
            warn!(path = %path.display(), "FLAC block walk failed: {e}");
            None
        }
    }
}
