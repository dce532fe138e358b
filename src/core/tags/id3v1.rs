//! core/tags/id3v1.rs
//! Read the 128-byte ID3v1 trailer (via `id3::v1`).

use std::fs::File;
use std::path::Path;

use id3::ErrorKind;
use id3::v1::Tag;
use tracing::warn;

use super::PropertyMap;
use super::util::push_prop;

pub fn read_id3v1(path: &Path) -> Option<PropertyMap> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %path.display(), "ID3v1 open failed: {e}");
            return None;
        }
    };

    match Tag::read_from(file) {
        Ok(tag) => Some(properties_from_tag(&tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => None,
        Err(e) => {
            warn!(path = %path.display(), "ID3v1 read failed: {e}");
            None
        }
    }
}

fn properties_from_tag(tag: &Tag) -> PropertyMap {
    let mut map = PropertyMap::new();

    push_prop(&mut map, "TITLE", field(&tag.title));
    push_prop(&mut map, "ARTIST", field(&tag.artist));
    push_prop(&mut map, "ALBUM", field(&tag.album));
    push_prop(&mut map, "DATE", field(&tag.year));
    push_prop(&mut map, "COMMENT", field(&tag.comment));
    if let Some(track) = tag.track.filter(|t| *t > 0) {
        push_prop(&mut map, "TRACKNUMBER", &track.to_string());
    }
    if let Some(genre) = tag.genre() {
        push_prop(&mut map, "GENRE", genre);
    }

    map
}

/// Fixed-width fields are padded with NULs or spaces.
fn field(s: &str) -> &str {
    s.trim_end_matches(['\0', ' '])
}
