//! core/tags/vorbis.rs
//! Vorbis comments (FLAC / Ogg) as surfaced by `symphonia`.
//!
//! Vorbis comment keys already are the generic names (ARTIST, TITLE, DATE...),
//! just not reliably upper-case.

use symphonia::core::meta::Tag;

use super::PropertyMap;
use super::util::push_prop;

pub fn comments_to_properties(tags: &[Tag]) -> PropertyMap {
    let mut map = PropertyMap::new();
    for tag in tags {
        push_prop(&mut map, &tag.key.to_uppercase(), &tag.value.to_string());
    }
    map
}
