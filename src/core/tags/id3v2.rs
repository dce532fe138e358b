//! core/tags/id3v2.rs
//! Read an ID3v2 block (via the `id3` crate) into a `PropertyMap`.
//!
//! - Text frames map to generic keys (TIT2 -> TITLE, TPE1 -> ARTIST, ...)
//! - Text frames we don't have a name for keep their frame id as key
//! - TXXX uses its description, COMM/USLT become COMMENT/LYRICS
//! - Binary frames (APIC, POPM, PCNT, ...) are not part of the property view

use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag};
use tracing::warn;

use super::PropertyMap;
use super::util::{push_prop, push_split};

/// `None` means "no ID3v2 block in this file".
pub fn read_id3v2(path: &Path) -> Option<PropertyMap> {
    match Tag::read_from_path(path) {
        Ok(tag) => Some(properties_from_tag(&tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => None,
        Err(e) => {
            // A broken block still counts as "present" if the crate salvaged frames.
            warn!(path = %path.display(), "ID3v2 read failed: {e}");
            e.partial_tag.as_ref().map(properties_from_tag)
        }
    }
}

fn properties_from_tag(tag: &Tag) -> PropertyMap {
    let mut map = PropertyMap::new();

    for frame in tag.frames() {
        let id = frame.id();
        match frame.content() {
            Content::Text(s) => {
                let key = text_frame_key(id).unwrap_or(id);
                push_split(&mut map, key, s);
            }
            Content::ExtendedText(et) => {
                push_split(&mut map, &et.description.to_uppercase(), &et.value);
            }
            Content::Comment(c) => {
                push_prop(&mut map, &described("COMMENT", &c.description), &c.text);
            }
            Content::Lyrics(l) => {
                push_prop(&mut map, &described("LYRICS", &l.description), &l.text);
            }
            Content::Link(url) => {
                push_prop(&mut map, link_frame_key(id).unwrap_or(id), url);
            }
            Content::ExtendedLink(el) => {
                push_prop(&mut map, &described("URL", &el.description), &el.link);
            }
            _ => {}
        }
    }

    map
}

/// "COMMENT" or "COMMENT:DESCRIPTION".
fn described(base: &str, description: &str) -> String {
    if description.is_empty() {
        base.to_string()
    } else {
        format!("{base}:{}", description.to_uppercase())
    }
}

fn text_frame_key(id: &str) -> Option<&'static str> {
    let key = match id {
        "TIT2" | "TT2" => "TITLE",
        "TPE1" | "TP1" => "ARTIST",
        "TALB" | "TAL" => "ALBUM",
        "TPE2" | "TP2" => "ALBUMARTIST",
        "TCOM" | "TCM" => "COMPOSER",
        "TCON" | "TCO" => "GENRE",
        "TRCK" | "TRK" => "TRACKNUMBER",
        "TPOS" | "TPA" => "DISCNUMBER",
        "TDRC" | "TYER" | "TYE" => "DATE",
        "TDOR" | "TORY" => "ORIGINALDATE",
        "TCMP" => "COMPILATION",
        "TIT1" | "TT1" => "CONTENTGROUP",
        "TIT3" | "TT3" => "SUBTITLE",
        "TEXT" | "TXT" => "LYRICIST",
        "TPE3" | "TP3" => "CONDUCTOR",
        "TPE4" | "TP4" => "REMIXER",
        "TPUB" | "TPB" => "LABEL",
        "TBPM" | "TBP" => "BPM",
        "TKEY" | "TKE" => "INITIALKEY",
        "TMOO" => "MOOD",
        "TLAN" | "TLA" => "LANGUAGE",
        "TSRC" | "TRC" => "ISRC",
        "TSSE" | "TSS" => "ENCODING",
        "TENC" | "TEN" => "ENCODEDBY",
        "TCOP" | "TCR" => "COPYRIGHT",
        "TLEN" | "TLE" => "LENGTH",
        "TSOT" => "TITLESORT",
        "TSOP" => "ARTISTSORT",
        "TSOA" => "ALBUMSORT",
        "TSO2" => "ALBUMARTISTSORT",
        "TSOC" => "COMPOSERSORT",
        _ => return None,
    };
    Some(key)
}

fn link_frame_key(id: &str) -> Option<&'static str> {
    let key = match id {
        "WOAR" => "ARTISTWEBPAGE",
        "WOAF" => "FILEWEBPAGE",
        "WOAS" => "AUDIOSOURCEWEBPAGE",
        "WCOP" => "COPYRIGHTURL",
        "WPUB" => "PUBLISHERWEBPAGE",
        "WORS" => "RADIOSTATIONWEBPAGE",
        "WPAY" => "PAYMENTWEBPAGE",
        _ => return None,
    };
    Some(key)
}
