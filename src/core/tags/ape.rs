//! core/tags/ape.rs
//! Read an APEv2 block out of an MP3 (via `lofty`).
//!
//! Neither `id3` nor `symphonia` look at APE, so we let lofty parse the
//! MPEG file (tags only, no stream properties) and keep its APE block.

use std::fs::File;
use std::path::Path;

use lofty::ape::ApeTag;
use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::mpeg::MpegFile;
use lofty::tag::ItemValue;
use tracing::warn;

use super::PropertyMap;
use super::util::push_split;

pub fn read_ape(path: &Path) -> Option<PropertyMap> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %path.display(), "APE open failed: {e}");
            return None;
        }
    };

    let options = ParseOptions::new().read_properties(false);
    match MpegFile::read_from(&mut file, options) {
        Ok(mpeg) => mpeg.ape().map(properties_from_tag),
        Err(e) => {
            warn!(path = %path.display(), "APE read failed: {e}");
            None
        }
    }
}

fn properties_from_tag(tag: &ApeTag) -> PropertyMap {
    let mut map = PropertyMap::new();

    for item in tag {
        // Binary items (cover art etc) have no text form.
        let ItemValue::Text(text) = item.value() else {
            continue;
        };
        push_split(&mut map, &item_key(item.key()), text.as_str());
    }

    map
}

/// APE keys are free-form and case-insensitive; a few differ from the
/// generic names everyone else uses.
fn item_key(key: &str) -> String {
    let key = key.to_uppercase();
    match key.as_str() {
        "YEAR" => "DATE".to_string(),
        "TRACK" => "TRACKNUMBER".to_string(),
        "DISC" => "DISCNUMBER".to_string(),
        "ALBUM ARTIST" => "ALBUMARTIST".to_string(),
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ape_keys_are_normalized() {
        assert_eq!(item_key("Artist"), "ARTIST");
        assert_eq!(item_key("Year"), "DATE");
        assert_eq!(item_key("Track"), "TRACKNUMBER");
        assert_eq!(item_key("Album Artist"), "ALBUMARTIST");
    }
}
