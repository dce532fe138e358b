//! core/record.rs
//!
//! Machine-readable record protocol.
//!
//! One record per file:
//!
//! ```text
//! filename STX <name> { ETX <key> STX <value> } EOT
//! ```
//!
//! (STX = 0x02, ETX = 0x03, EOT = 0x04.) EOT closes each record, so a batch
//! can be split back into files. Fields come in three groups, each sorted by key:
//! - file facts: `filetype`, `multitag`, `tagtypes`, `tagimpl`
//! - tag values, named like the tag schema (`artist`, `year`, ...)
//! - audio properties: `bitspersample`, `channels`, `length`, `samplerate`

use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use super::file::FileRecord;
use super::schema::{self, TagType};
use super::tags::{PropertyMap, leading_int};
use super::value::TypedValue;

pub const STX: char = '\u{02}';
pub const ETX: char = '\u{03}';
pub const EOT: char = '\u{04}';

pub type Fields = BTreeMap<String, TypedValue>;

/// Facts about the file itself.
pub fn file_fields(record: &FileRecord) -> Fields {
    let mut fields = Fields::new();
    fields.insert("filetype".into(), record.file_type().to_string().into());
    fields.insert("multitag".into(), record.is_multitag().into());
    if record.is_multitag() {
        fields.insert("tagtypes".into(), record.tags_present_summary().into());
        fields.insert("tagimpl".into(), record.selected_impl().name().into());
    }
    fields
}

/// Schema-named tag values from a property map.
///
/// - first value wins when a property repeats
/// - integer tags take the leading number ("3/12" -> 3, "1997-06-16" -> 1997)
/// - values that don't convert are left out
pub fn tag_fields(props: &PropertyMap) -> Fields {
    let mut fields = Fields::new();

    for (name, entry) in schema::entries() {
        let Some(raw) = props.get(entry.property).and_then(|v| v.first()) else {
            continue;
        };
        let value = match entry.tag_type {
            TagType::String => TypedValue::String(raw.clone()),
            TagType::Integer => match leading_int(raw) {
                Some(n) => TypedValue::Integer(n),
                None => continue,
            },
            TagType::Invalid => continue,
        };
        fields.insert(name.to_string(), value);
    }

    fields
}

pub fn audio_fields(record: &FileRecord) -> Fields {
    let audio = record.audio_properties();
    let mut fields = Fields::new();

    let ints = [
        ("bitspersample", audio.bits_per_sample.map(i64::from)),
        ("channels", audio.channels.map(i64::from)),
        ("length", audio.length_secs().and_then(|s| i64::try_from(s).ok())),
        ("samplerate", audio.sample_rate.map(i64::from)),
    ];
    for (key, value) in ints {
        if let Some(n) = value {
            fields.insert(key.to_string(), TypedValue::Integer(n));
        }
    }

    fields
}

/// Write one `ETX key STX value` field.
pub fn write_field<W: Write>(out: &mut W, key: &str, value: &TypedValue) -> io::Result<()> {
    write!(out, "{ETX}{key}{STX}{value}")
}

/// Write the full record for `record`.
///
/// A multitag file with no selected block still gets a record, just
/// without tag values.
pub fn write_record<W: Write>(out: &mut W, record: &FileRecord) -> io::Result<()> {
    write!(out, "filename{STX}{}", record.name())?;

    let tags = match record.read_tag_properties() {
        Ok(props) => tag_fields(&props),
        Err(e) => {
            debug!(file = record.name(), "no tag values in record: {e}");
            Fields::new()
        }
    };

    for fields in [file_fields(record), tags, audio_fields(record)] {
        for (key, value) in &fields {
            if value.is_valid() {
                write_field(out, key, value)?;
            }
        }
    }

    write!(out, "{EOT}")
}
