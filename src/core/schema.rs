//! core/schema.rs
//!
//! Tag schema: the user-facing tag names we understand.
//!
//! Each name maps to:
//! - a `TagId` (what the field is)
//! - a `TagType` (what kind of value it holds)
//! - the generic property key it is read from (`ARTIST`, `DATE`, ...)
//!
//! Lookups never fail; misses come back as `TagId::Unknown` / `TagType::Invalid`
//! and the caller decides whether that is an error.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagId {
    Artist,
    Album,
    Comment,
    Compilation,
    Genre,
    TrackNumber,
    TrackTitle,
    Year,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    String,
    Integer,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub id: TagId,
    pub tag_type: TagType,
    /// Key in a `PropertyMap` this tag is read from.
    pub property: &'static str,
}

const fn entry(id: TagId, tag_type: TagType, property: &'static str) -> SchemaEntry {
    SchemaEntry {
        id,
        tag_type,
        property,
    }
}

static SCHEMA: Lazy<BTreeMap<&'static str, SchemaEntry>> = Lazy::new(|| {
    BTreeMap::from([
        ("artist", entry(TagId::Artist, TagType::String, "ARTIST")),
        ("album", entry(TagId::Album, TagType::String, "ALBUM")),
        ("comment", entry(TagId::Comment, TagType::String, "COMMENT")),
        ("compilation", entry(TagId::Compilation, TagType::String, "COMPILATION")),
        ("genre", entry(TagId::Genre, TagType::String, "GENRE")),
        ("tracknumber", entry(TagId::TrackNumber, TagType::Integer, "TRACKNUMBER")),
        ("tracktitle", entry(TagId::TrackTitle, TagType::String, "TITLE")),
        ("year", entry(TagId::Year, TagType::Integer, "DATE")),
    ])
});

pub fn lookup(name: &str) -> Option<&'static SchemaEntry> {
    SCHEMA.get(name)
}

pub fn name_to_id(name: &str) -> TagId {
    lookup(name).map(|e| e.id).unwrap_or(TagId::Unknown)
}

pub fn name_to_type(name: &str) -> TagType {
    lookup(name).map(|e| e.tag_type).unwrap_or(TagType::Invalid)
}

/// All schema names, sorted.
pub fn tag_names() -> impl Iterator<Item = &'static str> {
    SCHEMA.keys().copied()
}

/// `(name, entry)` pairs, sorted by name.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static SchemaEntry)> {
    SCHEMA.iter().map(|(name, e)| (*name, e))
}
