//! core/tags/mod.rs
//!
//! Tag block readers.
//! Every reader turns one block into the same `PropertyMap` shape:
//! - keys are upper-case generic names (`ARTIST`, `TITLE`, `DATE`, ...)
//! - values are lists (a field may repeat)
//!
//! Public API:
//! - [`read_id3v2`] / [`read_id3v1`] (the `id3` crate)
//! - [`read_ape`] (APE blocks in MP3, via `lofty`)
//! - [`flac_has_comment_block`] (FLAC block walk, via `lofty`)
//! - [`comments_to_properties`] (Vorbis comments surfaced by `symphonia`)

mod ape;
mod flac;
mod id3v1;
mod id3v2;
mod util;
mod vorbis;

use std::collections::BTreeMap;

pub use ape::read_ape;
pub use flac::flac_has_comment_block;
pub use id3v1::read_id3v1;
pub use id3v2::read_id3v2;
pub(crate) use util::leading_int;
pub use vorbis::comments_to_properties;

/// Generic view of one tag block.
pub type PropertyMap = BTreeMap<String, Vec<String>>;
