//! sonotag
//!
//! Tag-format resolution for audio files that may carry several tag blocks
//! at once (an MP3 with ID3v2 + APE + ID3v1, say), plus a typed value model
//! and a strict parser for `key=value` tag assignments.
//!
//! Everything lives in [`core`]; the most used items are re-exported here.

pub mod core;

pub use crate::core::assign::{TagDefinition, parse_assignment, parse_assignments};
pub use crate::core::error::{Result, TagError, ValueIssue};
pub use crate::core::file::FileRecord;
pub use crate::core::filetype::FileType;
pub use crate::core::policy::{TagFormatPolicy, TagImpl};
pub use crate::core::schema::{TagId, TagType};
pub use crate::core::tags::PropertyMap;
pub use crate::core::value::TypedValue;
