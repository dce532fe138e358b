//! core/file.rs
//!
//! `FileRecord`: one opened audio file plus the tag block we read from.
//!
//! Opening walks a small state machine:
//!
//! ```text
//! UNOPENED -> OPENING -> OPENED_MULTITAG | OPENED_SINGLETAG
//!                    \-> FAILED
//! ```
//!
//! - the file type comes from the extension
//! - the container must probe as valid and expose a tag block
//! - multitag containers pick their read block right away, once
//!
//! The record owns its handle. Any early `?` return drops whatever was built
//! so far, so a failed open never leaks the file.

use std::path::Path;

use tracing::debug;

use super::audio::AudioProperties;
use super::error::{Result, TagError};
use super::filetype::{self, FileType};
use super::handle::FileHandle;
use super::policy::{self, TagFormatPolicy, TagImpl};
use super::probe;
use super::tags::PropertyMap;

#[derive(Debug)]
pub struct FileRecord {
    name: String,
    file_type: FileType,
    handle: FileHandle,
    multitag: bool,
    selected: TagImpl,
    write_impl: TagImpl,
}

impl FileRecord {
    /// Open with the built-in tag format policy.
    pub fn open(name: impl Into<String>) -> Result<Self> {
        Self::open_with(name, TagFormatPolicy::builtin())
    }

    /// Open, resolving read precedence and write target through `policy`.
    pub fn open_with(name: impl Into<String>, policy: &TagFormatPolicy) -> Result<Self> {
        let name = name.into();

        let file_type = filetype::type_from_extension(&name)
            .ok_or_else(|| TagError::UnsupportedFileType(name.clone()))?;
        debug!(file = %name, %file_type, "opening");

        let handle = FileHandle::open(Path::new(&name), file_type).map_err(|reason| {
            TagError::CorruptOrUnreadableFile {
                path: name.clone(),
                reason,
            }
        })?;

        if !handle.has_tag_block() {
            return Err(TagError::NoTagsPresent(name));
        }

        let (multitag, selected) = if policy::is_multitag_capable(file_type) {
            (true, probe::select_preferred_impl(&handle, file_type, policy))
        } else {
            (false, TagImpl::None)
        };
        debug!(file = %name, multitag, selected = %selected, "opened");

        Ok(FileRecord {
            name,
            file_type,
            handle,
            multitag,
            selected,
            write_impl: policy.write_impl(file_type),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_multitag(&self) -> bool {
        self.multitag
    }

    /// The block reads go to. `TagImpl::None` for single-tag containers,
    /// or for multitag files that carry none of their blocks.
    pub fn selected_impl(&self) -> TagImpl {
        self.selected
    }

    /// Where new tags would be written for this file.
    pub fn write_impl(&self) -> TagImpl {
        self.write_impl
    }

    pub fn audio_properties(&self) -> &AudioProperties {
        self.handle.audio_properties()
    }

    /// Blocks present in the file, in declared order.
    pub fn present_impls(&self) -> Vec<TagImpl> {
        probe::enumerate_present_impls(&self.handle, self.file_type)
    }

    /// "id3v2,apetag" style list, or "none".
    pub fn tags_present_summary(&self) -> String {
        let present = self.present_impls();
        if present.is_empty() {
            return TagImpl::None.name().to_string();
        }
        present
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Tag properties from the selected block.
    ///
    /// - multitag + concrete selection: that block's map
    /// - single-tag container: the container's unified map
    /// - multitag with nothing selected: `NoTagsPresent`
    pub fn read_tag_properties(&self) -> Result<PropertyMap> {
        if !self.multitag {
            return Ok(self.handle.properties());
        }
        self.handle
            .impl_properties(self.selected)
            .cloned()
            .ok_or_else(|| TagError::NoTagsPresent(self.name.clone()))
    }
}
