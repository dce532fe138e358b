//! core/policy.rs
//!
//! Tag format policy: which tag blocks a container may carry, in which
//! order we read them, and which one we write by default.
//!
//! The built-in table is the source of truth:
//! - a type listed here is "multitag-capable"
//! - read order == declared order (MP3: ID3v2, then APE, then ID3v1)
//! - write default == first declared entry
//!
//! A `TagFormatPolicy` value layers user overrides on top of that table
//! (e.g. "read APE before ID3v2 for MP3"), but can never add an impl the
//! container doesn't support.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::error::{Result, TagError};
use super::filetype::FileType;

/// Tag block formats ("tag implementations").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagImpl {
    Id3v2,
    Ape,
    Id3v1,
    /// No specific block: either nothing is present, or the container has a
    /// single implicit tag representation.
    None,
}

impl TagImpl {
    /// Stable external name (`apetag`, `id3v1`, `id3v2`, `none`).
    pub fn name(self) -> &'static str {
        match self {
            TagImpl::Ape => "apetag",
            TagImpl::Id3v1 => "id3v1",
            TagImpl::Id3v2 => "id3v2",
            TagImpl::None => "none",
        }
    }

    pub fn is_none(self) -> bool {
        self == TagImpl::None
    }
}

impl fmt::Display for TagImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagImpl {
    type Err = TagError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "apetag" => Ok(TagImpl::Ape),
            "id3v1" => Ok(TagImpl::Id3v1),
            "id3v2" => Ok(TagImpl::Id3v2),
            "none" => Ok(TagImpl::None),
            _ => Err(TagError::UnknownTagImplName(s.to_string())),
        }
    }
}

static MULTITAG: Lazy<BTreeMap<FileType, Vec<TagImpl>>> = Lazy::new(|| {
    BTreeMap::from([(
        FileType::Mp3,
        vec![TagImpl::Id3v2, TagImpl::Ape, TagImpl::Id3v1],
    )])
});

/// Declared tag blocks for `file_type`, in precedence order.
/// Empty for single-tag containers.
pub fn supported_impls(file_type: FileType) -> &'static [TagImpl] {
    MULTITAG
        .get(&file_type)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn is_multitag_capable(file_type: FileType) -> bool {
    MULTITAG.contains_key(&file_type)
}

/// First declared impl, or `TagImpl::None` for single-tag containers.
pub fn default_write_impl(file_type: FileType) -> TagImpl {
    supported_impls(file_type)
        .first()
        .copied()
        .unwrap_or(TagImpl::None)
}

pub fn is_impl_allowed(file_type: FileType, tag_impl: TagImpl) -> bool {
    supported_impls(file_type).contains(&tag_impl)
}

/// Built-in table plus per-type overrides for reading and writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFormatPolicy {
    read: BTreeMap<FileType, Vec<TagImpl>>,
    write: BTreeMap<FileType, TagImpl>,
}

impl TagFormatPolicy {
    /// The policy with no overrides.
    pub fn builtin() -> &'static TagFormatPolicy {
        static BUILTIN: Lazy<TagFormatPolicy> = Lazy::new(TagFormatPolicy::default);
        &BUILTIN
    }

    /// Replace the read order for `file_type`.
    ///
    /// The new order must be non-empty, free of duplicates, and only name
    /// impls the container supports. It may be a subset (skip a block).
    pub fn set_read_order(&mut self, file_type: FileType, order: Vec<TagImpl>) -> Result<()> {
        if order.is_empty() {
            return Err(not_allowed(file_type, TagImpl::None));
        }
        for (i, tag_impl) in order.iter().enumerate() {
            if !is_impl_allowed(file_type, *tag_impl) || order[..i].contains(tag_impl) {
                return Err(not_allowed(file_type, *tag_impl));
            }
        }
        self.read.insert(file_type, order);
        Ok(())
    }

    /// Pick the impl new tags get written to for `file_type`.
    pub fn set_write_impl(&mut self, file_type: FileType, tag_impl: TagImpl) -> Result<()> {
        if !is_impl_allowed(file_type, tag_impl) {
            return Err(not_allowed(file_type, tag_impl));
        }
        self.write.insert(file_type, tag_impl);
        Ok(())
    }

    /// Effective read precedence.
    pub fn read_order(&self, file_type: FileType) -> &[TagImpl] {
        match self.read.get(&file_type) {
            Some(order) => order,
            None => supported_impls(file_type),
        }
    }

    /// Effective write target.
    pub fn write_impl(&self, file_type: FileType) -> TagImpl {
        self.write
            .get(&file_type)
            .copied()
            .unwrap_or_else(|| default_write_impl(file_type))
    }
}

/// A `TYPE=IMPL[,IMPL...]` selector, as given on the command line
/// (e.g. `mp3=apetag,id3v2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySelector {
    pub file_type: FileType,
    pub impls: Vec<TagImpl>,
}

impl FromStr for PolicySelector {
    type Err = TagError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (file_type, impls) = s
            .split_once('=')
            .ok_or_else(|| TagError::MalformedPolicySelector(s.to_string()))?;
        let file_type = file_type.parse::<FileType>()?;
        let impls = impls
            .split(',')
            .map(str::parse)
            .collect::<std::result::Result<Vec<TagImpl>, _>>()?;
        Ok(PolicySelector { file_type, impls })
    }
}

impl TagFormatPolicy {
    /// Apply a selector as a read-order override.
    pub fn apply_read(&mut self, selector: &PolicySelector) -> Result<()> {
        self.set_read_order(selector.file_type, selector.impls.clone())
    }

    /// Apply a selector as the write target. Exactly one impl is expected.
    pub fn apply_write(&mut self, selector: &PolicySelector) -> Result<()> {
        match selector.impls.as_slice() {
            [tag_impl] => self.set_write_impl(selector.file_type, *tag_impl),
            [_, extra, ..] => Err(not_allowed(selector.file_type, *extra)),
            [] => Err(not_allowed(selector.file_type, TagImpl::None)),
        }
    }
}

fn not_allowed(file_type: FileType, tag_impl: TagImpl) -> TagError {
    TagError::ImplNotAllowed {
        file_type: file_type.to_string(),
        tag_impl: tag_impl.to_string(),
    }
}
