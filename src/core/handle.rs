//! core/handle.rs
//!
//! The opened-file handle: one enum arm per container type.
//!
//! Each arm offers the same capabilities:
//! - validate (done while constructing: a handle only exists if it's valid)
//! - report / read its tag blocks
//! - report audio properties
//!
//! A new container type means a new arm here, nothing else.

use std::path::Path;

use symphonia::core::codecs::{
    CODEC_TYPE_FLAC, CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3, CODEC_TYPE_VORBIS,
    CodecType,
};
use tracing::debug;

use super::audio::{self, AudioProperties};
use super::filetype::FileType;
use super::policy::TagImpl;
use super::probe::TagPresence;
use super::tags::{self, PropertyMap};

/// MP3: any mix of ID3v2 (front), APE and ID3v1 (back).
#[derive(Debug)]
pub struct MpegHandle {
    id3v2: Option<PropertyMap>,
    ape: Option<PropertyMap>,
    id3v1: Option<PropertyMap>,
    audio: AudioProperties,
}

/// FLAC or Ogg: one Vorbis comment block, if any.
#[derive(Debug)]
pub struct StreamHandle {
    comments: Option<PropertyMap>,
    audio: AudioProperties,
}

#[derive(Debug)]
pub enum FileHandle {
    Mp3(MpegHandle),
    OggFlac(StreamHandle),
    OggVorbis(StreamHandle),
}

impl FileHandle {
    /// Build a handle for `path`, treating it as `file_type`.
    ///
    /// `Err` carries the reason the container failed validation. The stream
    /// must probe, and its codec must be the one `file_type` implies
    /// (FLAC bytes named `.mp3` are rejected, not read as an untagged MP3).
    pub fn open(path: &Path, file_type: FileType) -> Result<Self, String> {
        let probed = audio::probe_stream(path)?;
        if !codec_matches(file_type, probed.codec) {
            return Err(format!(
                "content is not {file_type} (codec {})",
                codec_name(probed.codec)
            ));
        }
        debug!(path = %path.display(), ?file_type, "container probe ok");

        let handle = match file_type {
            FileType::Mp3 => FileHandle::Mp3(MpegHandle {
                id3v2: tags::read_id3v2(path),
                ape: tags::read_ape(path),
                id3v1: tags::read_id3v1(path),
                audio: probed.audio,
            }),
            FileType::OggFlac => {
                let comments = match tags::flac_has_comment_block(path) {
                    Some(true) => Some(probed.comments.unwrap_or_default()),
                    Some(false) => None,
                    None => probed.comments.filter(|c| !c.is_empty()),
                };
                FileHandle::OggFlac(StreamHandle {
                    comments,
                    audio: probed.audio,
                })
            }
            // The comment header is one of the three mandatory Vorbis headers.
            FileType::OggVorbis => FileHandle::OggVorbis(StreamHandle {
                comments: Some(probed.comments.unwrap_or_default()),
                audio: probed.audio,
            }),
        };

        Ok(handle)
    }

    /// Does the file expose any tag container at all?
    ///
    /// MP3 always does (an empty union of its blocks is still a tag);
    /// FLAC/Ogg need a comment block.
    pub fn has_tag_block(&self) -> bool {
        match self {
            FileHandle::Mp3(_) => true,
            FileHandle::OggFlac(h) | FileHandle::OggVorbis(h) => h.comments.is_some(),
        }
    }

    /// Property map of one specific block, if present.
    pub fn impl_properties(&self, tag_impl: TagImpl) -> Option<&PropertyMap> {
        match self {
            FileHandle::Mp3(h) => match tag_impl {
                TagImpl::Id3v2 => h.id3v2.as_ref(),
                TagImpl::Ape => h.ape.as_ref(),
                TagImpl::Id3v1 => h.id3v1.as_ref(),
                TagImpl::None => None,
            },
            FileHandle::OggFlac(_) | FileHandle::OggVorbis(_) => None,
        }
    }

    /// The container's aggregate view.
    ///
    /// For MP3 that is the first block present in ID3v2, APE, ID3v1 order;
    /// for FLAC/Ogg it is the comment block.
    pub fn properties(&self) -> PropertyMap {
        match self {
            FileHandle::Mp3(h) => h
                .id3v2
                .as_ref()
                .or(h.ape.as_ref())
                .or(h.id3v1.as_ref())
                .cloned()
                .unwrap_or_default(),
            FileHandle::OggFlac(h) | FileHandle::OggVorbis(h) => {
                h.comments.clone().unwrap_or_default()
            }
        }
    }

    pub fn audio_properties(&self) -> &AudioProperties {
        match self {
            FileHandle::Mp3(h) => &h.audio,
            FileHandle::OggFlac(h) | FileHandle::OggVorbis(h) => &h.audio,
        }
    }
}

fn codec_matches(file_type: FileType, codec: CodecType) -> bool {
    match file_type {
        FileType::Mp3 => [CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3].contains(&codec),
        FileType::OggFlac => codec == CODEC_TYPE_FLAC,
        FileType::OggVorbis => codec == CODEC_TYPE_VORBIS,
    }
}

fn codec_name(codec: CodecType) -> String {
    symphonia::default::get_codecs()
        .get_codec(codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| codec.to_string())
}

impl TagPresence for FileHandle {
    fn has_impl(&self, tag_impl: TagImpl) -> bool {
        self.impl_properties(tag_impl).is_some()
    }
}
