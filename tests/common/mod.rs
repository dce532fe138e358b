//! Fixture builders:
//! - MP3 files with any mix of tag blocks
//! - native FLAC streams, with or without a Vorbis comment block

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use id3::{TagLike, Version};

/// MPEG-1 Layer III, 128 kbit/s, 44.1 kHz, joint stereo: 417-byte frames.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const FRAME_LEN: usize = 417;

#[derive(Default)]
pub struct Mp3Builder {
    id3v2: Option<Vec<u8>>,
    ape: Option<Vec<u8>>,
    id3v1: Option<Vec<u8>>,
}

impl Mp3Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id3v2(mut self, artist: &str, title: &str) -> Self {
        let mut tag = id3::Tag::new();
        tag.set_artist(artist);
        tag.set_title(title);
        tag.set_text("TRCK", "3/12");
        let mut buf = Vec::new();
        tag.write_to(&mut buf, Version::Id3v24)
            .expect("id3v2 tag serializes");
        self.id3v2 = Some(buf);
        self
    }

    pub fn ape(mut self, items: &[(&str, &str)]) -> Self {
        self.ape = Some(ape_block(items));
        self
    }

    pub fn id3v1(mut self, artist: &str, title: &str, year: &str) -> Self {
        self.id3v1 = Some(id3v1_block(artist, title, year));
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(b) = &self.id3v2 {
            out.extend_from_slice(b);
        }
        for _ in 0..16 {
            out.extend_from_slice(&FRAME_HEADER);
            out.resize(out.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
        }
        if let Some(b) = &self.ape {
            out.extend_from_slice(b);
        }
        if let Some(b) = &self.id3v1 {
            out.extend_from_slice(b);
        }
        out
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.bytes()).expect("fixture written");
        path
    }
}

/// APEv2 tag: items followed by a 32-byte footer (no header).
fn ape_block(items: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (key, value) in items {
        body.extend_from_slice(&(value.len() as u32).to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(key.as_bytes());
        body.push(0);
        body.extend_from_slice(value.as_bytes());
    }

    let size = (body.len() + 32) as u32;
    body.extend_from_slice(b"APETAGEX");
    body.extend_from_slice(&2000u32.to_le_bytes());
    body.extend_from_slice(&size.to_le_bytes());
    body.extend_from_slice(&(items.len() as u32).to_le_bytes());
    body.extend_from_slice(&0u32.to_le_bytes());
    body.extend_from_slice(&[0u8; 8]);
    body
}

/// ID3v1.1 trailer: "TAG" + fixed-width fields, 128 bytes.
fn id3v1_block(artist: &str, title: &str, year: &str) -> Vec<u8> {
    fn fixed(s: &str, len: usize) -> Vec<u8> {
        let mut v = s.as_bytes().to_vec();
        v.resize(len, 0);
        v
    }

    let mut out = b"TAG".to_vec();
    out.extend(fixed(title, 30));
    out.extend(fixed(artist, 30));
    out.extend(fixed("", 30)); // album
    out.extend(fixed(year, 4));
    out.extend(fixed("", 28)); // comment
    out.push(0);
    out.push(7); // track
    out.push(255); // no genre
    assert_eq!(out.len(), 128);
    out
}

/// Stereo, 16-bit, 44.1 kHz, two 4096-sample frames of silence.
const FLAC_BLOCK_SIZE: u64 = 4096;
const FLAC_FRAMES: u64 = 2;

#[derive(Default)]
pub struct FlacBuilder {
    comments: Option<Vec<String>>,
}

impl FlacBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a VORBIS_COMMENT block; `pairs` may be empty.
    pub fn comments(mut self, pairs: &[(&str, &str)]) -> Self {
        self.comments = Some(pairs.iter().map(|(k, v)| format!("{k}={v}")).collect());
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = b"fLaC".to_vec();

        let stream_info = stream_info();
        out.extend(block_header(0, self.comments.is_none(), stream_info.len()));
        out.extend(stream_info);

        if let Some(fields) = &self.comments {
            let body = vorbis_comment(fields);
            out.extend(block_header(4, true, body.len()));
            out.extend(body);
        }

        for n in 0..FLAC_FRAMES {
            out.extend(constant_frame(n as u8));
        }
        out
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.bytes()).expect("fixture written");
        path
    }
}

fn block_header(kind: u8, last: bool, len: usize) -> Vec<u8> {
    let len = len as u32;
    vec![
        if last { 0x80 | kind } else { kind },
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
    ]
}

fn stream_info() -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(FLAC_BLOCK_SIZE as u16).to_be_bytes()); // min block
    out.extend_from_slice(&(FLAC_BLOCK_SIZE as u16).to_be_bytes()); // max block
    out.extend_from_slice(&[0; 3]); // min frame size: unknown
    out.extend_from_slice(&[0; 3]); // max frame size: unknown
    let packed: u64 =
        (44_100u64 << 44) | (1 << 41) | (15 << 36) | (FLAC_BLOCK_SIZE * FLAC_FRAMES);
    out.extend_from_slice(&packed.to_be_bytes());
    out.extend_from_slice(&[0; 16]); // MD5: unset
    assert_eq!(out.len(), 34);
    out
}

fn vorbis_comment(fields: &[String]) -> Vec<u8> {
    let vendor = b"sonotag fixtures";
    let mut out = Vec::new();
    out.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    out.extend_from_slice(vendor);
    out.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    for field in fields {
        out.extend_from_slice(&(field.len() as u32).to_le_bytes());
        out.extend_from_slice(field.as_bytes());
    }
    out
}

/// One fixed-blocksize frame, both channels CONSTANT 0.
fn constant_frame(number: u8) -> Vec<u8> {
    assert!(number < 0x80, "single-byte frame number");
    let mut out = vec![
        0xFF, 0xF8, // sync, fixed blocksize
        0xC9, // 4096 samples, 44.1 kHz
        0x18, // left/right, 16 bits
        number,
    ];
    out.push(crc8(&out));
    for _ in 0..2 {
        out.extend_from_slice(&[0x00, 0x00, 0x00]); // CONSTANT subframe, value 0
    }
    let crc = crc16(&out);
    out.extend_from_slice(&crc.to_be_bytes());
    out
}

fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &b in data {
        crc ^= b;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 { (crc << 1) ^ 0x07 } else { crc << 1 };
        }
    }
    crc
}

fn crc16(data: &[u8]) -> u16 {
    let mut crc = 0u16;
    for &b in data {
        crc ^= u16::from(b) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 { (crc << 1) ^ 0x8005 } else { crc << 1 };
        }
    }
    crc
}
