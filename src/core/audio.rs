//! core/audio.rs
//! Container probe (Symphonia).
//!
//! This is the "is the file valid?" check for every container type.
//! While we have the stream open we also grab:
//! - basic audio properties (rate, channels, bit depth, duration)
//! - the Vorbis comment block, for FLAC/Ogg files

use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::CodecType;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use super::tags::{PropertyMap, comments_to_properties};

/// Stream properties. Anything the container doesn't declare stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioProperties {
    pub sample_rate: Option<u32>,
    pub channels: Option<u16>,
    pub bits_per_sample: Option<u32>,
    pub duration_ms: Option<u64>,
}

impl AudioProperties {
    /// Whole seconds, rounded down.
    pub fn length_secs(&self) -> Option<u64> {
        self.duration_ms.map(|ms| ms / 1000)
    }
}

/// What a successful probe hands back.
#[derive(Debug)]
pub(crate) struct ProbedStream {
    /// Codec of the default track; the container is judged by its content,
    /// not its extension.
    pub codec: CodecType,
    pub audio: AudioProperties,
    /// The latest metadata revision the format reader exposed, if any.
    pub comments: Option<PropertyMap>,
}

/// Open and probe `path`. Any failure here means "corrupt or unreadable".
pub(crate) fn probe_stream(path: &Path) -> Result<ProbedStream, String> {
    let file = File::open(path).map_err(|e| format!("open failed: {e}"))?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e: SymphoniaError| format!("format probe failed: {e}"))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| "no supported audio track found".to_string())?;

    let params = &track.codec_params;
    let audio = AudioProperties {
        sample_rate: params.sample_rate,
        channels: params.channels.map(|c| c.count() as u16),
        bits_per_sample: params.bits_per_sample,
        duration_ms: duration_from_params(params.time_base, params.n_frames),
    };
    let codec = params.codec;

    // Comments live in the format reader's log (Ogg, FLAC); some formats
    // report them during probing instead.
    let comments = format
        .metadata()
        .current()
        .map(|rev| comments_to_properties(rev.tags()))
        .or_else(|| {
            probed
                .metadata
                .get()
                .as_ref()
                .and_then(|m| m.current())
                .map(|rev| comments_to_properties(rev.tags()))
        });

    Ok(ProbedStream {
        codec,
        audio,
        comments,
    })
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_needs_both_inputs() {
        assert_eq!(duration_from_params(None, Some(44_100)), None);
        assert_eq!(duration_from_params(Some(TimeBase::new(1, 44_100)), None), None);
    }

    #[test]
    fn duration_in_milliseconds() {
        let tb = TimeBase::new(1, 44_100);
        assert_eq!(duration_from_params(Some(tb), Some(66_150)), Some(1_500));
    }

    #[test]
    fn length_rounds_down() {
        let props = AudioProperties {
            duration_ms: Some(61_999),
            ..Default::default()
        };
        assert_eq!(props.length_secs(), Some(61));
        assert_eq!(AudioProperties::default().length_secs(), None);
    }

    #[test]
    fn garbage_does_not_probe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.flac");
        std::fs::write(&path, b"definitely not a flac stream").unwrap();
        assert!(probe_stream(&path).is_err());
    }
}
