//! WAV decoding into the canonical mono 16-bit sample representation.

use crate::error::{Error, Result};
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// Sample cap per pad, ~2 seconds at 48 kHz. Longer files are truncated.
pub const MAX_SAMPLES: usize = 96_000;

/// Decoded audio for one source file: mono 16-bit samples at the source rate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedAudio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Payload size in bytes once serialized as i16 little-endian.
    pub fn byte_len(&self) -> usize {
        self.samples.len() * 2
    }
}

/// Decode a WAV file to mono 16-bit samples at its original sample rate.
///
/// Accepts 8, 16, and 24-bit integer PCM with any channel count >= 1.
/// Channels are downmixed per frame by integer average; the result is
/// clamped to the i16 range and truncated to [`MAX_SAMPLES`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for float PCM or any other bit
/// depth, [`Error::InvalidChannels`] for a zero channel count, and wrapped
/// IO/WAV errors if the file cannot be read.
pub fn read_wav_mono16(path: impl AsRef<Path>) -> Result<DecodedAudio> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels == 0 {
        return Err(Error::InvalidChannels(0));
    }
    let channels = spec.channels as usize;

    // Per-channel values widened to i32, pre-shifted so every branch feeds
    // the same downmix. 8-bit stays in the i8 domain here: hound presents
    // WAV's unsigned bytes as `value - 128`, and averaging before the
    // (value - 128) * 256 mapping equals averaging after it.
    let interleaved: Vec<i32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 8) => reader
            .samples::<i8>()
            .map(|s| s.map(i32::from))
            .collect::<hound::Result<_>>()?,
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(i32::from))
            .collect::<hound::Result<_>>()?,
        (SampleFormat::Int, 24) => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v >> 8)) // keep the top 16 of 24 bits
            .collect::<hound::Result<_>>()?,
        (format, bits) => return Err(Error::UnsupportedFormat { format, bits }),
    };

    // 8-bit values are scaled to the 16-bit range after mixing.
    let scale: i64 = if spec.bits_per_sample == 8 { 256 } else { 1 };

    let samples = downmix(&interleaved, channels)
        .map(|avg| (avg * scale).clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16)
        .take(MAX_SAMPLES)
        .collect();

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Average each frame of interleaved channel values into one value.
///
/// Uses floor division (`div_euclid`), so negative odd sums round toward
/// negative infinity. A trailing partial frame is dropped.
fn downmix(interleaved: &[i32], channels: usize) -> impl Iterator<Item = i64> + '_ {
    interleaved.chunks_exact(channels).map(move |frame| {
        let sum: i64 = frame.iter().copied().map(i64::from).sum();
        sum.div_euclid(channels as i64)
    })
}
