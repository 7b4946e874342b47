//! Error types for the packing pipeline.

use hound::SampleFormat;
use thiserror::Error;

/// Decode-stage error variants.
///
/// Pad assignment and blob building are total functions; decoding the source
/// WAV is the only stage that can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample encoding outside the supported 8/16/24-bit integer PCM set
    #[error("unsupported sample format: {bits}-bit {format:?}")]
    UnsupportedFormat { format: SampleFormat, bits: u16 },

    /// Channel count validation failed
    #[error("invalid channel count: {0}")]
    InvalidChannels(u16),

    /// IO error while reading the source file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV container error
    #[error(transparent)]
    Wav(#[from] hound::Error),
}

/// Result type alias for padpack-core operations.
pub type Result<T> = std::result::Result<T, Error>;
