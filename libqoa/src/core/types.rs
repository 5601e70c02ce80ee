//! common types for the qoa codec

use thiserror::Error;

// errors

/// everything that can go wrong while encoding or decoding
///
/// All failures are final: malformed or truncated data cannot become valid
/// by retrying, and no partially decoded file is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QoaError {
    /// first four bytes are not "qoaf"
    #[error("not a qoa stream: bad magic")]
    BadMagic,

    /// total-samples field is zero, the marker for the streaming variant
    #[error("streaming qoa (zero total samples) is not supported")]
    StreamingUnsupported,

    /// ran out of bytes mid-header or mid-frame
    #[error("input truncated: {needed} bytes needed, {available} available")]
    Truncated { needed: usize, available: usize },

    /// a frame's channel count, sample rate, or sample span disagrees with
    /// the file-level values established by the first frame
    #[error("frame {frame}: header disagrees with the file header")]
    FrameHeaderMismatch { frame: usize },

    /// a frame's declared byte size does not match its own header fields
    #[error("frame {frame}: declared size {declared}, computed {expected}")]
    FrameSizeMismatch {
        frame: usize,
        declared: usize,
        expected: usize,
    },

    /// a slice was handed more samples than it can carry
    #[error("slice covers at most 20 samples, got {got}")]
    SliceTooLong { got: usize },

    /// a frame was handed more samples per channel than it can carry
    #[error("frame covers at most 5120 samples per channel, got {got}")]
    FrameTooLong { got: usize },

    /// input channels are not all the same length
    #[error("channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        got: usize,
    },

    /// input buffer has no channels
    #[error("audio has no channels")]
    NoChannels,

    /// channel count exceeds the 8-bit header field, or makes the frame
    /// byte size overflow its 16-bit field
    #[error("frame cannot represent {channels} channels")]
    TooManyChannels { channels: usize },

    /// audio length does not fit the 32-bit sample count field
    #[error("audio length {got} does not fit the 32-bit sample count")]
    TooManySamples { got: usize },

    /// input buffer has no samples; an empty file would collide with the
    /// streaming marker in the header
    #[error("audio has no samples")]
    EmptyAudio,

    /// sample rate of zero, or one too large for the 24-bit header field
    #[error("sample rate {rate} must be nonzero and fit in 24 bits")]
    SampleRateOutOfRange { rate: u32 },
}

pub type QoaResult<T> = Result<T, QoaError>;

// data structures

/// a whole qoa file in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QoaFile {
    /// sample rate in Hz (24 bits on the wire)
    pub sample_rate: u32,
    /// per-channel sample data; every channel has the same length
    pub samples: Vec<Vec<i16>>,
    /// bytes after the last frame, preserved verbatim
    pub trailing_data: Vec<u8>,
}

impl QoaFile {
    /// new file with no trailing bytes
    pub fn new(sample_rate: u32, samples: Vec<Vec<i16>>) -> Self {
        QoaFile {
            sample_rate,
            samples,
            trailing_data: Vec::new(),
        }
    }

    /// number of channels
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// samples in each channel
    pub fn samples_per_channel(&self) -> usize {
        self.samples.first().map_or(0, Vec::len)
    }

    /// playback length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples_per_channel() as f64 / self.sample_rate as f64
        }
    }
}

/// one decoded frame
///
/// Self-contained apart from predictor continuity: the LMS snapshot baked
/// into the frame is the state at the end of the previous frame, so a frame
/// decodes in isolation given only its own bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QoaFrame {
    /// sample rate in Hz
    pub sample_rate: u32,
    /// declared byte size from the frame header
    pub size: u16,
    /// per-channel sample data for this frame's span
    pub samples: Vec<Vec<i16>>,
}

impl QoaFrame {
    /// number of channels
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// samples in each channel of this frame
    pub fn samples_per_channel(&self) -> usize {
        self.samples.first().map_or(0, Vec::len)
    }
}
