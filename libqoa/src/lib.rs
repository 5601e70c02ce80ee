//! Quite OK Audio (QOA) encoding and decoding
//!
//! QOA stores 16-bit PCM as frames of 64-bit slices: each slice carries one
//! scale factor and twenty 3-bit residuals, and an adaptive least-mean-squares
//! predictor threads its state through the whole stream. Lossy, small, and
//! cheap to decode.
//!
//! ```
//! use libqoa_audio::{decode, encode, QoaFile};
//!
//! let file = QoaFile::new(44100, vec![vec![0i16; 4800]]);
//! let bytes = encode(&file).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded.channels(), 1);
//! assert_eq!(decoded.samples_per_channel(), 4800);
//! ```

pub mod core;
pub mod frame;
pub mod slice;

mod bytes;
mod decoder;
mod encoder;

pub use crate::core::{
    dequantized_residual, scale_factor, LmsState, QoaError, QoaFile, QoaFrame, QoaResult,
    DEQUANT_TAB, FILE_HEADER_SIZE, FRAME_HEADER_SIZE, LMS_STATE_BYTES, LMS_STATE_LEN, MAGIC,
    SAMPLES_PER_FRAME_CHANNEL, SAMPLES_PER_SLICE, SLICES_PER_FRAME_CHANNEL, SLICE_BYTES,
};
pub use decoder::decode;
pub use encoder::encode;
pub use frame::{decode_frame, encode_frame, frame_size, slices_per_channel};
pub use slice::{decode_slice, encode_slice};

// stream info for the info() function

/// info about a qoa stream, read from its leading bytes only
#[derive(Debug, Clone)]
pub struct StreamInfo {
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Total samples in each channel
    pub samples_per_channel: u32,
    /// Number of frames
    pub frames: usize,
    /// Duration in seconds
    pub duration_secs: f64,
    /// File size in bytes
    pub file_size: usize,
    /// Compression ratio (raw 16-bit PCM / compressed)
    pub compression_ratio: f64,
}

/// read stream info without decoding any audio
///
/// Parses the file header plus the first frame's channel and sample rate
/// fields, twelve bytes in all.
pub fn info(data: &[u8]) -> QoaResult<StreamInfo> {
    let mut cursor = bytes::Cursor::new(data);
    if cursor.read_bytes(4)? != MAGIC.as_slice() {
        return Err(QoaError::BadMagic);
    }
    let samples_per_channel = cursor.read_u32()?;
    if samples_per_channel == 0 {
        return Err(QoaError::StreamingUnsupported);
    }
    let channels = cursor.read_u8()?;
    let sample_rate = cursor.read_u24()?;
    if channels == 0 {
        return Err(QoaError::NoChannels);
    }

    let frames =
        (samples_per_channel as usize + SAMPLES_PER_FRAME_CHANNEL - 1) / SAMPLES_PER_FRAME_CHANNEL;
    let duration_secs = if sample_rate == 0 {
        0.0
    } else {
        samples_per_channel as f64 / sample_rate as f64
    };
    let original_size = samples_per_channel as usize * channels as usize * 2;

    Ok(StreamInfo {
        channels,
        sample_rate,
        samples_per_channel,
        frames,
        duration_secs,
        file_size: data.len(),
        compression_ratio: original_size as f64 / data.len() as f64,
    })
}
