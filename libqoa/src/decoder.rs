//! file decoder

use log::debug;

use crate::bytes::Cursor;
use crate::core::tables::{FILE_HEADER_SIZE, MAGIC, SAMPLES_PER_FRAME_CHANNEL};
use crate::core::{QoaError, QoaFile, QoaResult};
use crate::frame::decode_frame;

/// decode qoa bytes into a file
///
/// The first frame's header establishes the file-level channel count and
/// sample rate; every later frame must agree with them and cover exactly
/// the next span of the declared sample total. Decoding yields a complete
/// file or an error, never a partial buffer; whatever follows the last
/// frame is preserved as trailing data.
pub fn decode(data: &[u8]) -> QoaResult<QoaFile> {
    let mut cursor = Cursor::new(data);
    if cursor.read_bytes(4)? != MAGIC.as_slice() {
        return Err(QoaError::BadMagic);
    }
    let total_samples = cursor.read_u32()? as usize;
    if total_samples == 0 {
        return Err(QoaError::StreamingUnsupported);
    }

    let frames = (total_samples + SAMPLES_PER_FRAME_CHANNEL - 1) / SAMPLES_PER_FRAME_CHANNEL;
    let mut samples: Vec<Vec<i16>> = Vec::new();
    let mut sample_rate = 0u32;
    let mut decoded = 0usize;
    let mut pos = FILE_HEADER_SIZE;

    for frame_index in 0..frames {
        let frame = decode_frame(&data[pos..], frame_index)?;
        let frame_bytes = frame.size as usize;
        let window = (total_samples - decoded).min(SAMPLES_PER_FRAME_CHANNEL);

        if frame_index == 0 {
            sample_rate = frame.sample_rate;
            samples = vec![Vec::with_capacity(total_samples); frame.channels()];
        } else if frame.channels() != samples.len() || frame.sample_rate != sample_rate {
            return Err(QoaError::FrameHeaderMismatch { frame: frame_index });
        }
        if frame.samples_per_channel() != window {
            return Err(QoaError::FrameHeaderMismatch { frame: frame_index });
        }

        for (channel, decoded_channel) in samples.iter_mut().zip(frame.samples) {
            channel.extend_from_slice(&decoded_channel);
        }
        decoded += window;
        pos += frame_bytes;
    }

    debug!(
        "decoded {} frames, {} samples per channel, {} trailing bytes",
        frames,
        decoded,
        data.len() - pos
    );

    Ok(QoaFile {
        sample_rate,
        samples,
        trailing_data: data[pos..].to_vec(),
    })
}
