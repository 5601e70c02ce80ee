//! frame codec: header, predictor snapshots, interleaved slices
//!
//! Wire layout of one frame:
//!
//! ```text
//! header (8 bytes): u8 channels | u24 sample rate | u16 samples per channel | u16 frame size
//! per channel (16 bytes): 4 x i16 history, then 4 x i16 weights
//! slices (8 bytes each): channel-interleaved, slice i -> channel i % channels,
//!                        sample group i / channels
//! ```

use crate::bytes::Cursor;
use crate::core::tables::{
    FRAME_HEADER_SIZE, LMS_STATE_BYTES, LMS_STATE_LEN, SAMPLES_PER_FRAME_CHANNEL,
    SAMPLES_PER_SLICE, SLICE_BYTES,
};
use crate::core::{LmsState, QoaError, QoaFrame, QoaResult};
use crate::slice::{decode_slice, encode_slice};

/// slices needed to cover one channel's span
#[inline]
pub fn slices_per_channel(samples_per_channel: usize) -> usize {
    (samples_per_channel + SAMPLES_PER_SLICE - 1) / SAMPLES_PER_SLICE
}

/// encoded byte size of a frame
#[inline]
pub fn frame_size(channels: usize, samples_per_channel: usize) -> usize {
    FRAME_HEADER_SIZE
        + LMS_STATE_BYTES * channels
        + SLICE_BYTES * channels * slices_per_channel(samples_per_channel)
}

/// encode one frame
///
/// `channels` holds one equal-length span per channel, at most 5120 samples
/// each. `lms` must hold one predictor state per channel; the states are
/// serialized into the frame as-is (the snapshot a decoder resumes from)
/// and then advanced in place by every slice encoded.
pub fn encode_frame(
    channels: &[&[i16]],
    sample_rate: u32,
    lms: &mut [LmsState],
) -> QoaResult<Vec<u8>> {
    if channels.is_empty() {
        return Err(QoaError::NoChannels);
    }
    if channels.len() > u8::MAX as usize {
        return Err(QoaError::TooManyChannels {
            channels: channels.len(),
        });
    }
    let spc = channels[0].len();
    for (channel, samples) in channels.iter().enumerate() {
        if samples.len() != spc {
            return Err(QoaError::ChannelLengthMismatch {
                channel,
                expected: spc,
                got: samples.len(),
            });
        }
    }
    if spc == 0 {
        return Err(QoaError::EmptyAudio);
    }
    if spc > SAMPLES_PER_FRAME_CHANNEL {
        return Err(QoaError::FrameTooLong { got: spc });
    }
    if sample_rate == 0 || sample_rate > 0xff_ffff {
        return Err(QoaError::SampleRateOutOfRange { rate: sample_rate });
    }
    let size = frame_size(channels.len(), spc);
    if size > u16::MAX as usize {
        return Err(QoaError::TooManyChannels {
            channels: channels.len(),
        });
    }
    debug_assert_eq!(lms.len(), channels.len());

    let mut bytes = Vec::with_capacity(size);
    bytes.push(channels.len() as u8);
    bytes.extend_from_slice(&sample_rate.to_be_bytes()[1..]);
    bytes.extend_from_slice(&(spc as u16).to_be_bytes());
    bytes.extend_from_slice(&(size as u16).to_be_bytes());

    for state in lms.iter() {
        for h in state.history {
            bytes.extend_from_slice(&h.to_be_bytes());
        }
        for w in state.weights {
            bytes.extend_from_slice(&w.to_be_bytes());
        }
    }

    for group in 0..slices_per_channel(spc) {
        let begin = group * SAMPLES_PER_SLICE;
        let end = (begin + SAMPLES_PER_SLICE).min(spc);
        for (c, samples) in channels.iter().enumerate() {
            let slice = encode_slice(&samples[begin..end], &mut lms[c])?;
            bytes.extend_from_slice(&slice.to_be_bytes());
        }
    }

    Ok(bytes)
}

/// decode one frame from the start of `data`
///
/// Bytes past the frame's declared size are left untouched. `frame_index`
/// only labels errors; pass 0 when decoding a frame on its own.
pub fn decode_frame(data: &[u8], frame_index: usize) -> QoaResult<QoaFrame> {
    let mut cursor = Cursor::new(data);
    let channels = cursor.read_u8()? as usize;
    let sample_rate = cursor.read_u24()?;
    let spc = cursor.read_u16()? as usize;
    let declared = cursor.read_u16()? as usize;

    if channels == 0 {
        return Err(QoaError::NoChannels);
    }
    if spc > SAMPLES_PER_FRAME_CHANNEL {
        return Err(QoaError::FrameTooLong { got: spc });
    }
    let expected = frame_size(channels, spc);
    if declared != expected {
        return Err(QoaError::FrameSizeMismatch {
            frame: frame_index,
            declared,
            expected,
        });
    }
    if data.len() < expected {
        return Err(QoaError::Truncated {
            needed: expected,
            available: data.len(),
        });
    }

    let mut lms = Vec::with_capacity(channels);
    for _ in 0..channels {
        let mut state = LmsState::new();
        for i in 0..LMS_STATE_LEN {
            state.history[i] = cursor.read_i16()?;
        }
        for i in 0..LMS_STATE_LEN {
            state.weights[i] = cursor.read_i16()?;
        }
        lms.push(state);
    }

    let mut samples = vec![vec![0i16; spc]; channels];
    for group in 0..slices_per_channel(spc) {
        let begin = group * SAMPLES_PER_SLICE;
        let end = (begin + SAMPLES_PER_SLICE).min(spc);
        for (c, state) in lms.iter_mut().enumerate() {
            let decoded = decode_slice(cursor.read_u64()?, state);
            samples[c][begin..end].copy_from_slice(&decoded[..end - begin]);
        }
    }

    Ok(QoaFrame {
        sample_rate,
        size: declared as u16,
        samples,
    })
}
