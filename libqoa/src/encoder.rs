//! file encoder

use log::debug;

use crate::core::tables::{FILE_HEADER_SIZE, MAGIC, SAMPLES_PER_FRAME_CHANNEL};
use crate::core::{LmsState, QoaError, QoaFile, QoaResult};
use crate::frame::{encode_frame, frame_size};

/// encode a whole file to qoa bytes
///
/// Predictor state starts fresh per channel and carries across every frame
/// boundary; each frame stores the running state it begins from. Samples
/// are partitioned into maximal frames of 5120 per channel, and trailing
/// bytes are appended verbatim after the last frame.
pub fn encode(file: &QoaFile) -> QoaResult<Vec<u8>> {
    validate(file)?;

    let channels = file.channels();
    let spc = file.samples_per_channel();

    let full_frames = spc / SAMPLES_PER_FRAME_CHANNEL;
    let remainder = spc % SAMPLES_PER_FRAME_CHANNEL;
    let total = FILE_HEADER_SIZE
        + full_frames * frame_size(channels, SAMPLES_PER_FRAME_CHANNEL)
        + if remainder > 0 {
            frame_size(channels, remainder)
        } else {
            0
        }
        + file.trailing_data.len();

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&(spc as u32).to_be_bytes());

    let mut lms = vec![LmsState::new(); channels];
    let mut start = 0;
    while start < spc {
        let end = (start + SAMPLES_PER_FRAME_CHANNEL).min(spc);
        let window: Vec<&[i16]> = file.samples.iter().map(|ch| &ch[start..end]).collect();
        let frame = encode_frame(&window, file.sample_rate, &mut lms)?;
        bytes.extend_from_slice(&frame);
        start = end;
    }

    bytes.extend_from_slice(&file.trailing_data);

    debug!(
        "encoded {} frames, {} channels, {} bytes",
        full_frames + usize::from(remainder > 0),
        channels,
        bytes.len()
    );

    Ok(bytes)
}

fn validate(file: &QoaFile) -> QoaResult<()> {
    if file.samples.is_empty() {
        return Err(QoaError::NoChannels);
    }
    if file.channels() > u8::MAX as usize {
        return Err(QoaError::TooManyChannels {
            channels: file.channels(),
        });
    }
    let spc = file.samples_per_channel();
    for (channel, samples) in file.samples.iter().enumerate() {
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
    if spc > u32::MAX as usize {
        return Err(QoaError::TooManySamples { got: spc });
    }
    if file.sample_rate == 0 || file.sample_rate > 0xff_ffff {
        return Err(QoaError::SampleRateOutOfRange {
            rate: file.sample_rate,
        });
    }
    // the widest frame must fit its 16-bit size field
    let widest = frame_size(file.channels(), spc.min(SAMPLES_PER_FRAME_CHANNEL));
    if widest > u16::MAX as usize {
        return Err(QoaError::TooManyChannels {
            channels: file.channels(),
        });
    }
    Ok(())
}
