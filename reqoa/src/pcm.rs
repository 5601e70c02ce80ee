//! Interleaved PCM layout helpers
//!
//! qoa stores each channel contiguously while raw PCM and most decoders
//! deal in interleaved frames, so conversion in both directions lives here.

use anyhow::{bail, Result};

/// Split interleaved samples into one buffer per channel
pub fn deinterleave(samples: &[i16], channels: usize) -> Result<Vec<Vec<i16>>> {
    if channels == 0 {
        bail!("Channel count must be at least 1");
    }
    if samples.len() % channels != 0 {
        bail!(
            "{} samples do not divide evenly into {} channels",
            samples.len(),
            channels
        );
    }

    let per_channel = samples.len() / channels;
    let mut out = vec![Vec::with_capacity(per_channel); channels];
    for frame in samples.chunks_exact(channels) {
        for (channel, &sample) in frame.iter().enumerate() {
            out[channel].push(sample);
        }
    }
    Ok(out)
}

/// Interleave equal-length channel buffers frame by frame
pub fn interleave(channels: &[Vec<i16>]) -> Result<Vec<i16>> {
    let Some(first) = channels.first() else {
        return Ok(Vec::new());
    };
    for (index, channel) in channels.iter().enumerate() {
        if channel.len() != first.len() {
            bail!(
                "Channel {} holds {} samples, expected {}",
                index,
                channel.len(),
                first.len()
            );
        }
    }

    let mut out = Vec::with_capacity(first.len() * channels.len());
    for frame in 0..first.len() {
        for channel in channels {
            out.push(channel[frame]);
        }
    }
    Ok(out)
}

/// Parse little-endian 16-bit PCM bytes into samples
pub fn from_le_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        bail!("PCM byte length {} is not a multiple of 2", bytes.len());
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Serialize samples as little-endian 16-bit PCM bytes
pub fn to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Convert a normalized float sample to 16-bit PCM
#[inline]
pub fn sample_from_f32(sample: f32) -> i16 {
    (sample * 32768.0).clamp(-32768.0, 32767.0) as i16
}
