//! reqoa - Audio format converter library
//!
//! This library converts common audio formats (MP3, WAV, FLAC, OGG, ...)
//! to and from the qoa format.

pub mod audio;
pub mod pcm;

use anyhow::{Context, Result};

/// Re-export libqoa types
pub use libqoa_audio::{QoaFile, StreamInfo};

/// Information about a qoa file
#[derive(Debug, Clone, serde::Serialize)]
pub struct QoaInfo {
    pub sample_rate: u32,
    pub channels: u8,
    pub samples_per_channel: u32,
    pub frames: usize,
    pub duration_secs: f64,
    pub file_size: usize,
    pub compression_ratio: f64,
}

/// Get information about a qoa file
///
/// Reads only the leading headers, so this works on a partial file.
pub fn get_qoa_info(data: &[u8]) -> Result<QoaInfo> {
    let info = libqoa_audio::info(data)
        .map_err(|e| anyhow::anyhow!("Failed to read qoa file: {}", e))?;

    Ok(QoaInfo {
        sample_rate: info.sample_rate,
        channels: info.channels,
        samples_per_channel: info.samples_per_channel,
        frames: info.frames,
        duration_secs: info.duration_secs,
        file_size: info.file_size,
        compression_ratio: info.compression_ratio,
    })
}

/// Validate a qoa file by decoding it in full
pub fn validate_qoa(data: &[u8]) -> Result<()> {
    libqoa_audio::decode(data)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("Invalid qoa file: {}", e))
}

/// Information about a decoded audio file
#[derive(Debug, Clone)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f32,
}

/// Encode audio file bytes to qoa format
///
/// # Arguments
/// * `audio_bytes` - Raw bytes of an audio file (MP3, WAV, FLAC, OGG, etc.)
///
/// # Returns
/// Raw bytes of the qoa file
pub fn encode_from_audio(audio_bytes: &[u8]) -> Result<Vec<u8>> {
    // Read audio file
    let (samples, sample_rate, channels) =
        audio::read_audio_from_bytes(audio_bytes).context("Failed to read audio file")?;

    encode_from_samples(&samples, sample_rate, channels)
}

/// Encode raw audio samples to qoa format
///
/// # Arguments
/// * `samples` - Interleaved 16-bit PCM samples
/// * `sample_rate` - Sample rate in Hz
/// * `channels` - Number of channels
///
/// # Returns
/// Raw bytes of the qoa file
pub fn encode_from_samples(samples: &[i16], sample_rate: u32, channels: usize) -> Result<Vec<u8>> {
    let file = QoaFile::new(sample_rate, pcm::deinterleave(samples, channels)?);

    libqoa_audio::encode(&file).map_err(|e| anyhow::anyhow!("Encoding failed: {}", e))
}

/// Encode raw little-endian 16-bit PCM bytes to qoa format
pub fn encode_from_pcm_bytes(
    pcm_bytes: &[u8],
    sample_rate: u32,
    channels: usize,
) -> Result<Vec<u8>> {
    let samples = pcm::from_le_bytes(pcm_bytes)?;
    encode_from_samples(&samples, sample_rate, channels)
}

/// Decode qoa file to raw samples
///
/// # Arguments
/// * `qoa_bytes` - Raw bytes of a qoa file
///
/// # Returns
/// Tuple of (samples, sample_rate, channels) where samples are interleaved 16-bit PCM
pub fn decode_to_samples(qoa_bytes: &[u8]) -> Result<(Vec<i16>, u32, usize)> {
    let file =
        libqoa_audio::decode(qoa_bytes).map_err(|e| anyhow::anyhow!("Invalid qoa file: {}", e))?;

    let channels = file.channels();
    let samples = pcm::interleave(&file.samples)?;

    Ok((samples, file.sample_rate, channels))
}

/// Decode qoa file to WAV format
///
/// # Arguments
/// * `qoa_bytes` - Raw bytes of a qoa file
///
/// # Returns
/// Raw bytes of a 16-bit PCM WAV file
pub fn decode_to_wav(qoa_bytes: &[u8]) -> Result<Vec<u8>> {
    let (samples, sample_rate, channels) = decode_to_samples(qoa_bytes)?;

    audio::write_wav_to_bytes(&samples, sample_rate, channels).context("Failed to write WAV data")
}

/// Get information about an audio file
///
/// # Arguments
/// * `audio_bytes` - Raw bytes of an audio file (MP3, WAV, FLAC, OGG, etc.)
///
/// # Returns
/// Audio information
pub fn get_audio_info(audio_bytes: &[u8]) -> Result<AudioInfo> {
    let (samples, sample_rate, channels) =
        audio::read_audio_from_bytes(audio_bytes).context("Failed to read audio file")?;

    Ok(AudioInfo {
        sample_rate,
        channels,
        duration_secs: samples.len() as f32 / channels as f32 / sample_rate as f32,
    })
}
