#[cfg(test)]
mod tests {
    use reqoa::audio::write_wav_to_bytes;
    use reqoa::{
        decode_to_samples, decode_to_wav, encode_from_audio, encode_from_pcm_bytes,
        encode_from_samples, get_qoa_info, validate_qoa,
    };

    fn stereo_sine(frames: usize, sample_rate: u32) -> Vec<i16> {
        let mut samples = Vec::with_capacity(frames * 2);
        for i in 0..frames {
            let t = i as f32 / sample_rate as f32;
            let sample = ((t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 12000.0) as i16;
            samples.push(sample);
            samples.push(-sample);
        }
        samples
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let sample_rate = 44100;
        let samples = stereo_sine(sample_rate as usize, sample_rate); // 1 second

        // Encode
        let qoa_bytes = encode_from_samples(&samples, sample_rate, 2).unwrap();

        // Decode
        let (decoded_samples, decoded_sr, decoded_ch) = decode_to_samples(&qoa_bytes).unwrap();

        assert_eq!(decoded_sr, sample_rate);
        assert_eq!(decoded_ch, 2);
        assert_eq!(decoded_samples.len(), samples.len());

        // Check samples are close (allowing for compression artifacts)
        for (original, decoded) in samples.iter().zip(decoded_samples.iter()) {
            assert!((*original as i32 - *decoded as i32).abs() < 2048);
        }
    }

    #[test]
    fn test_decode_to_wav_writes_valid_pcm_header() {
        let samples = stereo_sine(4000, 22050);
        let qoa_bytes = encode_from_samples(&samples, 22050, 2).unwrap();

        let wav = decode_to_wav(&qoa_bytes).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        // integer PCM, 2 channels, 22050 Hz, 16 bits per sample
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 2);
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 22050);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
        // data chunk covers every decoded sample
        assert_eq!(&wav[36..40], b"data");
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
        assert_eq!(data_size, samples.len() * 2);
        assert_eq!(wav.len(), 44 + data_size);
    }

    #[test]
    fn test_encode_from_wav_bytes() {
        let sample_rate = 8000;
        let samples = stereo_sine(6000, sample_rate);
        let wav = write_wav_to_bytes(&samples, sample_rate, 2).unwrap();

        // Feed the WAV through the generic audio reader
        let qoa_bytes = encode_from_audio(&wav).unwrap();

        let (decoded, decoded_sr, decoded_ch) = decode_to_samples(&qoa_bytes).unwrap();
        assert_eq!(decoded_sr, sample_rate);
        assert_eq!(decoded_ch, 2);
        assert_eq!(decoded.len(), samples.len());
        for (original, decoded) in samples.iter().zip(decoded.iter()) {
            assert!((*original as i32 - *decoded as i32).abs() < 2048);
        }
    }

    #[test]
    fn test_encode_from_raw_pcm_bytes() {
        let samples = stereo_sine(3000, 16000);
        let mut pcm = Vec::with_capacity(samples.len() * 2);
        for s in &samples {
            pcm.extend_from_slice(&s.to_le_bytes());
        }

        let qoa_bytes = encode_from_pcm_bytes(&pcm, 16000, 2).unwrap();
        validate_qoa(&qoa_bytes).unwrap();

        let info = get_qoa_info(&qoa_bytes).unwrap();
        assert_eq!(info.sample_rate, 16000);
        assert_eq!(info.channels, 2);
        assert_eq!(info.samples_per_channel, 3000);
        assert_eq!(info.frames, 1);
        assert_eq!(info.file_size, qoa_bytes.len());
    }

    #[test]
    fn test_validate_rejects_corrupt_stream() {
        let samples = stereo_sine(2000, 44100);
        let mut qoa_bytes = encode_from_samples(&samples, 44100, 2).unwrap();

        validate_qoa(&qoa_bytes).unwrap();

        // corrupt the first frame's declared size
        qoa_bytes[15] ^= 0x01;
        assert!(validate_qoa(&qoa_bytes).is_err());
    }

    #[test]
    fn test_encode_rejects_ragged_input() {
        // 5 samples cannot be split into 2 channels
        let samples = [0i16, 1, 2, 3, 4];
        assert!(encode_from_samples(&samples, 44100, 2).is_err());
    }
}
