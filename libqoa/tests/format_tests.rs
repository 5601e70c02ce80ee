//! Byte-level layout checks for the qoa stream format
use libqoa_audio::{decode, encode, info, QoaFile, FILE_HEADER_SIZE, MAGIC};

// ============================================================================
// File Header
// ============================================================================

#[test]
fn test_file_header_layout() {
    let file = QoaFile::new(44100, vec![vec![0i16; 21]]);
    let bytes = encode(&file).expect("encoding failed");

    assert_eq!(&bytes[0..4], &MAGIC);
    // samples per channel, not the channel total
    assert_eq!(&bytes[4..8], &[0x00, 0x00, 0x00, 0x15]);
}

#[test]
fn test_frame_header_layout() {
    let file = QoaFile::new(44100, vec![vec![0i16; 21]]);
    let bytes = encode(&file).expect("encoding failed");

    // channel count, then big-endian 24-bit rate
    assert_eq!(bytes[8], 0x01);
    assert_eq!(&bytes[9..12], &[0x00, 0xac, 0x44]);
    // frame sample count and byte size, both big-endian 16-bit
    assert_eq!(&bytes[12..14], &[0x00, 0x15]);
    assert_eq!(&bytes[14..16], &[0x00, 0x28]);
    assert_eq!(bytes.len(), FILE_HEADER_SIZE + 0x28);
}

#[test]
fn test_rate_uses_all_three_bytes() {
    let file = QoaFile::new(0x00ab_cdef, vec![vec![0i16; 20]]);
    let bytes = encode(&file).expect("encoding failed");
    assert_eq!(&bytes[9..12], &[0xab, 0xcd, 0xef]);
}

#[test]
fn test_initial_predictor_snapshot_bytes() {
    let file = QoaFile::new(44100, vec![vec![0i16; 21]]);
    let bytes = encode(&file).expect("encoding failed");

    // history starts zeroed, weights start at {0, 0, -1, 2}
    assert_eq!(&bytes[16..24], &[0u8; 8]);
    assert_eq!(
        &bytes[24..32],
        &[0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x02]
    );
}

#[test]
fn test_silent_slices_pack_to_zero_words() {
    let file = QoaFile::new(44100, vec![vec![0i16; 21]]);
    let bytes = encode(&file).expect("encoding failed");

    // two slices for 21 samples, both fully zero for silence
    assert_eq!(&bytes[32..48], &[0u8; 16]);
}

#[test]
fn test_trailing_bytes_are_appended_verbatim() {
    let mut file = QoaFile::new(8000, vec![vec![0i16; 20]]);
    file.trailing_data = vec![0xaa, 0xbb];
    let bytes = encode(&file).expect("encoding failed");

    assert_eq!(&bytes[bytes.len() - 2..], &[0xaa, 0xbb]);
}

// ============================================================================
// Hand-Assembled Streams
// ============================================================================

#[test]
fn test_decode_hand_assembled_minimal_stream() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // one sample per channel
    bytes.extend_from_slice(&[0x01, 0x00, 0xac, 0x44]); // mono at 44100 hz
    bytes.extend_from_slice(&[0x00, 0x01, 0x00, 0x20]); // one sample, 32 byte frame
    bytes.extend_from_slice(&[0u8; 8]); // zero history
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x02]);
    bytes.extend_from_slice(&[0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    let file = decode(&bytes).expect("decoding failed");
    assert_eq!(file.sample_rate, 44100);
    // scale factor 0, first code 4: residual +5 on a zero prediction
    assert_eq!(file.samples, vec![vec![5i16]]);
    assert!(file.trailing_data.is_empty());
}

// ============================================================================
// Stream Info
// ============================================================================

#[test]
fn test_info_matches_encoded_stream() {
    let file = QoaFile::new(44100, vec![vec![100i16; 5121]]);
    let bytes = encode(&file).expect("encoding failed");
    let details = info(&bytes).expect("info failed");

    assert_eq!(details.channels, 1);
    assert_eq!(details.sample_rate, 44100);
    assert_eq!(details.samples_per_channel, 5121);
    assert_eq!(details.frames, 2);
    assert_eq!(details.file_size, bytes.len());
    assert!((details.duration_secs - 5121.0 / 44100.0).abs() < 1e-9);
    assert!(details.compression_ratio > 2.0 && details.compression_ratio < 3.0);
}
