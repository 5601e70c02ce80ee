//! slice codec: 20 residuals and one scale factor in a 64-bit word
//!
//! Layout, most significant bits first: 4-bit quantized scale factor, then
//! twenty 3-bit residual codes in sample order. A slice always occupies all
//! 64 bits; when it covers fewer than 20 samples the unused trailing codes
//! are packed as zero and never read back.

use crate::core::tables::{DEQUANT_TAB, SAMPLES_PER_SLICE};
use crate::core::{LmsState, QoaError, QoaResult};

#[inline]
fn clamp_i16(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// decode one slice, advancing the channel's predictor state
///
/// Always produces 20 samples; callers covering a shorter span truncate.
pub fn decode_slice(mut slice: u64, lms: &mut LmsState) -> [i16; SAMPLES_PER_SLICE] {
    let sfq = (slice >> 60) as usize;
    let mut samples = [0i16; SAMPLES_PER_SLICE];

    for out in samples.iter_mut() {
        let code = ((slice >> 57) & 0b111) as usize;
        slice <<= 3;

        let residual = DEQUANT_TAB[sfq][code] as i32;
        let predicted = lms.predict();
        let reconstructed = clamp_i16(predicted + residual);
        lms.update(residual, reconstructed);
        *out = reconstructed;
    }

    samples
}

/// encode up to 20 samples of one channel into a slice
///
/// Tries all 16 scale factors. Each candidate re-simulates the whole slice
/// from the same starting predictor state: the per-sample code choice is a
/// nearest-neighbor pick over the candidate's eight dequantized residuals
/// (ties to the lowest code), and the candidate's cost is the absolute
/// reconstruction error. A candidate is abandoned as soon as its running
/// error reaches the best found, so only a strictly better candidate wins
/// and ties keep the lowest scale factor. The winner's final predictor
/// state becomes the channel's state.
pub fn encode_slice(samples: &[i16], lms: &mut LmsState) -> QoaResult<u64> {
    if samples.len() > SAMPLES_PER_SLICE {
        return Err(QoaError::SliceTooLong { got: samples.len() });
    }

    let start = *lms;
    let mut best_error = u64::MAX;
    let mut best_slice = 0u64;
    let mut best_state = start;

    'candidates: for sfq in 0..16usize {
        let mut state = start;
        let mut slice = (sfq as u64) << 60;
        let mut error = 0u64;

        for (i, &sample) in samples.iter().enumerate() {
            let predicted = state.predict();
            let true_residual = sample as i32 - predicted;

            let mut code = 0usize;
            let mut best_distance = i32::MAX;
            for (r, &dq) in DEQUANT_TAB[sfq].iter().enumerate() {
                let distance = (true_residual - dq as i32).abs();
                if distance < best_distance {
                    best_distance = distance;
                    code = r;
                }
            }

            let residual = DEQUANT_TAB[sfq][code] as i32;
            let reconstructed = clamp_i16(predicted + residual);
            state.update(residual, reconstructed);

            error += (sample as i32 - reconstructed as i32).unsigned_abs() as u64;
            if error >= best_error {
                continue 'candidates;
            }

            slice |= (code as u64) << (57 - 3 * i);
        }

        if error < best_error {
            best_error = error;
            best_slice = slice;
            best_state = state;
        }
    }

    *lms = best_state;
    Ok(best_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_samples_pick_scale_factor_zero() {
        let mut lms = LmsState::new();
        let slice = encode_slice(&[0i16; SAMPLES_PER_SLICE], &mut lms).unwrap();
        // sfq 0 and every code 0
        assert_eq!(slice, 0);
    }

    #[test]
    fn codes_unpack_most_significant_first() {
        // sfq 0, first code 2 (residual +3), the rest 0 (residual +1)
        let slice = 2u64 << 57;
        let mut lms = LmsState::new();
        let samples = decode_slice(slice, &mut lms);
        assert_eq!(samples[0], 3);
        assert_eq!(samples[1], 1);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let mut lms = LmsState::new();
        let err = encode_slice(&[0i16; SAMPLES_PER_SLICE + 1], &mut lms).unwrap_err();
        assert_eq!(err, QoaError::SliceTooLong {
            got: SAMPLES_PER_SLICE + 1
        });
        // state untouched on rejection
        assert_eq!(lms, LmsState::new());
    }

    #[test]
    fn decoder_retraces_encoder_state() {
        let start = LmsState {
            history: [40, -80, 120, -33],
            weights: [3, -2, 100, 270],
        };
        let samples: Vec<i16> = (0..SAMPLES_PER_SLICE)
            .map(|i| (i as i16).wrapping_mul(311) - 800)
            .collect();

        let mut encoder_lms = start;
        let slice = encode_slice(&samples, &mut encoder_lms).unwrap();

        let mut decoder_lms = start;
        decode_slice(slice, &mut decoder_lms);

        assert_eq!(encoder_lms, decoder_lms);
    }

    #[test]
    fn short_slice_leaves_trailing_codes_zero() {
        let mut lms = LmsState::new();
        let slice = encode_slice(&[5000i16; 3], &mut lms).unwrap();
        // seventeen unused 3-bit fields below the three used ones
        assert_eq!(slice & ((1u64 << 51) - 1), 0);
    }
}
