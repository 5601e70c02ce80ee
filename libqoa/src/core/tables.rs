//! fixed codec parameters and quantization tables

// layout constants

/// Magic number "qoaf"
pub const MAGIC: [u8; 4] = [0x71, 0x6f, 0x61, 0x66];

/// file header size in bytes (magic + total samples per channel)
pub const FILE_HEADER_SIZE: usize = 8;

/// frame header size in bytes
pub const FRAME_HEADER_SIZE: usize = 8;

/// encoded size of one slice
pub const SLICE_BYTES: usize = 8;

/// samples covered by one slice of one channel
pub const SAMPLES_PER_SLICE: usize = 20;

/// slices per channel in a full frame
pub const SLICES_PER_FRAME_CHANNEL: usize = 256;

/// samples per channel in a full frame (20 * 256)
pub const SAMPLES_PER_FRAME_CHANNEL: usize = 5120;

/// history/weight entries in one predictor state
pub const LMS_STATE_LEN: usize = 4;

/// serialized predictor snapshot per channel (4 history + 4 weights, i16 each)
pub const LMS_STATE_BYTES: usize = 16;

// quantization

/// exponent spacing the 16 scale factors
pub const SCALEFACTOR_EXPONENT: f64 = 2.75;

/// residual shape applied to a scale factor, indexed by 3-bit code
pub const RESIDUAL_SHAPE: [f64; 8] = [0.75, -0.75, 2.5, -2.5, 4.5, -4.5, 7.0, -7.0];

/// scale factor for a quantized scale factor 0-15
///
/// `round((sfq + 1) ^ 2.75)`, rounding half away from zero.
#[inline]
pub fn scale_factor(sfq: usize) -> i32 {
    ((sfq + 1) as f64).powf(SCALEFACTOR_EXPONENT).round() as i32
}

/// dequantized residual for a scale factor and a 3-bit code
///
/// `round(scale_factor * shape[code])` clamped to the i16 range.
#[inline]
pub fn dequantized_residual(scale_factor: i32, code: usize) -> i32 {
    let r = (scale_factor as f64 * RESIDUAL_SHAPE[code]).round();
    r.clamp(i16::MIN as f64, i16::MAX as f64) as i32
}

/// dequantized residuals for every (quantized scale factor, code) pair
///
/// Cached output of [`dequantized_residual`] over [`scale_factor`]; the
/// hot paths index this instead of calling `powf` per slice.
pub const DEQUANT_TAB: [[i16; 8]; 16] = [
    [1, -1, 3, -3, 5, -5, 7, -7],
    [5, -5, 18, -18, 32, -32, 49, -49],
    [16, -16, 53, -53, 95, -95, 147, -147],
    [34, -34, 113, -113, 203, -203, 315, -315],
    [63, -63, 210, -210, 378, -378, 588, -588],
    [104, -104, 345, -345, 621, -621, 966, -966],
    [158, -158, 528, -528, 950, -950, 1477, -1477],
    [228, -228, 760, -760, 1368, -1368, 2128, -2128],
    [316, -316, 1053, -1053, 1895, -1895, 2947, -2947],
    [422, -422, 1405, -1405, 2529, -2529, 3934, -3934],
    [548, -548, 1828, -1828, 3290, -3290, 5117, -5117],
    [696, -696, 2320, -2320, 4176, -4176, 6496, -6496],
    [868, -868, 2893, -2893, 5207, -5207, 8099, -8099],
    [1064, -1064, 3548, -3548, 6386, -6386, 9933, -9933],
    [1286, -1286, 4288, -4288, 7718, -7718, 12005, -12005],
    [1536, -1536, 5120, -5120, 9216, -9216, 14336, -14336],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factors_match_formula() {
        let expected = [
            1, 7, 21, 45, 84, 138, 211, 304, 421, 562, 731, 928, 1157, 1419, 1715, 2048,
        ];
        for (sfq, &sf) in expected.iter().enumerate() {
            assert_eq!(scale_factor(sfq), sf, "sfq {}", sfq);
        }
    }

    #[test]
    fn dequant_tab_matches_formula() {
        for sfq in 0..16 {
            let sf = scale_factor(sfq);
            for code in 0..8 {
                assert_eq!(
                    DEQUANT_TAB[sfq][code] as i32,
                    dequantized_residual(sf, code),
                    "sfq {} code {}",
                    sfq,
                    code
                );
            }
        }
    }

    #[test]
    fn full_frame_constants_agree() {
        assert_eq!(
            SAMPLES_PER_SLICE * SLICES_PER_FRAME_CHANNEL,
            SAMPLES_PER_FRAME_CHANNEL
        );
    }
}
