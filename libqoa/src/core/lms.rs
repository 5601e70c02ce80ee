//! adaptive least-mean-squares predictor

use super::tables::LMS_STATE_LEN;

/// per-channel predictor state
///
/// Four recent reconstructed samples and four filter weights, both
/// fixed-point i16. Every sample processed mutates the state in order,
/// and decode must retrace the encoder's trajectory exactly, so both
/// paths share these two operations unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LmsState {
    pub history: [i16; LMS_STATE_LEN],
    pub weights: [i16; LMS_STATE_LEN],
}

impl LmsState {
    /// fresh state for the start of a file
    pub fn new() -> Self {
        Self {
            history: [0; LMS_STATE_LEN],
            weights: [0, 0, -1, 2],
        }
    }

    /// predicted next sample: dot(history, weights) >> 13
    #[inline]
    pub fn predict(&self) -> i32 {
        let mut acc = 0i64;
        for i in 0..LMS_STATE_LEN {
            acc += self.history[i] as i64 * self.weights[i] as i64;
        }
        (acc >> 13) as i32
    }

    /// adapt the weights by the chosen residual and push the reconstructed sample
    ///
    /// Weight arithmetic wraps at 16 bits; overflow is defined format
    /// behavior, not an error. `reconstructed` must be the clamped output
    /// sample, never the original input.
    #[inline]
    pub fn update(&mut self, residual: i32, reconstructed: i16) {
        // arithmetic shift: negative residuals round toward negative infinity
        let delta = (residual >> 4).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        for i in 0..LMS_STATE_LEN {
            self.weights[i] = if self.history[i] < 0 {
                self.weights[i].wrapping_sub(delta)
            } else {
                self.weights[i].wrapping_add(delta)
            };
        }
        self.history.copy_within(1.., 0);
        self.history[LMS_STATE_LEN - 1] = reconstructed;
    }
}

impl Default for LmsState {
    fn default() -> Self {
        Self::new()
    }
}
