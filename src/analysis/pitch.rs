//! Autocorrelation pitch detection

use crate::mapping::stats;

/// Samples per analysis window
pub const PITCH_WINDOW: usize = 2048;
/// Distance between consecutive window starts
pub const PITCH_HOP: usize = PITCH_WINDOW / 2;

/// Windows quieter than this carry no pitch
const SILENCE_RMS: f64 = 0.01;
/// Correlation needed before a lag is considered periodic
const GOOD_CORRELATION: f64 = 0.9;
/// Weakest correlation accepted when the search runs off the end
const MIN_CORRELATION: f64 = 0.01;

/// Estimate the pitch of one window in Hz
///
/// Uses the normalized mean absolute difference between the window and a
/// lagged copy of itself. Returns `None` for quiet or aperiodic windows.
pub fn detect_pitch(window: &[f32], sample_rate: f64) -> Option<f64> {
    if stats::rms(window) < SILENCE_RMS {
        return None;
    }

    let max_lag = window.len() / 2;
    let mut best_offset = 0usize;
    let mut best = 0.0;
    let mut last = 1.0;
    let mut found = false;

    for offset in 1..max_lag {
        let distance: f64 = (0..max_lag)
            .map(|i| (f64::from(window[i]) - f64::from(window[i + offset])).abs())
            .sum();
        let correlation = 1.0 - distance / max_lag as f64;

        if correlation > GOOD_CORRELATION && correlation > last {
            found = true;
            if correlation > best {
                best = correlation;
                best_offset = offset;
            }
        } else if found {
            let denominator = 2.0 * (2.0 * best - last - correlation);
            let shift = if denominator == 0.0 {
                0.0
            } else {
                (best - last) / denominator
            };
            return Some(sample_rate / (best_offset as f64 + shift));
        }
        last = correlation;
    }

    (best > MIN_CORRELATION).then(|| sample_rate / best_offset as f64)
}

/// Pitch of every half-overlapping window that carries one
pub fn pitch_track(samples: &[f32], sample_rate: f64) -> Vec<f64> {
    let mut pitches = Vec::new();
    let mut start = 0;
    while start + PITCH_WINDOW < samples.len() {
        if let Some(pitch) = detect_pitch(&samples[start..start + PITCH_WINDOW], sample_rate) {
            if pitch > 0.0 && pitch.is_finite() {
                pitches.push(pitch);
            }
        }
        start += PITCH_HOP;
    }
    pitches
}
