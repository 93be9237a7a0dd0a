//! Waveform feature extraction

use tracing::debug;

use super::pitch::pitch_track;
use super::spectrum::{tonnetz, Spectrum, ROLLOFF_FRACTION};
use super::AnalysisError;
use crate::mapping::stats;
use crate::model::AudioFeatures;

/// Reported when fewer than two onsets are found
pub const DEFAULT_TEMPO: f64 = 120.0;
/// Number of rhythm energies in every feature vector
pub const RHYTHM_SLOTS: usize = 16;
/// Number of spectrum bins exported as `frequency`
pub const FREQUENCY_BINS: usize = 64;

/// Energy ratio between consecutive windows that counts as an onset
const ONSET_RATIO: f64 = 1.3;
/// Seconds per tempo window
const TEMPO_WINDOW_SECS: f64 = 0.1;
/// Seconds per rhythm window
const RHYTHM_WINDOW_SECS: f64 = 0.05;

/// Extracts `AudioFeatures` from a mono waveform
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioAnalyzer;

impl AudioAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze samples in `[-1, 1]` recorded at `sample_rate` Hz
    pub fn analyze(&self, samples: &[f32], sample_rate: u32) -> Result<AudioFeatures, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptySignal);
        }
        if sample_rate == 0 {
            return Err(AnalysisError::ZeroSampleRate);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }

        let rate = f64::from(sample_rate);
        let spectrum = Spectrum::analyze(samples, sample_rate);
        let chroma = spectrum.chroma();

        let features = AudioFeatures {
            tempo: tempo(samples, rate),
            pitch: pitch_track(samples, rate),
            volume: stats::rms(samples),
            harmony: spectrum.harmonics(),
            rhythm: rhythm(samples, rate),
            frequency: spectrum.magnitudes().iter().take(FREQUENCY_BINS).copied().collect(),
            spectral_centroid: spectrum.centroid(),
            spectral_rolloff: spectrum.rolloff(ROLLOFF_FRACTION),
            mfcc: spectrum.mfcc(),
            chroma,
            tonnetz: tonnetz(&chroma),
        };

        debug!(
            samples = samples.len(),
            sample_rate,
            tempo = features.tempo,
            pitches = features.pitch.len(),
            volume = features.volume,
            centroid = features.spectral_centroid,
            "analyzed waveform"
        );
        Ok(features)
    }
}

/// Tempo from the mean spacing of energy onsets
fn tempo(samples: &[f32], sample_rate: f64) -> f64 {
    let window = ((sample_rate * TEMPO_WINDOW_SECS) as usize).max(1);
    let hop = (window / 2).max(1);

    let mut onsets = Vec::new();
    let mut previous: Option<f64> = None;
    let mut start = 0;
    while start + window < samples.len() {
        let energy = stats::rms(&samples[start..start + window]);
        if let Some(prev) = previous {
            if energy > prev * ONSET_RATIO {
                onsets.push(start as f64 / sample_rate);
            }
        }
        previous = Some(energy);
        start += hop;
    }

    if onsets.len() < 2 {
        return DEFAULT_TEMPO;
    }

    let intervals: Vec<f64> = onsets.windows(2).map(|w| w[1] - w[0]).collect();
    (60.0 / stats::mean(&intervals)).round()
}

/// RMS of consecutive short windows, padded or cut to `RHYTHM_SLOTS`
fn rhythm(samples: &[f32], sample_rate: f64) -> Vec<f64> {
    let window = ((sample_rate * RHYTHM_WINDOW_SECS) as usize).max(1);

    let mut energies: Vec<f64> = samples
        .chunks_exact(window)
        .enumerate()
        .take_while(|(i, _)| (i + 1) * window < samples.len())
        .map(|(_, chunk)| stats::rms(chunk))
        .take(RHYTHM_SLOTS)
        .collect();
    energies.resize(RHYTHM_SLOTS, 0.0);
    energies
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, sample_rate: u32, secs: f64) -> Vec<f32> {
        let len = (f64::from(sample_rate) * secs) as usize;
        (0..len)
            .map(|i| (0.5 * (2.0 * PI * freq * i as f64 / f64::from(sample_rate)).sin()) as f32)
            .collect()
    }

    #[test]
    fn test_rejects_invalid_input() {
        let analyzer = AudioAnalyzer::new();

        assert_eq!(analyzer.analyze(&[], 44100), Err(AnalysisError::EmptySignal));
        assert_eq!(analyzer.analyze(&[0.0; 8], 0), Err(AnalysisError::ZeroSampleRate));
        assert_eq!(
            analyzer.analyze(&[0.0, 0.1, f32::NAN], 44100),
            Err(AnalysisError::NonFiniteSample { index: 2 })
        );
    }

    #[test]
    fn test_silent_waveform_defaults() {
        let features = AudioAnalyzer::new().analyze(&vec![0.0; 44100], 44100).unwrap();

        assert_eq!(features.tempo, DEFAULT_TEMPO);
        assert!(features.pitch.is_empty());
        assert_eq!(features.volume, 0.0);
        assert_eq!(features.spectral_centroid, 0.0);
        assert_eq!(features.rhythm, vec![0.0; RHYTHM_SLOTS]);
        assert_eq!(features.frequency.len(), FREQUENCY_BINS);
    }

    #[test]
    fn test_a440_sine() {
        let samples = sine(440.0, 44100, 0.5);
        let features = AudioAnalyzer::new().analyze(&samples, 44100).unwrap();

        assert!(!features.pitch.is_empty());
        assert!(features.pitch.iter().all(|p| (p - 440.0).abs() < 5.0));
        assert!((features.volume - 0.5 / 2f64.sqrt()).abs() < 1e-3);
        assert_eq!(features.tempo, DEFAULT_TEMPO);
        assert!((features.spectral_centroid - 440.0).abs() < 100.0);
    }

    #[test]
    fn test_input_is_untouched_and_deterministic() {
        let samples = sine(330.0, 22050, 0.25);
        let copy = samples.clone();
        let analyzer = AudioAnalyzer::new();

        let a = analyzer.analyze(&samples, 22050).unwrap();
        let b = analyzer.analyze(&samples, 22050).unwrap();
        assert_eq!(samples, copy);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tempo_from_clicks() {
        // A 50 ms burst every half second at 1 kHz
        let sample_rate = 1000.0;
        let samples: Vec<f32> = (0..4000)
            .map(|i| if i % 500 < 50 { 0.8 } else { 0.0 })
            .collect();

        assert_eq!(tempo(&samples, sample_rate), 120.0);
    }

    #[test]
    fn test_rhythm_length_is_fixed() {
        let short = rhythm(&[0.5; 10], 1000.0);
        assert_eq!(short.len(), RHYTHM_SLOTS);
        // 10 samples, 50-sample windows: none fit
        assert!(short.iter().all(|&e| e == 0.0));

        let long = rhythm(&vec![0.5; 10_000], 1000.0);
        assert_eq!(long.len(), RHYTHM_SLOTS);
        assert!(long.iter().all(|&e| (e - 0.5).abs() < 1e-9));
    }

    #[test]
    fn test_rhythm_strict_bound() {
        // The window ending exactly at the last sample is not taken
        let energies = rhythm(&[0.5; 150], 1000.0);
        assert_eq!(&energies[..3], &[0.5, 0.5, 0.0]);
    }
}
