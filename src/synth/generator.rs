//! Offline additive synthesis of `AudioParameters` into WAV bytes

use anyhow::Result;
use std::f64::consts::PI;
use std::path::Path;
use tracing::debug;

use crate::media::wav::{encode_pcm16, write_pcm16};
use crate::model::AudioParameters;

/// Longest rendered clip in seconds
pub const MAX_DURATION_SECS: f64 = 10.0;

/// Partials beyond this many are ignored
pub const MAX_PARTIALS: usize = 8;

/// Level used for a partial with a missing or zero amplitude
const DEFAULT_PARTIAL_LEVEL: f64 = 0.05;

/// Per-partial level ceiling
const PARTIAL_LEVEL_CAP: f64 = 0.1;

/// Exponential decay rate of the shared envelope, per second
const DECAY_RATE: f64 = 2.0;

/// Renders parameter sets to sample buffers
#[derive(Debug, Clone, Copy)]
pub struct AudioGenerator {
    sample_rate: u32,
}

impl AudioGenerator {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Render a decaying sum of up to eight partials
    pub fn generate_samples(&self, params: &AudioParameters) -> Vec<f64> {
        let sr = f64::from(self.sample_rate);
        let duration = if params.duration.is_nan() {
            0.0
        } else {
            params.duration.clamp(0.0, MAX_DURATION_SECS)
        };
        let len = (duration * sr) as usize;

        let partials: Vec<(f64, f64)> = params
            .frequency
            .iter()
            .take(MAX_PARTIALS)
            .enumerate()
            .map(|(i, &freq)| (freq, partial_level(params.amplitude.get(i).copied())))
            .collect();

        (0..len)
            .map(|i| {
                let t = i as f64 / sr;
                let envelope = (-DECAY_RATE * t).exp();
                let sum: f64 = partials
                    .iter()
                    .map(|&(freq, level)| level * envelope * (2.0 * PI * freq * t).sin())
                    .sum();
                sum.clamp(-1.0, 1.0)
            })
            .collect()
    }

    /// Render and package as a mono 16-bit PCM WAV container
    pub fn generate_audio_file(&self, params: &AudioParameters) -> Result<Vec<u8>> {
        let samples = self.generate_samples(params);
        debug!(
            samples = samples.len(),
            partials = params.frequency.len().min(MAX_PARTIALS),
            sample_rate = self.sample_rate,
            "rendered audio"
        );
        encode_pcm16(&samples, self.sample_rate)
    }

    /// Render straight to a WAV file on disk
    pub fn write_audio_file(&self, params: &AudioParameters, path: &Path) -> Result<()> {
        let samples = self.generate_samples(params);
        debug!(samples = samples.len(), ?path, "writing audio");
        write_pcm16(path, &samples, self.sample_rate)
    }
}

fn partial_level(amplitude: Option<f64>) -> f64 {
    match amplitude {
        Some(a) if a != 0.0 && !a.is_nan() => a.min(PARTIAL_LEVEL_CAP),
        _ => DEFAULT_PARTIAL_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timbre;
    use hound::{SampleFormat, WavReader};
    use std::io::Cursor;

    fn params(frequency: Vec<f64>, amplitude: Vec<f64>, duration: f64) -> AudioParameters {
        AudioParameters {
            frequency,
            amplitude,
            harmonics: vec![],
            tempo: 120.0,
            timbre: Timbre::Sine,
            duration,
        }
    }

    #[test]
    fn test_sample_count_follows_duration() {
        let generator = AudioGenerator::new(8000);
        assert_eq!(generator.generate_samples(&params(vec![440.0], vec![0.5], 0.5)).len(), 4000);
        assert_eq!(generator.generate_samples(&params(vec![440.0], vec![0.5], 0.0)).len(), 0);
        assert_eq!(generator.generate_samples(&params(vec![440.0], vec![0.5], -3.0)).len(), 0);
    }

    #[test]
    fn test_duration_capped_at_ten_seconds() {
        let generator = AudioGenerator::new(8000);
        let samples = generator.generate_samples(&params(vec![440.0], vec![0.5], 60.0));
        assert_eq!(samples.len(), 80000);
    }

    #[test]
    fn test_partial_levels() {
        assert_eq!(partial_level(Some(0.8)), 0.1);
        assert_eq!(partial_level(Some(0.02)), 0.02);
        assert_eq!(partial_level(Some(0.0)), 0.05);
        assert_eq!(partial_level(Some(f64::NAN)), 0.05);
        assert_eq!(partial_level(None), 0.05);
    }

    #[test]
    fn test_single_partial_peak() {
        let generator = AudioGenerator::new(8000);
        // 1000 Hz at 8 kHz: sample 2 sits at the top of the first cycle
        let samples = generator.generate_samples(&params(vec![1000.0], vec![1.0], 0.01));
        let expected = 0.1 * (-2.0 * 2.0 / 8000.0f64).exp();
        assert!((samples[2] - expected).abs() < 1e-9);
        assert!(samples[0].abs() < 1e-12);
    }

    #[test]
    fn test_only_eight_partials_used() {
        let generator = AudioGenerator::new(8000);
        let eight = generator.generate_samples(&params(vec![300.0; 8], vec![0.1; 8], 0.05));
        let twelve = generator.generate_samples(&params(vec![300.0; 12], vec![0.1; 12], 0.05));
        assert_eq!(eight, twelve);
    }

    #[test]
    fn test_output_is_clamped() {
        let generator = AudioGenerator::new(8000);
        let samples = generator.generate_samples(&params(vec![440.0; 8], vec![0.9; 8], 0.1));
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_wav_container() {
        let generator = AudioGenerator::new(8000);
        let bytes = generator
            .generate_audio_file(&params(vec![440.0, 660.0], vec![0.8, 0.3], 0.25))
            .unwrap();

        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(reader.len(), 2000);
    }

    #[test]
    fn test_deterministic() {
        let generator = AudioGenerator::new(8000);
        let p = params(vec![220.0, 330.0, 550.0], vec![0.4, 0.0, 0.2], 0.1);
        assert_eq!(
            generator.generate_audio_file(&p).unwrap(),
            generator.generate_audio_file(&p).unwrap()
        );
    }
}
