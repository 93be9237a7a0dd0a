//! Magnitude spectrum of a whole waveform and the features read from it
//!
//! The spectrum is computed once per analysis and shared by every
//! spectral feature. Bin `i` sits at `i * sample_rate / (2 * len)` Hz,
//! where `len = N / 2` is the number of magnitude bins kept.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

use crate::mapping::pitch_class;
use crate::model::{CHROMA_BINS, MFCC_COUNT, TONNETZ_DIMS};

/// Fraction of cumulative magnitude that defines the rolloff frequency
pub const ROLLOFF_FRACTION: f64 = 0.85;

/// Lowest filter center of the cepstral filter bank
const FILTER_BASE_HZ: f64 = 1000.0;
/// Half-width of each triangular filter, in bins
const FILTER_HALF_WIDTH: i64 = 10;
/// Added before the logarithm so empty filters stay finite
const LOG_FLOOR: f64 = 1e-10;

/// Magnitudes of DFT bins `0 .. N/2`
#[derive(Debug, Clone)]
pub struct Spectrum {
    magnitudes: Vec<f64>,
    sample_rate: f64,
}

impl Spectrum {
    /// Transform a waveform
    pub fn analyze(samples: &[f32], sample_rate: u32) -> Self {
        let bins = samples.len() / 2;
        let sample_rate = f64::from(sample_rate);

        if bins == 0 {
            return Self {
                magnitudes: Vec::new(),
                sample_rate,
            };
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(samples.len());
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .map(|&s| Complex::new(f64::from(s), 0.0))
            .collect();
        fft.process(&mut buffer);

        let magnitudes = buffer[..bins].iter().map(|c| c.norm()).collect();
        Self {
            magnitudes,
            sample_rate,
        }
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Center frequency of a bin in Hz
    pub fn bin_frequency(&self, bin: usize) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        bin as f64 * self.sample_rate / (self.len() * 2) as f64
    }

    /// Magnitude-weighted mean frequency; 0 for a silent spectrum
    pub fn centroid(&self) -> f64 {
        let (weighted, total) = self
            .magnitudes
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(weighted, total), (i, &m)| {
                (weighted + self.bin_frequency(i) * m, total + m)
            });
        if total > 0.0 {
            weighted / total
        } else {
            0.0
        }
    }

    /// Frequency below which `fraction` of the cumulative magnitude lies
    ///
    /// Falls back to Nyquist when the threshold is never reached.
    pub fn rolloff(&self, fraction: f64) -> f64 {
        let threshold = self.magnitudes.iter().sum::<f64>() * fraction;
        let mut cumulative = 0.0;
        for (i, &m) in self.magnitudes.iter().enumerate() {
            cumulative += m;
            if cumulative >= threshold {
                return self.bin_frequency(i);
            }
        }
        self.sample_rate / 2.0
    }

    /// Frequency of the strongest bin above DC
    pub fn fundamental(&self) -> f64 {
        let mut best = 0.0;
        let mut best_bin = 0;
        for (i, &m) in self.magnitudes.iter().enumerate().skip(1) {
            if m > best {
                best = m;
                best_bin = i;
            }
        }
        self.bin_frequency(best_bin)
    }

    /// Magnitudes at harmonics 2..=10 of the fundamental
    ///
    /// Harmonics whose bin falls past the end of the spectrum are skipped.
    pub fn harmonics(&self) -> Vec<f64> {
        let fundamental = self.fundamental();
        let len = self.len() as f64;

        (2..=10)
            .filter_map(|harmonic| {
                let bin = (fundamental * f64::from(harmonic) * len / self.sample_rate).round();
                self.magnitudes.get(bin as usize).copied()
            })
            .collect()
    }

    /// Magnitude folded into 12 pitch classes relative to A
    pub fn chroma(&self) -> [f64; CHROMA_BINS] {
        let mut chroma = [0.0; CHROMA_BINS];
        for (i, &m) in self.magnitudes.iter().enumerate().skip(1) {
            let class = pitch_class(self.bin_frequency(i));
            if class >= 0 {
                chroma[class as usize] += m;
            }
        }
        chroma
    }

    /// Log energies of a semitone-spaced triangular filter bank
    pub fn mfcc(&self) -> [f64; MFCC_COUNT] {
        let len = self.len() as i64;
        let mut coefficients = [0.0; MFCC_COUNT];

        for (i, coefficient) in coefficients.iter_mut().enumerate() {
            let center_hz = FILTER_BASE_HZ * 2f64.powf(i as f64 / 12.0);
            let center = (center_hz * (len * 2) as f64 / self.sample_rate).round() as i64;

            let start = (center - FILTER_HALF_WIDTH).max(0);
            let end = (center + FILTER_HALF_WIDTH).min(len);
            let energy: f64 = (start..end)
                .map(|j| {
                    let weight = 1.0 - (j - center).abs() as f64 / FILTER_HALF_WIDTH as f64;
                    self.magnitudes[j as usize] * weight
                })
                .sum();

            *coefficient = (energy + LOG_FLOOR).ln();
        }
        coefficients
    }
}

/// Project a chroma vector onto three circles of fifths, thirds and tritones
pub fn tonnetz(chroma: &[f64; CHROMA_BINS]) -> [f64; TONNETZ_DIMS] {
    let mut coords = [0.0; TONNETZ_DIMS];
    for (i, &energy) in chroma.iter().enumerate() {
        let angle = i as f64 * PI / 6.0;
        for ring in 0..3 {
            let theta = angle * (ring + 1) as f64;
            coords[ring * 2] += energy * theta.cos();
            coords[ring * 2 + 1] += energy * theta.sin();
        }
    }
    coords
}
