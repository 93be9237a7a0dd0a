//! Feature vectors produced by the analyzers

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Number of cepstral coefficients
pub const MFCC_COUNT: usize = 13;
/// Number of pitch classes
pub const CHROMA_BINS: usize = 12;
/// Number of tonal-centroid coordinates
pub const TONNETZ_DIMS: usize = 6;

/// Summary of one mono waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    /// Beats per minute
    pub tempo: f64,
    /// Per-window pitch estimates in Hz; silent windows are omitted
    pub pitch: Vec<f64>,
    /// RMS of the whole signal
    pub volume: f64,
    /// Spectrum magnitude at harmonics 2..=10 of the fundamental
    pub harmony: Vec<f64>,
    /// Short-window energies
    pub rhythm: Vec<f64>,
    /// Lowest spectrum magnitude bins
    pub frequency: Vec<f64>,
    /// Hz
    pub spectral_centroid: f64,
    /// Hz
    pub spectral_rolloff: f64,
    pub mfcc: [f64; MFCC_COUNT],
    pub chroma: [f64; CHROMA_BINS],
    pub tonnetz: [f64; TONNETZ_DIMS],
}

/// Summary of one RGBA image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFeatures {
    /// Most frequent quantized colors, most common first
    pub dominant_colors: Vec<Rgb>,
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    /// 360-bin hue histogram
    pub hue: Vec<u32>,
    pub texture: f64,
    pub edges: f64,
    pub complexity: f64,
    /// 256-bin grayscale histogram
    pub color_histogram: Vec<u32>,
    /// Per 8x8 block grayscale standard deviation
    pub spatial_frequency: Vec<f64>,
}
