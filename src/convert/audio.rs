//! Audio features → visual, taste and smell

use super::palette::forms_or_flowing;
use crate::mapping::{stats, LinearMapper, Mapper, Scale};
use crate::model::{AudioFeatures, FormType, SmellProfile, TasteProfile, VisualParameters};

/// Spectral centroid that maps to a level of 1
const CENTROID_SCALE: f64 = 4000.0;
/// Cepstral coefficients that seed palette colors
const PALETTE_COEFFICIENTS: usize = 5;
/// Rhythm energies copied into visual parameters
const VISUAL_RHYTHM: usize = 16;

fn tempo_level(tempo: f64) -> f64 {
    LinearMapper::unit("tempo", 60.0, 180.0).map(tempo)
}

/// Convert audio features to procedural-art parameters
pub fn audio_to_visual(features: &AudioFeatures) -> VisualParameters {
    VisualParameters {
        colors: palette(features),
        movement: tempo_level(features.tempo),
        intensity: features.volume,
        complexity: features.spectral_centroid / CENTROID_SCALE,
        balance: harmony_balance(&features.harmony),
        rhythm: features.rhythm.iter().take(VISUAL_RHYTHM).copied().collect(),
        forms: forms_or_flowing(&[
            (features.harmony.len() > 5, FormType::Organic),
            (features.tempo > 120.0, FormType::Geometric),
            (features.volume > 0.7, FormType::Abstract),
            (features.spectral_centroid > 2000.0, FormType::Flowing),
        ]),
        texture: cepstral_texture(&features.mfcc),
        temperature: chroma_warmth(&features.chroma),
    }
}

/// Convert audio features to a taste profile
pub fn audio_to_taste(features: &AudioFeatures) -> TasteProfile {
    let umami = if features.harmony.is_empty() {
        0.0
    } else {
        let weighted: f64 = features
            .harmony
            .iter()
            .enumerate()
            .map(|(i, h)| h * (i + 1) as f64)
            .sum();
        (weighted / features.harmony.len() as f64 / 10.0).min(1.0)
    };

    TasteProfile {
        sweet: (share(&features.frequency, |m| m > 1000.0) * 2.0).min(1.0),
        sour: features.spectral_centroid / CENTROID_SCALE,
        bitter: (1.0 - features.volume) * 0.8,
        salty: (stats::variance(&features.rhythm) * 2.0).min(1.0),
        umami,
        intensity: features.volume,
        temperature: tempo_level(features.tempo),
        texture: cepstral_texture(&features.mfcc),
    }
}

/// Convert audio features to a smell profile
pub fn audio_to_smell(features: &AudioFeatures) -> SmellProfile {
    let high: Vec<f64> = features
        .frequency
        .iter()
        .copied()
        .filter(|&m| m > 2000.0)
        .collect();

    SmellProfile {
        floral: (stats::mean(&high) / CENTROID_SCALE).min(1.0),
        fruity: (stats::mean(&features.harmony) * 2.0).min(1.0),
        woody: (share(&features.frequency, |m| m < 500.0) * 2.0).min(1.0),
        spicy: features.spectral_centroid / CENTROID_SCALE,
        fresh: features.volume * 0.8,
        earthy: (share(&features.frequency, |m| m < 200.0) * 3.0).min(1.0),
        chemical: (stats::variance(&features.mfcc) / 5.0).min(1.0),
        intensity: (features.volume + features.spectral_centroid / CENTROID_SCALE) / 2.0,
    }
}

/// HSL colors from the leading cepstral coefficients plus the dominant pitch class
fn palette(features: &AudioFeatures) -> Vec<String> {
    let lightness = 50.0 + features.volume * 30.0;
    let mut colors: Vec<String> = features
        .mfcc
        .iter()
        .take(PALETTE_COEFFICIENTS)
        .enumerate()
        .map(|(i, c)| {
            let hue = (c.abs() * 30.0 + i as f64 * 60.0) % 360.0;
            let saturation = (c.abs() * 50.0 + 50.0).min(100.0);
            format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
        })
        .collect();

    let dominant = features
        .chroma
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0;
    colors.push(format!("hsl({}, 70%, 60%)", dominant * 30));
    colors
}

/// Fraction of values matching `predicate`; 0 for no values
fn share(values: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    let count = values.iter().filter(|&&v| predicate(v)).count();
    stats::ratio_or(count as f64, values.len() as f64, 0.0)
}

fn harmony_balance(harmony: &[f64]) -> f64 {
    if harmony.is_empty() {
        return 0.5;
    }
    1.0 - (stats::variance(harmony) / 1000.0).min(1.0)
}

pub(crate) fn cepstral_texture(mfcc: &[f64]) -> f64 {
    (stats::std_dev(mfcc) / 10.0).min(1.0)
}

/// Share of chroma energy on major-scale classes; 0.5 for silence
fn chroma_warmth(chroma: &[f64; 12]) -> f64 {
    let total: f64 = chroma.iter().sum();
    if total > 0.0 {
        Scale::major().weight_in(chroma) / total
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> AudioFeatures {
        AudioFeatures {
            tempo: 150.0,
            pitch: vec![440.0],
            volume: 0.4,
            harmony: vec![0.1, 0.2, 0.3],
            rhythm: vec![0.2; 16],
            frequency: vec![100.0, 300.0, 1500.0, 2500.0],
            spectral_centroid: 1200.0,
            spectral_rolloff: 3000.0,
            mfcc: [0.0; 13],
            chroma: [0.0; 12],
            tonnetz: [0.0; 6],
        }
    }

    #[test]
    fn test_visual_mapping() {
        let visual = audio_to_visual(&features());

        assert!((visual.movement - 0.75).abs() < 1e-9);
        assert_eq!(visual.intensity, 0.4);
        assert!((visual.complexity - 0.3).abs() < 1e-9);
        assert_eq!(visual.forms, vec![FormType::Geometric]);
        assert_eq!(visual.temperature, 0.5);
        assert_eq!(visual.texture, 0.0);
        assert_eq!(visual.rhythm.len(), 16);
    }

    #[test]
    fn test_palette_strings() {
        let mut f = features();
        f.mfcc[1] = -2.0;
        f.chroma[3] = 1.0;
        let colors = audio_to_visual(&f).colors;

        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], "hsl(0, 50%, 62%)");
        assert_eq!(colors[1], "hsl(120, 100%, 62%)");
        assert_eq!(colors[5], "hsl(90, 70%, 60%)");
    }

    #[test]
    fn test_movement_is_clamped() {
        let mut f = features();
        f.tempo = 400.0;
        assert_eq!(audio_to_visual(&f).movement, 1.0);
        f.tempo = 10.0;
        assert_eq!(audio_to_visual(&f).movement, 0.0);
    }

    #[test]
    fn test_empty_harmony_balance() {
        let mut f = features();
        f.harmony.clear();
        assert_eq!(audio_to_visual(&f).balance, 0.5);
        assert_eq!(audio_to_taste(&f).umami, 0.0);
        assert_eq!(audio_to_smell(&f).fruity, 0.0);
    }

    #[test]
    fn test_taste_mapping() {
        let taste = audio_to_taste(&features());

        // two of four magnitudes above 1000
        assert_eq!(taste.sweet, 1.0);
        assert!((taste.sour - 0.3).abs() < 1e-9);
        assert!((taste.bitter - 0.48).abs() < 1e-9);
        assert!(taste.salty.abs() < 1e-12);
        // (0.1 + 0.4 + 0.9) / 3 / 10
        assert!((taste.umami - 1.4 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_smell_mapping() {
        let smell = audio_to_smell(&features());

        assert!((smell.floral - 2500.0 / 4000.0).abs() < 1e-9);
        assert!((smell.woody - 1.0).abs() < 1e-9);
        assert!((smell.earthy - 0.75).abs() < 1e-9);
        assert!((smell.intensity - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_empty_spectrum_is_finite() {
        let mut f = features();
        f.frequency.clear();
        let taste = audio_to_taste(&f);
        let smell = audio_to_smell(&f);

        assert_eq!(taste.sweet, 0.0);
        assert_eq!(smell.floral, 0.0);
        assert_eq!(smell.woody, 0.0);
        assert_eq!(smell.earthy, 0.0);
    }

    #[test]
    fn test_major_chroma_is_warm() {
        let mut f = features();
        f.chroma[0] = 1.0;
        f.chroma[1] = 1.0;
        assert_eq!(audio_to_visual(&f).temperature, 0.5);
        f.chroma[1] = 0.0;
        assert_eq!(audio_to_visual(&f).temperature, 1.0);
    }
}
