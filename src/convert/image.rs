//! Image features → audio, taste, smell and visual

use super::audio::audio_to_visual;
use crate::mapping::{LogarithmicMapper, Mapper};
use crate::model::{
    AudioFeatures, AudioParameters, ImageFeatures, SmellProfile, TasteProfile, Timbre,
    VisualParameters, CHROMA_BINS, MFCC_COUNT, TONNETZ_DIMS,
};

/// Hue 0..360 spans two octaves above A4
fn hue_pitch() -> LogarithmicMapper {
    LogarithmicMapper::new("hue", 0.0, 360.0, 440.0, 1760.0)
}

/// Convert image features to synthesis parameters
///
/// One partial per dominant color; later colors are progressively quieter.
pub fn image_to_audio(features: &ImageFeatures) -> AudioParameters {
    let mapper = hue_pitch();
    let (frequency, amplitude) = features
        .dominant_colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            (
                mapper.map(color.hue()),
                features.brightness * (1.0 - i as f64 * 0.1),
            )
        })
        .unzip();

    AudioParameters {
        frequency,
        amplitude,
        harmonics: features.spatial_frequency.iter().take(10).map(|sf| sf / 100.0).collect(),
        tempo: (60.0 + features.complexity * 120.0).round(),
        timbre: texture_timbre(features.texture),
        duration: 5.0 + features.edges * 10.0,
    }
}

/// Convert image features to a taste profile
pub fn image_to_taste(features: &ImageFeatures) -> TasteProfile {
    let sweet = hue_score(features, |hue| {
        if (0.0..=60.0).contains(&hue) || (300.0..=360.0).contains(&hue) {
            0.8
        } else if (60.0..=120.0).contains(&hue) {
            0.3
        } else {
            0.0
        }
    });

    TasteProfile {
        sweet,
        sour: features.contrast * 0.8,
        bitter: (1.0 - features.brightness) * 0.7,
        salty: features.edges * 0.6,
        umami: features.texture * 0.5,
        intensity: features.saturation,
        temperature: features.brightness,
        texture: features.texture,
    }
}

/// Convert image features to a smell profile
pub fn image_to_smell(features: &ImageFeatures) -> SmellProfile {
    let floral = hue_score(features, |hue| {
        if (270.0..=330.0).contains(&hue) {
            0.9
        } else if (330.0..=360.0).contains(&hue) {
            0.6
        } else {
            0.0
        }
    });

    SmellProfile {
        floral,
        fruity: features.saturation,
        woody: features.texture,
        spicy: features.contrast * 0.7,
        fresh: features.brightness * 0.8,
        earthy: (1.0 - features.brightness) * features.texture,
        chemical: features.complexity * 0.3,
        intensity: (features.saturation + features.contrast) / 2.0,
    }
}

/// Convert image features to procedural-art parameters
///
/// Routes the image through the audio → visual mapping by standing in
/// image statistics for the audio features it reads.
pub fn image_to_visual(features: &ImageFeatures) -> VisualParameters {
    audio_to_visual(&as_audio_features(features))
}

fn as_audio_features(features: &ImageFeatures) -> AudioFeatures {
    let mut mfcc = [0.0; MFCC_COUNT];
    for (slot, &count) in mfcc.iter_mut().zip(&features.color_histogram) {
        *slot = f64::from(count) / 100.0;
    }

    AudioFeatures {
        tempo: 120.0,
        pitch: vec![440.0],
        volume: features.brightness,
        harmony: vec![features.contrast],
        rhythm: vec![features.texture],
        frequency: features.spatial_frequency.iter().take(10).copied().collect(),
        spectral_centroid: features.complexity * 2000.0,
        spectral_rolloff: 4000.0,
        mfcc,
        chroma: [0.1; CHROMA_BINS],
        tonnetz: [0.1; TONNETZ_DIMS],
    }
}

fn texture_timbre(texture: f64) -> Timbre {
    if texture < 0.25 {
        Timbre::Sine
    } else if texture < 0.5 {
        Timbre::Triangle
    } else if texture < 0.75 {
        Timbre::Sawtooth
    } else {
        Timbre::Square
    }
}

/// Mean per-color score over the dominant colors, capped at 1; 0 without colors
fn hue_score(features: &ImageFeatures, score: impl Fn(f64) -> f64) -> f64 {
    let colors = &features.dominant_colors;
    if colors.is_empty() {
        return 0.0;
    }
    let total: f64 = colors.iter().map(|c| score(c.hue())).sum();
    (total / colors.len() as f64).min(1.0)
}
