//! Taste profile → visual, audio and smell

use super::palette::{forms_or_flowing, swatches, FORM_LEVEL};
use super::rhythm::{pulse_sequence, Wave};
use super::tones::ToneBank;
use crate::model::{AudioParameters, FormType, SmellProfile, TasteProfile, Timbre, VisualParameters};

const HARMONICS: [f64; 4] = [0.5, 0.3, 0.2, 0.1];

pub fn taste_to_visual(taste: &TasteProfile) -> VisualParameters {
    VisualParameters {
        colors: swatches(&[
            (taste.sweet, ["#f472b6", "#fbbf24"]),
            (taste.sour, ["#22d3ee", "#84cc16"]),
            (taste.bitter, ["#6b21a8", "#1f2937"]),
            (taste.umami, ["#059669", "#92400e"]),
            (taste.salty, ["#e5e7eb", "#9ca3af"]),
        ]),
        movement: taste.sour * 0.8 + taste.bitter * 0.3,
        intensity: taste.intensity,
        complexity: (taste.umami + taste.bitter) * 0.5,
        balance: taste.sweet * 0.6 + taste.salty * 0.4,
        rhythm: pulse_sequence(
            taste.intensity,
            &[
                Wave::new(taste.sweet, 0.5, 0.3),
                Wave::new(taste.sour, 1.2, 0.4),
                Wave::new(taste.bitter, 0.3, 0.2),
            ],
        ),
        forms: forms_or_flowing(&[
            (taste.sweet > FORM_LEVEL, FormType::Organic),
            (taste.sour > FORM_LEVEL, FormType::Geometric),
            (taste.bitter > FORM_LEVEL, FormType::Abstract),
            (taste.texture > FORM_LEVEL, FormType::Flowing),
        ]),
        texture: taste.texture,
        temperature: taste.temperature,
    }
}

pub fn taste_to_audio(taste: &TasteProfile) -> AudioParameters {
    let timbre = if taste.texture > 0.5 {
        Timbre::Sawtooth
    } else {
        Timbre::Sine
    };

    ToneBank::new()
        .tone(taste.sweet, 523.25, 200.0, 0.8)
        .tone(taste.sour, 1046.5, 400.0, 0.6)
        .tone(taste.bitter, 146.83, 100.0, 0.7)
        .tone(taste.salty, 329.63, 150.0, 0.5)
        .tone(taste.umami, 220.0, 180.0, 0.6)
        .into_parameters(
            &HARMONICS,
            (60.0 + taste.intensity * 120.0).round(),
            timbre,
            3.0 + taste.intensity * 5.0,
        )
}

pub fn taste_to_smell(taste: &TasteProfile) -> SmellProfile {
    SmellProfile {
        floral: taste.sweet * 0.8,
        fruity: (taste.sweet + taste.sour) / 2.0,
        woody: taste.bitter * 0.7,
        spicy: taste.sour * 0.6,
        fresh: (taste.sour + taste.salty) / 2.0,
        earthy: taste.umami * 0.8,
        chemical: taste.bitter * 0.4,
        intensity: taste.intensity,
    }
}
