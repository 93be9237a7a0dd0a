//! Smell profile → visual, audio and taste

use super::palette::{forms_or_flowing, swatches, FORM_LEVEL};
use super::rhythm::{pulse_sequence, Wave};
use super::tones::ToneBank;
use crate::model::{AudioParameters, FormType, SmellProfile, TasteProfile, Timbre, VisualParameters};

const HARMONICS: [f64; 4] = [0.6, 0.4, 0.3, 0.2];

pub fn smell_to_visual(smell: &SmellProfile) -> VisualParameters {
    VisualParameters {
        colors: swatches(&[
            (smell.floral, ["#ec4899", "#f97316"]),
            (smell.fruity, ["#f59e0b", "#84cc16"]),
            (smell.woody, ["#92400e", "#451a03"]),
            (smell.spicy, ["#dc2626", "#ea580c"]),
            (smell.fresh, ["#06b6d4", "#10b981"]),
            (smell.earthy, ["#78716c", "#57534e"]),
            (smell.chemical, ["#6b7280", "#374151"]),
        ]),
        movement: smell.spicy * 0.8 + smell.fresh * 0.6,
        intensity: smell.intensity,
        complexity: (smell.woody + smell.chemical) * 0.5,
        balance: smell.floral * 0.7 + smell.fresh * 0.5,
        rhythm: pulse_sequence(
            smell.intensity,
            &[
                Wave::new(smell.floral, 0.6, 0.3),
                Wave::new(smell.spicy, 1.5, 0.4),
                Wave::new(smell.fresh, 0.4, 0.3),
            ],
        ),
        forms: forms_or_flowing(&[
            (smell.floral > FORM_LEVEL, FormType::Organic),
            (smell.chemical > FORM_LEVEL, FormType::Geometric),
            (smell.woody > FORM_LEVEL, FormType::Abstract),
            (smell.fresh > FORM_LEVEL, FormType::Flowing),
        ]),
        texture: (smell.woody + smell.earthy) / 2.0,
        temperature: (smell.spicy + smell.fresh) / 2.0,
    }
}

pub fn smell_to_audio(smell: &SmellProfile) -> AudioParameters {
    let timbre = if smell.chemical > 0.5 {
        Timbre::Square
    } else {
        Timbre::Triangle
    };

    ToneBank::new()
        .tone(smell.floral, 659.25, 300.0, 0.7)
        .tone(smell.fruity, 783.99, 250.0, 0.8)
        .tone(smell.woody, 196.0, 120.0, 0.6)
        .tone(smell.spicy, 1174.66, 400.0, 0.5)
        .tone(smell.fresh, 880.0, 320.0, 0.7)
        .tone(smell.earthy, 164.81, 80.0, 0.6)
        .into_parameters(
            &HARMONICS,
            (70.0 + smell.intensity * 100.0).round(),
            timbre,
            4.0 + smell.intensity * 6.0,
        )
}

pub fn smell_to_taste(smell: &SmellProfile) -> TasteProfile {
    TasteProfile {
        sweet: (smell.floral + smell.fruity) / 2.0,
        sour: smell.fresh * 0.7,
        bitter: (smell.woody + smell.chemical) / 2.0,
        salty: smell.earthy * 0.6,
        umami: smell.earthy * 0.8,
        intensity: smell.intensity,
        temperature: (smell.spicy + smell.fresh) / 2.0,
        texture: smell.woody * 0.8,
    }
}
