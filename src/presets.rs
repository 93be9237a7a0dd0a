//! Named taste, smell and emotion presets

use crate::model::{EmotionalState, SmellProfile, TasteProfile};

/// A named profile
#[derive(Debug, Clone, Copy)]
pub struct Preset<T: 'static> {
    pub name: &'static str,
    pub profile: T,
}

/// Which preset table to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Taste,
    Smell,
    Emotion,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [PresetKind::Taste, PresetKind::Smell, PresetKind::Emotion];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetKind::Taste => "taste",
            PresetKind::Smell => "smell",
            PresetKind::Emotion => "emotion",
        }
    }

    /// Names in this table, in listing order
    pub fn names(self) -> Vec<&'static str> {
        match self {
            PresetKind::Taste => TASTE_PRESETS.iter().map(|p| p.name).collect(),
            PresetKind::Smell => SMELL_PRESETS.iter().map(|p| p.name).collect(),
            PresetKind::Emotion => EMOTION_PRESETS.iter().map(|p| p.name).collect(),
        }
    }
}

const fn taste(name: &'static str, l: [f64; 8]) -> Preset<TasteProfile> {
    let profile = TasteProfile {
        sweet: l[0],
        sour: l[1],
        bitter: l[2],
        salty: l[3],
        umami: l[4],
        intensity: l[5],
        temperature: l[6],
        texture: l[7],
    };
    Preset { name, profile }
}

const fn smell(name: &'static str, l: [f64; 8]) -> Preset<SmellProfile> {
    let profile = SmellProfile {
        floral: l[0],
        fruity: l[1],
        woody: l[2],
        spicy: l[3],
        fresh: l[4],
        earthy: l[5],
        chemical: l[6],
        intensity: l[7],
    };
    Preset { name, profile }
}

const fn emotion(name: &'static str, l: [f64; 6]) -> Preset<EmotionalState> {
    let profile = EmotionalState {
        joy: l[0],
        melancholy: l[1],
        anger: l[2],
        peace: l[3],
        excitement: l[4],
        contemplation: l[5],
    };
    Preset { name, profile }
}

// sweet, sour, bitter, salty, umami, intensity, temperature, texture
pub static TASTE_PRESETS: [Preset<TasteProfile>; 6] = [
    taste("Dark Chocolate", [0.3, 0.1, 0.8, 0.1, 0.2, 0.9, 0.3, 0.7]),
    taste("Fresh Strawberry", [0.9, 0.3, 0.0, 0.0, 0.1, 0.8, 0.6, 0.4]),
    taste("Aged Wine", [0.2, 0.6, 0.4, 0.1, 0.7, 0.9, 0.4, 0.3]),
    taste("Sea Salt Caramel", [0.8, 0.1, 0.2, 0.7, 0.3, 0.8, 0.7, 0.6]),
    taste("Espresso Coffee", [0.1, 0.3, 0.9, 0.0, 0.4, 1.0, 0.9, 0.2]),
    taste("Lemon Tart", [0.7, 0.9, 0.1, 0.1, 0.0, 0.8, 0.5, 0.5]),
];

// floral, fruity, woody, spicy, fresh, earthy, chemical, intensity
pub static SMELL_PRESETS: [Preset<SmellProfile>; 7] = [
    smell("Rose Garden", [0.9, 0.2, 0.1, 0.0, 0.7, 0.2, 0.0, 0.8]),
    smell("Ocean Breeze", [0.1, 0.0, 0.0, 0.0, 1.0, 0.2, 0.3, 0.7]),
    smell("Pine Forest", [0.0, 0.0, 0.9, 0.1, 0.6, 0.8, 0.0, 0.8]),
    smell("Vanilla Perfume", [0.6, 0.3, 0.4, 0.2, 0.3, 0.1, 0.1, 0.9]),
    smell("Cinnamon Spice", [0.1, 0.2, 0.6, 0.9, 0.2, 0.4, 0.0, 0.8]),
    smell("Fresh Lavender", [0.8, 0.1, 0.3, 0.0, 0.9, 0.2, 0.0, 0.7]),
    smell("Campfire Smoke", [0.0, 0.0, 0.8, 0.3, 0.1, 0.9, 0.6, 0.9]),
];

// joy, melancholy, anger, peace, excitement, contemplation
pub static EMOTION_PRESETS: [Preset<EmotionalState>; 8] = [
    emotion("Pure Love", [0.9, 0.1, 0.0, 0.8, 0.7, 0.3]),
    emotion("Deep Sadness", [0.1, 0.9, 0.2, 0.2, 0.0, 0.8]),
    emotion("Burning Rage", [0.0, 0.3, 1.0, 0.0, 0.8, 0.1]),
    emotion("Zen Meditation", [0.4, 0.1, 0.0, 1.0, 0.0, 0.9]),
    emotion("Euphoric Joy", [1.0, 0.0, 0.0, 0.6, 0.9, 0.2]),
    emotion("Nostalgic Memory", [0.6, 0.7, 0.0, 0.5, 0.2, 0.8]),
    emotion("Creative Flow", [0.7, 0.2, 0.0, 0.6, 0.6, 0.9]),
    emotion("Anxious Worry", [0.2, 0.6, 0.4, 0.1, 0.7, 0.8]),
];

/// Case-insensitive match that also treats `-` and `_` as spaces
fn matches(preset: &str, query: &str) -> bool {
    let normalized = query.trim().replace(['-', '_'], " ");
    preset.eq_ignore_ascii_case(&normalized)
}

fn find<T: Copy>(table: &[Preset<T>], name: &str) -> Option<T> {
    table.iter().find(|p| matches(p.name, name)).map(|p| p.profile)
}

pub fn taste_preset(name: &str) -> Option<TasteProfile> {
    find(&TASTE_PRESETS, name)
}

pub fn smell_preset(name: &str) -> Option<SmellProfile> {
    find(&SMELL_PRESETS, name)
}

pub fn emotion_preset(name: &str) -> Option<EmotionalState> {
    find(&EMOTION_PRESETS, name)
}
