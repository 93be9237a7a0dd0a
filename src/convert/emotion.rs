//! Emotional state → visual, taste, smell and audio

use super::palette::{forms_or_flowing, swatches, FORM_LEVEL};
use super::rhythm::{pulse_sequence, Wave};
use super::tones::ToneBank;
use crate::model::{
    AudioParameters, EmotionalState, FormType, SmellProfile, TasteProfile, Timbre,
    VisualParameters,
};

const HARMONICS: [f64; 4] = [0.7, 0.5, 0.3, 0.2];

pub fn emotion_to_visual(emotion: &EmotionalState) -> VisualParameters {
    VisualParameters {
        colors: swatches(&[
            (emotion.joy, ["#fbbf24", "#f59e0b"]),
            (emotion.melancholy, ["#1e40af", "#3730a3"]),
            (emotion.anger, ["#dc2626", "#b91c1c"]),
            (emotion.peace, ["#059669", "#047857"]),
            (emotion.excitement, ["#7c2d12", "#ea580c"]),
            (emotion.contemplation, ["#7c3aed", "#5b21b6"]),
        ]),
        movement: emotion.excitement * 0.7 + emotion.anger * 0.8,
        intensity: emotion.arousal(),
        complexity: emotion.contemplation * 0.8 + emotion.melancholy * 0.6,
        balance: emotion.peace * 0.9 + emotion.contemplation * 0.5,
        rhythm: pulse_sequence(
            emotion.excitement,
            &[
                Wave::new(emotion.joy, 0.8, 0.4),
                Wave::new(emotion.anger, 2.0, 0.5),
                Wave::new(emotion.peace, 0.2, 0.3),
            ],
        ),
        forms: forms_or_flowing(&[
            (emotion.peace > FORM_LEVEL, FormType::Organic),
            (emotion.anger > FORM_LEVEL, FormType::Geometric),
            (emotion.contemplation > FORM_LEVEL, FormType::Abstract),
            (emotion.joy > FORM_LEVEL, FormType::Flowing),
        ]),
        texture: emotion.contemplation,
        temperature: (emotion.joy + emotion.anger) / 2.0,
    }
}

pub fn emotion_to_taste(emotion: &EmotionalState) -> TasteProfile {
    TasteProfile {
        sweet: emotion.joy * 0.9,
        sour: emotion.anger * 0.6 + emotion.excitement * 0.3,
        bitter: emotion.melancholy * 0.8 + emotion.anger * 0.4,
        salty: emotion.contemplation * 0.5,
        umami: emotion.peace * 0.7,
        intensity: emotion.arousal(),
        temperature: (emotion.joy + emotion.anger) / 2.0,
        texture: emotion.contemplation * 0.8,
    }
}

pub fn emotion_to_smell(emotion: &EmotionalState) -> SmellProfile {
    SmellProfile {
        floral: emotion.joy * 0.8 + emotion.peace * 0.6,
        fruity: emotion.joy * 0.7 + emotion.excitement * 0.5,
        woody: emotion.contemplation * 0.8 + emotion.peace * 0.4,
        spicy: emotion.anger * 0.9 + emotion.excitement * 0.6,
        fresh: emotion.peace * 0.9 + emotion.joy * 0.5,
        earthy: emotion.melancholy * 0.7 + emotion.contemplation * 0.6,
        chemical: emotion.anger * 0.5,
        intensity: emotion.arousal(),
    }
}

pub fn emotion_to_audio(emotion: &EmotionalState) -> AudioParameters {
    let timbre = if emotion.anger > 0.5 {
        Timbre::Square
    } else {
        Timbre::Sine
    };

    ToneBank::new()
        .tone(emotion.joy, 523.25, 400.0, 0.8)
        .tone(emotion.melancholy, 196.0, 150.0, 0.6)
        .tone(emotion.anger, 1174.66, 500.0, 0.7)
        .tone(emotion.peace, 329.63, 200.0, 0.5)
        .tone(emotion.excitement, 880.0, 600.0, 0.9)
        .tone(emotion.contemplation, 246.94, 180.0, 0.4)
        .into_parameters(
            &HARMONICS,
            (60.0 + (emotion.excitement + emotion.anger) * 80.0).round(),
            timbre,
            4.0 + (emotion.joy + emotion.peace) * 4.0,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_joy_audio() {
        let joy = EmotionalState {
            joy: 1.0,
            ..Default::default()
        };
        let params = emotion_to_audio(&joy);

        assert_eq!(params.frequency.len(), 1);
        assert!((params.frequency[0] - 923.25).abs() < 1e-9);
        assert!((params.amplitude[0] - 0.8).abs() < 1e-9);
        assert_eq!(params.tempo, 60.0);
        assert_eq!(params.timbre, Timbre::Sine);
        assert_eq!(params.duration, 8.0);
    }

    #[test]
    fn test_neutral_audio_falls_back() {
        let params = emotion_to_audio(&EmotionalState::default());

        assert_eq!(params.frequency, vec![440.0]);
        assert_eq!(params.amplitude, vec![0.3]);
    }

    #[test]
    fn test_anger_is_square_and_fast() {
        let rage = EmotionalState {
            anger: 1.0,
            excitement: 0.5,
            ..Default::default()
        };
        let params = emotion_to_audio(&rage);

        assert_eq!(params.timbre, Timbre::Square);
        assert_eq!(params.tempo, 180.0);
        assert_eq!(params.frequency.len(), 2);
    }

    #[test]
    fn test_visual_from_peace() {
        let calm = EmotionalState {
            peace: 0.9,
            excitement: 0.5,
            ..Default::default()
        };
        let visual = emotion_to_visual(&calm);

        assert_eq!(visual.colors, vec!["#059669", "#047857", "#7c2d12", "#ea580c"]);
        assert_eq!(visual.forms, vec![FormType::Organic]);
        assert_eq!(visual.rhythm.len(), 16);
        assert!((visual.balance - 0.81).abs() < 1e-9);
    }

    #[test]
    fn test_taste_and_smell_tables() {
        let mixed = EmotionalState {
            joy: 0.5,
            melancholy: 0.5,
            anger: 0.5,
            peace: 0.5,
            excitement: 0.5,
            contemplation: 0.5,
        };
        let taste = emotion_to_taste(&mixed);
        let smell = emotion_to_smell(&mixed);

        assert!((taste.bitter - 0.6).abs() < 1e-9);
        assert!((taste.intensity - 0.5).abs() < 1e-9);
        assert!((smell.spicy - 0.75).abs() < 1e-9);
        assert!((smell.chemical - 0.25).abs() < 1e-9);
    }
}
