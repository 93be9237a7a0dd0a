//! Conversion engine for Synesthesia
//!
//! Dispatches analysis, conversion and rendering by modality. The engine
//! holds only immutable configuration, so one instance can be shared
//! freely across threads.

mod modality;

pub use modality::{EngineError, Modality, ParseModalityError, SensoryInput, SensoryOutput};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::analysis::{AudioAnalyzer, ImageAnalyzer};
use crate::config::SynesthesiaConfig;
use crate::convert;
use crate::model::{
    AudioFeatures, AudioParameters, EmotionalState, GeneratedImageParams, ImageFeatures,
    SmellProfile, TasteProfile, VisualParameters,
};
use crate::synth::{AudioGenerator, PlaybackSession};

/// Every output derived from one input
///
/// Fields stay `None` where the source modality has no route to them. A
/// directly set profile is carried through in its own slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub source: Modality,
    pub visual: VisualParameters,
    pub taste: Option<TasteProfile>,
    pub smell: Option<SmellProfile>,
    pub emotion: Option<EmotionalState>,
    pub audio: Option<AudioParameters>,
    pub image: GeneratedImageParams,
}

/// The main conversion engine
#[derive(Debug, Clone)]
pub struct Engine {
    config: SynesthesiaConfig,
    audio_analyzer: AudioAnalyzer,
    image_analyzer: ImageAnalyzer,
    generator: AudioGenerator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SynesthesiaConfig::default())
    }
}

impl Engine {
    /// Create a new engine with the given configuration
    pub fn new(config: SynesthesiaConfig) -> Self {
        let generator = AudioGenerator::new(config.audio.sample_rate);
        Self {
            config,
            audio_analyzer: AudioAnalyzer::new(),
            image_analyzer: ImageAnalyzer::new(),
            generator,
        }
    }

    pub fn config(&self) -> &SynesthesiaConfig {
        &self.config
    }

    pub fn analyze_audio(&self, samples: &[f32], sample_rate: u32) -> Result<AudioFeatures, EngineError> {
        Ok(self.audio_analyzer.analyze(samples, sample_rate)?)
    }

    pub fn analyze_image(&self, pixels: &[u8], width: u32, height: u32) -> Result<ImageFeatures, EngineError> {
        Ok(self.image_analyzer.analyze(pixels, width, height)?)
    }

    pub fn audio_to_visual(&self, features: &AudioFeatures) -> VisualParameters {
        convert::audio_to_visual(features)
    }

    pub fn audio_to_taste(&self, features: &AudioFeatures) -> TasteProfile {
        convert::audio_to_taste(features)
    }

    pub fn audio_to_smell(&self, features: &AudioFeatures) -> SmellProfile {
        convert::audio_to_smell(features)
    }

    pub fn image_to_visual(&self, features: &ImageFeatures) -> VisualParameters {
        convert::image_to_visual(features)
    }

    pub fn image_to_audio(&self, features: &ImageFeatures) -> AudioParameters {
        convert::image_to_audio(features)
    }

    pub fn image_to_taste(&self, features: &ImageFeatures) -> TasteProfile {
        convert::image_to_taste(features)
    }

    pub fn image_to_smell(&self, features: &ImageFeatures) -> SmellProfile {
        convert::image_to_smell(features)
    }

    pub fn taste_to_visual(&self, taste: &TasteProfile) -> VisualParameters {
        convert::taste_to_visual(taste)
    }

    pub fn taste_to_audio(&self, taste: &TasteProfile) -> AudioParameters {
        convert::taste_to_audio(taste)
    }

    pub fn taste_to_smell(&self, taste: &TasteProfile) -> SmellProfile {
        convert::taste_to_smell(taste)
    }

    pub fn smell_to_visual(&self, smell: &SmellProfile) -> VisualParameters {
        convert::smell_to_visual(smell)
    }

    pub fn smell_to_audio(&self, smell: &SmellProfile) -> AudioParameters {
        convert::smell_to_audio(smell)
    }

    pub fn smell_to_taste(&self, smell: &SmellProfile) -> TasteProfile {
        convert::smell_to_taste(smell)
    }

    pub fn emotion_to_visual(&self, emotion: &EmotionalState) -> VisualParameters {
        convert::emotion_to_visual(emotion)
    }

    pub fn emotion_to_taste(&self, emotion: &EmotionalState) -> TasteProfile {
        convert::emotion_to_taste(emotion)
    }

    pub fn emotion_to_smell(&self, emotion: &EmotionalState) -> SmellProfile {
        convert::emotion_to_smell(emotion)
    }

    pub fn emotion_to_audio(&self, emotion: &EmotionalState) -> AudioParameters {
        convert::emotion_to_audio(emotion)
    }

    pub fn generate_image_params(&self, visual: &VisualParameters) -> GeneratedImageParams {
        convert::generate_image_params(visual)
    }

    /// Render parameters to WAV bytes at the configured sample rate
    pub fn generate_audio_file(&self, params: &AudioParameters) -> Result<Vec<u8>> {
        self.generator.generate_audio_file(params)
    }

    /// Render parameters to a WAV file at the configured sample rate
    pub fn render_audio_file(&self, params: &AudioParameters, path: &Path) -> Result<()> {
        self.generator.write_audio_file(params, path)
    }

    /// Start a playback session voiced by the configured playback settings
    pub fn playback_session(&self) -> PlaybackSession {
        PlaybackSession::new(self.config.playback.clone(), self.config.audio.sample_rate)
    }

    /// Visual parameters for any input
    pub fn visualize(&self, input: &SensoryInput) -> VisualParameters {
        match input {
            SensoryInput::Audio(f) => convert::audio_to_visual(f),
            SensoryInput::Image(f) => convert::image_to_visual(f),
            SensoryInput::Taste(t) => convert::taste_to_visual(t),
            SensoryInput::Smell(s) => convert::smell_to_visual(s),
            SensoryInput::Emotion(e) => convert::emotion_to_visual(e),
        }
    }

    /// Convert one input into one target modality
    ///
    /// A profile converted to its own modality is returned unchanged.
    /// Nothing converts into emotion, and analyzed audio features have no
    /// route to synthesis parameters.
    pub fn convert(&self, input: &SensoryInput, target: Modality) -> Result<SensoryOutput, EngineError> {
        let output = match (input, target) {
            (_, Modality::Visual) => SensoryOutput::Visual(self.visualize(input)),
            (_, Modality::Image) => {
                SensoryOutput::Image(convert::generate_image_params(&self.visualize(input)))
            }

            (SensoryInput::Audio(f), Modality::Taste) => SensoryOutput::Taste(convert::audio_to_taste(f)),
            (SensoryInput::Audio(f), Modality::Smell) => SensoryOutput::Smell(convert::audio_to_smell(f)),

            (SensoryInput::Image(f), Modality::Audio) => SensoryOutput::Audio(convert::image_to_audio(f)),
            (SensoryInput::Image(f), Modality::Taste) => SensoryOutput::Taste(convert::image_to_taste(f)),
            (SensoryInput::Image(f), Modality::Smell) => SensoryOutput::Smell(convert::image_to_smell(f)),

            (SensoryInput::Taste(t), Modality::Audio) => SensoryOutput::Audio(convert::taste_to_audio(t)),
            (SensoryInput::Taste(t), Modality::Taste) => SensoryOutput::Taste(*t),
            (SensoryInput::Taste(t), Modality::Smell) => SensoryOutput::Smell(convert::taste_to_smell(t)),

            (SensoryInput::Smell(s), Modality::Audio) => SensoryOutput::Audio(convert::smell_to_audio(s)),
            (SensoryInput::Smell(s), Modality::Taste) => SensoryOutput::Taste(convert::smell_to_taste(s)),
            (SensoryInput::Smell(s), Modality::Smell) => SensoryOutput::Smell(*s),

            (SensoryInput::Emotion(e), Modality::Audio) => SensoryOutput::Audio(convert::emotion_to_audio(e)),
            (SensoryInput::Emotion(e), Modality::Taste) => SensoryOutput::Taste(convert::emotion_to_taste(e)),
            (SensoryInput::Emotion(e), Modality::Smell) => SensoryOutput::Smell(convert::emotion_to_smell(e)),
            (SensoryInput::Emotion(e), Modality::Emotion) => SensoryOutput::Emotion(*e),

            (_, to) => {
                return Err(EngineError::Unsupported {
                    from: input.modality(),
                    to,
                })
            }
        };

        debug!(from = %input.modality(), to = %target, "converted");
        Ok(output)
    }

    /// Derive every output reachable from one input
    pub fn translate(&self, input: SensoryInput) -> Translation {
        let source = input.modality();
        let visual = self.visualize(&input);

        let (taste, smell, emotion, audio) = match input {
            SensoryInput::Audio(f) => (
                Some(convert::audio_to_taste(&f)),
                Some(convert::audio_to_smell(&f)),
                None,
                None,
            ),
            SensoryInput::Image(f) => (
                Some(convert::image_to_taste(&f)),
                Some(convert::image_to_smell(&f)),
                None,
                Some(convert::image_to_audio(&f)),
            ),
            SensoryInput::Taste(t) => (
                Some(t),
                Some(convert::taste_to_smell(&t)),
                None,
                Some(convert::taste_to_audio(&t)),
            ),
            SensoryInput::Smell(s) => (
                Some(convert::smell_to_taste(&s)),
                Some(s),
                None,
                Some(convert::smell_to_audio(&s)),
            ),
            SensoryInput::Emotion(e) => (
                Some(convert::emotion_to_taste(&e)),
                Some(convert::emotion_to_smell(&e)),
                Some(e),
                Some(convert::emotion_to_audio(&e)),
            ),
        };

        let image = convert::generate_image_params(&visual);
        debug!(%source, colors = visual.colors.len(), "translated");

        Translation {
            source,
            visual,
            taste,
            smell,
            emotion,
            audio,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisError;
    use crate::model::Timbre;
    use hound::WavReader;
    use std::io::Cursor;

    fn joy() -> EmotionalState {
        EmotionalState {
            joy: 1.0,
            ..EmotionalState::default()
        }
    }

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * 0.5)
            .collect()
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_joy_to_audio() {
        let engine = Engine::default();
        let params = engine.emotion_to_audio(&joy());

        assert_eq!(params.frequency.len(), 1);
        assert!((params.frequency[0] - 923.25).abs() < 1e-9);
        assert!((params.amplitude[0] - 0.8).abs() < 1e-9);
        assert_eq!(params.tempo, 60.0);
        assert_eq!(params.timbre, Timbre::Sine);
    }

    #[test]
    fn test_convert_matches_pair_methods() {
        let engine = Engine::default();
        let input = SensoryInput::Emotion(joy());

        let output = engine.convert(&input, Modality::Audio).unwrap();
        assert_eq!(output, SensoryOutput::Audio(engine.emotion_to_audio(&joy())));

        let output = engine.convert(&input, Modality::Visual).unwrap();
        assert_eq!(output.modality(), Modality::Visual);
    }

    #[test]
    fn test_same_modality_passes_through() {
        let engine = Engine::default();
        let taste = TasteProfile {
            sweet: 0.4,
            ..TasteProfile::default()
        };

        let output = engine.convert(&SensoryInput::Taste(taste), Modality::Taste).unwrap();
        assert_eq!(output, SensoryOutput::Taste(taste));
    }

    #[test]
    fn test_nothing_converts_to_emotion() {
        let engine = Engine::default();
        let err = engine
            .convert(&SensoryInput::Smell(SmellProfile::default()), Modality::Emotion)
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::Unsupported {
                from: Modality::Smell,
                to: Modality::Emotion
            }
        );
    }

    #[test]
    fn test_audio_features_have_no_audio_route() {
        let engine = Engine::default();
        let features = engine.analyze_audio(&sine(440.0, 8000, 8000), 8000).unwrap();

        assert!(engine.convert(&SensoryInput::Audio(features.clone()), Modality::Audio).is_err());
        assert!(engine.convert(&SensoryInput::Audio(features), Modality::Taste).is_ok());
    }

    #[test]
    fn test_image_target_generates_params() {
        let engine = Engine::default();
        let emotion = SensoryInput::Emotion(joy());

        let output = engine.convert(&emotion, Modality::Image).unwrap();
        let expected = engine.generate_image_params(&engine.emotion_to_visual(&joy()));
        assert_eq!(output, SensoryOutput::Image(expected));
    }

    #[test]
    fn test_analysis_errors_propagate() {
        let engine = Engine::default();
        assert_eq!(
            engine.analyze_audio(&[], 44100),
            Err(EngineError::Analysis(AnalysisError::EmptySignal))
        );
        assert!(matches!(
            engine.analyze_image(&[0; 4], 0, 1),
            Err(EngineError::Analysis(AnalysisError::ZeroDimension { .. }))
        ));
    }

    #[test]
    fn test_translate_taste() {
        let engine = Engine::default();
        let taste = TasteProfile {
            sweet: 0.9,
            intensity: 0.8,
            ..TasteProfile::default()
        };

        let translation = engine.translate(SensoryInput::Taste(taste));
        assert_eq!(translation.source, Modality::Taste);
        assert_eq!(translation.taste, Some(taste));
        assert_eq!(translation.smell, Some(engine.taste_to_smell(&taste)));
        assert_eq!(translation.audio, Some(engine.taste_to_audio(&taste)));
        assert!(translation.emotion.is_none());
        assert_eq!(translation.image, engine.generate_image_params(&translation.visual));
    }

    #[test]
    fn test_translate_emotion_keeps_state() {
        let engine = Engine::default();
        let translation = engine.translate(SensoryInput::Emotion(joy()));

        assert_eq!(translation.emotion, Some(joy()));
        assert!(translation.audio.is_some());
        assert!(!translation.visual.colors.is_empty());
    }

    #[test]
    fn test_translate_audio_has_no_audio_params() {
        let engine = Engine::default();
        let features = engine.analyze_audio(&sine(440.0, 8000, 8000), 8000).unwrap();
        let translation = engine.translate(SensoryInput::Audio(features));

        assert!(translation.audio.is_none());
        assert!(translation.taste.is_some());
        assert!(translation.smell.is_some());
    }

    #[test]
    fn test_translate_image() {
        let engine = Engine::default();
        let pixels = [128u8, 128, 128, 255].repeat(16 * 16);
        let features = engine.analyze_image(&pixels, 16, 16).unwrap();
        let translation = engine.translate(SensoryInput::Image(features.clone()));

        assert_eq!(translation.visual, engine.image_to_visual(&features));
        assert_eq!(translation.audio, Some(engine.image_to_audio(&features)));
        assert!(!translation.visual.forms.is_empty());
    }

    #[test]
    fn test_generate_audio_file_uses_configured_rate() {
        let mut config = SynesthesiaConfig::default();
        config.audio.sample_rate = 16000;
        let engine = Engine::new(config);

        let mut params = engine.emotion_to_audio(&joy());
        params.duration = 0.5;
        let bytes = engine.generate_audio_file(&params).unwrap();

        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.len(), 8000);
    }

    #[test]
    fn test_render_audio_file_matches_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("joy.wav");
        let engine = Engine::default();
        let mut params = engine.emotion_to_audio(&joy());
        params.duration = 0.25;

        engine.render_audio_file(&params, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, engine.generate_audio_file(&params).unwrap());
    }

    #[test]
    fn test_render_audio_file_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::default();
        let params = engine.emotion_to_audio(&joy());

        let err = engine
            .render_audio_file(&params, &dir.path().join("missing").join("out.wav"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to create WAV file"));
    }

    #[test]
    fn test_playback_session_from_config() {
        let engine = Engine::default();
        let mut session = engine.playback_session();

        session.start(&engine.emotion_to_audio(&joy()));
        assert!(session.is_playing());
        assert_eq!(session.voice_count(), 1);
    }
}
