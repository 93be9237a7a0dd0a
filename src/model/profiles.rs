//! Directly settable sensory profiles
//!
//! Every field is a level in `[0, 1]` by convention. Profiles derived by a
//! converter may overshoot; see the converter docs.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Accept only finite numbers for profile levels
fn finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("level must be a finite number, got {}", value)))
    }
}

/// Five basic tastes plus overall character
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TasteProfile {
    #[serde(deserialize_with = "finite")]
    pub sweet: f64,
    #[serde(deserialize_with = "finite")]
    pub sour: f64,
    #[serde(deserialize_with = "finite")]
    pub bitter: f64,
    #[serde(deserialize_with = "finite")]
    pub salty: f64,
    #[serde(deserialize_with = "finite")]
    pub umami: f64,
    #[serde(deserialize_with = "finite")]
    pub intensity: f64,
    #[serde(deserialize_with = "finite")]
    pub temperature: f64,
    #[serde(deserialize_with = "finite")]
    pub texture: f64,
}

impl TasteProfile {
    /// Field values in declaration order
    pub fn levels(&self) -> [f64; 8] {
        [
            self.sweet,
            self.sour,
            self.bitter,
            self.salty,
            self.umami,
            self.intensity,
            self.temperature,
            self.texture,
        ]
    }
}

/// Olfactory families plus overall intensity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmellProfile {
    #[serde(deserialize_with = "finite")]
    pub floral: f64,
    #[serde(deserialize_with = "finite")]
    pub fruity: f64,
    #[serde(deserialize_with = "finite")]
    pub woody: f64,
    #[serde(deserialize_with = "finite")]
    pub spicy: f64,
    #[serde(deserialize_with = "finite")]
    pub fresh: f64,
    #[serde(deserialize_with = "finite")]
    pub earthy: f64,
    #[serde(deserialize_with = "finite")]
    pub chemical: f64,
    #[serde(deserialize_with = "finite")]
    pub intensity: f64,
}

impl SmellProfile {
    /// Field values in declaration order
    pub fn levels(&self) -> [f64; 8] {
        [
            self.floral,
            self.fruity,
            self.woody,
            self.spicy,
            self.fresh,
            self.earthy,
            self.chemical,
            self.intensity,
        ]
    }
}

/// Six-axis emotional state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionalState {
    #[serde(deserialize_with = "finite")]
    pub joy: f64,
    #[serde(deserialize_with = "finite")]
    pub melancholy: f64,
    #[serde(deserialize_with = "finite")]
    pub anger: f64,
    #[serde(deserialize_with = "finite")]
    pub peace: f64,
    #[serde(deserialize_with = "finite")]
    pub excitement: f64,
    #[serde(deserialize_with = "finite")]
    pub contemplation: f64,
}

impl EmotionalState {
    /// Field values in declaration order
    pub fn levels(&self) -> [f64; 6] {
        [
            self.joy,
            self.melancholy,
            self.anger,
            self.peace,
            self.excitement,
            self.contemplation,
        ]
    }

    /// Mean of the high-arousal axes (joy, anger, excitement)
    pub fn arousal(&self) -> f64 {
        (self.joy + self.anger + self.excitement) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        assert!(TasteProfile::default().levels().iter().all(|&v| v == 0.0));
        assert!(SmellProfile::default().levels().iter().all(|&v| v == 0.0));
        assert!(EmotionalState::default().levels().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_taste_from_yaml() {
        let yaml = r#"
sweet: 0.9
sour: 0.3
bitter: 0.0
salty: 0.0
umami: 0.1
intensity: 0.8
temperature: 0.6
texture: 0.4
"#;
        let taste: TasteProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(taste.sweet, 0.9);
        assert_eq!(taste.texture, 0.4);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = "joy: 1.0\nmelancholy: 0\nanger: 0\npeace: 0\nexcitement: 0\ncontemplation: 0\nsurprise: 0.5\n";
        assert!(serde_yaml::from_str::<EmotionalState>(yaml).is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(serde_yaml::from_str::<SmellProfile>("floral: 0.5\n").is_err());
    }

    #[test]
    fn test_non_finite_levels_rejected() {
        let taste = "sweet: 0\nsour: 0\nbitter: 0\nsalty: 0\numami: 0\nintensity: .inf\ntemperature: 0\ntexture: 0\n";
        let err = serde_yaml::from_str::<TasteProfile>(taste).unwrap_err();
        assert!(err.to_string().contains("finite"));

        let smell = "floral: .nan\nfruity: 0\nwoody: 0\nspicy: 0\nfresh: 0\nearthy: 0\nchemical: 0\nintensity: 0\n";
        assert!(serde_yaml::from_str::<SmellProfile>(smell).is_err());

        let emotion = "joy: 0\nmelancholy: 0\nanger: 0\npeace: 0\nexcitement: -.inf\ncontemplation: 0\n";
        assert!(serde_yaml::from_str::<EmotionalState>(emotion).is_err());
    }

    #[test]
    fn test_json_profile_parses() {
        let json = r#"{"joy":0.8,"melancholy":0,"anger":0,"peace":0.2,"excitement":0.5,"contemplation":0}"#;
        let emotion: EmotionalState = serde_json::from_str(json).unwrap();
        assert_eq!(emotion.excitement, 0.5);
    }

    #[test]
    fn test_arousal() {
        let emotion = EmotionalState {
            joy: 0.9,
            anger: 0.3,
            excitement: 0.6,
            ..Default::default()
        };
        assert!((emotion.arousal() - 0.6).abs() < 1e-12);
    }
}
