//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Commented example configuration written by `synesthesia init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../synesthesia.example.yaml");

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<SynesthesiaConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {:?}", path))?;
    let config: SynesthesiaConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
audio:
  sample_rate: 22050

playback:
  max_voices: 4
  master_gain: 0.2

output:
  format: yaml
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.audio.sample_rate, 22050);
        assert_eq!(config.playback.max_voices, 4);
        assert_eq!(config.playback.master_gain, 0.2);
        assert_eq!(config.playback.min_frequency, 80.0);
        assert_eq!(config.output.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"audio:\n  sample_rate: 1000\n").unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_nan_frequency_bound() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"playback:\n  min_frequency: .nan\n").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("frequency range"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_example_config_is_valid() {
        let config: SynesthesiaConfig = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config, SynesthesiaConfig::default());
    }
}
