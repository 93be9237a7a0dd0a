//! Synesthesia - Deterministic cross-modal sensory translation

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use synesthesia::config::{self, OutputConfig, OutputFormat, SynesthesiaConfig};
use synesthesia::engine::{Engine, Modality, SensoryInput, SensoryOutput};
use synesthesia::media;
use synesthesia::presets::{self, PresetKind};

mod cli;

use cli::{Cli, Commands, SourceArgs};

const CONFIG_PATH: &str = "synesthesia.yaml";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("SYNESTHESIA_LOG")
                .from_env_lossy(),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            config::load_config(path)?
        }
        None => SynesthesiaConfig::default(),
    };
    let output = cfg.output.clone();
    let engine = Engine::new(cfg);

    match cli.command {
        Commands::AnalyzeAudio { input } => {
            let features = analyze_audio_file(&engine, &input)?;
            emit(&features, &output)?;
        }

        Commands::AnalyzeImage { input } => {
            let features = analyze_image_file(&engine, &input)?;
            emit(&features, &output)?;
        }

        Commands::Convert { source, to } => {
            let input = load_input(&engine, &source)?;
            match to {
                Some(target) => {
                    info!("Converting {} to {}", input.modality(), target);
                    emit(&engine.convert(&input, target)?, &output)?;
                }
                None => {
                    info!("Translating {} into every modality", input.modality());
                    emit(&engine.translate(input), &output)?;
                }
            }
        }

        Commands::Render {
            source,
            output: path,
            duration,
        } => {
            let input = load_input(&engine, &source)?;
            let SensoryOutput::Audio(mut params) = engine.convert(&input, Modality::Audio)? else {
                bail!("{} input did not produce audio parameters", input.modality());
            };
            if let Some(seconds) = duration {
                params.duration = seconds;
            }

            info!(
                "Rendering {} partials, {:.1}s at {} Hz",
                params.frequency.len(),
                params.duration,
                engine.config().audio.sample_rate
            );
            engine.render_audio_file(&params, &path)?;
            info!("Rendered to {:?}", path);
        }

        Commands::Presets { kind } => {
            let kinds: Vec<PresetKind> = match kind {
                Some(kind) => vec![kind.into()],
                None => PresetKind::ALL.to_vec(),
            };
            for kind in kinds {
                println!("{}:", kind.as_str());
                for name in kind.names() {
                    println!("  - {}", name);
                }
            }
        }

        Commands::Check { path } => {
            println!("Checking configuration at {:?}...", path);

            match config::load_config(&path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
                    println!("  Voices: up to {}", cfg.playback.max_voices);
                    println!(
                        "  Voice range: {} - {} Hz",
                        cfg.playback.min_frequency, cfg.playback.max_frequency
                    );
                    println!("  Master gain: {:.0}%", cfg.playback.master_gain * 100.0);
                    println!("  Output: {:?} (pretty: {})", cfg.output.format, cfg.output.pretty);
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            if Path::new(CONFIG_PATH).exists() {
                println!("{} already exists. Not overwriting.", CONFIG_PATH);
            } else {
                std::fs::write(CONFIG_PATH, config::EXAMPLE_CONFIG)
                    .with_context(|| format!("failed to write {}", CONFIG_PATH))?;
                println!("Created {} with example configuration.", CONFIG_PATH);
            }
        }
    }

    Ok(())
}

fn analyze_audio_file(engine: &Engine, path: &Path) -> Result<synesthesia::model::AudioFeatures> {
    let audio = media::read_wav(path)?;
    info!(
        "Analyzing {:?}: {} samples at {} Hz",
        path,
        audio.samples.len(),
        audio.sample_rate
    );
    engine
        .analyze_audio(&audio.samples, audio.sample_rate)
        .with_context(|| format!("failed to analyze {:?}", path))
}

fn analyze_image_file(engine: &Engine, path: &Path) -> Result<synesthesia::model::ImageFeatures> {
    let image = media::load_rgba(path)?;
    info!("Analyzing {:?}: {}x{}", path, image.width, image.height);
    engine
        .analyze_image(&image.pixels, image.width, image.height)
        .with_context(|| format!("failed to analyze {:?}", path))
}

/// Resolve `--input`, `--preset` or `--profile` into an engine input
fn load_input(engine: &Engine, source: &SourceArgs) -> Result<SensoryInput> {
    if let Some(path) = &source.input {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        return match extension.as_str() {
            "wav" => Ok(SensoryInput::Audio(analyze_audio_file(engine, path)?)),
            "png" | "jpg" | "jpeg" => Ok(SensoryInput::Image(analyze_image_file(engine, path)?)),
            _ => bail!("unsupported media file {:?}: expected .wav, .png, .jpg or .jpeg", path),
        };
    }

    if let Some(name) = &source.preset {
        let kinds: Vec<PresetKind> = match source.kind {
            Some(kind) => vec![kind.into()],
            None => PresetKind::ALL.to_vec(),
        };
        for kind in kinds {
            let found = match kind {
                PresetKind::Taste => presets::taste_preset(name).map(SensoryInput::Taste),
                PresetKind::Smell => presets::smell_preset(name).map(SensoryInput::Smell),
                PresetKind::Emotion => presets::emotion_preset(name).map(SensoryInput::Emotion),
            };
            if let Some(input) = found {
                info!("Using {} preset '{}'", kind.as_str(), name);
                return Ok(input);
            }
        }
        bail!("unknown preset '{}' (run `synesthesia presets` for the list)", name);
    }

    if let (Some(path), Some(kind)) = (&source.profile, source.kind) {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile: {:?}", path))?;
        let input = match PresetKind::from(kind) {
            PresetKind::Taste => SensoryInput::Taste(parse_profile(&contents, path)?),
            PresetKind::Smell => SensoryInput::Smell(parse_profile(&contents, path)?),
            PresetKind::Emotion => SensoryInput::Emotion(parse_profile(&contents, path)?),
        };
        return Ok(input);
    }

    bail!("one of --input, --preset or --profile is required")
}

/// Parse a YAML profile; JSON documents parse as YAML too
fn parse_profile<T: serde::de::DeserializeOwned>(contents: &str, path: &Path) -> Result<T> {
    serde_yaml::from_str(contents).with_context(|| format!("failed to parse profile: {:?}", path))
}

fn emit<T: Serialize>(value: &T, output: &OutputConfig) -> Result<()> {
    let text = match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
