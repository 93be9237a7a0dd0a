//! CLI interface for Synesthesia

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use synesthesia::engine::Modality;
use synesthesia::presets::PresetKind;

/// Translate sound, images, tastes, smells and emotions into one another
#[derive(Parser)]
#[command(name = "synesthesia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract features from a WAV file
    AnalyzeAudio {
        /// WAV file to analyze
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Extract features from a PNG or JPEG file
    AnalyzeImage {
        /// Image file to analyze
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Convert an input into one modality, or into every reachable one
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Target modality (audio, image, visual, taste, smell, emotion)
        #[arg(short, long)]
        to: Option<Modality>,
    },

    /// Synthesize a WAV file from an input
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Override the clip length in seconds
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// List the named presets
    Presets {
        /// Only list one table
        #[arg(short, long, value_enum)]
        kind: Option<ProfileKind>,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(default_value = "synesthesia.yaml")]
        path: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

/// Where the input comes from; exactly one of the three must be given
#[derive(Args)]
#[group(skip)]
pub struct SourceArgs {
    /// Media file: .wav for audio, .png/.jpg/.jpeg for image
    #[arg(short, long, group = "source", required_unless_present_any = ["preset", "profile"])]
    pub input: Option<PathBuf>,

    /// Named taste, smell or emotion preset
    #[arg(short, long, group = "source")]
    pub preset: Option<String>,

    /// YAML or JSON profile file (needs --kind)
    #[arg(long, group = "source", requires = "kind")]
    pub profile: Option<PathBuf>,

    /// Profile kind for --profile, or the table to search for --preset
    #[arg(short, long, value_enum)]
    pub kind: Option<ProfileKind>,
}

/// Directly settable profile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    Taste,
    Smell,
    Emotion,
}

impl From<ProfileKind> for PresetKind {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Taste => PresetKind::Taste,
            ProfileKind::Smell => PresetKind::Smell,
            ProfileKind::Emotion => PresetKind::Emotion,
        }
    }
}
