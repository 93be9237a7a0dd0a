//! WAV encoding and decoding
//!
//! Generated audio is always written as mono 16-bit PCM. Decoding accepts
//! any PCM or float WAV and keeps only the first channel.

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Full-scale value of a 16-bit sample
const PCM16_SCALE: f64 = 32767.0;

fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Convert a sample in `[-1, 1]` to 16-bit PCM, truncating toward zero
pub fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM16_SCALE) as i16
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[f64]) -> Result<()> {
    for &sample in samples {
        writer
            .write_sample(to_pcm16(sample))
            .context("failed to write sample")?;
    }
    writer.finalize().context("failed to finalize WAV data")
}

/// Encode samples as an in-memory mono 16-bit WAV container
pub fn encode_pcm16(samples: &[f64], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    let writer =
        WavWriter::new(&mut cursor, pcm16_spec(sample_rate)).context("failed to start WAV data")?;
    write_samples(writer, samples)?;
    Ok(cursor.into_inner())
}

/// Write samples to a mono 16-bit WAV file
pub fn write_pcm16(path: &Path, samples: &[f64], sample_rate: u32) -> Result<()> {
    let writer = WavWriter::create(path, pcm16_spec(sample_rate))
        .with_context(|| format!("failed to create WAV file: {:?}", path))?;
    write_samples(writer, samples)
}

/// First channel of a decoded WAV file
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    /// Channel count of the source file
    pub channels: u16,
}

/// Read a WAV file as `f32` samples in `[-1, 1]`
///
/// Integer formats are scaled by their full-scale value. Files with more
/// than one channel are reduced to channel 0.
pub fn read_wav(path: &Path) -> Result<DecodedAudio> {
    let mut reader =
        WavReader::open(path).with_context(|| format!("failed to open WAV file: {:?}", path))?;
    let spec = reader.spec();

    if spec.channels == 0 {
        bail!("WAV file {:?} declares no channels", path);
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .with_context(|| format!("failed to decode samples from {:?}", path))?,
        SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()
                .with_context(|| format!("failed to decode samples from {:?}", path))?
        }
    };

    if spec.channels > 1 {
        warn!(
            channels = spec.channels,
            path = %path.display(),
            "multichannel audio reduced to the first channel"
        );
    }

    let samples: Vec<f32> = interleaved
        .into_iter()
        .step_by(usize::from(spec.channels))
        .collect();

    debug!(
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        "decoded WAV file"
    );

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_pcm16_conversion() {
        assert_eq!(to_pcm16(0.0), 0);
        assert_eq!(to_pcm16(1.0), 32767);
        assert_eq!(to_pcm16(-1.0), -32767);
        assert_eq!(to_pcm16(2.5), 32767);
        // truncation, not rounding
        assert_eq!(to_pcm16(0.5), 16383);
    }

    #[test]
    fn test_encode_header() {
        let bytes = encode_pcm16(&[0.0, 0.5, -0.5], 22050).unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(bytes.len(), 44 + 3 * 2);

        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        write_pcm16(&path, &[0.0, 0.25, -0.25, 1.0], 8000).unwrap();
        let decoded = read_wav(&path).unwrap();

        assert_eq!(decoded.sample_rate, 8000);
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.samples.len(), 4);
        assert!((decoded.samples[1] - 0.25).abs() < 1e-3);
        assert!((decoded.samples[3] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_stereo_keeps_first_channel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for frame in [(0.1f32, -0.9f32), (0.2, -0.8), (0.3, -0.7)] {
            writer.write_sample(frame.0).unwrap();
            writer.write_sample(frame.1).unwrap();
        }
        writer.finalize().unwrap();

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_wav(&dir.path().join("absent.wav")).is_err());
    }
}
