// src/testgen/mod.rs
//
// Deterministic test signals and WAV fixtures for exercising the
// comparison pipeline without shipping audio files.

use hound::{SampleFormat, WavSpec, WavWriter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;
use std::path::Path;

use crate::error::{Error, Result};

/// Sample encoding for generated WAV files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    Pcm16,
    Float32,
}

fn num_samples(sample_rate: u32, secs: f32) -> usize {
    (sample_rate as f32 * secs).round() as usize
}

/// Pure sine tone
pub fn sine(freq: f32, amplitude: f32, sample_rate: u32, secs: f32) -> Vec<f32> {
    (0..num_samples(sample_rate, secs))
        .map(|i| amplitude * (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
        .collect()
}

/// Uniform white noise in `[-amplitude, amplitude]`, reproducible from `seed`
pub fn white_noise(amplitude: f32, sample_rate: u32, secs: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples(sample_rate, secs))
        .map(|_| rng.gen_range(-amplitude..=amplitude))
        .collect()
}

pub fn silence(sample_rate: u32, secs: f32) -> Vec<f32> {
    vec![0.0; num_samples(sample_rate, secs)]
}

/// Interleave equal-length channels
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    (0..frames)
        .flat_map(|i| channels.iter().map(move |c| c[i]))
        .collect()
}

/// Write interleaved samples to a WAV file
pub fn write_wav(
    path: &Path,
    samples: &[f32],
    sample_rate: u32,
    channels: u16,
    format: WavFormat,
) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: match format {
            WavFormat::Pcm16 => 16,
            WavFormat::Float32 => 32,
        },
        sample_format: match format {
            WavFormat::Pcm16 => SampleFormat::Int,
            WavFormat::Float32 => SampleFormat::Float,
        },
    };

    let wav_err = |e: hound::Error| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e));
    let mut writer = WavWriter::create(path, spec).map_err(wav_err)?;
    for &s in samples {
        match format {
            WavFormat::Pcm16 => {
                let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
                writer.write_sample(v).map_err(wav_err)?;
            }
            WavFormat::Float32 => writer.write_sample(s).map_err(wav_err)?,
        }
    }
    writer.finalize().map_err(wav_err)?;
    Ok(())
}
