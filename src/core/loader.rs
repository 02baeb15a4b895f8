// src/core/loader.rs
//
// Turns a file on disk into a mono, resampled, peak-normalized signal.

use log::{debug, info};
use std::path::{Path, PathBuf};

use super::decoder::{decode_audio, downmix_to_mono};
use super::dsp::{amplitude_to_db, is_silent, peak_amplitude, peak_normalize, resample, rms};
use crate::error::Result;

/// Mono samples at a fixed rate, peak-normalized to [-1, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
    source: Option<PathBuf>,
}

impl AudioSignal {
    /// Wrap raw mono samples; they are peak-normalized on the way in
    pub fn from_samples(mut samples: Vec<f32>, sample_rate: u32) -> Self {
        peak_normalize(&mut samples);
        Self {
            samples,
            sample_rate,
            source: None,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn is_silent(&self) -> bool {
        is_silent(&self.samples)
    }

    pub fn peak(&self) -> f32 {
        peak_amplitude(&self.samples)
    }
}

/// Decode, downmix, resample to `sample_rate` and peak-normalize one file
pub fn load_signal(path: &Path, sample_rate: u32) -> Result<AudioSignal> {
    let decoded = decode_audio(path)?;
    let mono = downmix_to_mono(&decoded);
    let mono = resample(&mono, decoded.sample_rate, sample_rate)?;

    debug!(
        "{}: peak {:.1} dBFS, rms {:.1} dBFS before normalization",
        path.display(),
        amplitude_to_db(peak_amplitude(&mono)),
        amplitude_to_db(rms(&mono))
    );

    let mut signal = AudioSignal::from_samples(mono, sample_rate);
    signal.source = Some(path.to_path_buf());

    info!(
        "Loaded {} ({}, {} Hz -> {} Hz, {:.2}s)",
        path.display(),
        decoded.codec_name,
        decoded.sample_rate,
        sample_rate,
        signal.duration_secs()
    );

    Ok(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_normalizes() {
        let signal = AudioSignal::from_samples(vec![0.25, -0.5, 0.1], 22050);
        assert!((signal.peak() - 1.0).abs() < 1e-6);
        assert_eq!(signal.sample_rate(), 22050);
        assert!(signal.source().is_none());
    }

    #[test]
    fn test_silent_signal_untouched() {
        let signal = AudioSignal::from_samples(vec![0.0; 10], 22050);
        assert!(signal.is_silent());
        assert_eq!(signal.samples(), &[0.0; 10]);
    }

    #[test]
    fn test_duration() {
        let signal = AudioSignal::from_samples(vec![0.5; 11025], 22050);
        assert!((signal.duration_secs() - 0.5).abs() < 1e-9);
        assert_eq!(signal.len(), 11025);
    }
}
