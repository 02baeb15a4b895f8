// src/config/features.rs
//
// Shared feature-extraction parameters. Both recordings must be analysed
// with the same instance, so every extraction call takes it by reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::dsp::WindowType;
use crate::error::{Error, Result};

/// Parameters for STFT, mel filterbank and MFCC extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Target sample rate in Hz; inputs are resampled to it
    pub sample_rate: u32,
    pub n_fft: usize,
    pub hop_length: usize,
    pub n_mfcc: usize,
    pub n_mels: usize,
    pub fmin: f32,
    /// Upper mel edge, Nyquist when unset
    pub fmax: Option<f32>,
    /// Dynamic range kept below the loudest log-mel cell
    pub top_db: Option<f32>,
    /// Zero-pad n_fft/2 on both sides so frames are centred on their hop
    pub center: bool,
    pub window: WindowType,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            n_fft: 2048,
            hop_length: 512,
            n_mfcc: 13,
            n_mels: 128,
            fmin: 0.0,
            fmax: None,
            top_db: Some(80.0),
            center: true,
            window: WindowType::Hann,
        }
    }
}

impl FeatureConfig {
    /// Load a (possibly partial) config from a JSON file; missing keys keep defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Upper mel edge actually used
    pub fn effective_fmax(&self) -> f32 {
        self.fmax.unwrap_or(self.sample_rate as f32 / 2.0)
    }

    /// Number of STFT bins (`1 + n_fft/2`)
    pub fn num_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::Config("sample_rate must be positive".into()));
        }
        if self.n_fft < 2 {
            return Err(Error::Config("n_fft must be at least 2".into()));
        }
        if self.hop_length == 0 || self.hop_length > self.n_fft {
            return Err(Error::Config(format!(
                "hop_length must be in 1..={} (got {})",
                self.n_fft, self.hop_length
            )));
        }
        if self.n_mels == 0 || self.n_mfcc == 0 {
            return Err(Error::Config("n_mels and n_mfcc must be positive".into()));
        }
        if self.n_mfcc > self.n_mels {
            return Err(Error::Config(format!(
                "n_mfcc ({}) cannot exceed n_mels ({})",
                self.n_mfcc, self.n_mels
            )));
        }
        let nyquist = self.sample_rate as f32 / 2.0;
        let fmax = self.effective_fmax();
        if self.fmin < 0.0 || fmax <= self.fmin || fmax > nyquist {
            return Err(Error::Config(format!(
                "mel range {}..{} Hz must lie within 0..{} Hz",
                self.fmin, fmax, nyquist
            )));
        }
        if let Some(top_db) = self.top_db {
            if top_db < 0.0 {
                return Err(Error::Config("top_db must be non-negative".into()));
            }
        }
        Ok(())
    }
}
