// src/core/analysis/features.rs
//
// Per-signal feature bundle: MFCC matrix, STFT magnitude and their means.

use log::debug;

use super::mfcc::Mfcc;
use crate::config::FeatureConfig;
use crate::core::dsp::{FeatureMatrix, Stft};
use crate::core::loader::AudioSignal;
use crate::error::{Error, Result};

/// Everything extracted from one signal
#[derive(Debug, Clone)]
pub struct SignalFeatures {
    /// `n_mfcc × frames`
    pub mfcc: FeatureMatrix,
    /// Mean of each coefficient over time, length `n_mfcc`
    pub mfcc_mean: Vec<f32>,
    /// STFT magnitude, `(1 + n_fft/2) × frames`
    pub spectrum: FeatureMatrix,
    /// Mean magnitude per frequency bin
    pub spectrum_mean: Vec<f32>,
}

impl SignalFeatures {
    pub fn num_frames(&self) -> usize {
        self.mfcc.cols()
    }
}

/// Extracts features with one fixed parameter set
pub struct FeatureExtractor {
    config: FeatureConfig,
    stft: Stft,
    mfcc: Mfcc,
}

impl FeatureExtractor {
    pub fn new(config: &FeatureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            stft: Stft::new(config),
            mfcc: Mfcc::new(config),
        })
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    pub fn extract(&self, signal: &AudioSignal) -> Result<SignalFeatures> {
        if signal.sample_rate() != self.config.sample_rate {
            return Err(Error::Config(format!(
                "signal is at {} Hz but features are configured for {} Hz",
                signal.sample_rate(),
                self.config.sample_rate
            )));
        }

        let spectrum = self.stft.magnitude(signal.samples())?;
        let mut power = spectrum.clone();
        power.map_in_place(|m| m * m);
        let mfcc = self.mfcc.compute_from_power(&power);
        let mfcc_mean = mfcc.row_means();
        let spectrum_mean = spectrum.row_means();

        debug!(
            "Extracted {}x{} MFCC and {}x{} spectrum",
            mfcc.rows(),
            mfcc.cols(),
            spectrum.rows(),
            spectrum.cols()
        );

        Ok(SignalFeatures {
            mfcc,
            mfcc_mean,
            spectrum,
            spectrum_mean,
        })
    }
}

/// One-off extraction with an explicit config
pub fn extract_features(signal: &AudioSignal, config: &FeatureConfig) -> Result<SignalFeatures> {
    FeatureExtractor::new(config)?.extract(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise_like(len: usize) -> Vec<f32> {
        // deterministic, broadband
        (0..len).map(|i| ((i * 7919 % 1013) as f32 / 506.5) - 1.0).collect()
    }

    #[test]
    fn test_mean_vector_length_is_fixed() {
        let config = FeatureConfig::default();
        let extractor = FeatureExtractor::new(&config).unwrap();
        for len in [300, 2048, 22050, 3 * 22050 + 17] {
            let signal = AudioSignal::from_samples(noise_like(len), 22050);
            let features = extractor.extract(&signal).unwrap();
            assert_eq!(features.mfcc_mean.len(), 13);
            assert_eq!(features.spectrum_mean.len(), 1025);
            assert_eq!(features.num_frames(), 1 + len / 512);
            assert_eq!(features.spectrum.cols(), features.mfcc.cols());
        }
    }

    #[test]
    fn test_mfcc_matches_direct_computation() {
        let config = FeatureConfig::default();
        let signal = AudioSignal::from_samples(noise_like(8192), 22050);
        let features = extract_features(&signal, &config).unwrap();
        let direct = Mfcc::new(&config).compute(signal.samples()).unwrap();

        assert_eq!(features.mfcc.rows(), direct.rows());
        assert_eq!(features.mfcc.cols(), direct.cols());
        for (a, b) in features.mfcc.as_slice().iter().zip(direct.as_slice()) {
            assert!((a - b).abs() < 1e-2, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_rate_mismatch_rejected() {
        let signal = AudioSignal::from_samples(noise_like(4096), 44100);
        let err = extract_features(&signal, &FeatureConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FeatureConfig { hop_length: 0, ..Default::default() };
        assert!(FeatureExtractor::new(&config).is_err());
    }
}
