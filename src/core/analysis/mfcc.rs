// src/core/analysis/mfcc.rs
//
// MFCC analysis for timbre comparison

use crate::config::FeatureConfig;
use crate::core::dsp::{dct_ortho, power_to_db, FeatureMatrix, MelFilterbank, Stft};
use crate::error::Result;

/// Mel-frequency cepstral coefficient extractor
pub struct Mfcc {
    stft: Stft,
    filterbank: MelFilterbank,
    n_mfcc: usize,
    top_db: Option<f32>,
}

impl Mfcc {
    pub fn new(config: &FeatureConfig) -> Self {
        Self {
            stft: Stft::new(config),
            filterbank: MelFilterbank::new(config),
            n_mfcc: config.n_mfcc,
            top_db: config.top_db,
        }
    }

    pub fn num_coefficients(&self) -> usize {
        self.n_mfcc
    }

    /// `n_mfcc × frames` cepstral matrix
    pub fn compute(&self, samples: &[f32]) -> Result<FeatureMatrix> {
        Ok(self.compute_from_power(&self.stft.power(samples)?))
    }

    /// Cepstral matrix from an already computed `|X|²` spectrogram
    pub fn compute_from_power(&self, power: &FeatureMatrix) -> FeatureMatrix {
        let mut log_mel = self.filterbank.apply(power);
        power_to_db(&mut log_mel, self.top_db);

        let frames = log_mel.cols();
        let mut mfcc = FeatureMatrix::zeros(self.n_mfcc, frames);
        for frame in 0..frames {
            let coeffs = dct_ortho(&log_mel.column(frame), self.n_mfcc);
            for (k, c) in coeffs.into_iter().enumerate() {
                mfcc.set(k, frame, c);
            }
        }

        mfcc
    }
}
