//! Comparison result types consumed by the reporter and the dashboard

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::FeatureConfig;
use crate::core::analysis::{SignalFeatures, SimilarityScore};
use crate::core::dsp::FeatureMatrix;
use crate::core::AudioSignal;

/// Output of one pipeline run: the score plus everything needed to plot it
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub similarity: SimilarityScore,
    pub signals: [AudioSignal; 2],
    pub features: [SignalFeatures; 2],
    pub config: FeatureConfig,
}

impl ComparisonResult {
    pub fn score(&self) -> f64 {
        self.similarity.score
    }

    pub fn percentage(&self) -> f64 {
        self.similarity.percentage
    }

    /// Mean STFT magnitude per bin for both inputs
    pub fn spectra(&self) -> [&[f32]; 2] {
        [&self.features[0].spectrum_mean, &self.features[1].spectrum_mean]
    }

    pub fn feature_matrices(&self) -> [&FeatureMatrix; 2] {
        [&self.features[0].mfcc, &self.features[1].mfcc]
    }

    pub fn summary(&self) -> ComparisonSummary {
        let input = |i: usize| InputSummary {
            path: self.signals[i].source().map(|p| p.to_path_buf()),
            duration_secs: self.signals[i].duration_secs(),
            frames: self.features[i].num_frames(),
            mfcc_mean: self.features[i].mfcc_mean.clone(),
        };

        ComparisonSummary {
            score: self.similarity.score,
            percentage: self.similarity.percentage,
            sample_rate: self.config.sample_rate,
            n_mfcc: self.config.n_mfcc,
            inputs: [input(0), input(1)],
            analyzed_at: Utc::now(),
        }
    }
}

/// Per-input part of [`ComparisonSummary`]
#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: Option<PathBuf>,
    pub duration_secs: f64,
    pub frames: usize,
    pub mfcc_mean: Vec<f32>,
}

/// Serializable digest of a [`ComparisonResult`]
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub score: f64,
    pub percentage: f64,
    pub sample_rate: u32,
    pub n_mfcc: usize,
    pub inputs: [InputSummary; 2],
    pub analyzed_at: DateTime<Utc>,
}
