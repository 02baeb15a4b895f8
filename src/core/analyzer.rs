// src/core/analyzer.rs
//
// High-level comparison API with builder pattern.

use log::info;
use std::path::Path;

use super::analysis::{FeatureExtractor, SignalFeatures, SimilarityScore};
use super::loader::{load_signal, AudioSignal};
use crate::comparison::ComparisonResult;
use crate::config::FeatureConfig;
use crate::core::WindowType;
use crate::error::{Error, Result};

/// Builder for SimilarityAnalyzer configuration
pub struct AnalyzerBuilder {
    config: FeatureConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: FeatureConfig::default(),
        }
    }

    /// Replace the whole feature configuration
    pub fn config(mut self, config: FeatureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.config.sample_rate = rate;
        self
    }

    pub fn n_fft(mut self, n_fft: usize) -> Self {
        self.config.n_fft = n_fft;
        self
    }

    pub fn hop_length(mut self, hop: usize) -> Self {
        self.config.hop_length = hop;
        self
    }

    pub fn n_mfcc(mut self, n_mfcc: usize) -> Self {
        self.config.n_mfcc = n_mfcc;
        self
    }

    pub fn window(mut self, window: WindowType) -> Self {
        self.config.window = window;
        self
    }

    pub fn build(self) -> Result<SimilarityAnalyzer> {
        let extractor = FeatureExtractor::new(&self.config)?;
        Ok(SimilarityAnalyzer { extractor })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the load → extract → score pipeline for a pair of recordings
pub struct SimilarityAnalyzer {
    extractor: FeatureExtractor,
}

impl SimilarityAnalyzer {
    /// Analyzer with default configuration
    pub fn new() -> Result<Self> {
        AnalyzerBuilder::new().build()
    }

    pub fn with_config(config: &FeatureConfig) -> Result<Self> {
        AnalyzerBuilder::new().config(config.clone()).build()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn config(&self) -> &FeatureConfig {
        self.extractor.config()
    }

    /// Load both files and compare them
    pub fn compare_files(&self, first: &Path, second: &Path) -> Result<ComparisonResult> {
        let rate = self.config().sample_rate;
        let (a, b) = rayon::join(
            || self.load_and_extract(first, rate),
            || self.load_and_extract(second, rate),
        );
        let (a, b) = (a?, b?);
        self.score(a, b)
    }

    /// Compare two signals that are already in memory
    pub fn compare_signals(&self, first: AudioSignal, second: AudioSignal) -> Result<ComparisonResult> {
        let (fa, fb) = rayon::join(
            || self.extractor.extract(&first),
            || self.extractor.extract(&second),
        );
        self.score((first, fa?), (second, fb?))
    }

    fn load_and_extract(&self, path: &Path, rate: u32) -> Result<(AudioSignal, SignalFeatures)> {
        let signal = load_signal(path, rate)?;
        let features = self.extractor.extract(&signal)?;
        Ok((signal, features))
    }

    fn score(
        &self,
        (first, first_features): (AudioSignal, SignalFeatures),
        (second, second_features): (AudioSignal, SignalFeatures),
    ) -> Result<ComparisonResult> {
        let rate = self.config().sample_rate;
        for (label, signal) in [("first input", &first), ("second input", &second)] {
            if signal.sample_rate() != rate {
                return Err(Error::Config(format!(
                    "{} is at {} Hz, expected {} Hz",
                    label,
                    signal.sample_rate(),
                    rate
                )));
            }
            if signal.is_silent() {
                return Err(Error::degenerate(label, "signal is silent, timbre is undefined"));
            }
        }

        let similarity =
            SimilarityScore::from_vectors(&first_features.mfcc_mean, &second_features.mfcc_mean)?;
        info!(
            "Similarity {:.4} ({:.2}%)",
            similarity.score, similarity.percentage
        );

        Ok(ComparisonResult {
            similarity,
            signals: [first, second],
            features: [first_features, second_features],
            config: self.config().clone(),
        })
    }
}
