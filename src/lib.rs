//! timbrecheckr - Compare the timbre of two audio recordings
//!
//! Loads two recordings, extracts MFCC features with one shared parameter
//! set, scores them with cosine similarity and renders a comparison
//! dashboard.
//!
//! ## Pipeline
//!
//! 1. **Load** - decode (Symphonia), downmix, resample (rubato), peak-normalize
//! 2. **Extract** - STFT magnitude and MFCC matrices, averaged over time
//! 3. **Score** - cosine similarity of the two mean MFCC vectors
//! 4. **Report / Render** - console block, JSON summary, PNG dashboard
//!
//! ## Module Structure
//!
//! - `core` - Decoding, DSP, feature extraction, scoring and visualization
//! - `comparison` - Result types shared by reporter and renderer
//! - `config` - Feature-extraction parameters
//! - `cli` - Command-line interface
//! - `testgen` - Synthetic signals and WAV fixtures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use timbrecheckr::SimilarityAnalyzer;
//!
//! let analyzer = SimilarityAnalyzer::builder().sample_rate(22050).build()?;
//! let result = analyzer.compare_files("first.wav".as_ref(), "second.wav".as_ref())?;
//!
//! println!("Similarity: {:.2}%", result.percentage());
//! ```
//!
//! ## Scores
//!
//! | Score      | Meaning                                   |
//! |------------|-------------------------------------------|
//! | 1.0        | Identical mean spectral envelope          |
//! | 0.9 - 1.0  | Very close timbre                         |
//! | < 0.9      | Clearly different sources                 |
//! | < 0.0      | Anti-correlated envelopes (e.g. tone vs noise) |

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Feature-extraction configuration
pub mod config;

// Comparison result types
pub mod comparison;

// Error taxonomy
pub mod error;

// Synthetic test signals
pub mod testgen;

pub use comparison::{ComparisonResult, ComparisonSummary};
pub use config::FeatureConfig;
pub use core::{
    load_signal, AnalyzerBuilder, AudioSignal, FeatureMatrix, SignalFeatures, SimilarityAnalyzer,
    SimilarityScore, WindowType,
};
pub use error::{Error, Result};
