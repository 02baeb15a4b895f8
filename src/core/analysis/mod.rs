//! Audio analysis algorithms
//!
//! Contains:
//! - MFCC extraction (mel filterbank + DCT over the power spectrogram)
//! - Per-signal feature bundles (MFCC, STFT magnitude, time averages)
//! - Cosine similarity scoring

mod features;
mod mfcc;
mod similarity;

pub use features::{extract_features, FeatureExtractor, SignalFeatures};
pub use mfcc::Mfcc;
pub use similarity::{cosine_distance, cosine_similarity, SimilarityScore};
