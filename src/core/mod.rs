//! Core loading, analysis and rendering modules

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod loader;
pub mod visualization;

pub use analysis::{FeatureExtractor, SignalFeatures, SimilarityScore};
pub use analyzer::{AnalyzerBuilder, SimilarityAnalyzer};
pub use decoder::{decode_audio, downmix_to_mono, DecodedAudio};
pub use dsp::{FeatureMatrix, WindowType};
pub use loader::{load_signal, AudioSignal};
