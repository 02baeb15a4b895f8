// src/error.rs
//
// Error taxonomy for the comparison pipeline. Every stage returns these;
// nothing is recovered, the binary aborts on the first one.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, analysing or rendering a comparison
#[derive(Debug, Error)]
pub enum Error {
    #[error("Audio file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Resampling failed: {0}")]
    Resample(String),

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("Signal too short for analysis: {samples} samples, need at least {required}")]
    SignalTooShort { samples: usize, required: usize },

    #[error("Feature vectors differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Zero-magnitude or non-finite feature vector; cosine similarity is undefined
    #[error("Degenerate feature vector for {label}: {reason}")]
    DegenerateVector { label: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Dashboard rendering failed: {0}")]
    Render(String),

    #[error("Cannot display dashboard: {0}")]
    Display(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn degenerate(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::DegenerateVector {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
