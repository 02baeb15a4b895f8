//! Digital Signal Processing utilities
//!
//! Building blocks shared by the loader and the feature extractor:
//! windowing, framed FFT, mel projection, resampling and amplitude stats.

mod fft;
mod matrix;
mod mel;
mod resample;
mod stats;
mod windows;

pub use fft::Stft;
pub use matrix::FeatureMatrix;
pub use mel::{dct_ortho, hz_to_mel, mel_to_hz, power_to_db, MelFilterbank};
pub use resample::resample;
pub use stats::{amplitude_to_db, is_silent, peak_amplitude, peak_normalize, rms};
pub use windows::{create_window, WindowType};
