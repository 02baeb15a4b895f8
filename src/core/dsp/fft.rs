//! Short-time Fourier transform with windowing

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::matrix::FeatureMatrix;
use super::windows::create_window;
use crate::config::FeatureConfig;
use crate::error::{Error, Result};

/// Framed real FFT over a whole signal
pub struct Stft {
    fft: Arc<dyn RealToComplex<f32>>,
    window: Vec<f32>,
    n_fft: usize,
    hop_length: usize,
    center: bool,
}

impl Stft {
    pub fn new(config: &FeatureConfig) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        Self {
            fft: planner.plan_fft_forward(config.n_fft),
            window: create_window(config.n_fft, config.window),
            n_fft: config.n_fft,
            hop_length: config.hop_length,
            center: config.center,
        }
    }

    pub fn num_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }

    /// Number of frames produced for a signal of `len` samples
    pub fn num_frames(&self, len: usize) -> Result<usize> {
        let padded = if self.center { len + 2 * (self.n_fft / 2) } else { len };
        if len == 0 || padded < self.n_fft {
            return Err(Error::SignalTooShort {
                samples: len,
                required: if self.center { 1 } else { self.n_fft },
            });
        }
        Ok(1 + (padded - self.n_fft) / self.hop_length)
    }

    /// |X| per bin and frame
    pub fn magnitude(&self, signal: &[f32]) -> Result<FeatureMatrix> {
        self.spectrogram(signal, |c| c.norm())
    }

    /// |X|² per bin and frame
    pub fn power(&self, signal: &[f32]) -> Result<FeatureMatrix> {
        self.spectrogram(signal, |c| c.norm_sqr())
    }

    fn spectrogram(
        &self,
        signal: &[f32],
        cell: impl Fn(&Complex<f32>) -> f32,
    ) -> Result<FeatureMatrix> {
        let num_frames = self.num_frames(signal.len())?;
        let padded = self.pad(signal);

        let mut input = self.fft.make_input_vec();
        let mut output = self.fft.make_output_vec();
        let mut scratch = self.fft.make_scratch_vec();
        let mut matrix = FeatureMatrix::zeros(self.num_bins(), num_frames);

        for frame in 0..num_frames {
            let start = frame * self.hop_length;
            for (i, slot) in input.iter_mut().enumerate() {
                *slot = padded[start + i] * self.window[i];
            }

            self.fft
                .process_with_scratch(&mut input, &mut output, &mut scratch)
                .map_err(|e| Error::Fft(e.to_string()))?;

            for (bin, value) in output.iter().enumerate() {
                matrix.set(bin, frame, cell(value));
            }
        }

        Ok(matrix)
    }

    fn pad(&self, signal: &[f32]) -> Vec<f32> {
        if !self.center {
            return signal.to_vec();
        }
        let half = self.n_fft / 2;
        let mut padded = Vec::with_capacity(signal.len() + 2 * half);
        padded.resize(half, 0.0);
        padded.extend_from_slice(signal);
        padded.resize(signal.len() + 2 * half, 0.0);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn tone(freq: f32, sr: u32, len: usize) -> Vec<f32> {
        (0..len).map(|i| (2.0 * PI * freq * i as f32 / sr as f32).sin()).collect()
    }

    #[test]
    fn test_centered_frame_count() {
        let stft = Stft::new(&FeatureConfig::default());
        assert_eq!(stft.num_frames(22050).unwrap(), 1 + 22050 / 512);
        assert_eq!(stft.num_frames(100).unwrap(), 1);
    }

    #[test]
    fn test_uncentered_short_signal_fails() {
        let config = FeatureConfig { center: false, ..Default::default() };
        let stft = Stft::new(&config);
        assert!(matches!(
            stft.magnitude(&[0.0; 1000]),
            Err(Error::SignalTooShort { required: 2048, .. })
        ));
        assert_eq!(stft.num_frames(2048).unwrap(), 1);
    }

    #[test]
    fn test_sine_peak_bin() {
        let stft = Stft::new(&FeatureConfig::default());
        let spectrum = stft.magnitude(&tone(440.0, 22050, 22050)).unwrap();
        assert_eq!(spectrum.rows(), 1025);

        let means = spectrum.row_means();
        let peak_bin = means
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        // 440 Hz * 2048 / 22050 ≈ 40.9
        assert!((40..=42).contains(&peak_bin), "peak at bin {}", peak_bin);
    }

    #[test]
    fn test_power_is_squared_magnitude() {
        let stft = Stft::new(&FeatureConfig::default());
        let signal = tone(1000.0, 22050, 4096);
        let mag = stft.magnitude(&signal).unwrap();
        let pow = stft.power(&signal).unwrap();
        let (r, c) = (93, 3);
        assert!((mag.get(r, c).powi(2) - pow.get(r, c)).abs() <= 1e-3 * pow.get(r, c).max(1.0));
    }
}
