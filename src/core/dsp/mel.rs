// src/core/dsp/mel.rs
//
// Slaney-style mel filterbank, log compression and the orthonormal DCT used
// to turn a power spectrogram into cepstral coefficients.

use std::f64::consts::PI;

use super::matrix::FeatureMatrix;
use crate::config::FeatureConfig;

const F_SP: f64 = 200.0 / 3.0;
const MIN_LOG_HZ: f64 = 1000.0;
const MIN_LOG_MEL: f64 = MIN_LOG_HZ / F_SP;
const AMIN: f32 = 1e-10;

fn log_step() -> f64 {
    6.4f64.ln() / 27.0
}

/// Hz to mel, linear below 1 kHz and logarithmic above
pub fn hz_to_mel(hz: f64) -> f64 {
    if hz >= MIN_LOG_HZ {
        MIN_LOG_MEL + (hz / MIN_LOG_HZ).ln() / log_step()
    } else {
        hz / F_SP
    }
}

pub fn mel_to_hz(mel: f64) -> f64 {
    if mel >= MIN_LOG_MEL {
        MIN_LOG_HZ * (log_step() * (mel - MIN_LOG_MEL)).exp()
    } else {
        F_SP * mel
    }
}

/// Triangular filters, area-normalised, mapping `1 + n_fft/2` bins to `n_mels` bands
#[derive(Debug, Clone)]
pub struct MelFilterbank {
    weights: FeatureMatrix,
    /// Non-zero bin span of each band, `start..end`
    spans: Vec<(usize, usize)>,
}

impl MelFilterbank {
    pub fn new(config: &FeatureConfig) -> Self {
        let n_mels = config.n_mels;
        let num_bins = config.num_bins();
        let sr = config.sample_rate as f64;

        let fft_freqs: Vec<f64> = (0..num_bins)
            .map(|i| i as f64 * sr / config.n_fft as f64)
            .collect();

        let mel_lo = hz_to_mel(config.fmin as f64);
        let mel_hi = hz_to_mel(config.effective_fmax() as f64);
        let edges: Vec<f64> = (0..n_mels + 2)
            .map(|i| mel_to_hz(mel_lo + (mel_hi - mel_lo) * i as f64 / (n_mels + 1) as f64))
            .collect();

        let mut weights = FeatureMatrix::zeros(n_mels, num_bins);
        let mut spans = Vec::with_capacity(n_mels);
        for band in 0..n_mels {
            let (left, center, right) = (edges[band], edges[band + 1], edges[band + 2]);
            let norm = 2.0 / (right - left);
            let (mut start, mut end) = (num_bins, 0);
            for (bin, &freq) in fft_freqs.iter().enumerate() {
                let rising = (freq - left) / (center - left);
                let falling = (right - freq) / (right - center);
                let w = rising.min(falling).max(0.0);
                if w > 0.0 {
                    weights.set(band, bin, (w * norm) as f32);
                    start = start.min(bin);
                    end = bin + 1;
                }
            }
            spans.push(if start < end { (start, end) } else { (0, 0) });
        }

        Self { weights, spans }
    }

    pub fn num_bands(&self) -> usize {
        self.weights.rows()
    }

    /// Band weights over FFT bins
    pub fn band(&self, band: usize) -> &[f32] {
        self.weights.row(band)
    }

    /// Bins `start..end` outside which the band's weights are zero
    pub fn span(&self, band: usize) -> (usize, usize) {
        self.spans[band]
    }

    /// Project a `bins × frames` spectrogram onto the mel bands
    pub fn apply(&self, spectrogram: &FeatureMatrix) -> FeatureMatrix {
        let frames = spectrogram.cols();
        let mut mel = FeatureMatrix::zeros(self.num_bands(), frames);
        for band in 0..self.num_bands() {
            let (start, end) = self.spans[band];
            let weights = &self.band(band)[start..end];
            for (offset, &w) in weights.iter().enumerate() {
                for (frame, &value) in spectrogram.row(start + offset).iter().enumerate() {
                    mel.set(band, frame, mel.get(band, frame) + w * value);
                }
            }
        }
        mel
    }
}

/// Power to decibels (ref 1.0), floored at `max - top_db` over the whole matrix
pub fn power_to_db(power: &mut FeatureMatrix, top_db: Option<f32>) {
    power.map_in_place(|p| 10.0 * p.max(AMIN).log10());
    if let (Some(top_db), Some((_, max))) = (top_db, power.min_max()) {
        let floor = max - top_db;
        power.map_in_place(|db| db.max(floor));
    }
}

/// First `n_out` outputs of a DCT-II with orthonormal scaling
pub fn dct_ortho(input: &[f32], n_out: usize) -> Vec<f32> {
    let n = input.len();
    if n == 0 {
        return vec![0.0; n_out];
    }
    let scale_0 = (1.0 / n as f64).sqrt();
    let scale_k = (2.0 / n as f64).sqrt();

    (0..n_out)
        .map(|k| {
            let sum: f64 = input
                .iter()
                .enumerate()
                .map(|(i, &x)| x as f64 * (PI * k as f64 * (2 * i + 1) as f64 / (2 * n) as f64).cos())
                .sum();
            let scale = if k == 0 { scale_0 } else { scale_k };
            (sum * scale) as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mel_scale_round_trip_and_knee() {
        assert!((hz_to_mel(1000.0) - 15.0).abs() < 1e-9);
        assert!((hz_to_mel(200.0) - 3.0).abs() < 1e-9);
        for hz in [0.0, 440.0, 1000.0, 4000.0, 11025.0] {
            assert!((mel_to_hz(hz_to_mel(hz)) - hz).abs() < 1e-6);
        }
    }

    #[test]
    fn test_filterbank_shape_and_coverage() {
        let config = FeatureConfig::default();
        let bank = MelFilterbank::new(&config);
        assert_eq!(bank.num_bands(), 128);
        for band in 0..bank.num_bands() {
            assert!(bank.band(band).iter().all(|&w| w >= 0.0));
        }
        // Every band above the lowest few should catch at least one bin
        assert!(bank.band(64).iter().any(|&w| w > 0.0));
        assert!(bank.band(127).iter().any(|&w| w > 0.0));
    }

    #[test]
    fn test_spans_cover_all_weights() {
        let bank = MelFilterbank::new(&FeatureConfig::default());
        for band in 0..bank.num_bands() {
            let (start, end) = bank.span(band);
            for (bin, &w) in bank.band(band).iter().enumerate() {
                if w > 0.0 {
                    assert!((start..end).contains(&bin), "band {} bin {}", band, bin);
                }
            }
        }
        let (start, end) = bank.span(10);
        assert!(end - start < 20);
    }

    #[test]
    fn test_apply_matches_dense_projection() {
        let config = FeatureConfig { n_fft: 512, n_mels: 40, ..Default::default() };
        let bank = MelFilterbank::new(&config);
        let bins = config.num_bins();
        let data: Vec<f32> = (0..bins * 3).map(|i| ((i * 37 % 101) as f32) / 10.0).collect();
        let spec = FeatureMatrix::from_vec(bins, 3, data).unwrap();

        let mel = bank.apply(&spec);
        for band in 0..40 {
            for frame in 0..3 {
                let dense: f32 = (0..bins).map(|b| bank.band(band)[b] * spec.get(b, frame)).sum();
                assert!((mel.get(band, frame) - dense).abs() <= 1e-4 * dense.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_power_to_db_clamps_dynamic_range() {
        let mut m = FeatureMatrix::from_vec(1, 3, vec![1.0, 1e-3, 0.0]).unwrap();
        power_to_db(&mut m, Some(20.0));
        assert!(m.get(0, 0).abs() < 1e-5);
        assert!((m.get(0, 1) + 20.0).abs() < 1e-4);
        assert!((m.get(0, 2) + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_power_to_db_without_clamp_uses_amin() {
        let mut m = FeatureMatrix::from_vec(1, 1, vec![0.0]).unwrap();
        power_to_db(&mut m, None);
        assert!((m.get(0, 0) + 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_dct_of_constant_is_dc_only() {
        let coeffs = dct_ortho(&[2.0; 16], 5);
        assert!((coeffs[0] - 2.0 * 4.0).abs() < 1e-5); // 2 * sqrt(16)
        for c in &coeffs[1..] {
            assert!(c.abs() < 1e-5);
        }
    }

    #[test]
    fn test_dct_preserves_energy() {
        let x: Vec<f32> = (0..8).map(|i| (i as f32 * 0.7).sin()).collect();
        let y = dct_ortho(&x, 8);
        let ex: f32 = x.iter().map(|v| v * v).sum();
        let ey: f32 = y.iter().map(|v| v * v).sum();
        assert!((ex - ey).abs() < 1e-4);
    }
}
