//! Amplitude statistics and peak normalization

/// Compute peak amplitude
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

/// Compute RMS (Root Mean Square)
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}

/// True when no sample carries usable energy
pub fn is_silent(samples: &[f32]) -> bool {
    peak_amplitude(samples) < f32::MIN_POSITIVE
}

/// Scale so that max |sample| == 1.0. Silent input is left untouched.
///
/// Returns the gain that was applied (1.0 for silence).
pub fn peak_normalize(samples: &mut [f32]) -> f32 {
    let peak = peak_amplitude(samples);
    if peak < f32::MIN_POSITIVE {
        return 1.0;
    }
    for s in samples.iter_mut() {
        *s /= peak;
    }
    1.0 / peak
}

/// Convert amplitude to dB (relative to 1.0)
pub fn amplitude_to_db(amplitude: f32) -> f32 {
    if amplitude > 1e-10 {
        20.0 * amplitude.log10()
    } else {
        -200.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_normalize_scales_to_unity() {
        let mut samples = vec![0.1, -0.4, 0.25];
        let gain = peak_normalize(&mut samples);
        assert!((peak_amplitude(&samples) - 1.0).abs() < 1e-6);
        assert!((samples[1] + 1.0).abs() < 1e-6);
        assert!((gain - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_peak_normalize_is_noop_when_already_normalized() {
        let original = vec![0.5, -1.0, 0.25, 0.0];
        let mut samples = original.clone();
        peak_normalize(&mut samples);
        assert_eq!(samples, original);
    }

    #[test]
    fn test_peak_normalize_silence() {
        let mut samples = vec![0.0; 64];
        assert_eq!(peak_normalize(&mut samples), 1.0);
        assert!(samples.iter().all(|&s| s == 0.0));
        assert!(is_silent(&samples));
    }

    #[test]
    fn test_rms_of_square_wave() {
        let samples: Vec<f32> = (0..100).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
        assert!((rms(&samples) - 0.5).abs() < 1e-6);
        assert!((amplitude_to_db(0.5) + 6.0206).abs() < 1e-3);
    }
}
