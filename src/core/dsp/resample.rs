// src/core/dsp/resample.rs
//
// Band-limited sample-rate conversion for mono signals.

use log::debug;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::error::{Error, Result};

const SINC_LEN: usize = 256;

/// Convert `samples` from `from_rate` to `to_rate`.
///
/// Output length is `ceil(len * to / from)`; the resampler's group delay is
/// trimmed so the output stays aligned with the input.
pub fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }
    if from_rate == 0 || to_rate == 0 {
        return Err(Error::Resample(format!(
            "invalid rates {} -> {}",
            from_rate, to_rate
        )));
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let expected = (samples.len() as f64 * ratio).ceil() as usize;

    let params = SincInterpolationParameters {
        sinc_len: SINC_LEN,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    // Trailing zeros push the filter's lookahead past the last real sample,
    // so the first call already emits the whole signal plus the group delay
    let mut padded = Vec::with_capacity(samples.len() + 2 * SINC_LEN);
    padded.extend_from_slice(samples);
    padded.resize(samples.len() + 2 * SINC_LEN, 0.0);

    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, padded.len(), 1)
        .map_err(|e| Error::Resample(e.to_string()))?;
    let delay = resampler.output_delay();

    let waves_in = vec![padded];
    let mut output = resampler
        .process(&waves_in, None)
        .map_err(|e| Error::Resample(e.to_string()))?
        .swap_remove(0);

    while output.len() < expected + delay {
        let tail = resampler
            .process_partial(None::<&[Vec<f32>]>, None)
            .map_err(|e| Error::Resample(e.to_string()))?
            .swap_remove(0);
        if tail.is_empty() {
            return Err(Error::Resample(format!(
                "resampler produced {} of {} frames",
                output.len(),
                expected + delay
            )));
        }
        output.extend_from_slice(&tail);
    }

    let output: Vec<f32> = output.into_iter().skip(delay).take(expected).collect();

    debug!(
        "Resampled {} -> {} samples ({} Hz -> {} Hz, delay {})",
        samples.len(),
        output.len(),
        from_rate,
        to_rate,
        delay
    );

    Ok(output)
}
