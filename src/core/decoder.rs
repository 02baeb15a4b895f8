// src/core/decoder.rs
//
// Audio decoding module. Uses Symphonia for format-agnostic decoding.

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// Decoded audio at its native rate and channel layout
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Original codec name
    pub codec_name: String,
}

/// Decode audio file to floating-point samples
pub fn decode_audio(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::decode(path, e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| Error::decode(path, format!("unsupported or corrupt container ({})", e)))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::decode(path, "no supported audio track found"))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::decode(path, "file does not specify sample rate"))?;

    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    if channels == 0 {
        return Err(Error::decode(path, "file reports 0 audio channels"));
    }

    let codec_name = symphonia::default::get_codecs()
        .get_codec(track.codec_params.codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| format!("{:?}", track.codec_params.codec));

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| Error::decode(path, format!("no decoder for codec ({})", e)))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut skipped_packets = 0usize;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(Error::decode(path, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(_)) => {
                skipped_packets += 1;
                continue;
            }
            Err(e) => return Err(Error::decode(path, e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if skipped_packets > 0 {
        warn!("{}: skipped {} undecodable packet(s)", path.display(), skipped_packets);
    }

    if samples.is_empty() {
        return Err(Error::decode(path, "no audio samples decoded from file"));
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);
    debug!(
        "Decoded {}: {} @ {} Hz, {} ch, {:.2}s",
        path.display(),
        codec_name,
        sample_rate,
        channels,
        duration_secs
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
        duration_secs,
        codec_name,
    })
}

/// Average all channels into one
pub fn downmix_to_mono(audio: &DecodedAudio) -> Vec<f32> {
    if audio.channels == 1 {
        return audio.samples.clone();
    }

    audio
        .samples
        .chunks_exact(audio.channels)
        .map(|frame| frame.iter().sum::<f32>() / audio.channels as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo(samples: Vec<f32>) -> DecodedAudio {
        DecodedAudio {
            samples,
            sample_rate: 44100,
            channels: 2,
            duration_secs: 0.0,
            codec_name: "Test".to_string(),
        }
    }

    #[test]
    fn test_downmix_to_mono() {
        let mono = downmix_to_mono(&stereo(vec![0.5, -0.5, 0.3, 0.1]));
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.0).abs() < 0.001);
        assert!((mono[1] - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_downmix_mono_passthrough() {
        let audio = DecodedAudio { channels: 1, ..stereo(vec![0.1, 0.2, 0.3]) };
        assert_eq!(downmix_to_mono(&audio), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_missing_file() {
        let err = decode_audio(Path::new("/definitely/not/here.wav")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
