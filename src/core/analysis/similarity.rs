// src/core/analysis/similarity.rs
//
// Cosine similarity between mean feature vectors.

use serde::Serialize;

use crate::error::{Error, Result};

/// Cosine similarity and its percentage form. No rounding is applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// In [-1, 1]; negative for anti-correlated timbre
    pub score: f64,
    /// `score * 100`
    pub percentage: f64,
}

impl SimilarityScore {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            percentage: score * 100.0,
        }
    }

    pub fn from_vectors(a: &[f32], b: &[f32]) -> Result<Self> {
        cosine_similarity(a, b).map(Self::new)
    }
}

/// `1 - (a·b) / (‖a‖‖b‖)`
pub fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let norm_a = checked_norm(a, "first vector")?;
    let norm_b = checked_norm(b, "second vector")?;
    let dot: f64 = a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum();

    Ok(1.0 - dot / (norm_a * norm_b))
}

/// `1 - cosine_distance`, clamped to [-1, 1] against rounding drift
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    Ok((1.0 - cosine_distance(a, b)?).clamp(-1.0, 1.0))
}

fn checked_norm(v: &[f32], label: &str) -> Result<f64> {
    if v.iter().any(|x| !x.is_finite()) {
        return Err(Error::degenerate(label, "contains non-finite values"));
    }
    let norm = v.iter().map(|&x| x as f64 * x as f64).sum::<f64>().sqrt();
    if norm == 0.0 {
        return Err(Error::degenerate(label, "zero magnitude"));
    }
    Ok(norm)
}
