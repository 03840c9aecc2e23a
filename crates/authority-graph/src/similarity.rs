//! Cosine helpers over effective vectors.

use authority_core::EffectiveVector;

/// Cosine similarity; `None` when either vector has zero norm.
pub fn cosine_similarity(a: &EffectiveVector, b: &EffectiveVector) -> Option<f64> {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        return None;
    }
    let dot: f64 = a
        .weights()
        .iter()
        .zip(b.weights().iter())
        .map(|(x, y)| x * y)
        .sum();
    Some((dot / denom).clamp(-1.0, 1.0))
}

/// Edge weight: higher = more orthogonal pairing.
pub fn cosine_distance(a: &EffectiveVector, b: &EffectiveVector) -> Option<f64> {
    cosine_similarity(a, b).map(|s| 1.0 - s)
}
