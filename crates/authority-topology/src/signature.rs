//! Canonical string encoding of an effective vector.

use authority_core::constants::SIGNATURE_DECIMALS;
use authority_core::{Binding, EffectiveVector};

/// Weights rounded to two decimals, in canonical signal order, joined with `|`.
///
/// Two vectors with the same signature are treated as duplicates.
pub fn vector_signature(vector: &EffectiveVector) -> String {
    vector
        .iter()
        .map(|(signal, weight)| format!("{signal}={:.*}", SIGNATURE_DECIMALS, round2(weight)))
        .collect::<Vec<_>>()
        .join("|")
}

/// Signature of a binding's context-free effective vector.
pub fn binding_signature(binding: &Binding) -> String {
    vector_signature(&binding.effective())
}

// Round half away from zero before formatting so 0.125 and 0.1250001 agree.
fn round2(w: f64) -> f64 {
    (w * 100.0).round() / 100.0
}
