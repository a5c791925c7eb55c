// File: src/core/normalize.rs
use crate::core::distance::MAX_DIFFERENCE;
use crate::core::types::{Candidate, DetectionResult, UNDETERMINED};

/// Turns ascending distances into confidences.
///
/// `confidence = 1 - (distance - min) / (len(text) * MAX_DIFFERENCE - min)`,
/// where `text` is the analyzed input as given, before cleaning. A
/// degenerate denominator gives confidence 0 rather than NaN.
pub fn normalize(text: &str, distances: &[(&str, usize)]) -> DetectionResult {
    let Some(min) = distances.iter().map(|&(_, distance)| distance).min() else {
        return DetectionResult::undetermined();
    };
    if let [(language, _)] = distances {
        if *language == UNDETERMINED {
            return DetectionResult::undetermined();
        }
    }

    let length = text.chars().count();
    let max = (length * MAX_DIFFERENCE) as f64 - min as f64;

    let candidates = distances
        .iter()
        .map(|&(language, distance)| {
            let confidence = 1.0 - (distance - min) as f64 / max;
            let confidence = if confidence.is_finite() { confidence } else { 0.0 };
            Candidate::new(language, confidence)
        })
        .collect();
    DetectionResult::from_candidates(candidates)
}
