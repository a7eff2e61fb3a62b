pub const MIN_OVERALL_CONFIDENCE: f64 = 0.4;
pub const MAX_OVERALL_CONFIDENCE: f64 = 0.95;

/// Blends the edibility confidence with a bonus for having a photo.
pub fn confidence_score(edible_confidence: f64, has_image: bool) -> f64 {
    let base = 0.6 + if has_image { 0.1 } else { 0.0 };
    let blended =
        ((base + edible_confidence) / 2.0).clamp(MIN_OVERALL_CONFIDENCE, MAX_OVERALL_CONFIDENCE);
    round2(blended)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
