use super::ReliabilityError;

/// Pairs reliabilities with confidences element-wise.
///
/// A single-element side is repeated against every element of the other,
/// which is how a calculator holds one variable fixed while sweeping another.
pub(super) fn pair(
    reliabilities: &[f64],
    confidences: &[f64],
) -> Result<Vec<(f64, f64)>, ReliabilityError> {
    match (reliabilities, confidences) {
        (r, c) if r.len() == c.len() => Ok(r.iter().copied().zip(c.iter().copied()).collect()),
        (&[r], c) => Ok(c.iter().map(|&c| (r, c)).collect()),
        (r, &[c]) => Ok(r.iter().map(|&r| (r, c)).collect()),
        (r, c) => Err(ReliabilityError::ShapeMismatch {
            reliability: r.len(),
            confidence: c.len(),
        }),
    }
}
