//! Tolerance verifier.
//!
//! A response matches when EVERY channel pair differs by strictly less
//! than the tolerance. There is no aggregate distance: one channel at or
//! beyond the tolerance rejects the whole response.

use crate::errors::AuthError;
use crate::response::Response;

/// Compares two channel vectors.
///
/// Returns `Ok(true)` iff `|observed[i] − expected[i]| < tolerance` for
/// every `i`. A NaN channel never matches.
///
/// # Errors
/// Returns `AuthError::InvalidInput` if the lengths differ or the
/// tolerance is NaN or not positive.
pub fn verify(observed: &[f32], expected: &[f32], tolerance: f32) -> Result<bool, AuthError> {
    if observed.len() != expected.len() {
        return Err(AuthError::InvalidInput(format!(
            "channel count mismatch: observed {}, expected {}",
            observed.len(),
            expected.len()
        )));
    }
    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(AuthError::InvalidInput(format!(
            "tolerance must be positive, got {tolerance}"
        )));
    }
    Ok(observed
        .iter()
        .zip(expected)
        .all(|(o, e)| (o - e).abs() < tolerance))
}

/// [`verify`] over two [`Response`] values. Responses of different
/// variants never match; they are reported as a channel count mismatch.
pub fn verify_response(
    observed: &Response,
    expected: &Response,
    tolerance: f32,
) -> Result<bool, AuthError> {
    verify(observed.channels(), expected.channels(), tolerance)
}
