//! Challenge generation and validation.
//!
//! ## Algorithm
//! Each value takes the top 24 bits of one `next_u32` draw, scaled to
//! `[0, 1)` exactly and multiplied by [`CHALLENGE_VALUE_RANGE`]. 24 bits
//! is the f32 mantissa width, so every draw maps to a distinct float
//! and the upper bound is never reached.

use rand_core::{OsRng, RngCore};

use crate::constants::{CHALLENGE_VALUE_RANGE, MAX_CHALLENGE_MAGNITUDE};
use crate::errors::AuthError;

const UNIT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Draws `len` challenge values uniformly from `[0, CHALLENGE_VALUE_RANGE)`.
///
/// Pass `OsRng` for production challenges; a seeded
/// [`crate::prng::Xorshift32`] gives reproducible ones.
pub fn generate_challenge<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len)
        .map(|_| (rng.next_u32() >> 8) as f32 * UNIT_SCALE * CHALLENGE_VALUE_RANGE)
        .collect()
}

/// Fresh challenge from the operating system RNG.
pub fn random_challenge(len: usize) -> Vec<f32> {
    generate_challenge(&mut OsRng, len)
}

/// Checks a challenge against the accepted input envelope.
///
/// # Errors
/// Returns `AuthError::InvalidInput` if the length differs from
/// `expected_len`, or a value is non-finite or larger in magnitude than
/// [`MAX_CHALLENGE_MAGNITUDE`]. Challenges are never padded or truncated.
pub fn validate_challenge(challenge: &[f32], expected_len: usize) -> Result<(), AuthError> {
    if challenge.len() != expected_len {
        return Err(AuthError::InvalidInput(format!(
            "challenge length {}, expected {expected_len}",
            challenge.len()
        )));
    }
    for (i, &c) in challenge.iter().enumerate() {
        if !c.is_finite() {
            return Err(AuthError::InvalidInput(format!(
                "challenge value {i} is not finite"
            )));
        }
        if c.abs() > MAX_CHALLENGE_MAGNITUDE {
            return Err(AuthError::InvalidInput(format!(
                "challenge value {i} exceeds magnitude {MAX_CHALLENGE_MAGNITUDE}"
            )));
        }
    }
    Ok(())
}
