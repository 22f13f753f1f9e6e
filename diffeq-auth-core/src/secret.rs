//! Secret parameter tuple.

use crate::constants::{BASELINE_GAMMA_MAX, BASELINE_GAMMA_MIN, MAX_COEFFICIENT_MAGNITUDE};
use crate::errors::AuthError;
use crate::tuning::Variant;

/// Private parameters of the evolution. Analogous to a key: whoever
/// holds a `Secret` can answer every challenge for its device.
///
/// `Debug` is implemented by hand and never prints field values.
#[derive(Clone, Copy, PartialEq)]
pub struct Secret {
    /// Coupling of the field mean into the excitation derivative.
    pub k: f32,
    /// Attention decay coefficient.
    pub gamma: f32,
    /// Seeds the initialization and running PRNG streams.
    pub seed: u32,
}

impl Secret {
    pub fn new(k: f32, gamma: f32, seed: u32) -> Self {
        Self { k, gamma, seed }
    }

    /// Validates the coefficients against the accepted input envelope.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidInput` if `k` or `gamma` is non-finite
    /// or larger in magnitude than [`MAX_COEFFICIENT_MAGNITUDE`]. Every
    /// seed value is valid.
    pub fn validate(&self) -> Result<(), AuthError> {
        for (name, value) in [("k", self.k), ("gamma", self.gamma)] {
            if !value.is_finite() {
                return Err(AuthError::InvalidInput(format!(
                    "secret coefficient {name} is not finite"
                )));
            }
            if value.abs() > MAX_COEFFICIENT_MAGNITUDE {
                return Err(AuthError::InvalidInput(format!(
                    "secret coefficient {name} exceeds magnitude {MAX_COEFFICIENT_MAGNITUDE}"
                )));
            }
        }
        Ok(())
    }

    /// [`Secret::validate`] plus the stability range of `variant`.
    ///
    /// The hardened variant wraps `I` and `Ψ` and accepts the whole
    /// envelope. The baseline variant additionally requires
    /// `gamma ∈ [BASELINE_GAMMA_MIN, BASELINE_GAMMA_MAX]`; outside it the
    /// unwrapped `Ψ` grows without bound and the response overflows.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidInput` for any secret `variant` cannot
    /// answer with finite channels.
    pub fn validate_for(&self, variant: Variant) -> Result<(), AuthError> {
        self.validate()?;
        if variant == Variant::Baseline
            && !(BASELINE_GAMMA_MIN..=BASELINE_GAMMA_MAX).contains(&self.gamma)
        {
            return Err(AuthError::InvalidInput(format!(
                "secret coefficient gamma outside baseline range [{BASELINE_GAMMA_MIN}, {BASELINE_GAMMA_MAX}]"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").finish_non_exhaustive()
    }
}
