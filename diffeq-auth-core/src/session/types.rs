//! Session types — configuration, issued challenges and verdicts.

use crate::constants::{DEFAULT_CHALLENGE_TTL_MS, DEFAULT_TOLERANCE};
use crate::errors::AuthError;
use crate::tuning::Variant;

/// Server-side session configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Engine variant used for every registered device.
    pub variant: Variant,
    /// Verification tolerance passed to the verifier.
    pub tolerance: f32,
    /// Lifetime of an issued challenge in milliseconds.
    pub challenge_ttl_ms: u64,
}

impl SessionConfig {
    /// # Errors
    /// Returns `AuthError::InvalidConfig` for a non-finite or non-positive
    /// tolerance or a zero TTL.
    pub fn validate(&self) -> Result<(), AuthError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AuthError::InvalidConfig(format!(
                "session tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        if self.challenge_ttl_ms == 0 {
            return Err(AuthError::InvalidConfig(
                "challenge TTL must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Hardened,
            tolerance: DEFAULT_TOLERANCE,
            challenge_ttl_ms: DEFAULT_CHALLENGE_TTL_MS,
        }
    }
}

/// Challenge handed to a device. Carries no expected response; that
/// stays on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedChallenge {
    /// `CH-{counter:08}-{issued_at_secs}`.
    pub id: String,
    /// Device the challenge is bound to.
    pub device_id: String,
    pub values: Vec<f32>,
    pub issued_at_ms: u64,
    pub expires_at_ms: u64,
}

/// Verdict of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    Success,
    InvalidResponse,
    ReplayDetected,
    UnknownChallenge,
    DeviceMismatch,
    ChallengeExpired,
    UnknownDevice,
}

impl VerificationOutcome {
    /// Canonical code from [`crate::errors::OUTCOME_CODES`].
    pub fn code(self) -> &'static str {
        match self {
            VerificationOutcome::Success => "AUTH_SUCCESS",
            VerificationOutcome::InvalidResponse => "INVALID_RESPONSE",
            VerificationOutcome::ReplayDetected => "REPLAY_ATTACK_DETECTED",
            VerificationOutcome::UnknownChallenge => "UNKNOWN_CHALLENGE",
            VerificationOutcome::DeviceMismatch => "DEVICE_MISMATCH",
            VerificationOutcome::ChallengeExpired => "CHALLENGE_EXPIRED",
            VerificationOutcome::UnknownDevice => "UNKNOWN_DEVICE",
        }
    }

    pub fn is_success(self) -> bool {
        self == VerificationOutcome::Success
    }

    /// Every outcome, in registry order.
    pub const ALL: [VerificationOutcome; 7] = [
        VerificationOutcome::Success,
        VerificationOutcome::InvalidResponse,
        VerificationOutcome::ReplayDetected,
        VerificationOutcome::UnknownChallenge,
        VerificationOutcome::DeviceMismatch,
        VerificationOutcome::ChallengeExpired,
        VerificationOutcome::UnknownDevice,
    ];
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
