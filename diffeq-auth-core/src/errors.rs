//! Error types for diffeq-auth-core.
//!
//! The engine is a total function over well-formed inputs. Every
//! failure it can report is an input or configuration fault detected
//! before evolution starts, or a non-finite channel detected after it.
//!
//! Session-level outcomes (replay, expiry, device mismatch) are not
//! errors: they are reported as [`crate::session::VerificationOutcome`]
//! values whose codes live in [`OUTCOME_CODES`].

/// Unified error type for all diffeq-auth-core operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// Malformed secret, challenge, response or tolerance.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Engine or session configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Wire encoding error (hex, little-endian f32 frames).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Evolution produced a non-finite response channel.
    #[error("Divergence error: {0}")]
    Diverged(String),

    /// Session bookkeeping error (unknown device, duplicate registration).
    #[error("Session error: {0}")]
    Session(String),
}

// ── Verification Outcome Registry ───────────────────────────────────

/// Canonical verification outcome codes — 7 codes.
///
/// Every verdict the authenticator reports to a transport MUST use a
/// code from this array. `AUTH_SUCCESS` is the only accepting code.
pub const OUTCOME_CODES: [&str; 7] = [
    "AUTH_SUCCESS",
    "INVALID_RESPONSE",
    "REPLAY_ATTACK_DETECTED",
    "UNKNOWN_CHALLENGE",
    "DEVICE_MISMATCH",
    "CHALLENGE_EXPIRED",
    "UNKNOWN_DEVICE",
];

/// Returns `true` if the given string is a canonical outcome code.
pub fn is_valid_outcome_code(code: &str) -> bool {
    OUTCOME_CODES.contains(&code)
}
