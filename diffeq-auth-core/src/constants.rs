//! Protocol constants — fixed values shared by every interoperating
//! implementation of the engine.
//!
//! Changing any value here changes the responses produced for a given
//! `(secret, challenge)` pair. Tunable coefficients of the recurrence
//! live in [`crate::tuning`] and are versioned separately.

/// Number of elements in a challenge.
pub const CHALLENGE_LENGTH: usize = 50;

/// Number of cells in the internal potential field `Φ`.
pub const FIELD_SIZE: usize = 100;

/// Total number of evolution ticks the hardened variant runs per response.
/// Distributed evenly across the challenge elements.
pub const HARDENED_STEP_BUDGET: usize = 200;

/// Response channels produced by the baseline variant: `(Ψ, I, R, Φ̄)`.
pub const BASELINE_CHANNELS: usize = 4;

/// Response channels produced by the hardened variant:
/// `(Ψ, I, R, Φ̄, Lx, Ly, Lz, entropy_hash)`.
pub const HARDENED_CHANNELS: usize = 8;

/// Recommended verification tolerance for same-process round-trips.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

/// Upper (exclusive) bound of generated challenge values. Challenges are
/// drawn from `[0, CHALLENGE_VALUE_RANGE)`.
pub const CHALLENGE_VALUE_RANGE: f32 = 3.0;

/// Largest accepted magnitude for `k` and `gamma`.
pub const MAX_COEFFICIENT_MAGNITUDE: f32 = 1e3;

/// Smallest `gamma` the baseline variant accepts.
///
/// The baseline `Ψ` update is unwrapped and only non-expanding while
/// `|1 − gamma·Δt| ≤ 1`. Inside `[BASELINE_GAMMA_MIN, BASELINE_GAMMA_MAX]`
/// every in-envelope `k` and challenge yields finite channels.
pub const BASELINE_GAMMA_MIN: f32 = 0.0;

/// Largest `gamma` the baseline variant accepts.
pub const BASELINE_GAMMA_MAX: f32 = 20.0;

/// Largest accepted magnitude for a single challenge value.
pub const MAX_CHALLENGE_MAGNITUDE: f32 = 1e3;

/// Replacement state for a zero seed. Xorshift never leaves the all-zero
/// state, so seed `0` is mapped here. Seeds `0` and `0x9E37_79B9` therefore
/// produce identical responses.
pub const ZERO_SEED_SUBSTITUTE: u32 = 0x9E37_79B9;

/// Default lifetime of an issued challenge (milliseconds).
pub const DEFAULT_CHALLENGE_TTL_MS: u64 = 30_000;

/// Secret wire size in bytes: `k` (f32) ‖ `gamma` (f32) ‖ `seed` (u32).
pub const SECRET_WIRE_LENGTH: usize = 12;

/// Secret fingerprint length in hex characters.
pub const FINGERPRINT_LENGTH: usize = 16;
