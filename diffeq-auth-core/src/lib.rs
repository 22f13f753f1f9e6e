//! DiffEq Auth Core — chaotic state-evolution challenge–response engine.
//!
//! A device proves knowledge of a [`Secret`] `(k, gamma, seed)` by
//! evolving a seeded system of coupled recurrences under a server
//! [challenge](challenge) and returning the final state as a
//! [`Response`]. The server runs the same evolution and compares the two
//! vectors with a tolerance [verifier](verifier).
//!
//! Two variants exist. The baseline variant runs one tick per challenge
//! element and returns 4 channels. The hardened variant adds a Lorenz
//! flow, logistic-map injection, running seed noise, modular wrapping
//! and an entropy accumulator, runs a fixed 200 ticks and returns 8
//! channels.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Fixed protocol values |
//! | [`errors`] | `AuthError`, verification outcome codes |
//! | [`tuning`] | Variant, versioned coefficients, `EngineConfig` |
//! | [`prng`] | Xorshift32 stream |
//! | [`nonlinear`] | `fast_tanh`, `fast_sin`, `wrap`, logistic map |
//! | [`secret`] | Secret tuple and validation |
//! | [`state`] | Simulation state, `initialize`, `step` |
//! | [`engine`] | `respond`, step instrumentation |
//! | [`response`] | Response channels |
//! | [`verifier`] | Tolerance comparison |
//! | [`challenge`] | Challenge generation and validation |
//! | [`encoding`] | Hex and little-endian wire frames |
//! | [`hash`] | SHA-256, secret fingerprint |
//! | [`session`] | Server authenticator and device |
//! | [`vectors`] | Golden vector generator (feature `vectors`) |
//!
//! # Determinism
//!
//! Responses are bit-identical across runs, threads and IEEE-754
//! platforms: the engine uses `f32` arithmetic with no platform
//! transcendental functions. `vectors/golden.vectors.json` pins the
//! exact bit patterns.
//!
//! # Example
//!
//! ```
//! use diffeq_auth_core::{verify_response, Engine, Secret, Variant, DEFAULT_TOLERANCE};
//!
//! let engine = Engine::new(Variant::Hardened);
//! let secret = Secret::new(2.5, 0.8, 12345);
//! let challenge = vec![1.5_f32; 50];
//!
//! let expected = engine.respond(&secret, &challenge).unwrap();
//! let observed = engine.respond(&secret, &challenge).unwrap();
//! assert!(verify_response(&observed, &expected, DEFAULT_TOLERANCE).unwrap());
//! ```

/// Protocol constants.
pub mod constants;

/// Error types and the verification outcome registry.
pub mod errors;

/// Versioned tuning coefficients and engine configuration.
pub mod tuning;

/// Deterministic xorshift32 generator.
pub mod prng;

/// Bit-reproducible nonlinear functions.
pub mod nonlinear;

/// Secret parameter tuple.
pub mod secret;

/// Simulation state and evolution tick.
pub mod state;

/// Response-generation engine.
pub mod engine;

/// Response vector.
pub mod response;

/// Tolerance verifier.
pub mod verifier;

/// Challenge generation and validation.
pub mod challenge;

/// Wire encodings — hex and little-endian f32 frames.
pub mod encoding;

/// Hashing utilities — SHA-256 and secret fingerprints.
pub mod hash;

/// Authentication session: authenticator and device.
pub mod session;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use constants::{CHALLENGE_LENGTH, DEFAULT_TOLERANCE};
pub use engine::{Engine, StepCounter, StepObserver};
pub use errors::{is_valid_outcome_code, AuthError, OUTCOME_CODES};
pub use response::Response;
pub use secret::Secret;
pub use session::{Authenticator, Device, IssuedChallenge, SessionConfig, VerificationOutcome};
pub use tuning::{ChaosTuning, CoreTuning, EngineConfig, Variant};
pub use verifier::{verify, verify_response};
