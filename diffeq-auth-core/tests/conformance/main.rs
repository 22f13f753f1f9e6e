//! Conformance Harness — Engine and Verifier Invariant Tests
//!
//! Enforces the MUST-level behavior of the response engine and the
//! verifier through the public API only.
//!
//! Invariant coverage:
//! - Golden responses, by bit pattern (golden)
//! - Determinism across calls and threads (determinism)
//! - Seed, parameter and challenge sensitivity (sensitivity)
//! - Verifier conjunction law (verifier_law)
//! - Fixed step count (step_budget)
//! - Input validation and outcome registry (error_mapping)
//! - Wire frames (encodings)
//!
//! Statistical checks run thousands of responses; the workspace test
//! profile builds with optimisation so they stay fast.

mod determinism;
mod encodings;
mod sensitivity;
mod step_budget;

use diffeq_auth_core::{Secret, CHALLENGE_LENGTH};

pub const REFERENCE_SECRET: Secret = Secret {
    k: 2.5,
    gamma: 0.8,
    seed: 12345,
};

pub fn reference_challenge() -> Vec<f32> {
    vec![1.5; CHALLENGE_LENGTH]
}
