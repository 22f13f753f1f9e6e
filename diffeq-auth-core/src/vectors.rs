//! Deterministic golden vector generator.
//!
//! Produces `vectors/golden.vectors.json`: one entry per
//! `(variant, secret, challenge)` case with every float written as its
//! bit pattern, so the committed file pins responses exactly.
//!
//! Challenges are built from closed-form rules or a seeded
//! [`Xorshift32`] stream; nothing here reads a clock or OS entropy.

use serde::Serialize;

use crate::challenge::generate_challenge;
use crate::constants::{CHALLENGE_LENGTH, HARDENED_STEP_BUDGET};
use crate::encoding::{encode_challenge, encode_response, encode_secret, f32_bits_hex, to_hex};
use crate::engine::Engine;
use crate::errors::AuthError;
use crate::hash::secret_fingerprint;
use crate::prng::Xorshift32;
use crate::secret::Secret;
use crate::tuning::Variant;

const WARNING: &str =
    "GENERATED FILE. Produced by diffeq_auth_core::vectors::generate_golden_json(). Do not edit by hand.";

const DESCRIPTION: &str = "Golden responses of the baseline (tuning v1) and hardened (tuning v2) engines. Floats are IEEE-754 binary32 bit patterns; frames are little-endian.";

/// One generator input.
#[derive(Debug, Clone)]
pub struct GoldenCase {
    pub name: &'static str,
    pub secret: Secret,
    pub challenge: Vec<f32>,
}

#[derive(Serialize)]
struct GoldenFile {
    #[serde(rename = "_WARNING")]
    warning: &'static str,
    description: &'static str,
    challenge_length: usize,
    step_budget: usize,
    vectors: Vec<GoldenVector>,
}

#[derive(Serialize)]
struct GoldenVector {
    id: String,
    variant: &'static str,
    tuning_version: u32,
    k_bits: String,
    gamma_bits: String,
    seed: u32,
    secret_hex: String,
    fingerprint: String,
    challenge_hex: String,
    response_bits: Vec<String>,
    response_hex: String,
}

/// The fixed generator inputs, in file order (each is run under both
/// variants, baseline first).
pub fn golden_cases() -> Vec<GoldenCase> {
    let constant = vec![1.5_f32; CHALLENGE_LENGTH];
    let ramp: Vec<f32> = (0..CHALLENGE_LENGTH).map(|i| i as f32 * 0.06).collect();
    vec![
        GoldenCase {
            name: "reference",
            secret: Secret::new(2.5, 0.8, 12345),
            challenge: constant.clone(),
        },
        GoldenCase {
            name: "zero-seed",
            secret: Secret::new(2.5, 0.8, 0),
            challenge: constant,
        },
        GoldenCase {
            name: "ramp",
            secret: Secret::new(1.2, 1.7, 987_654_321),
            challenge: ramp,
        },
        GoldenCase {
            name: "random-challenge",
            secret: Secret::new(3.9, 0.35, 42),
            challenge: generate_challenge(&mut Xorshift32::new(7), CHALLENGE_LENGTH),
        },
        GoldenCase {
            name: "negative-coupling",
            secret: Secret::new(-1.5, 0.6, u32::MAX),
            challenge: generate_challenge(&mut Xorshift32::new(99), CHALLENGE_LENGTH),
        },
    ]
}

fn golden_vector(engine: &Engine, case: &GoldenCase) -> Result<GoldenVector, AuthError> {
    let variant = engine.variant();
    let response = engine.respond(&case.secret, &case.challenge)?;
    Ok(GoldenVector {
        id: format!("{}-{}", variant.name(), case.name),
        variant: variant.name(),
        tuning_version: variant.tuning_version(),
        k_bits: f32_bits_hex(case.secret.k),
        gamma_bits: f32_bits_hex(case.secret.gamma),
        seed: case.secret.seed,
        secret_hex: to_hex(&encode_secret(&case.secret)),
        fingerprint: secret_fingerprint(&case.secret),
        challenge_hex: to_hex(&encode_challenge(&case.challenge)),
        response_bits: response.channels().iter().map(|&v| f32_bits_hex(v)).collect(),
        response_hex: to_hex(&encode_response(&response)),
    })
}

/// Generates the golden vector file contents.
///
/// # Errors
/// Propagates engine errors (none occur for the fixed cases) and JSON
/// serialization failures as `AuthError::Encoding`.
pub fn generate_golden_json() -> Result<String, AuthError> {
    let cases = golden_cases();
    let mut vectors = Vec::with_capacity(cases.len() * 2);
    for variant in [Variant::Baseline, Variant::Hardened] {
        let engine = Engine::new(variant);
        for case in &cases {
            vectors.push(golden_vector(&engine, case)?);
        }
    }
    let file = GoldenFile {
        warning: WARNING,
        description: DESCRIPTION,
        challenge_length: CHALLENGE_LENGTH,
        step_budget: HARDENED_STEP_BUDGET,
        vectors,
    };
    serde_json::to_string_pretty(&file)
        .map_err(|e| AuthError::Encoding(format!("golden vector serialization: {e}")))
}
