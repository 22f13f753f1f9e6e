//! Conformance: Determinism
//!
//! Identical `(secret, challenge)` yields bit-identical responses,
//! across repeated calls, fresh engines and concurrent threads.

use std::sync::Arc;
use std::thread;

use diffeq_auth_core::challenge::generate_challenge;
use diffeq_auth_core::prng::Xorshift32;
use diffeq_auth_core::{Engine, Secret, Variant, CHALLENGE_LENGTH};
use proptest::prelude::*;

use crate::{reference_challenge, REFERENCE_SECRET};

#[test]
fn conformance_repeated_calls_identical() {
    for variant in [Variant::Baseline, Variant::Hardened] {
        let engine = Engine::new(variant);
        let first = engine.respond(&REFERENCE_SECRET, &reference_challenge()).unwrap();
        for _ in 0..20 {
            let again = Engine::new(variant)
                .respond(&REFERENCE_SECRET, &reference_challenge())
                .unwrap();
            assert_eq!(first, again);
        }
    }
}

/// Concurrent calls share no state: every thread sees the serial answer.
#[test]
fn conformance_parallel_calls_match_serial() {
    let engine = Arc::new(Engine::new(Variant::Hardened));
    let inputs: Vec<(Secret, Vec<f32>)> = (0..16u32)
        .map(|i| {
            let secret = Secret::new(1.0 + i as f32 * 0.1, 0.5, 1000 + i);
            let challenge = generate_challenge(&mut Xorshift32::new(i + 1), CHALLENGE_LENGTH);
            (secret, challenge)
        })
        .collect();
    let serial: Vec<_> = inputs
        .iter()
        .map(|(s, c)| engine.respond(s, c).unwrap())
        .collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|(s, c)| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.respond(&s, &c).unwrap())
        })
        .collect();
    for (handle, expected) in handles.into_iter().zip(serial) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn conformance_engine_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_respond_is_deterministic(
        k in -5.0f32..5.0,
        gamma in 0.0f32..3.0,
        seed in any::<u32>(),
        challenge in prop::collection::vec(0.0f32..3.0, CHALLENGE_LENGTH),
    ) {
        let secret = Secret::new(k, gamma, seed);
        for variant in [Variant::Baseline, Variant::Hardened] {
            let engine = Engine::new(variant);
            let a = engine.respond(&secret, &challenge).unwrap();
            let b = engine.respond(&secret, &challenge).unwrap();
            let a_bits: Vec<u32> = a.channels().iter().map(|v| v.to_bits()).collect();
            let b_bits: Vec<u32> = b.channels().iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(a_bits, b_bits);
        }
    }
}
