//! Conformance: Fixed Step Count
//!
//! The number of evolution ticks inside `respond` depends on the
//! configured challenge length alone. Counted through the observer,
//! never timed.

use diffeq_auth_core::challenge::generate_challenge;
use diffeq_auth_core::prng::Xorshift32;
use diffeq_auth_core::{
    AuthError, Engine, EngineConfig, Secret, StepCounter, Variant, CHALLENGE_LENGTH,
};

fn count(engine: &Engine, secret: &Secret, challenge: &[f32]) -> usize {
    let mut counter = StepCounter::default();
    engine
        .respond_with_observer(secret, challenge, &mut counter)
        .unwrap();
    counter.steps
}

#[test]
fn conformance_step_count_independent_of_secret_and_challenge() {
    let secrets = [
        Secret::new(2.5, 0.8, 12345),
        Secret::new(-999.0, 20.0, 0),
        Secret::new(999.0, 0.0, 1),
        Secret::new(0.0, 0.0, u32::MAX),
        Secret::new(1e-30, 3.0, 7),
    ];
    let challenges = [
        vec![0.0; CHALLENGE_LENGTH],
        vec![1000.0; CHALLENGE_LENGTH],
        generate_challenge(&mut Xorshift32::new(11), CHALLENGE_LENGTH),
    ];
    for (variant, expected) in [(Variant::Baseline, 50), (Variant::Hardened, 200)] {
        let engine = Engine::new(variant);
        for secret in &secrets {
            for challenge in &challenges {
                assert_eq!(
                    count(&engine, secret, challenge),
                    expected,
                    "{variant:?} step count drifted"
                );
            }
        }
    }
}

#[test]
fn conformance_step_count_scales_with_length_only() {
    let secret = Secret::new(2.5, 0.8, 1);
    for length in [1, 5, 10, 25, 50, 100, 200] {
        let config = EngineConfig {
            challenge_length: length,
            ..EngineConfig::new(Variant::Hardened)
        };
        let engine = Engine::with_config(config).unwrap();
        assert_eq!(count(&engine, &secret, &vec![0.5; length]), 200);

        let config = EngineConfig {
            challenge_length: length,
            ..EngineConfig::new(Variant::Baseline)
        };
        let engine = Engine::with_config(config).unwrap();
        assert_eq!(count(&engine, &secret, &vec![0.5; length]), length);
    }
}

/// A budget the length does not divide is rejected, never truncated.
#[test]
fn conformance_indivisible_budget_rejected() {
    for length in [3, 7, 30, 201] {
        let config = EngineConfig {
            challenge_length: length,
            ..EngineConfig::new(Variant::Hardened)
        };
        assert!(matches!(
            Engine::with_config(config),
            Err(AuthError::InvalidConfig(_))
        ));
    }
}

/// Rejected inputs run no ticks at all.
#[test]
fn conformance_rejected_input_runs_no_steps() {
    let engine = Engine::new(Variant::Hardened);
    let mut counter = StepCounter::default();
    let result = engine.respond_with_observer(
        &Secret::new(f32::NAN, 0.8, 1),
        &vec![0.5; CHALLENGE_LENGTH],
        &mut counter,
    );
    assert!(result.is_err());
    assert_eq!(counter.steps, 0);
}
